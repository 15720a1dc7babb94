// templates/pages/properties.rs

use crate::domain::{ListingRecord, ListingStatus, PropertyType};
use crate::favorites::FavoritesStore;
use crate::query::{ListingFilter, SortKey, PRICE_BUCKETS};
use crate::templates::components::{empty_state, property_card};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct PropertiesVm<'a> {
    pub filter: &'a ListingFilter,
    pub results: &'a [ListingRecord],
    pub cities: Vec<String>,
    pub catalog_size: usize,
}

pub fn properties_page(vm: &PropertiesVm, favorites: &FavoritesStore) -> Markup {
    desktop_layout(
        "Browse Properties",
        favorites.count(),
        html! {
            main class="container properties-layout" {
                header class="page-header" {
                    h1 { "Browse Properties" }
                    p { "Explore our collection of " (vm.catalog_size) "+ premium properties" }
                }

                (filters_sidebar(vm))

                section class="results" {
                    p class="result-count" id="result-count" {
                        "Showing " strong { (vm.results.len()) } " of " (vm.catalog_size) " properties"
                    }

                    @if vm.results.is_empty() {
                        (empty_state(
                            "No properties found",
                            "Try adjusting your filters or search term.",
                            Some(("/properties", "Clear All Filters")),
                        ))
                    } @else {
                        div class="property-grid" {
                            @for listing in vm.results {
                                (property_card(listing, favorites))
                            }
                        }
                    }
                }
            }
        },
    )
}

fn filters_sidebar(vm: &PropertiesVm) -> Markup {
    let filter = vm.filter;
    let active = filter.active_filter_count();

    html! {
        aside class="filters" {
            div class="filters-header" {
                h2 { "Filters" }
                @if active > 0 {
                    span class="badge" { (active) " active" }
                }
                a href="/properties" { "Clear All" }
            }

            form method="get" action="/properties" {
                label for="search" { "Search" }
                input type="text" name="search" id="search"
                    placeholder="Search by title or address" value=(filter.search);

                label for="city" { "City" }
                select name="city" id="city" {
                    option value="All Cities" selected[filter.city.is_none()] { "All Cities" }
                    @for city in &vm.cities {
                        option value=(city) selected[filter.city.as_deref() == Some(city.as_str())] { (city) }
                    }
                }

                label for="type" { "Property Type" }
                select name="type" id="type" {
                    option value="All Types" selected[filter.property_type.is_none()] { "All Types" }
                    @for t in PropertyType::ALL {
                        option value=(t.label())
                            selected[filter.property_type.as_deref().is_some_and(|name| t.matches_name(name))]
                        { (t.label()) }
                    }
                }

                label for="priceRange" { "Price Range" }
                select name="priceRange" id="priceRange" {
                    @for (index, bucket) in PRICE_BUCKETS.iter().enumerate() {
                        option value=(bucket.token) selected[filter.price_bucket == index] { (bucket.label) }
                    }
                }

                label for="bedrooms" { "Bedrooms" }
                select name="bedrooms" id="bedrooms" {
                    option value="" selected[filter.min_bedrooms.is_none()] { "Any" }
                    @for n in 1..=5u32 {
                        option value=(n) selected[filter.min_bedrooms == Some(n)] { (n) "+" }
                    }
                }

                label for="status" { "Status" }
                select name="status" id="status" {
                    option value="" selected[filter.status.is_none()] { "Any Status" }
                    @for status in ListingStatus::ALL {
                        option value=(status.as_token()) selected[filter.status == Some(status)] { (status.label()) }
                    }
                }

                label for="sort" { "Sort By" }
                select name="sort" id="sort" {
                    @for key in SortKey::LISTING_KEYS {
                        option value=(key.as_token()) selected[filter.sort == key] { (key.label()) }
                    }
                }

                button type="submit" class="primary" { "Apply" }
            }
        }
    }
}
