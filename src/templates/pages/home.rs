// templates/pages/home.rs

use crate::domain::{ListingRecord, PropertyType};
use crate::favorites::FavoritesStore;
use crate::templates::{components::property_card, desktop_layout};
use maud::{html, Markup};

/// (label, query string) pairs for the quick-filter chips.
const QUICK_FILTERS: [(&str, &str); 4] = [
    ("For Sale", "status=for-sale"),
    ("For Rent", "status=for-rent"),
    ("$500K - $1M", "priceRange=500k-1m"),
    ("3+ Bedrooms", "bedrooms=3"),
];

pub fn home_page(featured: &[ListingRecord], favorites: &FavoritesStore) -> Markup {
    desktop_layout(
        "Find Your Dream Home",
        favorites.count(),
        html! {
            main class="container" {
                section class="hero" {
                    h1 { "Find Your Dream Home" }
                    p { "Search homes, condos and villas in the cities you love." }

                    form method="get" action="/properties" class="hero-search" {
                        label class="sr-only" for="type" { "Property type" }
                        select name="type" id="type" {
                            option value="All Types" { "All Types" }
                            @for t in PropertyType::ALL {
                                option value=(t.label()) { (t.label()) }
                            }
                        }
                        label class="sr-only" for="search" { "Location" }
                        input type="text" name="search" id="search" placeholder="Enter a title or address";
                        button type="submit" class="primary" { "Search" }
                    }

                    ul class="quick-filters" {
                        @for (label, query) in QUICK_FILTERS {
                            li { a href=(format!("/properties?{query}")) { (label) } }
                        }
                    }
                }

                section {
                    h2 { "Featured Properties" }
                    div class="property-grid" {
                        @for listing in featured {
                            (property_card(listing, favorites))
                        }
                    }
                    a href="/properties" class="btn" { "View All Properties" }
                }
            }
        },
    )
}
