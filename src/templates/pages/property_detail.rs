// templates/pages/property_detail.rs

use crate::domain::ListingRecord;
use crate::favorites::FavoritesStore;
use crate::templates::components::format::group_thousands;
use crate::templates::components::{favorite_button, mortgage_estimate, property_card, usd_whole};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn property_detail_page(
    listing: &ListingRecord,
    related: &[ListingRecord],
    favorites: &FavoritesStore,
) -> Markup {
    desktop_layout(
        &listing.title,
        favorites.count(),
        html! {
            main class="container property-detail" {
                nav class="breadcrumbs" {
                    a href="/" { "Home" } " / " a href="/properties" { "Properties" } " / " span { (listing.title) }
                }

                @if let Some(image) = &listing.image {
                    img class="hero-image" src=(image) alt=(listing.title);
                }

                header class="detail-header" {
                    span class=(format!("status-badge status-{}", listing.status.as_token())) {
                        (listing.status.label())
                    }
                    h1 { (listing.title) }
                    p class="address" { (listing.address) ", " (listing.city) }
                    p class="price" { (usd_whole(listing.price)) }
                    p class="muted" { (usd_whole(listing.price_per_sqft())) " per sqft" }
                    (favorite_button(&listing.id, favorites.is_favorite(&listing.id)))
                }

                section class="facts-grid" {
                    dl {
                        dt { "Bedrooms" } dd { (listing.bedrooms) }
                        dt { "Bathrooms" } dd { (listing.bathrooms) }
                        dt { "Square Feet" } dd { (group_thousands(u64::from(listing.sqft))) }
                        dt { "Year Built" } dd { (listing.year_built) }
                        dt { "Property Type" } dd { (listing.property_type.label()) }
                        dt { "City" } dd { (listing.city) }
                    }
                }

                @if let Some(description) = &listing.description {
                    section {
                        h2 { "About This Property" }
                        p { (description) }
                    }
                }

                @if let Some(location) = &listing.location {
                    section class="location" {
                        h2 { "Location" }
                        a href=(format!("https://www.openstreetmap.org/?mlat={}&mlon={}#map=15/{}/{}",
                                location.lat, location.lng, location.lat, location.lng))
                          rel="noopener" target="_blank"
                        { "View on map" }
                    }
                }

                (mortgage_estimate(listing.price))

                @if !related.is_empty() {
                    section class="related" {
                        h2 { "Similar Properties in " (listing.city) }
                        div class="property-grid" {
                            @for other in related {
                                (property_card(other, favorites))
                            }
                        }
                    }
                }
            }
        },
    )
}
