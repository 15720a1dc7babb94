// templates/pages/favorites.rs

use crate::domain::ListingRecord;
use crate::favorites::FavoritesStore;
use crate::templates::components::{empty_state, property_card};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn favorites_page(listings: &[ListingRecord], favorites: &FavoritesStore) -> Markup {
    let count = favorites.count();

    desktop_layout(
        "My Favorites",
        count,
        html! {
            main class="container" {
                header class="page-header" {
                    h1 { "My Favorites" }
                    p id="favorites-total" {
                        (count) @if count == 1 { " saved property" } @else { " saved properties" }
                    }
                    @if count > 0 {
                        form method="post" action="/favorites/clear" {
                            button type="submit" class="danger" { "Clear All" }
                        }
                    }
                }

                @if listings.is_empty() {
                    (empty_state(
                        "No favorites yet",
                        "Tap the heart on any property to save it here.",
                        Some(("/properties", "Browse Properties")),
                    ))
                } @else {
                    div class="property-grid" {
                        @for listing in listings {
                            (property_card(listing, favorites))
                        }
                    }
                }
            }
        },
    )
}
