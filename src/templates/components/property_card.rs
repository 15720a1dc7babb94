use crate::domain::ListingRecord;
use crate::favorites::FavoritesStore;
use crate::templates::components::format::{group_thousands, usd_whole};
use maud::{html, Markup};

pub fn favorite_button(listing_id: &str, is_favorite: bool) -> Markup {
    let label = if is_favorite {
        "Remove from favorites"
    } else {
        "Save to favorites"
    };

    html! {
        form method="post" action=(format!("/favorites/toggle?id={}", url_escape(listing_id))) class="favorite-form" {
            button.favorite-btn.is-favorite[is_favorite]
                type="submit"
                aria-pressed=(if is_favorite { "true" } else { "false" })
                aria-label=(label)
                title=(label)
            {
                @if is_favorite { "♥" } @else { "♡" }
            }
        }
    }
}

pub fn property_card(listing: &ListingRecord, favorites: &FavoritesStore) -> Markup {
    let href = format!("/properties/{}", url_escape(&listing.id));

    html! {
        article class="property-card" {
            div class="property-card-media" {
                @if let Some(image) = &listing.image {
                    img src=(image) alt=(listing.title) loading="lazy";
                }
                span class=(format!("status-badge status-{}", listing.status.as_token())) {
                    (listing.status.label())
                }
                (favorite_button(&listing.id, favorites.is_favorite(&listing.id)))
            }
            div class="property-card-body" {
                p class="price" { (usd_whole(listing.price)) }
                h3 { a href=(href) { (listing.title) } }
                p class="address" { (listing.address) ", " (listing.city) }
                ul class="facts" {
                    li { (listing.bedrooms) " beds" }
                    li { (listing.bathrooms) " baths" }
                    li { (group_thousands(u64::from(listing.sqft))) " sqft" }
                }
            }
        }
    }
}

pub(crate) fn url_escape(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}
