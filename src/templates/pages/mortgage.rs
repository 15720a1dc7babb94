// templates/pages/mortgage.rs

use crate::favorites::FavoritesStore;
use crate::mortgage::{MortgageBreakdown, MortgageError, MortgageParams};
use crate::templates::components::mortgage_breakdown;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn mortgage_page(
    params: &MortgageParams,
    result: &Result<MortgageBreakdown, MortgageError>,
    favorites: &FavoritesStore,
) -> Markup {
    desktop_layout(
        "Mortgage Calculator",
        favorites.count(),
        html! {
            main class="container" {
                h1 { "Mortgage Calculator" }
                p class="muted" { "Estimates only. Your actual rate and payment will depend on your lender." }
                (mortgage_breakdown(params, result))
            }
        },
    )
}
