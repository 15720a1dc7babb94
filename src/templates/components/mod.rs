use maud::{html, Markup};

pub mod agent_card;
pub mod format;
pub mod mortgage;
pub mod property_card;

pub use agent_card::agent_card;
pub use format::{usd, usd_whole};
pub use mortgage::{mortgage_breakdown, mortgage_estimate};
pub use property_card::{favorite_button, property_card};

/// Shown in place of a result grid when a query matches nothing.
pub fn empty_state(title: &str, hint: &str, action: Option<(&str, &str)>) -> Markup {
    html! {
        div class="empty-state" {
            h3 { (title) }
            p { (hint) }
            @if let Some((href, label)) = action {
                a class="btn" href=(href) { (label) }
            }
        }
    }
}
