// templates/pages/agent_detail.rs

use crate::domain::{AgentRecord, ListingRecord};
use crate::favorites::FavoritesStore;
use crate::templates::components::property_card;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn agent_detail_page(
    agent: &AgentRecord,
    listings: &[ListingRecord],
    favorites: &FavoritesStore,
) -> Markup {
    desktop_layout(
        &agent.name,
        favorites.count(),
        html! {
            main class="container agent-detail" {
                nav class="breadcrumbs" {
                    a href="/agents" { "← All agents" }
                }

                header class="agent-header" {
                    @if let Some(image) = &agent.image {
                        img src=(image) alt=(agent.name);
                    }
                    h1 { (agent.name) }
                    @if !agent.role.is_empty() {
                        p class="role" { (agent.role) }
                    }
                    ul class="tags" {
                        @for specialty in &agent.specialties {
                            li { (specialty) }
                        }
                    }
                }

                section class="stats" {
                    dl {
                        dt { "Years Experience" } dd { (agent.years_experience) }
                        dt { "Properties Sold" } dd { (agent.properties_sold) }
                        dt { "Active Listings" } dd { (agent.active_listings) }
                        dt { "Rating" } dd { (format!("{:.1}", agent.rating)) " (" (agent.reviews) " reviews)" }
                    }
                }

                section {
                    h2 { "About " (agent.name) }
                    p { (agent.bio) }
                }

                @if !agent.languages.is_empty() {
                    section {
                        h3 { "Languages" }
                        p { (agent.languages.join(", ")) }
                    }
                }

                @if !agent.certifications.is_empty() {
                    section {
                        h3 { "Certifications" }
                        ul {
                            @for cert in &agent.certifications {
                                li { (cert) }
                            }
                        }
                    }
                }

                section class="contact" {
                    h3 { "Contact" }
                    @if let Some(email) = &agent.email {
                        p { a href=(format!("mailto:{email}")) { (email) } }
                    }
                    @if let Some(phone) = &agent.phone {
                        p { a href=(format!("tel:{phone}")) { (phone) } }
                    }
                }

                @if !listings.is_empty() {
                    section {
                        h2 { (agent.name) "'s Listings" }
                        div class="property-grid" {
                            @for listing in listings {
                                (property_card(listing, favorites))
                            }
                        }
                    }
                }
            }
        },
    )
}
