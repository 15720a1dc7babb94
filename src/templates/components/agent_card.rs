use crate::domain::AgentRecord;
use crate::templates::components::property_card::url_escape;
use maud::{html, Markup};

pub fn agent_card(agent: &AgentRecord) -> Markup {
    html! {
        article class="agent-card" {
            @if let Some(image) = &agent.image {
                img src=(image) alt=(agent.name) loading="lazy";
            }
            h3 { a href=(format!("/agents/{}", url_escape(&agent.id))) { (agent.name) } }
            @if !agent.role.is_empty() {
                p class="role" { (agent.role) }
            }
            ul class="tags" {
                @for specialty in &agent.specialties {
                    li { (specialty) }
                }
            }
            dl class="stats" {
                dt { "Experience" } dd { (agent.years_experience) " yrs" }
                dt { "Rating" } dd { (format!("{:.1}", agent.rating)) }
                dt { "Active" } dd { (agent.active_listings) }
                dt { "Sold" } dd { (agent.properties_sold) }
            }
        }
    }
}
