// templates/pages/agents.rs

use crate::domain::AgentRecord;
use crate::favorites::FavoritesStore;
use crate::query::{AgentFilter, SortKey};
use crate::templates::components::{agent_card, empty_state};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct AgentsVm<'a> {
    pub filter: &'a AgentFilter,
    pub results: &'a [AgentRecord],
    pub specialties: Vec<String>,
}

pub fn agents_page(vm: &AgentsVm, favorites: &FavoritesStore) -> Markup {
    let filter = vm.filter;

    desktop_layout(
        "Meet Our Agents",
        favorites.count(),
        html! {
            main class="container" {
                header class="page-header" {
                    h1 { "Meet Our Agents" }
                    p { "Connect with experienced real estate professionals dedicated to helping you find your perfect home" }
                }

                form method="get" action="/agents" class="agent-filters" {
                    label for="search" { "Search Agents" }
                    input type="text" name="search" id="search"
                        placeholder="Search by name or expertise..." value=(filter.search);

                    label for="specialty" { "Specialty" }
                    select name="specialty" id="specialty" {
                        option value="All Specialties" selected[filter.specialty.is_none()] { "All Specialties" }
                        @for s in &vm.specialties {
                            option value=(s) selected[filter.specialty.as_deref() == Some(s.as_str())] { (s) }
                        }
                    }

                    label for="sort" { "Sort By" }
                    select name="sort" id="sort" {
                        @for key in SortKey::AGENT_KEYS {
                            option value=(key.as_token()) selected[filter.sort == key] { (key.label()) }
                        }
                    }

                    button type="submit" class="primary" { "Apply" }
                }

                p class="result-count" { (vm.results.len()) " agents" }

                @if vm.results.is_empty() {
                    (empty_state("No agents found", "Try a different name or specialty.", Some(("/agents", "Show all agents"))))
                } @else {
                    div class="agent-grid" {
                        @for agent in vm.results {
                            (agent_card(agent))
                        }
                    }
                }
            }
        },
    )
}
