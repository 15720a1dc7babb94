use chrono::{Datelike, Utc};
use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, favorites_count: usize, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | EstateHub" }
                link rel="icon" href="/static/favicon/favicon.ico";
                link rel="stylesheet" href="/static/main.css";
            }
            body {
              header class="flex items-center justify-between px-6 py-3 shadow" {
                  a href="/" class="logo" {
                      svg
                          xmlns="http://www.w3.org/2000/svg"
                          width="24"
                          height="24"
                          viewBox="0 0 24 24"
                          fill="none"
                          stroke="#524ed2"
                          stroke-width="2"
                          stroke-linecap="round"
                          stroke-linejoin="round"
                          class="icon icon-tabler icon-tabler-home"
                      {
                          path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                          path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                          path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                          path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                      }
                      span { "EstateHub" }
                  }
                  nav {
                      ul {
                          li { a href="/properties" { "Properties" } }
                          li { a href="/agents" { "Agents" } }
                          li { a href="/mortgage" { "Mortgage Calculator" } }
                          li {
                              a href="/favorites" {
                                  "Favorites"
                                  @if favorites_count > 0 {
                                      span class="badge" id="favorites-count" { (favorites_count) }
                                  }
                              }
                          }
                      }
                  }
              }
                (content)
                footer {
                    nav {
                        a href="/properties" { "Properties" }
                        a href="/agents" { "Find an Agent" }
                        a href="/mortgage" { "Mortgage Calculator" }
                    }
                    p { "© " (Utc::now().year()) " EstateHub. All rights reserved." }
                }
            }
        }
    }
}
