use maud::{html, Markup, DOCTYPE};

/// Standalone error page, rendered without the site layout.
pub fn error_page(status: u16, message: &str) -> Markup {
    let heading = match status {
        404 => "Page Not Found",
        400 => "Bad Request",
        _ => "Something Went Wrong",
    };

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Error " (status) " | EstateHub" }
                link rel="stylesheet" href="/static/main.css";
            }
            body class="error-page" {
                main class="container" {
                    p class="status-code" { (status) }
                    h1 { (heading) }
                    p { (message) }
                    p {
                        a href="/" { "← Back to home" }
                        " · "
                        a href="/properties" { "Browse properties" }
                    }
                }
            }
        }
    }
}
