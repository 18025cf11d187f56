use maud::{html, Markup, DOCTYPE};

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";
const HTMX_JS: &str = "https://unpkg.com/htmx.org@1.9.12";

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href=(BOOTSTRAP_CSS);
                link rel="stylesheet" href="/static/main.css";
                script src=(HTMX_JS) defer {}
            }
            body {
                header class="site-header shadow-sm mb-4" {
                    div class="container d-flex align-items-center justify-content-between py-3" {
                        a href="/" class="site-title" { "Rentals" }
                        nav {
                            a href="/listings.json" class="text-muted small" { "Raw data" }
                        }
                    }
                }
                (content)
            }
        }
    }
}
