use crate::catalog::Catalog;
use crate::errors::ServerError;
use crate::responses::{html_response, json_response, see_other, stylesheet_response, ResultResp};
use crate::templates::{self, ListingFormVm};
use astra::Request;

pub fn handle(req: Request, catalog: &Catalog) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => html_response(templates::pages::listings_page(
            catalog,
            &ListingFormVm::default(),
        )),

        ("GET", "/listings.json") => match catalog {
            Catalog::Loaded(listings) => json_response(listings),
            Catalog::NotLoaded => Err(ServerError::Unavailable("listings not loaded".into())),
        },

        ("POST", "/listing-form/reset") => reset_form(&req),

        ("GET", "/static/main.css") => stylesheet_response(),

        (_, "/" | "/listings.json" | "/listing-form/reset" | "/static/main.css") => {
            Err(ServerError::MethodNotAllowed)
        }

        _ => Err(ServerError::NotFound),
    }
}

/// Whatever was typed is discarded; the form comes back with its defaults.
fn reset_form(req: &Request) -> ResultResp {
    if is_htmx(req) {
        html_response(templates::listing_form(&ListingFormVm::default()))
    } else {
        see_other("/")
    }
}

fn is_htmx(req: &Request) -> bool {
    req.headers()
        .get("HX-Request")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}
