use crate::catalog::Catalog;
use crate::router::handle;
use crate::tests::utils::body_string;
use astra::Body;
use http::{Method, Request};

fn reset_request(htmx: bool) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri("/listing-form/reset")
        .header("Content-Type", "application/x-www-form-urlencoded");

    if htmx {
        builder = builder.header("HX-Request", "true");
    }

    builder
        .body(Body::from(
            "title=Cozy+cabin&price=140&description=Near+the+woods"
                .as_bytes()
                .to_vec(),
        ))
        .unwrap()
}

#[test]
fn page_form_starts_with_defaults() {
    let req = Request::builder()
        .method(Method::GET)
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let body = body_string(handle(req, &Catalog::NotLoaded).unwrap());

    assert!(body.contains(r#"id="input-title" name="title" class="form-control" value="""#));
    assert!(body.contains(r#"value="80""#));
    assert!(body.contains(r#"id="btnCancel""#));
}

#[test]
fn cancel_returns_reset_fragment_for_htmx() {
    let resp = handle(reset_request(true), &Catalog::NotLoaded).expect("Handler failed");

    assert_eq!(resp.status(), 200);

    let body = body_string(resp);

    assert!(body.contains(r#"id="listing-form""#));
    assert!(body.contains(r#"value="80""#));
    assert!(!body.contains("Cozy cabin"));
    assert!(!body.contains("Near the woods"));

    // Fragment only, so htmx can swap it in place
    assert!(!body.contains("<!DOCTYPE html>"));
    assert!(!body.contains("<html"));
}

#[test]
fn cancel_without_htmx_redirects_home() {
    let resp = handle(reset_request(false), &Catalog::NotLoaded).expect("Handler failed");

    assert_eq!(resp.status(), 303);
    assert_eq!(
        resp.headers().get("Location").unwrap().to_str().unwrap(),
        "/"
    );
}

#[test]
fn cancel_requires_post() {
    let req = Request::builder()
        .method(Method::GET)
        .uri("/listing-form/reset")
        .body(Body::empty())
        .unwrap();

    let err = handle(req, &Catalog::NotLoaded).unwrap_err();

    assert_eq!(err.status(), 405);
}
