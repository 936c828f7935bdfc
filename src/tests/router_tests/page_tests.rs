use crate::errors::ServerError;
use crate::responses::error_to_response;
use crate::router::handle;
use crate::tests::utils::{body_string, data_rows, get, StaticSource};
use astra::Body;
use http::{Method, Request};

#[test]
fn programs_page_renders_shell_without_fetching() {
    let source = StaticSource::numbered(3);

    let resp = handle(get("/"), &source).expect("Failed to handle request");

    assert_eq!(resp.status(), 200);
    let html = body_string(resp);
    assert!(html.contains("<h1>Programs</h1>"));
    assert!(html.contains("Add Program"));
    assert!(html.contains(r#"placeholder="Search by Title""#));
    assert!(html.contains(r#"id="programs-table""#));
    assert!(html.contains(r#"class="spinner""#));
    assert_eq!(source.calls.get(), 0);
}

#[test]
fn programs_page_forwards_table_parameters() {
    let source = StaticSource::numbered(3);

    let resp = handle(get("/?q=grant&rows=10&page=1"), &source).unwrap();

    let html = body_string(resp);
    assert!(html.contains(r#"hx-get="/programs/table?q=grant&amp;rows=10&amp;page=1""#));
}

#[test]
fn full_page_renders_table_in_place() {
    let source = StaticSource::numbered(12);

    let resp = handle(get("/programs?q=grant&rows=10&page=1"), &source).unwrap();

    assert_eq!(resp.status(), 200);
    let html = body_string(resp);
    assert!(html.contains("<h1>Programs</h1>"));
    assert!(html.contains(r#"value="grant""#));
    assert!(html.contains(r#"<input type="hidden" id="search-rows" name="rows" value="10">"#));
    assert_eq!(data_rows(&html), 2);
    assert!(html.contains("Page 2 of 2"));
    assert!(!html.contains(r#"hx-trigger="load""#));
    assert_eq!(source.calls.get(), 1);
}

#[test]
fn shell_falls_back_to_full_page_without_scripts() {
    let resp = handle(get("/?q=grant&rows=10"), &StaticSource::numbered(0)).unwrap();

    let html = body_string(resp);
    assert!(html.contains(r#"<a href="/programs?q=grant&amp;rows=10">Show programs</a>"#));
    assert!(html.contains(r#"action="/programs""#));
}

#[test]
fn full_page_rejects_bad_parameters_before_fetching() {
    let source = StaticSource::numbered(3);

    let err = handle(get("/programs?rows=50"), &source).unwrap_err();

    assert!(matches!(err, ServerError::BadRequest(_)));
    assert_eq!(source.calls.get(), 0);
}

#[test]
fn health_check_answers_ok() {
    let resp = handle(get("/health"), &StaticSource::numbered(0)).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(body_string(resp), "ok");
}

#[test]
fn unknown_route_is_not_found() {
    let err = handle(get("/admin"), &StaticSource::numbered(0)).unwrap_err();
    assert_eq!(err, ServerError::NotFound);
}

#[test]
fn add_program_has_no_backing_route() {
    let req = Request::builder()
        .method(Method::POST)
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let err = handle(req, &StaticSource::numbered(0)).unwrap_err();
    assert_eq!(err, ServerError::NotFound);
}

#[test]
fn bad_page_parameter_is_bad_request() {
    let err = handle(get("/?page=abc"), &StaticSource::numbered(0)).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn errors_become_html_pages_with_status() {
    let not_found = error_to_response(ServerError::NotFound);
    assert_eq!(not_found.status(), 404);

    let bad = error_to_response(ServerError::BadRequest("invalid page: abc".to_string()));
    assert_eq!(bad.status(), 400);
    let html = body_string(bad);
    assert!(html.contains("<h1>Error 400</h1>"));
    assert!(html.contains("invalid page: abc"));
}
