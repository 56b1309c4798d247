use actix_web::{HttpResponse, Responder};

const DASHBOARD_HTML: &str = include_str!("../../static/dashboard.html");

/// Dashboard page
///
/// The page only wires controls to the JSON API; all filtering happens
/// server-side.
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(DASHBOARD_HTML)
}
