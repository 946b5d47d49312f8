pub mod invoices;
pub mod timestamps;
pub mod workers;

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, Responder};

const INDEX_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Time Clock</title></head>
<body>
    <h1>Time Clock</h1>
    <ul>
        <li><a href="/register">Register a worker</a></li>
        <li><a href="/invoice">Generate an invoice</a></li>
    </ul>
</body>
</html>"#;

/// Landing page
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(INDEX_PAGE)
}
