use actix_web::http::header::{ContentType, LOCATION};
use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use sqlx::SqlitePool;
use utoipa::ToSchema;

use crate::model::worker::Worker;

const REGISTER_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Register worker</title></head>
<body>
    <h1>Register worker</h1>
    <form method="post" action="/register">
        <label>Badge uid: <input type="text" name="uid" required></label><br>
        <label>Name: <input type="text" name="name" required></label><br>
        <button type="submit">Register</button>
    </form>
</body>
</html>"#;

#[derive(Deserialize, ToSchema)]
pub struct RegisterForm {
    #[schema(example = "04A1B2C3")]
    pub uid: String,
    #[schema(example = "John Doe")]
    pub name: String,
}

/// Registration form
pub async fn register_form() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(REGISTER_PAGE)
}

#[utoipa::path(
    post,
    path = "/register",
    request_body(content = RegisterForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Worker registered, redirects to the landing page"),
        (status = 400, description = "Uid already registered", body = Object, example = json!({
            "message": "uid already registered"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Workers"
)]
pub async fn register_worker(
    pool: web::Data<SqlitePool>,
    form: web::Form<RegisterForm>,
) -> actix_web::Result<impl Responder> {
    let existing = sqlx::query_as::<_, Worker>("SELECT id, uid, name FROM workers WHERE uid = ?")
        .bind(&form.uid)
        .fetch_optional(pool.get_ref())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, uid = %form.uid, "Failed to look up worker");
            actix_web::error::ErrorInternalServerError("Internal Server Error")
        })?;

    if existing.is_some() {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "message": "uid already registered"
        })));
    }

    sqlx::query("INSERT INTO workers (uid, name) VALUES (?, ?)")
        .bind(&form.uid)
        .bind(&form.name)
        .execute(pool.get_ref())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, uid = %form.uid, "Failed to register worker");
            actix_web::error::ErrorInternalServerError("Internal Server Error")
        })?;

    Ok(HttpResponse::Found()
        .insert_header((LOCATION, "/"))
        .finish())
}

/// Uid lookup for the badge reader. Always 200; the reader parses the
/// `message` field to decide whether the badge is known.
#[utoipa::path(
    get,
    path = "/check_uid/{uid}",
    params(
        ("uid", description = "Badge uid")
    ),
    responses(
        (status = 200, description = "Lookup result", body = Object, example = json!({
            "message": "uid registered",
            "name": "John Doe"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Workers"
)]
pub async fn check_uid(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> actix_web::Result<impl Responder> {
    let uid = path.into_inner();

    let worker = sqlx::query_as::<_, Worker>("SELECT id, uid, name FROM workers WHERE uid = ?")
        .bind(&uid)
        .fetch_optional(pool.get_ref())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, uid = %uid, "Failed to look up worker");
            actix_web::error::ErrorInternalServerError("Internal Server Error")
        })?;

    match worker {
        Some(w) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "message": "uid registered",
            "name": w.name
        }))),
        None => Ok(HttpResponse::Ok().json(serde_json::json!({
            "message": "uid not registered"
        }))),
    }
}
