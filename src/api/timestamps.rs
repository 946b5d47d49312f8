use actix_web::{HttpResponse, Responder, web};
use chrono::Utc;
use serde::Deserialize;
use sqlx::SqlitePool;
use utoipa::IntoParams;

use crate::model::attendance::Attendance;
use crate::model::worker::Worker;

#[derive(Deserialize, IntoParams)]
pub struct ScanQuery {
    /// Badge uid as read by the scanner
    pub uid: String,
}

/// Badge-scan endpoint. One scan checks the worker in, the next one checks
/// them out. The reader firmware matches on the `message` tokens, so they
/// must stay `entry_registered` / `exit_registered`.
#[utoipa::path(
    post,
    path = "/timestamps",
    params(ScanQuery),
    responses(
        (status = 200, description = "Scan recorded", body = Object, example = json!({
            "message": "entry_registered"
        })),
        (status = 404, description = "Uid not registered", body = Object, example = json!({
            "message": "uid not registered"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn record_scan(
    pool: web::Data<SqlitePool>,
    query: web::Query<ScanQuery>,
) -> actix_web::Result<impl Responder> {
    let worker = sqlx::query_as::<_, Worker>("SELECT id, uid, name FROM workers WHERE uid = ?")
        .bind(&query.uid)
        .fetch_optional(pool.get_ref())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, uid = %query.uid, "Failed to look up worker");
            actix_web::error::ErrorInternalServerError("Internal Server Error")
        })?;

    if worker.is_none() {
        return Ok(HttpResponse::NotFound().json(serde_json::json!({
            "message": "uid not registered"
        })));
    }

    // At most one open interval per worker at a time
    let open = sqlx::query_as::<_, Attendance>(
        "SELECT id, uid, entry_time, exit_time FROM attendance WHERE uid = ? AND exit_time IS NULL",
    )
    .bind(&query.uid)
    .fetch_optional(pool.get_ref())
    .await
    .map_err(|e| {
        tracing::error!(error = %e, uid = %query.uid, "Failed to look up open attendance");
        actix_web::error::ErrorInternalServerError("Internal Server Error")
    })?;

    match open {
        Some(record) => {
            sqlx::query("UPDATE attendance SET exit_time = ? WHERE id = ?")
                .bind(Utc::now())
                .bind(record.id)
                .execute(pool.get_ref())
                .await
                .map_err(|e| {
                    tracing::error!(error = %e, uid = %query.uid, "Check-out failed");
                    actix_web::error::ErrorInternalServerError("Internal Server Error")
                })?;

            Ok(HttpResponse::Ok().json(serde_json::json!({
                "message": "exit_registered"
            })))
        }
        None => {
            sqlx::query("INSERT INTO attendance (uid, entry_time) VALUES (?, ?)")
                .bind(&query.uid)
                .bind(Utc::now())
                .execute(pool.get_ref())
                .await
                .map_err(|e| {
                    tracing::error!(error = %e, uid = %query.uid, "Check-in failed");
                    actix_web::error::ErrorInternalServerError("Internal Server Error")
                })?;

            Ok(HttpResponse::Ok().json(serde_json::json!({
                "message": "entry_registered"
            })))
        }
    }
}
