use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, Responder, web};
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::Deserialize;
use sqlx::SqlitePool;
use utoipa::ToSchema;

use crate::billing::{self, ClosedInterval};
use crate::model::attendance::Attendance;
use crate::model::invoice::Invoice;
use crate::model::worker::Worker;

const INVOICE_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Generate invoice</title></head>
<body>
    <h1>Generate invoice</h1>
    <form method="post" action="/invoice">
        <label>Worker name: <input type="text" name="name" required></label><br>
        <label>Start date: <input type="date" name="start_date" required></label><br>
        <label>End date: <input type="date" name="end_date" required></label><br>
        <label>Rate per hour: <input type="number" step="0.01" name="rate_per_hour" required></label><br>
        <button type="submit">Generate</button>
    </form>
</body>
</html>"#;

#[derive(Deserialize, ToSchema)]
pub struct InvoiceForm {
    #[schema(example = "John Doe")]
    pub name: String,
    #[schema(example = "2024-05-01", format = "date")]
    pub start_date: String,
    #[schema(example = "2024-05-31", format = "date")]
    pub end_date: String,
    #[schema(example = 40.0)]
    pub rate_per_hour: f64,
}

/// Invoice form
pub async fn invoice_form() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(INVOICE_PAGE)
}

// Form dates carry no time of day; both window bounds are UTC midnight of
// the given date.
fn parse_window_bound(value: &str) -> Option<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()?;
    Some(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)))
}

#[utoipa::path(
    post,
    path = "/invoice",
    request_body(content = InvoiceForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Invoice generated, HTML result page"),
        (status = 400, description = "Invalid date format", body = Object, example = json!({
            "message": "invalid date format"
        })),
        (status = 404, description = "Worker name unknown", body = Object, example = json!({
            "message": "worker not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Invoices"
)]
pub async fn generate_invoice(
    pool: web::Data<SqlitePool>,
    form: web::Form<InvoiceForm>,
) -> actix_web::Result<impl Responder> {
    let worker = sqlx::query_as::<_, Worker>("SELECT id, uid, name FROM workers WHERE name = ?")
        .bind(&form.name)
        .fetch_optional(pool.get_ref())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, name = %form.name, "Failed to look up worker");
            actix_web::error::ErrorInternalServerError("Internal Server Error")
        })?;

    let worker = match worker {
        Some(w) => w,
        None => {
            return Ok(HttpResponse::NotFound().json(serde_json::json!({
                "message": "worker not found"
            })));
        }
    };

    let (start, end) = match (
        parse_window_bound(&form.start_date),
        parse_window_bound(&form.end_date),
    ) {
        (Some(start), Some(end)) => (start, end),
        _ => {
            return Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "message": "invalid date format"
            })));
        }
    };

    // A NULL exit_time fails the comparison, so open intervals are not
    // billable yet.
    let records = sqlx::query_as::<_, Attendance>(
        r#"
        SELECT id, uid, entry_time, exit_time
        FROM attendance
        WHERE uid = ? AND exit_time >= ? AND entry_time <= ?
        "#,
    )
    .bind(&worker.uid)
    .bind(start)
    .bind(end)
    .fetch_all(pool.get_ref())
    .await
    .map_err(|e| {
        tracing::error!(error = %e, uid = %worker.uid, "Failed to fetch attendance");
        actix_web::error::ErrorInternalServerError("Internal Server Error")
    })?;

    let intervals: Vec<ClosedInterval> = records
        .into_iter()
        .filter_map(|r| {
            r.exit_time.map(|exit| ClosedInterval {
                entry: r.entry_time,
                exit,
            })
        })
        .collect();

    let total_hours = billing::billable_hours(&intervals, start, end);
    let total_amount = billing::invoice_amount(total_hours, form.rate_per_hour);

    let result = sqlx::query(
        r#"
        INSERT INTO invoices (name, start_date, end_date, total_hours, total_amount, created_at)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&form.name)
    .bind(start)
    .bind(end)
    .bind(total_hours)
    .bind(total_amount)
    .bind(Utc::now())
    .execute(pool.get_ref())
    .await
    .map_err(|e| {
        tracing::error!(error = %e, name = %form.name, "Failed to store invoice");
        actix_web::error::ErrorInternalServerError("Internal Server Error")
    })?;

    let invoice = sqlx::query_as::<_, Invoice>(
        r#"
        SELECT id, name, start_date, end_date, total_hours, total_amount, created_at
        FROM invoices
        WHERE id = ?
        "#,
    )
    .bind(result.last_insert_rowid())
    .fetch_one(pool.get_ref())
    .await
    .map_err(|e| {
        tracing::error!(error = %e, name = %form.name, "Failed to read back invoice");
        actix_web::error::ErrorInternalServerError("Internal Server Error")
    })?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render_invoice(&invoice)))
}

fn render_invoice(invoice: &Invoice) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>Invoice</title></head>
<body>
    <h1>Invoice for {name}</h1>
    <p>Period: {start} to {end}</p>
    <p>Total hours: {hours:.2}</p>
    <p>Total amount: {amount:.2}</p>
    <a href="/">Back</a>
</body>
</html>"#,
        name = invoice.name,
        start = invoice.start_date.format("%Y-%m-%d"),
        end = invoice.end_date.format("%Y-%m-%d"),
        hours = invoice.total_hours,
        amount = invoice.total_amount,
    )
}
