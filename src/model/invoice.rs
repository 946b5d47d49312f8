use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Immutable record of one invoice generation.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Invoice {
    pub id: i64,
    pub name: String,
    #[schema(value_type = String, format = "date-time")]
    pub start_date: DateTime<Utc>,
    #[schema(value_type = String, format = "date-time")]
    pub end_date: DateTime<Utc>,
    pub total_hours: f64,
    pub total_amount: f64,
    #[schema(value_type = String, format = "date-time")]
    pub created_at: DateTime<Utc>,
}
