use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Attendance {
    pub id: i64,
    pub uid: String,
    #[schema(value_type = String, format = "date-time")]
    pub entry_time: DateTime<Utc>,
    /// NULL while the worker is still checked in
    #[schema(value_type = Option<String>, format = "date-time")]
    pub exit_time: Option<DateTime<Utc>>,
}
