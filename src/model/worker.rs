use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Worker {
    pub id: i64,
    #[schema(example = "04A1B2C3")]
    pub uid: String,
    #[schema(example = "John Doe")]
    pub name: String,
}
