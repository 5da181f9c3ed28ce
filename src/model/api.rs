use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned for 400 and 500 responses.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}
