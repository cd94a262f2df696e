use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Named envelope around list payloads.
///
/// List endpoints never return a bare JSON array so the response can gain
/// sibling fields (counts, paging) without breaking existing clients.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct DataEnvelope<T> {
    pub data: Vec<T>,
}

impl<T> DataEnvelope<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }
}
