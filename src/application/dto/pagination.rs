use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Number of pages a filter spans at a given page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageCountDto {
    pub page_number: u64,
}
