use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub(super) struct SearchCustomerQuery {
    // page size is left to the processor's default
    pub query: String,
}

#[derive(Deserialize)]
pub(super) struct SearchResult<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub next_page: Option<String>,
}

#[derive(Deserialize)]
pub(super) struct ApiErrorDetail {
    #[serde(rename = "type")]
    pub type_: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Deserialize)]
pub(super) struct ApiErrorBody {
    pub error: ApiErrorDetail,
}
