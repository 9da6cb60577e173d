//! Query parameter types shared by handler modules.

use serde::Deserialize;

/// `?searchQuery=` for the streetcode filter search. A missing query
/// matches every published streetcode.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterParams {
    #[serde(default)]
    pub search_query: String,
}

/// `?title=&page=&amount=` for the toponym listing. `page` is 1-based and
/// `amount` is the page size; both are optional.
#[derive(Debug, Deserialize)]
pub struct ToponymParams {
    pub title: Option<String>,
    pub page: Option<usize>,
    pub amount: Option<usize>,
}
