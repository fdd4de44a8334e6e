use serde::{Deserialize, Deserializer, Serialize};
use serde_aux::prelude::*;
use validator::Validate;

/// Pagination query parameters shared by every list endpoint.
///
/// Pages are 1-based. Both values arrive as query-string text and are
/// coerced before range checks run.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct PageParams {
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    #[validate(range(min = 1, message = "page must be at least 1"))]
    pub page: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    pub limit: Option<u32>,
}

impl PageParams {
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1)
    }

    pub fn limit(&self) -> u32 {
        self.limit.unwrap_or(10)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, page: u32, limit: u32) -> Self {
        let total_pages = ((total as f64) / (limit as f64)).ceil() as u32;
        Self {
            items,
            pagination: Pagination {
                total,
                page,
                limit,
                total_pages,
            },
        }
    }
}

/// Distinguish an absent key from an explicit JSON `null`.
///
/// Pair with `#[serde(default)]` on an `Option<Option<T>>` field: an absent
/// key stays `None` (keep the stored value), `null` becomes `Some(None)`
/// (clear the column) and a value becomes `Some(Some(v))`.
pub fn deserialize_double_option<'de, T, D>(
    deserializer: D,
) -> Result<Option<Option<T>>, D::Error>
where
    T: serde::Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Coerce textual booleans from query strings; accepts `true/false/1/0`.
pub fn deserialize_option_bool_from_string<'de, D>(
    deserializer: D,
) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)?.as_deref() {
        None => Ok(None),
        Some("true" | "1") => Ok(Some(true)),
        Some("false" | "0") => Ok(Some(false)),
        Some(other) => Err(serde::de::Error::custom(format!(
            "invalid boolean `{other}`, expected true/false/1/0"
        ))),
    }
}
