//! mapping records as served by the mappings api
//!
//! GET /mappings-api?page=<n>&pageSize=<size>
//!     {"mappings": [...], "page": 1, "total_pages": 3, "total_count": 250}
//!
//! field names are part of the wire contract; do not rename them.

use serde::{Deserialize, Deserializer, Serialize};

// ==============================================================================
// types
// ==============================================================================

/// one stored short url plus its usage analytics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingRecord {
    /// short identifier
    pub short_url: String,
    /// target the short identifier redirects to
    pub original_url: String,
    /// visit count
    pub count: u64,
    /// device of the last visit, if recorded
    #[serde(default)]
    pub device: Option<String>,
    /// operating system of the last visit, if recorded
    #[serde(default)]
    pub os: Option<String>,
}

/// one page of mapping records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingPage {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub mappings: Vec<MappingRecord>,
    /// 1-based page number this page was served for
    pub page: u32,
    pub total_pages: u32,
    pub total_count: u64,
}

impl MappingRecord {
    /// device, treating an empty string like a missing value
    pub fn device(&self) -> Option<&str> {
        non_empty(&self.device)
    }

    /// operating system, treating an empty string like a missing value
    pub fn os(&self) -> Option<&str> {
        non_empty(&self.os)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

// go-style backends encode an empty slice as null
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<MappingRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<MappingRecord>>::deserialize(deserializer)?.unwrap_or_default())
}

// ==============================================================================
// tests
// ==============================================================================
