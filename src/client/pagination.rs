//! Pagination envelope for list endpoints
//!
//! List responses share one shape: a `data` array plus a cursor pair under
//! `listMetadata`. Cursors are opaque; feed them back through a list call's
//! `before`/`after` options to page through a collection.

use serde::{Deserialize, Serialize};

/// Cursor pair returned with every list response.
///
/// Empty strings mean there is no page in that direction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListMetadata {
    /// Cursor for the page preceding this one
    #[serde(default)]
    pub before: String,

    /// Cursor for the page following this one
    #[serde(default)]
    pub after: String,
}

/// One page of a collection endpoint's results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// The data items for this page
    pub data: Vec<T>,

    /// Cursors for the surrounding pages
    #[serde(rename = "listMetadata", default)]
    pub list_metadata: ListMetadata,
}

impl ListMetadata {
    /// Whether a following page exists.
    pub fn has_next_page(&self) -> bool {
        !self.after.is_empty()
    }

    /// Whether a preceding page exists.
    pub fn has_previous_page(&self) -> bool {
        !self.before.is_empty()
    }
}
