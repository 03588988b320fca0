//! Organization models

use serde::{Deserialize, Serialize};

/// Organization resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    /// Organization ID
    pub id: String,

    /// Organization name
    pub name: String,

    /// Domains verified for this organization
    #[serde(default)]
    pub domains: Vec<OrganizationDomain>,
}

/// A domain record owned by an organization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationDomain {
    /// Domain record ID
    pub id: String,

    /// The domain name
    pub domain: String,
}

/// Options for listing organizations.
///
/// Use the builder pattern to configure filters and pagination.
///
/// # Example
/// ```
/// use workos_portal::client::models::ListOrganizationsOpts;
///
/// let opts = ListOrganizationsOpts::new()
///     .domain("foo-corp.com")
///     .limit(10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ListOrganizationsOpts {
    /// Restrict results to organizations owning one of these domains
    pub domains: Vec<String>,

    /// Cursor: return the page preceding this organization ID
    pub before: Option<String>,

    /// Cursor: return the page following this organization ID
    pub after: Option<String>,

    /// Maximum number of organizations per page
    pub limit: Option<u32>,
}

impl ListOrganizationsOpts {
    /// Create options with no filters or cursors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a domain to filter by.
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domains.push(domain.into());
        self
    }

    /// Set the `before` pagination cursor.
    pub fn before(mut self, cursor: impl Into<String>) -> Self {
        self.before = Some(cursor.into());
        self
    }

    /// Set the `after` pagination cursor.
    pub fn after(mut self, cursor: impl Into<String>) -> Self {
        self.after = Some(cursor.into());
        self
    }

    /// Set the page limit.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Convert to query string parameters.
    ///
    /// Returns (key, value) pairs suitable for URL encoding. `domains` is
    /// repeated once per value; unset options are omitted entirely.
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        for domain in &self.domains {
            params.push(("domains", domain.clone()));
        }

        if let Some(ref before) = self.before {
            params.push(("before", before.clone()));
        }

        if let Some(ref after) = self.after {
            params.push(("after", after.clone()));
        }

        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }

        params
    }
}

/// Options for creating an organization.
///
/// Each requested domain must be unique across the whole service; a duplicate
/// is rejected server-side and surfaces as an API error with the response
/// status.
#[derive(Debug, Clone, Serialize)]
pub struct CreateOrganizationOpts {
    /// Organization name
    pub name: String,

    /// Domains to verify for the organization
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub domains: Vec<String>,
}
