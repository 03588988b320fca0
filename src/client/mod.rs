//! Admin Portal API client

use async_trait::async_trait;

use crate::error::Result;

#[cfg(test)]
pub mod mock;
pub mod models;
pub mod pagination;
pub mod portal;

#[cfg(test)]
#[allow(unused_imports)]
pub use mock::MockPortalClient;
use models::{CreateOrganizationOpts, GenerateLinkOpts, ListOrganizationsOpts, Organization};
pub use pagination::{ListMetadata, PaginatedResponse};
pub use portal::PortalClient;

/// Response to a [`PortalApi::list_organizations`] call: one page of
/// organizations plus the cursor pair for fetching the neighbouring pages.
pub type ListOrganizationsResponse = PaginatedResponse<Organization>;

/// Admin Portal API surface.
///
/// Implemented by [`PortalClient`] for real HTTP calls and by the test mock.
/// Each method performs a single request round-trip; calls are independent
/// and the implementation holds no mutable state across them.
#[async_trait]
pub trait PortalApi: Send + Sync {
    /// List organizations, optionally filtered by domain and paginated
    async fn list_organizations(
        &self,
        opts: &ListOrganizationsOpts,
    ) -> Result<ListOrganizationsResponse>;

    /// Create an organization with a name and a set of verified domains
    async fn create_organization(&self, opts: &CreateOrganizationOpts) -> Result<Organization>;

    /// Generate a single-use Admin Portal link for an organization
    async fn generate_link(&self, opts: &GenerateLinkOpts) -> Result<String>;
}
