//! Admin Portal API data models
//!
//! Domain types sent to and returned by the portal endpoints, organized by
//! resource type.

mod org;
mod portal_link;

pub use org::{
    CreateOrganizationOpts, ListOrganizationsOpts, Organization, OrganizationDomain,
};
pub use portal_link::{GenerateLinkOpts, Intent};
