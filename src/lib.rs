//! Client bindings for the WorkOS Admin Portal API
//!
//! Provides a typed, async client for the organization and portal-link
//! endpoints: listing organizations, creating organizations, and generating
//! single-use Admin Portal links for SSO or Directory Sync setup.
//!
//! ```no_run
//! use workos_portal::{ClientConfig, PortalApi, PortalClient};
//! use workos_portal::client::models::{GenerateLinkOpts, Intent};
//!
//! # async fn run() -> workos_portal::Result<()> {
//! let client = PortalClient::new(ClientConfig::new().api_key("sk_example_123"))?;
//!
//! let link = client
//!     .generate_link(&GenerateLinkOpts {
//!         intent: Intent::Sso,
//!         organization: "org_01EHZNVPK3SFK441A1RGBFSHRT".to_string(),
//!         return_url: "https://example.com/settings".to_string(),
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;

pub use client::{ListOrganizationsResponse, PortalApi, PortalClient};
pub use config::ClientConfig;
pub use error::{ApiError, ConfigError, Error, Result};
