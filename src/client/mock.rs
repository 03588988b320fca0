//! Mock portal API client for testing
//!
//! Implements [`PortalApi`] without making real API calls, for unit testing
//! code written against the trait.

use std::sync::Mutex;

use async_trait::async_trait;

use super::models::{CreateOrganizationOpts, GenerateLinkOpts, ListOrganizationsOpts, Organization};
use super::pagination::ListMetadata;
use super::{ListOrganizationsResponse, PortalApi};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure expected responses via builder methods, then use in tests.
pub struct MockPortalClient {
    /// Organizations to return from list_organizations
    organizations: Mutex<Vec<Organization>>,
    /// Cursors to return alongside the organization page
    list_metadata: Mutex<ListMetadata>,
    /// Link to return from generate_link
    link: Mutex<String>,
    /// Error to return (if any), consumed on first use
    error: Mutex<Option<ApiError>>,
    /// Track number of calls for verification
    call_count: Mutex<CallCounts>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub list_organizations: usize,
    pub create_organization: usize,
    pub generate_link: usize,
}

impl Default for MockPortalClient {
    fn default() -> Self {
        Self {
            organizations: Mutex::new(Vec::new()),
            list_metadata: Mutex::new(ListMetadata::default()),
            link: Mutex::new("https://id.workos.test/portal/launch?secret=mock".to_string()),
            error: Mutex::new(None),
            call_count: Mutex::new(CallCounts::default()),
        }
    }
}

impl MockPortalClient {
    /// Create a new mock client with default (empty) responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure organizations to return from list_organizations.
    pub fn with_organizations(self, organizations: Vec<Organization>) -> Self {
        *self.organizations.lock().unwrap() = organizations;
        self
    }

    /// Configure cursors to return alongside the organization page.
    pub fn with_list_metadata(self, metadata: ListMetadata) -> Self {
        *self.list_metadata.lock().unwrap() = metadata;
        self
    }

    /// Configure the link returned from generate_link.
    pub fn with_link(self, link: impl Into<String>) -> Self {
        *self.link.lock().unwrap() = link.into();
        self
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    pub fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().unwrap() = Some(error);
        self
    }

    /// Get the call counts for verification in tests.
    pub fn call_counts(&self) -> CallCounts {
        self.call_count.lock().unwrap().clone()
    }

    /// Check if there's a pending error and consume it.
    fn check_error(&self) -> Result<()> {
        if let Some(e) = self.error.lock().unwrap().take() {
            return Err(e.into());
        }
        Ok(())
    }
}

#[async_trait]
impl PortalApi for MockPortalClient {
    async fn list_organizations(
        &self,
        opts: &ListOrganizationsOpts,
    ) -> Result<ListOrganizationsResponse> {
        self.check_error()?;
        self.call_count.lock().unwrap().list_organizations += 1;

        let mut data = self.organizations.lock().unwrap().clone();
        if !opts.domains.is_empty() {
            data.retain(|org| {
                org.domains
                    .iter()
                    .any(|d| opts.domains.contains(&d.domain))
            });
        }

        Ok(ListOrganizationsResponse {
            data,
            list_metadata: self.list_metadata.lock().unwrap().clone(),
        })
    }

    async fn create_organization(&self, opts: &CreateOrganizationOpts) -> Result<Organization> {
        self.check_error()?;
        self.call_count.lock().unwrap().create_organization += 1;

        let count = self.organizations.lock().unwrap().len();
        let organization = Organization {
            id: format!("org_mock_{}", count + 1),
            name: opts.name.clone(),
            domains: opts
                .domains
                .iter()
                .enumerate()
                .map(|(i, domain)| super::models::OrganizationDomain {
                    id: format!("org_domain_mock_{}", i + 1),
                    domain: domain.clone(),
                })
                .collect(),
        };

        self.organizations.lock().unwrap().push(organization.clone());
        Ok(organization)
    }

    async fn generate_link(&self, _opts: &GenerateLinkOpts) -> Result<String> {
        self.check_error()?;
        self.call_count.lock().unwrap().generate_link += 1;

        Ok(self.link.lock().unwrap().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::{Intent, OrganizationDomain};
    use crate::error::Error;

    fn org(id: &str, name: &str, domain: &str) -> Organization {
        Organization {
            id: id.to_string(),
            name: name.to_string(),
            domains: vec![OrganizationDomain {
                id: format!("{id}_domain"),
                domain: domain.to_string(),
            }],
        }
    }

    #[tokio::test]
    async fn test_mock_client_default_empty() {
        let mock = MockPortalClient::new();

        let page = mock
            .list_organizations(&ListOrganizationsOpts::new())
            .await
            .unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.list_metadata, ListMetadata::default());
    }

    #[tokio::test]
    async fn test_mock_client_domain_filter() {
        let mock = MockPortalClient::new().with_organizations(vec![
            org("org_1", "Foo Corp", "foo-corp.com"),
            org("org_2", "Bar Corp", "bar-corp.com"),
        ]);

        let opts = ListOrganizationsOpts::new().domain("bar-corp.com");
        let page = mock.list_organizations(&opts).await.unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].id, "org_2");
    }

    #[tokio::test]
    async fn test_mock_client_create_echoes_request() {
        let mock = MockPortalClient::new();

        let created = mock
            .create_organization(&CreateOrganizationOpts {
                name: "Foo Corp".to_string(),
                domains: vec!["foo-corp.com".to_string()],
            })
            .await
            .unwrap();

        assert_eq!(created.name, "Foo Corp");
        assert_eq!(created.domains[0].domain, "foo-corp.com");

        // The created organization is listed afterwards
        let page = mock
            .list_organizations(&ListOrganizationsOpts::new())
            .await
            .unwrap();
        assert_eq!(page.data.len(), 1);
    }

    #[tokio::test]
    async fn test_mock_client_with_error_consumed_once() {
        let mock = MockPortalClient::new().with_error(ApiError::Timeout);

        let opts = GenerateLinkOpts {
            intent: Intent::Sso,
            organization: "org_1".to_string(),
            return_url: "https://example.com".to_string(),
        };

        let result = mock.generate_link(&opts).await;
        assert!(matches!(result, Err(Error::Api(ApiError::Timeout))));

        // Error is consumed, next call succeeds
        let link = mock.generate_link(&opts).await.unwrap();
        assert!(link.contains("portal/launch"));
    }

    #[tokio::test]
    async fn test_mock_client_call_counts() {
        let mock = MockPortalClient::new().with_link("https://id.workos.test/x");

        let opts = ListOrganizationsOpts::new();
        mock.list_organizations(&opts).await.unwrap();
        mock.list_organizations(&opts).await.unwrap();
        mock.generate_link(&GenerateLinkOpts {
            intent: Intent::DSync,
            organization: "org_1".to_string(),
            return_url: "https://example.com".to_string(),
        })
        .await
        .unwrap();

        let counts = mock.call_counts();
        assert_eq!(counts.list_organizations, 2);
        assert_eq!(counts.generate_link, 1);
        assert_eq!(counts.create_organization, 0);
    }
}
