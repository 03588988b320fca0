//! Portal link generation models

use serde::{Deserialize, Serialize};

/// Purpose of a generated Admin Portal link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    /// Single Sign-On setup flow
    #[serde(rename = "sso")]
    Sso,

    /// Directory Sync setup flow
    #[serde(rename = "dsync")]
    DSync,
}

/// Options for generating an Admin Portal link
#[derive(Debug, Clone, Serialize)]
pub struct GenerateLinkOpts {
    /// Which setup flow the link opens
    pub intent: Intent,

    /// ID of the organization the link is scoped to
    pub organization: String,

    /// Absolute URL the portal redirects to when the flow completes
    pub return_url: String,
}
