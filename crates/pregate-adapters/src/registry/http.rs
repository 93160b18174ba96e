//! Registry client over blocking HTTP (`ureq`).

use std::time::Duration;

use tracing::{debug, instrument};

use pregate_core::application::ports::{RegistryClient, TagLookup};

/// Production registry client.
///
/// Issues `GET {api_base}/repositories/{image}/tags/{tag}`. Every request is
/// bounded by the configured timeout and never retried.
#[derive(Clone)]
pub struct HttpRegistryClient {
    agent: ureq::Agent,
    api_base: String,
    timeout: Duration,
}

impl HttpRegistryClient {
    /// Docker Hub v2 API.
    pub const DEFAULT_API_BASE: &'static str = "https://registry.hub.docker.com/v2";

    pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(1000);

    /// Create a client for `api_base` (trailing slashes are ignored).
    pub fn new(api_base: impl Into<String>, timeout: Duration) -> Self {
        let api_base = api_base.into().trim_end_matches('/').to_owned();
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();

        Self {
            agent,
            api_base,
            timeout,
        }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for HttpRegistryClient {
    fn default() -> Self {
        Self::new(Self::DEFAULT_API_BASE, Self::DEFAULT_TIMEOUT)
    }
}

impl RegistryClient for HttpRegistryClient {
    #[instrument(skip(self), fields(api_base = %self.api_base))]
    fn lookup_tag(&self, image: &str, tag: &str) -> TagLookup {
        let url = self.tag_url(image, tag);

        match self.agent.get(&url).call() {
            Ok(response) => {
                debug!(status = response.status(), "Registry answered");
                TagLookup::Exists
            }
            Err(ureq::Error::Status(status, _)) => {
                debug!(status, "Registry returned an error status");
                TagLookup::NotFound { status }
            }
            Err(ureq::Error::Transport(transport)) => {
                debug!(kind = ?transport.kind(), "Registry unreachable");
                TagLookup::Unknown {
                    reason: transport.to_string(),
                }
            }
        }
    }

    fn tag_url(&self, image: &str, tag: &str) -> String {
        format!("{}/repositories/{image}/tags/{tag}", self.api_base)
    }
}
