use std::sync::Arc;
use std::time::Duration;

use crate::client::ApiClient;
use crate::config::{load_config, resolve_base_url, Config};
use crate::error::OctofitResult;
use crate::models::{Endpoint, Resource};

/// Process-level settings handed to every view: the API base URL and the
/// shared HTTP client.
pub struct CliContext {
    base_url: String,
    timeout: Option<Duration>,
    client: Option<Arc<ApiClient>>,
}

impl CliContext {
    /// Resolve settings from the flag, environment and config file.
    pub fn load(base_url_flag: Option<&str>) -> OctofitResult<Self> {
        let config = load_config();
        Ok(Self::from_config(base_url_flag, &config))
    }

    pub fn from_config(base_url_flag: Option<&str>, config: &Config) -> Self {
        Self {
            base_url: resolve_base_url(base_url_flag, config),
            timeout: config.request_timeout(),
            client: None,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn endpoint(&self, resource: Resource) -> Endpoint {
        resource.endpoint(&self.base_url)
    }

    /// Get or create the shared client.
    pub fn client(&mut self) -> OctofitResult<Arc<ApiClient>> {
        if let Some(client) = &self.client {
            return Ok(client.clone());
        }

        let client = Arc::new(ApiClient::with_timeout(self.timeout)?);
        self.client = Some(client.clone());
        Ok(client)
    }
}

/// Builder for contexts that bypass the config file.
pub struct CliContextBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl CliContextBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> OctofitResult<CliContext> {
        let context = match self.base_url {
            Some(base_url) => CliContext {
                base_url: base_url.trim_end_matches('/').to_string(),
                timeout: self.timeout,
                client: None,
            },
            None => {
                let mut context = CliContext::load(None)?;
                if self.timeout.is_some() {
                    context.timeout = self.timeout;
                }
                context
            }
        };

        Ok(context)
    }
}

impl Default for CliContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
