//! Server connection settings

use anyhow::Result;
use archive_rest_client::{AuthConfig, RestClient};
use clap::Args;
use tracing::debug;

/// Where the Argo server lives and how to authenticate with it
#[derive(Args, Debug, Clone, Default)]
pub struct ConnectionArgs {
    /// Base URL of the Argo server, including any base href
    #[arg(long, global = true, env = "ARGO_SERVER")]
    pub server: Option<String>,

    /// Bearer token, as printed by `argo auth token`
    #[arg(long, global = true, env = "ARGO_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Username for HTTP basic authentication
    #[arg(long, global = true)]
    pub username: Option<String>,

    /// Password for HTTP basic authentication
    #[arg(long, global = true, env = "ARGO_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

impl ConnectionArgs {
    /// Resolve the authentication settings, rejecting conflicting flags
    pub fn auth(&self) -> Result<AuthConfig> {
        if self.token.is_some() && self.username.is_some() {
            anyhow::bail!("Cannot specify both --token and --username");
        }

        match (&self.token, &self.username, &self.password) {
            (Some(token), _, _) => Ok(AuthConfig::with_bearer(token.clone())),
            (None, Some(username), Some(password)) => {
                Ok(AuthConfig::with_basic(username.clone(), password.clone()))
            }
            (None, Some(_), None) => anyhow::bail!("--password is required with --username"),
            (None, None, _) => Ok(AuthConfig::default()),
        }
    }

    /// Build an HTTP client for the configured server
    pub fn client(&self) -> Result<RestClient> {
        let Some(server) = self.server.as_deref() else {
            anyhow::bail!("--server (or ARGO_SERVER) is required");
        };
        let auth = self.auth()?;
        debug!(server, "connecting to Argo server");
        Ok(RestClient::from_url(server, auth)?)
    }
}
