use sectiongen_core::registry::{build_registry_url, AssetKind, RegistryConfig};
use sectiongen_core::section::{parse_component, parse_section, Component, SectionComponent};
use sectiongen_core::{Error, Result};

use crate::notify::Notifier;

const USER_AGENT: &str = concat!("sectiongen/", env!("CARGO_PKG_VERSION"));

/// HTTP client bound to a single registry.
#[derive(Debug, Clone)]
pub struct RegistryClient {
    http: reqwest::Client,
    config: RegistryConfig,
}

/// Create the registry client used by the CLI commands.
pub fn create_registry_client(config: RegistryConfig) -> color_eyre::eyre::Result<RegistryClient> {
    use color_eyre::eyre::Context;

    let http = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .context("Failed to build HTTP client")?;

    Ok(RegistryClient::new(http, config))
}

impl RegistryClient {
    pub fn new(http: reqwest::Client, config: RegistryConfig) -> Self {
        Self { http, config }
    }

    /// Fetch and validate `{base}/sections/{name}.json`.
    pub async fn fetch_section(
        &self,
        name: &str,
        notifier: &dyn Notifier,
    ) -> Result<SectionComponent> {
        let value = self.fetch_asset(AssetKind::Section, name, notifier).await?;
        let section = parse_section(value)?;
        notifier.fetched(AssetKind::Section, name);
        Ok(section)
    }

    /// Fetch and validate `{base}/components/{name}.json`.
    pub async fn fetch_component(&self, name: &str, notifier: &dyn Notifier) -> Result<Component> {
        let value = self
            .fetch_asset(AssetKind::Component, name, notifier)
            .await?;
        let component = parse_component(value)?;
        notifier.fetched(AssetKind::Component, name);
        Ok(component)
    }

    /// GET the asset and return its body as untyped JSON.
    ///
    /// The URL (and therefore the configuration) is resolved before anything
    /// is sent.
    async fn fetch_asset(
        &self,
        kind: AssetKind,
        name: &str,
        notifier: &dyn Notifier,
    ) -> Result<serde_json::Value> {
        let url = build_registry_url(&self.config, kind, name)?;

        notifier.fetching(kind, name);
        log::debug!("GET {url}");

        let response = self
            .http
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| Error::Transport {
                kind,
                url: url.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        log::debug!("{url} responded with {status}");

        if !status.is_success() {
            return Err(Error::Retrieval {
                kind,
                status: status.as_u16(),
                url,
            });
        }

        let body = response.bytes().await.map_err(|e| Error::Transport {
            kind,
            url: url.clone(),
            message: e.to_string(),
        })?;

        serde_json::from_slice(&body)
            .map_err(|e| Error::validation(kind, format!("response is not valid JSON: {e}")))
    }
}
