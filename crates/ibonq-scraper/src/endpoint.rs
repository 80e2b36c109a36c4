//! The outbound form contract of the retail inquiry page.

use ibonq_core::UpstreamConfig;
use reqwest::Url;

use crate::error::ScraperError;
use crate::types::RecordKind;

/// Where the inquiry form is posted and which field names and values it uses.
///
/// Built once from configuration so both record kinds share a single
/// contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InquiryEndpoint {
    scheme: String,
    host: String,
    port: Option<u16>,
    path_and_query: String,
    target_field_name: String,
    keyword_field_name: String,
    city_target: String,
    store_target: String,
    city_select_id: String,
}

impl InquiryEndpoint {
    /// Validate the configured URL and capture the form contract.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidEndpoint`] if the URL does not parse,
    /// uses a scheme other than `http`/`https`, or has no host.
    pub fn from_config(config: &UpstreamConfig) -> Result<Self, ScraperError> {
        let invalid = |reason: &str| ScraperError::InvalidEndpoint {
            url: config.url.clone(),
            reason: reason.to_string(),
        };

        let url = Url::parse(&config.url).map_err(|e| invalid(&e.to_string()))?;
        let scheme = url.scheme();
        if scheme != "http" && scheme != "https" {
            return Err(invalid("scheme must be http or https"));
        }
        let host = url.host_str().ok_or_else(|| invalid("missing host"))?;

        let mut path_and_query = url.path().to_string();
        if let Some(query) = url.query() {
            path_and_query.push('?');
            path_and_query.push_str(query);
        }

        Ok(Self {
            scheme: scheme.to_string(),
            host: host.to_string(),
            port: url.port(),
            path_and_query,
            target_field_name: config.target_field_name.clone(),
            keyword_field_name: config.keyword_field_name.clone(),
            city_target: config.city_target.clone(),
            store_target: config.store_target.clone(),
            city_select_id: config.city_select_id.clone(),
        })
    }

    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    #[must_use]
    pub fn url(&self) -> String {
        match self.port {
            Some(port) => format!(
                "{}://{}:{port}{}",
                self.scheme, self.host, self.path_and_query
            ),
            None => format!("{}://{}{}", self.scheme, self.host, self.path_and_query),
        }
    }

    /// Target-field value sent for the given record kind.
    #[must_use]
    pub fn target_for(&self, kind: RecordKind) -> &str {
        match kind {
            RecordKind::City => &self.city_target,
            RecordKind::Store => &self.store_target,
        }
    }

    #[must_use]
    pub fn city_select_id(&self) -> &str {
        &self.city_select_id
    }

    /// Form fields for one inquiry. An empty keyword matches everything.
    #[must_use]
    pub fn form<'a>(&'a self, kind: RecordKind, keyword: &'a str) -> [(&'a str, &'a str); 2] {
        [
            (self.target_field_name.as_str(), self.target_for(kind)),
            (self.keyword_field_name.as_str(), keyword),
        ]
    }
}
