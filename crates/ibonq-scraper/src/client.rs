//! HTTP client for the retail inquiry form endpoint.

use std::time::Duration;

use ibonq_core::AppConfig;
use reqwest::Client;

use crate::endpoint::InquiryEndpoint;
use crate::error::ScraperError;
use crate::types::FetchedPage;

/// Posts the inquiry form and hands back the raw HTML.
///
/// Makes exactly one request per call. Anything other than HTTP 200 is a
/// [`ScraperError::UnexpectedStatus`]; the body of a failed response is
/// discarded.
pub struct InquiryClient {
    pub(crate) client: Client,
    pub(crate) endpoint: InquiryEndpoint,
}

impl InquiryClient {
    /// Creates an `InquiryClient` with the given `User-Agent`.
    ///
    /// `timeout_secs` of `None` leaves the request timeout at the
    /// transport default.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        endpoint: InquiryEndpoint,
        user_agent: &str,
        timeout_secs: Option<u64>,
    ) -> Result<Self, ScraperError> {
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self {
            client: builder.build()?,
            endpoint,
        })
    }

    /// Builds the endpoint and client from application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidEndpoint`] for a bad upstream URL, or
    /// [`ScraperError::Http`] if the client cannot be constructed.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, ScraperError> {
        let endpoint = InquiryEndpoint::from_config(&config.upstream)?;
        Self::new(endpoint, &config.user_agent, config.request_timeout_secs)
    }

    #[must_use]
    pub fn endpoint(&self) -> &InquiryEndpoint {
        &self.endpoint
    }

    /// Submits one form-encoded POST to the inquiry endpoint.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::Http`] — network, TLS, or body-read failure.
    /// - [`ScraperError::UnexpectedStatus`] — any status other than 200.
    pub async fn fetch_page(&self, form: &[(&str, &str)]) -> Result<FetchedPage, ScraperError> {
        let url = self.endpoint.url();
        let response = self
            .client
            .post(&url)
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8",
            )
            .form(form)
            .send()
            .await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        Ok(FetchedPage {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
