//! One fetch-then-extract pipeline shared by every record kind.

use crate::client::InquiryClient;
use crate::endpoint::InquiryEndpoint;
use crate::error::ScraperError;
use crate::extract::{extract_cities, extract_stores};
use crate::types::{City, RecordKind, Store};

/// `Ok(vec![])` means the upstream answered with no data; `Err` means the
/// fetch or the extraction failed.
pub type ScrapeResult<T> = Result<Vec<T>, ScraperError>;

/// A record the inquiry page can be scraped for.
pub trait Record: Sized {
    const KIND: RecordKind;

    /// Extract every record of this kind from a response body.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Selector`] if the configured selector is unusable.
    fn extract(html: &str, endpoint: &InquiryEndpoint) -> ScrapeResult<Self>;
}

impl Record for City {
    const KIND: RecordKind = RecordKind::City;

    fn extract(html: &str, endpoint: &InquiryEndpoint) -> ScrapeResult<Self> {
        extract_cities(html, endpoint.city_select_id())
    }
}

impl Record for Store {
    const KIND: RecordKind = RecordKind::Store;

    fn extract(html: &str, _endpoint: &InquiryEndpoint) -> ScrapeResult<Self> {
        extract_stores(html)
    }
}

impl InquiryClient {
    /// Post the inquiry form for `T` with `keyword` and extract the results.
    ///
    /// Failures are logged here with the record kind and keyword before
    /// being returned.
    ///
    /// # Errors
    ///
    /// Any [`ScraperError`] from [`InquiryClient::fetch_page`] or
    /// [`Record::extract`].
    pub async fn scrape<T: Record>(&self, keyword: &str) -> ScrapeResult<T> {
        let kind = T::KIND;
        let form = self.endpoint.form(kind, keyword);

        let page = match self.fetch_page(&form).await {
            Ok(page) => page,
            Err(e) => {
                tracing::error!(%kind, keyword, error = %e, "inquiry fetch failed");
                return Err(e);
            }
        };

        match T::extract(&page.body, &self.endpoint) {
            Ok(records) => {
                tracing::debug!(
                    %kind,
                    keyword,
                    status = page.status,
                    count = records.len(),
                    "inquiry scraped"
                );
                Ok(records)
            }
            Err(e) => {
                tracing::error!(%kind, keyword, error = %e, "inquiry parse failed");
                Err(e)
            }
        }
    }

    /// Every city in the city selector.
    ///
    /// # Errors
    ///
    /// See [`InquiryClient::scrape`].
    pub async fn fetch_cities(&self) -> ScrapeResult<City> {
        self.scrape::<City>("").await
    }

    /// Every store listed for `city`, header row excluded.
    ///
    /// # Errors
    ///
    /// See [`InquiryClient::scrape`].
    pub async fn fetch_stores(&self, city: &str) -> ScrapeResult<Store> {
        self.scrape::<Store>(city).await
    }
}
