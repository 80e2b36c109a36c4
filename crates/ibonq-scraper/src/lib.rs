//! Scrape-and-normalize pipeline for the ibon retail inquiry page.
//!
//! [`InquiryClient`] posts the inquiry form, [`extract`] turns the returned
//! HTML into [`City`] and [`Store`] records, and [`pipeline`] joins the two
//! behind one generic entry point.

pub mod client;
pub mod endpoint;
pub mod error;
pub mod extract;
pub mod pipeline;
pub mod types;

pub use client::InquiryClient;
pub use endpoint::InquiryEndpoint;
pub use error::ScraperError;
pub use extract::{extract_cities, extract_stores};
pub use pipeline::{Record, ScrapeResult};
pub use types::{City, FetchedPage, RecordKind, Store};
