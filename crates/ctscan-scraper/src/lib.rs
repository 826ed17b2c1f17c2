//! List scraper for the CT signal pipeline.
//!
//! Acquisition runs an ordered fallback chain per configured list: a direct
//! fetch of the source URL first, then a shuffled set of mirror endpoints.
//! Network and parse failures are contained inside each strategy attempt;
//! [`ListScraper::scrape_lists`] always returns a well-formed
//! [`ScrapeBatch`], worst case empty with warnings attached.

mod batch;
mod error;
mod fetch;
mod parse;
mod scrape;
mod strategy;

pub use batch::ScrapeBatch;
pub use error::ScraperError;
pub use fetch::FetchClient;
pub use parse::parse_engagement_number;
pub use scrape::{ListScraper, ScraperConfig};
