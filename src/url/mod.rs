//! URL handling module
//!
//! The site links its pages with root-relative hrefs. This module resolves
//! them against the configured base URL and derives sibling page URLs (such as
//! a season's fixtures page) from the shape of a season URL.

mod resolve;
mod season;

pub use resolve::absolute_url;
pub use season::schedule_url;
