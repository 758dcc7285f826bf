//! HTTP client module.

mod fetch;
mod transport;
mod url;

pub use fetch::*;
pub use transport::*;
// self:: disambiguates from the url crate
pub use self::url::*;
