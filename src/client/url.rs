//! Query-string URL construction.

use crate::models::{LexikaError, Result};
use url::Url;

/// Build a URL from a base and an ordered list of query parameters.
///
/// Parameters are appended in slice order using standard form encoding:
/// spaces become `+`, reserved characters are percent-escaped. Values are
/// passed through opaquely: a JSON filter string is encoded, never
/// interpreted. An empty parameter list yields the normalized base URL
/// (host-only URLs gain their trailing slash).
pub fn build_url<K, V>(base: &str, params: &[(K, V)]) -> Result<Url>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut url = Url::parse(base).map_err(|source| LexikaError::InvalidUrl {
        input: base.to_string(),
        source,
    })?;

    if !params.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in params {
            pairs.append_pair(key.as_ref(), value.as_ref());
        }
    }

    Ok(url)
}
