use crate::{FbrefError, Result};
use url::Url;

/// Resolves an href to an absolute HTTP(S) URL
///
/// Absolute hrefs are returned as-is (after parsing); relative and
/// root-relative hrefs are joined onto `base`.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use fbref_extract::url::absolute_url;
///
/// let base = Url::parse("https://fbref.com").unwrap();
/// let url = absolute_url(&base, "/en/comps/12/history/La-Liga-Seasons").unwrap();
/// assert_eq!(url.as_str(), "https://fbref.com/en/comps/12/history/La-Liga-Seasons");
/// ```
pub fn absolute_url(base: &Url, href: &str) -> Result<Url> {
    let href = href.trim();

    if href.is_empty() {
        return Err(FbrefError::MalformedInput("empty URL".to_string()));
    }

    let url = base.join(href)?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(FbrefError::MalformedInput(format!(
            "only HTTP and HTTPS URLs can be fetched, got '{}'",
            href
        )));
    }

    Ok(url)
}
