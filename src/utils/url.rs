// src/utils/url.rs

//! URL manipulation utilities.

use url::Url;

const THUMBNAIL_SEGMENT: &str = "/masonry/";
const FULL_SIZE_SEGMENT: &str = "/original/";

/// Build the image search URL for `query`.
///
/// Any query string already on `base` is replaced. Parameters are
/// form-encoded in the order `context`, `sort`, `q`.
///
/// # Examples
/// ```
/// use kym::utils::url::build_search_url;
///
/// let base = url::Url::parse("https://knowyourmeme.com/search").unwrap();
/// assert_eq!(
///     build_search_url(&base, "grumpy cat").as_str(),
///     "https://knowyourmeme.com/search?context=images&sort=relevance&q=grumpy+cat"
/// );
/// ```
pub fn build_search_url(base: &Url, query: &str) -> Url {
    let mut url = base.clone();
    url.query_pairs_mut()
        .clear()
        .append_pair("context", "images")
        .append_pair("sort", "relevance")
        .append_pair("q", query);
    url
}

/// Rewrite a thumbnail image URL to its full-resolution variant.
///
/// Only the first `/masonry/` segment is replaced.
///
/// # Examples
/// ```
/// use kym::utils::url::to_original;
///
/// assert_eq!(
///     to_original("https://i.kym-cdn.com/photos/images/masonry/001/doge.jpg"),
///     "https://i.kym-cdn.com/photos/images/original/001/doge.jpg"
/// );
/// ```
pub fn to_original(url: &str) -> String {
    url.replacen(THUMBNAIL_SEGMENT, FULL_SIZE_SEGMENT, 1)
}
