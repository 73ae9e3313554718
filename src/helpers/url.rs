//! URL helper functions

use lazy_static::lazy_static;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use regex::Regex;

use crate::config::SiteConfig;

/// Characters escaped in a URL path. `/`, `#`, `?` and `%` pass through.
const PATH: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}');

lazy_static! {
    /// A URL scheme (`https:`, `mailto:`, ...) or a protocol-relative `//`
    static ref EXTERNAL_RE: Regex = Regex::new(r"(?i)^(?:[a-z][a-z0-9+.-]*:|//)").unwrap();
}

/// Whether a path points outside the site
pub fn is_absolute_url(path: &str) -> bool {
    EXTERNAL_RE.is_match(path.trim_start())
}

/// Prefix a path with a site root
///
/// # Examples
/// ```ignore
/// join_root("/devoops", "/docs/intro") // -> "/devoops/docs/intro"
/// ```
pub fn join_root(root: &str, path: &str) -> String {
    if is_absolute_url(path) {
        return path.to_string();
    }

    let root = root.trim_end_matches('/');
    let path = encode_path(path.trim_start_matches('/'));

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Generate a URL with the site's base_url
///
/// # Examples
/// ```ignore
/// url_for(&config, "/img/logo.svg") // -> "/devoops/img/logo.svg"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    join_root(&config.base_url, path)
}

/// Generate a full URL including the domain
///
/// # Examples
/// ```ignore
/// full_url_for(&config, "/blog") // -> "https://chen-wenyi.github.io/devoops/blog"
/// ```
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    if is_absolute_url(path) {
        return path.to_string();
    }
    let base = config.url.trim_end_matches('/');
    format!("{}{}", base, url_for(config, path))
}

/// Percent-encode the characters of a path that are not valid in an href
pub fn encode_path(path: &str) -> String {
    utf8_percent_encode(path, PATH).to_string()
}
