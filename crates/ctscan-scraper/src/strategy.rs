//! The two acquisition strategies, tried in order per list.
//!
//! Strategy 1 fetches the source URL directly; the primary source mostly
//! serves an empty app shell, but server-rendered posts are parsed when
//! present. Strategy 2 rebuilds the list URL against each configured
//! mirror endpoint, shuffled per call to spread load, and stops at the
//! first endpoint that yields posts.
//!
//! Every error in here is terminal for the *attempt* only: it is logged
//! and converted into an empty result so the caller can move down the
//! chain.

use rand::seq::SliceRandom;
use rand::Rng;
use regex::Regex;

use ctscan_core::Post;

use crate::fetch::FetchClient;
use crate::parse::{parse_direct_page, parse_mirror_timeline};

/// Pull the numeric list identifier out of a list URL.
pub(crate) fn extract_list_id(url: &str) -> Option<String> {
    let re = Regex::new(r"lists/(\d+)").expect("valid list id regex");
    re.captures(url).map(|cap| cap[1].to_owned())
}

/// Build the timeline URL for a list on one mirror endpoint.
///
/// Endpoints are normally bare hostnames; entries carrying an explicit
/// scheme are used as-is, which lets tests point at a local server.
pub(crate) fn mirror_list_url(endpoint: &str, list_id: &str) -> String {
    let base = endpoint.trim_end_matches('/');
    if base.contains("://") {
        format!("{base}/i/lists/{list_id}")
    } else {
        format!("https://{base}/i/lists/{list_id}")
    }
}

/// Strategy 1: direct fetch of the source URL.
pub(crate) async fn fetch_direct(client: &FetchClient, url: &str) -> Vec<Post> {
    match client.get_html(url).await {
        Ok(html) => parse_direct_page(&html, url),
        Err(err) => {
            tracing::warn!(url, error = %err, "direct fetch failed");
            Vec::new()
        }
    }
}

/// Strategy 2: mirror fallback.
///
/// Without a numeric list id there is nothing to rebuild and no network
/// call is made. Otherwise mirrors are tried in shuffled order, first
/// non-empty result wins, later endpoints are never attempted.
pub(crate) async fn fetch_via_mirrors<R: Rng>(
    client: &FetchClient,
    endpoints: &[String],
    list_url: &str,
    rng: &mut R,
) -> Vec<Post> {
    let Some(list_id) = extract_list_id(list_url) else {
        tracing::debug!(url = list_url, "no numeric list id; skipping mirror fallback");
        return Vec::new();
    };

    let mut shuffled: Vec<&String> = endpoints.iter().collect();
    shuffled.shuffle(rng);

    for endpoint in shuffled {
        let url = mirror_list_url(endpoint, &list_id);
        match client.get_html(&url).await {
            Ok(html) => {
                let posts = parse_mirror_timeline(&html, &url);
                if posts.is_empty() {
                    tracing::debug!(url, "mirror returned no posts");
                } else {
                    return posts;
                }
            }
            Err(err) => {
                tracing::warn!(url, error = %err, "mirror fetch failed; trying next");
            }
        }
    }

    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_id_extracted_from_canonical_url() {
        assert_eq!(
            extract_list_id("https://x.com/i/lists/1629876543210987"),
            Some("1629876543210987".to_owned())
        );
    }

    #[test]
    fn list_id_absent_for_non_list_url() {
        assert_eq!(extract_list_id("https://x.com/someuser"), None);
        assert_eq!(extract_list_id("https://x.com/i/lists/named-list"), None);
    }

    #[test]
    fn mirror_url_for_bare_hostname() {
        assert_eq!(
            mirror_list_url("nitter.poast.org", "42"),
            "https://nitter.poast.org/i/lists/42"
        );
    }

    #[test]
    fn mirror_url_preserves_explicit_scheme() {
        assert_eq!(
            mirror_list_url("http://127.0.0.1:9999/", "42"),
            "http://127.0.0.1:9999/i/lists/42"
        );
    }
}
