//! Markup extraction for list timelines.
//!
//! ## Observed mirror markup
//!
//! Mirror instances render each post as a `timeline-item` (threaded replies
//! use `thread-line`) containing `username`, `fullname`, and
//! `tweet-content` elements, a `tweet-date` anchor whose `title` attribute
//! carries the human-readable timestamp, and a row of `tweet-stat` spans
//! whose icon class names identify the counter. Counters are compact
//! numerics (`1.2K`, `5M`).
//!
//! The direct source serves a script-driven app shell; server-rendered
//! posts, when present at all, are `data-testid="tweet"` containers with a
//! `tweetText` block and no usable counters.
//!
//! A single malformed container is skipped; the rest of the page is still
//! processed.

use chrono::{DateTime, NaiveDateTime, Utc};
use regex::Regex;

use ctscan_core::{OriginStrategy, Post};

/// Parse a compact engagement numeral (`"1.2K"`, `"5M"`, `"307"`).
///
/// Suffix scaling: `k` ×1 000, `m` ×1 000 000, `b` ×1 000 000 000, rounded
/// to the nearest integer. Returns 0 for anything non-numeric.
#[must_use]
pub fn parse_engagement_number(raw: &str) -> u64 {
    let re = Regex::new(r"(?i)([\d,.]+)\s*([kmb])?").expect("valid engagement regex");
    let Some(cap) = re.captures(raw) else {
        return 0;
    };
    let digits = cap[1].replace(',', "");
    let Ok(value) = digits.parse::<f64>() else {
        return 0;
    };
    let scale = match cap.get(2).map(|m| m.as_str().to_ascii_lowercase()) {
        Some(s) if s == "k" => 1_000.0,
        Some(s) if s == "m" => 1_000_000.0,
        Some(s) if s == "b" => 1_000_000_000.0,
        _ => 1.0,
    };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let scaled = (value * scale).round().max(0.0) as u64;
    scaled
}

/// Extract posts from a mirror timeline page.
pub(crate) fn parse_mirror_timeline(html: &str, page_url: &str) -> Vec<Post> {
    let origin = page_origin(page_url);
    split_containers(html, r#"class="(?:timeline-item|thread-line)"#)
        .into_iter()
        .filter_map(|chunk| parse_mirror_item(chunk, &origin, page_url))
        .collect()
}

fn parse_mirror_item(chunk: &str, origin: &str, page_url: &str) -> Option<Post> {
    let author = first_capture(chunk, r#"(?is)<a[^>]*class="username"[^>]*>(.*?)</a>"#)
        .map(|s| clean_text(&s).trim_start_matches('@').to_owned())
        .unwrap_or_default();
    let display_name = first_capture(chunk, r#"(?is)<a[^>]*class="fullname"[^>]*>(.*?)</a>"#)
        .map(|s| clean_text(&s))
        .unwrap_or_default();
    let text = first_capture(
        chunk,
        r#"(?is)<div[^>]*class="(?:tweet-content|media-body)[^"]*"[^>]*>(.*?)</div>"#,
    )
    .map(|s| clean_text(&s))
    .unwrap_or_default();

    // Empty author and text together means the container was not a post.
    if author.is_empty() && text.is_empty() {
        return None;
    }

    let timestamp = first_capture(
        chunk,
        r#"(?is)class="tweet-date"[^>]*>\s*<a[^>]*title="([^"]+)""#,
    )
    .or_else(|| first_capture(chunk, r#"(?is)<time[^>]*datetime="([^"]+)""#))
    .and_then(|raw| parse_timestamp(&raw));

    let source_url = first_capture(chunk, r#"(?is)<a[^>]*class="tweet-link"[^>]*href="([^"]+)""#)
        .map_or_else(
            || page_url.to_owned(),
            |href| resolve_href(&href, origin),
        );

    let (likes, retweets, replies, bookmarks, views) = parse_stats(chunk);

    Some(Post {
        display_name: if display_name.is_empty() {
            author.clone()
        } else {
            display_name
        },
        author,
        text,
        timestamp,
        likes,
        retweets,
        replies,
        bookmarks,
        views,
        source_url,
        origin: OriginStrategy::Mirror,
        list_tag: String::new(),
    })
}

/// Extract any server-rendered posts from the direct source page.
///
/// Counters are not exposed in the shell markup and default to 0.
pub(crate) fn parse_direct_page(html: &str, page_url: &str) -> Vec<Post> {
    split_containers(html, r#"data-testid="tweet""#)
        .into_iter()
        .filter_map(|chunk| {
            let author = first_capture(
                chunk,
                r#"(?is)data-testid="User-Name".*?@([A-Za-z0-9_]{1,15})"#,
            )
            .unwrap_or_default();
            let text = first_capture(
                chunk,
                r#"(?is)data-testid="tweetText"[^>]*>(.*?)</div>"#,
            )
            .map(|s| clean_text(&s))
            .unwrap_or_default();
            if text.is_empty() {
                return None;
            }
            let timestamp = first_capture(chunk, r#"(?is)<time[^>]*datetime="([^"]+)""#)
                .and_then(|raw| parse_timestamp(&raw));
            Some(Post {
                display_name: author.clone(),
                author,
                text,
                timestamp,
                likes: 0,
                retweets: 0,
                replies: 0,
                bookmarks: 0,
                views: 0,
                source_url: page_url.to_owned(),
                origin: OriginStrategy::Direct,
                list_tag: String::new(),
            })
        })
        .collect()
}

/// Split a document into chunks, one per container marker match.
///
/// Each chunk runs from one marker to the next; field regexes then operate
/// on the chunk. This trades DOM fidelity for resilience to the wildly
/// inconsistent markup mirrors actually serve.
fn split_containers<'a>(html: &'a str, marker: &str) -> Vec<&'a str> {
    let re = Regex::new(marker).expect("valid container marker regex");
    let starts: Vec<usize> = re.find_iter(html).map(|m| m.start()).collect();
    starts
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = starts.get(i + 1).copied().unwrap_or(html.len());
            &html[start..end]
        })
        .collect()
}

/// Pull the five engagement counters out of one container chunk.
///
/// Counters are matched by icon class name; a label that classifies as
/// none of the five is ignored, leaving that counter at 0.
fn parse_stats(chunk: &str) -> (u64, u64, u64, u64, u64) {
    let (mut likes, mut retweets, mut replies, mut bookmarks, mut views) = (0, 0, 0, 0, 0);
    let re = Regex::new(r#"(?is)<span[^>]*class="icon-([a-z-]+)"[^>]*>\s*</span>\s*([^<]*)"#)
        .expect("valid stat icon regex");
    for cap in re.captures_iter(chunk) {
        let label = cap[1].to_ascii_lowercase();
        let count = parse_engagement_number(cap[2].trim());
        if label.contains("comment") || label.contains("repl") {
            replies = count;
        } else if label.contains("retweet") || label.contains("repeat") {
            retweets = count;
        } else if label.contains("heart") || label.contains("like") || label.contains("fav") {
            likes = count;
        } else if label.contains("bookmark") {
            bookmarks = count;
        } else if label.contains("view") || label.contains("play") {
            views = count;
        }
    }
    (likes, retweets, replies, bookmarks, views)
}

/// Parse either an RFC 3339 `datetime` attribute or the mirror's
/// human-readable form (`"Dec 25, 2023 · 1:30 PM UTC"`).
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    let trimmed = raw.trim().trim_end_matches(" UTC");
    NaiveDateTime::parse_from_str(trimmed, "%b %d, %Y · %I:%M %p")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Strip tags, decode the common entities, and collapse whitespace.
fn clean_text(input: &str) -> String {
    let tags = Regex::new(r"(?is)<[^>]+>").expect("valid tags regex");
    let no_tags = tags.replace_all(input, " ");
    let decoded = no_tags
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'");
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// `scheme://host` prefix of a page URL, for resolving relative links.
fn page_origin(url: &str) -> String {
    let after_scheme = url.find("://").map_or(0, |i| i + 3);
    let end = url[after_scheme..]
        .find('/')
        .map_or(url.len(), |i| after_scheme + i);
    url[..end].to_owned()
}

fn resolve_href(href: &str, origin: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        href.to_owned()
    } else if href.starts_with('/') {
        format!("{origin}{href}")
    } else {
        format!("{origin}/{href}")
    }
}

fn first_capture(haystack: &str, pattern: &str) -> Option<String> {
    let re = Regex::new(pattern).expect("valid field regex");
    re.captures(haystack)
        .and_then(|cap| cap.get(1).map(|m| m.as_str().trim().to_owned()))
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
