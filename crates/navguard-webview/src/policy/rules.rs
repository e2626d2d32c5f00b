//! URL matching rules for the reported initial load.
//!
//! The host resolves the packaged page to an absolute `file://` path that
//! embeds identifiers the caller cannot know in advance, so the check is a
//! suffix match against the base locator's tail rather than equality.

use super::engine::DenyReason;

/// Only scheme the packaged page can legitimately be loaded from.
pub const FILE_SCHEME: &str = "file://";

// The packaged page is a static file and never carries query syntax.
// Rejects shapes like `https://evil.example/?./webview/index.html`.
const QUERY_CHARS: [char; 2] = ['&', '?'];

/// Comparison suffix: the base locator with at most one leading `./` removed.
pub fn base_url_tail(base_locator: &str) -> &str {
    base_locator.strip_prefix("./").unwrap_or(base_locator)
}

/// Check a candidate URL against the expected tail.
///
/// Rules run in order: scheme, suffix, query syntax. The first failure wins.
pub fn check_url(url: &str, tail: &str) -> Result<(), DenyReason> {
    if !url.starts_with(FILE_SCHEME) {
        return Err(DenyReason::NotFileScheme);
    }
    if !url.ends_with(tail) {
        return Err(DenyReason::SuffixMismatch);
    }
    if url.contains(&QUERY_CHARS[..]) {
        return Err(DenyReason::QuerySyntax);
    }
    Ok(())
}
