//! Media URL resolution for images stored by the backend.

/// Host the backend historically returned in absolute media URLs.
const LEGACY_HOST: &str = "http://localhost:8000";

/// Turn a stored media reference into a URL the browser can load.
///
/// - empty input gives an empty string
/// - absolute URLs on the legacy local host are moved to `media_base`
/// - other absolute URLs pass through
/// - `media/...` and `/media/...` are prefixed with `media_base`
/// - `uploads/...` and `logos/...` live under `{media_base}/media/`
/// - anything else (static assets, data URLs) is returned unchanged
#[must_use]
pub fn media_url(media_base: &str, raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }
    let base = media_base.trim_end_matches('/');

    if let Some(rest) = raw.strip_prefix(LEGACY_HOST) {
        return format!("{base}{rest}");
    }
    if raw.starts_with("http://") || raw.starts_with("https://") {
        return raw.to_string();
    }

    let relative = raw.trim_start_matches('/');
    if relative.starts_with("media/") {
        return format!("{base}/{relative}");
    }
    if relative.starts_with("uploads/") || relative.starts_with("logos/") {
        return format!("{base}/media/{relative}");
    }
    raw.to_string()
}
