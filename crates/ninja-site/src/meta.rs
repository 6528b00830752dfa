//! Per-page `<head>` metadata.

use serde::Serialize;

use ninja_config::SiteConfig;

use crate::absolute_url;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub canonical_base: String,
    pub og_image: String,
    pub site_name: String,
}

impl PageMeta {
    /// Metadata for one page. A page title becomes `"{title} | {site}"`;
    /// without one the site's default title is used. A missing description
    /// falls back to the site description.
    #[must_use]
    pub fn for_page(site: &SiteConfig, title: Option<&str>, description: Option<&str>) -> Self {
        let title = title
            .filter(|t| !t.trim().is_empty())
            .map_or_else(|| site.title.clone(), |t| format!("{t} | {}", site.name));
        let description = description
            .filter(|d| !d.trim().is_empty())
            .map_or_else(|| site.description.clone(), str::to_string);

        Self {
            title,
            description,
            keywords: site.keywords.clone(),
            canonical_base: absolute_url(site, "/"),
            og_image: absolute_url(site, &site.og_image),
            site_name: site.name.clone(),
        }
    }
}
