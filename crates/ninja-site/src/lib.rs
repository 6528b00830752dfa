//! # ninja-site
//!
//! SEO artifacts for the public site: `robots.txt`, `sitemap.xml` and
//! per-page metadata. All of it is derived from [`SiteConfig`].

mod meta;
mod robots;
mod sitemap;

pub use meta::PageMeta;
pub use robots::robots_txt;
pub use sitemap::{ChangeFreq, sitemap_xml};

use ninja_config::SiteConfig;

/// Absolute URL of a site path.
#[must_use]
pub fn absolute_url(site: &SiteConfig, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let base = site.base_url.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        format!("{base}/")
    } else {
        format!("{base}/{path}")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn absolute_urls() {
        let site = SiteConfig {
            base_url: "https://ninjapark.in/".into(),
            ..SiteConfig::default()
        };
        assert_eq!(absolute_url(&site, "/"), "https://ninjapark.in/");
        assert_eq!(absolute_url(&site, "/pricing"), "https://ninjapark.in/pricing");
        assert_eq!(absolute_url(&site, "https://cdn/x.jpg"), "https://cdn/x.jpg");
    }
}
