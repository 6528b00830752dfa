use std::fmt::Write as _;

use ninja_config::SiteConfig;

use crate::absolute_url;

/// `robots.txt` allowing the public site and hiding configured paths.
#[must_use]
pub fn robots_txt(site: &SiteConfig) -> String {
    let mut out = String::from("User-agent: *\nAllow: /\n");
    for path in &site.disallow {
        let _ = writeln!(out, "Disallow: {path}");
    }
    let _ = writeln!(out, "\nSitemap: {}", absolute_url(site, "/sitemap.xml"));
    out
}
