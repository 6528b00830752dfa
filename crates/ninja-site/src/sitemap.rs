//! `sitemap.xml` generation (sitemaps.org protocol 0.9).

use std::fmt::{self, Write as _};

use chrono::{DateTime, SecondsFormat, Utc};
use ninja_config::SiteConfig;

use crate::absolute_url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFreq {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl fmt::Display for ChangeFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        })
    }
}

/// Legal pages change rarely; the home page most often.
fn route_policy(route: &str) -> (ChangeFreq, &'static str) {
    match route.trim_end_matches('/') {
        "" => (ChangeFreq::Daily, "1.0"),
        "/privacy" | "/terms" | "/waiver-terms" => (ChangeFreq::Yearly, "0.3"),
        "/pricing" | "/parties" | "/party-booking" | "/book" => (ChangeFreq::Weekly, "0.9"),
        _ => (ChangeFreq::Monthly, "0.7"),
    }
}

/// One `<url>` per configured route, stamped with `generated_at`.
#[must_use]
pub fn sitemap_xml(site: &SiteConfig, generated_at: DateTime<Utc>) -> String {
    let lastmod = generated_at.to_rfc3339_opts(SecondsFormat::Secs, true);
    let mut out = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for route in &site.routes {
        let (changefreq, priority) = route_policy(route);
        let _ = write!(
            out,
            "  <url>\n    <loc>{}</loc>\n    <lastmod>{lastmod}</lastmod>\n    \
             <changefreq>{changefreq}</changefreq>\n    <priority>{priority}</priority>\n  </url>\n",
            xml_escape(&absolute_url(site, route))
        );
    }
    out.push_str("</urlset>\n");
    out
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
