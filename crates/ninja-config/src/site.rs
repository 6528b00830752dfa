//! Public site identity used for page metadata, the sitemap and robots.txt.

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://ninjapark-frontend.azurewebsites.net".to_string()
}

fn default_name() -> String {
    "Ninja Inflatable Park".to_string()
}

fn default_title() -> String {
    "Ninja Inflatable Park | India's Biggest Inflatable Park in Bangalore".to_string()
}

fn default_description() -> String {
    concat!(
        "Experience the ultimate fun at Ninja Inflatable Park, India's biggest inflatable park ",
        "in Bangalore! Perfect for kids' birthday parties, family entertainment, weekend ",
        "activities, and adventure. Book your slot now!"
    )
    .to_string()
}

fn default_routes() -> Vec<String> {
    [
        "/",
        "/about",
        "/attractions",
        "/facilities",
        "/pricing",
        "/parties",
        "/party-booking",
        "/groups",
        "/book",
        "/faq",
        "/guidelines",
        "/contact",
        "/privacy",
        "/waiver-terms",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_keywords() -> Vec<String> {
    [
        "indoor trampoline park",
        "kids activity park",
        "family entertainment center",
        "kids birthday party venue",
        "trampoline park bookings",
        "ninja inflatable park",
        "indoor play area in Bangalore",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_og_image() -> String {
    "/og-image.jpg".to_string()
}

fn default_disallow() -> Vec<String> {
    vec!["/admin/".to_string(), "/api/".to_string()]
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    /// Canonical public origin, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_name")]
    pub name: String,

    /// Default page title.
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_description")]
    pub description: String,

    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,

    /// Social preview image, relative to `base_url` unless absolute.
    #[serde(default = "default_og_image")]
    pub og_image: String,

    /// Public routes listed in the sitemap.
    #[serde(default = "default_routes")]
    pub routes: Vec<String>,

    /// Paths crawlers are asked to skip.
    #[serde(default = "default_disallow")]
    pub disallow: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            name: default_name(),
            title: default_title(),
            description: default_description(),
            keywords: default_keywords(),
            og_image: default_og_image(),
            routes: default_routes(),
            disallow: default_disallow(),
        }
    }
}
