//! URL construction for CMS collection endpoints.

/// The REST endpoint of one entity collection.
///
/// The backend expects trailing slashes: `{base}/cms/{resource}/` for the
/// collection and `{base}/cms/{resource}/{id}/` for one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    collection: String,
}

impl Endpoint {
    #[must_use]
    pub fn new(base_url: &str, resource: &str) -> Self {
        let base = base_url.trim().trim_end_matches('/');
        let resource = resource.trim().trim_matches('/');
        Self {
            collection: format!("{base}/cms/{resource}/"),
        }
    }

    /// URL of the whole collection.
    #[must_use]
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// URL of one item. The id is percent-encoded.
    #[must_use]
    pub fn item(&self, id: &str) -> String {
        format!("{}{}/", self.collection, urlencoding::encode(id.trim()))
    }
}
