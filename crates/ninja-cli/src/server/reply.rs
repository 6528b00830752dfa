use std::io::Cursor;

use ninja_render::html::{escape, page};
use tiny_http::{Header, Response};

/// A finished response, independent of the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
    pub location: Option<String>,
}

impl Reply {
    pub fn html(status: u16, body: String) -> Self {
        Self {
            status,
            content_type: "text/html; charset=utf-8",
            body,
            location: None,
        }
    }

    pub fn text(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            content_type: "text/plain; charset=utf-8",
            body: body.into(),
            location: None,
        }
    }

    pub fn xml(body: String) -> Self {
        Self {
            status: 200,
            content_type: "application/xml; charset=utf-8",
            body,
            location: None,
        }
    }

    /// `303 See Other`, so the browser follows with a GET.
    pub fn see_other(location: impl Into<String>) -> Self {
        Self {
            status: 303,
            content_type: "text/plain; charset=utf-8",
            body: String::new(),
            location: Some(location.into()),
        }
    }

    /// An HTML error page with a link back to the admin index.
    pub fn error_page(status: u16, title: &str, message: &str) -> Self {
        let body = format!(
            "<h1>{}</h1>\n<p>{}</p>\n<p><a href=\"{}\">&larr; Back to content</a></p>\n",
            escape(title),
            escape(message),
            super::ADMIN_BASE
        );
        Self::html(status, page(title, "", &body))
    }

    pub fn not_found(message: &str) -> Self {
        Self::error_page(404, "Not Found", message)
    }

    pub fn method_not_allowed() -> Self {
        Self::error_page(405, "Method Not Allowed", "This page does not accept that request method.")
    }

    pub fn into_response(self) -> Response<Cursor<Vec<u8>>> {
        let mut response = Response::from_string(self.body).with_status_code(self.status);
        if let Ok(header) = Header::from_bytes(&b"Content-Type"[..], self.content_type.as_bytes()) {
            response = response.with_header(header);
        }
        if let Some(location) = self.location {
            if let Ok(header) = Header::from_bytes(&b"Location"[..], location.as_bytes()) {
                response = response.with_header(header);
            }
        }
        response
    }
}
