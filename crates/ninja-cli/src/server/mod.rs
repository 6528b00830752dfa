//! Admin web server.
//!
//! One blocking `tiny_http` loop; each request is routed on the tokio runtime
//! through [`AdminServer::route`], which is transport-free so it can be
//! exercised directly.

use std::io::Read;

use ninja_actions::{CmsService, Collection};
use ninja_config::NinjaConfig;
use ninja_core::EntitySchema;
use ninja_render::html::{
    FormOptions, ListOptions, confirm_delete_html, form_html, form_title, index_html, list_html, page,
    refresh_meta,
};
use ninja_render::{CollectionList, DeleteOutcome, FormMode, FormState, SubmitOutcome, TOKEN_FIELD};
use ninja_site::{robots_txt, sitemap_xml};
use tokio::runtime::Handle;

mod form_body;
mod reply;
mod tokens;

pub use form_body::parse_form;
pub use reply::Reply;
pub use tokens::SubmitTokens;

use form_body::decode_component;

/// Mount point of the admin pages.
pub const ADMIN_BASE: &str = "/admin/cms";

#[derive(Debug, Clone)]
pub struct AdminServer {
    config: NinjaConfig,
    service: CmsService,
    tokens: SubmitTokens,
}

impl AdminServer {
    pub fn new(config: NinjaConfig, service: CmsService) -> Self {
        Self {
            config,
            service,
            tokens: SubmitTokens::default(),
        }
    }

    /// Serve requests until the server is unblocked.
    pub fn run(&self, server: &tiny_http::Server, runtime: &Handle) {
        for mut request in server.incoming_requests() {
            let method = request.method().to_string();
            let url = request.url().to_string();
            let mut body = String::new();
            if let Err(error) = request.as_reader().read_to_string(&mut body) {
                tracing::warn!(%url, %error, "failed to read request body");
            }

            let reply = runtime.block_on(self.route(&method, &url, &body));
            tracing::debug!(%method, %url, status = reply.status, "admin request");
            if let Err(error) = request.respond(reply.into_response()) {
                tracing::warn!(%url, %error, "failed to send response");
            }
        }
    }

    pub async fn route(&self, method: &str, url: &str, body: &str) -> Reply {
        let path = url.split_once('?').map_or(url, |(path, _)| path);
        let segments: Vec<String> = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(decode_component)
            .collect();
        let segments: Vec<&str> = segments.iter().map(String::as_str).collect();

        match (method, segments.as_slice()) {
            ("GET", []) => Reply::see_other(ADMIN_BASE),
            ("GET", ["healthz"]) => Reply::text("ok"),
            ("GET", ["robots.txt"]) => Reply::text(robots_txt(&self.config.site)),
            ("GET", ["sitemap.xml"]) => Reply::xml(sitemap_xml(&self.config.site, chrono::Utc::now())),
            ("GET", ["admin", "cms"]) => self.index_page(),
            (_, ["admin", "cms"]) => Reply::method_not_allowed(),
            (_, ["admin", "cms", resource, rest @ ..]) => self.entity_route(method, resource, rest, body).await,
            _ => Reply::not_found("No page lives at this address."),
        }
    }

    async fn entity_route(&self, method: &str, resource: &str, rest: &[&str], body: &str) -> Reply {
        let Ok(collection) = self.service.collection(resource) else {
            return Reply::not_found(&format!("Unknown content type '{resource}'."));
        };

        let schema = collection.schema();
        match (method, rest) {
            ("GET", []) => self.list_page(&collection, None).await,
            (_, ["new"]) if !schema.creatable() => Reply::not_found(&format!(
                "{} items arrive from the public site and cannot be created here.",
                schema.name
            )),
            ("GET", ["new"]) => self.create_form(schema),
            ("POST", ["new"]) => self.create(&collection, body).await,
            ("GET", [id, "edit"]) => self.edit_form(&collection, id).await,
            ("POST", [id, "edit"]) => self.update(&collection, id, body).await,
            ("GET", [id, "delete"]) => self.confirm_delete(schema, id),
            ("POST", [id, "delete"]) => self.delete(&collection, id, body).await,
            (_, [] | ["new"] | [_, "edit" | "delete"]) => Reply::method_not_allowed(),
            _ => Reply::not_found("No page lives at this address."),
        }
    }

    fn index_page(&self) -> Reply {
        let body = index_html(self.service.registry().iter(), ADMIN_BASE);
        Reply::html(200, page("Content Management", "", &body))
    }

    async fn list_page(&self, collection: &Collection<'_>, error: Option<String>) -> Reply {
        let schema = collection.schema();
        let (items, warning) = match collection.try_list().await {
            Ok(items) => (items, None),
            Err(e) => (Vec::new(), Some(format!("Could not load {}: {e}", schema.noun()))),
        };

        let status = if error.is_some() { 502 } else { 200 };
        let mut list = CollectionList::new(schema, items, list_path(schema)).with_media_base(self.config.api.media_base());
        if let Some(error) = error {
            list = list.with_error(error);
        }

        let options = ListOptions {
            refresh_secs: self.config.server.refresh_interval_secs,
            warning,
            hide_create: !schema.creatable(),
            back_href: Some(ADMIN_BASE.to_string()),
            ..ListOptions::default()
        };
        let head = refresh_meta(options.refresh_secs);
        Reply::html(status, page(&schema.name, &head, &list_html(&list, &options)))
    }

    fn create_form(&self, schema: &EntitySchema) -> Reply {
        let form = FormState::create(schema).with_back_url(list_path(schema));
        self.form_page(200, form, &format!("{}/new", list_path(schema)))
    }

    async fn create(&self, collection: &Collection<'_>, body: &str) -> Reply {
        let schema = collection.schema();
        let pairs = parse_form(body);
        let mut form = self.posted_form(schema, FormMode::Create, &pairs);
        let outcome = form.submit(|item| collection.create(item)).await;
        self.after_submit(form, outcome, &format!("{}/new", list_path(schema)))
    }

    async fn edit_form(&self, collection: &Collection<'_>, id: &str) -> Reply {
        let schema = collection.schema();
        let Some(item) = collection.get(id).await else {
            return Reply::not_found(&format!("{} #{id} was not found.", schema.name));
        };
        let form = FormState::edit(schema, id, &item).with_back_url(list_path(schema));
        self.form_page(200, form, &edit_path(schema, id))
    }

    async fn update(&self, collection: &Collection<'_>, id: &str, body: &str) -> Reply {
        let schema = collection.schema();
        let pairs = parse_form(body);
        let mut form = self.posted_form(schema, FormMode::Edit { id: id.to_string() }, &pairs);
        let outcome = form.submit(|item| collection.update(id, item)).await;
        self.after_submit(form, outcome, &edit_path(schema, id))
    }

    /// Form state for a post. A post whose token was already spent, or that
    /// carries none, counts as a submission still in flight.
    fn posted_form(&self, schema: &EntitySchema, mode: FormMode, pairs: &[(String, String)]) -> FormState {
        let mut form = FormState::from_post(schema, mode, pairs).with_back_url(list_path(schema));
        if !self.redeem(pairs) {
            form.set_submitting(true);
        }
        form
    }

    fn redeem(&self, pairs: &[(String, String)]) -> bool {
        pairs
            .iter()
            .find(|(key, _)| key == TOKEN_FIELD)
            .is_some_and(|(_, token)| self.tokens.redeem(token))
    }

    fn after_submit(&self, form: FormState, outcome: SubmitOutcome, action: &str) -> Reply {
        match outcome {
            SubmitOutcome::Saved { redirect, .. } => Reply::see_other(redirect),
            SubmitOutcome::Blocked(_) => self.form_page(422, form, action),
            SubmitOutcome::Failed(_) => self.form_page(502, form, action),
            SubmitOutcome::Busy => Reply::error_page(
                409,
                "Already submitted",
                "This form was already submitted. Check the list before trying again.",
            ),
        }
    }

    /// Every rendered form gets a fresh submit token.
    fn form_page(&self, status: u16, form: FormState, action: &str) -> Reply {
        let form = form.with_token(self.tokens.issue());
        let options = FormOptions::new(action).media_base(self.config.api.media_base());
        let body = format!(
            "<p><a href=\"{}\">&larr; Back</a></p>\n{}",
            list_path(form.schema()),
            form_html(&form, &options)
        );
        Reply::html(status, page(&form_title(&form), "", &body))
    }

    fn confirm_delete(&self, schema: &EntitySchema, id: &str) -> Reply {
        let token = self.tokens.issue();
        let body = confirm_delete_html(schema, id, &delete_path(schema, id), &list_path(schema), Some(&token));
        Reply::html(200, page(&format!("Delete {}", schema.name), "", &body))
    }

    /// Only a post carrying `confirm=yes` deletes; anything else goes back
    /// to the list untouched. A confirmed post with a spent token is busy.
    async fn delete(&self, collection: &Collection<'_>, id: &str, body: &str) -> Reply {
        let schema = collection.schema();
        let pairs = parse_form(body);
        let confirmed = pairs.iter().any(|(key, value)| key == "confirm" && value == "yes");

        let mut list = CollectionList::new(schema, Vec::new(), list_path(schema));
        if confirmed && !self.redeem(&pairs) {
            list = list.with_pending_delete(id);
        }
        let outcome = list
            .delete(id, &|_: &str| confirmed, |id| async move { collection.delete(&id).await })
            .await;

        match outcome {
            DeleteOutcome::Deleted | DeleteOutcome::Declined => Reply::see_other(list_path(schema)),
            DeleteOutcome::Failed(message) => self.list_page(collection, Some(message)).await,
            DeleteOutcome::Busy => Reply::error_page(
                409,
                "Already submitted",
                "This delete was already submitted. Check the list before trying again.",
            ),
        }
    }
}

fn list_path(schema: &EntitySchema) -> String {
    format!("{ADMIN_BASE}/{}", schema.resource)
}

fn edit_path(schema: &EntitySchema, id: &str) -> String {
    format!("{}/{}/edit", list_path(schema), urlencoding::encode(id))
}

fn delete_path(schema: &EntitySchema, id: &str) -> String {
    format!("{}/{}/delete", list_path(schema), urlencoding::encode(id))
}

#[cfg(test)]
mod tests;
