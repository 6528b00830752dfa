use ninja_render::{EMPTY_MESSAGE, FIX_ERRORS};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use super::AdminServer;
use crate::context::AppContext;
use crate::test_support::{Backend, BackendContext, unreachable_context};

fn admin(ctx: AppContext) -> AdminServer {
    AdminServer::new(ctx.config, ctx.service)
}

/// The submit token embedded in a rendered form.
fn token_in(html: &str) -> String {
    let marker = "name=\"_token\" value=\"";
    let start = html.find(marker).expect("form carries a token") + marker.len();
    let end = html[start..].find('"').expect("closing quote");
    html[start..start + end].to_string()
}

async fn fresh_token(admin: &AdminServer, page: &str) -> String {
    let reply = admin.route("GET", page, "").await;
    assert_eq!(reply.status, 200, "{page}");
    token_in(&reply.body)
}

fn seeded() -> Backend {
    let backend = Backend::start();
    backend.seed(
        "faqs",
        vec![json!({"id": 7, "question": "Are grip socks required?", "answer": "Yes", "active": true})],
    );
    backend
}

#[tokio::test]
async fn health_robots_and_sitemap() {
    let admin = admin(unreachable_context());

    let health = admin.route("GET", "/healthz", "").await;
    assert_eq!((health.status, health.body.as_str()), (200, "ok"));

    let robots = admin.route("GET", "/robots.txt", "").await;
    assert!(robots.content_type.starts_with("text/plain"));
    assert!(robots.body.contains("Disallow: /admin/"));

    let sitemap = admin.route("GET", "/sitemap.xml", "").await;
    assert!(sitemap.content_type.starts_with("application/xml"));
    assert!(sitemap.body.contains("<urlset"));
}

#[tokio::test]
async fn root_redirects_to_the_admin_index() {
    let reply = admin(unreachable_context()).route("GET", "/", "").await;
    assert_eq!(reply.status, 303);
    assert_eq!(reply.location.as_deref(), Some("/admin/cms"));
}

#[tokio::test]
async fn index_links_every_entity() {
    let reply = admin(unreachable_context()).route("GET", "/admin/cms", "").await;
    assert_eq!(reply.status, 200);
    assert!(reply.body.contains("href=\"/admin/cms/faqs\""));
    assert!(reply.body.contains("href=\"/admin/cms/gallery\""));
}

#[tokio::test]
async fn unknown_entity_and_path_are_404() {
    let admin = admin(unreachable_context());
    assert_eq!(admin.route("GET", "/admin/cms/bookings", "").await.status, 404);
    assert_eq!(admin.route("GET", "/nowhere", "").await.status, 404);
    assert_eq!(admin.route("GET", "/admin/cms/faqs/1/frobnicate", "").await.status, 404);
}

#[tokio::test]
async fn wrong_method_is_405() {
    let admin = admin(unreachable_context());
    assert_eq!(admin.route("PUT", "/admin/cms/faqs", "").await.status, 405);
    assert_eq!(admin.route("DELETE", "/admin/cms/faqs/1/delete", "").await.status, 405);
}

#[tokio::test]
async fn list_page_shows_rows() {
    let backend = seeded();
    let reply = admin(backend.context()).route("GET", "/admin/cms/faqs?page=1", "").await;

    assert_eq!(reply.status, 200);
    assert!(reply.body.contains("Are grip socks required?"));
    assert!(reply.body.contains("href=\"/admin/cms/faqs/7/edit\""));
    assert!(reply.body.contains("New FAQ"));
    assert!(reply.body.contains("http-equiv=\"refresh\""));
}

#[tokio::test]
async fn list_page_warns_when_backend_is_down() {
    let reply = admin(unreachable_context()).route("GET", "/admin/cms/faqs", "").await;

    assert_eq!(reply.status, 200);
    assert!(reply.body.contains("banner warning"));
    assert!(reply.body.contains(EMPTY_MESSAGE));
}

#[tokio::test]
async fn new_form_renders_defaults() {
    let reply = admin(unreachable_context()).route("GET", "/admin/cms/faqs/new", "").await;
    assert_eq!(reply.status, 200);
    assert!(reply.body.contains("<title>New FAQ</title>"));
    assert!(reply.body.contains("FAQ Details"));
    assert!(reply.body.contains("action=\"/admin/cms/faqs/new\" onsubmit="));
    assert!(!token_in(&reply.body).is_empty());
}

#[tokio::test]
async fn invalid_post_rerenders_without_calling_backend() {
    let backend = Backend::start();
    let admin = admin(backend.context());
    let token = fresh_token(&admin, "/admin/cms/faqs/new").await;

    let reply = admin
        .route("POST", "/admin/cms/faqs/new", &format!("question=&answer=Yes&_token={token}"))
        .await;

    assert_eq!(reply.status, 422);
    assert!(reply.body.contains(FIX_ERRORS));
    assert!(reply.body.contains("Question is required"));
    assert_ne!(token_in(&reply.body), token);
    assert_eq!(backend.request_count(), 0);
}

#[tokio::test]
async fn corrected_post_after_rejection_is_accepted() {
    let backend = Backend::start();
    let admin = admin(backend.context());
    let token = fresh_token(&admin, "/admin/cms/faqs/new").await;

    let rejected = admin
        .route("POST", "/admin/cms/faqs/new", &format!("question=&answer=Yes&_token={token}"))
        .await;
    let retry = token_in(&rejected.body);
    let reply = admin
        .route("POST", "/admin/cms/faqs/new", &format!("question=Socks%3F&answer=Yes&_token={retry}"))
        .await;

    assert_eq!(reply.status, 303);
    assert_eq!(backend.request_count(), 1);
}

#[tokio::test]
async fn repeated_post_is_saved_once() {
    let backend = Backend::start();
    let admin = admin(backend.context());
    let token = fresh_token(&admin, "/admin/cms/faqs/new").await;
    let body = format!("question=Socks%3F&answer=Yes&_token={token}");

    let first = admin.route("POST", "/admin/cms/faqs/new", &body).await;
    let second = admin.route("POST", "/admin/cms/faqs/new", &body).await;

    assert_eq!(first.status, 303);
    assert_eq!(second.status, 409);
    assert!(second.body.contains("already submitted"));
    let posts = backend.requests().into_iter().filter(|r| r.method == "POST").count();
    assert_eq!(posts, 1);
}

#[tokio::test]
async fn post_without_token_never_reaches_backend() {
    let backend = Backend::start();
    let reply = admin(backend.context())
        .route("POST", "/admin/cms/faqs/new", "question=Socks%3F&answer=Yes")
        .await;

    assert_eq!(reply.status, 409);
    assert_eq!(backend.request_count(), 0);
}

#[tokio::test]
async fn valid_post_creates_and_redirects() {
    let backend = Backend::start();
    let admin = admin(backend.context());
    let token = fresh_token(&admin, "/admin/cms/faqs/new").await;
    let reply = admin
        .route(
            "POST",
            "/admin/cms/faqs/new",
            &format!("question=Grip+socks%3F&answer=Yes&active=on&_token={token}"),
        )
        .await;

    assert_eq!(reply.status, 303);
    assert_eq!(reply.location.as_deref(), Some("/admin/cms/faqs"));

    let requests = backend.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/api/v1/cms/faqs/");
    let sent: Value = serde_json::from_str(&requests[0].body).unwrap();
    assert_eq!(sent["question"], "Grip socks?");
    assert_eq!(sent["active"], true);
}

#[tokio::test]
async fn backend_failure_keeps_the_form() {
    let backend = Backend::start();
    let admin = admin(backend.context());
    let token = fresh_token(&admin, "/admin/cms/faqs/new").await;
    backend.fail_with(500);
    let reply = admin
        .route("POST", "/admin/cms/faqs/new", &format!("question=Socks%3F&answer=Yes&_token={token}"))
        .await;

    assert_eq!(reply.status, 502);
    assert!(reply.body.contains("Failed to create faq"));
    assert!(reply.body.contains("value=\"Socks?\""));
}

#[tokio::test]
async fn edit_form_is_prefilled_and_missing_item_is_404() {
    let backend = seeded();
    let admin = admin(backend.context());

    let reply = admin.route("GET", "/admin/cms/faqs/7/edit", "").await;
    assert_eq!(reply.status, 200);
    assert!(reply.body.contains("<title>Edit FAQ</title>"));
    assert!(reply.body.contains("Are grip socks required?"));

    assert_eq!(admin.route("GET", "/admin/cms/faqs/99/edit", "").await.status, 404);
}

#[tokio::test]
async fn edit_post_updates_and_redirects() {
    let backend = seeded();
    let admin = admin(backend.context());
    let token = fresh_token(&admin, "/admin/cms/faqs/7/edit").await;
    let reply = admin
        .route("POST", "/admin/cms/faqs/7/edit", &format!("question=Socks%3F&answer=Always&_token={token}"))
        .await;

    assert_eq!(reply.status, 303);
    let put = backend.requests().into_iter().find(|r| r.method == "PUT").expect("PUT sent");
    assert_eq!(put.path, "/api/v1/cms/faqs/7/");
    let sent: Value = serde_json::from_str(&put.body).unwrap();
    assert_eq!(sent["answer"], "Always");
    assert_eq!(sent["active"], false);
}

#[tokio::test]
async fn delete_page_asks_first() {
    let reply = admin(unreachable_context()).route("GET", "/admin/cms/faqs/7/delete", "").await;
    assert_eq!(reply.status, 200);
    assert!(reply.body.contains("Are you sure you want to delete this item?"));
    assert!(reply.body.contains("name=\"confirm\" value=\"yes\""));
    assert!(!token_in(&reply.body).is_empty());
}

#[tokio::test]
async fn delete_without_confirmation_sends_nothing() {
    let backend = seeded();
    let reply = admin(backend.context()).route("POST", "/admin/cms/faqs/7/delete", "").await;

    assert_eq!(reply.status, 303);
    assert_eq!(backend.request_count(), 0);
}

#[tokio::test]
async fn confirmed_delete_removes_the_item() {
    let backend = seeded();
    let admin = admin(backend.context());
    let token = fresh_token(&admin, "/admin/cms/faqs/7/delete").await;
    let body = format!("confirm=yes&_token={token}");

    let reply = admin.route("POST", "/admin/cms/faqs/7/delete", &body).await;
    assert_eq!(reply.status, 303);
    assert_eq!(reply.location.as_deref(), Some("/admin/cms/faqs"));

    let again = admin.route("POST", "/admin/cms/faqs/7/delete", &body).await;
    assert_eq!(again.status, 409);

    let methods: Vec<String> = backend.requests().into_iter().map(|r| r.method).collect();
    assert_eq!(methods, vec!["DELETE"]);
}

#[tokio::test]
async fn failed_delete_shows_the_error_on_the_list() {
    let backend = Backend::start();
    let admin = admin(backend.context());
    let token = fresh_token(&admin, "/admin/cms/faqs/404/delete").await;
    let reply = admin
        .route("POST", "/admin/cms/faqs/404/delete", &format!("confirm=yes&_token={token}"))
        .await;

    assert_eq!(reply.status, 502);
    assert!(reply.body.contains("banner error"));
    assert!(reply.body.contains("Failed to delete faq"));
}

#[tokio::test]
async fn contact_messages_are_an_inbox() {
    let backend = Backend::start();
    backend.seed(
        "contact-messages",
        vec![json!({"id": 4, "name": "Ana", "email": "ana@example.com", "message": "Hi", "is_read": false})],
    );
    let admin = admin(backend.context());

    let list = admin.route("GET", "/admin/cms/contact-messages", "").await;
    assert_eq!(list.status, 200);
    assert!(!list.body.contains("New Contact Message"));
    assert!(list.body.contains("href=\"/admin/cms/contact-messages/4/edit\">View</a>"));
    assert!(list.body.contains("href=\"/admin/cms/contact-messages/4/delete\">Delete</a>"));

    assert_eq!(admin.route("GET", "/admin/cms/contact-messages/new", "").await.status, 404);
    let post = admin
        .route("POST", "/admin/cms/contact-messages/new", "name=Ana&email=a%40b.com&message=Hi")
        .await;
    assert_eq!(post.status, 404);
    assert_eq!(backend.request_count(), 1);
}

#[tokio::test]
async fn contact_info_edit_is_validated_then_put_once() {
    let backend = Backend::start();
    backend.seed(
        "contact-info",
        vec![json!({"id": 1, "phone": "999", "email": "old@b.com", "address": "Old"})],
    );
    let admin = admin(backend.context());
    let token = fresh_token(&admin, "/admin/cms/contact-info/1/edit").await;
    let before = backend.request_count();

    let rejected = admin
        .route(
            "POST",
            "/admin/cms/contact-info/1/edit",
            &format!("phone=&email=a%40b.com&address=X&_token={token}"),
        )
        .await;
    assert_eq!(rejected.status, 422);
    assert!(rejected.body.contains("Phone is required"));
    assert_eq!(backend.request_count(), before);

    let retry = token_in(&rejected.body);
    let saved = admin
        .route(
            "POST",
            "/admin/cms/contact-info/1/edit",
            &format!("phone=123&email=a%40b.com&address=X&_token={retry}"),
        )
        .await;
    assert_eq!(saved.status, 303);

    let puts: Vec<_> = backend.requests().into_iter().filter(|r| r.method == "PUT").collect();
    assert_eq!(puts.len(), 1);
    assert_eq!(puts[0].path, "/api/v1/cms/contact-info/1/");
    let sent: Value = serde_json::from_str(&puts[0].body).unwrap();
    assert_eq!(sent["phone"], "123");
    assert_eq!(backend.request_count(), before + 1);
}
