//! Form round trips on built-in schemas: blocked, fixed, saved.

use std::cell::{Cell, RefCell};
use std::time::Duration;

use ninja_actions::test_support::StubBackend;
use ninja_core::{ActionResult, Item};
use ninja_render::html::{FormOptions, form_html};
use ninja_render::{FIX_ERRORS, FormMode, FormState, SubmitOutcome};
use ninja_schema::SchemaRegistry;
use pretty_assertions::assert_eq;
use serde_json::json;

fn post(raw: &[(&str, &str)]) -> Vec<(String, String)> {
    raw.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
}

#[tokio::test]
async fn pricing_plan_form_round_trip() {
    let registry = SchemaRegistry::builtin();
    let schema = registry.get("pricing_plan").unwrap();
    let calls = Cell::new(0);

    let mut form = FormState::from_post(
        schema,
        FormMode::Create,
        &post(&[("name", "Jump Hour"), ("type", "SESSION"), ("price", "abc"), ("duration", "60")]),
    );
    let outcome = form
        .submit(|_| {
            calls.set(calls.get() + 1);
            async { ActionResult::done() }
        })
        .await;

    let SubmitOutcome::Blocked(errors) = outcome else {
        panic!("expected validation to block the submit");
    };
    assert_eq!(errors.get("price"), Some("Price must be a number"));
    assert_eq!(calls.get(), 0);

    let html = form_html(&form, &FormOptions::new("/admin/cms/pricing-plans/new"));
    assert!(html.contains(FIX_ERRORS));
    assert!(html.contains("Price must be a number"));
    assert!(html.contains("value=\"Jump Hour\""));

    form.set("price", "799");
    let outcome = form
        .submit(|item| async move {
            assert_eq!(item.get("price"), Some(&json!(799)));
            assert_eq!(item.get("popular"), Some(&json!(false)));
            ActionResult::saved(item.with("id", 12))
        })
        .await;

    let SubmitOutcome::Saved { item, redirect } = outcome else {
        panic!("expected the save to succeed");
    };
    assert_eq!(item.id().as_deref(), Some("12"));
    assert_eq!(redirect, "/admin/cms/pricing-plans");
    assert!(form.banner().is_none());
}

#[tokio::test]
async fn contact_info_edit_is_checked_locally_then_put_once() {
    let backend = StubBackend::start();
    backend.seed(
        "contact-info",
        vec![json!({"id": 1, "phone": "999", "email": "old@b.com", "address": "Old"})],
    );
    let service = backend.service(Duration::ZERO);
    let contacts = service.collection("contact_info").unwrap();
    let stored = Item::try_from(json!({"id": 1, "phone": "", "email": "a@b.com", "address": "X"})).unwrap();

    let mut form = FormState::edit(contacts.schema(), "1", &stored);
    let outcome = form.submit(|item| contacts.update("1", item)).await;

    let SubmitOutcome::Blocked(errors) = outcome else {
        panic!("expected a blank phone to block the submit");
    };
    assert_eq!(errors.get("phone"), Some("Phone is required"));
    assert_eq!(backend.request_count(), 0);

    form.set("phone", "123");
    let seen = RefCell::new(None);
    let (seen_ref, contacts_ref) = (&seen, &contacts);
    let outcome = form
        .submit(|item| async move {
            let result = contacts_ref.update("1", item).await;
            seen_ref.replace(Some(result.clone()));
            result
        })
        .await;

    assert!(matches!(outcome, SubmitOutcome::Saved { .. }), "{outcome:?}");
    let result = seen.into_inner().expect("handler ran");
    assert!(result.success);
    let item = result.item.expect("saved item");
    assert_eq!(item.text("phone").as_deref(), Some("123"));
    assert_eq!(item.id().as_deref(), Some("1"));

    let requests = backend.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "PUT");
    assert_eq!(requests[0].path, "/api/v1/cms/contact-info/1/");
}

#[test]
fn untouched_list_survives_an_edit_round_trip() {
    let registry = SchemaRegistry::builtin();
    let schema = registry.get("pricing_plan").unwrap();
    let features = json!(["[VIP] lounge access", "Socks"]);
    let stored = Item::try_from(json!({
        "id": 2,
        "name": "VIP",
        "type": "SESSION",
        "price": 999,
        "duration": 60,
        "features": features.clone()
    }))
    .unwrap();

    let form = FormState::edit(schema, "2", &stored);
    let item = form.check().expect("stored item re-validates");
    assert_eq!(item.get("features"), Some(&features));
}
