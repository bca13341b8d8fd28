//! HTTP-level tests for the invoices resource.

mod common;

use common::spawn_app;
use serde_json::{json, Value};

#[tokio::test]
async fn get_invoices_lists_id_and_comp_code() {
    let app = spawn_app().await;

    let response = app.client.get(app.url("/invoices")).send().await.unwrap();

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "invoices": [
                {"id": 1, "comp_code": "apple"},
                {"id": 2, "comp_code": "apple"},
                {"id": 3, "comp_code": "ibm"},
            ]
        })
    );
}

#[tokio::test]
async fn get_invoice_embeds_company() {
    let app = spawn_app().await;

    let response = app.client.get(app.url("/invoices/1")).send().await.unwrap();

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "invoice": {
                "id": 1,
                "company": {
                    "code": "apple",
                    "name": "Apple Computer",
                    "description": "Maker of OSX.",
                },
                "amt": 100.0,
                "paid": false,
                "add_date": "2023-07-27T07:00:00.000Z",
                "paid_date": null,
            }
        })
    );
}

#[tokio::test]
async fn get_unknown_invoice_returns_404() {
    let app = spawn_app().await;

    let response = app
        .client
        .get(app.url("/invoices/999"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn get_non_numeric_invoice_returns_404() {
    let app = spawn_app().await;

    let response = app
        .client
        .get(app.url("/invoices/abc"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn post_invoice_starts_unpaid() {
    let app = spawn_app().await;

    let response = app
        .client
        .post(app.url("/invoices"))
        .json(&json!({"comp_code": "ibm", "amt": 100}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["invoice"]["id"], 4);
    assert_eq!(body["invoice"]["comp_code"], "ibm");
    assert_eq!(body["invoice"]["amt"], json!(100.0));
    assert_eq!(body["invoice"]["paid"], false);
    assert_eq!(body["invoice"]["paid_date"], Value::Null);
    assert!(body["invoice"]["add_date"].is_string());
}

#[tokio::test]
async fn post_invoice_unknown_company_returns_500() {
    let app = spawn_app().await;

    let response = app
        .client
        .post(app.url("/invoices"))
        .json(&json!({"comp_code": "nocompany", "amt": 100}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
}

#[tokio::test]
async fn post_invoice_missing_fields_returns_500() {
    let app = spawn_app().await;

    let response = app
        .client
        .post(app.url("/invoices"))
        .json(&json!({}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
}

#[tokio::test]
async fn put_invoice_paying_sets_paid_date() {
    let app = spawn_app().await;

    let response = app
        .client
        .put(app.url("/invoices/1"))
        .json(&json!({"amt": 500, "paid": true}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["invoice"]["id"], 1);
    assert_eq!(body["invoice"]["comp_code"], "apple");
    assert_eq!(body["invoice"]["amt"], json!(500.0));
    assert_eq!(body["invoice"]["paid"], true);
    assert!(body["invoice"]["paid_date"].is_string());
    // add_date is untouched by updates
    assert_eq!(body["invoice"]["add_date"], "2023-07-27T07:00:00.000Z");
}

#[tokio::test]
async fn put_invoice_unpaying_clears_paid_date() {
    let app = spawn_app().await;

    let response = app
        .client
        .put(app.url("/invoices/3"))
        .json(&json!({"amt": 300, "paid": false}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["invoice"]["paid"], false);
    assert_eq!(body["invoice"]["paid_date"], Value::Null);
}

#[tokio::test]
async fn put_invoice_resubmitting_paid_keeps_paid_date() {
    let app = spawn_app().await;

    let response = app
        .client
        .put(app.url("/invoices/3"))
        .json(&json!({"amt": 300, "paid": true}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["invoice"]["paid"], true);
    assert_eq!(body["invoice"]["paid_date"], "2023-08-01T07:00:00.000Z");
}

#[tokio::test]
async fn put_unknown_invoice_returns_404() {
    let app = spawn_app().await;

    let response = app
        .client
        .put(app.url("/invoices/9999"))
        .json(&json!({"amt": 1000}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn put_invoice_empty_body_returns_500() {
    let app = spawn_app().await;

    let response = app
        .client
        .put(app.url("/invoices/1"))
        .json(&json!({}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["code"], "REQUEST_FAILED");
}

#[tokio::test]
async fn delete_invoice_then_get_returns_404() {
    let app = spawn_app().await;

    let response = app
        .client
        .delete(app.url("/invoices/1"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"status": "deleted"}));

    let response = app.client.get(app.url("/invoices/1")).send().await.unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn delete_unknown_invoice_returns_404() {
    let app = spawn_app().await;

    let response = app
        .client
        .delete(app.url("/invoices/999"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 404);
}
