mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, TestContext};
use serde_json::{json, Value};

#[actix_web::test]
async fn test_create_rejects_invalid_bodies() {
    println!("\n\n[+] Running test: test_create_rejects_invalid_bodies");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let bodies = vec![
        json!({ "name": "" }),
        json!({ "name": "    " }),
        json!({ "name": "x".repeat(256) }),
        json!({ "name": "Widget", "price": -1.5 }),
    ];

    for body in bodies {
        let req = test::TestRequest::post().uri("/items/").set_json(&body).to_request();
        let resp = test::call_service(&app, req).await;
        println!("[<] {} -> {}", body, resp.status());
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let err: Value = test::read_body_json(resp).await;
        assert_eq!(err["error"], "VALIDATION_ERROR");
    }

    let req = test::TestRequest::get().uri("/items").to_request();
    let list: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(list["total"], 0);
    println!("[/] Test passed: nothing reached the store.");
}

#[actix_web::test]
async fn test_create_requires_name() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/items/")
        .set_json(json!({ "price": 3.0 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let err: Value = test::read_body_json(resp).await;
    assert_eq!(err["error"], "BAD_REQUEST");
}

#[actix_web::test]
async fn test_malformed_json_is_bad_request() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/items/")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_update_rejects_invalid_patch() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;
    let seeded = client.seed(common::test_data::sample_item()).await;

    for body in [json!({ "name": "" }), json!({ "name": "   " }), json!({ "price": -3 })] {
        let req = test::TestRequest::patch()
            .uri(&format!("/items/{}", seeded.id))
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY, "body {body}");
    }

    let unchanged = item_catalog::db::item::get(ctx.db.connection(), seeded.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(unchanged, seeded);
}

#[actix_web::test]
async fn test_list_rejects_out_of_range_query() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    for uri in ["/items?page=0", "/items?per_page=0", "/items?per_page=101", "/items?q=%20%20"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY, "uri {uri}");
    }

    let req = test::TestRequest::get().uri("/items?is_active=maybe").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_non_numeric_id_is_bad_request() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::get().uri("/items/abc").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_out_of_range_id_is_not_found() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let requests = vec![
        test::TestRequest::get().uri("/items/99999999999").to_request(),
        test::TestRequest::patch()
            .uri("/items/99999999999")
            .set_json(json!({ "name": "x" }))
            .to_request(),
        test::TestRequest::delete().uri("/items/-99999999999?permanent=true").to_request(),
    ];

    for req in requests {
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let err: Value = test::read_body_json(resp).await;
        assert_eq!(err["error"], "NOT_FOUND");
    }
}
