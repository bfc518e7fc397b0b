// ABOUTME: Integration tests for the OpenFoodFacts client against a local stub server
// ABOUTME: Validates request parameters, first-product extraction, and error mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use axum::{
    extract::{Query, State},
    http::{header::USER_AGENT, HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use macro_tracker::errors::ErrorCode;
use macro_tracker::external::{NutrientSource, OpenFoodFactsClient, OpenFoodFactsConfig};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

/// Requests seen by the stub, as (query parameters, user agent)
type Seen = Arc<Mutex<Vec<(HashMap<String, String>, String)>>>;

async fn search_stub(
    State(seen): State<Seen>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    let user_agent = headers
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    let terms = params.get("search_terms").cloned().unwrap_or_default();
    seen.lock().unwrap().push((params, user_agent));

    let body = match terms.as_str() {
        "apple" => json!({
            "count": 412,
            "page_size": 1,
            "products": [{
                "product_name": "Pink Lady Apple",
                "nutriments": {
                    "energy-kcal_100g": 52,
                    "proteins_100g": 0.3,
                    "carbohydrates_100g": 14,
                    "fat_100g": 0.2
                }
            }]
        }),
        "granola" => json!({
            "count": "7",
            "products": [{
                "product_name": "Crunchy Granola",
                "nutriments": { "energy-kcal": 450, "proteins_100g": 9 }
            }]
        }),
        "water" => json!({
            "count": 1,
            "products": [{ "product_name": "Still water", "nutriments": {} }]
        }),
        "nullish" => json!({ "count": 0, "products": null }),
        "slow" => {
            tokio::time::sleep(Duration::from_secs(3)).await;
            json!({ "count": 0, "products": [] })
        }
        "boom" => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "internal" })),
            )
        }
        _ => json!({ "count": 0, "products": [] }),
    };
    (StatusCode::OK, Json(body))
}

async fn spawn_stub() -> (String, Seen) {
    let seen: Seen = Arc::default();
    let app = Router::new()
        .route("/cgi/search.pl", get(search_stub))
        .with_state(seen.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), seen)
}

fn client_with_timeout(base_url: String, timeout_secs: u64) -> OpenFoodFactsClient {
    OpenFoodFactsClient::new(OpenFoodFactsConfig {
        base_url,
        timeout_secs,
        user_agent: "macro-tracker-tests/0.1".to_owned(),
    })
    .unwrap()
}

fn client_for(base_url: String) -> OpenFoodFactsClient {
    client_with_timeout(base_url, 5)
}

#[tokio::test]
async fn test_search_sends_expected_parameters() {
    let (base_url, seen) = spawn_stub().await;
    let client = client_for(format!("{base_url}/"));

    client.lookup("apple").await.unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    let (params, user_agent) = &seen[0];
    assert_eq!(params.get("search_terms").map(String::as_str), Some("apple"));
    assert_eq!(params.get("search_simple").map(String::as_str), Some("1"));
    assert_eq!(params.get("action").map(String::as_str), Some("process"));
    assert_eq!(params.get("json").map(String::as_str), Some("1"));
    assert_eq!(params.get("page_size").map(String::as_str), Some("1"));
    assert_eq!(user_agent, "macro-tracker-tests/0.1");
}

#[tokio::test]
async fn test_first_product_profile_is_returned() {
    let (base_url, _) = spawn_stub().await;
    let client = client_for(base_url);

    let food = client.lookup("apple").await.unwrap().unwrap();

    assert_eq!(food.name.as_deref(), Some("Pink Lady Apple"));
    assert_eq!(food.profile.energy_kcal_100g, Some(52.0));
    assert_eq!(food.profile.protein_100g, Some(0.3));
    assert_eq!(food.profile.carbs_100g, Some(14.0));
    assert_eq!(food.profile.fat_100g, Some(0.2));
}

#[tokio::test]
async fn test_zero_matches_is_none() {
    let (base_url, _) = spawn_stub().await;
    let client = client_for(base_url);

    assert!(client.lookup("xyzzynonfood").await.unwrap().is_none());
}

#[tokio::test]
async fn test_null_products_is_none() {
    let (base_url, _) = spawn_stub().await;
    let client = client_for(base_url);

    assert!(client.lookup("nullish").await.unwrap().is_none());
}

#[tokio::test]
async fn test_energy_fallback_key_and_missing_macros() {
    let (base_url, _) = spawn_stub().await;
    let client = client_for(base_url);

    let food = client.lookup("granola").await.unwrap().unwrap();

    assert_eq!(food.profile.energy_kcal_100g, Some(450.0));
    assert_eq!(food.profile.protein_100g, Some(9.0));
    assert_eq!(food.profile.carbs_100g, None);
    assert_eq!(food.profile.fat_100g, None);
}

#[tokio::test]
async fn test_product_without_energy_is_incomplete() {
    let (base_url, _) = spawn_stub().await;
    let client = client_for(base_url);

    let food = client.lookup("water").await.unwrap().unwrap();

    assert_eq!(food.profile.energy_kcal_100g, None);
    assert!(!food.profile.is_complete());
}

#[tokio::test]
async fn test_server_error_is_external_service_error() {
    let (base_url, _) = spawn_stub().await;
    let client = client_for(base_url);

    let error = client.lookup("boom").await.unwrap_err();

    assert_eq!(error.code, ErrorCode::ExternalServiceError);
    assert!(error.message.contains("500"));
}

#[tokio::test]
async fn test_slow_source_times_out_without_retry() {
    let (base_url, seen) = spawn_stub().await;
    let client = client_with_timeout(base_url, 1);

    let error = client.lookup("slow").await.unwrap_err();

    assert_eq!(error.code, ErrorCode::ExternalServiceUnavailable);
    assert_eq!(seen.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_unreachable_host_is_external_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = client_for(format!("http://{addr}"));

    let error = client.lookup("apple").await.unwrap_err();

    assert!(error.code.is_external());
}

#[tokio::test]
async fn test_blank_query_is_rejected_without_request() {
    let (base_url, seen) = spawn_stub().await;
    let client = client_for(base_url);

    let error = client.lookup("   ").await.unwrap_err();

    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert!(seen.lock().unwrap().is_empty());
}
