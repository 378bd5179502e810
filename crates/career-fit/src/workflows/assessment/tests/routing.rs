use super::common::*;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crate::workflows::assessment::router::{catalog_handler, results_handler, ScoreRequest};
use crate::workflows::assessment::{assessment_router, Recommendation};

#[tokio::test]
async fn catalog_handler_hides_the_answer_key() {
    let axum::Json(view) = catalog_handler(State(Arc::new(standard_engine()))).await;

    assert_eq!(view.questions.len(), 15);
    assert_eq!(view.likert_scale.len(), 5);

    let payload = serde_json::to_string(&view).expect("serializes");
    assert!(!payload.contains("answerKey"));
    assert!(payload.contains("\"likertScale\""));
}

#[tokio::test]
async fn results_handler_scores_submitted_responses() {
    let request = ScoreRequest {
        responses: [uniform_likert(5), correct_technical()]
            .concat()
            .iter()
            .map(|response| serde_json::to_value(response).expect("response serializes"))
            .collect(),
    };
    let body = serde_json::to_vec(&request).expect("request serializes");

    let axum::Json(results) =
        results_handler(State(Arc::new(standard_engine())), Bytes::from(body))
            .await
            .expect("well-formed body scores");

    assert_eq!(results.confidence_score, 100);
    assert_eq!(results.recommendation, Recommendation::Yes);
}

#[tokio::test]
async fn results_route_skips_malformed_entries_and_keeps_the_rest() {
    let bodies = [
        json!({ "responses": [{ "questionId": "psy1", "value": 5 }, { "questionId": "psy2" }] }),
        json!({ "responses": [{ "questionId": "psy1", "value": 5 }, { "questionId": 7, "value": 3 }] }),
        json!({ "responses": [{ "questionId": "psy1", "value": 5 }, "psy2", 4, null] }),
    ];

    for body in bodies {
        let router = assessment_router(Arc::new(standard_engine()));
        let response = router
            .oneshot(
                Request::post("/api/v1/assessment/results")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(axum::body::Body::from(body.to_string()))
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK, "body: {body}");
        let payload = read_json_body(response).await;
        assert_eq!(payload["scores"]["psychometric"], json!(20), "body: {body}");
    }
}

#[tokio::test]
async fn results_route_treats_null_responses_as_empty() {
    let router = assessment_router(Arc::new(standard_engine()));

    let response = router
        .oneshot(
            Request::post("/api/v1/assessment/results")
                .header(header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(r#"{ "responses": null }"#))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["confidenceScore"], json!(0));
    assert_eq!(payload["recommendation"], json!("No"));
}

#[tokio::test]
async fn results_route_rejects_bodies_that_are_not_json_with_bad_request() {
    let router = assessment_router(Arc::new(standard_engine()));

    let response = router
        .oneshot(
            Request::post("/api/v1/assessment/results")
                .header(header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from("{ \"responses\": [ "))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    let message = payload["error"].as_str().expect("error message");
    assert!(message.starts_with("invalid input"));
}

#[tokio::test]
async fn results_route_accepts_loose_json_values() {
    let router = assessment_router(Arc::new(standard_engine()));
    let body = json!({
        "responses": [
            { "questionId": "psy1", "value": 5 },
            { "questionId": "psy2", "value": "five" },
            { "questionId": "tech1", "value": "People, Planet, Profit" },
            { "questionId": "wiscar1", "value": null },
            { "questionId": "unknown", "value": [1, 2] }
        ]
    });

    let response = router
        .oneshot(
            Request::post("/api/v1/assessment/results")
                .header(header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(body.to_string()))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let payload: Value = read_json_body(response).await;
    assert_eq!(payload["scores"]["psychometric"], json!(20));
    assert_eq!(payload["scores"]["technical"], json!(25));
    assert_eq!(payload["scores"]["wiscar"]["W"], json!(0));
    assert_eq!(payload["recommendation"], json!("No"));
}

#[tokio::test]
async fn results_route_treats_missing_responses_as_empty() {
    let router = assessment_router(Arc::new(standard_engine()));

    let response = router
        .oneshot(
            Request::post("/api/v1/assessment/results")
                .header(header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from("{}"))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["confidenceScore"], json!(0));
}

#[tokio::test]
async fn questions_route_lists_catalog_in_order() {
    let router = assessment_router(Arc::new(standard_engine()));

    let response = router
        .oneshot(
            Request::get("/api/v1/assessment/questions")
                .body(axum::body::Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let questions = payload["questions"].as_array().expect("questions array");
    assert_eq!(questions[0]["id"], json!("psy1"));
    assert_eq!(questions[5]["type"], json!("multiple_choice"));
    assert_eq!(questions[14]["construct"], json!("R"));
    assert_eq!(payload["likertScale"][4]["label"], json!("Strongly Agree"));
}
