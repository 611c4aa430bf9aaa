use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::quiz::router::{result_handler, submit_handler, type_handler};
use crate::quiz::service::QuizService;

#[tokio::test]
async fn questions_route_lists_the_battery_in_order() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(
            Request::get("/api/questions")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let questions = payload.as_array().expect("array payload");
    assert_eq!(questions.len(), 15);
    assert_eq!(questions[0]["id"], 1);
    assert_eq!(questions[0]["dimension"], "H");
    assert_eq!(questions[5]["dimension"], "A");
    assert_eq!(questions[0]["options"][1]["weights"]["T"], 3);
}

#[tokio::test]
async fn submit_route_returns_the_assembled_result() {
    let (service, repository) = build_service();
    let router = router_with_service(service);
    let body = json!({
        "sessionId": "session_route",
        "answers": [
            { "questionId": 1, "optionIndex": 1 },
            { "questionId": 2, "optionIndex": 1 },
            { "questionId": 6, "optionIndex": 1 },
            { "questionId": 11, "optionIndex": 1 },
            { "questionId": 42, "optionIndex": 0 }
        ],
        "gender": null
    });

    let response = router
        .oneshot(
            Request::post("/api/submit-test")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["type"], "TSR");
    assert_eq!(payload["scores"], json!({"T": 6, "E": 0, "D": 0, "S": 3, "I": 0, "R": 3}));
    assert_eq!(
        payload["percentages"],
        json!({"hormone": 100, "action": 0, "focus": 0})
    );
    assert!(payload.get("gender").is_none());
    assert_eq!(repository.len(), 1);
}

#[tokio::test]
async fn submit_route_accepts_other_gender_and_negative_indices() {
    let (service, repository) = build_service();
    let router = router_with_service(service);
    let body = json!({
        "sessionId": "s1",
        "answers": [
            { "questionId": 1, "optionIndex": 1 },
            { "questionId": 2, "optionIndex": -1 }
        ],
        "gender": "other"
    });

    let response = router
        .oneshot(
            Request::post("/api/submit-test")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["type"], "TSR");
    assert_eq!(payload["scores"]["T"], 3);
    assert_eq!(payload["gender"], "other");
    assert_eq!(payload["title"], "Steady Pillar (Teto)");
    assert_eq!(repository.len(), 1);
}

#[tokio::test]
async fn submit_handler_rejects_blank_sessions() {
    let (service, _) = build_service();

    let response = submit_handler(State(Arc::new(service)), axum::Json(submission("", Vec::new())))
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn submit_handler_returns_internal_error_on_repository_failure() {
    let service = Arc::new(QuizService::new(
        Arc::new(engine()),
        Arc::new(UnavailableRepository),
    ));

    let response = submit_handler(State(service), axum::Json(submission("s-1", Vec::new()))).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn result_handler_returns_stored_results() {
    let (service, _) = build_service();
    let service = Arc::new(service);
    service
        .submit(submission("session_lookup", leaning_answers([false, false, true])))
        .expect("submission succeeds");

    let response = result_handler(State(service), Path("session_lookup".to_string())).await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["sessionId"], "session_lookup");
    assert_eq!(payload["result"]["type"], "ESI");
    assert_eq!(payload["complete"], true);
    assert!(payload["completedAt"].is_string());
}

#[tokio::test]
async fn result_handler_returns_not_found_for_unknown_sessions() {
    let (service, _) = build_service();

    let response = result_handler(State(Arc::new(service)), Path("missing".to_string())).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload = read_json_body(response).await;
    assert_eq!(payload["error"], "test result not found");
}

#[tokio::test]
async fn type_handler_resolves_codes_and_rejects_unknown_ones() {
    let (service, _) = build_service();
    let service = Arc::new(service);

    let found = type_handler(State(service.clone()), Path("edr".to_string())).await;
    assert_eq!(found.status(), StatusCode::OK);
    let payload = read_json_body(found).await;
    assert_eq!(payload["type"], "EDR");
    assert_eq!(payload["name"], "Warm Leader");

    let missing = type_handler(State(service), Path("XYZ".to_string())).await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn types_route_lists_all_profiles() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(Request::get("/api/types").body(Body::empty()).unwrap())
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let codes: Vec<&str> = payload
        .as_array()
        .expect("array payload")
        .iter()
        .filter_map(|profile| profile["type"].as_str())
        .collect();
    assert_eq!(
        codes,
        vec!["TDI", "TDR", "TSI", "TSR", "EDI", "EDR", "ESI", "ESR"]
    );
}
