use std::env;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    routing::{get, post},
    Router,
};
use serde_json::{json, Value as JsonValue};
use tower::ServiceExt;
use training_backend::models::question::question_bank;

fn init_env() {
    env::set_var("SERVER_ADDRESS", "127.0.0.1:0");
    env::set_var("WHATSAPP_PHONE", "573008336000");
    env::set_var("PUBLIC_RPS", "100");
    let _ = training_backend::config::init_config();
}

fn app() -> Router {
    init_env();
    let app_state = training_backend::AppState::new();
    Router::new()
        .route("/api/public/quiz", post(training_backend::routes::quiz::start_quiz))
        .route("/api/public/quiz/:id", get(training_backend::routes::quiz::get_quiz))
        .route(
            "/api/public/quiz/:id/answer",
            post(training_backend::routes::quiz::save_answer),
        )
        .route(
            "/api/public/quiz/:id/advance",
            post(training_backend::routes::quiz::advance_quiz),
        )
        .route(
            "/api/public/quiz/:id/restart",
            post(training_backend::routes::quiz::restart_quiz),
        )
        .route(
            "/api/public/quiz/:id/contact",
            post(training_backend::routes::quiz::submit_contact),
        )
        .with_state(app_state)
}

async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<JsonValue>,
) -> (StatusCode, JsonValue) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let resp = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let body: JsonValue = serde_json::from_slice(&bytes).unwrap_or(JsonValue::Null);
    (status, body)
}

/// Runs the whole quiz answering the first `correct` questions correctly.
async fn play_quiz(app: &Router, correct: usize) -> (String, JsonValue) {
    let (status, body) = request(app, "POST", "/api/public/quiz", None).await;
    assert_eq!(status, StatusCode::CREATED);
    let session_id = body["sessionId"].as_str().unwrap().to_string();

    let mut last = body;
    for (idx, q) in question_bank().iter().enumerate() {
        let answer = if idx < correct {
            q.correct_answer.clone()
        } else {
            "respuesta equivocada".to_string()
        };
        let (status, _) = request(
            app,
            "POST",
            &format!("/api/public/quiz/{}/answer", session_id),
            Some(json!({ "questionId": q.id, "answer": answer })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = request(
            app,
            "POST",
            &format!("/api/public/quiz/{}/advance", session_id),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        last = body;
    }
    (session_id, last)
}

#[tokio::test]
async fn start_exposes_first_question_without_the_answer() {
    let app = app();
    let (status, body) = request(&app, "POST", "/api/public/quiz", None).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["finished"], false);
    assert_eq!(body["currentIndex"], 0);
    assert_eq!(body["totalQuestions"], 5);
    let question = &body["question"];
    assert_eq!(question["id"], 1);
    assert_eq!(question["options"].as_array().unwrap().len(), 4);
    assert!(question.get("correctAnswer").is_none());
}

#[tokio::test]
async fn advance_requires_an_answer_first() {
    let app = app();
    let (_, body) = request(&app, "POST", "/api/public/quiz", None).await;
    let session_id = body["sessionId"].as_str().unwrap();

    let (status, _) = request(
        &app,
        "POST",
        &format!("/api/public/quiz/{}/advance", session_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn four_of_five_scores_eighty_with_ten_percent_discount() {
    let app = app();
    let (_, result) = play_quiz(&app, 4).await;

    assert_eq!(result["finished"], true);
    assert_eq!(result["score"], 80);
    assert_eq!(result["discountPercentage"], 10);
    assert!(result["message"].as_str().unwrap().contains("10%"));
}

#[tokio::test]
async fn perfect_run_earns_fifteen_percent() {
    let app = app();
    let (_, result) = play_quiz(&app, 5).await;

    assert_eq!(result["score"], 100);
    assert_eq!(result["discountPercentage"], 15);
}

#[tokio::test]
async fn failing_run_earns_no_discount() {
    let app = app();
    let (_, result) = play_quiz(&app, 3).await;

    assert_eq!(result["score"], 60);
    assert_eq!(result["discountPercentage"], 0);
}

#[tokio::test]
async fn restart_behaves_like_a_fresh_session() {
    let app = app();
    let (session_id, _) = play_quiz(&app, 0).await;

    let (status, body) = request(
        &app,
        "POST",
        &format!("/api/public/quiz/{}/restart", session_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["finished"], false);
    assert_eq!(body["currentIndex"], 0);
    assert_eq!(body["answered"], 0);

    // Replaying with every correct answer now yields a perfect score.
    for q in question_bank() {
        request(
            &app,
            "POST",
            &format!("/api/public/quiz/{}/answer", session_id),
            Some(json!({ "questionId": q.id, "answer": q.correct_answer })),
        )
        .await;
        request(
            &app,
            "POST",
            &format!("/api/public/quiz/{}/advance", session_id),
            None,
        )
        .await;
    }
    let (_, state) = request(&app, "GET", &format!("/api/public/quiz/{}", session_id), None).await;
    assert_eq!(state["score"], 100);
    assert_eq!(state["discountPercentage"], 15);
}

#[tokio::test]
async fn contact_claims_the_engine_computed_discount() {
    let app = app();
    let (session_id, _) = play_quiz(&app, 4).await;

    let (status, body) = request(
        &app,
        "POST",
        &format!("/api/public/quiz/{}/contact", session_id),
        Some(json!({
            "fullName": "Ana Ruiz",
            "email": "ana@example.com",
            "phone": "3001234567"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let link = body["redirectTarget"].as_str().unwrap();
    let url = url::Url::parse(link).unwrap();
    let (_, text) = url.query_pairs().next().unwrap();
    assert!(text.contains("Puntaje: 80%"));
    assert!(text.contains("Descuento ganado: 10%"));
}

#[tokio::test]
async fn contact_is_refused_without_a_discount() {
    let app = app();
    let (session_id, _) = play_quiz(&app, 3).await;

    let (status, _) = request(
        &app,
        "POST",
        &format!("/api/public/quiz/{}/contact", session_id),
        Some(json!({
            "fullName": "Ana Ruiz",
            "email": "ana@example.com",
            "phone": "3001234567"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn contact_validates_the_contact_fields() {
    let app = app();
    let (session_id, _) = play_quiz(&app, 5).await;

    let (status, body) = request(
        &app,
        "POST",
        &format!("/api/public/quiz/{}/contact", session_id),
        Some(json!({ "fullName": "ab", "email": "nope", "phone": "123" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    let errors = body["fieldErrors"].as_object().unwrap();
    for key in ["fullName", "email", "phone"] {
        assert!(errors.contains_key(key), "missing error for {}", key);
    }
}

#[tokio::test]
async fn unknown_session_returns_not_found() {
    let app = app();
    let (status, _) = request(
        &app,
        "GET",
        "/api/public/quiz/00000000-0000-0000-0000-000000000000",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
