use super::*;
use crate::error::ServiceErrorKind;
use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

async fn spawn_service(app: Router) -> String {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}")
}

fn recording_route(seen: Arc<Mutex<Vec<Value>>>, reply: Value) -> axum::routing::MethodRouter {
    post(move |Json(body): Json<Value>| {
        let seen = seen.clone();
        let reply = reply.clone();
        async move {
            seen.lock().expect("lock").push(body);
            Json(reply)
        }
    })
}

fn mentor_json(name: &str, score: f64) -> Value {
    json!({
        "professor_name": name,
        "professor_code": format!("P-{name}"),
        "field_of_expertise": "Data Science",
        "years_of_experience": 12,
        "feedback_rating": 8.5,
        "past_mentee_performance": 7.0,
        "behavior_rating": 9.0,
        "final_score": score,
        "contact_email": format!("{}@uni.edu", name.to_lowercase()),
    })
}

fn sample_profile() -> PlacementProfile {
    PlacementProfile {
        coding_profile_rating: 1500.0,
        grades: 8.1,
        major_projects: 2,
        mini_projects: 3,
        internship: 1,
        hackathon: 0,
        communication_skill_rating: 7.5,
        workshops_certifications: 2,
        attendance: 85.0,
        field: "Data Science".to_string(),
        skills: vec!["Python".to_string(), "SQL".to_string()],
    }
}

#[tokio::test]
async fn fetches_general_catalog_in_service_order() {
    let app = Router::new().route(
        "/available-fields",
        get(|| async { Json(json!({"fields": ["Web Development", "Data Science"]})) }),
    );
    let client = HttpAdvisoryClient::new(&spawn_service(app).await).expect("client");

    let catalog = client.fetch_general_fields().await.expect("catalog");
    assert_eq!(catalog.fields(), ["Web Development", "Data Science"]);
    assert_eq!(catalog.default_selection(), Some("Web Development"));
}

#[tokio::test]
async fn mentor_catalog_uses_its_own_endpoint() {
    let app = Router::new()
        .route(
            "/available-fields",
            get(|| async { Json(json!({"fields": ["Cybersecurity"]})) }),
        )
        .route(
            "/mentor-fields",
            get(|| async { Json(json!({"fields": ["AI/ML", "Data Science"]})) }),
        );
    let client = HttpAdvisoryClient::new(&spawn_service(app).await).expect("client");

    let catalog = client.fetch_mentor_fields().await.expect("catalog");
    assert_eq!(catalog.fields(), ["AI/ML", "Data Science"]);
}

#[tokio::test]
async fn recommend_skills_serializes_request_and_maps_response() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new().route(
        "/recommend-skills",
        recording_route(
            seen.clone(),
            json!({
                "field": "Web Development",
                "match_score": 33,
                "skills_you_have": ["HTML", "React"],
                "skills_to_learn": ["CSS", "JavaScript", "MongoDB", "Node.js"],
            }),
        ),
    );
    let client = HttpAdvisoryClient::new(&spawn_service(app).await).expect("client");

    let skills = vec!["HTML".to_string(), "React".to_string()];
    let recommendation = client
        .recommend_skills("Web Development", &skills)
        .await
        .expect("recommendation");

    assert_eq!(recommendation.match_score, 33.0);
    assert_eq!(recommendation.skills_have, ["HTML", "React"]);
    assert_eq!(recommendation.skills_to_learn.len(), 4);
    let requests = seen.lock().expect("lock");
    assert_eq!(
        requests[0],
        json!({"field_of_interest": "Web Development", "user_skills": ["HTML", "React"]})
    );
}

#[tokio::test]
async fn match_mentors_preserves_service_order_and_clamps_top_n() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new().route(
        "/match-mentors",
        recording_route(
            seen.clone(),
            json!({"mentors": [
                mentor_json("Ada", 0.77),
                mentor_json("Grace", 0.92),
                mentor_json("Alan", 0.81),
            ]}),
        ),
    );
    let client = HttpAdvisoryClient::new(&spawn_service(app).await).expect("client");

    let mentors = client.match_mentors("Data Science", 42).await.expect("mentors");

    let names: Vec<_> = mentors.iter().map(|m| m.professor_name.as_str()).collect();
    assert_eq!(names, ["Ada", "Grace", "Alan"]);
    assert_eq!(mentors[0].years_of_experience, 12.0);
    assert_eq!(seen.lock().expect("lock")[0]["top_n"], json!(10));
}

#[tokio::test]
async fn mentor_missing_a_field_is_malformed() {
    let mut incomplete = mentor_json("Ada", 0.9);
    incomplete
        .as_object_mut()
        .expect("object")
        .remove("contact_email");
    let app = Router::new().route(
        "/match-mentors",
        post(move || {
            let incomplete = incomplete.clone();
            async move { Json(json!({"mentors": [incomplete]})) }
        }),
    );
    let client = HttpAdvisoryClient::new(&spawn_service(app).await).expect("client");

    let err = client
        .match_mentors("Data Science", 3)
        .await
        .expect_err("must be malformed");
    assert_eq!(err.kind(), ServiceErrorKind::MalformedResponse);
    assert!(err.to_string().contains("contact_email"), "unexpected error: {err}");
}

#[tokio::test]
async fn non_success_status_carries_service_detail() {
    let app = Router::new().route(
        "/mentor-fields",
        get(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"detail": "Mentor data not available"})),
            )
        }),
    );
    let client = HttpAdvisoryClient::new(&spawn_service(app).await).expect("client");

    let err = client.fetch_mentor_fields().await.expect_err("must fail");
    match err {
        ServiceError::Service { status, detail, .. } => {
            assert_eq!(status, 500);
            assert_eq!(detail, "Mentor data not available");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn non_json_error_body_is_kept_as_text() {
    let app = Router::new().route(
        "/available-fields",
        get(|| async { (StatusCode::BAD_GATEWAY, "upstream down") }),
    );
    let client = HttpAdvisoryClient::new(&spawn_service(app).await).expect("client");

    let err = client.fetch_general_fields().await.expect_err("must fail");
    assert_eq!(err.kind(), ServiceErrorKind::Service);
    assert!(err.to_string().contains("upstream down"));
}

#[tokio::test]
async fn unreachable_service_is_a_network_error() {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let client = HttpAdvisoryClient::new(&format!("http://{addr}")).expect("client");
    let err = client.fetch_general_fields().await.expect_err("must fail");
    assert_eq!(err.kind(), ServiceErrorKind::Network);
    assert_eq!(err.operation(), "fetch_general_fields");
}

#[tokio::test]
async fn predict_placement_sends_typed_profile() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new().route(
        "/predict-placement",
        recording_route(
            seen.clone(),
            json!({
                "predicted_tier": "Tier 2",
                "confidence_scores": {"Tier 1": 0.2, "Tier 2": 0.65, "Tier 3": 0.15},
            }),
        ),
    );
    let client = HttpAdvisoryClient::new(&spawn_service(app).await).expect("client");

    let prediction = client
        .predict_placement(&sample_profile())
        .await
        .expect("prediction");

    assert_eq!(prediction.predicted_tier, "Tier 2");
    assert_eq!(prediction.confidence_scores["Tier 2"], 0.65);
    let body = &seen.lock().expect("lock")[0];
    assert!(body["major_projects"].is_u64());
    assert!(body["grades"].is_f64());
    assert_eq!(body["skills"], json!(["Python", "SQL"]));
    assert_eq!(body["field"], json!("Data Science"));
}

#[tokio::test]
async fn confidence_outside_unit_range_is_malformed() {
    let app = Router::new().route(
        "/predict-placement",
        post(|| async {
            Json(json!({
                "predicted_tier": "Tier 1",
                "confidence_scores": {"Tier 1": 81.0},
            }))
        }),
    );
    let client = HttpAdvisoryClient::new(&spawn_service(app).await).expect("client");

    let err = client
        .predict_placement(&sample_profile())
        .await
        .expect_err("must be malformed");
    assert_eq!(err.kind(), ServiceErrorKind::MalformedResponse);
}

#[tokio::test]
async fn health_flags_default_to_false() {
    let app = Router::new().route("/health", get(|| async { Json(json!({"status": "healthy"})) }));
    let client = HttpAdvisoryClient::new(&spawn_service(app).await).expect("client");

    let health = client.check_health().await.expect("health");
    assert!(health.is_healthy());
    assert!(!health.models_loaded);
    assert!(!health.mentor_data_loaded);
}

#[tokio::test]
async fn base_url_path_prefix_is_kept() {
    let app = Router::new().route(
        "/api/available-fields",
        get(|| async { Json(json!({"fields": ["Cybersecurity"]})) }),
    );
    let base = format!("{}/api", spawn_service(app).await);
    let client = HttpAdvisoryClient::new(&base).expect("client");

    assert!(client.base_url().as_str().ends_with("/api/"));
    let catalog = client.fetch_general_fields().await.expect("catalog");
    assert_eq!(catalog.fields(), ["Cybersecurity"]);
}

#[test]
fn rejects_unusable_base_urls() {
    assert!(HttpAdvisoryClient::new("not a url").is_err());
    assert!(HttpAdvisoryClient::new("ftp://example.com").is_err());
}

#[tokio::test]
async fn service_call_routes_to_matching_operation() {
    let app = Router::new().route(
        "/mentor-fields",
        get(|| async { Json(json!({"fields": ["Data Science"]})) }),
    );
    let client = HttpAdvisoryClient::new(&spawn_service(app).await).expect("client");

    let call = ServiceCall::FetchFields(CatalogKind::Mentor);
    assert_eq!(call.operation(), "fetch_mentor_fields");
    match call.execute(&client).await {
        ServiceReply::Fields(Ok(catalog)) => assert_eq!(catalog.fields(), ["Data Science"]),
        other => panic!("unexpected reply: {other:?}"),
    }
}
