//! End-to-end API tests
//!
//! Drive the full router over an in-memory database: happy-path CRUD, the
//! invariant rejections, and the deletion guards, all through HTTP.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tower::ServiceExt;

use flightline_server::api::{create_router, AppState};
use flightline_server::config::Config;

fn app(pool: SqlitePool) -> Router {
    create_router(AppState { db: pool }, &Config::default())
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            builder.body(Body::from(value.to_string())).unwrap()
        },
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

async fn create(app: &Router, path: &str, body: Value) -> String {
    let (status, response) = send(app, Method::POST, path, Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "create {} failed: {}", path, response);
    response["data"]["id"].as_str().unwrap().to_string()
}

/// Stage the fixtures used by most scenarios: one airline, two airports,
/// and an aircraft owned by the airline.
async fn stage_fleet(app: &Router) -> (String, String, String, String) {
    let airline = create(app, "/api/v1/airlines", json!({ "name": "Test Air" })).await;
    let p1 = create(app, "/api/v1/airports", json!({ "name": "North Field" })).await;
    let p2 = create(app, "/api/v1/airports", json!({ "name": "South Field" })).await;
    let aircraft = create(
        app,
        "/api/v1/aircraft",
        json!({ "model": "A320", "airline_id": airline }),
    )
    .await;
    (airline, p1, p2, aircraft)
}

fn flight_body(p1: &str, p2: &str, aircraft: &str, airline: &str) -> Value {
    json!({
        "flight_number": "FL100",
        "departure_airport_id": p1,
        "arrival_airport_id": p2,
        "departure_time": "2025-06-01T09:00:00Z",
        "arrival_time": "2025-06-01T10:00:00Z",
        "aircraft_id": aircraft,
        "airline_id": airline,
    })
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_end_to_end_flight_booking_and_crew(pool: SqlitePool) {
    let app = app(pool);
    let (airline, p1, p2, aircraft) = stage_fleet(&app).await;

    // Flight creation succeeds and defaults to Scheduled.
    let (status, response) = send(
        &app,
        Method::POST,
        "/api/v1/flights",
        Some(flight_body(&p1, &p2, &aircraft, &airline)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(response["data"]["status"], "Scheduled");
    let flight = response["data"]["id"].as_str().unwrap().to_string();

    // A loop to the same airport is rejected.
    let (status, response) = send(
        &app,
        Method::POST,
        "/api/v1/flights",
        Some(flight_body(&p1, &p1, &aircraft, &airline)),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(response["error"].as_str().unwrap().contains("airport"));

    // Seat 12A can be sold once.
    let passenger = create(
        &app,
        "/api/v1/passengers",
        json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": "ada@example.com",
        }),
    )
    .await;
    let other = create(
        &app,
        "/api/v1/passengers",
        json!({
            "first_name": "Grace",
            "last_name": "Hopper",
            "email": "grace@example.com",
        }),
    )
    .await;

    let booking = create(
        &app,
        "/api/v1/bookings",
        json!({ "flight_id": flight, "passenger_id": passenger, "seat_number": "12A" }),
    )
    .await;

    let (status, response) = send(
        &app,
        Method::POST,
        "/api/v1/bookings",
        Some(json!({ "flight_id": flight, "passenger_id": other, "seat_number": "12A" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(response["error"].as_str().unwrap().contains("12A"));

    // Crew from another airline cannot work the flight.
    let rival = create(&app, "/api/v1/airlines", json!({ "name": "Rival Air" })).await;
    let foreign_crew = create(
        &app,
        "/api/v1/crew-members",
        json!({ "first_name": "Kim", "last_name": "Reyes", "airline_id": rival }),
    )
    .await;

    let (status, _) = send(
        &app,
        Method::POST,
        &format!("/api/v1/flights/{}/crew", flight),
        Some(json!({ "crew_member_id": foreign_crew, "role": "Pilot" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // The airline's own crew can, exactly once.
    let crew = create(
        &app,
        "/api/v1/crew-members",
        json!({ "first_name": "Sam", "last_name": "Okafor", "airline_id": airline }),
    )
    .await;

    let (status, _) = send(
        &app,
        Method::POST,
        &format!("/api/v1/flights/{}/crew", flight),
        Some(json!({ "crew_member_id": crew, "role": "Pilot" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(
        &app,
        Method::POST,
        &format!("/api/v1/flights/{}/crew", flight),
        Some(json!({ "crew_member_id": crew, "role": "Pilot" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Flight detail embeds the booking and the assignment.
    let (status, response) = send(&app, Method::GET, &format!("/api/v1/flights/{}", flight), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["data"]["bookings"].as_array().unwrap().len(), 1);
    assert_eq!(response["data"]["crew"].as_array().unwrap().len(), 1);

    // Bookings block flight deletion and the counts say why.
    let (status, response) = send(
        &app,
        Method::DELETE,
        &format!("/api/v1/flights/{}", flight),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["data"]["counts"]["bookings"], 1);

    // Remove the booking; the crew assignment alone does not block.
    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/api/v1/bookings/{}", booking),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, response) = send(
        &app,
        Method::DELETE,
        &format!("/api/v1/flights/{}", flight),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{}", response);
    assert_eq!(response["data"]["removed_assignments"], 1);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_flight_rejects_inverted_times(pool: SqlitePool) {
    let app = app(pool);
    let (airline, p1, p2, aircraft) = stage_fleet(&app).await;

    let mut body = flight_body(&p1, &p2, &aircraft, &airline);
    body["departure_time"] = json!("2025-06-01T12:00:00Z");

    let (status, response) = send(&app, Method::POST, "/api/v1/flights", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(response["error"].as_str().unwrap().contains("before"));
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_flight_rejects_cross_airline_aircraft(pool: SqlitePool) {
    let app = app(pool);
    let (_, p1, p2, aircraft) = stage_fleet(&app).await;
    let rival = create(&app, "/api/v1/airlines", json!({ "name": "Rival Air" })).await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/flights",
        Some(flight_body(&p1, &p2, &aircraft, &rival)),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_unknown_flight_reference_is_404(pool: SqlitePool) {
    let app = app(pool);
    let (airline, p1, p2, _) = stage_fleet(&app).await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/flights",
        Some(flight_body(&p1, &p2, "missing", &airline)),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::GET, "/api/v1/flights/missing", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_airline_deletion_guard(pool: SqlitePool) {
    let app = app(pool);
    let (airline, _, _, aircraft) = stage_fleet(&app).await;

    let (status, response) = send(
        &app,
        Method::DELETE,
        &format!("/api/v1/airlines/{}", airline),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["data"]["counts"]["aircraft"], 1);
    assert_eq!(response["data"]["counts"]["flights"], 0);

    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/api/v1/aircraft/{}", aircraft),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/api/v1/airlines/{}", airline),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_passenger_email_uniqueness(pool: SqlitePool) {
    let app = app(pool);

    let ada = create(
        &app,
        "/api/v1/passengers",
        json!({ "first_name": "Ada", "last_name": "Lovelace", "email": "ada@example.com" }),
    )
    .await;

    // Second passenger with the same email is rejected.
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/passengers",
        Some(json!({ "first_name": "Imposter", "last_name": "L", "email": "ada@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Updating a passenger to their own email succeeds.
    let (status, _) = send(
        &app,
        Method::PUT,
        &format!("/api/v1/passengers/{}", ada),
        Some(json!({ "first_name": "Ada", "last_name": "Byron", "email": "ada@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Updating another passenger to the taken email is rejected.
    let grace = create(
        &app,
        "/api/v1/passengers",
        json!({ "first_name": "Grace", "last_name": "Hopper", "email": "grace@example.com" }),
    )
    .await;
    let (status, _) = send(
        &app,
        Method::PUT,
        &format!("/api/v1/passengers/{}", grace),
        Some(json!({ "first_name": "Grace", "last_name": "Hopper", "email": "ada@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_missing_required_field_is_400(pool: SqlitePool) {
    let app = app(pool);

    let (status, response) = send(
        &app,
        Method::POST,
        "/api/v1/airlines",
        Some(json!({ "iata_code": "XX" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "name is required");
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_health_stats_and_root(pool: SqlitePool) {
    let app = app(pool);
    stage_fleet(&app).await;

    let (status, response) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["status"], "healthy");

    let (status, response) = send(&app, Method::GET, "/stats", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["data"]["airlines"], 1);
    assert_eq!(response["data"]["airports"], 2);
    assert_eq!(response["data"]["aircraft"], 1);
    assert_eq!(response["data"]["flights"], 0);

    let (status, response) = send(&app, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["name"], "Flightline Server");
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_airline_detail_embeds_children(pool: SqlitePool) {
    let app = app(pool);
    let (airline, p1, p2, aircraft) = stage_fleet(&app).await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/flights",
        Some(flight_body(&p1, &p2, &aircraft, &airline)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, response) = send(
        &app,
        Method::GET,
        &format!("/api/v1/airlines/{}", airline),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["data"]["aircraft"].as_array().unwrap().len(), 1);
    assert_eq!(response["data"]["flights"].as_array().unwrap().len(), 1);
    assert_eq!(response["data"]["crew_members"].as_array().unwrap().len(), 0);
}
