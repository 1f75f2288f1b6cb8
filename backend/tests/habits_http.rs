//! End-to-end HTTP scenarios over the fully configured application.
//!
//! The app is assembled the same way the server does it (trace middleware
//! plus `inbound::http::configure`) but backed by the in-memory repository,
//! so these run without PostgreSQL.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use habit_tracker::Trace;
use habit_tracker::domain::TRACE_ID_HEADER;
use habit_tracker::domain::ports::HabitRepositoryError;
use habit_tracker::inbound::http;
use habit_tracker::inbound::http::state::HttpState;
use habit_tracker::test_support::InMemoryHabitRepository;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

#[fixture]
fn repo() -> Arc<InMemoryHabitRepository> {
    Arc::new(InMemoryHabitRepository::new())
}

fn app(
    repo: Arc<InMemoryHabitRepository>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(HttpState::from_repository(repo)))
        .wrap(Trace)
        .configure(http::configure)
}

async fn body_text(res: actix_web::dev::ServiceResponse) -> String {
    let bytes = actix_test::read_body(res).await;
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

#[rstest]
#[actix_web::test]
async fn json_lifecycle_keeps_identity_and_creation_time(repo: Arc<InMemoryHabitRepository>) {
    let app = actix_test::init_service(app(repo)).await;

    let created: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/habits")
            .set_json(json!({ "name": "Test", "description": "desc" }))
            .to_request(),
    )
    .await;
    let id = created["id"].as_i64().expect("numeric id");
    assert!(id > 0);
    assert_eq!(created["name"], "Test");
    assert_eq!(created["description"], "desc");

    let listed: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get().uri("/api/habits").to_request(),
    )
    .await;
    assert_eq!(listed[0]["id"], created["id"], "new habit is listed first");

    let updated: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::put()
            .uri(&format!("/api/habits/{id}"))
            .set_json(json!({ "name": "Updated" }))
            .to_request(),
    )
    .await;
    assert_eq!(updated["name"], "Updated");
    assert_eq!(updated["description"], "");

    let fetched: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/api/habits/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(fetched["name"], "Updated");
    assert_eq!(fetched["created_at"], created["created_at"]);
    assert_eq!(fetched, updated);

    let deleted = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete()
            .uri(&format!("/api/habits/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(deleted.status(), StatusCode::OK);

    let gone = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/api/habits/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(gone).await;
    assert_eq!(body["code"], "not_found");
}

#[rstest]
#[actix_web::test]
async fn unknown_ids_follow_the_documented_contract(repo: Arc<InMemoryHabitRepository>) {
    let app = actix_test::init_service(app(repo)).await;

    let put = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri("/api/habits/999999")
            .set_json(json!({ "name": "Ghost" }))
            .to_request(),
    )
    .await;
    assert_eq!(put.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let delete = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete()
            .uri("/api/habits/999999")
            .to_request(),
    )
    .await;
    assert_eq!(delete.status(), StatusCode::OK);

    let page_put = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri("/habits/999999")
            .set_form([("name", "Ghost")])
            .to_request(),
    )
    .await;
    assert_eq!(page_put.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(page_put).await, "Update failed");

    let page_delete = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete()
            .uri("/habits/999999")
            .to_request(),
    )
    .await;
    assert_eq!(page_delete.status(), StatusCode::OK);
}

#[rstest]
#[case::json_get("GET", "/api/habits/notanint")]
#[case::json_put("PUT", "/api/habits/notanint")]
#[case::json_delete("DELETE", "/api/habits/notanint")]
#[case::page_edit("GET", "/habits/notanint")]
#[case::page_put("PUT", "/habits/notanint")]
#[case::page_delete("DELETE", "/habits/notanint")]
#[actix_web::test]
async fn malformed_ids_never_reach_storage(
    repo: Arc<InMemoryHabitRepository>,
    #[case] method: &str,
    #[case] uri: &str,
) {
    repo.fail_with(HabitRepositoryError::connection("storage must not be touched"));
    let app = actix_test::init_service(app(repo)).await;

    let req = match method {
        "GET" => actix_test::TestRequest::get(),
        "PUT" => actix_test::TestRequest::put(),
        "DELETE" => actix_test::TestRequest::delete(),
        other => panic!("unexpected method {other}"),
    };
    let req = if uri.starts_with("/api") {
        req.uri(uri).set_json(json!({ "name": "Any" }))
    } else {
        req.uri(uri).set_form([("name", "Any")])
    };
    let res = actix_test::call_service(&app, req.to_request()).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[rstest]
#[actix_web::test]
async fn htmx_page_flow_renders_fragments(repo: Arc<InMemoryHabitRepository>) {
    let app = actix_test::init_service(app(repo)).await;

    let created = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/habits")
            .insert_header(("HX-Request", "true"))
            .set_form([("name", "Test"), ("description", "desc")])
            .to_request(),
    )
    .await;
    assert_eq!(created.status(), StatusCode::OK);
    let fragment = body_text(created).await;
    assert!(fragment.contains("Test"));
    assert!(fragment.contains("desc"));
    assert!(!fragment.contains("<html"), "htmx requests get a fragment");

    actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/habits")
            .set_form([("name", "Second")])
            .to_request(),
    )
    .await;

    let page = body_text(
        actix_test::call_service(&app, actix_test::TestRequest::get().uri("/").to_request())
            .await,
    )
    .await;
    assert!(page.contains("<html"), "plain requests get the full page");
    let second = page.find("Second").expect("second habit listed");
    let first = page.find("Test").expect("first habit listed");
    assert!(second < first, "newest habit renders first");

    let saved = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri("/habits/1")
            .insert_header(("HX-Request", "true"))
            .set_form([("name", "Updated")])
            .to_request(),
    )
    .await;
    assert_eq!(saved.status(), StatusCode::OK);
    assert!(body_text(saved).await.contains("Updated"));

    let removed = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete()
            .uri("/habits/1")
            .insert_header(("HX-Request", "true"))
            .to_request(),
    )
    .await;
    assert_eq!(removed.status(), StatusCode::OK);
    assert!(!body_text(removed).await.contains("Updated"));
}

#[rstest]
#[actix_web::test]
async fn blank_names_are_rejected_on_both_surfaces(repo: Arc<InMemoryHabitRepository>) {
    let app = actix_test::init_service(app(repo.clone())).await;

    let json = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/habits")
            .set_json(json!({ "name": "   " }))
            .to_request(),
    )
    .await;
    assert_eq!(json.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(json).await;
    assert_eq!(body["code"], "invalid_request");

    let page = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/habits")
            .set_form([("name", "")])
            .to_request(),
    )
    .await;
    assert_eq!(page.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(page).await, "Name required");

    assert!(repo.is_empty());
}

#[rstest]
#[actix_web::test]
async fn errors_carry_the_request_trace_id(repo: Arc<InMemoryHabitRepository>) {
    repo.fail_with(HabitRepositoryError::connection("database is down"));
    let app = actix_test::init_service(app(repo)).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/api/habits").to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let header = res
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .expect("trace id header");
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["traceId"], header);
    assert!(
        body["message"]
            .as_str()
            .is_some_and(|msg| msg.contains("database is down"))
    );
}
