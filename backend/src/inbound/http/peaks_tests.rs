//! Tests for peak HTTP handlers.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::ports::{MockPeakCommand, MockPeakQuery};
use crate::domain::{Error, PeakId};

fn everest(id: i32) -> Peak {
    PeakDraft::new("Mount Everest", 27.9881, 86.925, 8848.0)
        .expect("valid draft")
        .into_peak(PeakId::new(id))
}

fn test_app(
    command: MockPeakCommand,
    query: MockPeakQuery,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let state = HttpState::new(Arc::new(command), Arc::new(query));
    App::new()
        .app_data(web::Data::new(state))
        .configure(crate::inbound::http::configure)
}

fn everest_payload() -> Value {
    json!({"name": "Mount Everest", "latitude": 27.9881, "longitude": 86.925, "altitude": 8848.0})
}

#[rstest]
#[actix_web::test]
async fn create_returns_stored_peak() {
    let mut command = MockPeakCommand::new();
    command
        .expect_create_peak()
        .withf(|draft| draft.name() == "Mount Everest")
        .times(1)
        .return_once(|_| Ok(everest(1)));
    let app = actix_test::init_service(test_app(command, MockPeakQuery::new())).await;

    let request = actix_test::TestRequest::post()
        .uri("/peaks/")
        .set_json(everest_payload())
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body,
        json!({"id": 1, "name": "Mount Everest", "latitude": 27.9881, "longitude": 86.925, "altitude": 8848.0})
    );
}

#[rstest]
#[case(json!({"name": "X", "latitude": 91.0, "longitude": 0.0, "altitude": 1.0}), "latitude")]
#[case(json!({"name": "X", "latitude": 0.0, "longitude": -180.5, "altitude": 1.0}), "longitude")]
#[case(json!({"name": " ", "latitude": 0.0, "longitude": 0.0, "altitude": 1.0}), "name")]
#[actix_web::test]
async fn create_rejects_invalid_fields_without_calling_service(
    #[case] payload: Value,
    #[case] field: &str,
) {
    let mut command = MockPeakCommand::new();
    command.expect_create_peak().times(0);
    let app = actix_test::init_service(test_app(command, MockPeakQuery::new())).await;

    let request = actix_test::TestRequest::post()
        .uri("/peaks/")
        .set_json(payload)
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["details"]["fields"][0]["field"], field);
}

#[rstest]
#[case(json!({"name": "X", "latitude": 1.0, "longitude": 1.0}))]
#[case(json!({"name": "X", "latitude": "north", "longitude": 1.0, "altitude": 1.0}))]
#[actix_web::test]
async fn malformed_bodies_use_error_envelope(#[case] payload: Value) {
    let app =
        actix_test::init_service(test_app(MockPeakCommand::new(), MockPeakQuery::new())).await;

    let request = actix_test::TestRequest::post()
        .uri("/peaks/")
        .set_json(payload)
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["details"]["code"], "invalid_body");
}

#[rstest]
#[actix_web::test]
async fn list_uses_default_page() {
    let mut query = MockPeakQuery::new();
    query
        .expect_list_peaks()
        .withf(|page| *page == PageRequest::default())
        .return_once(|_| Ok(vec![everest(1)]));
    let app = actix_test::init_service(test_app(MockPeakCommand::new(), query)).await;

    let request = actix_test::TestRequest::get().uri("/peaks/").to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Vec<PeakResponseBody> = actix_test::read_body_json(response).await;
    assert_eq!(body.len(), 1);
}

#[rstest]
#[actix_web::test]
async fn list_forwards_skip_and_limit() {
    let mut query = MockPeakQuery::new();
    query
        .expect_list_peaks()
        .withf(|page| page.offset() == 3 && page.limit() == 7)
        .return_once(|_| Ok(Vec::new()));
    let app = actix_test::init_service(test_app(MockPeakCommand::new(), query)).await;

    let request = actix_test::TestRequest::get()
        .uri("/peaks/?skip=3&limit=7")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[rstest]
#[case("/peaks/?skip=-1")]
#[case("/peaks/?limit=many")]
#[actix_web::test]
async fn list_rejects_bad_pagination(#[case] uri: &str) {
    let mut query = MockPeakQuery::new();
    query.expect_list_peaks().times(0);
    let app = actix_test::init_service(test_app(MockPeakCommand::new(), query)).await;

    let request = actix_test::TestRequest::get().uri(uri).to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[rstest]
#[actix_web::test]
async fn get_maps_not_found() {
    let mut query = MockPeakQuery::new();
    query
        .expect_get_peak()
        .withf(|id| *id == PeakId::new(404))
        .return_once(|_| Err(Error::not_found("Peak not found")));
    let app = actix_test::init_service(test_app(MockPeakCommand::new(), query)).await;

    let request = actix_test::TestRequest::get().uri("/peaks/404").to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["message"], "Peak not found");
}

#[rstest]
#[actix_web::test]
async fn get_rejects_non_integer_id() {
    let app =
        actix_test::init_service(test_app(MockPeakCommand::new(), MockPeakQuery::new())).await;

    let request = actix_test::TestRequest::get().uri("/peaks/everest").to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["details"]["field"], "peak_id");
}

#[rstest]
#[actix_web::test]
async fn update_drops_zero_values_before_calling_service() {
    let mut command = MockPeakCommand::new();
    command
        .expect_update_peak()
        .withf(|id, patch| {
            *id == PeakId::new(1)
                && patch.name().is_none()
                && patch.latitude() == Some(27.96)
                && patch.altitude() == Some(8516.0)
        })
        .times(1)
        .return_once(|_, _| Ok(everest(1)));
    let app = actix_test::init_service(test_app(command, MockPeakQuery::new())).await;

    let request = actix_test::TestRequest::put()
        .uri("/peaks/1")
        .set_json(json!({"name": "", "latitude": 27.96, "longitude": 86.93, "altitude": 8516.0}))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[rstest]
#[actix_web::test]
async fn update_validates_coordinates() {
    let mut command = MockPeakCommand::new();
    command.expect_update_peak().times(0);
    let app = actix_test::init_service(test_app(command, MockPeakQuery::new())).await;

    let request = actix_test::TestRequest::put()
        .uri("/peaks/1")
        .set_json(json!({"name": "", "latitude": -95.0, "longitude": 0.0, "altitude": 0.0}))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[rstest]
#[actix_web::test]
async fn delete_returns_removed_peak() {
    let mut command = MockPeakCommand::new();
    command
        .expect_delete_peak()
        .withf(|id| *id == PeakId::new(5))
        .return_once(|_| Ok(everest(5)));
    let app = actix_test::init_service(test_app(command, MockPeakQuery::new())).await;

    let request = actix_test::TestRequest::delete().uri("/peaks/5").to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: PeakResponseBody = actix_test::read_body_json(response).await;
    assert_eq!(body.id, 5);
}

#[rstest]
#[actix_web::test]
async fn search_forwards_bounding_box() {
    let mut query = MockPeakQuery::new();
    query
        .expect_search_peaks()
        .withf(|bbox| {
            bbox.min_lat() == 28.0
                && bbox.max_lat() == 29.0
                && bbox.min_lon() == 86.0
                && bbox.max_lon() == 87.0
        })
        .return_once(|_| Ok(Vec::new()));
    let app = actix_test::init_service(test_app(MockPeakCommand::new(), query)).await;

    let request = actix_test::TestRequest::post()
        .uri("/peaks/search/")
        .set_json(json!({"min_lat": 28.0, "max_lat": 29.0, "min_lon": 86.0, "max_lon": 87.0}))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Vec<PeakResponseBody> = actix_test::read_body_json(response).await;
    assert!(body.is_empty());
}

#[rstest]
#[actix_web::test]
async fn search_rejects_out_of_range_bounds() {
    let mut query = MockPeakQuery::new();
    query.expect_search_peaks().times(0);
    let app = actix_test::init_service(test_app(MockPeakCommand::new(), query)).await;

    let request = actix_test::TestRequest::post()
        .uri("/peaks/search/")
        .set_json(json!({"min_lat": -100.0, "max_lat": 29.0, "min_lon": 86.0, "max_lon": 190.0}))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = actix_test::read_body_json(response).await;
    let fields: Vec<&str> = body["details"]["fields"]
        .as_array()
        .expect("field list")
        .iter()
        .filter_map(|entry| entry["field"].as_str())
        .collect();
    assert_eq!(fields, ["min_lat", "max_lon"]);
}

#[rstest]
#[actix_web::test]
async fn service_unavailable_maps_to_503() {
    let mut query = MockPeakQuery::new();
    query
        .expect_list_peaks()
        .return_once(|_| Err(Error::service_unavailable("peak store unavailable")));
    let app = actix_test::init_service(test_app(MockPeakCommand::new(), query)).await;

    let request = actix_test::TestRequest::get().uri("/peaks/").to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}
