//! HTTP surface of the reservation service
//!
//! - `GET /reservations`: every stored reservation
//! - `POST /reservations` with `{"names": [...]}`: transactional batch insert

use crate::domain::{CorrelationId, Reservation};
use crate::http::headers::paths;
use crate::reservation::ReservationService;
use crate::{Error, Result};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

/// Body of a batch insert
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveReservationsRequest {
    pub names: Vec<String>,
}

pub fn router(service: ReservationService) -> Router {
    Router::new()
        .route(
            paths::RESERVATIONS,
            get(list_reservations).post(save_reservations),
        )
        .with_state(service)
}

async fn list_reservations(
    State(service): State<ReservationService>,
) -> Result<Json<Vec<Reservation>>> {
    Ok(Json(service.find_all().await?))
}

async fn save_reservations(
    State(service): State<ReservationService>,
    payload: std::result::Result<Json<SaveReservationsRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Vec<Reservation>>)> {
    let Json(request) = payload.map_err(|rejection| Error::invalid_request(rejection.body_text()))?;
    let saved = service
        .save_all(&request.names, CorrelationId::generate())
        .await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::ErrorResponse;
    use crate::reservation::InMemoryReservationRepository;
    use axum::{
        body::Body,
        http::{header, Request},
    };
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> (Router, ReservationService) {
        let service = ReservationService::new(Arc::new(InMemoryReservationRepository::new()));
        (router(service.clone()), service)
    }

    fn post(names: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(paths::RESERVATIONS)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                serde_json::json!({ "names": names }).to_string(),
            ))
            .unwrap()
    }

    #[tokio::test]
    async fn test_list_returns_stored_reservations() {
        let (app, service) = app();
        service
            .save_all(&["Josh", "Andre"], CorrelationId::generate())
            .await
            .unwrap();

        let response = app
            .oneshot(
                Request::builder()
                    .uri(paths::RESERVATIONS)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let reservations: Vec<Reservation> = serde_json::from_slice(&body).unwrap();
        assert_eq!(reservations.len(), 2);
        assert_eq!(reservations[0].name.as_ref(), "Josh");
    }

    #[tokio::test]
    async fn test_post_stores_batch() {
        let (app, service) = app();

        let response = app
            .oneshot(post(serde_json::json!(["Johan", "Spencer"])))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(service.find_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_post_with_invalid_name_stores_nothing() {
        let (app, service) = app();

        let response = app
            .oneshot(post(serde_json::json!(["Johan", "spencer"])))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_RESERVATION_NAME");
        assert!(service.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_name_longer_than_column_is_rejected_before_storage() {
        let (app, service) = app();
        let too_long = format!("J{}", "o".repeat(255));

        let response = app
            .oneshot(post(serde_json::json!([too_long])))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(service.find_all().await.unwrap().is_empty());
    }

    #[rstest::rstest]
    #[case::not_json("names=Josh")]
    #[case::wrong_shape(r#"{"names": "Josh"}"#)]
    #[tokio::test]
    async fn test_malformed_body_is_a_json_error(#[case] body: &str) {
        let (app, service) = app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(paths::RESERVATIONS)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_REQUEST");
        assert!(service.find_all().await.unwrap().is_empty());
    }
}
