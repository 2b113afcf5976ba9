//! Resourceful routes for /products.

use crate::handlers::product::{create, delete as delete_handler, list, show, update};
use crate::state::AppState;
use axum::{routing::get, Router};

/// GET/POST /products, GET/PUT/PATCH/DELETE /products/:id.
pub fn product_routes(state: AppState) -> Router {
    Router::new()
        .route("/products", get(list).post(create))
        .route(
            "/products/:id",
            get(show).put(update).patch(update).delete(delete_handler),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    // Lazy pool never connects; these tests only exercise paths that fail
    // before any query runs.
    fn app() -> Router {
        let pool = sqlx::PgPool::connect_lazy("postgres://localhost/products_test")
            .expect("lazy pool");
        product_routes(AppState { pool })
    }

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(resp: axum::response::Response) -> serde_json::Value {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn create_with_empty_body_reports_both_fields() {
        let resp = app()
            .oneshot(json_request("POST", "/products", "{}"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(resp).await;
        assert_eq!(body["error"]["code"], "validation_error");
        let details = body["error"]["details"].as_array().unwrap();
        let fields: Vec<_> = details.iter().map(|d| d["field"].as_str().unwrap()).collect();
        assert_eq!(fields, vec!["name", "price"]);
    }

    #[tokio::test]
    async fn create_with_missing_price_is_422() {
        let resp = app()
            .oneshot(json_request("POST", "/products", r#"{"name":"Widget"}"#))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn create_with_overlong_name_is_422() {
        let body = format!(r#"{{"name":"{}","price":1.0}}"#, "x".repeat(256));
        let resp = app()
            .oneshot(json_request("POST", "/products", &body))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn create_with_string_price_is_rejected_by_extractor() {
        let resp = app()
            .oneshot(json_request(
                "POST",
                "/products",
                r#"{"name":"Widget","price":"cheap"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn update_with_overlong_name_is_422() {
        let body = format!(r#"{{"name":"{}"}}"#, "x".repeat(256));
        let resp = app()
            .oneshot(json_request("PUT", "/products/1", &body))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn patch_with_overlong_name_is_422() {
        let body = format!(r#"{{"name":"{}"}}"#, "x".repeat(256));
        let resp = app()
            .oneshot(json_request("PATCH", "/products/1", &body))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn non_integer_id_is_400() {
        let resp = app()
            .oneshot(
                Request::builder()
                    .uri("/products/abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn delete_on_collection_is_405() {
        let resp = app()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/products")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
