//! Hotel listing endpoint.

use crate::config::HOTEL_LISTING;

/// Hotel listing handler.
///
/// Stateless; every GET on the listing path receives the same body with a
/// 200 status and a `text/plain; charset=utf-8` content type. Other methods
/// never reach this handler; axum answers them with 405.
pub async fn list() -> &'static str {
    HOTEL_LISTING
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
        response::Response,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::config::{CACHE_CONTROL_HOTELS, HOTELS_PATH, HOTEL_LISTING};
    use crate::routes::create_router;

    async fn send(method: Method, uri: &str) -> Response {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        create_router().oneshot(request).await.unwrap()
    }

    async fn body_string(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_get_hotels_returns_listing() {
        let response = send(Method::GET, HOTELS_PATH).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
        assert_eq!(body_string(response).await, "List of hotels");
    }

    #[tokio::test]
    async fn test_get_hotels_sets_cache_control() {
        let response = send(Method::GET, HOTELS_PATH).await;
        assert_eq!(
            response.headers()[header::CACHE_CONTROL],
            CACHE_CONTROL_HOTELS
        );
    }

    #[tokio::test]
    async fn test_get_hotels_is_idempotent() {
        for _ in 0..5 {
            let response = send(Method::GET, HOTELS_PATH).await;
            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(body_string(response).await, HOTEL_LISTING);
        }
    }

    #[tokio::test]
    async fn test_get_hotels_ignores_query_and_headers() {
        let request = Request::builder()
            .uri("/hotels?city=paris")
            .header(header::ACCEPT, "application/json")
            .body(Body::empty())
            .unwrap();
        let response = create_router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, HOTEL_LISTING);
    }

    #[tokio::test]
    async fn test_typo_path_not_found() {
        let response = send(Method::GET, "/hotel").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_post_hotels_method_not_allowed() {
        let response = send(Method::POST, HOTELS_PATH).await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers()[header::ALLOW], "GET,HEAD");
    }

    #[tokio::test]
    async fn test_delete_hotels_method_not_allowed() {
        let response = send(Method::DELETE, HOTELS_PATH).await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers()[header::ALLOW], "GET,HEAD");
    }

    #[tokio::test]
    async fn test_head_hotels_answered_by_get_route() {
        let response = send(Method::HEAD, HOTELS_PATH).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CACHE_CONTROL],
            CACHE_CONTROL_HOTELS
        );
        assert!(body_string(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_requests() {
        let router = create_router();
        let handles: Vec<_> = (0..16)
            .map(|_| {
                let router = router.clone();
                tokio::spawn(async move {
                    let request = Request::builder()
                        .uri(HOTELS_PATH)
                        .body(Body::empty())
                        .unwrap();
                    router.oneshot(request).await.unwrap()
                })
            })
            .collect();

        for handle in handles {
            let response = handle.await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(body_string(response).await, HOTEL_LISTING);
        }
    }
}
