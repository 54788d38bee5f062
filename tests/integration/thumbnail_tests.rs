//! Integration tests for the thumbnail endpoint.
//!
//! Tests verify:
//! - The sizing policy (landscape height-pinned, portrait/square width-pinned)
//! - Default and leniently parsed `size` values
//! - Ephemeral artifact cleanup on success and failure
//! - Concurrent requests for the same source
//! - HTTP response codes and headers

use std::fs;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use super::test_utils::{
    body_bytes, decoded_dimensions, encode_path, entry_count, get, is_valid_jpeg, test_router,
    write_test_image,
};

#[tokio::test]
async fn test_landscape_thumbnail_pins_height() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("wide.jpg");
    write_test_image(&source, 320, 160);
    let router = test_router(dir.path());

    let uri = format!("/thumbnail?path={}&size=50", encode_path(&source));
    let response = get(router, &uri).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "image/jpeg"
    );

    let body = body_bytes(response).await;
    assert!(is_valid_jpeg(&body), "Response should be a valid JPEG");

    let (width, height) = decoded_dimensions(&body);
    assert_eq!(height, 50);
    assert_eq!(width, 100); // 50 * 320/160
}

#[tokio::test]
async fn test_portrait_thumbnail_pins_width() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("tall.png");
    write_test_image(&source, 100, 250);
    let router = test_router(dir.path());

    let uri = format!("/thumbnail?path={}&size=40", encode_path(&source));
    let response = get(router, &uri).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_bytes(response).await;
    let (width, height) = decoded_dimensions(&body);
    assert_eq!(width, 40);
    assert_eq!(height, 100); // 40 * 250/100
}

#[tokio::test]
async fn test_square_thumbnail_pins_width() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("square.jpg");
    write_test_image(&source, 300, 300);
    let router = test_router(dir.path());

    let uri = format!("/thumbnail?path={}&size=64", encode_path(&source));
    let response = get(router, &uri).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_bytes(response).await;
    assert_eq!(decoded_dimensions(&body), (64, 64));
}

#[tokio::test]
async fn test_default_size_matches_explicit_100() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("img.jpg");
    write_test_image(&source, 200, 120);
    let router = test_router(dir.path());

    let implicit = get(
        router.clone(),
        &format!("/thumbnail?path={}", encode_path(&source)),
    )
    .await;
    let explicit = get(
        router,
        &format!("/thumbnail?path={}&size=100", encode_path(&source)),
    )
    .await;

    assert_eq!(implicit.status(), StatusCode::OK);
    assert_eq!(explicit.status(), StatusCode::OK);

    let implicit_body = body_bytes(implicit).await;
    let explicit_body = body_bytes(explicit).await;
    assert_eq!(implicit_body, explicit_body);
}

#[tokio::test]
async fn test_malformed_size_falls_back_to_default() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("img.jpg");
    write_test_image(&source, 120, 200);
    let router = test_router(dir.path());

    for size in ["banana", "-40", "0", "12abc"] {
        let uri = format!("/thumbnail?path={}&size={}", encode_path(&source), size);
        let response = get(router.clone(), &uri).await;
        assert_eq!(response.status(), StatusCode::OK, "size={size}");

        let body = body_bytes(response).await;
        let (width, _) = decoded_dimensions(&body);
        assert_eq!(width, 100, "size={size} should render at the default");
    }
}

#[tokio::test]
async fn test_missing_path_returns_400() {
    let dir = tempfile::tempdir().unwrap();
    let router = test_router(dir.path());

    let response = get(router.clone(), "/thumbnail").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = get(router, "/thumbnail?path=").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_nonexistent_source_returns_404() {
    let dir = tempfile::tempdir().unwrap();
    let router = test_router(dir.path());

    let missing = dir.path().join("gone.jpg");
    let response = get(router, &format!("/thumbnail?path={}", encode_path(&missing))).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_undecodable_source_returns_500() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("corrupt.jpg");
    fs::write(&source, b"this is not an image").unwrap();
    let router = test_router(dir.path());

    let response = get(router, &format!("/thumbnail?path={}", encode_path(&source))).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_artifact_removed_after_success() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("img.jpg");
    write_test_image(&source, 200, 100);
    let router = test_router(dir.path());

    let before = entry_count(dir.path());

    let response = get(router, &format!("/thumbnail?path={}", encode_path(&source))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_bytes(response).await;
    assert!(is_valid_jpeg(&body));

    assert_eq!(entry_count(dir.path()), before);
}

#[tokio::test]
async fn test_no_artifact_left_after_failure() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("corrupt.jpg");
    fs::write(&source, b"junk").unwrap();
    let router = test_router(dir.path());

    let before = entry_count(dir.path());

    let response = get(router, &format!("/thumbnail?path={}", encode_path(&source))).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    assert_eq!(entry_count(dir.path()), before);
}

#[tokio::test]
async fn test_repeated_requests_leave_directory_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("img.png");
    write_test_image(&source, 150, 150);
    let router = test_router(dir.path());

    let before = entry_count(dir.path());

    for size in [32, 64, 100] {
        let uri = format!("/thumbnail?path={}&size={}", encode_path(&source), size);
        let response = get(router.clone(), &uri).await;
        assert_eq!(response.status(), StatusCode::OK);
        body_bytes(response).await;
    }

    assert_eq!(entry_count(dir.path()), before);
}

#[tokio::test]
async fn test_concurrent_requests_do_not_collide() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("img.jpg");
    write_test_image(&source, 400, 200);
    let router = test_router(dir.path());

    let uri_small = format!("/thumbnail?path={}&size=50", encode_path(&source));
    let uri_large = format!("/thumbnail?path={}&size=150", encode_path(&source));

    let (small, large) = tokio::join!(
        get(router.clone(), &uri_small),
        get(router.clone(), &uri_large),
    );

    assert_eq!(small.status(), StatusCode::OK);
    assert_eq!(large.status(), StatusCode::OK);

    let small_body = body_bytes(small).await;
    let large_body = body_bytes(large).await;

    // Each request got its own output, no cross-contamination
    assert_eq!(decoded_dimensions(&small_body), (100, 50));
    assert_eq!(decoded_dimensions(&large_body), (300, 150));
    assert_ne!(small_body, large_body);

    assert_eq!(entry_count(dir.path()), 1);
}

#[tokio::test]
async fn test_range_request_supported() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("img.jpg");
    write_test_image(&source, 200, 100);
    let router = test_router(dir.path());

    let uri = format!("/thumbnail?path={}", encode_path(&source));
    let request = Request::builder()
        .uri(&uri)
        .header("range", "bytes=0-9")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::PARTIAL_CONTENT);

    let body = body_bytes(response).await;
    assert_eq!(body.len(), 10);
    // The first bytes of the staged artifact are the JPEG SOI marker
    assert_eq!(body[0], 0xFF);
    assert_eq!(body[1], 0xD8);

    // The artifact is gone even when only part of it was requested
    assert_eq!(entry_count(dir.path()), 1);
}

#[tokio::test]
async fn test_double_encoded_path_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("img.jpg");
    write_test_image(&source, 64, 32);
    let router = test_router(dir.path());

    // Encode twice: the query layer decodes once, the resolver once more
    let double = urlencoding::encode(&encode_path(&source)).into_owned();
    let response = get(router, &format!("/thumbnail?path={}", double)).await;
    assert_eq!(response.status(), StatusCode::OK);
}
