//! Integration tests for the raw image endpoint.
//!
//! Tests verify:
//! - Byte-exact streaming of allowlisted images
//! - Case-insensitive trailing-extension matching
//! - Rejection of disallowed extensions and missing paths

use std::fs;

use axum::http::StatusCode;

use super::test_utils::{body_bytes, encode_path, get, test_router, write_test_image};

#[tokio::test]
async fn test_png_streams_unmodified() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("photo.png");
    write_test_image(&source, 48, 32);
    let on_disk = fs::read(&source).unwrap();
    let router = test_router(dir.path());

    let response = get(router, &format!("/image?path={}", encode_path(&source))).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "image/png"
    );

    let body = body_bytes(response).await;
    assert_eq!(&body[..], &on_disk[..]);
}

#[tokio::test]
async fn test_jpeg_streams_unmodified() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("photo.jpeg");
    write_test_image(&source, 32, 48);
    let on_disk = fs::read(&source).unwrap();
    let router = test_router(dir.path());

    let response = get(router, &format!("/image?path={}", encode_path(&source))).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_bytes(response).await;
    assert_eq!(&body[..], &on_disk[..]);
}

#[tokio::test]
async fn test_uppercase_extension_allowed() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("photo.PNG");
    write_test_image(&source, 16, 16);
    let router = test_router(dir.path());

    let response = get(router, &format!("/image?path={}", encode_path(&source))).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_disallowed_extension_returns_400() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("report.txt");
    fs::write(&source, b"quarterly numbers").unwrap();
    let router = test_router(dir.path());

    let response = get(router, &format!("/image?path={}", encode_path(&source))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // No error body, just the status
    let body = body_bytes(response).await;
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_extension_substring_not_sufficient() {
    let dir = tempfile::tempdir().unwrap();
    // "jpg" appears in the name but the trailing extension is .txt
    let source = dir.path().join("xxjpgxx.txt");
    fs::write(&source, b"not an image").unwrap();
    let router = test_router(dir.path());

    let response = get(router, &format!("/image?path={}", encode_path(&source))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_nonexistent_path_returns_400() {
    let dir = tempfile::tempdir().unwrap();
    let router = test_router(dir.path());

    let missing = dir.path().join("gone.png");
    let response = get(router, &format!("/image?path={}", encode_path(&missing))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_path_param_returns_400() {
    let dir = tempfile::tempdir().unwrap();
    let router = test_router(dir.path());

    let response = get(router.clone(), "/image").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = get(router, "/image?path=").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_gif_not_in_allowlist() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("anim.gif");
    write_test_image(&source, 8, 8);
    let router = test_router(dir.path());

    let response = get(router, &format!("/image?path={}", encode_path(&source))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
