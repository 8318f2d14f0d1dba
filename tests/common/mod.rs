#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response};
use books_api::adapters::memory::BookStore;
use books_api::api::handlers::AppState;
use books_api::api::router::create_router;
use books_api::application::book::ServiceDependencies;
use books_api::domain::{BookDetails, PublishedYear};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

/// 空のインメモリストアでサービスの依存関係を作成
///
/// テストごとに新しいストアを使うため、テスト間で状態は共有されない。
pub fn create_test_deps() -> ServiceDependencies {
    ServiceDependencies {
        book_store: BookStore::shared(),
    }
}

/// 空のストアを持つAPIルーターを作成
pub fn create_test_app() -> axum::Router {
    let app_state = Arc::new(AppState {
        service_deps: create_test_deps(),
    });
    create_router(app_state)
}

/// 検証済みの書籍フィールドを作成
pub fn book_details(name: &str, author: &str, year: i64) -> BookDetails {
    BookDetails::new(name, author, PublishedYear::try_from(year).unwrap())
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

/// レスポンスボディをJSONとして読み取る
pub async fn read_json<T: DeserializeOwned>(response: Response<Body>) -> T {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
