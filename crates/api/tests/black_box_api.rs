use std::sync::Arc;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::json;

use catalog_core::ProductId;
use catalog_infra::{
    load_from_reader, InMemoryProductStore, ProductStore, SqliteProductStore, StoreError,
};
use catalog_products::{NewProduct, Product};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(store: Arc<dyn ProductStore>) -> Self {
        // Same router as prod, bound to an ephemeral port.
        let app = catalog_api::app::build_app(store);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Store whose every call fails, standing in for a broken database.
struct BrokenStore;

#[async_trait]
impl ProductStore for BrokenStore {
    async fn insert(&self, _product: &NewProduct) -> Result<ProductId, StoreError> {
        Err(StoreError::Poisoned)
    }

    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        Err(StoreError::Poisoned)
    }
}

const CSV: &str = "name,category,processor_type,memory,storage\n\
Laptop X,Laptops,Intel i7,16GB,512GB\n\
Laptop Y,Laptops,AMD Ryzen 5,32GB,1TB\n\
Desk Z,Desktops,Intel i5,8GB,256GB\n";

#[tokio::test]
async fn health_is_ok() {
    let srv = TestServer::spawn(Arc::new(InMemoryProductStore::new())).await;

    let res = reqwest::get(srv.url("/health")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn single_row_load_is_served_verbatim() {
    let store = SqliteProductStore::in_memory().await.unwrap();
    store.ensure_schema().await.unwrap();
    load_from_reader(
        "name,category,processor_type,memory,storage\nLaptop X,Laptops,Intel i7,16GB,512GB\n".as_bytes(),
        &store,
    )
    .await
    .unwrap();

    let srv = TestServer::spawn(Arc::new(store)).await;
    let res = reqwest::get(srv.url("/api/products")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(
        body,
        json!([{
            "id": 1,
            "name": "Laptop X",
            "category": "Laptops",
            "processor_type": "Intel i7",
            "memory": "16GB",
            "storage": "512GB",
        }])
    );
}

#[tokio::test]
async fn response_length_matches_loaded_rows() {
    let store = SqliteProductStore::in_memory().await.unwrap();
    store.ensure_schema().await.unwrap();
    let report = load_from_reader(CSV.as_bytes(), &store).await.unwrap();

    let srv = TestServer::spawn(Arc::new(store)).await;
    let products: Vec<Product> = reqwest::get(srv.url("/api/products"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(products.len(), report.rows);
    let ids: Vec<i64> = products.iter().map(|p| p.id.get()).collect();
    assert_eq!(ids, [1, 2, 3]);
}

#[tokio::test]
async fn empty_store_returns_empty_array() {
    let srv = TestServer::spawn(Arc::new(InMemoryProductStore::new())).await;

    let res = reqwest::get(srv.url("/api/products")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn query_parameters_are_ignored() {
    let store = InMemoryProductStore::with_products([
        NewProduct::new("A", "Laptops", "Intel i7", "16GB", "512GB"),
        NewProduct::new("B", "Desktops", "Intel i5", "8GB", "1TB"),
    ]);
    let srv = TestServer::spawn(Arc::new(store)).await;

    let products: Vec<Product> = reqwest::get(srv.url("/api/products?category=Laptops&page=2"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(products.len(), 2);
}

#[tokio::test]
async fn store_failure_is_500_with_plain_text() {
    let srv = TestServer::spawn(Arc::new(BrokenStore)).await;

    let res = reqwest::get(srv.url("/api/products")).await.unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let content_type = res.headers()[reqwest::header::CONTENT_TYPE].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/plain"), "{content_type}");
    assert_eq!(res.text().await.unwrap(), StoreError::Poisoned.to_string());
}

#[tokio::test]
async fn missing_table_is_500_with_driver_message() {
    // Server started before the loader ever ran.
    let store = SqliteProductStore::in_memory().await.unwrap();
    let srv = TestServer::spawn(Arc::new(store)).await;

    let res = reqwest::get(srv.url("/api/products")).await.unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(res.text().await.unwrap().contains("no such table"));
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let srv = TestServer::spawn(Arc::new(InMemoryProductStore::new())).await;

    let res = reqwest::Client::new()
        .get(srv.url("/api/products"))
        .header(reqwest::header::ORIGIN, "http://localhost:3000")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers()[reqwest::header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn unknown_route_is_404() {
    let srv = TestServer::spawn(Arc::new(InMemoryProductStore::new())).await;

    let res = reqwest::get(srv.url("/api/products/1")).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
