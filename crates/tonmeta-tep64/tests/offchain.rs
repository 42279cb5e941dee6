//! Off-chain loading against a local HTTP server.

use std::sync::Arc;

use serde_json::json;
use tonmeta_cell::{Cell, CellBuilder};
use tonmeta_tep64::{MetaError, TokenMetadataLoader};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn offchain_content(uri: &str) -> Cell {
    let mut builder = CellBuilder::new();
    builder.store_u8(0x01).unwrap();
    builder.store_string_snake(uri).unwrap();
    builder.build().unwrap()
}

fn snake_cell(text: &str) -> Cell {
    let mut builder = CellBuilder::new();
    builder.store_string_snake(text).unwrap();
    builder.build().unwrap()
}

#[tokio::test]
async fn test_fetch_jetton_metadata() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jetton.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Test Token",
            "symbol": "TST",
            "decimals": "6",
            "image": "https://example.com/icon.png",
            "extra_field": true,
        })))
        .mount(&server)
        .await;

    let content = offchain_content(&format!("{}/jetton.json", server.uri()));
    let loader = TokenMetadataLoader::new();
    let entries = loader.load_jetton_content(&content).await.unwrap().unwrap();

    assert_eq!(entries.name.as_deref(), Some("Test Token"));
    assert_eq!(entries.symbol.as_deref(), Some("TST"));
    assert_eq!(entries.decimals, 6);
    assert_eq!(entries.image.as_deref(), Some("https://example.com/icon.png"));
    assert_eq!(entries.description, None);
}

#[tokio::test]
async fn test_fetch_long_uri_spanning_cells() {
    let server = MockServer::start().await;
    // Path long enough that the URI does not fit in the root cell.
    let long_path = format!("/{}/jetton.json", "a".repeat(200));
    Mock::given(method("GET"))
        .and(path(long_path.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "Deep"})))
        .mount(&server)
        .await;

    let content = offchain_content(&format!("{}{long_path}", server.uri()));
    assert!(content.reference_count() > 0);

    let loader = TokenMetadataLoader::new();
    let entries = loader.load_jetton_content(&content).await.unwrap().unwrap();
    assert_eq!(entries.name.as_deref(), Some("Deep"));
}

#[tokio::test]
async fn test_http_error_status_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing.json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let content = offchain_content(&format!("{}/missing.json", server.uri()));
    let loader = TokenMetadataLoader::new();
    let result = loader.load_jetton_content(&content).await;

    assert!(matches!(result, Err(MetaError::Transport(_))));
}

#[tokio::test]
async fn test_invalid_json_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/broken.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let content = offchain_content(&format!("{}/broken.json", server.uri()));
    let loader = TokenMetadataLoader::new();
    let result = loader.load_jetton_content(&content).await;

    assert!(matches!(result, Err(MetaError::Json(_))));
}

#[tokio::test]
async fn test_nft_item_combines_base_and_suffix() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/items/7.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Item #7",
            "attributes": [{"trait_type": "Background", "value": "Blue"}],
        })))
        .mount(&server)
        .await;

    let item_content = offchain_content(&format!("{}/items/", server.uri()));
    let individual = snake_cell("7.json");

    let loader = TokenMetadataLoader::new();
    let entries = loader
        .load_nft_item_content(&item_content, &individual)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(entries.name.as_deref(), Some("Item #7"));
    assert_eq!(entries.attributes.len(), 1);
    assert_eq!(entries.attributes[0].value.as_deref(), Some("Blue"));
}

#[tokio::test]
async fn test_nft_item_complete_base_ignores_suffix() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/collection.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "Shared"})))
        .mount(&server)
        .await;

    // The base names a .json resource, so the individual suffix is unused.
    let item_content = offchain_content(&format!("{}/collection.json", server.uri()));
    let individual = snake_cell("ignored/9.json");

    let loader = TokenMetadataLoader::new();
    let entries = loader
        .load_nft_item_content(&item_content, &individual)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(entries.name.as_deref(), Some("Shared"));
}

#[tokio::test]
async fn test_nft_collection_fetch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/collection.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "My Collection",
            "description": "A set of items",
            "social_links": ["https://t.me/x", "https://x.com/x"],
        })))
        .mount(&server)
        .await;

    let content = offchain_content(&format!("{}/collection.json", server.uri()));
    let loader = TokenMetadataLoader::new();
    let entries = loader
        .load_nft_collection_content(&content)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(entries.name.as_deref(), Some("My Collection"));
    assert_eq!(entries.social_links.len(), 2);
    assert_eq!(entries.marketplace, None);
}

#[tokio::test]
async fn test_shared_loader_across_tasks() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jetton.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"symbol": "TST"})))
        .mount(&server)
        .await;

    let loader = Arc::new(TokenMetadataLoader::new());
    let content = Arc::new(offchain_content(&format!("{}/jetton.json", server.uri())));

    let mut handles = Vec::new();
    for _ in 0..4 {
        let loader = loader.clone();
        let content = content.clone();
        handles.push(tokio::spawn(async move {
            loader.load_jetton_content(&content).await
        }));
    }

    for handle in handles {
        let entries = handle.await.unwrap().unwrap().unwrap();
        assert_eq!(entries.symbol.as_deref(), Some("TST"));
    }
}
