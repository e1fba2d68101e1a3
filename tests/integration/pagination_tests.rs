use crate::common::{self, ORG};
use frisbo_client::prelude::*;
use mockito::{Matcher, Server, ServerGuard};

fn page_query(page: u32, per_page: u32) -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("page".into(), page.to_string()),
        Matcher::UrlEncoded("per_page".into(), per_page.to_string()),
    ])
}

fn warehouses(range: std::ops::Range<u64>) -> Vec<Value> {
    range
        .map(|id| json!({"id": id, "name": format!("Warehouse {id}")}))
        .collect()
}

async fn mock_product_page(
    server: &mut ServerGuard,
    page: u32,
    per_page: u32,
    body: Value,
    hits: usize,
) -> mockito::Mock {
    server
        .mock("GET", common::org_path("/products").as_str())
        .match_query(page_query(page, per_page))
        .with_status(200)
        .with_body(body.to_string())
        .expect(hits)
        .create_async()
        .await
}

fn product(sku: usize) -> Value {
    json!({"id": sku, "name": format!("Product {sku}"), "sku": format!("SKU-{sku}")})
}

#[tokio::test]
async fn test_collect_all_fetches_every_page_once() {
    let mut server = Server::new_async().await;
    let total = 7;
    let per_page = 3;
    let mut mocks = Vec::new();
    for page in 1..=3u32 {
        let start = (page as usize - 1) * per_page as usize;
        let end = (start + per_page as usize).min(total);
        let data: Vec<Value> = (start..end).map(product).collect();
        let body = json!({
            "data": data,
            "current_page": page,
            "last_page": 3,
            "per_page": per_page,
            "total": total
        });
        mocks.push(mock_product_page(&mut server, page, per_page, body, 1).await);
    }

    let client = common::token_client(&server);
    let paginator = client
        .list_products(ORG, ListParams::new().with_per_page(per_page))
        .await
        .unwrap();
    let products = paginator.collect_all().await.unwrap();

    assert_eq!(products.len(), total);
    assert_eq!(products[0].sku, "SKU-0");
    assert_eq!(products[6].sku, "SKU-6");
    for mock in mocks {
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn test_pages_are_fetched_lazily() {
    let mut server = Server::new_async().await;
    let first = mock_product_page(
        &mut server,
        1,
        2,
        json!({"data": [product(1), product(2)], "current_page": 1, "last_page": 5}),
        1,
    )
    .await;
    let second = mock_product_page(&mut server, 2, 2, json!({"data": []}), 0).await;

    let client = common::token_client(&server);
    let mut paginator = client
        .list_products(ORG, ListParams::new().with_per_page(2))
        .await
        .unwrap();
    assert_eq!(paginator.pages_fetched(), 0);

    let item = paginator.next().await.unwrap().unwrap();
    assert_eq!(item.sku, "SKU-1");
    let item = paginator.next().await.unwrap().unwrap();
    assert_eq!(item.sku, "SKU-2");
    assert_eq!(paginator.pages_fetched(), 1);
    assert!(!paginator.is_finished());

    first.assert_async().await;
    second.assert_async().await;
}

#[tokio::test]
async fn test_short_page_ends_sequence_without_counters() {
    let mut server = Server::new_async().await;
    let body_1 = json!({"data": [product(1), product(2), product(3)]});
    let body_2 = json!({"data": [product(4)]});
    let first = mock_product_page(&mut server, 1, 3, body_1, 1).await;
    let second = mock_product_page(&mut server, 2, 3, body_2, 1).await;
    let third = mock_product_page(&mut server, 3, 3, json!({"data": []}), 0).await;

    let client = common::token_client(&server);
    let mut paginator = client
        .list_products(ORG, ListParams::new().with_per_page(3))
        .await
        .unwrap();

    let mut count = 0;
    while let Some(_product) = paginator.next().await.unwrap() {
        count += 1;
    }
    assert_eq!(count, 4);
    assert_eq!(paginator.pages_fetched(), 2);
    assert!(paginator.is_finished());
    assert!(paginator.next().await.unwrap().is_none());

    first.assert_async().await;
    second.assert_async().await;
    third.assert_async().await;
}

#[tokio::test]
async fn test_short_page_ends_sequence_despite_last_page() {
    let mut server = Server::new_async().await;
    let body = json!({
        "data": [product(1), product(2)],
        "current_page": 1,
        "last_page": 3,
        "per_page": 5
    });
    let first = mock_product_page(&mut server, 1, 5, body, 1).await;
    let second = mock_product_page(&mut server, 2, 5, json!({"data": []}), 0).await;

    let client = common::token_client(&server);
    let products = client
        .list_products(ORG, ListParams::new().with_per_page(5))
        .await
        .unwrap()
        .collect_all()
        .await
        .unwrap();

    assert_eq!(products.len(), 2);
    first.assert_async().await;
    second.assert_async().await;
}

#[tokio::test]
async fn test_start_page_and_filters_are_sent() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/organizations")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "4".into()),
            Matcher::UrlEncoded("is_active".into(), "1".into()),
        ]))
        .with_status(200)
        .with_body(
            json!({
                "data": [{"organization_id": ORG, "is_active": true, "name": "Shop SRL"}],
                "current_page": 4,
                "last_page": 4
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let client = common::token_client(&server);
    let params = ListParams::new().with_page(4).with_filter("is_active", "1");
    let organizations = client
        .list_organizations(params)
        .await
        .unwrap()
        .collect_all()
        .await
        .unwrap();

    assert_eq!(organizations.len(), 1);
    assert_eq!(organizations[0].organization_id, ORG);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_error_finishes_paginator() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", common::org_path("/warehouses-paged").as_str())
        .match_query(Matcher::Any)
        .with_status(502)
        .with_body("Bad Gateway")
        .expect(1)
        .create_async()
        .await;

    let client = common::token_client(&server);
    let mut paginator: Paginator<Warehouse> = Paginator::new(
        client.http_client().clone(),
        common::org_path("/warehouses-paged"),
        ListParams::new(),
    );

    let err = paginator.next().await.unwrap_err();
    assert!(matches!(err, AppError::Api { ref message, .. } if message == "Bad Gateway"));
    assert!(paginator.is_finished());
    assert!(paginator.next().await.unwrap().is_none());
}

#[tokio::test]
async fn test_next_page_returns_whole_batches() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", common::org_path("/warehouses-paged").as_str())
        .match_query(Matcher::UrlEncoded("page".into(), "1".into()))
        .with_status(200)
        .with_body(json!({"data": warehouses(1..3), "current_page": 1, "last_page": 2}).to_string())
        .create_async()
        .await;
    server
        .mock("GET", common::org_path("/warehouses-paged").as_str())
        .match_query(Matcher::UrlEncoded("page".into(), "2".into()))
        .with_status(200)
        .with_body(json!({"data": warehouses(3..4), "current_page": 2, "last_page": 2}).to_string())
        .create_async()
        .await;

    let client = common::token_client(&server);
    let mut paginator: Paginator<Warehouse> = Paginator::new(
        client.http_client().clone(),
        common::org_path("/warehouses-paged"),
        ListParams::new(),
    );

    assert_eq!(paginator.next_page().await.unwrap().map(|p| p.len()), Some(2));
    assert_eq!(paginator.next_page().await.unwrap().map(|p| p.len()), Some(1));
    assert!(paginator.next_page().await.unwrap().is_none());
    assert_eq!(paginator.pages_fetched(), 2);
}
