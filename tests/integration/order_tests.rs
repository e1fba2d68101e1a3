use crate::common::{self, ORG};
use frisbo_client::prelude::*;
use mockito::{Matcher, Server};

fn order_body(order_id: u64) -> Value {
    json!({
        "_id": order_id,
        "order_reference": "ORD-1001",
        "organization_id": ORG,
        "fulfillment_status": "Ready for picking",
        "shipping_customer": {
            "email": "ana@example.ro",
            "first_name": "Ana",
            "last_name": "Pop",
            "phone": "+40712345678"
        },
        "shipping_address": {
            "street": "Str. Lalelelor 5",
            "city": "Cluj-Napoca",
            "country": "RO",
            "zip": "400000"
        },
        "products": [{"sku": "A-1", "name": "Mug", "price": "25.00", "quantity": 2, "vat": "19"}]
    })
}

#[tokio::test]
async fn test_get_order() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", common::org_path("/orders/556677").as_str())
        .match_header("authorization", "Bearer test-token")
        .with_status(200)
        .with_body(order_body(556677).to_string())
        .expect(1)
        .create_async()
        .await;

    let client = common::token_client(&server);
    let order = client.get_order(ORG, 556677).await.unwrap();
    assert_eq!(order.order_id, Some(556677));
    assert_eq!(order.fulfillment_status, Some(FulfillmentStatus::ReadyForPicking));
    assert_eq!(order.total_quantity(), 2);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_missing_order_is_not_found() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", common::org_path("/orders/1").as_str())
        .with_status(404)
        .with_body(json!({"message": "Order not found"}).to_string())
        .create_async()
        .await;

    let client = common::token_client(&server);
    let err = client.get_order(ORG, 1).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "not found: Order not found");
}

#[tokio::test]
async fn test_create_order_sends_payload() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", common::org_path("/orders").as_str())
        .match_header("content-type", "application/json")
        .match_body(Matcher::PartialJson(json!({
            "order_reference": "ORD-1001",
            "warehouse_id": 3,
            "products": [{"sku": "A-1", "quantity": 2}]
        })))
        .with_status(201)
        .with_body(order_body(42).to_string())
        .expect(1)
        .create_async()
        .await;

    let request = CreateOrderRequest::new(
        "ORD-1001",
        Customer {
            email: "ana@example.ro".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Pop".to_string(),
            phone: "+40712345678".to_string(),
        },
        Address {
            street: "Str. Lalelelor 5".to_string(),
            city: "Cluj-Napoca".to_string(),
            county: None,
            country: "RO".to_string(),
            zip: "400000".to_string(),
        },
        vec![OrderProduct::new("A-1", "Mug", "25.00", 2, "19")],
    )
    .with_warehouse_id(3);

    let client = common::token_client(&server);
    let order = client.create_order(ORG, &request).await.unwrap();
    assert_eq!(order.order_id, Some(42));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_update_order_uses_put() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", common::org_path("/orders/42").as_str())
        .match_body(Matcher::Json(json!({"notes": "Call before delivery"})))
        .with_status(200)
        .with_body(order_body(42).to_string())
        .expect(1)
        .create_async()
        .await;

    let client = common::token_client(&server);
    let update = UpdateOrderRequest::new().with_notes("Call before delivery");
    client.update_order(ORG, 42, &update).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_each_action_issues_exactly_one_request() {
    let mut server = Server::new_async().await;
    let mut mocks = Vec::new();
    for action in [
        "cancel",
        "reprocess",
        "confirmFulfillment",
        "deliverOrder",
        "returnOrder",
    ] {
        let mock = server
            .mock(
                "POST",
                common::org_path(&format!("/orders/42/actions/{action}")).as_str(),
            )
            .with_status(200)
            .with_body(json!({"message": format!("{action} queued")}).to_string())
            .expect(1)
            .create_async()
            .await;
        mocks.push(mock);
    }

    let client = common::token_client(&server);
    let response = client.cancel_order(ORG, 42).await.unwrap();
    assert_eq!(response["message"], "cancel queued");
    client.reprocess_order(ORG, 42).await.unwrap();
    client.confirm_fulfillment(ORG, 42).await.unwrap();
    client.deliver_order(ORG, 42).await.unwrap();
    let response = client.return_order(ORG, 42).await.unwrap();
    assert_eq!(response["message"], "returnOrder queued");

    for mock in mocks {
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn test_ship_order_body() {
    let mut server = Server::new_async().await;
    let with_awb = server
        .mock("POST", common::org_path("/orders/42/actions/shipOrder").as_str())
        .match_body(Matcher::Json(json!({"awb": "AWB123456"})))
        .with_status(200)
        .with_body("{}")
        .expect(1)
        .create_async()
        .await;
    let without_awb = server
        .mock("POST", common::org_path("/orders/43/actions/shipOrder").as_str())
        .match_body(Matcher::Json(json!({})))
        .with_status(204)
        .expect(1)
        .create_async()
        .await;

    let client = common::token_client(&server);
    client.ship_order(ORG, 42, Some("AWB123456")).await.unwrap();
    let response = client.ship_order(ORG, 43, None).await.unwrap();
    assert!(response.is_null());

    with_awb.assert_async().await;
    without_awb.assert_async().await;
}

#[tokio::test]
async fn test_zero_ids_are_rejected_without_request() {
    let mut server = Server::new_async().await;
    let any_get = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;
    let any_post = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = common::token_client(&server);
    assert!(matches!(
        client.get_order(0, 1).await,
        Err(AppError::InvalidInput(_))
    ));
    assert!(matches!(
        client.cancel_order(ORG, 0).await,
        Err(AppError::InvalidInput(_))
    ));
    assert!(matches!(
        client.list_orders(0, ListParams::new()).await,
        Err(AppError::InvalidInput(_))
    ));
    any_get.assert_async().await;
    any_post.assert_async().await;
}
