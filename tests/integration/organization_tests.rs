use crate::common::{self, ORG};
use frisbo_client::prelude::*;
use mockito::{Matcher, Server};

#[tokio::test]
async fn test_get_organization() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", common::org_path("").as_str())
        .with_status(200)
        .with_body(
            json!({
                "organization_id": ORG,
                "is_active": true,
                "name": "Shop SRL",
                "vat_registration_number": "RO123456"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = common::token_client(&server);
    let organization = client.get_organization(ORG).await.unwrap();
    assert_eq!(organization.name, "Shop SRL");
    assert_eq!(
        organization.vat_registration_number.as_deref(),
        Some("RO123456")
    );
}

#[tokio::test]
async fn test_list_warehouses_channels_and_users() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", common::org_path("/warehouses").as_str())
        .with_status(200)
        .with_body(json!([{"id": 3, "name": "Bucharest"}]).to_string())
        .create_async()
        .await;
    server
        .mock("GET", common::org_path("/channels").as_str())
        .with_status(200)
        .with_body(json!([{"id": 12, "name": "Web shop"}, {"id": 13, "name": "eMAG"}]).to_string())
        .create_async()
        .await;
    server
        .mock("GET", common::org_path("/users").as_str())
        .with_status(200)
        .with_body(
            json!([{"id": 8, "name": "Ana Pop", "email": "ana@example.ro", "status": true}])
                .to_string(),
        )
        .create_async()
        .await;

    let client = common::token_client(&server);
    assert_eq!(client.list_warehouses(ORG).await.unwrap()[0].id, 3);
    assert_eq!(client.list_channels(ORG).await.unwrap().len(), 2);
    assert_eq!(
        client.list_users(ORG).await.unwrap()[0].email,
        "ana@example.ro"
    );
}

#[tokio::test]
async fn test_create_channel_and_user() {
    let mut server = Server::new_async().await;
    let channel_mock = server
        .mock("POST", common::org_path("/channels").as_str())
        .match_body(Matcher::Json(
            json!({"name": "Web shop", "type": "shopify", "url": "https://shop.ro"}),
        ))
        .with_status(201)
        .with_body(json!({"id": 14, "name": "Web shop"}).to_string())
        .expect(1)
        .create_async()
        .await;
    let user_mock = server
        .mock("POST", common::org_path("/users").as_str())
        .match_body(Matcher::Json(json!({
            "first_name": "Ion",
            "last_name": "Popescu",
            "email": "ion@shop.ro"
        })))
        .with_status(201)
        .with_body(
            json!({"id": 9, "name": "Ion Popescu", "email": "ion@shop.ro", "status": false})
                .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let client = common::token_client(&server);
    let channel = client
        .create_channel(
            ORG,
            &CreateChannelRequest::new("Web shop", "shopify")
                .with_extra("url", json!("https://shop.ro")),
        )
        .await
        .unwrap();
    assert_eq!(channel.id, 14);

    let user = client
        .create_user(ORG, &CreateUserRequest::new("Ion", "Popescu", "ion@shop.ro"))
        .await
        .unwrap();
    assert!(!user.status);

    channel_mock.assert_async().await;
    user_mock.assert_async().await;
}
