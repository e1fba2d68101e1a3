// Live tests against the real Frisbo API; they read FRISBO_* from the environment.

use frisbo_client::prelude::*;

#[tokio::test]
#[ignore]
async fn test_live_login_and_profile() {
    setup_logger();
    let client = Client::new(Config::new()).await.expect("Failed to login");
    assert!(client.is_authenticated().await);

    let user = client.me().await.expect("Failed to get profile");
    info!("Logged in as {} ({})", user.name, user.email);
}

#[tokio::test]
#[ignore]
async fn test_live_first_page_of_organizations() {
    setup_logger();
    let client = Client::new(Config::new()).await.expect("Failed to login");
    let mut organizations = client
        .list_organizations(ListParams::new().with_per_page(5))
        .await
        .expect("Failed to list organizations");

    let page = organizations
        .next_page()
        .await
        .expect("Failed to fetch first page")
        .unwrap_or_default();
    for organization in &page {
        info!("{}: {}", organization.organization_id, organization.name);
    }
    assert_eq!(organizations.pages_fetched(), 1);
}
