use boutique_thes::routes::health::health_check;

#[tokio::test]
async fn health_check_returns_ok() {
    assert_eq!(health_check().await, "ok");
}
