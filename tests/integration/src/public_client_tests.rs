//! Public API client against the mock cloud

use crate::test_utils::{start_mock_cloud, test_config, MockCloud, EMAIL, PASSWORD, PUBLIC_TOKEN};
use meater_client::{ClientError, Credentials, PublicClient};
use std::time::Duration;

#[tokio::test]
async fn test_login_and_list_devices() {
    let base_url = start_mock_cloud(MockCloud::new()).await;
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&base_url, dir.path());

    let mut client = PublicClient::new(&config).unwrap();
    client
        .login(&Credentials::new(EMAIL, PASSWORD))
        .await
        .unwrap();
    assert_eq!(client.token(), Some(PUBLIC_TOKEN));

    let devices = client.devices().await.unwrap();
    assert_eq!(devices.len(), 2);

    let cook = devices[0].cook.as_ref().unwrap();
    assert_eq!(cook.name, "Brisket");
    assert_eq!(cook.elapsed_time(), Duration::from_secs(7200));
    assert_eq!(cook.remaining_time(), Some(Duration::from_secs(14400)));
    assert!(devices[1].cook.is_none());
}

#[tokio::test]
async fn test_single_device() {
    let base_url = start_mock_cloud(MockCloud::new()).await;
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&base_url, dir.path());

    let client = PublicClient::new(&config).unwrap().with_token(PUBLIC_TOKEN);
    let device = client.device("device-2").await.unwrap();
    assert_eq!(device.temperature.internal, 21.0);

    assert!(matches!(
        client.device("device-9").await,
        Err(ClientError::Status { status: 404, .. })
    ));
}

#[tokio::test]
async fn test_bad_credentials() {
    let base_url = start_mock_cloud(MockCloud::new()).await;
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&base_url, dir.path());

    let mut client = PublicClient::new(&config).unwrap();
    assert!(matches!(
        client.login(&Credentials::new(EMAIL, "nope")).await,
        Err(ClientError::Unauthorized { .. })
    ));
    assert!(client.token().is_none());
}
