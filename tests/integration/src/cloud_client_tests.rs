//! Private cloud client against the mock cloud

use crate::test_utils::{
    start_mock_cloud, test_config, MockCloud, ACCESS_TOKEN, EMAIL, PASSWORD,
};
use meater_client::{ClientError, Credentials, MeaterClient, SessionStore};
use meater_domain::{CookState, ProbeType};
use std::sync::atomic::Ordering;

fn credentials() -> Option<Credentials> {
    Some(Credentials::new(EMAIL, PASSWORD))
}

#[tokio::test]
async fn test_login_persists_session() {
    let cloud = MockCloud::new();
    let base_url = start_mock_cloud(cloud.clone()).await;
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&base_url, dir.path());

    let client = MeaterClient::connect(&config, credentials()).await.unwrap();
    assert!(client.is_authenticated());
    assert_eq!(cloud.login_calls(), 1);

    // Session file holds the issued token and the device id used at login
    let session = SessionStore::new(&config.session.path)
        .load()
        .unwrap()
        .expect("session saved after login");
    assert_eq!(session.token.as_deref(), Some(ACCESS_TOKEN));
    assert_eq!(session.device_id, client.device_id());

    let login = cloud.last_login().unwrap();
    assert_eq!(login["check_terms"], 1);
    assert_eq!(login["email"], EMAIL);
    assert_eq!(login["clientVersion"], "MEATER-iOS-v4.4.2");
    assert_eq!(login["device"]["id"], client.device_id());
    assert_eq!(login["device"]["app_build"], "12305");
    assert_eq!(login["device"]["locale"], "de_DE");

    assert_eq!(
        cloud.last_user_agent().as_deref(),
        Some("MEATER/12305 CFNetwork/1568.300.101 Darwin/24.2.0")
    );
}

#[tokio::test]
async fn test_stored_token_is_reused() {
    let cloud = MockCloud::new();
    let base_url = start_mock_cloud(cloud.clone()).await;
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&base_url, dir.path());

    let first = MeaterClient::connect(&config, credentials()).await.unwrap();
    let device_id = first.device_id().to_string();

    // Second run: no credentials needed, same device, no new login
    let second = MeaterClient::connect(&config, None).await.unwrap();
    assert_eq!(second.device_id(), device_id);
    assert_eq!(cloud.login_calls(), 1);

    let cooks = second.cooks().await.unwrap();
    assert_eq!(cooks.len(), 2);
}

#[tokio::test]
async fn test_cooks_are_decoded() {
    let cloud = MockCloud::new();
    let base_url = start_mock_cloud(cloud.clone()).await;
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&base_url, dir.path());

    let client = MeaterClient::connect(&config, credentials()).await.unwrap();
    let cooks = client.cooks().await.unwrap();

    assert_eq!(cooks.len(), 2);
    let cook = &cooks[0];
    assert_eq!(cook.id, "cook-1");
    assert_eq!(cook.feedback, Some(4));
    assert_eq!(cook.raw.probe_number, ProbeType::SecondGenerationBlockProbeOne);
    assert_eq!(cook.raw.setup.state, CookState::Finished);
    assert_eq!(cook.target().celsius(), 57.0);
    assert_eq!(cook.peak().celsius(), 59.0);

    let history = cook.history();
    assert_eq!(history.len(), 3);
    assert_eq!(history[0].internal_c, 20.0);
    assert_eq!(history[1].internal_c, 32.0);
    assert_eq!(history[0].ambient_c, 150.0);
    assert_eq!(
        history[2].timestamp.timestamp() - history[0].timestamp.timestamp(),
        20
    );

    assert!(cooks[1].is_deleted);
    assert!(cooks[1].history().is_empty());
}

#[tokio::test]
async fn test_cook_lookup() {
    let cloud = MockCloud::new();
    let base_url = start_mock_cloud(cloud.clone()).await;
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&base_url, dir.path());

    let client = MeaterClient::connect(&config, credentials()).await.unwrap();
    assert_eq!(client.cook("cook-2").await.unwrap().id, "cook-2");

    match client.cook("missing").await {
        Err(ClientError::CookNotFound(id)) => assert_eq!(id, "missing"),
        other => panic!("expected CookNotFound, got {:?}", other.map(|c| c.id)),
    }
}

#[tokio::test]
async fn test_wrong_password_writes_no_session() {
    let cloud = MockCloud::new();
    let base_url = start_mock_cloud(cloud.clone()).await;
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&base_url, dir.path());

    let result =
        MeaterClient::connect(&config, Some(Credentials::new(EMAIL, "wrong"))).await;
    assert!(matches!(result, Err(ClientError::Unauthorized { .. })));
    assert!(!config.session.path.exists());
}

#[tokio::test]
async fn test_rejected_token_then_relogin() {
    let cloud = MockCloud::new();
    let base_url = start_mock_cloud(cloud.clone()).await;
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&base_url, dir.path());

    // A token the server does not know, as after expiry
    let store = SessionStore::new(&config.session.path);
    store
        .save(&meater_client::Session {
            token: Some("expired".to_string()),
            device_id: "DEVICE-OLD".to_string(),
        })
        .unwrap();

    let mut client = MeaterClient::new(&config, credentials()).unwrap();
    assert!(matches!(
        client.cooks().await,
        Err(ClientError::Unauthorized { .. })
    ));

    client.relogin().await.unwrap();
    assert_eq!(client.device_id(), "DEVICE-OLD");
    assert_eq!(client.cooks().await.unwrap().len(), 2);
    assert_eq!(
        store.load().unwrap().unwrap().token.as_deref(),
        Some(ACCESS_TOKEN)
    );
}

#[tokio::test]
async fn test_server_error_surfaces_status_and_body() {
    let cloud = MockCloud::new();
    let base_url = start_mock_cloud(cloud.clone()).await;
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&base_url, dir.path());

    let client = MeaterClient::connect(&config, credentials()).await.unwrap();
    cloud.fail_cooks.store(true, Ordering::SeqCst);

    match client.cooks().await {
        Err(ClientError::Status {
            method,
            status,
            body,
            url,
        }) => {
            assert_eq!(method, "GET");
            assert_eq!(status, 500);
            assert_eq!(body, "upstream exploded");
            assert!(url.ends_with("/v2/cooks"));
        }
        other => panic!("expected status error, got {:?}", other.map(|c| c.len())),
    }
    assert_eq!(cloud.cooks_calls(), 1);
}

#[tokio::test]
async fn test_logout_then_login_keeps_device() {
    let cloud = MockCloud::new();
    let base_url = start_mock_cloud(cloud.clone()).await;
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&base_url, dir.path());

    let mut client = MeaterClient::connect(&config, credentials()).await.unwrap();
    let device_id = client.device_id().to_string();
    client.logout().unwrap();
    assert!(!client.is_authenticated());

    let again = MeaterClient::connect(&config, credentials()).await.unwrap();
    assert_eq!(again.device_id(), device_id);
    assert_eq!(cloud.login_calls(), 2);
}
