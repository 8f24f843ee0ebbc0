use shelfmark::services::settings::StoreSettings;
use shelfmark::store::HttpRecordStore;
use shelfmark::types::errors::StoreError;
use shelfmark::types::session::{AccessToken, Session};

fn settings() -> StoreSettings {
    StoreSettings {
        base_url: "https://abc.example.co/".to_string(),
        api_key: "public-key".to_string(),
        table: "bookmarks".to_string(),
    }
}

#[test]
fn test_client_builds_from_session_token() {
    let session = Session::new("ada", "user-jwt");
    assert!(HttpRecordStore::new(&settings(), session.access_token()).is_ok());
}

#[test]
fn test_api_key_with_control_characters_is_rejected() {
    let mut bad = settings();
    bad.api_key = "key\nwith-newline".to_string();

    let token = AccessToken::new("user-jwt");
    let err = HttpRecordStore::new(&bad, &token);
    assert!(matches!(err, Err(StoreError::Rejected(_))));
}

#[test]
fn test_token_with_control_characters_is_rejected() {
    let token = AccessToken::new("jwt\nwith-newline");
    let err = HttpRecordStore::new(&settings(), &token);
    assert!(matches!(err, Err(StoreError::Rejected(_))));
}

#[test]
fn test_access_token_debug_is_redacted() {
    let token = AccessToken::new("super-secret-jwt");
    let printed = format!("{:?}", token);
    assert!(!printed.contains("super-secret-jwt"));
    assert!(printed.contains("redacted"));
}
