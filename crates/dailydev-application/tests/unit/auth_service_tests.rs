//! Authentication use case tests

use crate::test_utils::auth_fixture;
use dailydev_application::Registration;
use dailydev_domain::error::Error;

fn registration(email: &str, password: &str) -> Registration {
    Registration {
        email: email.to_string(),
        password: password.to_string(),
        first_name: Some("Ada".to_string()),
        last_name: Some("Lovelace".to_string()),
    }
}

#[tokio::test]
async fn test_register_login_and_verify_round_trip() {
    let fixture = auth_fixture();
    let user_id = fixture
        .service
        .register(registration("ada@example.com", "secret"))
        .await
        .unwrap();

    let token = fixture.service.login("ada@example.com", "secret").await.unwrap();
    let user = fixture.service.verify_token(&token.token).await.unwrap();

    assert_eq!(user.id, user_id);
    assert_eq!(user.first_name.as_deref(), Some("Ada"));
}

#[tokio::test]
async fn test_register_stores_hash_not_password() {
    let fixture = auth_fixture();
    let user_id = fixture
        .service
        .register(registration("ada@example.com", "secret"))
        .await
        .unwrap();

    let token = fixture.service.login("ada@example.com", "secret").await.unwrap();
    let user = fixture.service.verify_token(&token.token).await.unwrap();
    assert_eq!(user.id, user_id);
    assert_ne!(user.password_hash, "secret");
}

#[tokio::test]
async fn test_duplicate_email_in_any_case_is_conflict() {
    let fixture = auth_fixture();
    fixture
        .service
        .register(registration("ada@example.com", "secret"))
        .await
        .unwrap();

    let err = fixture
        .service
        .register(registration("ADA@Example.com", "other"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Conflict { .. }));
    assert_eq!(fixture.users.len(), 1);
}

#[tokio::test]
async fn test_register_requires_email_and_password() {
    let fixture = auth_fixture();

    let missing_email = fixture
        .service
        .register(registration("  ", "secret"))
        .await
        .unwrap_err();
    assert!(matches!(missing_email, Error::InvalidArgument { .. }));

    let missing_password = fixture
        .service
        .register(registration("ada@example.com", ""))
        .await
        .unwrap_err();
    assert!(matches!(missing_password, Error::InvalidArgument { .. }));
    assert!(fixture.users.is_empty());
}

#[tokio::test]
async fn test_blank_names_are_dropped() {
    let fixture = auth_fixture();
    fixture
        .service
        .register(Registration {
            email: "ada@example.com".to_string(),
            password: "secret".to_string(),
            first_name: Some("   ".to_string()),
            last_name: None,
        })
        .await
        .unwrap();

    let token = fixture.service.login("ada@example.com", "secret").await.unwrap();
    let user = fixture.service.verify_token(&token.token).await.unwrap();
    assert!(user.first_name.is_none());
}

#[tokio::test]
async fn test_login_failures_share_one_message() {
    let fixture = auth_fixture();
    fixture
        .service
        .register(registration("ada@example.com", "secret"))
        .await
        .unwrap();

    let wrong_password = fixture
        .service
        .login("ada@example.com", "nope")
        .await
        .unwrap_err();
    let unknown_email = fixture
        .service
        .login("bob@example.com", "secret")
        .await
        .unwrap_err();

    assert!(matches!(wrong_password, Error::Authentication { .. }));
    assert!(matches!(unknown_email, Error::Authentication { .. }));
    assert_eq!(wrong_password.to_string(), unknown_email.to_string());
}

#[tokio::test]
async fn test_unknown_email_login_still_checks_a_hash() {
    let fixture = auth_fixture();

    let err = fixture
        .service
        .login("nobody@example.com", "secret")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Authentication { .. }));
    assert_eq!(fixture.hasher.verifications(), 1);

    fixture
        .service
        .login("nobody@example.com", "secret")
        .await
        .unwrap_err();
    assert_eq!(fixture.hasher.verifications(), 2);
}

#[tokio::test]
async fn test_login_email_is_case_insensitive() {
    let fixture = auth_fixture();
    fixture
        .service
        .register(registration("ada@example.com", "secret"))
        .await
        .unwrap();

    assert!(fixture.service.login(" ADA@example.COM", "secret").await.is_ok());
}

#[tokio::test]
async fn test_verify_rejects_blank_invalid_and_unknown_user_tokens() {
    let fixture = auth_fixture();

    for token in ["", "garbage", "token-missing-user"] {
        let err = fixture.service.verify_token(token).await.unwrap_err();
        assert!(
            matches!(err, Error::Authentication { .. }),
            "token {token:?} should be rejected"
        );
    }
}
