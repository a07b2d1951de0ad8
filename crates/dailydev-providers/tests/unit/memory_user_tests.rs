//! In-memory user repository tests

use dailydev_domain::entities::NewUser;
use dailydev_domain::error::Error;
use dailydev_domain::repositories::UserRepository;
use dailydev_domain::value_objects::EmailAddress;
use dailydev_providers::database::MemoryUserRepository;

fn new_user(email: &str) -> NewUser {
    NewUser::new(
        EmailAddress::parse(email).unwrap(),
        Some("Ada".to_string()),
        None,
        "hash".to_string(),
    )
}

#[tokio::test]
async fn test_insert_assigns_id_and_is_findable() {
    let repo = MemoryUserRepository::new();
    let user = repo.insert(new_user("ada@example.com")).await.unwrap();

    assert!(!user.id.is_empty());
    let by_id = repo.find_by_id(&user.id).await.unwrap().unwrap();
    assert_eq!(by_id.email.as_str(), "ada@example.com");

    let by_email = repo
        .find_by_email(&EmailAddress::parse("ADA@example.com").unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_email.id, user.id);
}

#[tokio::test]
async fn test_duplicate_email_is_conflict() {
    let repo = MemoryUserRepository::new();
    repo.insert(new_user("ada@example.com")).await.unwrap();

    let err = repo
        .insert(new_user(" Ada@Example.com "))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Conflict { .. }));
    assert_eq!(repo.len(), 1);
}

#[tokio::test]
async fn test_unknown_id_is_none() {
    let repo = MemoryUserRepository::new();
    assert!(repo.is_empty());
    assert!(repo.find_by_id("nope").await.unwrap().is_none());
}

#[tokio::test]
async fn test_concurrent_duplicate_inserts_keep_one_user() {
    let repo = std::sync::Arc::new(MemoryUserRepository::new());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let repo = std::sync::Arc::clone(&repo);
            tokio::spawn(async move { repo.insert(new_user("race@example.com")).await })
        })
        .collect();

    let mut created = 0;
    for handle in handles {
        if handle.await.unwrap().is_ok() {
            created += 1;
        }
    }

    assert_eq!(created, 1);
    assert_eq!(repo.len(), 1);
}
