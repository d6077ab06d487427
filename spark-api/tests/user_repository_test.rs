mod common;

use uuid::Uuid;

use spark_api::models::{NewUser, UpdateUser};
use spark_api::repository::UserRepository;

#[test]
#[ignore = "requires a running Postgres (TEST_DATABASE_URL)"]
fn create_user_returns_non_nil_id() {
    let repo = UserRepository::new(common::test_pool());

    let user = common::seed_user(&repo, "create");
    assert_ne!(user.id, Uuid::nil());
    assert!(user.is_active);
    assert!(!user.is_verified);
    assert!(user.last_login_at.is_none());
}

#[test]
#[ignore = "requires a running Postgres (TEST_DATABASE_URL)"]
fn duplicate_email_is_rejected() {
    let repo = UserRepository::new(common::test_pool());

    let user = common::seed_user(&repo, "dup");
    let result = repo.create(&NewUser {
        email: user.email.clone(),
        password_hash: "another-hash".to_string(),
    });
    assert!(result.is_err());
}

#[test]
#[ignore = "requires a running Postgres (TEST_DATABASE_URL)"]
fn find_by_id_and_email() {
    let repo = UserRepository::new(common::test_pool());

    let user = common::seed_user(&repo, "find");

    let by_id = repo.find_by_id(user.id).unwrap();
    assert_eq!(by_id.id, user.id);
    assert_eq!(by_id.email, user.email);

    let by_email = repo.find_by_email(&user.email).unwrap();
    assert_eq!(by_email.id, user.id);

    assert!(repo.find_by_email("nonexistent@example.com").is_err());
}

#[test]
#[ignore = "requires a running Postgres (TEST_DATABASE_URL)"]
fn email_exists_reflects_database_state() {
    let repo = UserRepository::new(common::test_pool());

    let user = common::seed_user(&repo, "exists");
    assert!(repo.email_exists(&user.email).unwrap());
    assert!(!repo.email_exists("nobody@example.com").unwrap());
}

#[test]
#[ignore = "requires a running Postgres (TEST_DATABASE_URL)"]
fn update_user() {
    let repo = UserRepository::new(common::test_pool());

    let user = common::seed_user(&repo, "update");
    let new_email = format!("updated-{}@example.com", Uuid::new_v4());

    let updated = repo
        .update(
            user.id,
            &UpdateUser {
                email: Some(new_email.clone()),
                is_verified: Some(true),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(updated.email, new_email);
    assert!(updated.is_verified);
    assert!(updated.updated_at >= user.updated_at);
}

#[test]
#[ignore = "requires a running Postgres (TEST_DATABASE_URL)"]
fn update_non_existent_user_errors() {
    let repo = UserRepository::new(common::test_pool());

    let result = repo.update(
        Uuid::new_v4(),
        &UpdateUser {
            is_active: Some(false),
            ..Default::default()
        },
    );
    assert!(result.is_err());
}

#[test]
#[ignore = "requires a running Postgres (TEST_DATABASE_URL)"]
fn record_login_stamps_timestamp() {
    let repo = UserRepository::new(common::test_pool());

    let user = common::seed_user(&repo, "login");
    let updated = repo.record_login(user.id).unwrap();
    assert!(updated.last_login_at.is_some());
}

#[test]
#[ignore = "requires a running Postgres (TEST_DATABASE_URL)"]
fn delete_user() {
    let repo = UserRepository::new(common::test_pool());

    let user = common::seed_user(&repo, "delete");
    repo.delete(user.id).unwrap();
    assert!(repo.find_by_id(user.id).is_err());
}

#[test]
#[ignore = "requires a running Postgres (TEST_DATABASE_URL)"]
fn delete_non_existent_user_errors() {
    let repo = UserRepository::new(common::test_pool());

    assert!(repo.delete(Uuid::new_v4()).is_err());
}
