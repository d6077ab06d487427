mod common;

use chrono::NaiveDate;
use uuid::Uuid;

use spark_api::models::{NewProfile, UpdateProfile};
use spark_api::repository::{ProfileRepository, UserRepository};

fn setup() -> (UserRepository, ProfileRepository) {
    let pool = common::test_pool();
    (
        UserRepository::new(pool.clone()),
        ProfileRepository::new(pool),
    )
}

#[test]
#[ignore = "requires a running Postgres (TEST_DATABASE_URL)"]
fn create_and_find_profile() {
    let (users, profiles) = setup();
    let user = common::seed_user(&users, "profile-create");

    let profile = profiles
        .create(&NewProfile {
            user_id: user.id,
            display_name: "jo".to_string(),
        })
        .unwrap();
    assert_ne!(profile.id, Uuid::nil());
    assert_eq!(profile.photos, serde_json::json!([]));

    let found = profiles.find_by_user_id(user.id).unwrap();
    assert_eq!(found.id, profile.id);
    assert_eq!(found.display_name, "jo");
}

#[test]
#[ignore = "requires a running Postgres (TEST_DATABASE_URL)"]
fn one_profile_per_user() {
    let (users, profiles) = setup();
    let user = common::seed_user(&users, "profile-unique");

    profiles
        .create(&NewProfile {
            user_id: user.id,
            display_name: "first".to_string(),
        })
        .unwrap();

    let second = profiles.create(&NewProfile {
        user_id: user.id,
        display_name: "second".to_string(),
    });
    assert!(second.is_err());
}

#[test]
#[ignore = "requires a running Postgres (TEST_DATABASE_URL)"]
fn update_profile_fields() {
    let (users, profiles) = setup();
    let user = common::seed_user(&users, "profile-update");

    profiles
        .create(&NewProfile {
            user_id: user.id,
            display_name: "before".to_string(),
        })
        .unwrap();

    let updated = profiles
        .update(
            user.id,
            &UpdateProfile {
                bio: Some("likes hiking".to_string()),
                birth_date: Some(NaiveDate::from_ymd_opt(1990, 1, 1).unwrap()),
                photos: Some(serde_json::json!(["https://example.com/a.jpg"])),
                ..Default::default()
            },
        )
        .unwrap();

    // Untouched fields keep their values.
    assert_eq!(updated.display_name, "before");
    assert_eq!(updated.bio.as_deref(), Some("likes hiking"));
    assert_eq!(updated.birth_date, NaiveDate::from_ymd_opt(1990, 1, 1));
    assert_eq!(updated.photos, serde_json::json!(["https://example.com/a.jpg"]));
}

#[test]
#[ignore = "requires a running Postgres (TEST_DATABASE_URL)"]
fn update_non_existent_profile_errors() {
    let (_, profiles) = setup();

    let result = profiles.update(
        Uuid::new_v4(),
        &UpdateProfile {
            bio: Some("no one home".to_string()),
            ..Default::default()
        },
    );
    assert!(result.is_err());
}

#[test]
#[ignore = "requires a running Postgres (TEST_DATABASE_URL)"]
fn delete_profile() {
    let (users, profiles) = setup();
    let user = common::seed_user(&users, "profile-delete");

    profiles
        .create(&NewProfile {
            user_id: user.id,
            display_name: "gone soon".to_string(),
        })
        .unwrap();

    profiles.delete(user.id).unwrap();
    assert!(profiles.find_by_user_id(user.id).is_err());
    assert!(profiles.delete(user.id).is_err());
}
