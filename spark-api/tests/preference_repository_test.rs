mod common;

use uuid::Uuid;

use spark_api::models::{NewPreference, UpdatePreference};
use spark_api::repository::{PreferenceRepository, UserRepository};

fn setup() -> (UserRepository, PreferenceRepository) {
    let pool = common::test_pool();
    (
        UserRepository::new(pool.clone()),
        PreferenceRepository::new(pool),
    )
}

#[test]
#[ignore = "requires a running Postgres (TEST_DATABASE_URL)"]
fn create_applies_database_defaults() {
    let (users, preferences) = setup();
    let user = common::seed_user(&users, "pref-create");

    let p = preferences.create(&NewPreference { user_id: user.id }).unwrap();
    assert_ne!(p.id, Uuid::nil());
    assert_eq!(p.max_distance_km, 50);
    assert_eq!(p.min_age, 18);
    assert_eq!(p.max_age, 99);
    assert!(p.notify_new_matches);
    assert!(p.notify_messages);
    assert!(p.show_online_status);
    assert!(p.show_last_active);
    assert!(p.show_distance);
}

#[test]
#[ignore = "requires a running Postgres (TEST_DATABASE_URL)"]
fn one_preference_row_per_user() {
    let (users, preferences) = setup();
    let user = common::seed_user(&users, "pref-unique");

    preferences.create(&NewPreference { user_id: user.id }).unwrap();
    assert!(preferences.create(&NewPreference { user_id: user.id }).is_err());
}

#[test]
#[ignore = "requires a running Postgres (TEST_DATABASE_URL)"]
fn find_by_user_id() {
    let (users, preferences) = setup();
    let user = common::seed_user(&users, "pref-find");

    let created = preferences.create(&NewPreference { user_id: user.id }).unwrap();
    let found = preferences.find_by_user_id(user.id).unwrap();
    assert_eq!(found.id, created.id);

    assert!(preferences.find_by_user_id(Uuid::new_v4()).is_err());
}

#[test]
#[ignore = "requires a running Postgres (TEST_DATABASE_URL)"]
fn partial_update_leaves_other_fields_alone() {
    let (users, preferences) = setup();
    let user = common::seed_user(&users, "pref-update");

    preferences.create(&NewPreference { user_id: user.id }).unwrap();

    let updated = preferences
        .update(
            user.id,
            &UpdatePreference {
                max_distance_km: Some(25),
                show_distance: Some(false),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(updated.max_distance_km, 25);
    assert!(!updated.show_distance);
    assert_eq!(updated.min_age, 18);
    assert_eq!(updated.max_age, 99);
    assert!(updated.notify_messages);
}

#[test]
#[ignore = "requires a running Postgres (TEST_DATABASE_URL)"]
fn update_non_existent_preferences_errors() {
    let (_, preferences) = setup();

    let result = preferences.update(
        Uuid::new_v4(),
        &UpdatePreference {
            max_distance_km: Some(10),
            ..Default::default()
        },
    );
    assert!(result.is_err());
}

#[test]
#[ignore = "requires a running Postgres (TEST_DATABASE_URL)"]
fn database_rejects_inverted_age_bounds() {
    let (users, preferences) = setup();
    let user = common::seed_user(&users, "pref-bounds");

    preferences.create(&NewPreference { user_id: user.id }).unwrap();

    // Rejected by the table's CHECK constraint, not application code.
    let result = preferences.update(
        user.id,
        &UpdatePreference {
            min_age: Some(60),
            max_age: Some(30),
            ..Default::default()
        },
    );
    assert!(result.is_err());
}

#[test]
#[ignore = "requires a running Postgres (TEST_DATABASE_URL)"]
fn delete_preferences() {
    let (users, preferences) = setup();
    let user = common::seed_user(&users, "pref-delete");

    preferences.create(&NewPreference { user_id: user.id }).unwrap();
    preferences.delete(user.id).unwrap();
    assert!(preferences.find_by_user_id(user.id).is_err());
    assert!(preferences.delete(user.id).is_err());
}
