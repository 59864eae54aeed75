use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement};

use migration::MigratorTrait;
use registry::Registry;

async fn registry_with_db() -> (Registry, DatabaseConnection) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    (Registry::new(db.clone()), db)
}

#[tokio::test]
async fn register_creates_exactly_once() {
    let (registry, _db) = registry_with_db().await;

    let (user, created) = registry.register("alice").await.unwrap();
    assert!(created);
    assert_eq!(user.username, "alice");
    assert_eq!(user.role_id, None);

    let (again, created) = registry.register("alice").await.unwrap();
    assert!(!created);
    assert_eq!(again.id, user.id);
}

#[tokio::test]
async fn find_user_absent_is_none() {
    let (registry, _db) = registry_with_db().await;

    assert!(registry.find_user("nobody").await.unwrap().is_none());

    registry.register("bob").await.unwrap();
    let found = registry.find_user("bob").await.unwrap().unwrap();
    assert_eq!(found.username, "bob");
}

#[tokio::test]
async fn distinct_usernames_get_distinct_rows() {
    let (registry, _db) = registry_with_db().await;

    let (alice, _) = registry.register("alice").await.unwrap();
    let (bob, _) = registry.register("bob").await.unwrap();
    assert_ne!(alice.id, bob.id);
}

#[tokio::test]
async fn role_users_are_enumerable() {
    let (registry, db) = registry_with_db().await;
    let backend = db.get_database_backend();

    db.execute(Statement::from_sql_and_values(
        backend,
        "INSERT INTO roles (name) VALUES (?)",
        vec!["moderator".into()],
    ))
    .await
    .unwrap();

    let role = registry.role("moderator").await.unwrap().unwrap();
    assert!(registry.users_with_role(&role).await.unwrap().is_empty());

    registry.register("carol").await.unwrap();
    db.execute(Statement::from_sql_and_values(
        backend,
        "UPDATE users SET role_id = ? WHERE username = ?",
        vec![role.id.into(), "carol".into()],
    ))
    .await
    .unwrap();

    let members = registry.users_with_role(&role).await.unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].username, "carol");
}
