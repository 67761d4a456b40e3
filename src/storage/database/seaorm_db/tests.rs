use super::SeaOrmDatabase;
use crate::config::DatabaseConfig;
use crate::core::models::{NewRole, User};
use crate::utils::error::HealthOpsError;

async fn create_test_db() -> SeaOrmDatabase {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        enabled: true,
        ..DatabaseConfig::default()
    };
    let db = SeaOrmDatabase::new(&config).await.unwrap();
    db.migrate().await.unwrap();
    db
}

fn staff_role() -> NewRole {
    NewRole {
        name: "staff".to_string(),
        description: Some("Clinical staff access".to_string()),
        permission_keys: vec![
            "patients.read".to_string(),
            "patients.write".to_string(),
            "patients.read".to_string(),
        ],
    }
}

#[tokio::test]
async fn test_user_round_trip() {
    let db = create_test_db().await;
    let user = User::new(
        Some("Jordan".to_string()),
        "jordan@healthops.local".to_string(),
        Some("$2b$10$hash".to_string()),
    );
    db.create_user(&user).await.unwrap();

    let found = db
        .find_user_by_email("jordan@healthops.local")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.id, user.id);
    assert_eq!(found.password_hash.as_deref(), Some("$2b$10$hash"));
    assert!(
        db.find_user_by_email("JORDAN@healthops.local")
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_duplicate_email_conflicts() {
    let db = create_test_db().await;
    let first = User::new(None, "dup@healthops.local".to_string(), None);
    let second = User::new(None, "dup@healthops.local".to_string(), None);

    db.create_user(&first).await.unwrap();
    let err = db.create_user(&second).await.unwrap_err();
    assert!(matches!(err, HealthOpsError::Conflict(_)));
}

#[tokio::test]
async fn test_role_graph() {
    let db = create_test_db().await;
    db.upsert_permission("patients.read", None).await.unwrap();
    db.upsert_permission("patients.write", None).await.unwrap();
    db.upsert_permission("billing.read", None).await.unwrap();

    let role = db.create_role(&staff_role()).await.unwrap();
    let user = User::new(None, "u1@healthops.local".to_string(), None);
    db.create_user(&user).await.unwrap();

    db.upsert_user_role(user.id, role.id).await.unwrap();
    db.upsert_user_role(user.id, role.id).await.unwrap();

    let grants = db.find_roles_for_user(user.id).await.unwrap();
    assert_eq!(grants.len(), 1);
    let keys: Vec<&str> = grants[0].permissions.iter().map(|p| p.key.as_str()).collect();
    assert_eq!(keys, vec!["patients.read", "patients.write"]);

    let listed = db.list_users_with_roles().await.unwrap();
    assert_eq!(listed[0].roles[0].name, "staff");

    assert!(db.delete_user_role(user.id, role.id).await.unwrap());
    assert!(!db.delete_user_role(user.id, role.id).await.unwrap());
    assert!(db.find_roles_for_user(user.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_role_rejects_duplicates_and_unknown_keys() {
    let db = create_test_db().await;
    db.upsert_permission("patients.read", None).await.unwrap();
    db.upsert_permission("patients.write", None).await.unwrap();

    db.create_role(&staff_role()).await.unwrap();
    let err = db.create_role(&staff_role()).await.unwrap_err();
    assert!(matches!(err, HealthOpsError::Conflict(_)));

    let err = db
        .create_role(&NewRole {
            name: "auditor".to_string(),
            description: None,
            permission_keys: vec!["audit.read".to_string()],
        })
        .await
        .unwrap_err();
    assert!(matches!(err, HealthOpsError::NotFound(_)));
    assert!(db.find_role_by_name("auditor").await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_user_removes_memberships() {
    let db = create_test_db().await;
    db.upsert_permission("patients.read", None).await.unwrap();
    db.upsert_permission("patients.write", None).await.unwrap();
    let role = db.create_role(&staff_role()).await.unwrap();
    let user = User::new(None, "gone@healthops.local".to_string(), None);
    db.create_user(&user).await.unwrap();
    db.upsert_user_role(user.id, role.id).await.unwrap();

    assert!(db.delete_user(user.id).await.unwrap());
    assert!(db.find_user_by_id(user.id).await.unwrap().is_none());
    assert!(db.find_roles_for_user(user.id).await.unwrap().is_empty());
    assert_eq!(db.list_roles().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_grant_unknown_role_is_not_found() {
    let db = create_test_db().await;
    let user = User::new(None, "u@healthops.local".to_string(), None);
    db.create_user(&user).await.unwrap();

    let err = db
        .upsert_user_role(user.id, uuid::Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(matches!(err, HealthOpsError::NotFound(_)));
}

#[tokio::test]
async fn test_update_password() {
    let db = create_test_db().await;
    let user = User::new(None, "pw@healthops.local".to_string(), None);
    db.create_user(&user).await.unwrap();

    db.update_user_password(user.id, "$2b$10$new").await.unwrap();
    let found = db.find_user_by_id(user.id).await.unwrap().unwrap();
    assert!(found.has_password());

    let err = db
        .update_user_password(uuid::Uuid::new_v4(), "$2b$10$new")
        .await
        .unwrap_err();
    assert!(matches!(err, HealthOpsError::NotFound(_)));
}
