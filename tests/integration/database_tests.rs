//! Database integration tests
//!
//! Exercise the relational store through the `AuthStore` interface using a
//! real in-memory SQLite database.

#[cfg(test)]
mod tests {
    use crate::common::TestDatabase;
    use crate::{assert_err, assert_ok};
    use healthops::HealthOpsError;
    use healthops::core::models::{NewRole, User};
    use healthops::core::traits::AuthStore;
    use healthops::storage::database::{Database, DatabaseBackendType};
    use std::path::PathBuf;

    fn user(email: &str) -> User {
        User::new(
            Some("Test User".to_string()),
            email.to_string(),
            Some("$2b$10$hash".to_string()),
        )
    }

    #[tokio::test]
    async fn test_database_health_check() {
        let db = TestDatabase::new().await;
        assert_ok!(db.db().health_check().await);
        assert_eq!(db.db().backend_type(), DatabaseBackendType::SQLite);
    }

    #[tokio::test]
    async fn test_migrations_are_repeatable() {
        let db = TestDatabase::new().await;
        assert_ok!(db.db().migrate().await);
    }

    #[tokio::test]
    async fn test_email_lookup_is_exact() {
        let db = TestDatabase::new().await;
        let store = db.store();
        assert_ok!(store.create_user(&user("Jordan@healthops.local")).await);

        assert!(
            assert_ok!(store.find_user_by_email("Jordan@healthops.local").await).is_some()
        );
        assert!(
            assert_ok!(store.find_user_by_email("jordan@healthops.local").await).is_none()
        );
    }

    #[tokio::test]
    async fn test_user_without_password_round_trips() {
        let db = TestDatabase::new().await;
        let store = db.store();
        let created = assert_ok!(
            store
                .create_user(&User::new(None, "sso@healthops.local".to_string(), None))
                .await
        );

        let found = assert_ok!(store.find_user_by_id(created.id).await).unwrap();
        assert!(found.password_hash.is_none());
        assert!(found.name.is_none());
    }

    #[tokio::test]
    async fn test_role_graph_and_listing() {
        let db = TestDatabase::new().await;
        let store = db.store();

        assert_ok!(store.upsert_permission("patients.read", Some("View patients")).await);
        assert_ok!(store.upsert_permission("billing.read", Some("View billing")).await);
        let role = assert_ok!(
            store
                .create_role(&NewRole {
                    name: "front-desk".to_string(),
                    description: None,
                    permission_keys: vec!["patients.read".to_string(), "billing.read".to_string()],
                })
                .await
        );
        let u = assert_ok!(store.create_user(&user("desk@healthops.local")).await);
        assert_ok!(store.upsert_user_role(u.id, role.id).await);

        let listed = assert_ok!(store.list_users_with_roles().await);
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].roles[0].name, "front-desk");

        let grants = assert_ok!(store.find_roles_for_user(u.id).await);
        let keys: Vec<&str> = grants[0].permissions.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, vec!["billing.read", "patients.read"]);

        assert!(!assert_ok!(store.delete_user_role(u.id, uuid::Uuid::new_v4()).await));
        assert_eq!(assert_ok!(store.find_roles_for_user(u.id).await).len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_role_name_conflicts() {
        let db = TestDatabase::new().await;
        let store = db.store();
        let role = NewRole {
            name: "auditor".to_string(),
            description: None,
            permission_keys: Vec::new(),
        };

        assert_ok!(store.create_role(&role).await);
        let err = assert_err!(store.create_role(&role).await);
        assert!(matches!(err, HealthOpsError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_file_database_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path: PathBuf = dir.path().join("nested").join("healthops.db");
        let config = healthops::config::DatabaseConfig {
            url: format!("sqlite://{}?mode=rwc", path.display()),
            ..TestDatabase::config()
        };

        let db = assert_ok!(Database::new(&config).await);
        assert_ok!(db.migrate().await);
        assert_ok!(db.create_user(&user("file@healthops.local")).await);
        assert_ok!(db.close().await);

        assert!(path.exists());
    }
}
