//! Sign-in and authorization over the relational store

#[cfg(test)]
mod tests {
    use crate::common::fixtures::{PASSWORD, SeededAuth, test_config, unique_email};
    use crate::common::TestDatabase;
    use healthops::auth::rbac::permissions::{
        ADMIN_MANAGE, BILLING_WRITE, PATIENTS_READ, PATIENTS_WRITE,
    };
    use healthops::auth::{Access, AuthFailureReason, Denial, Requirement};
    use healthops::core::models::{NewRole, User};
    use healthops::storage::StorageLayer;
    use healthops::{AuthSystem, HealthOpsError};

    /// u1 holds a role granting exactly the two patients permissions
    async fn seed_u1(seeded: &SeededAuth) -> User {
        let role = seeded
            .auth
            .create_role(&NewRole {
                name: "patients-desk".to_string(),
                description: None,
                permission_keys: vec![PATIENTS_READ.to_string(), PATIENTS_WRITE.to_string()],
            })
            .await
            .unwrap();
        let u1 = seeded
            .auth
            .create_user("U One", &unique_email("u1"), PASSWORD)
            .await
            .unwrap();
        seeded.auth.grant_role(u1.id, role.id).await.unwrap();
        u1
    }

    #[tokio::test]
    async fn test_patients_only_session_scenario() {
        let db = TestDatabase::new().await;
        let seeded = SeededAuth::over(db.store()).await;
        let u1 = seed_u1(&seeded).await;
        let token = seeded.token_for(&u1).await;
        let guard = seeded.auth.guard();

        match guard.require_permission(Some(&token), BILLING_WRITE) {
            Access::Denied(denial) => {
                assert_eq!(
                    denial,
                    Denial::Forbidden(Requirement::Permission(BILLING_WRITE.to_string()))
                );
                assert_eq!(denial.redirect_path(), "/unauthorized");
            }
            Access::Granted(_) => panic!("u1 must not write billing"),
        }

        let claims = guard
            .require_permission(Some(&token), PATIENTS_READ)
            .into_result()
            .unwrap();
        assert_eq!(claims.subject, u1.id);
        assert_eq!(claims.permissions.len(), 2);
    }

    #[tokio::test]
    async fn test_seeded_staff_role_excludes_admin_only() {
        let db = TestDatabase::new().await;
        let seeded = SeededAuth::over(db.store()).await;
        let token = seeded.token_for(&seeded.staff).await;
        let guard = seeded.auth.guard();

        assert!(guard.require_permission(Some(&token), BILLING_WRITE).is_granted());
        assert_eq!(
            guard.require_permission(Some(&token), ADMIN_MANAGE),
            Access::Denied(Denial::Forbidden(Requirement::Permission(
                ADMIN_MANAGE.to_string()
            )))
        );
    }

    #[tokio::test]
    async fn test_revoked_role_stays_in_issued_session() {
        let db = TestDatabase::new().await;
        let seeded = SeededAuth::over(db.store()).await;
        let token = seeded.token_for(&seeded.staff).await;

        assert!(
            seeded
                .auth
                .revoke_role(seeded.staff.id, seeded.staff_role.id)
                .await
                .unwrap()
        );

        assert!(
            seeded
                .auth
                .guard()
                .require_permission(Some(&token), PATIENTS_READ)
                .is_granted()
        );

        // A fresh sign-in picks up the revocation
        let fresh = seeded.token_for(&seeded.staff).await;
        assert!(
            !seeded
                .auth
                .guard()
                .require_permission(Some(&fresh), PATIENTS_READ)
                .is_granted()
        );
    }

    #[tokio::test]
    async fn test_admin_claims_cover_catalogue() {
        let db = TestDatabase::new().await;
        let seeded = SeededAuth::over(db.store()).await;

        let claims = seeded
            .auth
            .authenticate(&seeded.admin.email, PASSWORD)
            .await
            .unwrap();
        let catalogue = seeded.auth.rbac().list_permissions().await.unwrap();

        assert!(claims.has_permission(ADMIN_MANAGE));
        assert_eq!(claims.permissions.len(), catalogue.len());
    }

    #[tokio::test]
    async fn test_failures_share_one_message() {
        let db = TestDatabase::new().await;
        let seeded = SeededAuth::over(db.store()).await;

        let wrong = seeded
            .auth
            .authenticate(&seeded.staff.email, "definitely-wrong")
            .await
            .unwrap_err();
        let missing = seeded
            .auth
            .authenticate("ghost@healthops.local", PASSWORD)
            .await
            .unwrap_err();

        assert_eq!(wrong.to_string(), missing.to_string());
        match (wrong, missing) {
            (HealthOpsError::Authentication(a), HealthOpsError::Authentication(b)) => {
                assert_eq!(a.reason, AuthFailureReason::WrongPassword);
                assert_eq!(b.reason, AuthFailureReason::NotFound);
            }
            other => panic!("unexpected errors: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_password_change_persists() {
        let db = TestDatabase::new().await;
        let seeded = SeededAuth::over(db.store()).await;

        seeded
            .auth
            .change_password(seeded.staff.id, PASSWORD, "a-brand-new-password")
            .await
            .unwrap();

        assert!(
            seeded
                .auth
                .authenticate(&seeded.staff.email, PASSWORD)
                .await
                .is_err()
        );
        assert!(
            seeded
                .auth
                .authenticate(&seeded.staff.email, "a-brand-new-password")
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn test_catalogue_seeding_survives_restart() {
        let db = TestDatabase::new().await;
        let first = SeededAuth::over(db.store()).await;
        let roles_before = first.auth.rbac().list_roles().await.unwrap();

        let config = test_config();
        let second = AuthSystem::new(config.auth(), db.store()).unwrap();
        second.rbac().ensure_catalog().await.unwrap();

        let roles_after = second.rbac().list_roles().await.unwrap();
        assert_eq!(roles_before.len(), roles_after.len());
        assert!(
            second
                .authenticate(&first.staff.email, PASSWORD)
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn test_storage_layer_uses_database_when_enabled() {
        let config = test_config();
        assert!(config.storage().database.enabled);

        let storage = StorageLayer::new(config.storage()).await.unwrap();
        storage.migrate().await.unwrap();
        storage.health_check().await.unwrap();

        let seeded = SeededAuth::over(storage.store()).await;
        assert!(
            seeded
                .auth
                .authenticate(&seeded.admin.email, PASSWORD)
                .await
                .is_ok()
        );
        storage.close().await.unwrap();
    }
}
