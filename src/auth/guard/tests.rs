//! Access guard tests

#[cfg(test)]
mod tests {
    use crate::auth::guard::{
        Access, AccessGuard, Denial, Requirement, SIGN_IN_PATH, SessionReader, UNAUTHORIZED_PATH,
    };
    use crate::auth::jwt::SessionCodec;
    use crate::auth::types::SessionClaims;
    use crate::config::AuthConfig;
    use crate::utils::error::HealthOpsError;
    use uuid::Uuid;

    fn test_codec() -> SessionCodec {
        SessionCodec::new(&AuthConfig {
            session_secret: "guard_Test_secret_value_0123456789abcdef".to_string(),
            ..AuthConfig::default()
        })
        .unwrap()
    }

    fn create_guard() -> AccessGuard {
        AccessGuard::new(SessionReader::new(test_codec()))
    }

    fn staff_token(guard: &AccessGuard) -> (SessionClaims, String) {
        let claims = SessionClaims::new(
            Uuid::new_v4(),
            ["staff"],
            ["patients.read", "patients.write"],
        );
        let token = guard.reader().codec().encode(&claims).unwrap();
        (claims, token)
    }

    #[test]
    fn test_missing_token_is_anonymous() {
        let guard = create_guard();

        assert!(guard.reader().current_session(None).is_none());
        assert!(guard.reader().current_session(Some("")).is_none());
        assert_eq!(
            guard.require_auth(None),
            Access::Denied(Denial::Unauthenticated)
        );
    }

    #[test]
    fn test_corrupted_token_same_as_none() {
        let guard = create_guard();
        let (_, token) = staff_token(&guard);
        let corrupted = format!("{}x", token);

        assert!(guard.reader().current_session(Some(&corrupted)).is_none());
        assert_eq!(
            guard.require_auth(Some(&corrupted)),
            guard.require_auth(None)
        );
        assert_eq!(
            guard.require_permission(Some(&corrupted), "patients.read"),
            Access::Denied(Denial::Unauthenticated)
        );
    }

    #[test]
    fn test_token_from_other_secret_is_anonymous() {
        let guard = create_guard();
        let other = SessionCodec::new(&AuthConfig {
            session_secret: "Different_secret_value_0123456789abcdef".to_string(),
            ..AuthConfig::default()
        })
        .unwrap();
        let token = other
            .encode(&SessionClaims::new(Uuid::new_v4(), ["admin"], ["admin.manage"]))
            .unwrap();

        assert!(!guard.require_role(Some(&token), "admin").is_granted());
    }

    #[test]
    fn test_staff_denied_billing_write() {
        let guard = create_guard();
        let (_, token) = staff_token(&guard);

        let access = guard.require_permission(Some(&token), "billing.write");
        assert_eq!(
            access,
            Access::Denied(Denial::Forbidden(Requirement::Permission(
                "billing.write".to_string()
            )))
        );

        let Access::Denied(denial) = access else {
            panic!("expected denial");
        };
        assert_eq!(denial.redirect_path(), UNAUTHORIZED_PATH);
    }

    #[test]
    fn test_staff_granted_patients_read() {
        let guard = create_guard();
        let (claims, token) = staff_token(&guard);

        assert_eq!(
            guard.require_permission(Some(&token), "patients.read"),
            Access::Granted(claims)
        );
    }

    #[test]
    fn test_require_role() {
        let guard = create_guard();
        let (_, token) = staff_token(&guard);

        assert!(guard.require_role(Some(&token), "staff").is_granted());
        assert!(!guard.require_role(Some(&token), "admin").is_granted());
        assert!(!guard.require_role(None, "staff").is_granted());
    }

    #[test]
    fn test_empty_claims_denied_every_permission() {
        let guard = create_guard();
        let claims = SessionClaims::new(Uuid::new_v4(), Vec::<String>::new(), Vec::<String>::new());
        let token = guard.reader().codec().encode(&claims).unwrap();

        assert!(guard.require_auth(Some(&token)).is_granted());
        for key in ["patients.read", "billing.write", "admin.manage", ""] {
            let access = guard.require_permission(Some(&token), key);
            assert!(matches!(access, Access::Denied(Denial::Forbidden(_))));
        }
    }

    #[test]
    fn test_into_result() {
        let guard = create_guard();
        let (claims, token) = staff_token(&guard);

        assert_eq!(
            guard.require_auth(Some(&token)).into_result().unwrap(),
            claims
        );

        let err = guard.require_auth(None).into_result().unwrap_err();
        assert!(err.is_denial());
        let HealthOpsError::Denied(denial) = err else {
            panic!("expected denial");
        };
        assert_eq!(denial.redirect_path(), SIGN_IN_PATH);
    }
}
