//! Test fixtures
//!
//! Builds an auth system over a real store with the permission catalogue
//! seeded and one user per default role.

use super::database::TestDatabase;
use healthops::auth::rbac::roles::{ADMIN_ROLE, STAFF_ROLE};
use healthops::config::{AuthConfig, Config};
use healthops::core::models::{Role, User};
use healthops::core::traits::AuthStore;
use healthops::AuthSystem;
use std::sync::Arc;
use uuid::Uuid;

pub const PASSWORD: &str = "correct-horse-battery";
pub const SECRET: &str = "integration_Tests_secret_0123456789_abcdef";
pub const COOKIE: &str = "healthops.session";

pub fn test_config() -> Config {
    let mut config = Config::default();
    config.app.auth = AuthConfig {
        session_secret: SECRET.to_string(),
        session_max_age: 3600,
        session_update_age: 600,
        cookie_name: COOKIE.to_string(),
        ..AuthConfig::default()
    };
    config.app.storage.database = TestDatabase::config();
    config
}

pub fn unique_email(prefix: &str) -> String {
    format!("{}-{}@healthops.local", prefix, &Uuid::new_v4().to_string()[..8])
}

/// Auth system with an admin and a staff member
pub struct SeededAuth {
    pub auth: AuthSystem,
    pub store: Arc<dyn AuthStore>,
    pub admin: User,
    pub staff: User,
    pub staff_role: Role,
    pub admin_role: Role,
}

impl SeededAuth {
    pub async fn over(store: Arc<dyn AuthStore>) -> Self {
        let config = test_config();
        let auth = AuthSystem::new(config.auth(), store.clone()).expect("auth system");
        auth.rbac().ensure_catalog().await.expect("catalog");

        let admin_role = role(&store, ADMIN_ROLE).await;
        let staff_role = role(&store, STAFF_ROLE).await;

        let admin = auth
            .create_user("Ada Admin", &unique_email("admin"), PASSWORD)
            .await
            .expect("admin user");
        let staff = auth
            .create_user("Sam Staff", &unique_email("staff"), PASSWORD)
            .await
            .expect("staff user");
        auth.grant_role(admin.id, admin_role.id).await.expect("grant admin");
        auth.grant_role(staff.id, staff_role.id).await.expect("grant staff");

        Self {
            auth,
            store,
            admin,
            staff,
            staff_role,
            admin_role,
        }
    }

    pub async fn token_for(&self, user: &User) -> String {
        self.auth
            .sign_in(&user.email, PASSWORD)
            .await
            .expect("sign in")
            .token
    }
}

async fn role(store: &Arc<dyn AuthStore>, name: &str) -> Role {
    store
        .find_role_by_name(name)
        .await
        .expect("role lookup")
        .unwrap_or_else(|| panic!("role {} not seeded", name))
}
