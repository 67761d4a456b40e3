//! HTTP flows through the full application over the relational store

#[cfg(test)]
mod tests {
    use crate::common::fixtures::{COOKIE, PASSWORD, SeededAuth, test_config};
    use actix_web::http::{StatusCode, header};
    use actix_web::{test, web};
    use healthops::server::AppState;
    use healthops::server::server::HttpServer;
    use healthops::storage::StorageLayer;

    struct Running {
        state: AppState,
        staff_email: String,
        admin_token: String,
        staff_token: String,
        staff_id: uuid::Uuid,
        staff_role_id: uuid::Uuid,
    }

    async fn running() -> Running {
        let config = test_config();
        let storage = StorageLayer::new(config.storage()).await.unwrap();
        storage.migrate().await.unwrap();

        let seeded = SeededAuth::over(storage.store()).await;
        let admin_token = seeded.token_for(&seeded.admin).await;
        let staff_token = seeded.token_for(&seeded.staff).await;

        Running {
            staff_email: seeded.staff.email.clone(),
            staff_id: seeded.staff.id,
            staff_role_id: seeded.staff_role.id,
            admin_token,
            staff_token,
            state: AppState::new(config, seeded.auth, storage),
        }
    }

    fn with_session(token: &str) -> (header::HeaderName, String) {
        (header::COOKIE, format!("{}={}", COOKIE, token))
    }

    #[actix_web::test]
    async fn test_signin_then_visit_protected_page() {
        let run = running().await;
        let app = test::init_service(HttpServer::create_app(web::Data::new(run.state))).await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/patients/42").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "/signin?callbackUrl=%2Fpatients%2F42"
        );

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/signin")
                .set_form([
                    ("email", run.staff_email.as_str()),
                    ("password", PASSWORD),
                    ("callbackUrl", "/patients"),
                ])
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        let token = resp
            .response()
            .cookies()
            .find(|c| c.name() == COOKIE)
            .map(|c| c.value().to_string())
            .expect("session cookie");

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/patients")
                .insert_header(with_session(&token))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["section"], "patients");
    }

    #[actix_web::test]
    async fn test_sign_in_page_keeps_safe_callback() {
        let run = running().await;
        let app = test::init_service(HttpServer::create_app(web::Data::new(run.state))).await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/signin?callbackUrl=%2Fbilling")
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        let html = String::from_utf8_lossy(&body);
        assert!(html.contains(r#"value="/billing""#));
    }

    #[actix_web::test]
    async fn test_admin_revokes_role_session_keeps_claims() {
        let run = running().await;
        let app = test::init_service(HttpServer::create_app(web::Data::new(run.state))).await;

        let resp = test::call_service(
            &app,
            test::TestRequest::delete()
                .uri(&format!(
                    "/admin/users/{}/roles/{}",
                    run.staff_id, run.staff_role_id
                ))
                .insert_header(with_session(&run.admin_token))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["removed"], true);

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/patients")
                .insert_header(with_session(&run.staff_token))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_admin_overview_lists_catalogue() {
        let run = running().await;
        let app = test::init_service(HttpServer::create_app(web::Data::new(run.state))).await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/admin")
                .insert_header(with_session(&run.admin_token))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["users"].as_array().unwrap().len(), 2);
        assert_eq!(body["data"]["roles"].as_array().unwrap().len(), 2);
        assert_eq!(body["data"]["permissions"].as_array().unwrap().len(), 9);
    }

    #[actix_web::test]
    async fn test_admin_creates_role_and_rejects_duplicate() {
        let run = running().await;
        let app = test::init_service(HttpServer::create_app(web::Data::new(run.state))).await;

        let create = || {
            test::TestRequest::post()
                .uri("/admin/roles")
                .insert_header(with_session(&run.admin_token))
                .set_json(serde_json::json!({
                    "name": "scheduler",
                    "permissionKeys": ["appointments.read", "appointments.write"],
                }))
                .to_request()
        };

        let resp = test::call_service(&app, create()).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let resp = test::call_service(&app, create()).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }

    #[actix_web::test]
    async fn test_health_reports_database() {
        let run = running().await;
        let app = test::init_service(HttpServer::create_app(web::Data::new(run.state))).await;

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
