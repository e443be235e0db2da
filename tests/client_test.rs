// client_test.rs

#[cfg(test)]
mod tests {
    use mockito::{Matcher, Server, ServerGuard};
    use reqwest::{Method, StatusCode};
    use serde_json::json;
    use skillsync_sdk::{
        CandidateStatus, CandidateUpdate, ClientBuilder, Credentials, RegisterRequest, SkillSyncClient,
        SkillSyncError,
    };
    use std::collections::HashMap;
    use std::sync::Arc;

    fn create_test_client(server: &ServerGuard) -> Arc<SkillSyncClient> {
        ClientBuilder::new().base_url(server.url()).build().unwrap()
    }

    fn create_authed_client(server: &ServerGuard, token: &str) -> Arc<SkillSyncClient> {
        ClientBuilder::new().base_url(server.url()).token(token).build().unwrap()
    }

    #[tokio::test]
    async fn test_login_stores_token() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/skillsync/hr/login/")
            .match_header("Content-Type", "application/json")
            .match_body(Matcher::Json(json!({"username": "a", "password": "b"})))
            .with_status(200)
            .with_body(r#"{"token": "tok123"}"#)
            .create_async()
            .await;

        let client = create_test_client(&server);
        let credentials = Credentials { username: "a".to_string(), password: "b".to_string() };
        let login = client.login(&credentials).await.unwrap();

        assert_eq!(login.token, "tok123");
        assert_eq!(client.session().current_token().as_deref(), Some("tok123"));
    }

    #[tokio::test]
    async fn test_login_unauthorized_carries_status() {
        let mut server = Server::new_async().await;
        server.mock("POST", "/skillsync/hr/login/").with_status(401).create_async().await;

        let client = create_test_client(&server);
        let credentials = Credentials { username: "a".to_string(), password: "b".to_string() };
        let err = client.login(&credentials).await.unwrap_err();

        assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));
        assert!(!client.session().is_authenticated());
    }

    #[tokio::test]
    async fn test_login_without_token_in_body_fails() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/skillsync/hr/login/")
            .with_status(200)
            .with_body(r#"{"detail": "ok"}"#)
            .create_async()
            .await;

        let client = create_test_client(&server);
        let credentials = Credentials { username: "a".to_string(), password: "b".to_string() };
        let err = client.login(&credentials).await.unwrap_err();

        assert!(matches!(err, SkillSyncError::AuthenticationFailed(_)));
    }

    #[tokio::test]
    async fn test_register() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/skillsync/hr/register/")
            .match_body(Matcher::PartialJson(json!({"username": "hr1", "email": "hr1@corp.dev"})))
            .with_status(201)
            .with_body("{}")
            .create_async()
            .await;

        let client = create_test_client(&server);
        let request = RegisterRequest {
            username: "hr1".to_string(),
            email: "hr1@corp.dev".to_string(),
            password: "secret".to_string(),
            company: None,
        };
        client.register(&request).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_logout_clears_session_even_on_server_error() {
        let mut server = Server::new_async().await;
        server.mock("POST", "/skillsync/hr/logout/").with_status(500).create_async().await;

        let client = create_authed_client(&server, "tok123");
        let result = client.logout().await;

        assert!(result.is_err());
        assert!(!client.session().is_authenticated());
    }

    #[tokio::test]
    async fn test_list_candidates_sends_token_header() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/skillsync/candidates/")
            .match_header("Authorization", "Token tok123")
            .with_status(200)
            .with_body(
                r#"[{"id":1,"name":"Ada","email":"ada@corp.dev","status":"APPLIED","skills":["rust"],"applied_on":"2026-08-01"},
                    {"id":2,"name":"Grace","status":"INTERVIEW"}]"#,
            )
            .create_async()
            .await;

        let client = create_authed_client(&server, "tok123");
        let candidates = client.list_candidates().await.unwrap();

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].name, "Ada");
        assert_eq!(candidates[0].status, CandidateStatus::Applied);
        assert_eq!(candidates[1].skills.len(), 0);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_candidate_detail() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/skillsync/candidates/42/")
            .with_status(200)
            .with_body(r#"{"id":42,"name":"Ada","status":"SELECTED"}"#)
            .create_async()
            .await;

        let client = create_authed_client(&server, "tok123");
        let candidate = client.get_candidate(42).await.unwrap();

        assert_eq!(candidate.id, 42);
        assert_eq!(candidate.name, "Ada");
    }

    #[tokio::test]
    async fn test_update_candidate_omits_unset_fields() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("PUT", "/skillsync/candidates/42/")
            .match_body(Matcher::Json(json!({"status": "INTERVIEW"})))
            .with_status(200)
            .with_body(r#"{"id":42,"name":"Ada","status":"INTERVIEW"}"#)
            .create_async()
            .await;

        let client = create_authed_client(&server, "tok123");
        let update = CandidateUpdate { status: Some(CandidateStatus::Interview), notes: None };
        let candidate = client.update_candidate(42, &update).await.unwrap();

        assert_eq!(candidate.status, CandidateStatus::Interview);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_patch_candidate_with_notes() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("PATCH", "/skillsync/candidates/7/")
            .match_body(Matcher::Json(json!({"status": "REJECTED", "notes": "not a fit"})))
            .with_status(200)
            .with_body(r#"{"id":7,"name":"Bob","status":"REJECTED","notes":"not a fit"}"#)
            .create_async()
            .await;

        let client = create_authed_client(&server, "tok123");
        let update =
            CandidateUpdate { status: Some(CandidateStatus::Rejected), notes: Some("not a fit".to_string()) };
        client.patch_candidate(7, &update).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_download_resume_returns_raw_bytes() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/skillsync/candidates/42/resume/")
            .with_status(200)
            .with_header("Content-Type", "application/pdf")
            .with_body(&b"%PDF-1.7 fake"[..])
            .create_async()
            .await;

        let client = create_authed_client(&server, "tok123");
        let bytes = client.download_resume(42).await.unwrap();

        assert!(bytes.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn test_search_candidates() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/skillsync/candidates/search/")
            .match_body(Matcher::Json(json!({"query": "senior rust engineer"})))
            .with_status(200)
            .with_body(r#"[{"id":3,"name":"Lin","status":"PENDING","skills":["rust","tokio"]}]"#)
            .create_async()
            .await;

        let client = create_authed_client(&server, "tok123");
        let hits = client.search_candidates("senior rust engineer").await.unwrap();

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].status, CandidateStatus::Pending);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_analyze_candidate() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/skillsync/candidates/3/analyze/")
            .match_body(Matcher::Json(json!({"job_description": "Backend role"})))
            .with_status(200)
            .with_body(r#"{"match_score":0.9,"summary":"Strong fit","strengths":["rust"],"gaps":[]}"#)
            .create_async()
            .await;

        let client = create_authed_client(&server, "tok123");
        let analysis = client.analyze_candidate(3, "Backend role").await.unwrap();

        assert_eq!(analysis.match_score, Some(0.9));
        assert_eq!(analysis.strengths, vec!["rust".to_string()]);
    }

    #[tokio::test]
    async fn test_upload_resume_sends_multipart_without_json_content_type() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/skillsync/resume/upload/")
            .match_header("Authorization", "Token tok123")
            .match_header("Content-Type", Matcher::Regex("^multipart/form-data".to_string()))
            .with_status(200)
            .with_body(r#"{"success": true, "candidate_id": 99}"#)
            .create_async()
            .await;

        let client = create_authed_client(&server, "tok123");
        let outcome = client.upload_resume("resume.pdf", b"%PDF-1.7 fake".to_vec()).await.unwrap();

        assert!(outcome.success);
        assert_eq!(outcome.candidate_id, Some(99));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_upload_resume_application_level_failure_is_2xx() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/skillsync/resume/upload/")
            .with_status(200)
            .with_body(r#"{"success": false, "error": "unreadable file"}"#)
            .create_async()
            .await;

        let client = create_authed_client(&server, "tok123");
        let outcome = client.upload_resume("resume.pdf", vec![0u8; 4]).await.unwrap();

        assert!(!outcome.success);
        assert_eq!(outcome.error.as_deref(), Some("unreadable file"));
    }

    #[tokio::test]
    async fn test_linkedin_search_and_profile() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/skillsync/linkedin/search/")
            .match_body(Matcher::Json(json!({"query": "rust berlin"})))
            .with_status(200)
            .with_body(
                r#"[{"name":"Ada","linkedin_url":"https://linkedin.com/in/ada","headline":"Engineer","location":"Berlin"}]"#,
            )
            .create_async()
            .await;
        server
            .mock("POST", "/skillsync/linkedin/profile/")
            .match_body(Matcher::Json(json!({"linkedin_url": "https://linkedin.com/in/ada"})))
            .with_status(200)
            .with_body(r#"{"name":"Ada","headline":"Engineer","skills":["rust"],"experience":"10y","education":"TU"}"#)
            .create_async()
            .await;

        let client = create_authed_client(&server, "tok123");
        let hits = client.linkedin_search("rust berlin").await.unwrap();
        assert_eq!(hits.len(), 1);

        let profile = client.linkedin_profile(&hits[0].linkedin_url).await.unwrap();
        assert_eq!(profile.name, "Ada");
        assert_eq!(profile.skills, vec!["rust".to_string()]);
    }

    #[tokio::test]
    async fn test_dashboard_stats() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/skillsync/dashboard/")
            .with_status(200)
            .with_body(r#"{"total_candidates":10,"selected":2,"interview":3,"rejected":1,"pending":4}"#)
            .create_async()
            .await;

        let client = create_authed_client(&server, "tok123");
        let stats = client.dashboard_stats().await.unwrap();

        assert_eq!(stats.total_candidates, 10);
        assert_eq!(stats.pending, 4);
    }

    #[tokio::test]
    async fn test_server_error_carries_exact_status() {
        let mut server = Server::new_async().await;
        server.mock("GET", "/skillsync/dashboard/").with_status(503).with_body("down").create_async().await;

        let client = create_authed_client(&server, "tok123");
        let err = client.dashboard_stats().await.unwrap_err();

        match err {
            SkillSyncError::RequestFailed { status, message } => {
                assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
                assert_eq!(message, "down");
            }
            other => panic!("expected RequestFailed, got {other}"),
        }
    }

    #[tokio::test]
    async fn test_connection_failure_is_distinct_from_http_error() {
        // Nothing listens on this port.
        let client = ClientBuilder::new().base_url("http://127.0.0.1:9").timeout_secs(2).build().unwrap();
        let err = client.dashboard_stats().await.unwrap_err();

        assert!(matches!(err, SkillSyncError::ConnectionError(_)));
        assert_eq!(err.status(), None);
    }

    #[tokio::test]
    async fn test_custom_headers_do_not_duplicate_token() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/skillsync/candidates/")
            .match_header("Authorization", "Token tok123")
            .match_header("X-Request-Id", "req-1")
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let client = create_authed_client(&server, "tok123");
        let mut headers = HashMap::new();
        headers.insert("X-Request-Id".to_string(), "req-1".to_string());
        // A stale caller-supplied Authorization must not survive next to the
        // session token.
        headers.insert("Authorization".to_string(), "Token stale".to_string());

        let resp = client
            .raw_request(Method::GET, "/skillsync/candidates/", None, Some(headers), true)
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_unauthenticated_request_sends_no_authorization_header() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/skillsync/candidates/")
            .match_header("Authorization", Matcher::Missing)
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let client = create_test_client(&server);
        let candidates = client.list_candidates().await.unwrap();

        assert!(candidates.is_empty());
        mock.assert_async().await;
    }
}
