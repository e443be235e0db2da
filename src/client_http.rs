// client_http.rs

use async_trait::async_trait;
use bytes::Bytes;
use http;
use log::{debug, error};
use reqwest::{Client as ReqwestClient, Method};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::constants::*;
use crate::endpoints;
use crate::error::SkillSyncError;
use crate::models::*;
use crate::requester::{RequestBody, Requester};
use crate::response_ext::ResponseExt;
use crate::session::Session;

type Result<T> = std::result::Result<T, SkillSyncError>;

/// HTTP-based requester implementation
pub struct RequesterHttp {
    base_url: String,
    client: ReqwestClient,
}

impl RequesterHttp {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;
        Ok(Self { base_url: base_url.trim_end_matches('/').to_string(), client })
    }

    async fn to_http_response(resp: reqwest::Response) -> Result<http::Response<Bytes>> {
        let (status, headers, body) = (resp.status(), resp.headers().clone(), resp.bytes().await?);

        let mut builder = http::Response::builder().status(status);
        *builder.headers_mut().unwrap() = headers;

        let http_resp = builder.body(body).expect("Building http::Response should not fail");
        Ok(http_resp)
    }
}

#[async_trait]
impl Requester for RequesterHttp {
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<RequestBody>,
        headers: Option<HashMap<String, String>>,
        token: Option<&str>,
        fail_on_error: bool,
    ) -> Result<http::Response<Bytes>> {
        let url = endpoints::resolve(&self.base_url, path);
        debug!("{} {}", method, url);

        let is_multipart = body.as_ref().map(RequestBody::is_multipart).unwrap_or(false);

        // Default headers; a multipart body must not carry an explicit
        // content type so the transport can set the form boundary.
        let mut all_headers: HashMap<String, String> = HashMap::new();
        if !is_multipart {
            all_headers.insert(HTTP_HEADER_CONTENT_TYPE.to_string(), CONTENT_TYPE_JSON.to_string());
        }
        all_headers.insert(HTTP_HEADER_KEY_USER_AGENT.to_string(), HTTP_USER_AGENT.to_string());

        // Caller-supplied headers override the defaults.
        if let Some(custom) = headers {
            all_headers.extend(custom);
        }

        // The token is attached last, exactly once.
        if let Some(token) = token {
            all_headers
                .insert(HTTP_HEADER_AUTHORIZATION.to_string(), format!("{}{}", HTTP_AUTH_TOKEN_PREFIX, token));
        }

        let mut req = self.client.request(method, &url);
        for (k, v) in all_headers {
            req = req.header(k, v);
        }

        match body {
            Some(RequestBody::Json(value)) => {
                req = req.body(serde_json::to_vec(&value)?);
            }
            Some(RequestBody::Multipart { field, file_name, content }) => {
                let part = reqwest::multipart::Part::bytes(content).file_name(file_name);
                req = req.multipart(reqwest::multipart::Form::new().part(field, part));
            }
            None => {}
        }

        let resp = req.send().await?;

        if fail_on_error && !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            error!("HTTP {} error: {}", status, text);
            return Err(SkillSyncError::RequestFailed { status, message: text });
        }

        Self::to_http_response(resp).await
    }
}

/// Main client for the SkillSync recruiting API.
///
/// Stateless per call: each request is fully described by its inputs plus the
/// session token read at call time. No retries, no caching.
pub struct SkillSyncClient {
    pub(crate) requester: Box<dyn Requester>,
    session: Arc<Session>,
    base_url: String,
}

impl std::fmt::Debug for SkillSyncClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SkillSyncClient")
            .field("base_url", &self.base_url)
            .field("requester", &"<dyn Requester>")
            .finish()
    }
}

impl SkillSyncClient {
    //
    // Client initialization
    //

    /// Create a client against the given base URL (falls back to the
    /// `SKILLSYNC_BASE_URL` environment variable, then the default origin).
    pub fn new(base_url: Option<String>, timeout: Option<Duration>) -> Result<Arc<Self>> {
        Self::with_session(base_url, timeout, Arc::new(Session::new()))
    }

    /// Create a client sharing an existing session.
    pub fn with_session(
        base_url: Option<String>,
        timeout: Option<Duration>,
        session: Arc<Session>,
    ) -> Result<Arc<Self>> {
        let base_url = base_url.unwrap_or_else(endpoints::base_url_from_env);
        let timeout = timeout.unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        let requester = RequesterHttp::new(base_url.clone(), timeout)?;

        Ok(Arc::new(Self { requester: Box::new(requester), session, base_url }))
    }

    /// Create a client with a custom requester (used by tests).
    pub fn with_requester(requester: Box<dyn Requester>, session: Arc<Session>, base_url: String) -> Arc<Self> {
        Arc::new(Self { requester, session, base_url })
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn token(&self) -> Option<String> {
        self.session.current_token()
    }

    /// Execute a raw request (useful for advanced use cases)
    pub async fn raw_request(
        &self,
        method: Method,
        path: &str,
        body: Option<RequestBody>,
        headers: Option<HashMap<String, String>>,
        fail_on_error: bool,
    ) -> Result<http::Response<Bytes>> {
        let token = self.token();
        self.requester.send(method, path, body, headers, token.as_deref(), fail_on_error).await
    }

    //
    // Authentication
    //

    /// Register a new HR account. Unauthenticated.
    pub async fn register(&self, request: &RegisterRequest) -> Result<()> {
        let body = RequestBody::Json(serde_json::to_value(request)?);
        self.requester.send(Method::POST, endpoints::HR_REGISTER, Some(body), None, None, true).await?;
        Ok(())
    }

    /// Login with username and password, storing the returned token in the
    /// session. A non-2xx response surfaces as `RequestFailed` carrying the
    /// exact status.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse> {
        let body = RequestBody::Json(serde_json::to_value(credentials)?);
        let resp = self.requester.send(Method::POST, endpoints::HR_LOGIN, Some(body), None, None, true).await?;

        let json: Value = resp.json()?;
        let token = json
            .get(BODY_KEY_ACCESS_TOKEN)
            .and_then(|v| v.as_str())
            .ok_or_else(|| SkillSyncError::AuthenticationFailed("Login response carried no token".to_string()))?;

        self.session.login(token);
        Ok(LoginResponse { token: token.to_string() })
    }

    /// Logout from the current session. The local token is cleared even when
    /// the server call fails; a stale token is worse than an unacknowledged
    /// logout.
    pub async fn logout(&self) -> Result<()> {
        let token = self.token();
        let result =
            self.requester.send(Method::POST, endpoints::HR_LOGOUT, None, None, token.as_deref(), true).await;

        self.session.logout();
        result.map(|_| ())
    }

    //
    // Candidates
    //

    /// List all candidates
    pub async fn list_candidates(&self) -> Result<Vec<Candidate>> {
        let token = self.token();
        let resp =
            self.requester.send(Method::GET, endpoints::CANDIDATES, None, None, token.as_deref(), true).await?;
        resp.json()
    }

    /// Add a candidate (e.g. from a reviewed LinkedIn profile)
    pub async fn create_candidate(&self, candidate: &NewCandidate) -> Result<Candidate> {
        let token = self.token();
        let body = RequestBody::Json(serde_json::to_value(candidate)?);
        let resp = self
            .requester
            .send(Method::POST, endpoints::CANDIDATES, Some(body), None, token.as_deref(), true)
            .await?;
        resp.json()
    }

    /// Get one candidate's details
    pub async fn get_candidate(&self, id: i64) -> Result<Candidate> {
        let token = self.token();
        let resp = self
            .requester
            .send(Method::GET, &endpoints::candidate_detail(id), None, None, token.as_deref(), true)
            .await?;
        resp.json()
    }

    /// Replace a candidate's mutable fields (PUT)
    pub async fn update_candidate(&self, id: i64, update: &CandidateUpdate) -> Result<Candidate> {
        let token = self.token();
        let body = RequestBody::Json(serde_json::to_value(update)?);
        let resp = self
            .requester
            .send(Method::PUT, &endpoints::candidate_detail(id), Some(body), None, token.as_deref(), true)
            .await?;
        resp.json()
    }

    /// Partially update a candidate (PATCH)
    pub async fn patch_candidate(&self, id: i64, update: &CandidateUpdate) -> Result<Candidate> {
        let token = self.token();
        let body = RequestBody::Json(serde_json::to_value(update)?);
        let resp = self
            .requester
            .send(Method::PATCH, &endpoints::candidate_detail(id), Some(body), None, token.as_deref(), true)
            .await?;
        resp.json()
    }

    /// Download a candidate's resume file as raw bytes
    pub async fn download_resume(&self, id: i64) -> Result<Bytes> {
        let token = self.token();
        let resp = self
            .requester
            .send(Method::GET, &endpoints::candidate_resume(id), None, None, token.as_deref(), true)
            .await?;
        Ok(resp.bytes())
    }

    /// Natural-language candidate search
    pub async fn search_candidates(&self, query: &str) -> Result<Vec<Candidate>> {
        let token = self.token();
        let body = RequestBody::Json(json!({ BODY_KEY_QUERY: query }));
        let resp = self
            .requester
            .send(Method::POST, endpoints::CANDIDATE_SEARCH, Some(body), None, token.as_deref(), true)
            .await?;
        resp.json()
    }

    /// AI-generated analysis of a candidate against a job description
    pub async fn analyze_candidate(&self, id: i64, job_description: &str) -> Result<CandidateAnalysis> {
        let token = self.token();
        let body = RequestBody::Json(json!({ BODY_KEY_JOB_DESCRIPTION: job_description }));
        let resp = self
            .requester
            .send(Method::POST, &endpoints::candidate_analysis(id), Some(body), None, token.as_deref(), true)
            .await?;
        resp.json()
    }

    //
    // Resume upload
    //

    /// Upload a resume as a multipart form. The endpoint reports
    /// application-level failure inside a 2xx body; check
    /// `UploadOutcome::success`.
    pub async fn upload_resume(&self, file_name: &str, content: Vec<u8>) -> Result<UploadOutcome> {
        let token = self.token();
        let body = RequestBody::Multipart {
            field: MULTIPART_FIELD_RESUME.to_string(),
            file_name: file_name.to_string(),
            content,
        };
        let resp = self
            .requester
            .send(Method::POST, endpoints::RESUME_UPLOAD, Some(body), None, token.as_deref(), true)
            .await?;
        resp.json()
    }

    //
    // LinkedIn
    //

    /// Search LinkedIn profiles by free-text query
    pub async fn linkedin_search(&self, query: &str) -> Result<Vec<LinkedInProfile>> {
        let token = self.token();
        let body = RequestBody::Json(json!({ BODY_KEY_QUERY: query }));
        let resp = self
            .requester
            .send(Method::POST, endpoints::LINKEDIN_SEARCH, Some(body), None, token.as_deref(), true)
            .await?;
        resp.json()
    }

    /// Fetch a full LinkedIn profile by URL
    pub async fn linkedin_profile(&self, linkedin_url: &str) -> Result<ScrapedProfile> {
        let token = self.token();
        let body = RequestBody::Json(json!({ BODY_KEY_LINKEDIN_URL: linkedin_url }));
        let resp = self
            .requester
            .send(Method::POST, endpoints::LINKEDIN_PROFILE, Some(body), None, token.as_deref(), true)
            .await?;
        resp.json()
    }

    //
    // Dashboard
    //

    /// Aggregate hiring-funnel counters for the dashboard
    pub async fn dashboard_stats(&self) -> Result<DashboardStats> {
        let token = self.token();
        let resp =
            self.requester.send(Method::GET, endpoints::DASHBOARD, None, None, token.as_deref(), true).await?;
        resp.json()
    }
}
