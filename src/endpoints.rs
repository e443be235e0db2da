// endpoints.rs
//! Single source of truth for the SkillSync REST surface.
//!
//! Fixed operations are path constants; resource-scoped operations are
//! functions interpolating the candidate id verbatim (the server expects the
//! raw numeric id, no extra escaping). Resolution against the base origin is
//! pure string concatenation.

// Authentication
pub const HR_REGISTER: &str = "/skillsync/hr/register/";
pub const HR_LOGIN: &str = "/skillsync/hr/login/";
pub const HR_LOGOUT: &str = "/skillsync/hr/logout/";

// Candidates
pub const CANDIDATES: &str = "/skillsync/candidates/";
pub const CANDIDATE_SEARCH: &str = "/skillsync/candidates/search/";

// Resume upload
pub const RESUME_UPLOAD: &str = "/skillsync/resume/upload/";

// LinkedIn
pub const LINKEDIN_SEARCH: &str = "/skillsync/linkedin/search/";
pub const LINKEDIN_PROFILE: &str = "/skillsync/linkedin/profile/";

// Dashboard
pub const DASHBOARD: &str = "/skillsync/dashboard/";

/// Detail path for one candidate (GET/PUT/PATCH).
pub fn candidate_detail(id: i64) -> String {
    format!("/skillsync/candidates/{}/", id)
}

/// Resume download path for one candidate.
pub fn candidate_resume(id: i64) -> String {
    format!("/skillsync/candidates/{}/resume/", id)
}

/// AI analysis path for one candidate.
pub fn candidate_analysis(id: i64) -> String {
    format!("/skillsync/candidates/{}/analyze/", id)
}

/// Fallback origin when neither configuration nor environment provides one.
pub const DEFAULT_BASE_URL: &str = "https://api.skillsync.dev";

/// Environment variable overriding the default base origin.
pub const BASE_URL_ENV: &str = "SKILLSYNC_BASE_URL";

/// Base origin from the environment, else the hard-coded default.
pub fn base_url_from_env() -> String {
    std::env::var(BASE_URL_ENV)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

/// Full URL for an endpoint path. A trailing slash on the origin is stripped
/// so `resolve` composes the same way regardless of how the origin was given.
pub fn resolve(base_url: &str, endpoint: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), endpoint)
}
