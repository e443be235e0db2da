// models.rs
use serde::{Deserialize, Serialize};

/// Review pipeline status for a candidate. Wire values are the server's
/// uppercase strings; `pending` had a lowercase spelling in some older
/// payloads, kept as an alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandidateStatus {
    #[serde(rename = "APPLIED", alias = "applied")]
    Applied,
    #[serde(rename = "INTERVIEW", alias = "interview")]
    Interview,
    #[serde(rename = "SELECTED", alias = "selected")]
    Selected,
    #[serde(rename = "REJECTED", alias = "rejected")]
    Rejected,
    #[serde(rename = "PENDING", alias = "pending")]
    Pending,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub role: Option<String>,
    pub status: CandidateStatus,
    #[serde(default)]
    pub skills: Vec<String>,
    pub experience: Option<String>,
    pub education: Option<String>,
    pub linkedin_url: Option<String>,
    pub applied_on: Option<String>,
    pub notes: Option<String>,
}

/// Payload for creating a candidate from a reviewed LinkedIn profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCandidate {
    pub name: String,
    pub role: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub experience: Option<String>,
    pub education: Option<String>,
    pub linkedin_url: Option<String>,
    pub status: CandidateStatus,
}

/// Partial update for PUT/PATCH on a candidate. `None` fields are omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CandidateStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_candidates: i64,
    pub selected: i64,
    pub interview: i64,
    pub rejected: i64,
    pub pending: i64,
}

/// LinkedIn search hit (listing row, pre-scrape).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkedInProfile {
    pub name: String,
    pub linkedin_url: String,
    pub headline: Option<String>,
    pub location: Option<String>,
}

/// Full profile returned by the remote scrape/lookup endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapedProfile {
    pub name: String,
    pub headline: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub experience: Option<String>,
    pub education: Option<String>,
    pub linkedin_url: Option<String>,
}

/// AI-generated candidate analysis. The generator's output schema is owned by
/// the server; fields beyond the stable core are kept in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateAnalysis {
    pub match_score: Option<f64>,
    pub summary: Option<String>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub gaps: Vec<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Resume upload result. The endpoint reports application-level failure
/// inside a 2xx body, so `success` must be checked by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadOutcome {
    pub success: bool,
    #[serde(default)]
    pub candidate_id: Option<i64>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}
