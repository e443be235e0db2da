// lib.rs
//! SkillSync SDK for Rust

mod client_builder;
mod client_http;
mod constants;
mod error;
mod models;
mod requester;
mod response_ext;
mod review;
mod session;

pub mod endpoints;

pub use client_builder::ClientBuilder;
pub use client_http::{RequesterHttp, SkillSyncClient};
pub use error::SkillSyncError;
pub use models::{
    Candidate, CandidateAnalysis, CandidateStatus, CandidateUpdate, Credentials, DashboardStats, LinkedInProfile,
    LoginResponse, NewCandidate, RegisterRequest, ScrapedProfile, UploadOutcome,
};
pub use requester::{RequestBody, Requester};
pub use response_ext::ResponseExt;
pub use review::ReviewStage;
pub use session::Session;
