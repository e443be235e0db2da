// constants.rs

// HTTP headers
pub const HTTP_HEADER_AUTHORIZATION: &str = "Authorization";
pub const HTTP_HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const HTTP_HEADER_KEY_USER_AGENT: &str = "User-Agent";

// Header values
pub const HTTP_AUTH_TOKEN_PREFIX: &str = "Token ";
pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const HTTP_USER_AGENT: &str = concat!("skillsync-sdk/", env!("CARGO_PKG_VERSION"));

// Body keys
pub const BODY_KEY_QUERY: &str = "query";
pub const BODY_KEY_LINKEDIN_URL: &str = "linkedin_url";
pub const BODY_KEY_JOB_DESCRIPTION: &str = "job_description";
pub const BODY_KEY_ACCESS_TOKEN: &str = "token";

// Multipart form fields
pub const MULTIPART_FIELD_RESUME: &str = "resume";

// Client defaults
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
