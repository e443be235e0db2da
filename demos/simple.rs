//! Example of using the SkillSync SDK
use skillsync_sdk::{ClientBuilder, Credentials};
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Enable logging
    env_logger::init();

    // Initialize client (honors SKILLSYNC_BASE_URL)
    let client = ClientBuilder::from_env().timeout_secs(30).build()?;

    // Login
    let credentials = Credentials { username: "hr@corp.dev".to_string(), password: "secret".to_string() };
    client.login(&credentials).await?;

    // Hiring funnel overview
    let stats = client.dashboard_stats().await?;
    println!("Dashboard: \n{:#?}", stats);

    // List candidates
    let candidates = client.list_candidates().await?;
    println!("Current candidates: \n{:#?}", candidates);

    // Natural-language search
    let hits = client.search_candidates("senior rust engineer, Berlin").await?;
    println!("Search hits: \n{:#?}", hits);

    // Analyze the first hit against a job description
    if let Some(candidate) = hits.first() {
        let analysis = client.analyze_candidate(candidate.id, "Backend engineer, Rust + Postgres").await?;
        println!("Analysis: \n{:#?}", analysis);
    }

    client.logout().await?;

    Ok(())
}
