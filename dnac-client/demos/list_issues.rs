//! List active P1 issues from a DNA Center controller.
//!
//! ```sh
//! DNAC_BASE_URL=https://sandboxdnac.cisco.com DNAC_TOKEN=... \
//!     cargo run --example list_issues
//! ```

use dnac_client::intent::issues::{IssueStatus, IssuesQueryParams, Priority};
use dnac_client::{ClientConfig, IssuesService};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let base_url =
        std::env::var("DNAC_BASE_URL").unwrap_or_else(|_| "https://localhost".to_string());
    let mut config = ClientConfig::new(base_url);
    if let Ok(token) = std::env::var("DNAC_TOKEN") {
        config = config.with_token(token);
    }

    let service = IssuesService::new(config.build_rest_client());

    let params = IssuesQueryParams {
        priority: Some(Priority::P1),
        issue_status: Some(IssueStatus::Active),
        ..Default::default()
    };
    let response = service.issues(&params).await?;

    println!(
        "{} active P1 issues (API version {})",
        response.body.total_count.unwrap_or(0),
        response.body.version.as_deref().unwrap_or("unknown"),
    );
    for summary in response.body.response.unwrap_or_default() {
        println!(
            "  [{}] {} ({})",
            summary.priority.as_deref().unwrap_or("-"),
            summary.name.as_deref().unwrap_or("unnamed"),
            summary.issue_id.as_deref().unwrap_or("no id"),
        );
    }

    Ok(())
}
