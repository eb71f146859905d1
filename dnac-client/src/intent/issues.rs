//! Issues endpoint family
//!
//! Bindings for the assurance "Issues" operations: the global issue list
//! query and the per-issue enrichment lookup. Every record mirrors the
//! controller's JSON shape; all fields are optional because absence means
//! "not present in the source system".

use serde::{Deserialize, Serialize};

use crate::ClientResult;
use crate::http::{RestClient, RestResponse};

const ISSUES_PATH: &str = "/dna/intent/api/v1/issues";
const ISSUE_ENRICHMENT_PATH: &str = "/dna/intent/api/v1/issue-enrichment-details";

// ========== Query Vocabularies ==========

/// Issue priority classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    P1,
    P2,
    P3,
    P4,
}

/// Whether an issue was detected by automated analytics rather than
/// static thresholding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AiDriven {
    Yes,
    No,
}

/// Issue lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueStatus {
    Active,
    Ignored,
    Resolved,
}

/// Lookup key discriminator for enrichment queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    /// Look up by issue identifier
    IssueId,
    /// Look up by client MAC address
    MacAddress,
}

// ========== Query Parameters ==========

/// Query parameters for [`IssuesService::issues`].
///
/// All fields are optional; unset fields are omitted from the query string
/// entirely. The controller documents a precedence rule: when `mac_address`
/// or `device_id` is supplied, `priority`, `ai_driven` and `issue_status`
/// are ignored server-side. This client does not enforce that rule; it
/// passes through whatever the caller sets.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuesQueryParams {
    /// Starting epoch time in milliseconds of the query window
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<i64>,

    /// Ending epoch time in milliseconds of the query window
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<i64>,

    /// Assurance UUID of the site in the issue content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_id: Option<String>,

    /// Assurance UUID of the device in the issue content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,

    /// Client device MAC address (format xx:xx:xx:xx:xx:xx)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_driven: Option<AiDriven>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_status: Option<IssueStatus>,
}

/// Query parameters for [`IssuesService::get_issue_enrichment_details`].
///
/// Both fields are required by the API: the entity type selects whether the
/// lookup key is an issue id or a client MAC address, and the entity value
/// carries the key itself.
#[derive(Debug, Clone, Serialize)]
pub struct IssueEnrichmentQueryParams {
    pub entity_type: EntityType,
    pub entity_value: String,
}

// ========== Response Records ==========

/// A detected network or client problem recorded by the assurance platform
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impacted_hosts: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_description: Option<String>,
    /// Entity the issue is keyed on (issue id or client MAC)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_entity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_entity_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_priority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_severity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_summary: Option<String>,
    /// Epoch milliseconds of the issue occurrence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_timestamp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_actions: Option<Vec<SuggestedAction>>,
}

/// A suggested remediation for an issue
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Ordered remediation steps
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<String>>,
}

/// One-level wrapper around the enriched issue list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue: Option<Vec<Issue>>,
}

/// Response envelope of the enrichment lookup
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueEnrichmentDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_details: Option<IssueDetails>,
}

/// Condensed issue record returned by the list query.
///
/// The occurrence keys are snake_case (and misspelled) on the wire while
/// everything around them is camelCase; the renames below preserve the
/// controller's exact field names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_driven: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_mac: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_id: Option<String>,
    #[serde(
        rename = "issue_occurence_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub issue_occurence_count: Option<i64>,
    #[serde(rename = "last_occurence_time", skip_serializing_if = "Option::is_none")]
    pub last_occurence_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Response envelope of the issue list query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuesResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<Vec<IssueSummary>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

// ========== Service ==========

/// Service for the Issues endpoint family.
///
/// Holds a shared [`RestClient`]; every operation is a single stateless GET
/// mapped one-to-one to a controller endpoint.
#[derive(Debug, Clone)]
pub struct IssuesService {
    client: RestClient,
}

impl IssuesService {
    /// Create a new issues service on a shared REST client
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }

    /// Enrich a network issue context (an issue id or a client MAC address)
    /// with details about the issue(s), impacted hosts and suggested
    /// remediation actions.
    pub async fn get_issue_enrichment_details(
        &self,
        query: &IssueEnrichmentQueryParams,
    ) -> ClientResult<RestResponse<IssueEnrichmentDetails>> {
        self.client
            .get_with_query(ISSUE_ENRICHMENT_PATH, Some(query))
            .await
    }

    /// Get a list of global issues, issues for a specific device, or issues
    /// for a specific client device's MAC address.
    pub async fn issues(
        &self,
        query: &IssuesQueryParams,
    ) -> ClientResult<RestResponse<IssuesResponse>> {
        self.client.get_with_query(ISSUES_PATH, Some(query)).await
    }
}
