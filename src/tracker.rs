//! Client for the external task tracker's GraphQL API (Linear-compatible).
//!
//! Two queries: the full user roster (input to the identity resolver) and
//! the open issues assigned to one user. Issue priority and workflow-state
//! types are mapped to our own label sets; those strings are shown in the
//! CLI and stored by hosts, so they are part of the outward contract.

use crate::config::TrackerSettings;
use crate::error::{PulseError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;
use url::Url;

const REQUEST_TIMEOUT_SECS: u64 = 10;

const USERS_QUERY: &str = r#"{
  users {
    nodes {
      id
      displayName
      name
      email
      active
    }
  }
}"#;

const ISSUES_BY_USER_QUERY: &str = r#"
query UserIssues($userId: ID!) {
  issues(
    filter: {
      assignee: { id: { eq: $userId } }
      state: { type: { nin: ["completed", "canceled"] } }
    }
    first: 25
    orderBy: updatedAt
  ) {
    nodes {
      id
      identifier
      title
      priority
      dueDate
      url
      createdAt
      updatedAt
      state { name type color }
      labels { nodes { name color } }
      project { name color }
    }
  }
}"#;

/// A user record owned by the external tracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerUser {
    pub id: String,
    #[serde(default)]
    pub display_name: String,
    /// Login/account name, distinct from the display name.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub active: bool,
}

/// One open work item, flattened to the shape the rest of the tool uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerTask {
    pub id: String,
    pub identifier: String,
    pub title: String,
    pub status: String,
    pub status_name: String,
    pub status_color: String,
    pub priority: String,
    pub due_date: Option<String>,
    pub url: String,
    pub label: String,
    pub label_color: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Tracker priority integers → our labels.
pub fn priority_label(priority: i64) -> &'static str {
    match priority {
        1 => "urgent",
        2 => "high",
        3 => "medium",
        4 => "low",
        _ => "none",
    }
}

/// Tracker workflow-state types → our status labels.
pub fn state_type_label(state_type: &str) -> &'static str {
    match state_type {
        "triage" => "triage",
        "backlog" => "backlog",
        "unstarted" => "todo",
        "started" => "in_progress",
        "completed" => "done",
        "canceled" => "canceled",
        _ => "todo",
    }
}

#[derive(Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    variables: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct GraphqlResponse<T> {
    data: Option<T>,
}

#[derive(Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct Nodes<T> {
    #[serde(default)]
    nodes: Vec<T>,
}

#[derive(Deserialize)]
struct UsersData {
    users: Nodes<TrackerUser>,
}

#[derive(Deserialize)]
struct IssuesData {
    issues: Nodes<IssueNode>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IssueNode {
    id: String,
    identifier: String,
    title: String,
    /// The tracker reports priority as a Float (0.0 through 4.0).
    #[serde(default)]
    priority: f64,
    due_date: Option<String>,
    url: String,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
    state: Option<IssueState>,
    #[serde(default)]
    labels: Option<Nodes<NamedColor>>,
    project: Option<NamedColor>,
}

#[derive(Deserialize)]
struct IssueState {
    name: String,
    #[serde(rename = "type")]
    state_type: String,
    color: String,
}

#[derive(Deserialize)]
struct NamedColor {
    name: String,
    color: String,
}

const FALLBACK_COLOR: &str = "#9CA3AF";

impl IssueNode {
    fn into_task(self) -> TrackerTask {
        let (status, status_name, status_color) = match self.state {
            Some(state) => (
                state_type_label(&state.state_type).to_string(),
                state.name,
                state.color,
            ),
            None => (
                "todo".to_string(),
                "Unknown".to_string(),
                FALLBACK_COLOR.to_string(),
            ),
        };

        let first_label = self.labels.and_then(|l| l.nodes.into_iter().next());
        let (label, label_color) = match (first_label, self.project) {
            (Some(l), _) => (l.name, l.color),
            (None, Some(p)) => (p.name, p.color),
            (None, None) => (String::new(), FALLBACK_COLOR.to_string()),
        };

        TrackerTask {
            id: self.id,
            identifier: self.identifier,
            title: self.title,
            status,
            status_name,
            status_color,
            priority: priority_label(self.priority as i64).to_string(),
            due_date: self.due_date,
            url: self.url,
            label,
            label_color,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

pub struct TrackerClient {
    client: reqwest::blocking::Client,
    api_url: Url,
    api_key: String,
}

impl TrackerClient {
    pub fn new(api_key: String, settings: &TrackerSettings) -> Result<Self> {
        let api_url = Url::parse(&settings.api_url)
            .map_err(|e| PulseError::Config(format!("Invalid tracker API URL: {}", e)))?;
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            api_url,
            api_key,
        })
    }

    fn post<T: serde::de::DeserializeOwned>(
        &self,
        query: &str,
        variables: Option<serde_json::Value>,
    ) -> Result<T> {
        let response = self
            .client
            .post(self.api_url.clone())
            .header("Authorization", &self.api_key)
            .json(&GraphqlRequest { query, variables })
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(PulseError::Tracker {
                status: status.as_u16(),
                message: response.text().unwrap_or_default(),
            });
        }

        let envelope: GraphqlResponse<T> = response.json()?;
        envelope.data.ok_or_else(|| PulseError::Tracker {
            status: status.as_u16(),
            message: "GraphQL response had no data".to_string(),
        })
    }

    /// Fetch the full user roster.
    pub fn fetch_users(&self) -> Result<Vec<TrackerUser>> {
        let data: UsersData = self.post(USERS_QUERY, None)?;
        debug!(count = data.users.nodes.len(), "fetched tracker users");
        Ok(data.users.nodes)
    }

    /// Fetch the open work items assigned to one user.
    pub fn fetch_user_tasks(&self, user_id: &str) -> Result<Vec<TrackerTask>> {
        let variables = serde_json::json!({ "userId": user_id });
        let data: IssuesData = self.post(ISSUES_BY_USER_QUERY, Some(variables))?;
        Ok(data.issues.nodes.into_iter().map(IssueNode::into_task).collect())
    }
}
