//! Reading the current workflow run's metadata from the environment.
use std::env;

use serde::Serialize;

#[cfg(feature = "event-payload")]
use crate::ToolkitError;
#[cfg(feature = "event-payload")]
use std::fs;

/// The JSON object of the webhook event that triggered the workflow.
#[cfg(feature = "event-payload")]
#[cfg_attr(docsrs, doc(cfg(feature = "event-payload")))]
pub type EventPayload = serde_json::Map<String, serde_json::Value>;

/// Information about the current action's environment, runtime and the event
/// which triggered the workflow.
///
/// Every field is read from an environment variable of the runner host.
/// An absent variable yields an empty string.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata {
    /// `GITHUB_ACTION`
    pub action: String,
    /// `GITHUB_ACTOR`
    pub actor: String,
    /// `GITHUB_BASE_REF`
    pub base_ref: String,
    /// `GITHUB_EVENT_NAME`
    pub event_name: String,
    /// `GITHUB_EVENT_PATH`
    pub event_path: String,
    /// `GITHUB_HEAD_REF`
    pub head_ref: String,
    /// `GITHUB_REF`
    pub git_ref: String,
    /// `GITHUB_REPOSITORY`
    pub repository: String,
    /// `RUNNER_OS`
    pub runner_os: String,
    /// `GITHUB_SHA`
    pub sha: String,
    /// `GITHUB_WORKFLOW`
    pub workflow: String,
    /// `GITHUB_WORKSPACE`
    pub workspace: String,
}

fn var_or_empty(name: &str) -> String {
    env::var(name).unwrap_or_default()
}

impl Metadata {
    /// Take a snapshot of the current run's metadata.
    ///
    /// This is not cached; every call reads the environment again.
    pub fn from_env() -> Self {
        Self {
            action: var_or_empty("GITHUB_ACTION"),
            actor: var_or_empty("GITHUB_ACTOR"),
            base_ref: var_or_empty("GITHUB_BASE_REF"),
            event_name: var_or_empty("GITHUB_EVENT_NAME"),
            event_path: var_or_empty("GITHUB_EVENT_PATH"),
            head_ref: var_or_empty("GITHUB_HEAD_REF"),
            git_ref: var_or_empty("GITHUB_REF"),
            repository: var_or_empty("GITHUB_REPOSITORY"),
            runner_os: var_or_empty("RUNNER_OS"),
            sha: var_or_empty("GITHUB_SHA"),
            workflow: var_or_empty("GITHUB_WORKFLOW"),
            workspace: var_or_empty("GITHUB_WORKSPACE"),
        }
    }

    /// Is the current CI event **trigger** a Pull Request?
    ///
    /// This **will not** check if a push event's instigating commit is part of any PR.
    pub fn is_pull_request(&self) -> bool {
        matches!(
            self.event_name.as_str(),
            "pull_request" | "pull_request_target"
        )
    }

    /// Read and deserialize the webhook event payload found at [`Self::event_path`].
    #[cfg(feature = "event-payload")]
    #[cfg_attr(docsrs, doc(cfg(feature = "event-payload")))]
    pub fn event_payload(&self) -> Result<EventPayload, ToolkitError> {
        // event payload JSON file can be overwritten/removed in CI runners
        let file_buf = fs::read_to_string(&self.event_path).map_err(|e| {
            ToolkitError::io(
                format!("read event payload from '{}'", self.event_path).as_str(),
                e,
            )
        })?;
        serde_json::from_str::<EventPayload>(&file_buf)
            .map_err(|e| ToolkitError::json("deserialize event payload", e))
    }
}

/// Retrieve the current action run's metadata.
pub fn get_metadata() -> Metadata {
    Metadata::from_env()
}

/// Is step debugging enabled for this run?
///
/// The runner host sets `RUNNER_DEBUG=1` when debug logging was requested.
pub fn is_debug() -> bool {
    env::var("RUNNER_DEBUG").is_ok_and(|val| val == "1")
}
