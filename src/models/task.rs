use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The smallest unit of work within a feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub task_name: String,
    /// Team member responsible for the task, if anyone.
    #[serde(default)]
    pub assigned_to: Option<Uuid>,
}

/// Input for creating a task inline with a new feature.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskInput {
    pub task_name: String,
    #[serde(default)]
    pub assigned_to: Option<Uuid>,
}
