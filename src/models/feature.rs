use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{CreateTaskInput, Task};

/// A decomposable unit of a project.
///
/// A feature belongs to exactly one project and carries zero or more
/// tasks. Team members can be assigned to a feature; assignments are
/// stored as member IDs resolved against the roster on the current user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    pub id: Uuid,
    pub project_id: Uuid,
    pub feature_name: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub assignees: Vec<Uuid>,
}

/// Input for creating a new feature.
///
/// The creation endpoint is flat (`POST /features`), so the target
/// project rides in the body rather than the path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFeatureInput {
    pub project_id: Uuid,
    pub feature_name: String,
    /// Tasks to create inside the feature, in order.
    #[serde(default)]
    pub tasks: Vec<CreateTaskInput>,
    /// Team member IDs to assign.
    #[serde(default)]
    pub assignees: Vec<Uuid>,
}
