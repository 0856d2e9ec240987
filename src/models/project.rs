use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A project owned by the current user.
///
/// Projects are the top-level unit of work, containing features. The
/// backend owns the canonical copy; the client only ever holds a
/// read-only snapshot fetched over the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub project_name: String,
    #[serde(default)]
    pub description: Option<String>,
}
