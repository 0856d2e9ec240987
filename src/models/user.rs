use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The authenticated account, as returned by `GET current-user`.
///
/// Team members hang off the user rather than any project: they are the
/// people associated with the account, assignable to features in every
/// project the user owns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub user_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub team_members: Vec<TeamMember>,
}

/// A person on the current user's team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
}
