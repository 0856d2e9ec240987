//! Plain-text rendering of the feature-creation form.

use super::FeatureFormView;

/// Render the creation form: the target project and the roster of team
/// members that can be assigned to the new feature. Member lines carry
/// their ID so they can be handed straight to `add-feature --assignee`.
pub fn render_form(form: &FeatureFormView) -> String {
    let mut out = String::new();
    out.push_str("New feature\n");
    out.push_str(&format!("  project: {}\n", form.project_id));
    if form.team_members.is_empty() {
        out.push_str("  no team members to assign\n");
    } else {
        out.push_str("  assignable team members:\n");
        for member in &form.team_members {
            match &member.role {
                Some(role) => {
                    out.push_str(&format!("    - {} ({})  {}\n", member.name, role, member.id))
                }
                None => out.push_str(&format!("    - {}  {}\n", member.name, member.id)),
            }
        }
    }
    out
}
