//! Page composition for the "Add features" view.
//!
//! Everything here is a pure function of already-loaded state: the
//! builders never touch the network, and a slot that has not loaded yet
//! renders as its empty default rather than an error.

mod form_render;
mod list_render;

pub use form_render::render_form;
pub use list_render::render_feature_list;

use uuid::Uuid;

use crate::models::{Feature, Project, TeamMember};

/// A rendered hyperlink target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub label: String,
    pub href: String,
}

/// One entry in the breadcrumb trail. `href` is `None` for the active
/// leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    pub href: Option<String>,
}

/// The fully composed page, ready for rendering.
#[derive(Debug, Clone)]
pub struct FeaturePageView {
    pub crumbs: Vec<Crumb>,
    pub heading: String,
    pub intro: String,
    /// Call-to-action back to the project detail view. Present only once
    /// the first feature has at least one task.
    pub finish_link: Option<Link>,
    pub features: Vec<Feature>,
    pub form: FeatureFormView,
}

/// Configuration handed to the feature-creation form.
#[derive(Debug, Clone)]
pub struct FeatureFormView {
    pub project_id: Uuid,
    /// Roster of people assignable to the new feature.
    pub team_members: Vec<TeamMember>,
}

/// Compose the page from the three state slots.
pub fn build_page(
    project: Option<&Project>,
    features: &[Feature],
    team_members: &[TeamMember],
    project_id: Uuid,
) -> FeaturePageView {
    let project_name = project.map(|p| p.project_name.clone()).unwrap_or_default();

    let crumbs = vec![
        Crumb {
            label: "Home".to_string(),
            href: Some("/".to_string()),
        },
        Crumb {
            label: "My projects".to_string(),
            href: Some("/myprojects".to_string()),
        },
        Crumb {
            label: project_name.clone(),
            href: Some(format!("/myprojects/{}", project_id)),
        },
        Crumb {
            label: "Add features".to_string(),
            href: None,
        },
    ];

    let finish_link = features
        .first()
        .filter(|f| !f.tasks.is_empty())
        .map(|_| Link {
            label: "Finish creating project →".to_string(),
            href: format!("/myprojects/{}", project_id),
        });

    FeaturePageView {
        crumbs,
        heading: "Add features".to_string(),
        intro: format!("Break down {} into features.", project_name),
        finish_link,
        features: features.to_vec(),
        form: FeatureFormView {
            project_id,
            team_members: team_members.to_vec(),
        },
    }
}

/// Render the whole page as plain text.
pub fn render_text(view: &FeaturePageView) -> String {
    let mut out = String::new();

    let trail: Vec<&str> = view.crumbs.iter().map(|c| c.label.as_str()).collect();
    out.push_str(&trail.join(" / "));
    out.push_str("\n\n");

    out.push_str(&view.heading);
    out.push('\n');
    if let Some(link) = &view.finish_link {
        out.push_str(&format!("[{}]({})\n", link.label, link.href));
    }
    out.push_str(&view.intro);
    out.push_str("\n\n");

    out.push_str(&list_render::render_feature_list(&view.features));
    out.push('\n');
    out.push_str(&form_render::render_form(&view.form));
    out
}
