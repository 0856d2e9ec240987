//! Plain-text rendering of the feature list.

use crate::models::Feature;

/// Render features with their tasks as an ASCII tree. Each feature line
/// carries its ID so it can be handed straight to `delete-feature`.
///
/// Example output:
/// ```text
/// Checkout  (77a0c61e-...)
/// ├── Cart page
/// └── Payment form
/// ```
pub fn render_feature_list(features: &[Feature]) -> String {
    if features.is_empty() {
        return "No features yet.\n".to_string();
    }
    let mut output = String::new();
    for feature in features {
        render_feature(&mut output, feature);
    }
    output
}

fn render_feature(output: &mut String, feature: &Feature) {
    output.push_str(&feature.feature_name);
    output.push_str(&format!("  ({})", feature.id));
    output.push('\n');
    for (i, task) in feature.tasks.iter().enumerate() {
        let is_last = i == feature.tasks.len() - 1;
        let branch = if is_last { "└── " } else { "├── " };
        output.push_str(branch);
        output.push_str(&task.task_name);
        output.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;
    use uuid::Uuid;

    fn make_feature(name: &str, task_names: &[&str]) -> Feature {
        Feature {
            id: Uuid::new_v4(),
            project_id: Uuid::new_v4(),
            feature_name: name.to_string(),
            tasks: task_names
                .iter()
                .map(|t| Task {
                    id: Uuid::new_v4(),
                    task_name: t.to_string(),
                    assigned_to: None,
                })
                .collect(),
            assignees: vec![],
        }
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(render_feature_list(&[]), "No features yet.\n");
    }

    #[test]
    fn test_feature_without_tasks() {
        let feature = make_feature("Checkout", &[]);
        let expected = format!("Checkout  ({})\n", feature.id);
        assert_eq!(render_feature_list(&[feature]), expected);
    }

    #[test]
    fn test_feature_with_tasks() {
        let feature = make_feature("Checkout", &["Cart page", "Payment form"]);
        let expected = format!(
            "Checkout  ({})\n├── Cart page\n└── Payment form\n",
            feature.id
        );
        assert_eq!(render_feature_list(&[feature]), expected);
    }

    #[test]
    fn test_multiple_features() {
        let checkout = make_feature("Checkout", &["Cart page"]);
        let search = make_feature("Search", &[]);
        let expected = format!(
            "Checkout  ({})\n└── Cart page\nSearch  ({})\n",
            checkout.id, search.id
        );
        assert_eq!(render_feature_list(&[checkout, search]), expected);
    }
}
