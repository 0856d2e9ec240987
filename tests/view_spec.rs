use crewplan::models::{Feature, Project, Task, TeamMember};
use crewplan::view::{build_page, render_feature_list, render_text};
use speculate2::speculate;
use uuid::Uuid;

fn project(name: &str) -> Project {
    Project {
        id: Uuid::new_v4(),
        project_name: name.to_string(),
        description: None,
    }
}

fn feature_with_tasks(project_id: Uuid, name: &str, task_count: usize) -> Feature {
    Feature {
        id: Uuid::new_v4(),
        project_id,
        feature_name: name.to_string(),
        tasks: (0..task_count)
            .map(|i| Task {
                id: Uuid::new_v4(),
                task_name: format!("Task {}", i + 1),
                assigned_to: None,
            })
            .collect(),
        assignees: vec![],
    }
}

speculate! {
    before {
        let project_id = Uuid::new_v4();
    }

    describe "breadcrumbs" {
        it "links home, the project list, and the loaded project" {
            let p = project("Alpha");
            let view = build_page(Some(&p), &[], &[], project_id);

            assert_eq!(view.crumbs.len(), 4);
            assert_eq!(view.crumbs[0].label, "Home");
            assert_eq!(view.crumbs[0].href.as_deref(), Some("/"));
            assert_eq!(view.crumbs[1].label, "My projects");
            assert_eq!(view.crumbs[1].href.as_deref(), Some("/myprojects"));
            assert_eq!(view.crumbs[2].label, "Alpha");
            assert_eq!(view.crumbs[2].href, Some(format!("/myprojects/{}", project_id)));
            assert_eq!(view.crumbs[3].label, "Add features");
            assert!(view.crumbs[3].href.is_none());
        }

        it "renders an empty label while the project is still loading" {
            let view = build_page(None, &[], &[], project_id);

            assert_eq!(view.crumbs[2].label, "");
            assert_eq!(view.intro, "Break down  into features.");
        }
    }

    describe "finish link" {
        it "is absent with no features" {
            let view = build_page(None, &[], &[], project_id);
            assert!(view.finish_link.is_none());
        }

        it "is absent when the first feature has no tasks" {
            let features = vec![feature_with_tasks(project_id, "Checkout", 0)];
            let view = build_page(None, &features, &[], project_id);
            assert!(view.finish_link.is_none());
        }

        it "appears once the first feature has a task" {
            let features = vec![feature_with_tasks(project_id, "Checkout", 1)];
            let view = build_page(None, &features, &[], project_id);

            let link = view.finish_link.expect("link should be present");
            assert_eq!(link.label, "Finish creating project →");
            assert_eq!(link.href, format!("/myprojects/{}", project_id));
        }

        it "only consults the first feature" {
            let features = vec![
                feature_with_tasks(project_id, "Checkout", 0),
                feature_with_tasks(project_id, "Search", 3),
            ];
            let view = build_page(None, &features, &[], project_id);
            assert!(view.finish_link.is_none());
        }
    }

    describe "form" {
        it "passes the project and the team roster through" {
            let team = vec![TeamMember {
                id: Uuid::new_v4(),
                name: "Dana".to_string(),
                role: None,
            }];
            let view = build_page(None, &[], &team, project_id);

            assert_eq!(view.form.project_id, project_id);
            assert_eq!(view.form.team_members.len(), 1);
        }
    }

    describe "text rendering" {
        it "prints the trail, intro, and feature tree" {
            let p = project("Alpha");
            let features = vec![feature_with_tasks(project_id, "Checkout", 2)];
            let view = build_page(Some(&p), &features, &[], project_id);
            let text = render_text(&view);

            assert!(text.starts_with("Home / My projects / Alpha / Add features\n"));
            assert!(text.contains("Break down Alpha into features."));
            assert!(text.contains(&format!("Checkout  ({})\n├── Task 1\n└── Task 2\n", features[0].id)));
            assert!(text.contains(&format!("[Finish creating project →](/myprojects/{})", project_id)));
        }

        it "prints an empty state when nothing is loaded" {
            let view = build_page(None, &[], &[], project_id);
            let text = render_text(&view);

            assert!(text.contains("No features yet."));
            assert!(text.contains("no team members to assign"));
        }

        it "renders the list standalone" {
            let features = vec![feature_with_tasks(project_id, "Checkout", 1)];
            let expected = format!("Checkout  ({})\n└── Task 1\n", features[0].id);
            assert_eq!(render_feature_list(&features), expected);
        }
    }
}
