//! View-model for a project's "Add features" page.
//!
//! The page mirrors three independent slices of server state: the
//! project itself, its feature list, and the current user's team
//! members. Each slice is loaded by its own routine and overwritten
//! wholesale on success; the local copy is a snapshot, never the source
//! of truth. Mutations go to the server first and re-fetch afterwards
//! instead of patching the snapshot.
//!
//! Every operation is guarded by the stored session: with no valid
//! token it returns [`LoadOutcome::NoSession`] without issuing a single
//! network request or touching any slot.

use uuid::Uuid;

use crate::api::{ApiClient, ClientError};
use crate::auth::SessionStore;
use crate::models::{CreateFeatureInput, Feature, Project, TeamMember};
use crate::view::{self, FeaturePageView};

/// What a guarded operation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Server state was fetched and the local slot(s) overwritten.
    Loaded,
    /// No valid session token; nothing was sent and nothing changed.
    NoSession,
}

/// State and operations backing the "Add features" page.
pub struct FeaturePage {
    client: ApiClient,
    store: SessionStore,
    project_id: Uuid,
    project: Option<Project>,
    features: Vec<Feature>,
    team_members: Vec<TeamMember>,
}

impl FeaturePage {
    pub fn new(client: ApiClient, store: SessionStore, project_id: Uuid) -> Self {
        Self {
            client,
            store,
            project_id,
            project: None,
            features: Vec::new(),
            team_members: Vec::new(),
        }
    }

    pub fn project_id(&self) -> Uuid {
        self.project_id
    }

    pub fn project(&self) -> Option<&Project> {
        self.project.as_ref()
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn team_members(&self) -> &[TeamMember] {
        &self.team_members
    }

    /// Compose the page view from whatever has loaded so far.
    pub fn view(&self) -> FeaturePageView {
        view::build_page(
            self.project.as_ref(),
            &self.features,
            &self.team_members,
            self.project_id,
        )
    }

    // ============================================================
    // Loaders
    // ============================================================

    /// Fetch the project and overwrite the project slot.
    pub async fn load_project(&mut self) -> Result<LoadOutcome, ClientError> {
        let Some(token) = self.store.token() else {
            return Ok(LoadOutcome::NoSession);
        };
        let project = self.client.get_project(self.project_id, &token).await?;
        self.project = Some(project);
        Ok(LoadOutcome::Loaded)
    }

    /// Fetch the feature list and overwrite the features slot.
    pub async fn load_features(&mut self) -> Result<LoadOutcome, ClientError> {
        let Some(token) = self.store.token() else {
            return Ok(LoadOutcome::NoSession);
        };
        let features = self.client.get_features(self.project_id, &token).await?;
        self.features = features;
        Ok(LoadOutcome::Loaded)
    }

    /// Fetch the current user and overwrite the team member slot.
    pub async fn load_team_members(&mut self) -> Result<LoadOutcome, ClientError> {
        let Some(token) = self.store.token() else {
            return Ok(LoadOutcome::NoSession);
        };
        let user = self.client.get_current_user(&token).await?;
        self.team_members = user.team_members;
        Ok(LoadOutcome::Loaded)
    }

    /// Load all three slots concurrently.
    ///
    /// The fetches race in any order. Each success overwrites only its
    /// own slot; each failure is logged and leaves its slot as it was,
    /// so the page keeps rendering stale or empty data rather than
    /// surfacing an error. Callers wanting failures propagated use the
    /// individual loaders instead.
    pub async fn refresh(&mut self) -> LoadOutcome {
        let Some(token) = self.store.token() else {
            return LoadOutcome::NoSession;
        };
        let (project, features, user) = tokio::join!(
            self.client.get_project(self.project_id, &token),
            self.client.get_features(self.project_id, &token),
            self.client.get_current_user(&token),
        );
        match project {
            Ok(p) => self.project = Some(p),
            Err(e) => tracing::warn!(error = %e, "project fetch failed"),
        }
        match features {
            Ok(f) => self.features = f,
            Err(e) => tracing::warn!(error = %e, "feature list fetch failed"),
        }
        match user {
            Ok(u) => self.team_members = u.team_members,
            Err(e) => tracing::warn!(error = %e, "current user fetch failed"),
        }
        LoadOutcome::Loaded
    }

    // ============================================================
    // Mutations
    // ============================================================

    /// Delete a feature on the server, then re-fetch the feature list to
    /// resynchronize. The re-fetch body is the source of truth for the
    /// new slot contents.
    ///
    /// Any failure aborts the sequence: a failed delete changes nothing,
    /// and a failed re-fetch leaves the stale list in place even though
    /// the server-side delete already happened. There is no compensating
    /// action, so a blind retry after a partial failure is not
    /// idempotent.
    pub async fn delete_feature(&mut self, feature_id: Uuid) -> Result<LoadOutcome, ClientError> {
        let Some(token) = self.store.token() else {
            return Ok(LoadOutcome::NoSession);
        };
        self.client
            .delete_feature(self.project_id, feature_id, &token)
            .await?;
        let features = self.client.get_features(self.project_id, &token).await?;
        self.features = features;
        Ok(LoadOutcome::Loaded)
    }

    /// Create a feature on the server, then re-fetch the feature list.
    /// Same failure semantics as [`Self::delete_feature`].
    pub async fn create_feature(
        &mut self,
        mut input: CreateFeatureInput,
    ) -> Result<LoadOutcome, ClientError> {
        let Some(token) = self.store.token() else {
            return Ok(LoadOutcome::NoSession);
        };
        // The page always creates into its own project.
        input.project_id = self.project_id;
        self.client.create_feature(&input, &token).await?;
        let features = self.client.get_features(self.project_id, &token).await?;
        self.features = features;
        Ok(LoadOutcome::Loaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use tokio_test::block_on;

    /// A page with no stored session. The client points at a closed
    /// port, so any request issued by mistake fails loudly.
    fn logged_out_page() -> FeaturePage {
        let dir = tempdir().unwrap();
        let store = SessionStore::at_path(dir.path().join("session.json"));
        FeaturePage::new(ApiClient::new("http://127.0.0.1:9"), store, Uuid::new_v4())
    }

    #[test]
    fn loaders_skip_network_when_logged_out() {
        let mut page = logged_out_page();

        assert_eq!(block_on(page.load_project()).unwrap(), LoadOutcome::NoSession);
        assert_eq!(block_on(page.load_features()).unwrap(), LoadOutcome::NoSession);
        assert_eq!(
            block_on(page.load_team_members()).unwrap(),
            LoadOutcome::NoSession
        );
        assert_eq!(block_on(page.refresh()), LoadOutcome::NoSession);

        assert!(page.project().is_none());
        assert!(page.features().is_empty());
        assert!(page.team_members().is_empty());
    }

    #[test]
    fn mutations_skip_network_when_logged_out() {
        let mut page = logged_out_page();

        let outcome = block_on(page.delete_feature(Uuid::new_v4())).unwrap();
        assert_eq!(outcome, LoadOutcome::NoSession);

        let input = CreateFeatureInput {
            project_id: page.project_id(),
            feature_name: "Checkout".to_string(),
            tasks: vec![],
            assignees: vec![],
        };
        let outcome = block_on(page.create_feature(input)).unwrap();
        assert_eq!(outcome, LoadOutcome::NoSession);

        assert!(page.features().is_empty());
    }
}
