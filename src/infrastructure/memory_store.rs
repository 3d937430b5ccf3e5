// In-memory dashboard store implementation
use crate::application::dashboard_store::DashboardStore;
use crate::domain::dashboard::Dashboard;
use crate::domain::layout::PositionTree;
use anyhow::Context;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Dashboard-creation collaborator backed by a map, for test harnesses.
/// Creating under an existing slug replaces the dashboard but keeps its id.
#[derive(Debug, Default)]
pub struct InMemoryDashboardStore {
    dashboards: Mutex<HashMap<String, Dashboard>>,
    next_id: AtomicU64,
}

impl InMemoryDashboardStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DashboardStore for InMemoryDashboardStore {
    fn create_dashboard(
        &self,
        slug: &str,
        dashboard_title: &str,
        position_json: &str,
    ) -> anyhow::Result<Dashboard> {
        let position: PositionTree = serde_json::from_str(position_json)
            .with_context(|| format!("Failed to parse position tree for dashboard {}", slug))?;
        position
            .validate()
            .with_context(|| format!("Inconsistent position tree for dashboard {}", slug))?;

        let mut dashboards = self.dashboards.lock().unwrap();
        let id = match dashboards.get(slug) {
            Some(existing) => existing.id,
            None => self.next_id.fetch_add(1, Ordering::Relaxed) + 1,
        };

        let dashboard = Dashboard::new(id, slug.to_string(), dashboard_title.to_string(), position);
        dashboards.insert(slug.to_string(), dashboard.clone());
        tracing::debug!("Stored dashboard {} as id {}", slug, id);
        Ok(dashboard)
    }

    fn find_by_slug(&self, slug: &str) -> Option<Dashboard> {
        self.dashboards.lock().unwrap().get(slug).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::fixtures::{
        MULTIPLE_TABS_SLUG, load_multiple_tabs_dashboard, multiple_tabs_position,
    };

    #[test]
    fn test_create_assigns_sequential_ids() {
        let store = InMemoryDashboardStore::new();
        let json = serde_json::to_string(&multiple_tabs_position()).unwrap();

        let first = store.create_dashboard("one", "One", &json).unwrap();
        let second = store.create_dashboard("two", "Two", &json).unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[test]
    fn test_recreating_a_slug_keeps_the_id() {
        let store = InMemoryDashboardStore::new();
        let json = serde_json::to_string(&multiple_tabs_position()).unwrap();

        let first = store.create_dashboard("one", "One", &json).unwrap();
        let again = store.create_dashboard("one", "One again", &json).unwrap();
        assert_eq!(first.id, again.id);
        assert_eq!(
            store.find_by_slug("one").unwrap().dashboard_title,
            "One again"
        );
    }

    #[test]
    fn test_rejects_an_inconsistent_position_payload() {
        let store = InMemoryDashboardStore::new();
        // No ROOT node
        let result = store.create_dashboard("bad", "Bad", "{\"DASHBOARD_VERSION_KEY\": \"v2\"}");
        assert!(result.is_err());
    }

    #[test]
    fn test_seeds_the_multiple_tabs_fixture() {
        let store = InMemoryDashboardStore::new();
        let dashboard = load_multiple_tabs_dashboard(&store).unwrap();

        assert_eq!(dashboard.slug, MULTIPLE_TABS_SLUG);
        assert_eq!(dashboard.dashboard_title, "multiple tabs Test");
        assert_eq!(dashboard.position, multiple_tabs_position());
        assert!(store.find_by_slug(MULTIPLE_TABS_SLUG).is_some());
    }
}
