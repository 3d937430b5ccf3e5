// Store trait for dashboard creation
use crate::domain::dashboard::Dashboard;

pub trait DashboardStore: Send + Sync {
    /// Create a dashboard from its serialized position tree. A dashboard
    /// that already exists under the slug is replaced and keeps its id.
    fn create_dashboard(
        &self,
        slug: &str,
        dashboard_title: &str,
        position_json: &str,
    ) -> anyhow::Result<Dashboard>;

    /// Look up a previously created dashboard
    fn find_by_slug(&self, slug: &str) -> Option<Dashboard>;
}
