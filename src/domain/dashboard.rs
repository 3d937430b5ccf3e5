// Dashboard domain model
use crate::domain::layout::PositionTree;

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub id: u64,
    pub slug: String,
    pub dashboard_title: String,
    pub position: PositionTree,
}

impl Dashboard {
    pub fn new(id: u64, slug: String, dashboard_title: String, position: PositionTree) -> Self {
        Self {
            id,
            slug,
            dashboard_title,
            position,
        }
    }
}
