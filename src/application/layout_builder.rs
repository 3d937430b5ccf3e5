// Layout builder - Use case for assembling consistent position trees
use crate::domain::layout::{
    BACKGROUND_TRANSPARENT, GRID_ID, HEADER_ID, LayoutError, LayoutNode, NodeMeta, NodeType,
    PositionTree, ROOT_ID,
};
use uuid::Uuid;

/// Chart tile description for [`LayoutBuilder::add_chart`]
#[derive(Debug, Clone)]
pub struct ChartMeta {
    pub chart_id: u64,
    pub slice_name: String,
    pub slice_name_override: Option<String>,
    pub uuid: Option<Uuid>,
    pub width: u32,
    pub height: u32,
}

impl ChartMeta {
    pub fn new(chart_id: u64, slice_name: &str, width: u32, height: u32) -> Self {
        Self {
            chart_id,
            slice_name: slice_name.to_string(),
            slice_name_override: None,
            uuid: None,
            width,
            height,
        }
    }

    pub fn with_name_override(mut self, slice_name_override: &str) -> Self {
        self.slice_name_override = Some(slice_name_override.to_string());
        self
    }

    pub fn with_uuid(mut self, uuid: Uuid) -> Self {
        self.uuid = Some(uuid);
        self
    }
}

/// Assembles a position tree starting from the ROOT/GRID/HEADER skeleton.
/// Every insertion derives the child's ancestor chain from its parent, so
/// the `parents` lists can never drift from the `children` edges.
pub struct LayoutBuilder {
    tree: PositionTree,
}

impl LayoutBuilder {
    pub fn new(header_text: &str) -> Self {
        let mut tree = PositionTree::new();

        let mut root = LayoutNode::new(ROOT_ID, NodeType::Root);
        root.children.push(GRID_ID.to_string());
        tree.insert(root);

        let mut grid = LayoutNode::new(GRID_ID, NodeType::Grid);
        grid.parents.push(ROOT_ID.to_string());
        tree.insert(grid);

        tree.insert(
            LayoutNode::new(HEADER_ID, NodeType::Header).with_meta(NodeMeta {
                text: Some(header_text.to_string()),
                ..NodeMeta::default()
            }),
        );

        Self { tree }
    }

    fn attach(&mut self, parent_id: &str, mut node: LayoutNode) -> Result<(), LayoutError> {
        let parent = self
            .tree
            .get_mut(parent_id)
            .ok_or_else(|| LayoutError::UnknownNode(parent_id.to_string()))?;

        if parent.node_type.is_leaf() {
            return Err(LayoutError::LeafWithChildren(parent_id.to_string()));
        }
        if parent.node_type == NodeType::Tabs && node.node_type != NodeType::Tab {
            return Err(LayoutError::NonTabChild {
                tabs: parent_id.to_string(),
                child: node.id.clone(),
            });
        }

        let mut chain = parent.parents.clone();
        chain.push(parent.id.clone());
        node.parents = chain;

        parent.children.push(node.id.clone());
        self.tree.insert(node);
        Ok(())
    }

    pub fn add_tabs(&mut self, parent: &str, id: &str) -> Result<(), LayoutError> {
        // A tabs container serializes with an (empty) meta object
        self.attach(
            parent,
            LayoutNode::new(id, NodeType::Tabs).with_meta(NodeMeta::default()),
        )
    }

    pub fn add_tab(&mut self, tabs: &str, id: &str, title: &str) -> Result<(), LayoutError> {
        self.attach(
            tabs,
            LayoutNode::new(id, NodeType::Tab).with_meta(NodeMeta {
                text: Some(title.to_string()),
                ..NodeMeta::default()
            }),
        )
    }

    pub fn add_row(&mut self, parent: &str, id: &str) -> Result<(), LayoutError> {
        self.attach(
            parent,
            LayoutNode::new(id, NodeType::Row).with_meta(NodeMeta {
                background: Some(BACKGROUND_TRANSPARENT.to_string()),
                ..NodeMeta::default()
            }),
        )
    }

    pub fn add_column(&mut self, row: &str, id: &str, width: u32) -> Result<(), LayoutError> {
        self.attach(
            row,
            LayoutNode::new(id, NodeType::Column).with_meta(NodeMeta {
                background: Some(BACKGROUND_TRANSPARENT.to_string()),
                width: Some(width),
                ..NodeMeta::default()
            }),
        )
    }

    pub fn add_chart(&mut self, parent: &str, id: &str, chart: ChartMeta) -> Result<(), LayoutError> {
        self.attach(
            parent,
            LayoutNode::new(id, NodeType::Chart).with_meta(NodeMeta {
                chart_id: Some(chart.chart_id),
                slice_name: Some(chart.slice_name),
                slice_name_override: chart.slice_name_override,
                uuid: Some(chart.uuid.unwrap_or_else(Uuid::new_v4)),
                width: Some(chart.width),
                height: Some(chart.height),
                ..NodeMeta::default()
            }),
        )
    }

    pub fn add_markdown(
        &mut self,
        parent: &str,
        id: &str,
        code: &str,
        width: u32,
        height: u32,
    ) -> Result<(), LayoutError> {
        self.attach(
            parent,
            LayoutNode::new(id, NodeType::Markdown).with_meta(NodeMeta {
                code: Some(code.to_string()),
                width: Some(width),
                height: Some(height),
                ..NodeMeta::default()
            }),
        )
    }

    pub fn build(self) -> Result<PositionTree, LayoutError> {
        self.tree.validate()?;
        Ok(self.tree)
    }
}
