// Dashboard position-tree domain model
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;
use uuid::Uuid;

pub const ROOT_ID: &str = "ROOT_ID";
pub const GRID_ID: &str = "GRID_ID";
pub const HEADER_ID: &str = "HEADER_ID";
pub const VERSION_KEY: &str = "DASHBOARD_VERSION_KEY";
pub const DEFAULT_VERSION: &str = "v2";

pub const BACKGROUND_TRANSPARENT: &str = "BACKGROUND_TRANSPARENT";

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("unknown layout node: {0}")]
    UnknownNode(String),

    #[error("map key {key} does not match node id {id}")]
    IdMismatch { key: String, id: String },

    #[error("unsupported layout version: {0}")]
    UnsupportedVersion(String),

    #[error("missing root node ROOT_ID")]
    MissingRoot,

    #[error("node {0} is not a ROOT node")]
    BadRoot(String),

    #[error("node {child} has a stale parent chain (expected {expected:?})")]
    StaleParentChain { child: String, expected: Vec<String> },

    #[error("{0} is a leaf component and cannot contain children")]
    LeafWithChildren(String),

    #[error("tabs container {tabs} has non-tab child {child}")]
    NonTabChild { tabs: String, child: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeType {
    Root,
    Grid,
    Tabs,
    Tab,
    Row,
    Column,
    Chart,
    Markdown,
    Header,
}

impl NodeType {
    /// Leaf components never carry children in the position tree
    pub fn is_leaf(&self) -> bool {
        matches!(self, NodeType::Chart | NodeType::Markdown | NodeType::Header)
    }
}

/// Per-node metadata. The populated fields depend on the node type:
/// charts carry chartId/sliceName/uuid and sizing, markdown tiles carry
/// their body in `code`, tabs and headers carry `text`, rows and columns
/// carry a `background` style token.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NodeMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slice_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slice_name_override: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutNode {
    #[serde(default)]
    pub children: Vec<String>,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<NodeMeta>,
    #[serde(default)]
    pub parents: Vec<String>,
    #[serde(rename = "type")]
    pub node_type: NodeType,
}

impl LayoutNode {
    pub fn new(id: impl Into<String>, node_type: NodeType) -> Self {
        Self {
            children: Vec::new(),
            id: id.into(),
            meta: None,
            parents: Vec::new(),
            node_type,
        }
    }

    pub fn with_meta(mut self, meta: NodeMeta) -> Self {
        self.meta = Some(meta);
        self
    }
}

/// A raw entry in the serialized position map: either the version marker
/// under DASHBOARD_VERSION_KEY or a layout node.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum TreeEntry {
    Version(String),
    Node(LayoutNode),
}

/// The dashboard layout: a flat map from node id to node, with an ordered
/// `children` list per node and a full ancestor chain in `parents`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, TreeEntry>",
    into = "BTreeMap<String, TreeEntry>"
)]
pub struct PositionTree {
    version: String,
    nodes: BTreeMap<String, LayoutNode>,
}

impl Default for PositionTree {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionTree {
    pub fn new() -> Self {
        Self {
            version: DEFAULT_VERSION.to_string(),
            nodes: BTreeMap::new(),
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&LayoutNode> {
        self.nodes.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut LayoutNode> {
        self.nodes.get_mut(id)
    }

    /// Insert a node, keyed by its own id
    pub fn insert(&mut self, node: LayoutNode) {
        self.nodes.insert(node.id.clone(), node);
    }

    pub fn iter(&self) -> impl Iterator<Item = &LayoutNode> {
        self.nodes.values()
    }

    pub fn charts(&self) -> impl Iterator<Item = &LayoutNode> {
        self.nodes
            .values()
            .filter(|n| n.node_type == NodeType::Chart)
    }

    /// Chart ids referenced by the layout, ascending
    pub fn chart_ids(&self) -> Vec<u64> {
        let mut ids: Vec<u64> = self
            .charts()
            .filter_map(|n| n.meta.as_ref().and_then(|m| m.chart_id))
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Ancestor chain of a node, from ROOT_ID down to its direct parent
    pub fn parent_chain(&self, id: &str) -> Option<&[String]> {
        self.nodes.get(id).map(|n| n.parents.as_slice())
    }

    /// Preorder traversal from ROOT_ID, following each node's child order.
    /// The header node is not part of the grid and is not visited.
    pub fn walk(&self) -> Vec<&LayoutNode> {
        let mut out = Vec::new();
        let mut stack = vec![ROOT_ID];
        while let Some(id) = stack.pop() {
            if let Some(node) = self.nodes.get(id) {
                out.push(node);
                for child in node.children.iter().rev() {
                    stack.push(child.as_str());
                }
            }
        }
        out
    }

    /// Check structural invariants: a ROOT node exists, every child id
    /// resolves, every child's parent chain is its parent's chain plus the
    /// parent id, leaves have no children, and tabs only contain tab nodes.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.version != DEFAULT_VERSION {
            return Err(LayoutError::UnsupportedVersion(self.version.clone()));
        }

        let root = self.nodes.get(ROOT_ID).ok_or(LayoutError::MissingRoot)?;
        if root.node_type != NodeType::Root {
            return Err(LayoutError::BadRoot(ROOT_ID.to_string()));
        }

        for (key, node) in &self.nodes {
            if key != &node.id {
                return Err(LayoutError::IdMismatch {
                    key: key.clone(),
                    id: node.id.clone(),
                });
            }

            if node.node_type.is_leaf() && !node.children.is_empty() {
                return Err(LayoutError::LeafWithChildren(node.id.clone()));
            }

            let mut expected = node.parents.clone();
            expected.push(node.id.clone());

            for child_id in &node.children {
                let child = self
                    .nodes
                    .get(child_id)
                    .ok_or_else(|| LayoutError::UnknownNode(child_id.clone()))?;

                if child.parents != expected {
                    return Err(LayoutError::StaleParentChain {
                        child: child_id.clone(),
                        expected: expected.clone(),
                    });
                }

                if node.node_type == NodeType::Tabs && child.node_type != NodeType::Tab {
                    return Err(LayoutError::NonTabChild {
                        tabs: node.id.clone(),
                        child: child_id.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

impl TryFrom<BTreeMap<String, TreeEntry>> for PositionTree {
    type Error = LayoutError;

    fn try_from(entries: BTreeMap<String, TreeEntry>) -> Result<Self, Self::Error> {
        let mut tree = PositionTree::new();
        for (key, entry) in entries {
            match entry {
                TreeEntry::Version(v) => {
                    // The version marker is the only non-node entry
                    tree.version = v;
                }
                TreeEntry::Node(node) => {
                    if node.id != key {
                        return Err(LayoutError::IdMismatch { key, id: node.id });
                    }
                    tree.nodes.insert(key, node);
                }
            }
        }
        Ok(tree)
    }
}

impl From<PositionTree> for BTreeMap<String, TreeEntry> {
    fn from(tree: PositionTree) -> Self {
        let mut entries: BTreeMap<String, TreeEntry> = tree
            .nodes
            .into_iter()
            .map(|(key, node)| (key, TreeEntry::Node(node)))
            .collect();
        entries.insert(VERSION_KEY.to_string(), TreeEntry::Version(tree.version));
        entries
    }
}
