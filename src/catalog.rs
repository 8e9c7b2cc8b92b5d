// 🧩 Node Catalog - The building blocks offered by the pipeline editor
//
// The catalog is built once at startup and never changes afterwards.
// Handlers share it read-only, so no locking is needed.

use serde::Serialize;

// ============================================================================
// NODE TYPE
// ============================================================================

/// One kind of pipeline-editor building block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeType {
    /// Stable identifier used by the editor (e.g. "data-source")
    pub id: String,

    /// Display name shown in the node palette
    pub name: String,
}

impl NodeType {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        NodeType {
            id: id.into(),
            name: name.into(),
        }
    }

    /// The editor discards entries with an empty id or name
    pub fn is_well_formed(&self) -> bool {
        !self.id.is_empty() && !self.name.is_empty()
    }
}

// ============================================================================
// NODE CATALOG
// ============================================================================

/// Fixed, ordered set of node types
#[derive(Debug, Clone)]
pub struct NodeCatalog {
    entries: Vec<NodeType>,
}

impl NodeCatalog {
    /// Create the catalog with the built-in node types
    pub fn new() -> Self {
        let mut catalog = NodeCatalog {
            entries: Vec::with_capacity(4),
        };

        catalog.register_default_node_types();
        catalog
    }

    /// Order here is the order clients see
    fn register_default_node_types(&mut self) {
        self.register(NodeType::new("data-source", "Data Source"));
        self.register(NodeType::new("transformer", "Transformer"));
        self.register(NodeType::new("model", "Model"));
        self.register(NodeType::new("sink", "Sink"));
    }

    fn register(&mut self, node_type: NodeType) {
        debug_assert!(node_type.is_well_formed());
        debug_assert!(self.get(&node_type.id).is_none());
        self.entries.push(node_type);
    }

    /// All node types in catalog order
    pub fn all(&self) -> &[NodeType] {
        &self.entries
    }

    /// Find a node type by id
    pub fn get(&self, id: &str) -> Option<&NodeType> {
        self.entries.iter().find(|n| n.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for NodeCatalog {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
