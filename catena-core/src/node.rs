//! Classification of DOM-like nodes.

use crate::conventions::{ELEMENT_NODE_TYPE, RESERVED_TAGS, strip_component_prefix};

/// The shape of a DOM node as seen by the classifier.
///
/// Implement this for whatever node type the rendering engine walks; only
/// the node type and node name are ever read.
pub trait DomNode {
    /// Numeric DOM node type (`1` for elements).
    fn node_type(&self) -> u16;

    /// Node name; the uppercase tag name for HTML elements.
    fn node_name(&self) -> &str;
}

/// A plain owned node description.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeInfo {
    /// Numeric DOM node type.
    pub node_type: u16,
    /// Node name.
    pub node_name: String,
}

impl NodeInfo {
    /// Create a node of an arbitrary type.
    pub fn new(node_type: u16, node_name: impl Into<String>) -> Self {
        Self {
            node_type,
            node_name: node_name.into(),
        }
    }

    /// Create an element node.
    pub fn element(tag_name: impl Into<String>) -> Self {
        Self::new(ELEMENT_NODE_TYPE, tag_name)
    }
}

impl DomNode for NodeInfo {
    fn node_type(&self) -> u16 {
        self.node_type
    }

    fn node_name(&self) -> &str {
        &self.node_name
    }
}

impl<N: DomNode + ?Sized> DomNode for &N {
    fn node_type(&self) -> u16 {
        (**self).node_type()
    }

    fn node_name(&self) -> &str {
        (**self).node_name()
    }
}

/// Whether `node` is the element of a component.
///
/// True for elements whose name starts with `cat-` (any case), and for the
/// `HEAD` and `HTML` elements (exact case).
pub fn is_component_node<N: DomNode + ?Sized>(node: &N) -> bool {
    if node.node_type() != ELEMENT_NODE_TYPE {
        return false;
    }
    let name = node.node_name();
    strip_component_prefix(name).is_some() || RESERVED_TAGS.contains(name)
}
