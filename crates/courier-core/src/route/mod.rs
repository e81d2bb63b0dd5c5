//! Route topology: a rooted tree of locations.
//!
//! Design:
//! - Nodes live in an arena (`Vec<RouteNode>`) and refer to children by
//!   `NodeId`. Each node is pushed exactly once and only its parent lists
//!   it, so the structure is a tree by construction.
//! - The tree is built once and then only queried (`depth_of`, `exists`).
//! - Delivery duration of a shipment is the depth of its destination.

mod config;

pub use config::{NodeConfig, TopologyConfig};

use crate::domain::NodeId;
use crate::error::CourierError;

/// One location on the route tree.
#[derive(Debug, Clone)]
pub struct RouteNode {
    name: String,
    code: String,
    /// Insertion order = traversal order.
    children: Vec<NodeId>,
}

impl RouteNode {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Rooted location tree.
#[derive(Debug, Clone)]
pub struct RouteTopology {
    nodes: Vec<RouteNode>,
}

impl RouteTopology {
    /// Create a topology holding only its root.
    pub fn new(root_name: impl Into<String>, root_code: impl Into<String>) -> Self {
        Self {
            nodes: vec![RouteNode {
                name: root_name.into(),
                code: root_code.into(),
                children: Vec::new(),
            }],
        }
    }

    /// The Marmara region network the service ships with by default.
    ///
    /// ```text
    /// Istanbul (IST01)
    /// --Bursa (BRS01)
    /// ----Kocaeli (KCL01)
    /// --Edirne (EDR01)
    /// ----Tekirdag (TKD01)
    /// ```
    pub fn marmara() -> Self {
        let mut topology = Self::new("Istanbul", "IST01");
        let root = topology.root();
        let bursa = topology.push_child(root, "Bursa", "BRS01");
        let edirne = topology.push_child(root, "Edirne", "EDR01");
        topology.push_child(bursa, "Kocaeli", "KCL01");
        topology.push_child(edirne, "Tekirdag", "TKD01");
        topology
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> Option<&RouteNode> {
        self.nodes.get(id.0)
    }

    /// Total number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a topology has at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Append a child to `parent`'s child list.
    ///
    /// Fails with `InvalidTopology` if `parent` was not issued by this
    /// topology.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        name: impl Into<String>,
        code: impl Into<String>,
    ) -> Result<NodeId, CourierError> {
        if parent.0 >= self.nodes.len() {
            return Err(CourierError::InvalidTopology(parent));
        }
        Ok(self.push_child(parent, name, code))
    }

    // Caller guarantees `parent` is in range.
    fn push_child(&mut self, parent: NodeId, name: impl Into<String>, code: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(RouteNode {
            name: name.into(),
            code: code.into(),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Depth of the first node named `name` in pre-order, or `None`.
    ///
    /// Names compare case-insensitively and must match exactly. When two
    /// nodes share a name, the one reached first (parent before children,
    /// children in insertion order) wins.
    ///
    /// Explicit-stack DFS: O(n) time, O(h) extra space for a tree of
    /// height h (plus pending siblings).
    pub fn depth_of(&self, name: &str) -> Option<u32> {
        self.find(name).map(|(_, depth)| depth)
    }

    /// Same search as `depth_of`, also returning the matching node.
    pub fn find(&self, name: &str) -> Option<(NodeId, u32)> {
        let mut stack = vec![(self.root(), 0u32)];

        while let Some((id, depth)) = stack.pop() {
            let node = &self.nodes[id.0];
            if names_match(&node.name, name) {
                return Some((id, depth));
            }
            // reversed so the first child is popped first
            for &child in node.children.iter().rev() {
                stack.push((child, depth + 1));
            }
        }
        None
    }

    pub fn exists(&self, name: &str) -> bool {
        self.depth_of(name).is_some()
    }

    /// Pre-order listing, one line per node: `"{indent}{name} ({code})"`
    /// where the indent is `"--"` repeated depth times.
    pub fn render(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![(self.root(), 0usize)];

        while let Some((id, depth)) = stack.pop() {
            let node = &self.nodes[id.0];
            lines.push(format!("{}{} ({})", "--".repeat(depth), node.name, node.code));
            for &child in node.children.iter().rev() {
                stack.push((child, depth + 1));
            }
        }
        lines
    }
}

/// Case-insensitive name comparison, one character at a time.
///
/// Two names match when they have the same number of chars and each pair
/// is equal, or equal after simple uppercasing, or equal after simple
/// uppercasing then lowercasing. Whole-string `to_lowercase` is not enough:
/// it expands 'İ' to "i\u{307}", so "İzmir" would never meet "izmir".
fn names_match(a: &str, b: &str) -> bool {
    let mut a = a.chars();
    let mut b = b.chars();
    loop {
        match (a.next(), b.next()) {
            (None, None) => return true,
            (Some(x), Some(y)) if chars_match(x, y) => {}
            _ => return false,
        }
    }
}

fn chars_match(x: char, y: char) -> bool {
    if x == y {
        return true;
    }
    let (ux, uy) = (simple_upper(x), simple_upper(y));
    ux == uy || simple_lower(ux) == simple_lower(uy)
}

// Single-char mappings only; multi-char expansions (e.g. 'ß' -> "SS") keep the char.
fn simple_upper(c: char) -> char {
    let mut mapped = c.to_uppercase();
    match (mapped.next(), mapped.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

// 'İ' lowers to "i\u{307}"; its single-char mapping is the leading 'i'.
fn simple_lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

impl Default for RouteTopology {
    fn default() -> Self {
        Self::marmara()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn root_has_depth_zero() {
        let topology = RouteTopology::new("Istanbul", "IST01");
        assert_eq!(topology.depth_of("Istanbul"), Some(0));
        assert_eq!(topology.len(), 1);
    }

    #[rstest]
    #[case::root("Istanbul", Some(0))]
    #[case::child("Bursa", Some(1))]
    #[case::grandchild("Kocaeli", Some(2))]
    #[case::second_branch("Tekirdag", Some(2))]
    #[case::lowercase("kocaeli", Some(2))]
    #[case::uppercase("EDIRNE", Some(1))]
    #[case::unknown("Ankara", None)]
    #[case::prefix_does_not_match("Bur", None)]
    #[case::empty("", None)]
    fn marmara_depths(#[case] name: &str, #[case] expected: Option<u32>) {
        let topology = RouteTopology::marmara();
        assert_eq!(topology.depth_of(name), expected);
        assert_eq!(topology.exists(name), expected.is_some());
    }

    #[rstest]
    #[case::exact("İzmir")]
    #[case::lowercase("izmir")]
    #[case::uppercase_dotless("IZMIR")]
    #[case::uppercase_dotted("İZMİR")]
    fn dotted_capital_i_matches_every_casing(#[case] query: &str) {
        let mut topology = RouteTopology::new("İzmir", "IZM01");
        let root = topology.root();
        topology.add_child(root, "Manisa", "MNS01").unwrap();
        assert_eq!(topology.depth_of(query), Some(0));
    }

    #[rstest]
    #[case::same("Bursa", "BURSA", true)]
    #[case::turkish_lower("Çanakkale", "çanakkale", true)]
    #[case::dotted_i_inside("KIRKLARELİ", "kirklareli", true)]
    #[case::longer("Bursa", "Bursaa", false)]
    #[case::shorter("Bursa", "Burs", false)]
    #[case::different("Bursa", "Borsa", false)]
    fn names_match_per_character(#[case] a: &str, #[case] b: &str, #[case] expected: bool) {
        assert_eq!(names_match(a, b), expected);
        assert_eq!(names_match(b, a), expected);
    }

    #[test]
    fn child_depth_is_parent_depth_plus_one() {
        let topology = RouteTopology::marmara();
        let mut stack = vec![topology.root()];
        while let Some(id) = stack.pop() {
            let parent = topology.node(id).unwrap();
            let parent_depth = topology.depth_of(parent.name()).unwrap();
            for &child in parent.children() {
                let child_name = topology.node(child).unwrap().name();
                assert_eq!(topology.depth_of(child_name), Some(parent_depth + 1));
                stack.push(child);
            }
        }
    }

    #[test]
    fn add_child_rejects_foreign_parent() {
        let mut topology = RouteTopology::new("Istanbul", "IST01");
        let bogus = NodeId(7);
        let err = topology.add_child(bogus, "Bursa", "BRS01").unwrap_err();
        assert!(matches!(err, CourierError::InvalidTopology(id) if id == bogus));
        assert_eq!(topology.len(), 1);
    }

    #[test]
    fn add_child_appends_in_order() {
        let mut topology = RouteTopology::new("Istanbul", "IST01");
        let root = topology.root();
        let a = topology.add_child(root, "Bursa", "BRS01").unwrap();
        let b = topology.add_child(root, "Edirne", "EDR01").unwrap();
        assert_eq!(topology.node(root).unwrap().children(), &[a, b]);
        assert_eq!(topology.node(b).unwrap().code(), "EDR01");
    }

    #[test]
    fn duplicate_names_resolve_to_first_preorder_match() {
        // Istanbul
        // --Bursa
        // ----Merkez   (depth 2, visited first)
        // --Merkez     (depth 1, visited later)
        let mut topology = RouteTopology::new("Istanbul", "IST01");
        let root = topology.root();
        let bursa = topology.add_child(root, "Bursa", "BRS01").unwrap();
        let deep = topology.add_child(bursa, "Merkez", "BRS02").unwrap();
        topology.add_child(root, "Merkez", "IST02").unwrap();

        assert_eq!(topology.find("merkez"), Some((deep, 2)));
    }

    #[test]
    fn render_lists_nodes_in_preorder() {
        let topology = RouteTopology::marmara();
        assert_eq!(
            topology.render(),
            vec![
                "Istanbul (IST01)",
                "--Bursa (BRS01)",
                "----Kocaeli (KCL01)",
                "--Edirne (EDR01)",
                "----Tekirdag (TKD01)",
            ]
        );
    }

    #[test]
    fn deep_chain_does_not_recurse() {
        let mut topology = RouteTopology::new("n0", "0");
        let mut parent = topology.root();
        for i in 1..=10_000 {
            parent = topology.add_child(parent, format!("n{i}"), i.to_string()).unwrap();
        }
        assert_eq!(topology.depth_of("N10000"), Some(10_000));
    }
}
