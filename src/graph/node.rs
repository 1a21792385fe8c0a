// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use crate::config::Config;
use crate::routing::canonicalize;

/// Index of a node inside its [`Topology`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A declared component.
    Component,
    /// A routing key flowing between components.
    Edge,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NodeKind::Component => write!(f, "component"),
            NodeKind::Edge => write!(f, "edge"),
        }
    }
}

/// A graph vertex with its ordered children.
#[derive(Debug, Clone)]
pub struct Node {
    kind: NodeKind,
    name: String,
    config: Option<Config>,
    children: Vec<NodeId>,
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Canonical name: sorted, deduplicated dot tokens.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The wrapped document, for component nodes.
    pub fn config(&self) -> Option<&Config> {
        self.config.as_ref()
    }

    /// Whether a component declares a procedure to run. Edges never do.
    pub fn is_defined(&self) -> bool {
        self.config
            .as_ref()
            .and_then(Config::procedure)
            .is_some()
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Arena of nodes built from one set of seeds and configs.
///
/// Nodes are identified by kind plus canonical name, so two edges spelled
/// `b.a` and `a.b` are the same node. Nodes are never removed.
#[derive(Debug, Clone, Default)]
pub struct Topology {
    nodes: Vec<Node>,
    index: HashMap<(NodeKind, String), NodeId>,
    seeds: Vec<NodeId>,
}

impl Topology {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create the edge node for a routing key.
    pub fn edge(&mut self, key: &str) -> NodeId {
        self.intern(NodeKind::Edge, canonicalize(key), None)
    }

    /// Get or create the component node for a config. The first config
    /// registered under a canonical name is the one kept.
    pub fn component(&mut self, config: &Config) -> NodeId {
        self.intern(NodeKind::Component, config.identity(), Some(config))
    }

    fn intern(&mut self, kind: NodeKind, name: String, config: Option<&Config>) -> NodeId {
        if let Some(id) = self.index.get(&(kind, name.clone())) {
            return *id;
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            name: name.clone(),
            config: config.cloned(),
            children: Vec::new(),
        });
        self.index.insert((kind, name), id);
        id
    }

    /// Append `child` to `parent`'s children.
    ///
    /// Children are never removed or deduplicated; a repeat records another
    /// path to the same node. [`Topology::links`] collapses repeats.
    pub fn attach(&mut self, parent: NodeId, child: NodeId) {
        if let Some(node) = self.nodes.get_mut(parent.0) {
            node.children.push(child);
        }
    }

    pub fn add_seed(&mut self, id: NodeId) {
        if !self.seeds.contains(&id) {
            self.seeds.push(id);
        }
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Find a node by kind and name; the name is canonicalized first.
    pub fn find(&self, kind: NodeKind, name: &str) -> Option<&Node> {
        self.index
            .get(&(kind, canonicalize(name)))
            .and_then(|id| self.get(*id))
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    pub fn seeds(&self) -> impl Iterator<Item = &Node> {
        self.seeds.iter().filter_map(|id| self.get(*id))
    }

    pub fn children<'a>(&'a self, node: &'a Node) -> impl Iterator<Item = &'a Node> + 'a {
        node.children.iter().filter_map(|id| self.get(*id))
    }

    /// Unique parent to child name pairs, excluding self-links, sorted.
    ///
    /// A pattern edge that canonicalizes to the same name as the key it
    /// hangs under would otherwise draw a loop.
    pub fn links(&self) -> Vec<(String, String)> {
        let mut links = BTreeSet::new();
        for node in &self.nodes {
            for child in self.children(node) {
                if node.name != child.name {
                    links.insert((node.name.clone(), child.name.clone()));
                }
            }
        }
        links.into_iter().collect()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config(name: &str) -> Config {
        Config::from_value(json!({ "name": name })).unwrap()
    }

    #[test]
    fn test_nodes_are_interned_by_kind_and_canonical_name() {
        let mut topology = Topology::new();

        let first = topology.edge("b.a");
        let second = topology.edge("a.b.a");
        assert_eq!(first, second);

        let component = topology.component(&config("a.b"));
        assert_ne!(component, first);
        assert_eq!(topology.len(), 2);

        assert_eq!(topology.find(NodeKind::Edge, "b.a").unwrap().name(), "a.b");
        assert!(topology.find(NodeKind::Component, "b.a").unwrap().config().is_some());
    }

    #[test]
    fn test_attach_appends_in_order_with_repeats() {
        let mut topology = Topology::new();
        let root = topology.edge("root");
        let x = topology.edge("x");
        let y = topology.edge("y");

        topology.attach(root, y);
        topology.attach(root, x);
        topology.attach(root, y);

        let names: Vec<_> = topology
            .children(topology.get(root).unwrap())
            .map(Node::name)
            .collect();
        assert_eq!(names, vec!["y", "x", "y"]);
        assert_eq!(
            topology.links(),
            vec![
                ("root".to_string(), "x".to_string()),
                ("root".to_string(), "y".to_string()),
            ]
        );
    }

    #[test]
    fn test_links_skip_self_pairs() {
        let mut topology = Topology::new();
        let seed = topology.edge("text");
        let component = topology.component(&config("text"));
        let pattern = topology.edge("text");

        topology.attach(seed, pattern);
        topology.attach(pattern, component);

        assert!(topology.links().is_empty());

        let out = topology.edge("out");
        topology.attach(component, out);
        assert_eq!(
            topology.links(),
            vec![("text".to_string(), "out".to_string())]
        );
    }

    #[test]
    fn test_is_defined() {
        let mut topology = Topology::new();
        let defined = Config::from_value(json!({
            "name": "upper",
            "shell": {"procedure": "change_text_case_upper"}
        }))
        .unwrap();

        let component = topology.component(&defined);
        let edge = topology.edge("upper.done");
        assert!(topology.get(component).unwrap().is_defined());
        assert!(!topology.get(edge).unwrap().is_defined());
    }
}
