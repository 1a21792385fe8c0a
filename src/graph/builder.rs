// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashSet;
use std::time::Instant;

use crate::config::Config;
use crate::graph::node::{NodeId, Topology};
use crate::observability::messages::graph::{
    EmptyDerivedKey, ExpansionRevisited, GraphBuildCompleted, GraphBuildStarted,
};
use crate::observability::messages::StructuredLog;
use crate::routing::{derive, Pattern, RoutingKey};

/// Derives a [`Topology`] by expanding edges against every config.
///
/// An edge is offered to a config at most once: the builder remembers each
/// (edge, config) pair it has expanded. Derived keys only ever draw tokens
/// from the seeds and the declared output patterns, so the number of pairs
/// is finite and expansion always terminates, even when components feed
/// each other.
pub struct GraphBuilder<'a> {
    configs: &'a [Config],
    topology: Topology,
    visited: HashSet<(NodeId, usize)>,
}

impl<'a> GraphBuilder<'a> {
    pub fn new(configs: &'a [Config]) -> Self {
        Self {
            configs,
            topology: Topology::new(),
            visited: HashSet::new(),
        }
    }

    /// Register a seed key and expand it against every config.
    pub fn seed(&mut self, key: &str) -> NodeId {
        let edge = self.topology.edge(key);
        self.topology.add_seed(edge);
        for index in 0..self.configs.len() {
            self.build(edge, index);
        }
        edge
    }

    /// Offer `out_edge` to the config at `index`.
    ///
    /// For each input pattern of the config matching the edge, the pattern
    /// edge is hung under `out_edge` and the component under the pattern
    /// edge. Each output pattern then yields a derived key that is expanded
    /// against every config in turn.
    pub fn build(&mut self, out_edge: NodeId, index: usize) {
        let configs = self.configs;
        let Some(config) = configs.get(index) else {
            return;
        };
        let Some(out_key) = self.topology.get(out_edge).map(|node| node.name().to_string()) else {
            return;
        };

        if !self.visited.insert((out_edge, index)) {
            ExpansionRevisited {
                edge: &out_key,
                component: config.name(),
            }
            .log();
            return;
        }

        let trigger = RoutingKey::parse(&out_key);
        for pattern in config.input_patterns() {
            if !pattern.matches(&trigger) {
                continue;
            }

            let in_edge = self.topology.edge(pattern.raw());
            self.topology.attach(out_edge, in_edge);

            let component = self.topology.component(config);
            self.topology.attach(in_edge, component);

            for output in config.output_keys() {
                self.expand_output(component, config, output, &trigger, pattern);
            }
        }
    }

    fn expand_output(
        &mut self,
        component: NodeId,
        config: &Config,
        output: &str,
        trigger: &RoutingKey,
        pattern: &Pattern,
    ) {
        let derived = derive(output, trigger, pattern);
        if derived.is_empty() {
            EmptyDerivedKey {
                component: config.name(),
                pattern: output,
            }
            .log();
            return;
        }

        let outbound = self.topology.edge(&derived);
        for index in 0..self.configs.len() {
            self.build(outbound, index);
        }

        let target = if derived != output {
            let interim = self.topology.edge(output);
            self.topology.attach(interim, outbound);
            interim
        } else {
            outbound
        };
        self.topology.attach(component, target);
    }

    pub fn finish(self) -> Topology {
        self.topology
    }
}

/// Build the topology reachable from `seeds` over `configs`.
pub fn build_topology<S: AsRef<str>>(seeds: &[S], configs: &[Config]) -> Topology {
    GraphBuildStarted {
        seed_count: seeds.len(),
        config_count: configs.len(),
    }
    .log();
    let started = Instant::now();

    let mut builder = GraphBuilder::new(configs);
    for seed in seeds {
        builder.seed(seed.as_ref());
    }
    let topology = builder.finish();

    GraphBuildCompleted {
        node_count: topology.len(),
        link_count: topology.links().len(),
        duration: started.elapsed(),
    }
    .log();

    topology
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::NodeKind;
    use serde_json::json;

    fn component(name: &str, inputs: &[&str], outputs: &[&str]) -> Config {
        Config::from_value(json!({
            "name": name,
            "input": {"keys": inputs},
            "output": {"keys": outputs}
        }))
        .unwrap()
    }

    fn link(parent: &str, child: &str) -> (String, String) {
        (parent.to_string(), child.to_string())
    }

    fn child_names(topology: &Topology, kind: NodeKind, name: &str) -> Vec<String> {
        let node = topology.find(kind, name).unwrap();
        topology
            .children(node)
            .map(|child| format!("{}:{}", child.kind(), child.name()))
            .collect()
    }

    #[test]
    fn test_wildcard_output_with_empty_difference() {
        let configs = vec![
            component("A", &["seed"], &["r.?"]),
            component("B", &["r"], &[]),
        ];

        let topology = build_topology(&["seed"], &configs);

        // seed -> A -> "?.r" (literal pattern) -> "r" (derived) -> B
        assert_eq!(
            topology.links(),
            vec![
                link("?.r", "r"),
                link("A", "?.r"),
                link("r", "B"),
                link("seed", "A"),
            ]
        );
        assert_eq!(
            child_names(&topology, NodeKind::Component, "A"),
            vec!["edge:?.r"]
        );
        assert_eq!(child_names(&topology, NodeKind::Edge, "?.r"), vec!["edge:r"]);
    }

    #[test]
    fn test_wildcard_carries_unmatched_tokens() {
        let configs = vec![
            component("upper", &["text.~upper"], &["upper.?"]),
            component("audit", &["en.upper"], &[]),
        ];

        let topology = build_topology(&["text.en"], &configs);
        let links = topology.links();

        assert!(links.contains(&link("en.text", "text.~upper")));
        assert!(links.contains(&link("text.~upper", "upper")));
        assert!(links.contains(&link("?.upper", "en.upper")));
        assert!(links.contains(&link("en.upper", "audit")));
    }

    #[test]
    fn test_negated_token_blocks_match() {
        let configs = vec![component("upper", &["text.~upper"], &["upper"])];

        let topology = build_topology(&["text.upper"], &configs);

        assert!(topology.find(NodeKind::Component, "upper").is_none());
        assert!(topology.links().is_empty());
    }

    #[test]
    fn test_literal_output_needs_no_interim_edge() {
        let configs = vec![
            component("first", &["go"], &["done"]),
            component("second", &["done"], &[]),
        ];

        let topology = build_topology(&["go"], &configs);

        assert_eq!(
            child_names(&topology, NodeKind::Component, "first"),
            vec!["edge:done"]
        );
        assert!(topology.links().contains(&link("done", "second")));
    }

    #[test]
    fn test_each_matching_input_pattern_attaches_outputs_again() {
        let configs = vec![component("both", &["a", "b"], &["out"])];

        let topology = build_topology(&["a.b"], &configs);

        assert_eq!(
            child_names(&topology, NodeKind::Component, "both"),
            vec!["edge:out", "edge:out"]
        );
        assert_eq!(
            child_names(&topology, NodeKind::Edge, "a.b"),
            vec!["edge:a", "edge:b"]
        );
        assert_eq!(
            topology.links(),
            vec![
                link("a", "both"),
                link("a.b", "a"),
                link("a.b", "b"),
                link("b", "both"),
                link("both", "out"),
            ]
        );
    }

    #[test]
    fn test_empty_derived_key_produces_no_edge() {
        let configs = vec![component("sink", &["x"], &["?"])];

        let topology = build_topology(&["x"], &configs);

        assert!(child_names(&topology, NodeKind::Component, "sink").is_empty());
    }

    #[test]
    fn test_mutual_references_terminate() {
        let configs = vec![
            component("ping", &["ping"], &["pong"]),
            component("pong", &["pong"], &["ping"]),
        ];

        let topology = build_topology(&["ping"], &configs);

        assert!(topology.find(NodeKind::Component, "ping").is_some());
        assert!(topology.find(NodeKind::Component, "pong").is_some());
        assert_eq!(
            child_names(&topology, NodeKind::Component, "pong"),
            vec!["edge:ping"]
        );
    }

    #[test]
    fn test_self_feeding_wildcard_terminates() {
        let configs = vec![component("grow", &["a"], &["a.b.?"])];

        let topology = build_topology(&["a.c"], &configs);

        // a.c -> grow -> a.b.c -> grow -> a.b.c (revisited)
        assert!(topology.find(NodeKind::Edge, "a.b.c").is_some());
        assert!(topology.seeds().any(|seed| seed.name() == "a.c"));
    }

    #[test]
    fn test_seeds_are_recorded_once() {
        let configs = vec![component("a", &["k"], &[])];

        let topology = build_topology(&["k", "k"], &configs);

        assert_eq!(topology.seeds().count(), 1);
    }
}
