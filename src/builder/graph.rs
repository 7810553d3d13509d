//! Rule graph over declared custom commands.
//!
//! A rule A precedes rule B when A's output is B's trigger or one of B's
//! dependencies. The graph is only a view; it never changes the rules.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use thiserror::Error;

use crate::builder::command::CustomCommand;

/// Errors ordering rules.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("cycle detected between rules producing: {}", outputs.join(", "))]
    Cycle { outputs: Vec<String> },
}

/// Dependency graph of custom commands.
#[derive(Debug)]
pub struct RuleGraph<'a> {
    graph: DiGraph<&'a CustomCommand, ()>,

    /// Output path -> rules declaring it, in declaration order
    producers: BTreeMap<&'a str, Vec<NodeIndex>>,
}

impl<'a> RuleGraph<'a> {
    /// Build the graph from rules in declaration order.
    pub fn new(commands: &'a [CustomCommand]) -> Self {
        let mut graph = DiGraph::new();
        let mut producers: BTreeMap<&'a str, Vec<NodeIndex>> = BTreeMap::new();

        let nodes: Vec<NodeIndex> = commands
            .iter()
            .map(|cmd| {
                let node = graph.add_node(cmd);
                producers.entry(cmd.output.as_str()).or_default().push(node);
                node
            })
            .collect();

        for (cmd, &node) in commands.iter().zip(&nodes) {
            let inputs = std::iter::once(&cmd.trigger).chain(cmd.depends.iter());
            let mut seen = BTreeSet::new();
            for input in inputs {
                let Some(sources) = producers.get(input.as_str()) else {
                    continue;
                };
                for &source in sources {
                    if source != node && seen.insert(source) {
                        graph.add_edge(source, node, ());
                    }
                }
            }
        }

        RuleGraph { graph, producers }
    }

    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Rules that must run before the rules declaring `output`.
    pub fn prerequisites(&self, output: &str) -> Vec<&'a CustomCommand> {
        let Some(nodes) = self.producers.get(output) else {
            return Vec::new();
        };
        let mut found = BTreeSet::new();
        for &node in nodes {
            found.extend(self.graph.neighbors_directed(node, Direction::Incoming));
        }
        found.into_iter().map(|n| self.graph[n]).collect()
    }

    /// Rules in an order that respects every edge. Independent rules keep
    /// declaration order.
    pub fn build_order(&self) -> Result<Vec<&'a CustomCommand>, GraphError> {
        // Kahn's algorithm over a sorted ready set: `Topo` and `toposort` do
        // not pick among ready nodes by declaration order.
        let mut in_degree: HashMap<NodeIndex, usize> = self
            .graph
            .node_indices()
            .map(|n| {
                (
                    n,
                    self.graph.neighbors_directed(n, Direction::Incoming).count(),
                )
            })
            .collect();

        let mut ready: BTreeSet<NodeIndex> = in_degree
            .iter()
            .filter(|(_, &deg)| deg == 0)
            .map(|(&n, _)| n)
            .collect();

        let mut order = Vec::with_capacity(self.graph.node_count());
        while let Some(node) = ready.pop_first() {
            order.push(self.graph[node]);
            for next in self.graph.neighbors_directed(node, Direction::Outgoing) {
                if let Some(deg) = in_degree.get_mut(&next) {
                    *deg -= 1;
                    if *deg == 0 {
                        ready.insert(next);
                    }
                }
            }
        }

        if order.len() < self.graph.node_count() {
            let outputs = tarjan_scc(&self.graph)
                .into_iter()
                .find(|scc| scc.len() > 1)
                .unwrap_or_default()
                .into_iter()
                .map(|n| self.graph[n].output.clone())
                .collect();
            return Err(GraphError::Cycle { outputs });
        }

        Ok(order)
    }

    /// Outputs declared by more than one rule, with their rule count.
    pub fn duplicate_outputs(&self) -> Vec<(&'a str, usize)> {
        self.producers
            .iter()
            .filter(|(_, nodes)| nodes.len() > 1)
            .map(|(&output, nodes)| (output, nodes.len()))
            .collect()
    }
}
