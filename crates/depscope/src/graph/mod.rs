//! Directed service dependency graph using petgraph.
//!
//! # Graph Representation and Edge Direction Convention
//!
//! The graph uses petgraph's `DiGraph` with edges directed from
//! **dependent to dependency**: `source -> target` means the source
//! service depends on (calls) the target service. A companion
//! `HashMap<String, NodeIndex>` maps service names to graph nodes for
//! O(1) lookups. Cycles are permitted and expected; nothing about an
//! edge `(u, v)` implies anything about `(v, u)`.
//!
//! # Traversal Order
//!
//! Reachability results are sets, not sequences. The order in which
//! successors of a node are explored is an explicit **non-guarantee**:
//! it falls out of petgraph's internal edge ordering and must not be
//! relied upon. Callers needing deterministic output sort the result
//! themselves.

use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{HashMap, HashSet};

/// A directed graph of service dependencies.
///
/// Nodes are service names; an edge `source -> target` records that the
/// source depends on the target. The graph grows monotonically through
/// [`ServiceGraph::add_dependency`] and is emptied only by an explicit
/// [`ServiceGraph::clear`].
#[derive(Debug, Default)]
pub struct ServiceGraph {
    /// Dependency edges. Latency lives on events, not edges: traversal
    /// never consults a weight, so edges carry none.
    graph: DiGraph<String, ()>,

    /// Mapping from service name to graph NodeIndex.
    ///
    /// Every node in `self.graph` has a corresponding entry here.
    node_map: HashMap<String, NodeIndex>,
}

impl ServiceGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the node for a service, inserting it if absent.
    fn ensure_node(&mut self, name: &str) -> NodeIndex {
        if let Some(&node) = self.node_map.get(name) {
            return node;
        }
        let node = self.graph.add_node(name.to_string());
        self.node_map.insert(name.to_string(), node);
        node
    }

    /// Add a dependency edge from `source` to `target`.
    ///
    /// Both services are created if they don't already exist, so an
    /// isolated sink with no outgoing edges is still visible via
    /// [`ServiceGraph::has_service`]. Re-adding an existing edge is a
    /// no-op: the adjacency structure after N identical calls matches
    /// the structure after one.
    pub fn add_dependency(&mut self, source: &str, target: &str) {
        let from = self.ensure_node(source);
        let to = self.ensure_node(target);

        if self.graph.find_edge(from, to).is_none() {
            self.graph.add_edge(from, to, ());
        }
    }

    /// All services transitively reachable from `name`, excluding `name`
    /// itself.
    ///
    /// Unknown services yield an empty set; that is a normal query
    /// outcome, not an error. Traversal is an iterative depth-first
    /// search over outgoing edges with an explicit stack, so cycles
    /// terminate and arbitrarily deep chains cannot overflow the call
    /// stack. Each node is visited at most once per query; the start
    /// node is marked visited up front, which keeps a cycle routing back
    /// to it from re-entering, and is stripped from the result at the
    /// end. Cost is O(V + E) bounded by the reachable component.
    pub fn reachable_services(&self, name: &str) -> HashSet<String> {
        let Some(&start) = self.node_map.get(name) else {
            return HashSet::new();
        };

        let mut visited: HashSet<NodeIndex> = HashSet::new();
        let mut stack: Vec<NodeIndex> = vec![start];
        visited.insert(start);

        while let Some(node) = stack.pop() {
            for neighbor in self.graph.neighbors(node) {
                if visited.insert(neighbor) {
                    stack.push(neighbor);
                }
            }
        }

        visited.remove(&start);
        visited
            .into_iter()
            .map(|node| self.graph[node].clone())
            .collect()
    }

    /// All known service names, as a fresh snapshot.
    ///
    /// Includes every service ever touched as a source or a target,
    /// independent of later graph mutation.
    pub fn all_services(&self) -> HashSet<String> {
        self.node_map.keys().cloned().collect()
    }

    /// Whether `name` is a known service. O(1).
    pub fn has_service(&self, name: &str) -> bool {
        self.node_map.contains_key(name)
    }

    /// A deep, independent snapshot of the adjacency structure.
    ///
    /// Every known service appears as a key (services with no outgoing
    /// edges map to an empty set). Mutating the returned map never
    /// affects the graph.
    pub fn adjacency_list(&self) -> HashMap<String, HashSet<String>> {
        self.node_map
            .iter()
            .map(|(name, &node)| {
                let successors = self
                    .graph
                    .neighbors(node)
                    .map(|neighbor| self.graph[neighbor].clone())
                    .collect();
                (name.clone(), successors)
            })
            .collect()
    }

    /// Number of known services. O(1).
    pub fn service_count(&self) -> usize {
        self.node_map.len()
    }

    /// Number of distinct dependency edges. O(1).
    pub fn dependency_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Remove all services and dependencies.
    ///
    /// After clearing, `has_service` returns false for every former
    /// node.
    pub fn clear(&mut self) {
        self.graph.clear();
        self.node_map.clear();
    }
}
