//! Structural checks over the relation graph

use crate::violation::Violation;
use doxa_domain::{Relation, RelationKind, StatementMap};
use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Dfs;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Check the relation graph for entailment cycles and isolated top-level
/// statements
///
/// Cycles are detected on the `entails`-only subgraph: circular reasoning is
/// always invalid, any cycle length including self-loops. Isolation counts
/// incident edges of *any* kind, but only statements marked top-level are
/// flagged -- ordinary premises inside an argument are allowed to have no
/// cross-argument edges.
pub fn check_structure(statements: &StatementMap, relations: &[Relation]) -> Vec<Violation> {
    let mut violations = Vec::new();

    let entails = TitleGraph::from_edges(
        relations
            .iter()
            .filter(|r| r.kind == RelationKind::Entails)
            .map(|r| (r.from.as_str(), r.to.as_str())),
    );
    for cycle in entails.simple_cycles() {
        let mut path = canonical_rotation(cycle);
        path.push(path[0].clone());
        violations.push(Violation::EntailmentCycle { path });
    }

    let mut degree: BTreeMap<&str, usize> =
        statements.keys().map(|title| (title.as_str(), 0)).collect();
    for rel in relations {
        if let Some(d) = degree.get_mut(rel.from.as_str()) {
            *d += 1;
        }
        if let Some(d) = degree.get_mut(rel.to.as_str()) {
            *d += 1;
        }
    }
    for (title, statement) in statements {
        if statement.top_level && degree.get(title.as_str()) == Some(&0) {
            violations.push(Violation::Isolated {
                title: title.clone(),
            });
        }
    }

    violations
}

/// Rotate a cycle so its lexicographically-smallest title comes first,
/// making the report independent of input relation order
fn canonical_rotation(mut nodes: Vec<String>) -> Vec<String> {
    if let Some(min_pos) = nodes
        .iter()
        .enumerate()
        .min_by(|a, b| a.1.cmp(b.1))
        .map(|(i, _)| i)
    {
        nodes.rotate_left(min_pos);
    }
    nodes
}

/// A directed graph over statement titles
///
/// Titles translate to node indices at this boundary only; the algorithms
/// run on the index-based adjacency structure.
pub(crate) struct TitleGraph {
    graph: DiGraph<String, ()>,
    indices: HashMap<String, NodeIndex>,
}

impl TitleGraph {
    /// Build a graph from an edge list; nodes are created on demand
    pub(crate) fn from_edges<'a>(edges: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut g = Self {
            graph: DiGraph::new(),
            indices: HashMap::new(),
        };
        for (from, to) in edges {
            let a = g.ensure_node(from);
            let b = g.ensure_node(to);
            g.graph.add_edge(a, b, ());
        }
        g
    }

    fn ensure_node(&mut self, title: &str) -> NodeIndex {
        if let Some(&idx) = self.indices.get(title) {
            return idx;
        }
        let idx = self.graph.add_node(title.to_string());
        self.indices.insert(title.to_string(), idx);
        idx
    }

    /// Whether the title participates in this graph
    pub(crate) fn contains(&self, title: &str) -> bool {
        self.indices.contains_key(title)
    }

    /// Number of nodes reachable from `title` via outgoing edges, excluding
    /// the node itself
    pub(crate) fn descendant_count(&self, title: &str) -> usize {
        let Some(&start) = self.indices.get(title) else {
            return 0;
        };
        let mut dfs = Dfs::new(&self.graph, start);
        let mut count = 0;
        while dfs.next(&self.graph).is_some() {
            count += 1;
        }
        count - 1
    }

    /// Enumerate all simple cycles, each exactly once
    ///
    /// Within each strongly connected component, cycles are enumerated by
    /// DFS from each node in index order, restricted to nodes not yet used
    /// as a start -- so every simple cycle is found exactly once, when the
    /// start is its minimal node.
    pub(crate) fn simple_cycles(&self) -> Vec<Vec<String>> {
        let mut cycles = Vec::new();
        for scc in tarjan_scc(&self.graph) {
            let mut order = scc;
            order.sort();
            for (i, &start) in order.iter().enumerate() {
                let allowed: HashSet<NodeIndex> = order[i..].iter().copied().collect();
                let mut path = vec![start];
                let mut on_path: HashSet<NodeIndex> = [start].into_iter().collect();
                self.cycles_from(start, start, &allowed, &mut path, &mut on_path, &mut cycles);
            }
        }
        // Deterministic reporting order regardless of graph construction
        cycles.sort();
        cycles
    }

    fn cycles_from(
        &self,
        current: NodeIndex,
        start: NodeIndex,
        allowed: &HashSet<NodeIndex>,
        path: &mut Vec<NodeIndex>,
        on_path: &mut HashSet<NodeIndex>,
        cycles: &mut Vec<Vec<String>>,
    ) {
        for next in self.graph.neighbors(current) {
            if next == start {
                cycles.push(path.iter().map(|&n| self.graph[n].clone()).collect());
            } else if allowed.contains(&next) && !on_path.contains(&next) {
                path.push(next);
                on_path.insert(next);
                self.cycles_from(next, start, allowed, path, on_path, cycles);
                path.pop();
                on_path.remove(&next);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doxa_domain::Statement;

    fn statements(titles: &[(&str, bool)]) -> StatementMap {
        titles
            .iter()
            .map(|(title, top_level)| {
                let mut s = Statement::new(*title);
                s.top_level = *top_level;
                (title.to_string(), s)
            })
            .collect()
    }

    fn entails(from: &str, to: &str) -> Relation {
        Relation::new(from, to, RelationKind::Entails)
    }

    #[test]
    fn test_two_node_cycle_reported_once() {
        let statements = statements(&[("A", false), ("B", false)]);
        let relations = vec![entails("A", "B"), entails("B", "A")];

        let violations = check_structure(&statements, &relations);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].to_string(), "ENTAILMENT CYCLE: A -> B -> A");
    }

    #[test]
    fn test_cycle_detection_is_order_independent() {
        let statements = statements(&[("A", false), ("B", false), ("C", false)]);
        let forward = vec![entails("A", "B"), entails("B", "C"), entails("C", "A")];
        let backward = vec![entails("C", "A"), entails("B", "C"), entails("A", "B")];

        let a = check_structure(&statements, &forward);
        let b = check_structure(&statements, &backward);
        assert_eq!(a, b);
        assert_eq!(a.len(), 1);
        assert_eq!(a[0].to_string(), "ENTAILMENT CYCLE: A -> B -> C -> A");
    }

    #[test]
    fn test_self_loop_is_a_cycle() {
        let statements = statements(&[("A", false)]);
        let relations = vec![entails("A", "A")];

        let violations = check_structure(&statements, &relations);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].to_string(), "ENTAILMENT CYCLE: A -> A");
    }

    #[test]
    fn test_dag_has_no_cycles() {
        let statements = statements(&[("A", false), ("B", false), ("C", false)]);
        let relations = vec![entails("A", "B"), entails("A", "C"), entails("B", "C")];
        assert!(check_structure(&statements, &relations).is_empty());
    }

    #[test]
    fn test_two_distinct_cycles_both_reported() {
        let statements = statements(&[("A", false), ("B", false), ("C", false)]);
        let relations = vec![
            entails("A", "B"),
            entails("B", "A"),
            entails("B", "C"),
            entails("C", "B"),
        ];

        let violations = check_structure(&statements, &relations);
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_contrary_edges_do_not_form_entailment_cycles() {
        let statements = statements(&[("A", false), ("B", false)]);
        let relations = vec![
            Relation::new("A", "B", RelationKind::Contrary),
            Relation::new("B", "A", RelationKind::Contrary),
        ];
        assert!(check_structure(&statements, &relations).is_empty());
    }

    #[test]
    fn test_isolated_top_level_statement() {
        let statements = statements(&[("Thesis", true), ("A", false), ("B", false)]);
        let relations = vec![entails("A", "B")];

        let violations = check_structure(&statements, &relations);
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].to_string(),
            "ISOLATED: [Thesis] is a top-level statement with no relations"
        );
    }

    #[test]
    fn test_unconnected_premise_is_not_flagged() {
        let statements = statements(&[("Lonely premise", false)]);
        assert!(check_structure(&statements, &[]).is_empty());
    }

    #[test]
    fn test_any_incident_edge_connects_a_top_level_statement() {
        let statements = statements(&[("Thesis", true), ("A", false)]);
        // A contrary edge is enough; kind does not matter for isolation
        let relations = vec![Relation::new("A", "Thesis", RelationKind::Contrary)];
        assert!(check_structure(&statements, &relations).is_empty());
    }

    #[test]
    fn test_descendant_count_excludes_self() {
        let g = TitleGraph::from_edges([("A", "B"), ("B", "C")]);
        assert_eq!(g.descendant_count("A"), 2);
        assert_eq!(g.descendant_count("B"), 1);
        assert_eq!(g.descendant_count("C"), 0);
        assert_eq!(g.descendant_count("missing"), 0);
    }

    #[test]
    fn test_descendant_count_in_cycle() {
        let g = TitleGraph::from_edges([("A", "B"), ("B", "A")]);
        // B is reachable from A; A itself is never counted
        assert_eq!(g.descendant_count("A"), 1);
    }
}
