// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Canonical ordering of workflow statuses.
//!
//! Every observed transition contributes a weighted edge `from -> to` to a
//! [`StatusGraph`]. Real workflows contain loops (rework, reopen), so cycles
//! are broken by repeatedly dropping the least travelled edge of each cycle
//! until the graph is acyclic. The topological order of what remains is the
//! canonical status order.

use std::collections::{BTreeSet, HashMap};

use crate::issue::{HierarchyLevel, Issue, StatusCategory, TransitionStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Edge {
    to: usize,
    weight: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    Active,
    Finished,
}

/// Directed graph of status names weighted by transition counts.
///
/// Nodes and edges keep their discovery order so that cycle breaking and
/// the topological sort are deterministic.
#[derive(Debug, Clone, Default)]
pub struct StatusGraph {
    nodes: Vec<String>,
    index: HashMap<String, usize>,
    edges: Vec<Vec<Edge>>,
}

impl StatusGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the graph from every transition of every issue.
    ///
    /// Self loops (produced when issues move between projects) and the
    /// synthetic creation transition opening each timeline are not counted
    /// as edges.
    pub fn from_issues<'a>(issues: impl IntoIterator<Item = &'a Issue>) -> Self {
        let mut graph = StatusGraph::new();
        for issue in issues {
            let mut transitions = issue.transitions.iter();
            if let Some(opening) = transitions.next() {
                graph.add_node(&opening.to_status.name);
            }
            for transition in transitions {
                graph.add_edge(&transition.from_status.name, &transition.to_status.name);
            }
        }
        graph
    }

    /// Adds a node if not yet present and returns its index.
    pub fn add_node(&mut self, name: &str) -> usize {
        if let Some(&idx) = self.index.get(name) {
            return idx;
        }
        let idx = self.nodes.len();
        self.nodes.push(name.to_string());
        self.index.insert(name.to_string(), idx);
        self.edges.push(Vec::new());
        idx
    }

    /// Records one transition from `from` to `to`, incrementing the edge weight.
    pub fn add_edge(&mut self, from: &str, to: &str) {
        let from = self.add_node(from);
        let to = self.add_node(to);
        if from == to {
            return;
        }
        match self.edges[from].iter_mut().find(|edge| edge.to == to) {
            Some(edge) => edge.weight += 1,
            None => self.edges[from].push(Edge { to, weight: 1 }),
        }
    }

    /// Node names in discovery order.
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }

    fn weight_at(&self, from: usize, to: usize) -> Option<u32> {
        self.edges[from]
            .iter()
            .find(|edge| edge.to == to)
            .map(|edge| edge.weight)
    }

    fn remove_edge_at(&mut self, from: usize, to: usize) {
        self.edges[from].retain(|edge| edge.to != to);
    }

    fn find_cycle_indices(&self) -> Vec<Vec<usize>> {
        let mut marks = vec![Mark::Unvisited; self.nodes.len()];
        let mut stack = Vec::new();
        let mut cycles = Vec::new();
        for node in 0..self.nodes.len() {
            if marks[node] == Mark::Unvisited {
                self.visit(node, &mut marks, &mut stack, &mut cycles);
            }
        }
        cycles
    }

    fn visit(
        &self,
        node: usize,
        marks: &mut [Mark],
        stack: &mut Vec<usize>,
        cycles: &mut Vec<Vec<usize>>,
    ) {
        marks[node] = Mark::Active;
        stack.push(node);
        for edge in &self.edges[node] {
            match marks[edge.to] {
                Mark::Unvisited => self.visit(edge.to, marks, stack, cycles),
                Mark::Active => {
                    if let Some(start) = stack.iter().position(|&n| n == edge.to) {
                        cycles.push(stack[start..].to_vec());
                    }
                }
                Mark::Finished => {}
            }
        }
        stack.pop();
        marks[node] = Mark::Finished;
    }

    /// Removes the lowest weight edge of every cycle until none remain.
    ///
    /// Ties go to the first edge in cycle order. Returns the removed edges
    /// as `(from, to)` name pairs, in removal order.
    pub fn break_cycles(&mut self) -> Vec<(String, String)> {
        let mut removed = Vec::new();
        // Each round removes at least one edge.
        for _ in 0..=self.edge_count() {
            let cycles = self.find_cycle_indices();
            if cycles.is_empty() {
                break;
            }
            for cycle in cycles {
                let Some((from, to)) = self.weakest_edge(&cycle) else {
                    // Already broken by an earlier removal this round.
                    continue;
                };
                tracing::debug!(
                    from = %self.nodes[from],
                    to = %self.nodes[to],
                    "removing edge to break status cycle"
                );
                self.remove_edge_at(from, to);
                removed.push((self.nodes[from].clone(), self.nodes[to].clone()));
            }
        }
        removed
    }

    /// Returns the lowest weight edge of an intact cycle, or None if any of
    /// its edges has already been removed.
    fn weakest_edge(&self, cycle: &[usize]) -> Option<(usize, usize)> {
        let mut weakest: Option<(usize, usize, u32)> = None;
        for (i, &from) in cycle.iter().enumerate() {
            let to = cycle[(i + 1) % cycle.len()];
            let weight = self.weight_at(from, to)?;
            match weakest {
                Some((_, _, lowest)) if lowest <= weight => {}
                _ => weakest = Some((from, to, weight)),
            }
        }
        weakest.map(|(from, to, _)| (from, to))
    }

    /// Returns node names in topological order.
    ///
    /// Among nodes that are ready at the same time, the earliest discovered
    /// comes first. Nodes left over by a remaining cycle are appended in
    /// discovery order so the result always lists every node once.
    pub fn topological_order(&self) -> Vec<String> {
        let mut in_degree = vec![0usize; self.nodes.len()];
        for edges in &self.edges {
            for edge in edges {
                in_degree[edge.to] += 1;
            }
        }

        let mut ready: BTreeSet<usize> = (0..self.nodes.len())
            .filter(|&n| in_degree[n] == 0)
            .collect();
        let mut emitted = vec![false; self.nodes.len()];
        let mut order = Vec::with_capacity(self.nodes.len());

        while let Some(node) = ready.pop_first() {
            emitted[node] = true;
            order.push(self.nodes[node].clone());
            for edge in &self.edges[node] {
                in_degree[edge.to] -= 1;
                if in_degree[edge.to] == 0 {
                    ready.insert(edge.to);
                }
            }
        }

        for (node, name) in self.nodes.iter().enumerate() {
            if !emitted[node] {
                order.push(name.clone());
            }
        }
        order
    }
}

#[cfg(test)]
impl StatusGraph {
    /// Weight of the edge `from -> to`, if present.
    fn weight(&self, from: &str, to: &str) -> Option<u32> {
        let from = *self.index.get(from)?;
        let to = *self.index.get(to)?;
        self.weight_at(from, to)
    }

    /// Cycles found through depth-first back edges, as node names in
    /// traversal order. Empty iff the graph is acyclic, though not every
    /// elementary cycle is necessarily listed.
    fn find_cycles(&self) -> Vec<Vec<String>> {
        self.find_cycle_indices()
            .into_iter()
            .map(|cycle| cycle.into_iter().map(|n| self.nodes[n].clone()).collect())
            .collect()
    }

    fn is_acyclic(&self) -> bool {
        self.find_cycle_indices().is_empty()
    }
}

/// Returns the canonical ordering of every status observed in `issues`.
pub fn sort_statuses(issues: &[Issue]) -> Vec<String> {
    let mut graph = StatusGraph::from_issues(issues);
    let removed = graph.break_cycles();
    tracing::debug!(
        statuses = graph.nodes().len(),
        removed = removed.len(),
        "sorted statuses"
    );
    graph.topological_order()
}

/// Returns the canonical statuses of one hierarchy level with their
/// categories, in canonical order.
pub fn canonical_statuses(issues: &[Issue], level: HierarchyLevel) -> Vec<TransitionStatus> {
    let level_issues: Vec<&Issue> = issues
        .iter()
        .filter(|issue| issue.hierarchy_level == level)
        .collect();

    let mut categories: HashMap<&str, StatusCategory> = HashMap::new();
    for issue in &level_issues {
        for (i, transition) in issue.transitions.iter().enumerate() {
            categories.insert(&transition.to_status.name, transition.to_status.category);
            if i > 0 {
                categories
                    .entry(&transition.from_status.name)
                    .or_insert(transition.from_status.category);
            }
        }
        categories.insert(&issue.status, issue.status_category);
    }

    let mut graph = StatusGraph::from_issues(level_issues.iter().copied());
    graph.break_cycles();
    graph
        .topological_order()
        .into_iter()
        .map(|name| {
            let category = categories
                .get(name.as_str())
                .copied()
                .unwrap_or(StatusCategory::ToDo);
            TransitionStatus::new(name, category)
        })
        .collect()
}

#[cfg(test)]
#[path = "ordering_tests.rs"]
mod tests;
