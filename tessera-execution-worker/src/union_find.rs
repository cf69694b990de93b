// Copyright (c) 2025 TESSERA LABS <info@tessera.network>

//! This file defines a batch-scoped disjoint-set forest.
//!
//! Nodes live in an arena and are addressed by index, which keeps `find` and
//! `union` allocation-free. The structure is created per grouping call and
//! discarded once grouping completes; it is never persisted.

/// A single disjoint-set node
struct Node {
    /// parent index; a root points to itself
    parent: usize,
    /// upper bound of the subtree height rooted here
    rank: u32,
}

/// Arena-indexed union-find structure.
/// Handles returned by `make_set` are plain indexes into the arena.
#[derive(Default)]
pub(crate) struct UnionFind {
    nodes: Vec<Node>,
}

impl UnionFind {
    /// Creates an empty structure
    pub fn new() -> Self {
        Default::default()
    }

    /// Creates a new singleton set and returns its handle
    pub fn make_set(&mut self) -> usize {
        let id = self.nodes.len();
        self.nodes.push(Node { parent: id, rank: 0 });
        id
    }

    /// Finds the representative of the set containing `node`,
    /// compressing the path by halving along the way
    pub fn find(&mut self, mut node: usize) -> usize {
        while self.nodes[node].parent != node {
            let grandparent = self.nodes[self.nodes[node].parent].parent;
            self.nodes[node].parent = grandparent;
            node = grandparent;
        }
        node
    }

    /// Merges the sets containing `a` and `b` (union by rank)
    /// and returns the representative of the merged set
    pub fn union(&mut self, a: usize, b: usize) -> usize {
        let mut root_a = self.find(a);
        let mut root_b = self.find(b);
        if root_a == root_b {
            return root_a;
        }
        if self.nodes[root_a].rank < self.nodes[root_b].rank {
            std::mem::swap(&mut root_a, &mut root_b);
        }
        self.nodes[root_b].parent = root_a;
        if self.nodes[root_a].rank == self.nodes[root_b].rank {
            self.nodes[root_a].rank += 1;
        }
        root_a
    }
}
