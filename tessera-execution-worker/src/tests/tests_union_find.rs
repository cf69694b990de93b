// Copyright (c) 2025 TESSERA LABS <info@tessera.network>

use crate::union_find::UnionFind;

#[test]
fn test_make_set_yields_distinct_roots() {
    let mut union_find = UnionFind::new();
    let a = union_find.make_set();
    let b = union_find.make_set();
    let c = union_find.make_set();
    assert_eq!(union_find.find(a), a);
    assert_eq!(union_find.find(b), b);
    assert_ne!(union_find.find(a), union_find.find(b));
    assert_ne!(union_find.find(b), union_find.find(c));
}

#[test]
fn test_union_connects_transitively() {
    let mut union_find = UnionFind::new();
    let a = union_find.make_set();
    let b = union_find.make_set();
    let c = union_find.make_set();
    let d = union_find.make_set();

    union_find.union(a, b);
    union_find.union(b, c);

    assert_eq!(union_find.find(a), union_find.find(c));
    assert_eq!(union_find.find(a), union_find.find(b));
    // d was never unioned and stays apart
    assert_ne!(union_find.find(a), union_find.find(d));
}

#[test]
fn test_union_is_idempotent() {
    let mut union_find = UnionFind::new();
    let a = union_find.make_set();
    let b = union_find.make_set();
    let first = union_find.union(a, b);
    let second = union_find.union(a, b);
    assert_eq!(first, second);
    assert_eq!(union_find.find(a), first);
}

#[test]
fn test_find_is_stable_after_path_compression() {
    let mut union_find = UnionFind::new();
    let nodes: Vec<usize> = (0..16).map(|_| union_find.make_set()).collect();
    for window in nodes.windows(2) {
        union_find.union(window[0], window[1]);
    }
    let root = union_find.find(nodes[0]);
    for &node in &nodes {
        assert_eq!(union_find.find(node), root);
    }
    // repeated finds keep returning the same representative
    assert_eq!(union_find.find(nodes[15]), root);
}
