// Copyright (c) 2025 TESSERA LABS <info@tessera.network>

use super::mock::{transaction_id, write_set};
use crate::merge::merge_group_results;
use tessera_execution_exports::{ExecutionReturnSet, ExecutionStatus};

#[test]
fn test_disjoint_groups_all_merge() {
    let group_results = vec![
        vec![
            ExecutionReturnSet::mined(transaction_id(1), write_set(&[("a", b"1")])),
            ExecutionReturnSet::mined(transaction_id(2), write_set(&[("b", b"2")])),
        ],
        vec![ExecutionReturnSet::mined(
            transaction_id(3),
            write_set(&[("c", b"3")]),
        )],
    ];
    let outcome = merge_group_results(group_results);

    assert_eq!(outcome.return_sets.len(), 3);
    assert!(outcome.conflicting.is_empty());
    assert_eq!(
        outcome.written_keys,
        ["a", "b", "c"].iter().map(|k| k.to_string()).collect()
    );
    assert_eq!(outcome.block_state_set.changes.len(), 3);
    assert_eq!(
        outcome.block_state_set.changes.get("b"),
        Some(&b"2".to_vec())
    );
}

#[test]
fn test_overlapping_group_is_dropped_wholesale() {
    let group_results = vec![
        vec![ExecutionReturnSet::mined(
            transaction_id(1),
            write_set(&[("x", b"first")]),
        )],
        // both members are dropped, even the one not touching "x"
        vec![
            ExecutionReturnSet::mined(transaction_id(2), write_set(&[("x", b"second")])),
            ExecutionReturnSet::mined(transaction_id(3), write_set(&[("y", b"3")])),
        ],
    ];
    let outcome = merge_group_results(group_results);

    assert_eq!(outcome.return_sets.len(), 1);
    assert_eq!(outcome.return_sets[0].transaction_id, transaction_id(1));
    assert_eq!(outcome.conflicting.len(), 2);
    assert!(outcome
        .conflicting
        .iter()
        .all(|set| set.status == ExecutionStatus::Conflict));

    // the first group's value for "x" survives, the dropped group left no trace
    assert_eq!(
        outcome.block_state_set.changes.get("x"),
        Some(&b"first".to_vec())
    );
    assert!(!outcome.block_state_set.changes.contains_key("y"));
    assert!(!outcome.written_keys.contains("y"));
}

#[test]
fn test_delete_conflicts_like_a_write() {
    let mut deleting = write_set(&[]);
    deleting.delete("k".to_string());
    let group_results = vec![
        vec![ExecutionReturnSet::mined(transaction_id(1), deleting)],
        vec![ExecutionReturnSet::mined(
            transaction_id(2),
            write_set(&[("k", b"late")]),
        )],
    ];
    let outcome = merge_group_results(group_results);

    assert_eq!(outcome.return_sets.len(), 1);
    assert_eq!(outcome.conflicting.len(), 1);
    assert!(outcome.block_state_set.deletes.contains("k"));
    assert!(!outcome.block_state_set.changes.contains_key("k"));
}

#[test]
fn test_merge_is_deterministic_for_a_given_group_order() {
    let build = || {
        vec![
            vec![ExecutionReturnSet::mined(
                transaction_id(1),
                write_set(&[("x", b"1")]),
            )],
            vec![ExecutionReturnSet::mined(
                transaction_id(2),
                write_set(&[("x", b"2")]),
            )],
        ]
    };
    let first = merge_group_results(build());
    let second = merge_group_results(build());

    assert_eq!(first.return_sets, second.return_sets);
    assert_eq!(first.conflicting, second.conflicting);
    assert_eq!(first.block_state_set, second.block_state_set);
}

#[test]
fn test_later_delete_overrides_earlier_change_in_block_state() {
    let mut deleting = write_set(&[]);
    deleting.delete("k".to_string());
    // same group, so no conflict: the delete lands after the write
    let group_results = vec![vec![
        ExecutionReturnSet::mined(transaction_id(1), write_set(&[("k", b"v")])),
        ExecutionReturnSet::mined(transaction_id(2), deleting),
    ]];
    let outcome = merge_group_results(group_results);

    assert!(outcome.conflicting.is_empty());
    assert!(outcome.block_state_set.deletes.contains("k"));
    assert!(!outcome.block_state_set.changes.contains_key("k"));
}
