use std::collections::BTreeSet;

use schedcop_core::graph::EdgeState;
use schedcop_core::schedule::interleaving_count;
use schedcop_core::{analyze, analyze_operations, EquivalentOrder, SerialOrder, TransactionId};

mod common;

use common::{LOST_UPDATE_T1, LOST_UPDATE_T2};

#[test]
fn read_against_write() {
    let t1 = txn!(T1: r(X));
    let t2 = txn!(T2: w(X));
    let analysis = analyze_operations(&t1, &t2);

    assert_eq!(analysis.len(), 2);

    let first = &analysis.schedules[0];
    assert_eq!(first.schedule.operations, vec![op!(T1, r(X)), op!(T2, w(X))]);
    assert!(first.result.is_serializable());
    assert_eq!(first.result.serial_orders(), &[SerialOrder::T1ThenT2]);

    let second = &analysis.schedules[1];
    assert_eq!(second.schedule.operations, vec![op!(T2, w(X)), op!(T1, r(X))]);
    assert!(second.result.is_serializable());
    assert_eq!(second.result.serial_orders(), &[SerialOrder::T2ThenT1]);

    // different serial orders: not equivalent to each other
    assert!(first.equivalents.is_empty());
    assert!(second.equivalents.is_empty());
}

#[test]
fn disjoint_objects_commute() {
    let t1 = txn!(T1: r(X), w(X));
    let t2 = txn!(T2: r(Y), w(Y));
    let analysis = analyze_operations(&t1, &t2);

    assert_eq!(analysis.len(), 6);
    for analyzed in &analysis {
        assert_eq!(analyzed.graph.state(), EdgeState::Empty);
        assert_eq!(analyzed.result.equivalent_order, EquivalentOrder::Either);
        assert_eq!(
            analyzed.result.serial_orders(),
            &[SerialOrder::T1ThenT2, SerialOrder::T2ThenT1]
        );
        let others: BTreeSet<usize> = (0..6).filter(|i| *i != analyzed.schedule.index).collect();
        assert_eq!(analyzed.equivalents, others);
    }
}

#[test]
fn lost_update_schedule_is_not_serializable() {
    let t1 = txn!(T1: r(X), w(X), r(Y), w(Y));
    let t2 = txn!(T2: r(X), w(X));
    let analysis = analyze_operations(&t1, &t2);

    assert_eq!(analysis.len(), 15);

    let lost_update = &analysis.schedules[9];
    assert_eq!(
        lost_update.schedule.operations,
        vec![
            op!(T1, r(X)),
            op!(T2, r(X)),
            op!(T2, w(X)),
            op!(T1, w(X)),
            op!(T1, r(Y)),
            op!(T1, w(Y)),
        ]
    );
    assert!(lost_update.graph.has_cycle());
    assert!(lost_update.graph.has_edge(TransactionId::T1, TransactionId::T2));
    assert!(lost_update.graph.has_edge(TransactionId::T2, TransactionId::T1));
    assert!(!lost_update.result.is_serializable());
    assert_eq!(lost_update.result.equivalent_order, EquivalentOrder::None);
    assert!(lost_update.equivalents.is_empty());
}

#[test]
fn lost_update_from_raw_statements() {
    let analysis = analyze(&LOST_UPDATE_T1, &LOST_UPDATE_T2).expect("default pair is valid");

    assert_eq!(Some(analysis.len() as u64), interleaving_count(4, 2));
    assert_eq!(analysis.serializable_count(), 7);
    assert!(!analysis.all_serializable());

    let orders: Vec<EquivalentOrder> = analysis
        .iter()
        .map(|analyzed| analyzed.result.equivalent_order)
        .collect();
    let mut expected = vec![EquivalentOrder::T1ThenT2; 6];
    expected.extend([EquivalentOrder::None; 8]);
    expected.push(EquivalentOrder::T2ThenT1);
    assert_eq!(orders, expected);

    // the six T1-first schedules form one class
    assert_eq!(analysis.schedules[0].equivalents, [1, 2, 3, 4, 5].into());
    assert_eq!(analysis.schedules[3].equivalents, [0, 1, 2, 4, 5].into());
    // the single T2-first schedule stands alone
    assert!(analysis.schedules[14].equivalents.is_empty());
    assert!(analysis.schedules[14].result.is_serializable());
}

#[test]
fn serial_schedules_are_first_and_last() {
    let analysis = analyze(&LOST_UPDATE_T1, &LOST_UPDATE_T2).unwrap();

    let first = &analysis.schedules[0].schedule;
    let owners: Vec<TransactionId> = first.operations.iter().map(|op| op.transaction).collect();
    assert_eq!(
        owners,
        [TransactionId::T1; 4]
            .into_iter()
            .chain([TransactionId::T2; 2])
            .collect::<Vec<_>>()
    );

    let last = &analysis.schedules[14].schedule;
    assert_eq!(last.owner_at(1), Some(TransactionId::T2));
    assert_eq!(last.owner_at(2), Some(TransactionId::T2));
    assert_eq!(last.owner_at(3), Some(TransactionId::T1));
}

#[test]
fn write_write_only() {
    let t1 = txn!(T1: w(X), w(Y));
    let t2 = txn!(T2: w(Y), w(X));
    let analysis = analyze_operations(&t1, &t2);

    // Serial orders are the only serializable schedules.
    let serializable: Vec<usize> = analysis
        .iter()
        .filter(|analyzed| analyzed.result.is_serializable())
        .map(|analyzed| analyzed.schedule.index)
        .collect();
    assert_eq!(serializable, vec![0, 5]);
    assert_eq!(
        analysis.schedules[0].result.equivalent_order,
        EquivalentOrder::T1ThenT2
    );
    assert_eq!(
        analysis.schedules[5].result.equivalent_order,
        EquivalentOrder::T2ThenT1
    );
}
