//! Properties of the split that must hold across the whole input domain.

use wesplit_core::split::{compute, compute_for_selection, split_check};
use wesplit_core::{CheckAmount, PeopleCount, SplitSession, TipPercentage};

const AMOUNTS: [f64; 9] = [0.0, 0.01, 1.0, 12.34, 49.99, 100.0, 333.33, 1234.56, 10_000.0];

#[test]
fn outputs_are_non_negative_and_cover_the_check() {
    for amount in AMOUNTS {
        let check = CheckAmount::new(amount).unwrap();
        for tip in TipPercentage::domain() {
            for people in PeopleCount::domain() {
                let split = split_check(check, tip, people);
                assert!(split.amount_per_person >= 0.0, "{amount} {tip} {people}");
                assert!(split.total_with_tip >= amount, "{amount} {tip} {people}");
            }
        }
    }
}

#[test]
fn shares_add_back_up_to_the_total() {
    for amount in AMOUNTS {
        for tip in TipPercentage::domain() {
            for people in PeopleCount::domain() {
                let split = compute(amount, f64::from(tip.points()), f64::from(people.get()));
                let reassembled = split.amount_per_person * f64::from(people.get());
                assert!(
                    (reassembled - split.total_with_tip).abs() < 1e-9,
                    "{amount} {tip} {people}: {reassembled} vs {}",
                    split.total_with_tip
                );
            }
        }
    }
}

#[test]
fn zero_tip_leaves_the_check_unchanged() {
    for amount in AMOUNTS {
        for people in PeopleCount::domain() {
            let split = compute(amount, 0.0, f64::from(people.get()));
            assert_eq!(split.total_with_tip, amount);
            assert_eq!(split.tip_value, 0.0);
        }
    }
}

#[test]
fn compute_is_idempotent() {
    for amount in AMOUNTS {
        let first = compute(amount, 18.0, 3.0);
        let second = compute(amount, 18.0, 3.0);
        assert_eq!(first, second);
    }
}

#[test]
fn picker_index_and_count_agree() {
    for (index, people) in PeopleCount::domain().enumerate() {
        let by_index = compute_for_selection(120.0, 15, index as u32);
        let by_count = compute(120.0, 15.0, f64::from(people.get()));
        assert_eq!(by_index, by_count);
    }

    // First picker entry is two people, never zero
    assert_eq!(compute_for_selection(80.0, 0, 0).amount_per_person, 40.0);
}

#[test]
fn documented_scenarios() {
    let split = compute(0.0, 20.0, 2.0);
    assert_eq!((split.total_with_tip, split.amount_per_person), (0.0, 0.0));

    let split = compute(100.0, 20.0, 4.0);
    assert_eq!(split.tip_value, 20.0);
    assert_eq!((split.total_with_tip, split.amount_per_person), (120.0, 30.0));

    let split = compute(50.0, 0.0, 2.0);
    assert_eq!((split.total_with_tip, split.amount_per_person), (50.0, 25.0));
}

#[test]
fn session_walkthrough() {
    let mut session = SplitSession::new();
    session.set_check_amount_text("$100.00").unwrap();
    session.set_people_selection(2).unwrap();

    assert_eq!(session.people().to_string(), "4 people");
    assert_eq!(session.total_with_tip(), 120.0);
    assert_eq!(session.amount_per_person(), 30.0);
}
