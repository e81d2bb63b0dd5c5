//! Sorting and searching over shipment collections.
//!
//! Both routines are stateless and work on plain slices / vectors, so the
//! batch views can feed them whatever they collected from the histories.
//!
//! Design:
//! - `sort_by_duration` is a top-down merge sort that owns its input. Each
//!   level moves the elements into a new `Vec` instead of shuffling indices
//!   in place, so no shipment is cloned.
//! - `search_by_identifier` compares ids as text, the same order
//!   `ShipmentId` derives. "100" sorts before "99".
//! - The search does not check its precondition. `sort_by_identifier`
//!   establishes it and `Courier::find_delivered` always calls it first.
//!
//! # Learning points
//! - `Vec::split_off` to hand each half its own allocation
//! - `Peekable` to look at both fronts before deciding which to take
//! - half-open `[low, high)` bounds with `low + (high - low) / 2`

use crate::domain::Shipment;

/// Stable merge sort, ascending by delivery duration.
///
/// Splits at the midpoint, sorts each half, then merges by taking the
/// smaller front element; on equal durations the left half wins, which
/// keeps the input order among ties. O(n log n) time, O(n) extra space.
///
/// # Design note
/// Stability rests on the `<=` in `merge`. With `<` a right-half element
/// of equal duration would jump ahead of a left-half one.
///
/// Example, input as (id, duration):
/// - (a, 2) (b, 1) (c, 2) (d, 0)
/// - split: [(a, 2) (b, 1)] [(c, 2) (d, 0)]
/// - halves sorted: [(b, 1) (a, 2)] [(d, 0) (c, 2)]
/// - merged: (d, 0) (b, 1) (a, 2) (c, 2)
pub fn sort_by_duration(mut shipments: Vec<Shipment>) -> Vec<Shipment> {
    if shipments.len() <= 1 {
        return shipments;
    }
    let right = shipments.split_off(shipments.len() / 2);
    let left = sort_by_duration(shipments);
    let right = sort_by_duration(right);
    merge(left, right)
}

fn merge(left: Vec<Shipment>, right: Vec<Shipment>) -> Vec<Shipment> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => l.duration() <= r.duration(),
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        let next = if take_left { left.next() } else { right.next() };
        merged.extend(next);
    }
    merged
}

/// Binary search by shipment id over a slice sorted ascending by id.
///
/// Ids compare as text. The slice must already be sorted; that is not
/// checked, and on unsorted input the result may be `None` even when a
/// match exists. O(log n).
pub fn search_by_identifier(shipments: &[Shipment], target: &str) -> Option<usize> {
    let mut low = 0;
    let mut high = shipments.len();

    while low < high {
        let mid = low + (high - low) / 2;
        match shipments[mid].id().as_str().cmp(target) {
            std::cmp::Ordering::Equal => return Some(mid),
            std::cmp::Ordering::Less => low = mid + 1,
            std::cmp::Ordering::Greater => high = mid,
        }
    }
    None
}

/// Stable sort by id, the precondition of `search_by_identifier`.
pub fn sort_by_identifier(shipments: &mut [Shipment]) {
    shipments.sort_by(|a, b| a.id().cmp(b.id()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{IssueDate, ShipmentId};
    use rstest::rstest;

    fn shipment(id: &str, duration: u32) -> Shipment {
        Shipment::new(
            ShipmentId::new(id),
            IssueDate::parse("20240101").unwrap(),
            false,
            duration,
            "Bursa",
        )
    }

    fn durations(shipments: &[Shipment]) -> Vec<u32> {
        shipments.iter().map(Shipment::duration).collect()
    }

    fn ids(shipments: &[Shipment]) -> Vec<&str> {
        shipments.iter().map(|s| s.id().as_str()).collect()
    }

    #[rstest]
    #[case::single(&[4], &[4])]
    #[case::reversed(&[5, 4, 3, 2, 1], &[1, 2, 3, 4, 5])]
    #[case::mixed(&[2, 0, 2, 1, 3, 0], &[0, 0, 1, 2, 2, 3])]
    #[case::already_sorted(&[1, 1, 2, 3], &[1, 1, 2, 3])]
    fn sorts_ascending(#[case] input: &[u32], #[case] expected: &[u32]) {
        let shipments = input
            .iter()
            .enumerate()
            .map(|(i, &d)| shipment(&i.to_string(), d))
            .collect();
        assert_eq!(durations(&sort_by_duration(shipments)), expected);
    }

    #[test]
    fn sorting_nothing_yields_nothing() {
        assert!(sort_by_duration(Vec::new()).is_empty());
    }

    #[test]
    fn sort_is_stable_among_equal_durations() {
        let input = vec![
            shipment("a", 2),
            shipment("b", 1),
            shipment("c", 2),
            shipment("d", 1),
            shipment("e", 2),
        ];
        let sorted = sort_by_duration(input);
        assert_eq!(ids(&sorted), vec!["b", "d", "a", "c", "e"]);
    }

    #[test]
    fn equal_durations_from_both_halves_keep_input_order() {
        // split into [a, b] and [c, d]; a and c tie across the halves
        let input = vec![shipment("a", 2), shipment("b", 1), shipment("c", 2), shipment("d", 0)];
        let sorted = sort_by_duration(input);
        assert_eq!(ids(&sorted), vec!["d", "b", "a", "c"]);
    }

    #[test]
    fn sort_is_idempotent() {
        let input = vec![shipment("a", 3), shipment("b", 1), shipment("c", 3), shipment("d", 0)];
        let once = sort_by_duration(input);
        let twice = sort_by_duration(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn sort_is_a_permutation() {
        let input: Vec<Shipment> = (0..37).map(|i| shipment(&i.to_string(), (i * 7) % 5)).collect();
        let sorted = sort_by_duration(input.clone());

        let mut before = ids(&input);
        let mut after = ids(&sorted);
        before.sort();
        after.sort();
        assert_eq!(before, after);
    }

    #[rstest]
    #[case::first("101", Some(0))]
    #[case::middle("205", Some(2))]
    #[case::last("999", Some(4))]
    #[case::missing_between("150", None)]
    #[case::missing_before("0", None)]
    #[case::missing_after("9999", None)]
    fn binary_search_by_id(#[case] target: &str, #[case] expected: Option<usize>) {
        let sorted = vec![
            shipment("101", 1),
            shipment("102", 1),
            shipment("205", 1),
            shipment("310", 1),
            shipment("999", 1),
        ];
        assert_eq!(search_by_identifier(&sorted, target), expected);
    }

    #[test]
    fn search_on_empty_slice_is_none() {
        assert_eq!(search_by_identifier(&[], "1"), None);
    }

    #[test]
    fn ids_compare_as_text() {
        // "1000" < "200" as text
        let mut shipments = vec![shipment("200", 1), shipment("1000", 1), shipment("30", 1)];
        sort_by_identifier(&mut shipments);
        assert_eq!(ids(&shipments), vec!["1000", "200", "30"]);
        assert_eq!(search_by_identifier(&shipments, "30"), Some(2));
    }

    #[test]
    fn inserted_target_is_always_found() {
        let mut shipments: Vec<Shipment> = ["7", "3", "11", "42", "5"]
            .iter()
            .map(|id| shipment(id, 1))
            .collect();
        shipments.push(shipment("8", 1));
        sort_by_identifier(&mut shipments);

        let idx = search_by_identifier(&shipments, "8").unwrap();
        assert_eq!(shipments[idx].id().as_str(), "8");
    }
}
