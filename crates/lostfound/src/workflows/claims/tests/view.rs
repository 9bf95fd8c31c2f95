use super::common::*;

use crate::workflows::claims::domain::{Claim, ClaimStatus};
use crate::workflows::claims::view::{
    consistent_claims, orphaned_claims, ClaimQuery, ClaimSort, ClaimSortKey, ItemIndex,
    SortDirection,
};
use crate::workflows::items::ItemKind;

fn index() -> ItemIndex {
    ItemIndex::build(
        &[lost_item("L1", "Calculus textbook")],
        &[
            found_item("F1", "Silver watch"),
            found_item("F2", "Blue umbrella"),
        ],
    )
}

fn ids(views: &[crate::workflows::claims::view::ClaimView]) -> Vec<&str> {
    views.iter().map(|view| view.claim.id.as_str()).collect()
}

fn sorted(key: ClaimSortKey, direction: SortDirection) -> ClaimQuery {
    ClaimQuery {
        sort: Some(key),
        direction: Some(direction),
        ..ClaimQuery::default()
    }
}

fn sample_claims() -> Vec<Claim> {
    let mut bravo = claim("C2", "F2", "Bravo", ClaimStatus::Approved);
    bravo.date_claimed = at(3, 9);
    let mut alpha = claim("C1", "F1", "Alpha", ClaimStatus::Waiting);
    alpha.date_claimed = at(2, 9);
    let mut charlie = claim("C3", "L1", "Charlie", ClaimStatus::Rejected);
    charlie.date_claimed = at(4, 9);
    vec![bravo, alpha, charlie]
}

#[test]
fn index_spans_both_collections() {
    let index = index();
    assert_eq!(index.len(), 3);
    assert_eq!(
        index
            .resolve(&crate::workflows::items::ItemId("L1".to_string()))
            .map(|item| item.kind),
        Some(ItemKind::Lost)
    );
}

#[test]
fn claims_for_deleted_items_are_hidden() {
    let claims = vec![
        claim("C1", "F1", "Alpha", ClaimStatus::Waiting),
        claim("C9", "I9", "Ghost", ClaimStatus::Waiting),
        claim("C3", "L1", "Charlie", ClaimStatus::Approved),
    ];

    let views = consistent_claims(claims.clone(), &index(), &ClaimQuery::default());

    assert_eq!(ids(&views), vec!["C1", "C3"]);
    assert_eq!(views[0].item.title, "Silver watch");
    assert_eq!(views[1].item.kind, ItemKind::Lost);

    let orphans = orphaned_claims(&claims, &index());
    assert_eq!(orphans.len(), 1);
    assert_eq!(orphans[0].id.as_str(), "C9");
}

#[test]
fn empty_item_set_hides_every_claim() {
    let views = consistent_claims(
        sample_claims(),
        &ItemIndex::build(&[], &[]),
        &ClaimQuery::default(),
    );
    assert!(views.is_empty());
}

#[test]
fn search_matches_name_message_item_title_and_id_case_insensitively() {
    let index = index();
    let search = |term: &str| {
        let query = ClaimQuery {
            search: Some(term.to_string()),
            ..ClaimQuery::default()
        };
        let views = consistent_claims(sample_claims(), &index, &query);
        ids(&views)
            .into_iter()
            .map(str::to_string)
            .collect::<Vec<_>>()
    };

    assert_eq!(search("bRaVo"), vec!["C2"]);
    assert_eq!(search("UMBRELLA"), vec!["C2"]);
    assert_eq!(search("c3"), vec!["C3"]);
    assert_eq!(search("charlie lost this"), vec!["C3"]);
    assert_eq!(search(""), vec!["C2", "C1", "C3"]);
    assert!(search("bicycle").is_empty());
}

#[test]
fn search_term_is_not_trimmed() {
    let index = index();
    let search = |term: &str| {
        let query = ClaimQuery {
            search: Some(term.to_string()),
            ..ClaimQuery::default()
        };
        consistent_claims(sample_claims(), &index, &query).len()
    };

    assert_eq!(search("quad"), 3);
    assert_eq!(search("quad "), 0);
    assert_eq!(search(" watch"), 1);
    assert_eq!(search("   "), 0);
}

#[test]
fn search_never_surfaces_orphans() {
    let mut claims = sample_claims();
    claims.push(claim("C9", "I9", "Bravo", ClaimStatus::Waiting));
    let query = ClaimQuery {
        search: Some("bravo".to_string()),
        ..ClaimQuery::default()
    };

    let views = consistent_claims(claims, &index(), &query);
    assert_eq!(ids(&views), vec!["C2"]);
}

#[test]
fn sorts_by_each_key_in_both_directions() {
    let index = index();
    let run = |key, direction| {
        let views = consistent_claims(sample_claims(), &index, &sorted(key, direction));
        ids(&views)
            .into_iter()
            .map(str::to_string)
            .collect::<Vec<_>>()
    };

    assert_eq!(
        run(ClaimSortKey::ClaimantName, SortDirection::Ascending),
        vec!["C1", "C2", "C3"]
    );
    assert_eq!(
        run(ClaimSortKey::ClaimantName, SortDirection::Descending),
        vec!["C3", "C2", "C1"]
    );
    assert_eq!(
        run(ClaimSortKey::ItemName, SortDirection::Ascending),
        vec!["C2", "C3", "C1"]
    );
    assert_eq!(
        run(ClaimSortKey::DateClaimed, SortDirection::Descending),
        vec!["C3", "C2", "C1"]
    );
    assert_eq!(
        run(ClaimSortKey::Status, SortDirection::Ascending),
        vec!["C2", "C3", "C1"]
    );
    assert_eq!(
        run(ClaimSortKey::Id, SortDirection::Ascending),
        vec!["C1", "C2", "C3"]
    );
}

#[test]
fn sorting_is_stable_for_equal_keys() {
    let claims = vec![
        claim("C5", "F1", "Same", ClaimStatus::Waiting),
        claim("C4", "F2", "Same", ClaimStatus::Waiting),
        claim("C6", "L1", "Same", ClaimStatus::Waiting),
    ];

    for direction in [SortDirection::Ascending, SortDirection::Descending] {
        let views = consistent_claims(
            claims.clone(),
            &index(),
            &sorted(ClaimSortKey::ClaimantName, direction),
        );
        assert_eq!(ids(&views), vec!["C5", "C4", "C6"]);
    }
}

#[test]
fn repeated_selection_toggles_direction() {
    let first = ClaimSort::request(None, ClaimSortKey::Status);
    assert_eq!(first.direction, SortDirection::Ascending);

    let second = ClaimSort::request(Some(first), ClaimSortKey::Status);
    assert_eq!(second.direction, SortDirection::Descending);

    let third = ClaimSort::request(Some(second), ClaimSortKey::Status);
    assert_eq!(third.direction, SortDirection::Ascending);

    let switched = ClaimSort::request(Some(second), ClaimSortKey::ClaimantName);
    assert_eq!(switched, ClaimSort::ascending(ClaimSortKey::ClaimantName));
}

#[test]
fn sort_without_direction_defaults_to_ascending() {
    let query = ClaimQuery {
        sort: Some(ClaimSortKey::DateClaimed),
        ..ClaimQuery::default()
    };
    assert_eq!(
        query.sort_config(),
        Some(ClaimSort::ascending(ClaimSortKey::DateClaimed))
    );
}
