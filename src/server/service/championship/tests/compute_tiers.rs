//! Tests for compute_tiers.

use std::collections::HashSet;

use super::*;

use crate::server::service::championship::attribution::compute_tiers;

/// Expect a single tier at 1 for one season won by an active team
#[test]
fn returns_single_tier_for_single_champion() {
    let a = active(1, "A");
    let seasons = vec![season(2020, Some(&a), None, None)];

    let tiers = compute_tiers(&seasons, &[], &[a]);

    assert_eq!(tiers.len(), 1);
    assert_eq!(tiers[0].count, 1.0);
    assert_eq!(tiers[0].teams, vec![tier_team("A", 1)]);
}

/// Expect co-champions to share a 0.5 tier
#[test]
fn groups_co_champions_in_half_tier() {
    let a = active(1, "A");
    let b = active(2, "B");
    let seasons = vec![season(2021, Some(&a), Some(&b), None)];

    let tiers = compute_tiers(&seasons, &[], &[a, b]);

    assert_eq!(tiers.len(), 1);
    assert_eq!(tiers[0].count, 0.5);
    assert_eq!(tiers[0].teams, vec![tier_team("A", 1), tier_team("B", 1)]);
}

/// Expect runner-up-only teams in the 0 tier and tiers ordered ascending
#[test]
fn places_runner_up_only_teams_in_zero_tier() {
    let a = active(1, "A");
    let q = active(2, "Q");
    let seasons = vec![season(2022, Some(&a), None, Some(&q))];

    let tiers = compute_tiers(&seasons, &[], &[a, q]);

    assert_eq!(tiers.len(), 2);
    assert_eq!(tiers[0].count, 0.0);
    assert_eq!(tiers[0].teams, vec![tier_team("Q", 1)]);
    assert_eq!(tiers[1].count, 1.0);
    assert_eq!(tiers[1].teams, vec![tier_team("A", 1)]);
}

/// Expect teams within a tier sorted by appearances descending, ties kept in title order
#[test]
fn sorts_tier_by_appearances() {
    let a = active(1, "A");
    let b = active(2, "B");
    let c = active(3, "C");
    let seasons = vec![
        season(2018, Some(&a), None, None),
        season(2019, Some(&b), None, Some(&a)),
        season(2020, Some(&c), None, Some(&b)),
        season(2021, Some(&a), Some(&c), Some(&b)),
    ];

    let tiers = compute_tiers(&seasons, &[], &[a, b, c]);

    // A: 1.5 titles, C: 1.5 titles, B: 1 title
    assert_eq!(tiers.len(), 2);
    assert_eq!(tiers[0].count, 1.0);
    assert_eq!(tiers[0].teams, vec![tier_team("B", 3)]);
    assert_eq!(tiers[1].count, 1.5);
    assert_eq!(tiers[1].teams, vec![tier_team("A", 3), tier_team("C", 2)]);
}

/// Expect the runner-up appearance of a defunct team to reach each active successor
#[test]
fn fans_out_defunct_runner_up() {
    let a = active(1, "A");
    let x = defunct(2, "X");
    let y = active(3, "Y");
    let z = active(4, "Z");
    let seasons = vec![season(2017, Some(&a), None, Some(&x))];
    let lineage = vec![link(2, 3), link(2, 4)];

    let tiers = compute_tiers(&seasons, &lineage, &[a, y, z]);

    assert_eq!(tiers[0].count, 0.0);
    assert_eq!(tiers[0].teams, vec![tier_team("Y", 1), tier_team("Z", 1)]);
}

/// Expect duplicate lineage links to credit a successor only once
#[test]
fn collapses_duplicate_lineage_links() {
    let x = defunct(1, "X");
    let y = active(2, "Y");
    let seasons = vec![season(2015, Some(&x), None, None)];
    let lineage = vec![link(1, 2), link(1, 2)];

    let tiers = compute_tiers(&seasons, &lineage, &[y]);

    assert_eq!(tiers.len(), 1);
    assert_eq!(tiers[0].count, 1.0);
    assert_eq!(tiers[0].teams, vec![tier_team("Y", 1)]);
}

/// Expect no fan-out for a defunct co-champion; only the active co-champion is credited
///
/// Successors of a defunct co-champion currently receive nothing for that season.
#[test]
fn does_not_fan_out_defunct_co_champion() {
    let a = active(1, "A");
    let x = defunct(2, "X");
    let y = active(3, "Y");
    let seasons = vec![season(2014, Some(&a), Some(&x), None)];
    let lineage = vec![link(2, 3)];

    let tiers = compute_tiers(&seasons, &lineage, &[a, y]);

    assert_eq!(tiers.len(), 1);
    assert_eq!(tiers[0].count, 0.5);
    assert_eq!(tiers[0].teams, vec![tier_team("A", 1)]);
}

/// Expect tiers to partition every credited team exactly once
#[test]
fn partitions_all_credited_teams() {
    let a = active(1, "A");
    let b = active(2, "B");
    let x = defunct(3, "X");
    let y = active(4, "Y");
    let q = active(5, "Q");
    let seasons = vec![
        season(2012, Some(&x), None, Some(&q)),
        season(2013, Some(&a), Some(&b), Some(&y)),
        season(2014, Some(&q), None, Some(&x)),
        season(2015, None, None, Some(&b)),
    ];
    let lineage = vec![link(3, 4)];

    let tiers = compute_tiers(&seasons, &lineage, &[a, b, y, q]);

    let names: Vec<&str> = tiers
        .iter()
        .flat_map(|tier| tier.teams.iter().map(|t| t.name.as_str()))
        .collect();
    let distinct: HashSet<&str> = names.iter().copied().collect();

    assert_eq!(names.len(), distinct.len());
    assert_eq!(
        distinct,
        HashSet::from(["A", "B", "Y", "Q"])
    );
    assert!(tiers.windows(2).all(|w| w[0].count < w[1].count));
}

/// Expect no tiers for an empty snapshot
#[test]
fn returns_empty_for_no_seasons() {
    let tiers = compute_tiers(&[], &[], &[]);

    assert!(tiers.is_empty());
}
