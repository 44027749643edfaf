mod compute_tiers;

use almanac_test_utils::prelude::*;

use crate::{
    model::championship::{DroughtDto, TierTeamDto},
    server::service::championship::attribution::{LineageLink, SeasonRecord, TeamRef},
};

fn active(id: i32, name: &str) -> TeamRef {
    TeamRef {
        id,
        name: name.to_string(),
        is_active: true,
    }
}

fn defunct(id: i32, name: &str) -> TeamRef {
    TeamRef {
        id,
        name: name.to_string(),
        is_active: false,
    }
}

fn season(
    year: i32,
    champion: Option<&TeamRef>,
    co_champion: Option<&TeamRef>,
    runner_up: Option<&TeamRef>,
) -> SeasonRecord {
    SeasonRecord {
        year,
        champion: champion.cloned(),
        co_champion: co_champion.cloned(),
        runner_up: runner_up.cloned(),
    }
}

fn link(predecessor_id: i32, successor_id: i32) -> LineageLink {
    LineageLink {
        predecessor_id,
        successor_id,
    }
}

fn tier_team(name: &str, appearances: u32) -> TierTeamDto {
    TierTeamDto {
        name: name.to_string(),
        appearances,
    }
}
