//! Championship attribution.
//!
//! Folds season results into per-team title and appearance tallies keyed by team name.
//! Co-championships credit half a title to each co-champion. Results of a defunct team
//! are credited in full to every active successor franchise listed in the lineage table,
//! so a single season may count toward several successors at once.
//!
//! Everything here is a pure function of its inputs; callers fetch the snapshot and the
//! ledger is rebuilt from scratch on every call.

use std::collections::{BTreeMap, HashMap};

use crate::model::championship::{
    ChampionshipStatsDto, ChampionshipTierDto, DroughtDto, MostTitlesDto, NoTitlesDto,
    TierTeamDto,
};

/// A team as referenced by a season result or the active roster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamRef {
    pub id: i32,
    pub name: String,
    pub is_active: bool,
}

/// One season's final standings with team references already resolved.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SeasonRecord {
    pub year: i32,
    pub champion: Option<TeamRef>,
    pub co_champion: Option<TeamRef>,
    pub runner_up: Option<TeamRef>,
}

/// Predecessor → successor link for a team that folded into another franchise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineageLink {
    pub predecessor_id: i32,
    pub successor_id: i32,
}

/// Running totals for a single team name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamTally {
    pub name: String,
    pub appearances: u32,
    pub last_win_year: Option<i32>,
    /// Title years in the order they were credited
    pub championship_years: Vec<i32>,
    // Counted in halves so co-championships stay exact
    half_titles: u32,
    // Position of this team in the order titles were first credited
    title_rank: Option<usize>,
}

impl TeamTally {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            appearances: 0,
            last_win_year: None,
            championship_years: Vec::new(),
            half_titles: 0,
            title_rank: None,
        }
    }

    /// Titles held, in steps of 0.5.
    pub fn championships(&self) -> f64 {
        half_titles_to_count(self.half_titles)
    }

    pub fn has_title(&self) -> bool {
        self.half_titles > 0
    }
}

/// Per-team tallies built from a season snapshot.
///
/// Teams are kept in the order they first made an appearance; the order in which teams
/// first received title credit is tracked separately since listings of champions follow it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChampionshipLedger {
    tallies: Vec<TeamTally>,
    index: HashMap<String, usize>,
    titled_teams: usize,
    total_seasons: u32,
}

impl ChampionshipLedger {
    /// Builds the ledger for a snapshot of seasons.
    ///
    /// # Arguments
    /// - `seasons` - Season results in any order; ties between teams are broken by the order
    ///   teams are first credited while walking this slice
    /// - `lineage` - Predecessor → successor links; links to teams missing from
    ///   `active_teams` are ignored
    /// - `active_teams` - Teams currently in the league
    pub fn build(seasons: &[SeasonRecord], lineage: &[LineageLink], active_teams: &[TeamRef]) -> Self {
        let successors = successor_lookup(lineage, active_teams);

        let mut ledger = Self::default();
        for season in seasons {
            ledger.record_season(season, &successors);
        }
        ledger.total_seasons = seasons.len() as u32;

        ledger
    }

    /// League-wide summary statistics.
    ///
    /// # Arguments
    /// - `current_year` - Year droughts are measured against
    pub fn stats(&self, current_year: i32) -> ChampionshipStatsDto {
        let champions = self.champions();

        let max_half_titles = champions.iter().map(|t| t.half_titles).max().unwrap_or(0);
        let most_titled = champions
            .iter()
            .filter(|t| t.half_titles == max_half_titles)
            .map(|t| t.name.clone())
            .collect();

        let mut longest_drought: Option<DroughtDto> = None;
        for tally in &champions {
            let Some(last_win_year) = tally.last_win_year else {
                continue;
            };
            let years = current_year - last_win_year;
            if years <= 0 {
                continue;
            }
            // Strictly greater keeps the first team encountered on ties
            if longest_drought.as_ref().is_none_or(|d| years > d.years) {
                longest_drought = Some(DroughtDto {
                    team: tally.name.clone(),
                    years,
                });
            }
        }

        let no_titles: Vec<String> = self
            .tallies
            .iter()
            .filter(|t| !t.has_title())
            .map(|t| t.name.clone())
            .collect();

        ChampionshipStatsDto {
            total_seasons: self.total_seasons,
            unique_champions: champions.len() as u32,
            most_titles: MostTitlesDto {
                teams: most_titled,
                count: half_titles_to_count(max_half_titles),
            },
            longest_drought,
            no_titles: NoTitlesDto {
                count: no_titles.len() as u32,
                teams: no_titles,
            },
        }
    }

    /// Teams grouped by championship count, ascending, each tier sorted by appearances
    /// descending. Teams that only ever finished runner-up form the 0 tier.
    pub fn tiers(&self) -> Vec<ChampionshipTierDto> {
        let mut tiers: BTreeMap<u32, Vec<TierTeamDto>> = BTreeMap::new();

        for tally in self.champions() {
            tiers
                .entry(tally.half_titles)
                .or_default()
                .push(tier_team(tally));
        }
        for tally in self.tallies.iter().filter(|t| !t.has_title()) {
            tiers.entry(0).or_default().push(tier_team(tally));
        }

        tiers
            .into_iter()
            .map(|(half_titles, mut teams)| {
                teams.sort_by(|a, b| b.appearances.cmp(&a.appearances));

                ChampionshipTierDto {
                    count: half_titles_to_count(half_titles),
                    teams,
                }
            })
            .collect()
    }

    fn record_season(&mut self, season: &SeasonRecord, successors: &HashMap<i32, Vec<&TeamRef>>) {
        let champion_share = if season.co_champion.is_some() { 1 } else { 2 };

        if let Some(champion) = &season.champion {
            for name in credited_names(champion, successors) {
                self.credit_title(name, champion_share, season.year);
            }
        }

        // Co-champion credit only goes to an active co-champion, never through lineage
        if let Some(co_champion) = season.co_champion.as_ref().filter(|t| t.is_active) {
            self.credit_title(&co_champion.name, 1, season.year);
        }

        if let Some(runner_up) = &season.runner_up {
            for name in credited_names(runner_up, successors) {
                self.entry(name).appearances += 1;
            }
        }
    }

    fn credit_title(&mut self, name: &str, half_titles: u32, year: i32) {
        let next_rank = self.titled_teams;
        let tally = self.entry(name);

        tally.half_titles += half_titles;
        tally.appearances += 1;
        tally.last_win_year = Some(tally.last_win_year.map_or(year, |y| y.max(year)));
        tally.championship_years.push(year);

        if tally.title_rank.is_none() {
            tally.title_rank = Some(next_rank);
            self.titled_teams += 1;
        }
    }

    fn entry(&mut self, name: &str) -> &mut TeamTally {
        let idx = match self.index.get(name) {
            Some(&idx) => idx,
            None => {
                self.tallies.push(TeamTally::new(name));
                self.index.insert(name.to_string(), self.tallies.len() - 1);
                self.tallies.len() - 1
            }
        };

        &mut self.tallies[idx]
    }

    /// Titled teams in the order they first received title credit.
    fn champions(&self) -> Vec<&TeamTally> {
        let mut champions: Vec<&TeamTally> =
            self.tallies.iter().filter(|t| t.title_rank.is_some()).collect();
        champions.sort_by_key(|t| t.title_rank);

        champions
    }
}

/// Computes league-wide championship statistics for a season snapshot.
///
/// # Arguments
/// - `seasons` - Season results with resolved champion, co-champion and runner-up teams
/// - `lineage` - Predecessor → successor links for defunct teams
/// - `active_teams` - Teams currently in the league
/// - `current_year` - Year droughts are measured against
///
/// # Returns
/// Summary statistics; an empty snapshot yields zero counts and empty team lists.
pub fn compute_stats(
    seasons: &[SeasonRecord],
    lineage: &[LineageLink],
    active_teams: &[TeamRef],
    current_year: i32,
) -> ChampionshipStatsDto {
    ChampionshipLedger::build(seasons, lineage, active_teams).stats(current_year)
}

/// Groups teams by championship count for a season snapshot.
///
/// See [`ChampionshipLedger::tiers`] for ordering.
pub fn compute_tiers(
    seasons: &[SeasonRecord],
    lineage: &[LineageLink],
    active_teams: &[TeamRef],
) -> Vec<ChampionshipTierDto> {
    ChampionshipLedger::build(seasons, lineage, active_teams).tiers()
}

/// Championship record for a single roster team.
///
/// Counts the team's own results plus those of every franchise listed as its direct
/// predecessor. Unlike the league ledger, a predecessor's co-championship is credited
/// here too, and a predecessor counts whether or not it is still active.
///
/// # Arguments
/// - `seasons` - Season results with resolved team references
/// - `team` - The roster team the record belongs to
/// - `lineage` - Predecessor → successor links; duplicate links count once
pub fn team_record(
    seasons: &[SeasonRecord],
    team: &TeamRef,
    lineage: &[LineageLink],
) -> TeamTally {
    let mut team_ids = vec![team.id];
    for link in lineage.iter().filter(|l| l.successor_id == team.id) {
        if !team_ids.contains(&link.predecessor_id) {
            team_ids.push(link.predecessor_id);
        }
    }

    let holds = |role: &Option<TeamRef>, id: i32| role.as_ref().is_some_and(|t| t.id == id);

    let mut tally = TeamTally::new(&team.name);
    for season in seasons {
        for &id in &team_ids {
            let half_titles = if holds(&season.champion, id) {
                if season.co_champion.is_some() { 1 } else { 2 }
            } else if holds(&season.co_champion, id) {
                1
            } else {
                if holds(&season.runner_up, id) {
                    tally.appearances += 1;
                }
                continue;
            };

            tally.half_titles += half_titles;
            tally.appearances += 1;
            tally.last_win_year = Some(
                tally
                    .last_win_year
                    .map_or(season.year, |y| y.max(season.year)),
            );
            tally.championship_years.push(season.year);
        }
    }
    tally.championship_years.sort_unstable();

    tally
}

/// Maps each predecessor ID to its active successors, dropping links to unknown or inactive
/// teams and collapsing duplicate links.
fn successor_lookup<'a>(
    lineage: &[LineageLink],
    active_teams: &'a [TeamRef],
) -> HashMap<i32, Vec<&'a TeamRef>> {
    let active: HashMap<i32, &TeamRef> = active_teams
        .iter()
        .filter(|t| t.is_active)
        .map(|t| (t.id, t))
        .collect();

    let mut successors: HashMap<i32, Vec<&TeamRef>> = HashMap::new();
    for link in lineage {
        let Some(&successor) = active.get(&link.successor_id) else {
            continue;
        };

        let entry = successors.entry(link.predecessor_id).or_default();
        if !entry.iter().any(|t| t.id == successor.id) {
            entry.push(successor);
        }
    }

    successors
}

/// Names credited with a team's result: the team itself when active, otherwise each of its
/// active successors.
fn credited_names<'a>(team: &'a TeamRef, successors: &'a HashMap<i32, Vec<&TeamRef>>) -> Vec<&'a str> {
    if team.is_active {
        return vec![team.name.as_str()];
    }

    successors
        .get(&team.id)
        .map(|teams| teams.iter().map(|t| t.name.as_str()).collect())
        .unwrap_or_default()
}

fn tier_team(tally: &TeamTally) -> TierTeamDto {
    TierTeamDto {
        name: tally.name.clone(),
        appearances: tally.appearances,
    }
}

fn half_titles_to_count(half_titles: u32) -> f64 {
    f64::from(half_titles) / 2.0
}
