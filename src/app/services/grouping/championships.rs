//! Championship grouping by (league, season, category)
//!
//! Each distinct key is one title-awarding competition. Champion flags are
//! OR-accumulated across the rows sharing a key, since the sheets may carry
//! the flag on any subset of a championship's race rows.

use crate::app::models::Participation;
use serde::Serialize;

/// One championship entered: a distinct (league, season, category) key
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChampionshipEntry {
    /// League the championship belongs to
    pub league: String,

    /// Season label
    pub season: String,

    /// Category raced
    pub category: String,

    /// Year label of the championship's first seen row
    pub year: String,

    /// Races entered under this key
    pub races: u32,

    /// Driver championship won
    pub driver_champion: bool,

    /// Constructors championship won
    pub constructors_champion: bool,

    /// Broadcast links collected from the key's races, first seen first
    pub broadcast_links: Vec<String>,
}

/// All championships of one league, most recent first
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeagueGroup {
    /// League name
    pub league: String,

    /// Championships entered, sorted by recency
    pub championships: Vec<ChampionshipEntry>,

    /// Driver titles won within the league
    pub driver_titles: u32,

    /// Constructors titles won within the league
    pub constructor_titles: u32,
}

/// Group participations into leagues and their championships
///
/// Championships within a league sort by parsed year descending, ties by
/// season label in reverse lexical order; leagues sort by name.
pub fn group_by_championship(participations: &[&Participation]) -> Vec<LeagueGroup> {
    let mut leagues: Vec<LeagueGroup> = Vec::new();

    for participation in participations {
        let league_index = match leagues
            .iter()
            .position(|g| g.league == participation.league)
        {
            Some(index) => index,
            None => {
                leagues.push(LeagueGroup {
                    league: participation.league.clone(),
                    championships: Vec::new(),
                    driver_titles: 0,
                    constructor_titles: 0,
                });
                leagues.len() - 1
            }
        };
        let league_group = &mut leagues[league_index];

        let entry_index = match league_group.championships.iter().position(|c| {
            c.season == participation.season && c.category == participation.category
        }) {
            Some(index) => index,
            None => {
                league_group.championships.push(ChampionshipEntry {
                    league: participation.league.clone(),
                    season: participation.season.clone(),
                    category: participation.category.clone(),
                    year: participation.year.clone(),
                    races: 0,
                    driver_champion: false,
                    constructors_champion: false,
                    broadcast_links: Vec::new(),
                });
                league_group.championships.len() - 1
            }
        };
        let entry = &mut league_group.championships[entry_index];

        entry.races += 1;
        entry.driver_champion |= participation.driver_champion;
        entry.constructors_champion |= participation.constructors_champion;
        for link in &participation.broadcast_links {
            if !entry.broadcast_links.contains(link) {
                entry.broadcast_links.push(link.clone());
            }
        }
    }

    for league_group in &mut leagues {
        league_group.driver_titles = league_group
            .championships
            .iter()
            .filter(|c| c.driver_champion)
            .count() as u32;
        league_group.constructor_titles = league_group
            .championships
            .iter()
            .filter(|c| c.constructors_champion)
            .count() as u32;

        league_group.championships.sort_by(|a, b| {
            let a_year = a.year.trim().parse::<i32>().ok();
            let b_year = b.year.trim().parse::<i32>().ok();
            b_year
                .cmp(&a_year)
                .then_with(|| b.season.cmp(&a.season))
        });
    }

    leagues.sort_by(|a, b| a.league.cmp(&b.league));

    leagues
}
