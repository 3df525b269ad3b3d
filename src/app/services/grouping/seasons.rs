//! Year → season grouping
//!
//! Buckets a driver's participations by year label, then by season label
//! within each year, with per-bucket totals. Title counts are per
//! championship key inside the bucket — a season bucket spanning several
//! categories can award several titles — with the champion flags
//! OR-accumulated across the rows sharing one key.

use std::collections::HashSet;

use crate::app::models::Participation;
use serde::Serialize;

/// Totals for one season within one year
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonBucket {
    /// Season label as written in the sheet
    pub season: String,

    /// Races entered
    pub races: u32,

    /// Wins
    pub wins: u32,

    /// Podium finishes
    pub podiums: u32,

    /// Pole positions
    pub poles: u32,

    /// Fastest laps
    pub fast_laps: u32,

    /// Top-10 finishes
    pub top_tens: u32,

    /// Driver titles won in the bucket (counted per championship key)
    pub driver_titles: u32,

    /// Constructors titles won in the bucket
    pub constructor_titles: u32,

    /// Most recent team seen in the bucket
    pub team: String,
}

/// One year of a driver's career
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearGroup {
    /// Year label as written in the sheet
    pub year: String,

    /// Season buckets within the year, by season label
    pub seasons: Vec<SeasonBucket>,
}

impl YearGroup {
    /// Races across all the year's seasons
    pub fn total_races(&self) -> u32 {
        self.seasons.iter().map(|s| s.races).sum()
    }

    /// Wins across all the year's seasons
    pub fn total_wins(&self) -> u32 {
        self.seasons.iter().map(|s| s.wins).sum()
    }
}

/// Group participations by year, then season, most recent year first
pub fn group_by_year(participations: &[&Participation]) -> Vec<YearGroup> {
    let mut years: Vec<YearGroup> = Vec::new();

    for participation in participations {
        let year_index = match years.iter().position(|g| g.year == participation.year) {
            Some(index) => index,
            None => {
                years.push(YearGroup {
                    year: participation.year.clone(),
                    seasons: Vec::new(),
                });
                years.len() - 1
            }
        };
        let year_group = &mut years[year_index];

        let season_index = match year_group
            .seasons
            .iter()
            .position(|b| b.season == participation.season)
        {
            Some(index) => index,
            None => {
                year_group.seasons.push(SeasonBucket {
                    season: participation.season.clone(),
                    races: 0,
                    wins: 0,
                    podiums: 0,
                    poles: 0,
                    fast_laps: 0,
                    top_tens: 0,
                    driver_titles: 0,
                    constructor_titles: 0,
                    team: String::new(),
                });
                year_group.seasons.len() - 1
            }
        };
        let bucket = &mut year_group.seasons[season_index];

        bucket.races += 1;
        if participation.position.is_win() {
            bucket.wins += 1;
        }
        if participation.position.is_podium() {
            bucket.podiums += 1;
        }
        if participation.position.is_top_ten() {
            bucket.top_tens += 1;
        }
        if participation.pole {
            bucket.poles += 1;
        }
        if participation.best_lap {
            bucket.fast_laps += 1;
        }
        if !participation.team.trim().is_empty() {
            bucket.team = participation.team.clone();
        }
    }

    count_bucket_titles(&mut years, participations);

    // Most recent year first; seasons in sheet order within the year
    years.sort_by(|a, b| {
        let a_year = a.year.trim().parse::<i32>().ok();
        let b_year = b.year.trim().parse::<i32>().ok();
        b_year.cmp(&a_year).then_with(|| b.year.cmp(&a.year))
    });

    years
}

/// Count titles per bucket, one per championship key carrying the flag
fn count_bucket_titles(years: &mut [YearGroup], participations: &[&Participation]) {
    for year_group in years {
        for bucket in &mut year_group.seasons {
            let mut driver_keys: HashSet<(String, String)> = HashSet::new();
            let mut constructor_keys: HashSet<(String, String)> = HashSet::new();

            for participation in participations {
                if participation.year != year_group.year || participation.season != bucket.season {
                    continue;
                }
                let key = (
                    participation.league.clone(),
                    participation.category.clone(),
                );
                if participation.driver_champion {
                    driver_keys.insert(key.clone());
                }
                if participation.constructors_champion {
                    constructor_keys.insert(key);
                }
            }

            bucket.driver_titles = driver_keys.len() as u32;
            bucket.constructor_titles = constructor_keys.len() as u32;
        }
    }
}
