//! Career milestones
//!
//! Scans a driver's participations in chronological order (year ascending,
//! then season label ascending; sheet order within a season) and records
//! the first occurrence of each achievement. Every milestone is
//! independently optional — a driver may never have achieved it.

use crate::app::models::Participation;
use serde::Serialize;

/// The race at which a milestone was reached
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Milestone {
    /// Circuit raced (un-normalized, as the sheet shows it)
    pub circuit: String,

    /// League of the race
    pub league: String,

    /// Season label
    pub season: String,

    /// Year label
    pub year: String,
}

impl Milestone {
    fn from_participation(participation: &Participation) -> Self {
        Self {
            circuit: participation.circuit.clone(),
            league: participation.league.clone(),
            season: participation.season.clone(),
            year: participation.year.clone(),
        }
    }
}

/// First occurrence of each career achievement
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Milestones {
    pub first_race: Option<Milestone>,
    pub first_podium: Option<Milestone>,
    pub first_win: Option<Milestone>,
    pub first_pole: Option<Milestone>,
    pub first_fast_lap: Option<Milestone>,
    pub first_hat_trick: Option<Milestone>,
    pub first_grand_chelem: Option<Milestone>,
    pub first_driver_title: Option<Milestone>,
    pub first_constructors_title: Option<Milestone>,
}

/// Collect milestones from a driver's participations
pub fn collect_milestones(participations: &[&Participation]) -> Milestones {
    let mut ordered: Vec<&Participation> = participations.to_vec();
    // Stable sort: sheet order survives within one (year, season)
    ordered.sort_by(|a, b| {
        let a_year = a.year.trim().parse::<i32>().ok();
        let b_year = b.year.trim().parse::<i32>().ok();
        a_year
            .cmp(&b_year)
            .then_with(|| a.season.cmp(&b.season))
    });

    let mut milestones = Milestones::default();

    for participation in ordered {
        let mark = |slot: &mut Option<Milestone>| {
            if slot.is_none() {
                *slot = Some(Milestone::from_participation(participation));
            }
        };

        mark(&mut milestones.first_race);
        if participation.position.is_podium() {
            mark(&mut milestones.first_podium);
        }
        if participation.position.is_win() {
            mark(&mut milestones.first_win);
        }
        if participation.pole {
            mark(&mut milestones.first_pole);
        }
        if participation.best_lap {
            mark(&mut milestones.first_fast_lap);
        }
        if participation.hat_trick {
            mark(&mut milestones.first_hat_trick);
        }
        if participation.grand_chelem {
            mark(&mut milestones.first_grand_chelem);
        }
        if participation.driver_champion {
            mark(&mut milestones.first_driver_title);
        }
        if participation.constructors_champion {
            mark(&mut milestones.first_constructors_title);
        }
    }

    milestones
}
