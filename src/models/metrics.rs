use super::associate::AssociateRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrgSummary {
    pub root_id: String,
    pub root_name: String,
    pub org_premium_mtd: f64,
    pub org_premium_pmtd: f64,
    pub org_recruits_mtd: f64,
    pub org_recruits_pmtd: f64,
    pub premium_writers_pmtd: usize,
    pub recruiters_pmtd: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualifyingRank {
    SeniorDirector,
    ExecutiveDirector,
}

impl QualifyingRank {
    pub fn threshold(self) -> f64 {
        match self {
            QualifyingRank::SeniorDirector => 700.0,
            QualifyingRank::ExecutiveDirector => 1400.0,
        }
    }

    /// Most a single leg may contribute toward this rank.
    pub fn leg_cap(self) -> f64 {
        match self {
            QualifyingRank::SeniorDirector => 350.0,
            QualifyingRank::ExecutiveDirector => 700.0,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            QualifyingRank::SeniorDirector => "Senior Director",
            QualifyingRank::ExecutiveDirector => "Executive Director",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegContribution {
    pub associate_id: String,
    pub name: String,
    pub org_premium_mtd: f64,
    pub counted: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankQualification {
    pub rank: QualifyingRank,
    pub threshold: f64,
    pub leg_cap: f64,
    pub effective_leg_premium: f64,
    pub personal_premium: f64,
    pub countable_premium: f64,
    pub qualified: bool,
    pub shortfall: Option<f64>, // None when qualified
    pub legs: Vec<LegContribution>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualificationStatus {
    pub senior_director: RankQualification,
    pub executive_director: RankQualification,
    pub leg_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusSummary {
    pub active: usize,
    pub not_vested: usize,
    pub on_hold: usize,
    pub unclassified: usize,
    pub on_hold_associates: Vec<AssociateRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankedContributors {
    pub premium_mtd: Vec<AssociateRecord>,
    pub recruits_mtd: Vec<AssociateRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankCount {
    pub level: f64,
    pub title: String,
    pub count: usize,
}

/// Everything the presentation layer shows for one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    pub summary: Option<OrgSummary>,
    pub qualification: Option<QualificationStatus>,
    pub status: StatusSummary,
    pub contributors: RankedContributors,
    pub ranks: Vec<RankCount>,
}
