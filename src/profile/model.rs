use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::backend::UserId;

pub const POINTS_PER_LEVEL: u64 = 1000;

const MONTHS_PT: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub user_id: UserId,
    pub display_name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub total_points: u64,
    #[serde(default)]
    pub monthly_points: u64,
    #[serde(default)]
    pub ranking_position: Option<u32>,
    #[serde(default)]
    pub monthly_ranking_position: Option<u32>,
    #[serde(default)]
    pub study_streak: u32,
    pub level: u32,
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    pub fn bio_text(&self) -> &str {
        self.bio.as_deref().unwrap_or_default()
    }

    /// "Membro desde março de 2024".
    pub fn member_since(&self) -> String {
        format!("Membro desde {}", month_year_pt(self.created_at))
    }

    pub fn next_level_points(&self) -> u64 {
        next_level_points(self.level)
    }

    pub fn level_progress(&self) -> f64 {
        level_progress(self.total_points, self.level)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKind {
    Posts,
    Groups,
    Achievements,
    ActiveGoals,
}

impl StatKind {
    pub const ALL: [Self; 4] = [
        Self::Posts,
        Self::Groups,
        Self::Achievements,
        Self::ActiveGoals,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Posts => "posts",
            Self::Groups => "grupos",
            Self::Achievements => "conquistas",
            Self::ActiveGoals => "metas ativas",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UserStats {
    pub total_posts: u64,
    pub total_groups: u64,
    pub achievements_count: u64,
    pub active_goals: u64,
}

impl UserStats {
    pub fn get(&self, kind: StatKind) -> u64 {
        match kind {
            StatKind::Posts => self.total_posts,
            StatKind::Groups => self.total_groups,
            StatKind::Achievements => self.achievements_count,
            StatKind::ActiveGoals => self.active_goals,
        }
    }

    pub fn set(&mut self, kind: StatKind, value: u64) {
        match kind {
            StatKind::Posts => self.total_posts = value,
            StatKind::Groups => self.total_groups = value,
            StatKind::Achievements => self.achievements_count = value,
            StatKind::ActiveGoals => self.active_goals = value,
        }
    }
}

pub fn next_level_points(level: u32) -> u64 {
    u64::from(level) * POINTS_PER_LEVEL
}

/// Percentage of the way from the current level floor to the next, clamped to 0..=100.
pub fn level_progress(points: u64, level: u32) -> f64 {
    let floor = u64::from(level.saturating_sub(1)) * POINTS_PER_LEVEL;
    let progress = (points as f64 - floor as f64) / POINTS_PER_LEVEL as f64 * 100.0;
    progress.clamp(0.0, 100.0)
}

pub fn month_year_pt(at: DateTime<Utc>) -> String {
    let month = MONTHS_PT[at.month0() as usize];
    format!("{month} de {}", at.year())
}
