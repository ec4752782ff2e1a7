use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use imperium_game::models::{achievements::Achievement, buildings::Building};
use imperium_types::errors::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Error,
}

/// A transient message for the player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title.into(), description.into(), Severity::Info)
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title.into(), description.into(), Severity::Error)
    }

    fn new(title: String, description: String, severity: Severity) -> Self {
        Self {
            title,
            description,
            severity,
            created_at: Utc::now(),
        }
    }

    pub fn building_placed(building: &Building) -> Self {
        Self::info(
            "Building constructed",
            format!("{} was built successfully", building.name),
        )
    }

    pub fn build_failed(error: &GameError) -> Self {
        match error {
            GameError::NotEnoughResources => Self::error(
                "Not enough resources",
                "Gather more resources to construct this building",
            ),
            e => Self::error("Construction rejected", e.to_string()),
        }
    }

    pub fn building_upgraded(building: &Building) -> Self {
        Self::info(
            "Upgrade complete",
            format!("{} upgraded to level {}", building.name, building.level),
        )
    }

    pub fn upgrade_failed(error: &GameError) -> Self {
        match error {
            GameError::NotEnoughResources => Self::error(
                "Not enough resources",
                "More resources are needed for this upgrade",
            ),
            e => Self::error("Upgrade rejected", e.to_string()),
        }
    }

    pub fn achievement_unlocked(achievement: &Achievement) -> Self {
        Self::info(
            "Achievement unlocked!",
            format!("{}: {}", achievement.title, achievement.reward_text),
        )
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
