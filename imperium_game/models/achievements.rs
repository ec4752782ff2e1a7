use serde::{Deserialize, Serialize};
use std::fmt;

use imperium_types::common::ResourceGroup;

use super::{ledger::ResourceLedger, registry::BuildingRegistry};

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum AchievementId {
    FirstBuilding,
    ResourceMaster,
    Wealthy,
    Empire,
}

impl AchievementId {
    pub fn as_str(&self) -> &'static str {
        match self {
            AchievementId::FirstBuilding => "first_building",
            AchievementId::ResourceMaster => "resource_master",
            AchievementId::Wealthy => "wealthy",
            AchievementId::Empire => "empire",
        }
    }

    /// Current progress towards the target, before clamping.
    fn measure(&self, ledger: &ResourceLedger, registry: &BuildingRegistry) -> u32 {
        match self {
            AchievementId::FirstBuilding => registry.count().saturating_sub(1) as u32,
            AchievementId::ResourceMaster => registry.distinct_constructed() as u32,
            AchievementId::Wealthy => ledger.gold(),
            AchievementId::Empire => registry.count() as u32,
        }
    }
}

impl fmt::Display for AchievementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a player gets when an achievement unlocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reward {
    /// Credited to the ledger once.
    Resources(ResourceGroup),
    /// Shown to the player, no effect on the rules.
    DisplayOnly,
}

/// Static description of a single achievement.
pub struct AchievementDef {
    pub id: AchievementId,
    pub title: &'static str,
    pub description: &'static str,
    pub target: u32,
    pub reward: Reward,
    pub reward_text: &'static str,
}

pub const ACHIEVEMENTS: &[AchievementDef] = &[
    AchievementDef {
        id: AchievementId::FirstBuilding,
        title: "First Builder",
        description: "Construct your first building",
        target: 1,
        reward: Reward::Resources(ResourceGroup::new(50, 0, 0)),
        reward_text: "+50 gold",
    },
    AchievementDef {
        id: AchievementId::ResourceMaster,
        title: "Resource Master",
        description: "Construct one building of every type",
        target: 4,
        reward: Reward::Resources(ResourceGroup::new(100, 100, 100)),
        reward_text: "+100 of every resource",
    },
    AchievementDef {
        id: AchievementId::Wealthy,
        title: "Wealthy",
        description: "Accumulate 500 gold",
        target: 500,
        reward: Reward::DisplayOnly,
        reward_text: "10% discount on construction",
    },
    AchievementDef {
        id: AchievementId::Empire,
        title: "Empire",
        description: "Have 10 buildings",
        target: 10,
        reward: Reward::DisplayOnly,
        reward_text: "+2 production of every resource",
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: AchievementId,
    pub title: String,
    pub description: String,
    pub target: u32,
    pub reward: Reward,
    pub reward_text: String,
    progress: u32,
    unlocked: bool,
}

impl Achievement {
    pub fn from_def(def: &AchievementDef) -> Self {
        Self {
            id: def.id,
            title: def.title.to_string(),
            description: def.description.to_string(),
            target: def.target,
            reward: def.reward,
            reward_text: def.reward_text.to_string(),
            progress: 0,
            unlocked: false,
        }
    }

    /// Progress, never above the target.
    pub fn progress(&self) -> u32 {
        self.progress
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    /// Recomputes progress and returns true when this call unlocked it.
    fn evaluate(&mut self, ledger: &ResourceLedger, registry: &BuildingRegistry) -> bool {
        if self.unlocked {
            return false;
        }

        let progress = self.id.measure(ledger, registry);
        self.progress = progress.min(self.target);
        if progress >= self.target {
            self.unlocked = true;
            return true;
        }
        false
    }
}

/// All achievements of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementBook {
    achievements: Vec<Achievement>,
}

impl AchievementBook {
    pub fn new() -> Self {
        Self {
            achievements: ACHIEVEMENTS.iter().map(Achievement::from_def).collect(),
        }
    }

    pub fn achievements(&self) -> &Vec<Achievement> {
        &self.achievements
    }

    pub fn get(&self, id: AchievementId) -> Option<&Achievement> {
        self.achievements.iter().find(|a| a.id == id)
    }

    /// Runs a single evaluation pass and returns the achievements it unlocked.
    /// Rewards are not applied here.
    pub fn evaluate(
        &mut self,
        ledger: &ResourceLedger,
        registry: &BuildingRegistry,
    ) -> Vec<Achievement> {
        self.achievements
            .iter_mut()
            .filter_map(|a| a.evaluate(ledger, registry).then(|| a.clone()))
            .collect()
    }
}

impl Default for AchievementBook {
    fn default() -> Self {
        Self::new()
    }
}
