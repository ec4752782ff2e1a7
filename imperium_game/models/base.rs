use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use imperium_types::{
    buildings::BuildingName,
    common::ResourceGroup,
    errors::GameError,
};

use super::{
    achievements::{Achievement, AchievementBook, Reward},
    buildings::{Building, construction_cost},
    ledger::{ResourceLedger, STARTING_RESOURCES},
    registry::BuildingRegistry,
};

/// The player's base: resources, buildings and achievements.
///
/// Mutating methods never evaluate achievements on their own, callers run
/// [`Base::evaluate_achievements`] after each of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Base {
    ledger: ResourceLedger,
    registry: BuildingRegistry,
    achievements: AchievementBook,
}

impl Base {
    pub fn new(starting_resources: ResourceGroup) -> Self {
        Self {
            ledger: ResourceLedger::new(starting_resources),
            registry: BuildingRegistry::new(),
            achievements: AchievementBook::new(),
        }
    }

    /// Constructor for re-assembling a base from its parts.
    pub fn from_parts(
        ledger: ResourceLedger,
        registry: BuildingRegistry,
        achievements: AchievementBook,
    ) -> Self {
        Self {
            ledger,
            registry,
            achievements,
        }
    }

    pub fn ledger(&self) -> &ResourceLedger {
        &self.ledger
    }

    pub fn registry(&self) -> &BuildingRegistry {
        &self.registry
    }

    pub fn achievements(&self) -> &AchievementBook {
        &self.achievements
    }

    pub fn stored_resources(&self) -> ResourceGroup {
        self.ledger.stored()
    }

    pub fn can_afford(&self, cost: &ResourceGroup) -> bool {
        self.ledger.has_enough(cost)
    }

    /// Whether a new building of this type could be paid for and placed.
    pub fn can_build(&self, name: &BuildingName) -> bool {
        !name.is_headquarters()
            && !self.registry.is_full()
            && self.can_afford(&construction_cost(name))
    }

    /// Whether the given building can be upgraded right now.
    pub fn can_upgrade(&self, id: Uuid) -> bool {
        self.registry
            .get(id)
            .is_some_and(|b| b.is_upgradable() && self.can_afford(&b.upgrade_cost()))
    }

    pub fn place_building<R: Rng + ?Sized>(
        &mut self,
        name: BuildingName,
        rng: &mut R,
    ) -> Result<Building, GameError> {
        self.registry.place(name, &mut self.ledger, rng)
    }

    pub fn upgrade_building(&mut self, id: Uuid) -> Result<Building, GameError> {
        self.registry.upgrade(id, &mut self.ledger)
    }

    /// Credits one tick of production and returns what was produced.
    pub fn produce(&mut self) -> ResourceGroup {
        let produced = self.registry.production();
        self.ledger.credit(&produced);
        produced
    }

    /// Evaluates achievements against the current state and applies rewards.
    ///
    /// A reward changes the ledger, so evaluation repeats until a pass unlocks
    /// nothing. Returns every achievement unlocked along the way.
    pub fn evaluate_achievements(&mut self) -> Vec<Achievement> {
        let mut unlocked = Vec::new();

        loop {
            let newly = self.achievements.evaluate(&self.ledger, &self.registry);
            if newly.is_empty() {
                break;
            }
            for achievement in &newly {
                if let Reward::Resources(amounts) = achievement.reward {
                    self.ledger.credit(&amounts);
                }
            }
            unlocked.extend(newly);
        }

        unlocked
    }
}

impl Default for Base {
    fn default() -> Self {
        Self::new(STARTING_RESOURCES)
    }
}
