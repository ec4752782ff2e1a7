use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, info};
use uuid::Uuid;

use imperium_game::models::{
    achievements::Achievement,
    base::Base,
    buildings::Building,
};
use imperium_types::{buildings::BuildingName, common::ResourceGroup, errors::GameError};

use crate::{config::Config, notifications::Notification};

/// The running game: the base, the selection cursor and pending notifications.
pub struct GameSession {
    base: Base,
    selected: Option<Uuid>,
    rng: StdRng,
    outbox: Vec<Notification>,
    /// Set by every ledger or registry mutation since the last evaluation.
    changed: bool,
}

impl GameSession {
    /// Starts a new game and evaluates achievements against the starting state.
    pub fn new(config: &Config) -> Self {
        let mut session =
            Self::from_base(Base::new(config.starting_resources), StdRng::from_entropy());
        session.evaluate_achievements();
        session
    }

    /// Builds a session around an existing base, with a given random source.
    /// The base is taken as-is: achievements are not evaluated.
    pub fn from_base(base: Base, rng: StdRng) -> Self {
        Self {
            base,
            selected: None,
            rng,
            outbox: vec![],
            changed: false,
        }
    }

    pub fn base(&self) -> &Base {
        &self.base
    }

    pub fn selected(&self) -> Option<Uuid> {
        self.selected
    }

    pub fn selected_building(&self) -> Option<&Building> {
        self.selected.and_then(|id| self.base.registry().get(id))
    }

    /// Moves the selection cursor. `None` clears it.
    pub fn select(&mut self, id: Option<Uuid>) -> Result<(), GameError> {
        if let Some(id) = id {
            if self.base.registry().get(id).is_none() {
                return Err(GameError::BuildingNotFound(id));
            }
        }
        self.selected = id;
        Ok(())
    }

    pub fn place_building(&mut self, name: BuildingName) -> Result<Building, GameError> {
        let building = self.base.place_building(name, &mut self.rng)?;
        self.changed = true;
        Ok(building)
    }

    pub fn upgrade_building(&mut self, id: Uuid) -> Result<Building, GameError> {
        let building = self.base.upgrade_building(id)?;
        self.changed = true;
        Ok(building)
    }

    pub fn produce(&mut self) -> ResourceGroup {
        self.changed = true;
        self.base.produce()
    }

    /// Runs the achievement evaluator only if the ledger or the registry
    /// changed since the last evaluation.
    pub fn evaluate_if_changed(&mut self) -> Vec<Achievement> {
        if !self.changed {
            return vec![];
        }
        self.evaluate_achievements()
    }

    /// Runs the achievement evaluator and queues a notification per unlock.
    pub fn evaluate_achievements(&mut self) -> Vec<Achievement> {
        self.changed = false;
        let unlocked = self.base.evaluate_achievements();
        for achievement in &unlocked {
            info!(achievement = %achievement.id, "Achievement unlocked");
            self.notify(Notification::achievement_unlocked(achievement));
        }
        unlocked
    }

    pub fn notify(&mut self, notification: Notification) {
        debug!(title = %notification.title, "Queued notification");
        self.outbox.push(notification);
    }

    /// Takes every queued notification, oldest first.
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.outbox)
    }
}
