use std::sync::Arc;
use tokio::sync::{Mutex, broadcast};
use tracing::debug;

use imperium_types::{common::ResourceGroup, errors::ApplicationError};

use crate::{
    config::Config,
    cqrs::{Command, CommandHandler, Query, QueryHandler},
    notifications::Notification,
    session::GameSession,
};

const NOTIFICATIONS_CAPACITY: usize = 64;

/// GameBus (Mediator)
/// This struct is the central entry point for all game logic.
/// It does not contain any business logic itself.
/// Its primary roles are:
/// 1. Serializing access to the session, so every action runs to completion.
/// 2. Dispatching Commands and Queries to their respective handlers.
/// 3. Running the achievement evaluator after every state change.
/// 4. Publishing notifications to subscribers.
pub struct GameBus {
    config: Arc<Config>,
    session: Mutex<GameSession>,
    notifications: broadcast::Sender<Notification>,
}

impl GameBus {
    pub fn new(config: Arc<Config>, session: GameSession) -> Self {
        let (notifications, _) = broadcast::channel(NOTIFICATIONS_CAPACITY);
        Self {
            config,
            session: Mutex::new(session),
            notifications,
        }
    }

    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Returns a receiver for every notification published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.notifications.subscribe()
    }

    /// Executes a command.
    /// A command is an operation that modifies the game state.
    /// This method holds the session for the whole action:
    /// - It passes the session to the handler.
    /// - It evaluates achievements if the command changed the ledger or the registry.
    /// - It publishes the notifications queued along the way.
    /// Handler errors are returned after notifications are published.
    pub async fn execute<C, H>(&self, cmd: C, handler: H) -> Result<(), ApplicationError>
    where
        C: Command,
        H: CommandHandler<C>,
    {
        let mut session = self.session.lock().await;

        let result = handler.handle(cmd, &mut session, &self.config).await;
        session.evaluate_if_changed();
        self.publish(session.drain_notifications());

        result
    }

    /// Executes a query.
    /// A query is an operation that reads game state and returns data.
    /// It should *never* modify the state.
    pub async fn query<Q, H>(&self, query: Q, handler: H) -> Result<Q::Output, ApplicationError>
    where
        Q: Query,
        H: QueryHandler<Q>,
    {
        let session = self.session.lock().await;
        handler.handle(query, &session, &self.config).await
    }

    /// Credits one production tick, then evaluates achievements.
    pub async fn produce(&self) -> ResourceGroup {
        let mut session = self.session.lock().await;

        let produced = session.produce();
        session.evaluate_if_changed();
        self.publish(session.drain_notifications());

        produced
    }

    /// Publishes notifications queued outside of an action, such as the
    /// unlocks of a new session's starting state.
    pub async fn publish_pending(&self) {
        let mut session = self.session.lock().await;
        self.publish(session.drain_notifications());
    }

    fn publish(&self, notifications: Vec<Notification>) {
        for notification in notifications {
            // Sending only fails when nobody is subscribed.
            if self.notifications.send(notification).is_err() {
                debug!("Notification dropped, no subscribers");
            }
        }
    }
}
