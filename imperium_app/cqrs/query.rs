use async_trait::async_trait;
use imperium_types::errors::ApplicationError;
use std::sync::Arc;

use crate::{config::Config, session::GameSession};

/// A marker trait for Query structs.
/// Queries are operations that read the state of the game.
pub trait Query: Send + Sync {
    /// The data type that this query will return.
    type Output: Send + Sync;
}

/// A trait for handlers that execute Queries.
/// It receives the query and a read-only view of the session.
#[async_trait]
pub trait QueryHandler<Q: Query> {
    async fn handle(
        &self,
        query: Q,
        session: &GameSession,
        config: &Arc<Config>,
    ) -> Result<Q::Output, ApplicationError>;
}
