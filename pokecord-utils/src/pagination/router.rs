//! Routes gateway reactions to the session owning the reacted message.

use std::{collections::HashMap, sync::Arc};

use tokio::sync::{Mutex, mpsc};
use tracing::warn;
use twilight_model::gateway::GatewayReaction;
use twilight_model::id::{Id, marker::MessageMarker};

use super::navigation::ReactionInput;

/// Buffered reactions per session before new ones are dropped.
const SESSION_INPUT_CAPACITY: usize = 16;

type RouteMap = HashMap<Id<MessageMarker>, mpsc::Sender<ReactionInput>>;

/// Maps control messages to the input channel of their pagination session.
///
/// Cheap to clone; all clones share the same route table.
#[derive(Clone, Default)]
pub struct SessionRouter {
    routes: Arc<Mutex<RouteMap>>,
}

impl SessionRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a control message and return the session's input stream.
    ///
    /// Re-registering a message replaces (and closes) the previous route.
    pub async fn register(&self, message_id: Id<MessageMarker>) -> mpsc::Receiver<ReactionInput> {
        let (sender, receiver) = mpsc::channel(SESSION_INPUT_CAPACITY);
        self.routes.lock().await.insert(message_id, sender);
        receiver
    }

    /// Drop the route for a message, closing its session's input stream.
    pub async fn remove(&self, message_id: Id<MessageMarker>) {
        self.routes.lock().await.remove(&message_id);
    }

    /// Close every route. Sessions end at their next wait.
    pub async fn close_all(&self) {
        self.routes.lock().await.clear();
    }

    pub async fn len(&self) -> usize {
        self.routes.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.routes.lock().await.is_empty()
    }

    /// Forward a gateway reaction. Returns whether a session received it.
    pub async fn dispatch_reaction(&self, reaction: &GatewayReaction) -> bool {
        let input = ReactionInput {
            emoji: reaction.emoji.clone(),
            user_id: reaction.user_id,
        };
        self.dispatch(reaction.message_id, input).await
    }

    /// Forward an input to the session owning `message_id`.
    ///
    /// Reactions on unknown messages are ignored. A closed session's route is
    /// removed on first contact.
    pub async fn dispatch(&self, message_id: Id<MessageMarker>, input: ReactionInput) -> bool {
        let mut routes = self.routes.lock().await;
        let Some(sender) = routes.get(&message_id) else {
            return false;
        };

        match sender.try_send(input) {
            Ok(()) => true,
            Err(mpsc::error::TrySendError::Full(_)) => {
                warn!(
                    message_id = message_id.get(),
                    "pagination session input is full, dropping reaction"
                );
                false
            }
            Err(mpsc::error::TrySendError::Closed(_)) => {
                routes.remove(&message_id);
                false
            }
        }
    }
}
