//! Outbound message operations a pagination session needs from Discord.

use std::sync::Arc;

use async_trait::async_trait;
use twilight_http::{Client, request::channel::reaction::RequestReactionType};
use twilight_model::id::{
    Id,
    marker::{ChannelMarker, MessageMarker, UserMarker},
};

use crate::embed::{ContentItem, build_content_embed, build_placeholder_embed};

/// Message operations used by a session to publish and refresh its slots.
///
/// `None` content means the slot shows the empty-page placeholder.
#[async_trait]
pub trait SlotTransport: Send + Sync {
    /// Send a new message showing `item` and return its handle.
    async fn send(&self, item: &ContentItem) -> anyhow::Result<Id<MessageMarker>>;

    /// Replace the content shown by an existing slot message.
    async fn edit(
        &self,
        message_id: Id<MessageMarker>,
        item: Option<&ContentItem>,
    ) -> anyhow::Result<()>;

    /// Add a navigation control reaction to a message.
    async fn attach_control(
        &self,
        message_id: Id<MessageMarker>,
        symbol: &str,
    ) -> anyhow::Result<()>;

    /// Remove a user's reaction, acknowledging a consumed navigation input.
    async fn remove_control(
        &self,
        message_id: Id<MessageMarker>,
        symbol: &str,
        user_id: Id<UserMarker>,
    ) -> anyhow::Result<()>;
}

/// [`SlotTransport`] backed by the shared HTTP client, bound to one channel.
#[derive(Clone)]
pub struct ChannelTransport {
    http: Arc<Client>,
    channel_id: Id<ChannelMarker>,
}

impl ChannelTransport {
    pub fn new(http: Arc<Client>, channel_id: Id<ChannelMarker>) -> Self {
        Self { http, channel_id }
    }
}

#[async_trait]
impl SlotTransport for ChannelTransport {
    async fn send(&self, item: &ContentItem) -> anyhow::Result<Id<MessageMarker>> {
        let embed = build_content_embed(item)?;
        let created_message = self
            .http
            .create_message(self.channel_id)
            .embeds(&[embed])
            .await?
            .model()
            .await?;

        Ok(created_message.id)
    }

    async fn edit(
        &self,
        message_id: Id<MessageMarker>,
        item: Option<&ContentItem>,
    ) -> anyhow::Result<()> {
        let embed = match item {
            Some(item) => build_content_embed(item)?,
            None => build_placeholder_embed()?,
        };

        self.http
            .update_message(self.channel_id, message_id)
            .embeds(Some(&[embed]))
            .await?;

        Ok(())
    }

    async fn attach_control(
        &self,
        message_id: Id<MessageMarker>,
        symbol: &str,
    ) -> anyhow::Result<()> {
        self.http
            .create_reaction(
                self.channel_id,
                message_id,
                &RequestReactionType::Unicode { name: symbol },
            )
            .await?;

        Ok(())
    }

    async fn remove_control(
        &self,
        message_id: Id<MessageMarker>,
        symbol: &str,
        user_id: Id<UserMarker>,
    ) -> anyhow::Result<()> {
        self.http
            .delete_reaction(
                self.channel_id,
                message_id,
                &RequestReactionType::Unicode { name: symbol },
                user_id,
            )
            .await?;

        Ok(())
    }
}
