use std::sync::Arc;

use tracing::{info, warn};
use twilight_model::gateway::payload::incoming::MessageCreate;

use crate::CommandMeta;
use crate::game::embeds::starter_cards;
use pokecord_core::Context;
use pokecord_utils::pagination::{ChannelTransport, PaginationSession, launch_session};

pub const META: CommandMeta = CommandMeta {
    name: "starters",
    desc: "Browse the starter Pokémon you can pick from.",
    category: "game",
    usage: "starters",
};

/// Show the starter catalog as a reaction-paged card view.
///
/// Only the invoking user can turn pages. The view stops listening when the
/// configured idle timeout passes or the gateway connection goes away.
pub async fn run(ctx: Context, msg: Box<MessageCreate>) -> anyhow::Result<()> {
    info!(user_id = msg.author.id.get(), "starters command requested");

    let transport = ChannelTransport::new(Arc::clone(&ctx.http), msg.channel_id);
    let pagination = ctx.config.pagination;

    let session = match PaginationSession::new(
        starter_cards(),
        pagination.page_size,
        msg.author.id,
        transport,
    ) {
        Ok(session) => session,
        Err(source) => {
            warn!(?source, "starter pagination rejected");
            ctx.http
                .create_message(msg.channel_id)
                .content("The starter list is unavailable right now.")
                .await?;
            return Ok(());
        }
    };

    launch_session(&ctx.sessions, session, pagination.idle_timeout).await?;

    Ok(())
}
