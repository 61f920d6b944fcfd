pub mod game;
pub mod utility;

use tracing::trace;
use twilight_model::gateway::payload::incoming::{MessageCreate, ReactionAdd};

use pokecord_core::Context;

// Global command meta data
pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub category: &'static str,
    /// Invocation without the prefix.
    pub usage: &'static str,
}

pub const COMMANDS: &[CommandMeta] = &[
    utility::info::META,
    utility::help::META,
    game::starters::META,
    // Add new commands here
];

pub async fn handle_message(ctx: Context, msg: Box<MessageCreate>) -> anyhow::Result<()> {
    if msg.author.bot {
        return Ok(());
    }

    let Some(cmd) = parse_command(&msg.content, &ctx.config.command_prefix) else {
        return Ok(());
    };

    match cmd.as_str() {
        "info" => utility::info::run(ctx.clone(), msg).await?,
        "help" => utility::help::run(ctx.clone(), msg).await?,
        "starters" => game::starters::run(ctx.clone(), msg).await?,
        // Add new commands here
        _ => {}
    }

    Ok(())
}

/// Forward a reaction to the pagination session owning the reacted message.
pub async fn handle_reaction_add(ctx: Context, reaction: Box<ReactionAdd>) -> anyhow::Result<()> {
    if !ctx.sessions.dispatch_reaction(&reaction).await {
        trace!(
            message_id = reaction.message_id.get(),
            "reaction not routed to a session"
        );
    }

    Ok(())
}

/// Extract the lowercased command name from a prefixed message.
fn parse_command(content: &str, prefix: &str) -> Option<String> {
    let rest = content.trim().strip_prefix(prefix)?.trim_start();
    let cmd = rest.split_whitespace().next()?;
    Some(cmd.to_ascii_lowercase())
}
