use twilight_model::gateway::payload::incoming::MessageCreate;

use crate::CommandMeta;
use pokecord_core::Context;

pub const META: CommandMeta = CommandMeta {
    name: "info",
    desc: "How to get started with the bot.",
    category: "utility",
    usage: "info",
};

/// Send the getting-started message.
pub async fn run(ctx: Context, msg: Box<MessageCreate>) -> anyhow::Result<()> {
    let out = welcome_message(&ctx.config.command_prefix);
    ctx.http.create_message(msg.channel_id).content(&out).await?;

    Ok(())
}

fn welcome_message(prefix: &str) -> String {
    format!(
        "Welcome to the world of Pokémon! To get started, you must first choose a starter \
         Pokémon. Type `{prefix}starters` to see the starters. Type `{prefix}help` to see all \
         bot commands."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn welcome_message_uses_configured_prefix() {
        let out = welcome_message("!");
        assert!(out.contains("`!starters`"));
        assert!(out.contains("`!help`"));
    }
}
