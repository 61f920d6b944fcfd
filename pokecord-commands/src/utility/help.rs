use twilight_model::gateway::payload::incoming::MessageCreate;

use crate::{COMMANDS, CommandMeta};
use pokecord_core::Context;
use pokecord_utils::embed::build_info_embed;

pub const META: CommandMeta = CommandMeta {
    name: "help",
    desc: "Lists out all available commands.",
    category: "utility",
    usage: "help",
};

/// Render the command catalog grouped by category.
pub async fn run(ctx: Context, msg: Box<MessageCreate>) -> anyhow::Result<()> {
    let prefix = &ctx.config.command_prefix;
    let description = grouped_help_description(&sorted_commands(), prefix);
    let footer = format!("Prefix: {prefix}");
    let embed = build_info_embed("Available Commands", description, Some(&footer))?;

    ctx.http
        .create_message(msg.channel_id)
        .embeds(&[embed])
        .await?;

    Ok(())
}

fn sorted_commands() -> Vec<&'static CommandMeta> {
    let mut commands: Vec<&'static CommandMeta> = COMMANDS.iter().collect();
    commands.sort_unstable_by(|left, right| {
        left.category
            .cmp(right.category)
            .then_with(|| left.name.cmp(right.name))
    });
    commands
}

fn grouped_help_description(commands: &[&CommandMeta], prefix: &str) -> String {
    let mut out = String::new();
    let mut current_category = None;

    for command in commands {
        if current_category != Some(command.category) {
            if current_category.is_some() {
                out.push('\n');
            }
            out.push_str(&format!("**{}**\n", command.category));
            current_category = Some(command.category);
        }
        out.push_str(&format!("`{prefix}{}` - {}\n", command.usage, command.desc));
    }

    out.trim_end().to_owned()
}
