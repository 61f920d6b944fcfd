/// Static starter data.
pub mod catalog;
/// Card rendering for game data.
pub mod embeds;
/// `starters` command.
pub mod starters;
