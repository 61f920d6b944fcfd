/// Card and info embed builders shared across commands.
pub mod embed;
/// Reaction-driven pagination engine.
pub mod pagination;
