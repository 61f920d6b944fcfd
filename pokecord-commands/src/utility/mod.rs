/// `help` command.
pub mod help;
/// `info` command.
pub mod info;
