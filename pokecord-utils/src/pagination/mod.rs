//! Stable facade for the reaction-driven pagination engine.

use std::time::Duration;

/// Cards shown per page when no page size is configured.
pub const DEFAULT_PAGE_SIZE: usize = 3;

mod launch;
pub mod navigation;
mod page;
mod router;
mod session;
pub mod transport;

pub use launch::{LaunchedSession, launch_session};
pub use navigation::{NavigationEvent, NavigationRejection, ReactionInput, decode_reaction};
pub use page::{PageSet, last_page_index, page_window};
pub use router::SessionRouter;
pub use session::{PaginationSession, SessionEnd, SessionState};
pub use transport::{ChannelTransport, SlotTransport};

/// Construction failures for paged views.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaginationError {
    /// Empty item list or zero page size.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

/// Runtime settings shared by every paginated command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationConfig {
    /// Cards per page, and so slot messages per session.
    pub page_size: usize,
    /// Idle window after which a session stops listening. `None` waits forever.
    pub idle_timeout: Option<Duration>,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            idle_timeout: None,
        }
    }
}
