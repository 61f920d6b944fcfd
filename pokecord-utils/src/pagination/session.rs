//! Reaction-driven pagination session: slot bank, page state and event loop.

use std::time::Duration;

use anyhow::{Context as _, bail};
use tokio::sync::mpsc;
use tokio::time::{Instant, timeout_at};
use tracing::{debug, trace, warn};
use twilight_model::id::{
    Id,
    marker::{MessageMarker, UserMarker},
};

use crate::embed::ContentItem;

use super::PaginationError;
use super::navigation::{NavigationEvent, ReactionInput, decode_reaction};
use super::page::PageSet;
use super::transport::SlotTransport;

/// Lifecycle of a session. There is no way back from `Terminated`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Uninitialized,
    Active,
    Terminated,
}

/// Why a session's event loop stopped waiting for input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// No navigation event arrived within the configured idle timeout.
    IdleTimeout,
    /// The input stream closed (router dropped the session or shut down).
    InputClosed,
}

/// A paged card view owned by one user.
///
/// Holds one slot per page position. Slot messages are sent once when the
/// session opens and afterwards only edited; the control reactions live on
/// the last occupied slot.
pub struct PaginationSession<T> {
    pages: PageSet<ContentItem>,
    slots: Vec<Option<Id<MessageMarker>>>,
    owner: Id<UserMarker>,
    current_page: usize,
    state: SessionState,
    transport: T,
}

impl<T: SlotTransport> PaginationSession<T> {
    /// Build a session over `items`, validating them into a [`PageSet`].
    pub fn new(
        items: Vec<ContentItem>,
        page_size: usize,
        owner: Id<UserMarker>,
        transport: T,
    ) -> Result<Self, PaginationError> {
        let pages = PageSet::build(items, page_size)?;
        Ok(Self::from_pages(pages, owner, transport))
    }

    /// Build a session over an already validated page set.
    pub fn from_pages(pages: PageSet<ContentItem>, owner: Id<UserMarker>, transport: T) -> Self {
        let slots = vec![None; pages.page_size()];

        Self {
            pages,
            slots,
            owner,
            current_page: 0,
            state: SessionState::Uninitialized,
            transport,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_count(&self) -> usize {
        self.pages.page_count()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn owner(&self) -> Id<UserMarker> {
        self.owner
    }

    /// Slot handles by page position; `None` for positions never sent.
    pub fn slots(&self) -> &[Option<Id<MessageMarker>>] {
        &self.slots
    }

    /// Message carrying the navigation controls: the last occupied slot.
    pub fn control_message(&self) -> Option<Id<MessageMarker>> {
        self.slots.iter().rev().find_map(|slot| *slot)
    }

    /// Publish page 0 and activate the session.
    ///
    /// Positions without a card on the first page stay unsent. Returns the
    /// control message so callers can route reactions before controls appear.
    pub async fn open(&mut self) -> anyhow::Result<Id<MessageMarker>> {
        if self.state != SessionState::Uninitialized {
            bail!("pagination session was already opened");
        }

        self.current_page = 0;
        for (position, item) in self.pages.page_for_index(0).iter().enumerate() {
            let message_id = self.transport.send(item).await?;
            self.slots[position] = Some(message_id);
        }

        self.state = SessionState::Active;
        debug!(
            owner = self.owner.get(),
            page_count = self.pages.page_count(),
            items = self.pages.len(),
            "pagination session opened"
        );

        self.control_message()
            .context("pagination session sent no slot messages")
    }

    /// Attach the four navigation controls to the control message.
    pub async fn attach_controls(&self) -> anyhow::Result<()> {
        let control = self
            .control_message()
            .context("pagination session has no control message")?;

        for event in NavigationEvent::ALL {
            self.transport.attach_control(control, event.symbol()).await?;
        }

        Ok(())
    }

    /// Apply one reaction to the session.
    ///
    /// Foreign or unrecognized reactions are ignored and return `None`. A
    /// recognized event is acknowledged, applied and followed by a full slot
    /// refresh, even when the page did not change.
    pub async fn handle(
        &mut self,
        input: &ReactionInput,
    ) -> anyhow::Result<Option<NavigationEvent>> {
        if self.state != SessionState::Active {
            return Ok(None);
        }

        let event = match decode_reaction(input, self.owner) {
            Ok(event) => event,
            Err(rejection) => {
                trace!(?rejection, user_id = input.user_id.get(), "reaction ignored");
                return Ok(None);
            }
        };

        if let Some(control) = self.control_message() {
            let symbol = input.symbol().unwrap_or(event.symbol());
            if let Err(source) = self
                .transport
                .remove_control(control, symbol, input.user_id)
                .await
            {
                warn!(?source, message_id = control.get(), "failed to remove navigation reaction");
            }
        }

        let previous_page = self.current_page;
        self.current_page = event.apply(self.current_page, self.pages.page_count());
        debug!(
            ?event,
            from = previous_page,
            to = self.current_page,
            "pagination page changed"
        );

        self.refresh().await?;

        Ok(Some(event))
    }

    /// Run the event loop until the input stream fails.
    ///
    /// With `idle_timeout` set, the session ends when no navigation event is
    /// applied within that window; ignored reactions do not extend it.
    pub async fn run(
        mut self,
        mut inputs: mpsc::Receiver<ReactionInput>,
        idle_timeout: Option<Duration>,
    ) -> anyhow::Result<SessionEnd> {
        let mut deadline = idle_timeout.map(|limit| Instant::now() + limit);

        loop {
            let next = match deadline {
                Some(at) => match timeout_at(at, inputs.recv()).await {
                    Ok(next) => next,
                    Err(_) => return Ok(self.finish(SessionEnd::IdleTimeout)),
                },
                None => inputs.recv().await,
            };

            let Some(input) = next else {
                return Ok(self.finish(SessionEnd::InputClosed));
            };

            match self.handle(&input).await {
                Ok(Some(_)) => {
                    deadline = idle_timeout.map(|limit| Instant::now() + limit);
                }
                Ok(None) => {}
                Err(source) => {
                    self.terminate();
                    return Err(source);
                }
            }
        }
    }

    /// Stop accepting input. Later reactions have no effect.
    pub fn terminate(&mut self) {
        self.state = SessionState::Terminated;
    }

    fn finish(&mut self, reason: SessionEnd) -> SessionEnd {
        self.terminate();
        debug!(
            ?reason,
            owner = self.owner.get(),
            page = self.current_page,
            "pagination session ended"
        );
        reason
    }

    async fn refresh(&self) -> anyhow::Result<()> {
        let visible = self.pages.page_for_index(self.current_page);

        for (position, slot) in self.slots.iter().enumerate() {
            let Some(message_id) = slot else {
                continue;
            };
            self.transport.edit(*message_id, visible.get(position)).await?;
        }

        Ok(())
    }
}
