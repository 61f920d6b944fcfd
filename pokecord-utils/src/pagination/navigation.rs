//! Reaction symbol decoding and page transitions.

use twilight_model::channel::message::EmojiReactionType;
use twilight_model::id::{Id, marker::UserMarker};

/// Discord may append U+FE0F to emoji sent by some clients.
const VARIATION_SELECTOR: char = '\u{fe0f}';

/// A page transition requested through a navigation control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationEvent {
    First,
    Previous,
    Next,
    Last,
}

impl NavigationEvent {
    /// Controls in the order they are attached to the control message.
    pub const ALL: [NavigationEvent; 4] = [
        NavigationEvent::First,
        NavigationEvent::Previous,
        NavigationEvent::Next,
        NavigationEvent::Last,
    ];

    /// Reaction symbol used for this control.
    pub fn symbol(self) -> &'static str {
        match self {
            NavigationEvent::First => "⏪",
            NavigationEvent::Previous => "◀",
            NavigationEvent::Next => "▶",
            NavigationEvent::Last => "⏩",
        }
    }

    /// Decode a unicode reaction name into a navigation control.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let symbol = symbol.trim_end_matches(VARIATION_SELECTOR);
        Self::ALL
            .into_iter()
            .find(|event| event.symbol() == symbol)
    }

    /// Compute the page shown after this event, bounded to `0..=page_count`.
    pub fn apply(self, current_page: usize, page_count: usize) -> usize {
        match self {
            NavigationEvent::First => 0,
            NavigationEvent::Previous => current_page.saturating_sub(1),
            NavigationEvent::Next => current_page.saturating_add(1).min(page_count),
            NavigationEvent::Last => page_count,
        }
    }
}

/// A raw reaction forwarded to a pagination session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionInput {
    pub emoji: EmojiReactionType,
    pub user_id: Id<UserMarker>,
}

impl ReactionInput {
    /// Unicode name of the reaction, as Discord reported it.
    pub fn symbol(&self) -> Option<&str> {
        match &self.emoji {
            EmojiReactionType::Unicode { name } => Some(name),
            EmojiReactionType::Custom { .. } => None,
        }
    }
}

/// Why a reaction produced no navigation event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationRejection {
    /// Reaction came from someone other than the session owner.
    AuthorizationMismatch,
    /// Reaction is not one of the navigation controls.
    UnrecognizedEvent,
}

/// Decode a reaction into a navigation event for the session owned by `owner`.
///
/// Ownership is checked first so foreign reactions are never inspected further.
pub fn decode_reaction(
    input: &ReactionInput,
    owner: Id<UserMarker>,
) -> Result<NavigationEvent, NavigationRejection> {
    if input.user_id != owner {
        return Err(NavigationRejection::AuthorizationMismatch);
    }

    match &input.emoji {
        EmojiReactionType::Unicode { name } => {
            NavigationEvent::from_symbol(name).ok_or(NavigationRejection::UnrecognizedEvent)
        }
        EmojiReactionType::Custom { .. } => Err(NavigationRejection::UnrecognizedEvent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unicode(name: &str, user: u64) -> ReactionInput {
        ReactionInput {
            emoji: EmojiReactionType::Unicode {
                name: name.to_owned(),
            },
            user_id: Id::new(user),
        }
    }

    #[test]
    fn decodes_every_control_symbol() {
        for event in NavigationEvent::ALL {
            assert_eq!(
                decode_reaction(&unicode(event.symbol(), 7), Id::new(7)),
                Ok(event)
            );
        }
    }

    #[test]
    fn accepts_variation_selector_suffix() {
        assert_eq!(
            NavigationEvent::from_symbol("▶\u{fe0f}"),
            Some(NavigationEvent::Next)
        );
        assert_eq!(
            NavigationEvent::from_symbol("◀\u{fe0f}"),
            Some(NavigationEvent::Previous)
        );
    }

    #[test]
    fn rejects_foreign_user_before_symbol() {
        assert_eq!(
            decode_reaction(&unicode("🔥", 8), Id::new(7)),
            Err(NavigationRejection::AuthorizationMismatch)
        );
        assert_eq!(
            decode_reaction(&unicode("▶", 8), Id::new(7)),
            Err(NavigationRejection::AuthorizationMismatch)
        );
    }

    #[test]
    fn rejects_unknown_and_custom_emoji() {
        assert_eq!(
            decode_reaction(&unicode("🔥", 7), Id::new(7)),
            Err(NavigationRejection::UnrecognizedEvent)
        );

        let custom = ReactionInput {
            emoji: EmojiReactionType::Custom {
                animated: false,
                id: Id::new(99),
                name: Some("next".to_owned()),
            },
            user_id: Id::new(7),
        };
        assert_eq!(
            decode_reaction(&custom, Id::new(7)),
            Err(NavigationRejection::UnrecognizedEvent)
        );
    }

    #[test]
    fn previous_and_next_stop_at_bounds() {
        assert_eq!(NavigationEvent::Previous.apply(0, 2), 0);
        assert_eq!(NavigationEvent::Previous.apply(2, 2), 1);
        assert_eq!(NavigationEvent::Next.apply(2, 2), 2);
        assert_eq!(NavigationEvent::Next.apply(0, 2), 1);
    }

    #[test]
    fn first_and_last_are_absolute() {
        for current in 0..=5 {
            assert_eq!(NavigationEvent::First.apply(current, 5), 0);
            assert_eq!(NavigationEvent::Last.apply(current, 5), 5);
        }
    }
}
