//! Rendering of game data into pagination cards.

use pokecord_utils::embed::ContentItem;

use super::catalog::{STARTERS, Starter};

/// Render a starter as a card: name, type color and artwork.
pub fn starter_card(starter: &Starter) -> ContentItem {
    ContentItem::new(starter.name, starter.kind.color()).with_image(starter.artwork_url())
}

/// Cards for the whole starter catalog, in catalog order.
pub fn starter_cards() -> Vec<ContentItem> {
    STARTERS.iter().map(starter_card).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::catalog::ElementType;

    #[test]
    fn starter_card_uses_type_color_and_artwork() {
        let card = starter_card(&STARTERS[4]);

        assert_eq!(card.title(), "Cyndaquil");
        assert_eq!(card.color(), ElementType::Fire.color());
        assert_eq!(
            card.image_url(),
            Some("https://assets.pokemon.com/assets/cms2/img/pokedex/full/155.png")
        );
    }

    #[test]
    fn renders_whole_catalog_in_order() {
        let cards = starter_cards();
        assert_eq!(cards.len(), STARTERS.len());
        assert_eq!(cards[0].title(), "Bulbasaur");
        assert_eq!(cards[23].title(), "Sobble");
    }
}
