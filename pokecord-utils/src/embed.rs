use twilight_model::channel::message::embed::Embed;
use twilight_util::builder::embed::{EmbedBuilder, EmbedFooterBuilder, ImageSource};

/// Default embed color used across the bot UI.
pub const DEFAULT_EMBED_COLOR: u32 = 0xEE_15_15;

/// Title shown on a slot whose position has no card on the current page.
pub const PLACEHOLDER_TITLE: &str = "No Content";

/// A single renderable card: title, accent color and optional artwork.
///
/// Immutable once built; paged views clone nothing but the rendered embed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentItem {
    title: String,
    color: u32,
    image_url: Option<String>,
}

impl ContentItem {
    pub fn new(title: impl Into<String>, color: u32) -> Self {
        Self {
            title: title.into(),
            color,
            image_url: None,
        }
    }

    /// Attach an image reference shown as the card's main artwork.
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn color(&self) -> u32 {
        self.color
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }
}

/// Render a card into the embed sent to a pagination slot.
pub fn build_content_embed(item: &ContentItem) -> anyhow::Result<Embed> {
    let mut builder = EmbedBuilder::new().title(item.title()).color(item.color());

    if let Some(url) = item.image_url() {
        builder = builder.image(ImageSource::url(url)?);
    }

    Ok(builder.validate()?.build())
}

/// Render the explicit empty state for a slot past the end of the final page.
pub fn build_placeholder_embed() -> anyhow::Result<Embed> {
    Ok(EmbedBuilder::new()
        .title(PLACEHOLDER_TITLE)
        .color(DEFAULT_EMBED_COLOR)
        .validate()?
        .build())
}

/// Build a plain informational embed with an optional footer.
pub fn build_info_embed(
    title: &str,
    description: impl Into<String>,
    footer: Option<&str>,
) -> anyhow::Result<Embed> {
    let builder = EmbedBuilder::new()
        .title(title)
        .color(DEFAULT_EMBED_COLOR)
        .description(description);

    let embed = match footer {
        Some(text) if !text.is_empty() => builder
            .footer(EmbedFooterBuilder::new(text).build())
            .validate()?
            .build(),
        _ => builder.validate()?.build(),
    };

    Ok(embed)
}
