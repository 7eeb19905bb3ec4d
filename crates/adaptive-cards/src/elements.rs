//! Display elements: text, images, media and fact lists.

use crate::error::PrepareError;
use crate::node::{ElementProps, Node};
use crate::prepare::{require, require_items};
use crate::schema::{
    Discriminated, FACT_SET_TYPE, IMAGE_SET_TYPE, IMAGE_TYPE, MEDIA_TYPE, RICH_TEXT_BLOCK_TYPE,
    TEXT_BLOCK_TYPE, TEXT_RUN_TYPE,
};
use crate::values::{Color, FontSize, FontType, FontWeight, HorizontalAlignment, ImageSize, ImageStyle};
use serde::Serialize;

/// Displays text, allowing control over font sizes, weight, and color.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "type", rename = "TextBlock", rename_all = "camelCase")]
pub struct TextBlock {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_type: Option<FontType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_alignment: Option<HorizontalAlignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_subtle: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_lines: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<FontSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrap: Option<bool>,
    #[serde(flatten)]
    pub props: ElementProps,
}

impl TextBlock {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub(crate) fn check(&self) -> Result<(), PrepareError> {
        require(&self.text, Self::TYPE, "text")
    }
}

impl Discriminated for TextBlock {
    const TYPE: &'static str = TEXT_BLOCK_TYPE;
}

/// Displays an image.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Image", rename_all = "camelCase")]
pub struct Image {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_alignment: Option<HorizontalAlignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<ImageSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ImageStyle>,
    /// Pixel width such as `"50px"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select_action: Option<Box<Node>>,
    #[serde(flatten)]
    pub props: ElementProps,
}

impl Image {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub(crate) fn check(&self) -> Result<(), PrepareError> {
        require(&self.url, Self::TYPE, "url")
    }
}

impl Discriminated for Image {
    const TYPE: &'static str = IMAGE_TYPE;
}

/// Displays a media player for audio or video content.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Media", rename_all = "camelCase")]
pub struct Media {
    pub sources: Vec<MediaSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
    #[serde(flatten)]
    pub props: ElementProps,
}

impl Media {
    pub(crate) fn check(&self) -> Result<(), PrepareError> {
        require_items(&self.sources, Self::TYPE, "sources")
    }
}

impl Discriminated for Media {
    const TYPE: &'static str = MEDIA_TYPE;
}

/// A playable source for [`Media`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaSource {
    pub mime_type: String,
    pub url: String,
}

impl MediaSource {
    pub fn new(mime_type: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            url: url.into(),
        }
    }

    pub(crate) fn check(&self) -> Result<(), PrepareError> {
        require(&self.mime_type, "MediaSource", "mimeType")?;
        require(&self.url, "MediaSource", "url")
    }
}

/// A paragraph of independently formatted text runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "type", rename = "RichTextBlock", rename_all = "camelCase")]
pub struct RichTextBlock {
    pub inlines: Vec<TextRun>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_alignment: Option<HorizontalAlignment>,
    #[serde(flatten)]
    pub props: ElementProps,
}

impl RichTextBlock {
    pub(crate) fn check(&self) -> Result<(), PrepareError> {
        require_items(&self.inlines, Self::TYPE, "inlines")
    }
}

impl Discriminated for RichTextBlock {
    const TYPE: &'static str = RICH_TEXT_BLOCK_TYPE;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "type", rename = "TextRun", rename_all = "camelCase")]
pub struct TextRun {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_type: Option<FontType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_subtle: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<FontSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strikethrough: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select_action: Option<Box<Node>>,
}

impl TextRun {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub(crate) fn check(&self) -> Result<(), PrepareError> {
        require(&self.text, Self::TYPE, "text")
    }
}

impl Discriminated for TextRun {
    const TYPE: &'static str = TEXT_RUN_TYPE;
}

/// A series of facts (name/value pairs) in tabular form.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "type", rename = "FactSet", rename_all = "camelCase")]
pub struct FactSet {
    pub facts: Vec<Fact>,
    #[serde(flatten)]
    pub props: ElementProps,
}

impl FactSet {
    pub(crate) fn check(&self) -> Result<(), PrepareError> {
        require_items(&self.facts, Self::TYPE, "facts")
    }
}

impl Discriminated for FactSet {
    const TYPE: &'static str = FACT_SET_TYPE;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Fact {
    pub title: String,
    pub value: String,
}

impl Fact {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
        }
    }

    pub(crate) fn check(&self) -> Result<(), PrepareError> {
        require(&self.title, "Fact", "title")?;
        require(&self.value, "Fact", "value")
    }
}

/// A collection of images displayed as a gallery.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ImageSet", rename_all = "camelCase")]
pub struct ImageSet {
    pub images: Vec<Image>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_size: Option<ImageSize>,
    #[serde(flatten)]
    pub props: ElementProps,
}

impl ImageSet {
    pub(crate) fn check(&self) -> Result<(), PrepareError> {
        require_items(&self.images, Self::TYPE, "images")
    }
}

impl Discriminated for ImageSet {
    const TYPE: &'static str = IMAGE_SET_TYPE;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_block_requires_text() {
        assert_eq!(
            TextBlock::default().check(),
            Err(PrepareError::missing_field("TextBlock", "text"))
        );
        assert_eq!(TextBlock::new("foo").check(), Ok(()));
    }

    #[test]
    fn text_block_emits_type_first_and_skips_unset_fields() {
        let block = TextBlock {
            text: "Title".into(),
            weight: Some(FontWeight::Bolder),
            wrap: Some(false),
            ..Default::default()
        };
        let out = serde_json::to_string(&block).unwrap();
        assert_eq!(
            out,
            r#"{"type":"TextBlock","text":"Title","weight":"bolder","wrap":false}"#
        );
    }

    #[test]
    fn image_requires_url() {
        assert_eq!(
            Image::default().check(),
            Err(PrepareError::missing_field("Image", "url"))
        );
        assert_eq!(Image::new("https://example.com/a.png").check(), Ok(()));
    }

    #[test]
    fn media_requires_sources_and_source_fields() {
        assert_eq!(
            Media::default().check(),
            Err(PrepareError::empty_collection("Media", "sources"))
        );
        assert_eq!(
            MediaSource::new("", "https://example.com/v.mp4").check(),
            Err(PrepareError::missing_field("MediaSource", "mimeType"))
        );
        assert_eq!(
            MediaSource::new("video/mp4", "").check(),
            Err(PrepareError::missing_field("MediaSource", "url"))
        );
    }

    #[test]
    fn media_source_has_no_discriminator() {
        let source = MediaSource::new("video/mp4", "https://example.com/v.mp4");
        assert_eq!(
            serde_json::to_value(&source).unwrap(),
            json!({ "mimeType": "video/mp4", "url": "https://example.com/v.mp4" })
        );
    }

    #[test]
    fn rich_text_requires_inlines() {
        assert_eq!(
            RichTextBlock::default().check(),
            Err(PrepareError::empty_collection("RichTextBlock", "inlines"))
        );
        assert_eq!(
            TextRun::default().check(),
            Err(PrepareError::missing_field("TextRun", "text"))
        );
    }

    #[test]
    fn text_run_serializes_as_tagged_inline() {
        let run = TextRun {
            text: "bold".into(),
            italic: Some(true),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&run).unwrap(),
            json!({ "type": "TextRun", "text": "bold", "italic": true })
        );
    }

    #[test]
    fn fact_set_requires_complete_facts() {
        assert_eq!(
            FactSet::default().check(),
            Err(PrepareError::empty_collection("FactSet", "facts"))
        );
        assert_eq!(
            Fact::new("", "Backlog").check(),
            Err(PrepareError::missing_field("Fact", "title"))
        );
        assert_eq!(
            Fact::new("List:", "").check(),
            Err(PrepareError::missing_field("Fact", "value"))
        );
    }

    #[test]
    fn image_set_requires_images() {
        assert_eq!(
            ImageSet::default().check(),
            Err(PrepareError::empty_collection("ImageSet", "images"))
        );
    }
}
