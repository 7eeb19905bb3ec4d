use crate::containers::BackgroundImage;
use crate::node::Node;
use crate::schema::{ADAPTIVE_CARD_TYPE, DEFAULT_SCHEMA, Discriminated, VERSION_1_3};
use crate::values::VerticalAlignment;
use serde::Serialize;

/// Root Adaptive Card document.
///
/// Build with [`Card::new`] and the `with_*` setters, then produce JSON with
/// one of the output operations; each of them prepares the card first.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "AdaptiveCard", rename_all = "camelCase")]
pub struct Card {
    pub version: String,
    #[serde(rename = "$schema")]
    pub schema: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub body: Vec<Node>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<Node>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select_action: Option<Box<Node>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<BackgroundImage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speak: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_content_alignment: Option<VerticalAlignment>,
}

/// Empty card with the default schema URL and no version.
impl Default for Card {
    fn default() -> Self {
        Self {
            version: String::new(),
            schema: DEFAULT_SCHEMA.to_string(),
            body: Vec::new(),
            actions: Vec::new(),
            select_action: None,
            fallback_text: None,
            background_image: None,
            min_height: None,
            speak: None,
            lang: None,
            vertical_content_alignment: None,
        }
    }
}

impl Card {
    /// Card with the default schema URL and version 1.3.
    pub fn new(body: Vec<Node>, actions: Vec<Node>) -> Self {
        Self {
            version: VERSION_1_3.to_string(),
            body,
            actions,
            ..Default::default()
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = schema.into();
        self
    }

    pub fn with_background_image(mut self, image: BackgroundImage) -> Self {
        self.background_image = Some(image);
        self
    }

    /// Minimum height in pixels, e.g. `"150px"`.
    pub fn with_min_height(mut self, min_height: impl Into<String>) -> Self {
        self.min_height = Some(min_height.into());
        self
    }

    pub fn with_fallback_text(mut self, text: impl Into<String>) -> Self {
        self.fallback_text = Some(text.into());
        self
    }

    pub fn with_speak(mut self, speak: impl Into<String>) -> Self {
        self.speak = Some(speak.into());
        self
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    pub fn with_vertical_content_alignment(mut self, alignment: VerticalAlignment) -> Self {
        self.vertical_content_alignment = Some(alignment);
        self
    }

    pub fn with_select_action(mut self, action: impl Into<Node>) -> Self {
        self.select_action = Some(Box::new(action.into()));
        self
    }
}

impl Discriminated for Card {
    const TYPE: &'static str = ADAPTIVE_CARD_TYPE;
}

/// Card payload of an [`ActionShowCard`](crate::ActionShowCard).
///
/// Same shape as [`Card`], but `version` and `$schema` are optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "type", rename = "AdaptiveCard", rename_all = "camelCase")]
pub struct NestedCard {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub body: Vec<Node>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<Node>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select_action: Option<Box<Node>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<BackgroundImage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speak: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_content_alignment: Option<VerticalAlignment>,
}

impl NestedCard {
    pub fn new(body: Vec<Node>, actions: Vec<Node>) -> Self {
        Self {
            body,
            actions,
            ..Default::default()
        }
    }
}

impl Discriminated for NestedCard {
    const TYPE: &'static str = ADAPTIVE_CARD_TYPE;
}
