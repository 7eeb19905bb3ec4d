//! Layout elements that group other nodes.

use crate::error::PrepareError;
use crate::node::{ElementProps, Node};
use crate::prepare::{require, require_items};
use crate::schema::{ACTION_SET_TYPE, COLUMN_SET_TYPE, COLUMN_TYPE, CONTAINER_TYPE, Discriminated};
use crate::values::{
    ColumnWidth, ContainerStyle, HorizontalAlignment, ImageFillMode, VerticalAlignment,
};
use serde::Serialize;

/// Groups items together.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Container", rename_all = "camelCase")]
pub struct Container {
    pub items: Vec<Node>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select_action: Option<Box<Node>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ContainerStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_content_alignment: Option<VerticalAlignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bleed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<BackgroundImage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<String>,
    #[serde(flatten)]
    pub props: ElementProps,
}

impl Container {
    pub fn new(items: Vec<Node>) -> Self {
        Self {
            items,
            ..Default::default()
        }
    }

    pub(crate) fn check(&self) -> Result<(), PrepareError> {
        require_items(&self.items, Self::TYPE, "items")
    }
}

impl Discriminated for Container {
    const TYPE: &'static str = CONTAINER_TYPE;
}

/// Divides a region into columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ColumnSet", rename_all = "camelCase")]
pub struct ColumnSet {
    pub columns: Vec<Column>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select_action: Option<Box<Node>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ContainerStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bleed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_alignment: Option<HorizontalAlignment>,
    #[serde(flatten)]
    pub props: ElementProps,
}

impl ColumnSet {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            ..Default::default()
        }
    }
}

impl Discriminated for ColumnSet {
    const TYPE: &'static str = COLUMN_SET_TYPE;
}

/// A single column within a [`ColumnSet`]. An empty column is allowed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Column", rename_all = "camelCase")]
pub struct Column {
    pub items: Vec<Node>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<ColumnWidth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select_action: Option<Box<Node>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<BackgroundImage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bleed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ContainerStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_content_alignment: Option<VerticalAlignment>,
    #[serde(flatten)]
    pub props: ElementProps,
}

impl Column {
    pub fn new(items: Vec<Node>) -> Self {
        Self {
            items,
            ..Default::default()
        }
    }

    pub fn with_width(mut self, width: ColumnWidth) -> Self {
        self.width = Some(width);
        self
    }
}

impl Discriminated for Column {
    const TYPE: &'static str = COLUMN_TYPE;
}

/// Displays a set of actions inside the card body.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ActionSet", rename_all = "camelCase")]
pub struct ActionSet {
    pub actions: Vec<Node>,
    #[serde(flatten)]
    pub props: ElementProps,
}

impl ActionSet {
    pub fn new(actions: Vec<Node>) -> Self {
        Self {
            actions,
            ..Default::default()
        }
    }

    pub(crate) fn check(&self) -> Result<(), PrepareError> {
        require_items(&self.actions, Self::TYPE, "actions")
    }
}

impl Discriminated for ActionSet {
    const TYPE: &'static str = ACTION_SET_TYPE;
}

/// Image drawn behind a card, container or column.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundImage {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_mode: Option<ImageFillMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_alignment: Option<HorizontalAlignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_alignment: Option<VerticalAlignment>,
}

impl BackgroundImage {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub(crate) fn check(&self) -> Result<(), PrepareError> {
        require(&self.url, "BackgroundImage", "url")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::TextBlock;
    use serde_json::json;

    #[test]
    fn container_requires_items() {
        assert_eq!(
            Container::default().check(),
            Err(PrepareError::empty_collection("Container", "items"))
        );
        assert_eq!(Container::new(vec![TextBlock::new("foo").into()]).check(), Ok(()));
    }

    #[test]
    fn action_set_requires_actions() {
        assert_eq!(
            ActionSet::default().check(),
            Err(PrepareError::empty_collection("ActionSet", "actions"))
        );
    }

    #[test]
    fn background_image_requires_url() {
        assert_eq!(
            BackgroundImage::default().check(),
            Err(PrepareError::missing_field("BackgroundImage", "url"))
        );
    }

    #[test]
    fn column_serializes_with_its_own_discriminator() {
        let column = Column::new(vec![TextBlock::new("a").into()]).with_width(ColumnWidth::Stretch);
        assert_eq!(
            serde_json::to_value(&column).unwrap(),
            json!({
                "type": "Column",
                "items": [{ "type": "TextBlock", "text": "a" }],
                "width": "stretch"
            })
        );
    }

    #[test]
    fn empty_column_set_still_emits_columns() {
        assert_eq!(
            serde_json::to_value(ColumnSet::default()).unwrap(),
            json!({ "type": "ColumnSet", "columns": [] })
        );
    }
}
