//! Enumerated property values shared across elements and actions.

use crate::node::Node;
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Spacing {
    Default,
    None,
    Small,
    Medium,
    Large,
    ExtraLarge,
    Padding,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum HorizontalAlignment {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum VerticalAlignment {
    Top,
    Center,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FontType {
    Default,
    Monospace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FontSize {
    Default,
    Small,
    Medium,
    Large,
    ExtraLarge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FontWeight {
    Default,
    Lighter,
    Bolder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Color {
    Default,
    Dark,
    Light,
    Accent,
    Good,
    Warning,
    Attention,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ImageSize {
    Auto,
    Stretch,
    Small,
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ImageStyle {
    Default,
    Person,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ContainerStyle {
    Default,
    Emphasis,
    Good,
    Attention,
    Warning,
    Accent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionStyle {
    Default,
    Positive,
    Destructive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TextInputStyle {
    Text,
    Tel,
    Url,
    Email,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ChoiceInputStyle {
    Compact,
    Expanded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BlockElementHeight {
    Auto,
    Stretch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ImageFillMode {
    Cover,
    RepeatHorizontally,
    RepeatVertically,
    Repeat,
}

/// Which inputs an `Action.Submit` gathers before firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AssociatedInputs {
    Auto,
    None,
}

/// Width of a [`Column`](crate::Column).
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnWidth {
    Auto,
    Stretch,
    /// Relative weight, emitted as a bare number.
    Weight(u32),
    /// Explicit width in pixels, emitted as `"<n>px"`.
    Pixels(u32),
}

impl Serialize for ColumnWidth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ColumnWidth::Auto => serializer.serialize_str("auto"),
            ColumnWidth::Stretch => serializer.serialize_str("stretch"),
            ColumnWidth::Weight(weight) => serializer.serialize_u32(*weight),
            ColumnWidth::Pixels(px) => serializer.serialize_str(&format!("{px}px")),
        }
    }
}

/// What a renderer shows when it cannot render the owning node.
#[derive(Debug, Clone, PartialEq)]
pub enum Fallback {
    /// Emitted as `"drop"`: the node is silently removed.
    Drop,
    Node(Box<Node>),
}

impl Fallback {
    pub fn node(node: impl Into<Node>) -> Self {
        Fallback::Node(Box::new(node.into()))
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Fallback::Drop => None,
            Fallback::Node(node) => Some(node),
        }
    }
}

impl Serialize for Fallback {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Fallback::Drop => serializer.serialize_str("drop"),
            Fallback::Node(node) => node.serialize(serializer),
        }
    }
}
