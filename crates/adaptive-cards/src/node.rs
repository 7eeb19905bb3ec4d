use crate::actions::{ActionOpenUrl, ActionShowCard, ActionSubmit, ActionToggleVisibility};
use crate::containers::{ActionSet, ColumnSet, Container};
use crate::elements::{FactSet, Image, ImageSet, Media, RichTextBlock, TextBlock};
use crate::error::PrepareError;
use crate::inputs::{InputChoiceSet, InputDate, InputNumber, InputText, InputTime, InputToggle};
use crate::schema::Discriminated;
use crate::values::{BlockElementHeight, Fallback, Spacing};
use serde::Serialize;
use std::collections::BTreeMap;

/// Any element or action that can appear in a card's `body` or `actions`.
///
/// The set is closed: it mirrors the fixed Adaptive Card schema. Each payload
/// type writes its own `"type"` discriminator, so the enum itself is untagged.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Node {
    TextBlock(TextBlock),
    Image(Image),
    Media(Media),
    RichTextBlock(RichTextBlock),
    Container(Container),
    ColumnSet(ColumnSet),
    FactSet(FactSet),
    ImageSet(ImageSet),
    ActionSet(ActionSet),
    InputText(InputText),
    InputNumber(InputNumber),
    InputDate(InputDate),
    InputTime(InputTime),
    InputChoiceSet(InputChoiceSet),
    InputToggle(InputToggle),
    ActionOpenUrl(ActionOpenUrl),
    ActionSubmit(ActionSubmit),
    ActionShowCard(ActionShowCard),
    ActionToggleVisibility(ActionToggleVisibility),
}

macro_rules! node_variants {
    ($($variant:ident),* $(,)?) => {
        impl Node {
            /// The `"type"` string this node serializes with.
            pub fn discriminator(&self) -> &'static str {
                match self {
                    $(Node::$variant(_) => <$variant as Discriminated>::TYPE,)*
                }
            }
        }

        $(
            impl From<$variant> for Node {
                fn from(value: $variant) -> Self {
                    Node::$variant(value)
                }
            }
        )*
    };
}

node_variants!(
    TextBlock,
    Image,
    Media,
    RichTextBlock,
    Container,
    ColumnSet,
    FactSet,
    ImageSet,
    ActionSet,
    InputText,
    InputNumber,
    InputDate,
    InputTime,
    InputChoiceSet,
    InputToggle,
    ActionOpenUrl,
    ActionSubmit,
    ActionShowCard,
    ActionToggleVisibility,
);

impl Node {
    /// Checks this node's own required fields; children are left to the walk.
    pub(crate) fn check(&self) -> Result<(), PrepareError> {
        match self {
            Node::TextBlock(n) => n.check(),
            Node::Image(n) => n.check(),
            Node::Media(n) => n.check(),
            Node::RichTextBlock(n) => n.check(),
            Node::Container(n) => n.check(),
            Node::FactSet(n) => n.check(),
            Node::ImageSet(n) => n.check(),
            Node::ActionSet(n) => n.check(),
            Node::InputText(n) => n.check(),
            Node::InputNumber(n) => n.check(),
            Node::InputDate(n) => n.check(),
            Node::InputTime(n) => n.check(),
            Node::InputChoiceSet(n) => n.check(),
            Node::InputToggle(n) => n.check(),
            Node::ActionOpenUrl(n) => n.check(),
            Node::ActionToggleVisibility(n) => n.check(),
            Node::ColumnSet(_) | Node::ActionSubmit(_) | Node::ActionShowCard(_) => Ok(()),
        }
    }
}

/// Properties every element inherits from the schema's base element.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<Spacing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<BlockElementHeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_visible: Option<bool>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub requires: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<Fallback>,
}

/// [`ElementProps`] for inputs, which carry their own required `id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<Spacing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<BlockElementHeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_visible: Option<bool>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub requires: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<Fallback>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::NestedCard;
    use crate::elements::{Fact, MediaSource, TextRun};
    use crate::inputs::InputChoice;
    use crate::actions::TargetElement;
    use serde_json::Value;

    fn minimal_nodes() -> Vec<Node> {
        vec![
            TextBlock::new("foo").into(),
            Image::new("https://example.com/a.png").into(),
            Media {
                sources: vec![MediaSource::new("video/mp4", "https://example.com/v.mp4")],
                ..Default::default()
            }
            .into(),
            RichTextBlock {
                inlines: vec![TextRun::new("run")],
                ..Default::default()
            }
            .into(),
            Container::new(vec![TextBlock::new("inner").into()]).into(),
            ColumnSet::default().into(),
            FactSet {
                facts: vec![Fact::new("Board:", "Adaptive Card")],
                ..Default::default()
            }
            .into(),
            ImageSet {
                images: vec![Image::new("https://example.com/b.png")],
                ..Default::default()
            }
            .into(),
            ActionSet::new(vec![ActionSubmit::new("OK").into()]).into(),
            InputText::new("text").into(),
            InputNumber::new("number").into(),
            InputDate::new("date").into(),
            InputTime::new("time").into(),
            InputChoiceSet::new("choice", vec![InputChoice::new("Red", "red")]).into(),
            InputToggle::new("toggle", "Accept").into(),
            ActionOpenUrl::new("View", "https://adaptivecards.io").into(),
            ActionSubmit::new("OK").into(),
            ActionShowCard::new("More", NestedCard::default()).into(),
            ActionToggleVisibility::new("Toggle", vec![TargetElement::new("text")]).into(),
        ]
    }

    #[test]
    fn minimal_nodes_pass_their_own_checks() {
        for node in minimal_nodes() {
            assert_eq!(node.check(), Ok(()), "{}", node.discriminator());
        }
    }

    #[test]
    fn serialized_type_matches_discriminator() {
        for node in minimal_nodes() {
            let value = serde_json::to_value(&node).unwrap();
            assert_eq!(
                value.get("type").and_then(Value::as_str),
                Some(node.discriminator())
            );
        }
    }

    #[test]
    fn element_props_follow_own_fields() {
        let block = TextBlock {
            props: ElementProps {
                id: Some("title".into()),
                separator: Some(true),
                fallback: Some(Fallback::Drop),
                ..Default::default()
            },
            ..TextBlock::new("Hi")
        };
        assert_eq!(
            serde_json::to_string(&block).unwrap(),
            r#"{"type":"TextBlock","text":"Hi","id":"title","separator":true,"fallback":"drop"}"#
        );
    }
}
