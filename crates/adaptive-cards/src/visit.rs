//! Depth-first traversal of a card tree.
//!
//! Every item reachable from a card is handed to a [`Visitor`] exactly once,
//! parent before children, in field declaration order (the same order the
//! fields are serialized in). Per node the order is: the node itself, its child
//! collections, `inlineAction`/`selectAction`, `backgroundImage`, then `fallback`.
//! The walk stops at the first error a visitor returns.

use crate::actions::TargetElement;
use crate::card::{Card, NestedCard};
use crate::containers::{BackgroundImage, Column};
use crate::elements::{Fact, Image, MediaSource, TextRun};
use crate::error::PrepareError;
use crate::inputs::InputChoice;
use crate::node::{ElementProps, Node};
use crate::schema::{ADAPTIVE_CARD_TYPE, COLUMN_TYPE, IMAGE_TYPE, TEXT_RUN_TYPE};
use crate::values::Fallback;

/// An item reached during the walk.
#[derive(Debug, Clone, Copy)]
pub enum Visited<'a> {
    Node(&'a Node),
    /// Card embedded in an `Action.ShowCard`.
    Card(&'a NestedCard),
    Column(&'a Column),
    Fact(&'a Fact),
    Choice(&'a InputChoice),
    Source(&'a MediaSource),
    Inline(&'a TextRun),
    /// Image inside an `ImageSet`.
    Image(&'a Image),
    Target(&'a TargetElement),
    BackgroundImage(&'a BackgroundImage),
}

impl Visited<'_> {
    /// Short name of the item: the discriminator where the schema defines one.
    pub fn label(&self) -> &'static str {
        match self {
            Visited::Node(node) => node.discriminator(),
            Visited::Card(_) => ADAPTIVE_CARD_TYPE,
            Visited::Column(_) => COLUMN_TYPE,
            Visited::Fact(_) => "Fact",
            Visited::Choice(_) => "Input.Choice",
            Visited::Source(_) => "MediaSource",
            Visited::Inline(_) => TEXT_RUN_TYPE,
            Visited::Image(_) => IMAGE_TYPE,
            Visited::Target(_) => "TargetElement",
            Visited::BackgroundImage(_) => "BackgroundImage",
        }
    }

    /// Checks the item's own required fields and collections.
    pub fn check(&self) -> Result<(), PrepareError> {
        match self {
            Visited::Node(node) => node.check(),
            Visited::Card(_) | Visited::Column(_) => Ok(()),
            Visited::Fact(fact) => fact.check(),
            Visited::Choice(choice) => choice.check(),
            Visited::Source(source) => source.check(),
            Visited::Inline(run) => run.check(),
            Visited::Image(image) => image.check(),
            Visited::Target(target) => target.check(),
            Visited::BackgroundImage(image) => image.check(),
        }
    }
}

/// Receives every item of a walk; an error ends the walk early.
pub trait Visitor<'a> {
    fn visit(&mut self, item: Visited<'a>) -> Result<(), PrepareError>;
}

impl<'a, F> Visitor<'a> for F
where
    F: FnMut(Visited<'a>) -> Result<(), PrepareError>,
{
    fn visit(&mut self, item: Visited<'a>) -> Result<(), PrepareError> {
        self(item)
    }
}

/// Walks the body, actions, select action and background image of a root card.
///
/// The root itself is not reported; its own invariants belong to the caller.
pub fn walk_card<'a, V: Visitor<'a>>(card: &'a Card, visitor: &mut V) -> Result<(), PrepareError> {
    walk_card_parts(
        &card.body,
        &card.actions,
        card.select_action.as_deref(),
        card.background_image.as_ref(),
        visitor,
    )
}

pub fn walk_nodes<'a, V: Visitor<'a>>(nodes: &'a [Node], visitor: &mut V) -> Result<(), PrepareError> {
    nodes.iter().try_for_each(|node| walk_node(node, visitor))
}

pub fn walk_node<'a, V: Visitor<'a>>(node: &'a Node, visitor: &mut V) -> Result<(), PrepareError> {
    visitor.visit(Visited::Node(node))?;
    match node {
        Node::TextBlock(n) => walk_props(&n.props, visitor),
        Node::Image(n) => {
            walk_optional(n.select_action.as_deref(), visitor)?;
            walk_props(&n.props, visitor)
        }
        Node::Media(n) => {
            for source in &n.sources {
                visitor.visit(Visited::Source(source))?;
            }
            walk_props(&n.props, visitor)
        }
        Node::RichTextBlock(n) => {
            for run in &n.inlines {
                visitor.visit(Visited::Inline(run))?;
                walk_optional(run.select_action.as_deref(), visitor)?;
            }
            walk_props(&n.props, visitor)
        }
        Node::Container(n) => {
            walk_nodes(&n.items, visitor)?;
            walk_optional(n.select_action.as_deref(), visitor)?;
            walk_background(n.background_image.as_ref(), visitor)?;
            walk_props(&n.props, visitor)
        }
        Node::ColumnSet(n) => {
            for column in &n.columns {
                walk_column(column, visitor)?;
            }
            walk_optional(n.select_action.as_deref(), visitor)?;
            walk_props(&n.props, visitor)
        }
        Node::FactSet(n) => {
            for fact in &n.facts {
                visitor.visit(Visited::Fact(fact))?;
            }
            walk_props(&n.props, visitor)
        }
        Node::ImageSet(n) => {
            for image in &n.images {
                visitor.visit(Visited::Image(image))?;
                walk_optional(image.select_action.as_deref(), visitor)?;
                walk_props(&image.props, visitor)?;
            }
            walk_props(&n.props, visitor)
        }
        Node::ActionSet(n) => {
            walk_nodes(&n.actions, visitor)?;
            walk_props(&n.props, visitor)
        }
        Node::InputText(n) => {
            walk_optional(n.inline_action.as_deref(), visitor)?;
            walk_fallback(n.props.fallback.as_ref(), visitor)
        }
        Node::InputNumber(n) => walk_fallback(n.props.fallback.as_ref(), visitor),
        Node::InputDate(n) => walk_fallback(n.props.fallback.as_ref(), visitor),
        Node::InputTime(n) => walk_fallback(n.props.fallback.as_ref(), visitor),
        Node::InputChoiceSet(n) => {
            for choice in &n.choices {
                visitor.visit(Visited::Choice(choice))?;
            }
            walk_fallback(n.props.fallback.as_ref(), visitor)
        }
        Node::InputToggle(n) => walk_fallback(n.props.fallback.as_ref(), visitor),
        Node::ActionOpenUrl(n) => walk_fallback(n.fallback.as_ref(), visitor),
        Node::ActionSubmit(n) => walk_fallback(n.fallback.as_ref(), visitor),
        Node::ActionShowCard(n) => {
            walk_nested_card(&n.card, visitor)?;
            walk_fallback(n.fallback.as_ref(), visitor)
        }
        Node::ActionToggleVisibility(n) => {
            for target in &n.target_elements {
                visitor.visit(Visited::Target(target))?;
            }
            walk_fallback(n.fallback.as_ref(), visitor)
        }
    }
}

fn walk_nested_card<'a, V: Visitor<'a>>(
    card: &'a NestedCard,
    visitor: &mut V,
) -> Result<(), PrepareError> {
    visitor.visit(Visited::Card(card))?;
    walk_card_parts(
        &card.body,
        &card.actions,
        card.select_action.as_deref(),
        card.background_image.as_ref(),
        visitor,
    )
}

fn walk_card_parts<'a, V: Visitor<'a>>(
    body: &'a [Node],
    actions: &'a [Node],
    select_action: Option<&'a Node>,
    background_image: Option<&'a BackgroundImage>,
    visitor: &mut V,
) -> Result<(), PrepareError> {
    walk_nodes(body, visitor)?;
    walk_nodes(actions, visitor)?;
    walk_optional(select_action, visitor)?;
    walk_background(background_image, visitor)
}

fn walk_column<'a, V: Visitor<'a>>(column: &'a Column, visitor: &mut V) -> Result<(), PrepareError> {
    visitor.visit(Visited::Column(column))?;
    walk_nodes(&column.items, visitor)?;
    walk_optional(column.select_action.as_deref(), visitor)?;
    walk_background(column.background_image.as_ref(), visitor)?;
    walk_props(&column.props, visitor)
}

fn walk_optional<'a, V: Visitor<'a>>(
    node: Option<&'a Node>,
    visitor: &mut V,
) -> Result<(), PrepareError> {
    match node {
        Some(node) => walk_node(node, visitor),
        None => Ok(()),
    }
}

fn walk_background<'a, V: Visitor<'a>>(
    image: Option<&'a BackgroundImage>,
    visitor: &mut V,
) -> Result<(), PrepareError> {
    match image {
        Some(image) => visitor.visit(Visited::BackgroundImage(image)),
        None => Ok(()),
    }
}

fn walk_props<'a, V: Visitor<'a>>(
    props: &'a ElementProps,
    visitor: &mut V,
) -> Result<(), PrepareError> {
    walk_fallback(props.fallback.as_ref(), visitor)
}

fn walk_fallback<'a, V: Visitor<'a>>(
    fallback: Option<&'a Fallback>,
    visitor: &mut V,
) -> Result<(), PrepareError> {
    walk_optional(fallback.and_then(Fallback::as_node), visitor)
}

impl Card {
    /// Labels of every item below the card, in visiting order.
    pub fn outline(&self) -> Vec<&'static str> {
        let mut labels = Vec::new();
        let mut collect = |item: Visited<'_>| {
            labels.push(item.label());
            Ok::<(), PrepareError>(())
        };
        walk_card(self, &mut collect).ok();
        labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{ActionOpenUrl, ActionShowCard, ActionSubmit};
    use crate::containers::{ColumnSet, Container};
    use crate::elements::{FactSet, ImageSet, TextBlock};
    use crate::inputs::InputText;
    use crate::node::ElementProps;

    #[test]
    fn visits_body_before_actions() {
        let card = Card::new(
            vec![TextBlock::new("a").into(), TextBlock::new("b").into()],
            vec![ActionSubmit::new("OK").into()],
        );
        assert_eq!(card.outline(), vec!["TextBlock", "TextBlock", "Action.Submit"]);
    }

    #[test]
    fn visits_parents_before_children() {
        let card = Card::new(
            vec![
                Container::new(vec![
                    ColumnSet::new(vec![
                        Column::new(vec![Image::new("https://example.com/1.png").into()]),
                        Column::new(vec![TextBlock::new("right").into()]),
                    ])
                    .into(),
                ])
                .into(),
                FactSet {
                    facts: vec![Fact::new("a", "1"), Fact::new("b", "2")],
                    ..Default::default()
                }
                .into(),
            ],
            Vec::new(),
        );
        assert_eq!(
            card.outline(),
            vec![
                "Container",
                "ColumnSet",
                "Column",
                "Image",
                "Column",
                "TextBlock",
                "FactSet",
                "Fact",
                "Fact",
            ]
        );
    }

    #[test]
    fn descends_into_show_card_and_fallbacks() {
        let nested = NestedCard::new(
            vec![InputText::new("comment").into()],
            vec![ActionSubmit::new("OK").into()],
        );
        let image_set = ImageSet {
            images: vec![Image::new("https://example.com/1.png")],
            props: ElementProps {
                fallback: Some(Fallback::node(TextBlock::new("no images"))),
                ..Default::default()
            },
            ..Default::default()
        };
        let card = Card::new(
            vec![image_set.into()],
            vec![
                ActionShowCard::new("Comment", nested).into(),
                ActionOpenUrl::new("View", "https://adaptivecards.io").into(),
            ],
        );
        assert_eq!(
            card.outline(),
            vec![
                "ImageSet",
                "Image",
                "TextBlock",
                "Action.ShowCard",
                "AdaptiveCard",
                "Input.Text",
                "Action.Submit",
                "Action.OpenUrl",
            ]
        );
    }

    #[test]
    fn visitor_error_stops_the_walk() {
        let card = Card::new(
            vec![
                TextBlock::new("a").into(),
                TextBlock::new("b").into(),
                TextBlock::new("c").into(),
            ],
            Vec::new(),
        );
        let mut seen = 0;
        let result = walk_card(&card, &mut |_item: Visited<'_>| {
            seen += 1;
            if seen == 2 {
                Err(PrepareError::MissingVersion)
            } else {
                Ok(())
            }
        });
        assert_eq!(result, Err(PrepareError::MissingVersion));
        assert_eq!(seen, 2);
    }
}
