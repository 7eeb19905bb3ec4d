//! Preparation pass: validates a card tree before it is serialized.
//!
//! Discriminators are carried by the node types, so preparation never mutates
//! the tree; it walks it once, depth-first, and returns the first violation.

use crate::card::Card;
use crate::error::PrepareError;
use crate::visit::{Visited, Visitor, walk_card};
use tracing::{debug, trace};

pub(crate) fn require(value: &str, node: &'static str, field: &'static str) -> Result<(), PrepareError> {
    if value.is_empty() {
        return Err(PrepareError::missing_field(node, field));
    }
    Ok(())
}

pub(crate) fn require_items<T>(
    items: &[T],
    node: &'static str,
    collection: &'static str,
) -> Result<(), PrepareError> {
    if items.is_empty() {
        return Err(PrepareError::empty_collection(node, collection));
    }
    Ok(())
}

/// Visitor that checks each item's own invariants.
#[derive(Debug, Default)]
struct Validator {
    visited: usize,
}

impl<'a> Visitor<'a> for Validator {
    fn visit(&mut self, item: Visited<'a>) -> Result<(), PrepareError> {
        self.visited += 1;
        trace!(item = item.label(), "preparing");
        item.check()
    }
}

impl Card {
    /// Checks the version and every node reachable from the card.
    pub fn prepare(&self) -> Result<(), PrepareError> {
        debug!(
            version = %self.version,
            body = self.body.len(),
            actions = self.actions.len(),
            "preparing adaptive card"
        );
        let mut validator = Validator::default();
        let result = if self.version.is_empty() {
            Err(PrepareError::MissingVersion)
        } else {
            walk_card(self, &mut validator)
        };
        match &result {
            Ok(()) => debug!(nodes = validator.visited, "adaptive card prepared"),
            Err(err) => debug!(error = %err, "adaptive card rejected"),
        }
        result
    }

    /// Alias of [`Card::prepare`].
    pub fn validate(&self) -> Result<(), PrepareError> {
        self.prepare()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{ActionShowCard, ActionSubmit, ActionToggleVisibility, TargetElement};
    use crate::card::NestedCard;
    use crate::containers::{BackgroundImage, Column, ColumnSet, Container};
    use crate::elements::{Image, TextBlock};
    use crate::inputs::{InputChoice, InputChoiceSet};
    use crate::node::ElementProps;
    use crate::values::Fallback;

    #[test]
    fn require_rejects_empty_strings() {
        assert_eq!(require("x", "TextBlock", "text"), Ok(()));
        assert_eq!(
            require("", "TextBlock", "text"),
            Err(PrepareError::missing_field("TextBlock", "text"))
        );
    }

    #[test]
    fn empty_card_without_version_fails() {
        let card = Card::default();
        assert_eq!(card.prepare(), Err(PrepareError::MissingVersion));
    }

    #[test]
    fn version_is_checked_before_body() {
        let card = Card::new(vec![TextBlock::default().into()], Vec::new()).with_version("");
        assert_eq!(card.validate(), Err(PrepareError::MissingVersion));
    }

    #[test]
    fn first_error_in_document_order_wins() {
        let card = Card::new(
            vec![
                Container::new(vec![TextBlock::new("ok").into(), Image::default().into()]).into(),
                TextBlock::default().into(),
            ],
            Vec::new(),
        );
        assert_eq!(
            card.prepare(),
            Err(PrepareError::missing_field("Image", "url"))
        );
    }

    #[test]
    fn errors_surface_from_nested_cards() {
        let nested = NestedCard::new(vec![TextBlock::default().into()], Vec::new());
        let card = Card::new(Vec::new(), vec![ActionShowCard::new("More", nested).into()]);
        assert_eq!(
            card.prepare(),
            Err(PrepareError::missing_field("TextBlock", "text"))
        );
    }

    #[test]
    fn nested_card_needs_no_version() {
        let nested = NestedCard::new(Vec::new(), vec![ActionSubmit::new("OK").into()]);
        let card = Card::new(Vec::new(), vec![ActionShowCard::new("More", nested).into()]);
        assert_eq!(card.prepare(), Ok(()));
    }

    #[test]
    fn columns_are_checked() {
        let card = Card::new(
            vec![
                ColumnSet::new(vec![
                    Column::new(Vec::new()),
                    Column {
                        background_image: Some(BackgroundImage::default()),
                        ..Column::new(vec![TextBlock::new("right").into()])
                    },
                ])
                .into(),
            ],
            Vec::new(),
        );
        assert_eq!(
            card.prepare(),
            Err(PrepareError::missing_field("BackgroundImage", "url"))
        );
    }

    #[test]
    fn choice_set_without_choices_fails() {
        let mut set = InputChoiceSet::new(
            "color",
            vec![
                InputChoice::new("Red", "red"),
                InputChoice::new("Green", "green"),
                InputChoice::new("Blue", "blue"),
            ],
        );
        let card = Card::new(vec![set.clone().into()], Vec::new());
        assert_eq!(card.prepare(), Ok(()));

        set.choices.clear();
        let card = Card::new(vec![set.into()], Vec::new());
        assert_eq!(
            card.prepare(),
            Err(PrepareError::empty_collection("Input.ChoiceSet", "choices"))
        );
    }

    #[test]
    fn fallback_nodes_are_prepared() {
        let block = TextBlock {
            props: ElementProps {
                fallback: Some(Fallback::node(Image::default())),
                ..Default::default()
            },
            ..TextBlock::new("primary")
        };
        let card = Card::new(vec![block.into()], Vec::new());
        assert_eq!(
            card.prepare(),
            Err(PrepareError::missing_field("Image", "url"))
        );
    }

    #[test]
    fn select_action_is_prepared() {
        let card = Card::new(vec![TextBlock::new("hi").into()], Vec::new())
            .with_select_action(ActionToggleVisibility::new("Toggle", Vec::new()));
        assert_eq!(
            card.prepare(),
            Err(PrepareError::empty_collection(
                "Action.ToggleVisibility",
                "targetElements"
            ))
        );

        let card = Card::new(vec![TextBlock::new("hi").into()], Vec::new()).with_select_action(
            ActionToggleVisibility::new("Toggle", vec![TargetElement::new("details")]),
        );
        assert_eq!(card.prepare(), Ok(()));
    }

    #[test]
    fn preparation_leaves_the_tree_untouched() {
        let card = Card::new(vec![TextBlock::new("hi").into()], Vec::new());
        let before = card.clone();
        card.prepare().unwrap();
        assert_eq!(card, before);
    }
}
