//! Actions invoked from buttons, links and `selectAction` targets.

use crate::card::NestedCard;
use crate::error::PrepareError;
use crate::prepare::{require, require_items};
use crate::schema::{
    ACTION_OPEN_URL_TYPE, ACTION_SHOW_CARD_TYPE, ACTION_SUBMIT_TYPE,
    ACTION_TOGGLE_VISIBILITY_TYPE, Discriminated,
};
use crate::values::{ActionStyle, AssociatedInputs, Fallback};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Opens a URL in a browser or an embedded web view.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Action.OpenUrl", rename_all = "camelCase")]
pub struct ActionOpenUrl {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ActionStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<Fallback>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub requires: BTreeMap<String, String>,
}

impl ActionOpenUrl {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub(crate) fn check(&self) -> Result<(), PrepareError> {
        require(&self.url, Self::TYPE, "url")
    }
}

impl Discriminated for ActionOpenUrl {
    const TYPE: &'static str = ACTION_OPEN_URL_TYPE;
}

/// Gathers input fields, merges them with `data` and sends an event to the client.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Action.Submit", rename_all = "camelCase")]
pub struct ActionSubmit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub associated_inputs: Option<AssociatedInputs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ActionStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<Fallback>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub requires: BTreeMap<String, String>,
}

impl ActionSubmit {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }
}

impl Discriminated for ActionSubmit {
    const TYPE: &'static str = ACTION_SUBMIT_TYPE;
}

/// Reveals an embedded card when invoked.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Action.ShowCard", rename_all = "camelCase")]
pub struct ActionShowCard {
    pub card: NestedCard,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ActionStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<Fallback>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub requires: BTreeMap<String, String>,
}

impl ActionShowCard {
    pub fn new(title: impl Into<String>, card: NestedCard) -> Self {
        Self {
            card,
            title: Some(title.into()),
            ..Default::default()
        }
    }
}

impl Discriminated for ActionShowCard {
    const TYPE: &'static str = ACTION_SHOW_CARD_TYPE;
}

/// Toggles the visibility of the referenced elements.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Action.ToggleVisibility", rename_all = "camelCase")]
pub struct ActionToggleVisibility {
    pub target_elements: Vec<TargetElement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ActionStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<Fallback>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub requires: BTreeMap<String, String>,
}

impl ActionToggleVisibility {
    pub fn new(title: impl Into<String>, target_elements: Vec<TargetElement>) -> Self {
        Self {
            target_elements,
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub(crate) fn check(&self) -> Result<(), PrepareError> {
        require_items(&self.target_elements, Self::TYPE, "targetElements")
    }
}

impl Discriminated for ActionToggleVisibility {
    const TYPE: &'static str = ACTION_TOGGLE_VISIBILITY_TYPE;
}

/// Element affected by an [`ActionToggleVisibility`].
///
/// `is_visible` left unset toggles; `Some(_)` forces that state.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetElement {
    pub element_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_visible: Option<bool>,
}

impl TargetElement {
    pub fn new(element_id: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
            is_visible: None,
        }
    }

    pub(crate) fn check(&self) -> Result<(), PrepareError> {
        require(&self.element_id, "TargetElement", "elementId")
    }
}
