//! Input elements. Every input is identified by a required `id`.

use crate::error::PrepareError;
use crate::node::{InputProps, Node};
use crate::prepare::{require, require_items};
use crate::schema::{
    Discriminated, INPUT_CHOICE_SET_TYPE, INPUT_DATE_TYPE, INPUT_NUMBER_TYPE, INPUT_TEXT_TYPE,
    INPUT_TIME_TYPE, INPUT_TOGGLE_TYPE,
};
use crate::values::{ChoiceInputStyle, TextInputStyle};
use serde::Serialize;

/// Lets a user enter text.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Input.Text", rename_all = "camelCase")]
pub struct InputText {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_multiline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<TextInputStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_action: Option<Box<Node>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(flatten)]
    pub props: InputProps,
}

impl InputText {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub(crate) fn check(&self) -> Result<(), PrepareError> {
        require(&self.id, Self::TYPE, "id")
    }
}

impl Discriminated for InputText {
    const TYPE: &'static str = INPUT_TEXT_TYPE;
}

/// Lets a user enter a number.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Input.Number", rename_all = "camelCase")]
pub struct InputNumber {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(flatten)]
    pub props: InputProps,
}

impl InputNumber {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub(crate) fn check(&self) -> Result<(), PrepareError> {
        require(&self.id, Self::TYPE, "id")
    }
}

impl Discriminated for InputNumber {
    const TYPE: &'static str = INPUT_NUMBER_TYPE;
}

/// Lets a user choose a date. Bounds and value use `YYYY-MM-DD`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Input.Date", rename_all = "camelCase")]
pub struct InputDate {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(flatten)]
    pub props: InputProps,
}

impl InputDate {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub(crate) fn check(&self) -> Result<(), PrepareError> {
        require(&self.id, Self::TYPE, "id")
    }
}

impl Discriminated for InputDate {
    const TYPE: &'static str = INPUT_DATE_TYPE;
}

/// Lets a user select a time. Bounds and value use `HH:MM`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Input.Time", rename_all = "camelCase")]
pub struct InputTime {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(flatten)]
    pub props: InputProps,
}

impl InputTime {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub(crate) fn check(&self) -> Result<(), PrepareError> {
        require(&self.id, Self::TYPE, "id")
    }
}

impl Discriminated for InputTime {
    const TYPE: &'static str = INPUT_TIME_TYPE;
}

/// Lets a user pick one or more [`InputChoice`]s.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Input.ChoiceSet", rename_all = "camelCase")]
pub struct InputChoiceSet {
    pub id: String,
    pub choices: Vec<InputChoice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_multi_select: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ChoiceInputStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Comma-separated values of the initially selected choices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrap: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(flatten)]
    pub props: InputProps,
}

impl InputChoiceSet {
    pub fn new(id: impl Into<String>, choices: Vec<InputChoice>) -> Self {
        Self {
            id: id.into(),
            choices,
            ..Default::default()
        }
    }

    pub(crate) fn check(&self) -> Result<(), PrepareError> {
        require(&self.id, Self::TYPE, "id")?;
        require_items(&self.choices, Self::TYPE, "choices")
    }
}

impl Discriminated for InputChoiceSet {
    const TYPE: &'static str = INPUT_CHOICE_SET_TYPE;
}

/// One entry of an [`InputChoiceSet`].
///
/// Renderers join multi-select values with commas, so `value` should not contain one.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InputChoice {
    pub title: String,
    pub value: String,
}

impl InputChoice {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
        }
    }

    pub(crate) fn check(&self) -> Result<(), PrepareError> {
        require(&self.title, "Input.Choice", "title")?;
        require(&self.value, "Input.Choice", "value")
    }
}

/// Lets a user choose between two options.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Input.Toggle", rename_all = "camelCase")]
pub struct InputToggle {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_off: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrap: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(flatten)]
    pub props: InputProps,
}

impl InputToggle {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    pub(crate) fn check(&self) -> Result<(), PrepareError> {
        require(&self.id, Self::TYPE, "id")?;
        require(&self.title, Self::TYPE, "title")
    }
}

impl Discriminated for InputToggle {
    const TYPE: &'static str = INPUT_TOGGLE_TYPE;
}
