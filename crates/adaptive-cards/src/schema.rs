//! Schema URL, version strings and the `"type"` discriminators of every node.

/// Card schema value used by [`Card::new`](crate::Card::new).
pub const DEFAULT_SCHEMA: &str = "http://adaptivecards.io/schemas/adaptive-card.json";

pub const VERSION_1_0: &str = "1.0";
pub const VERSION_1_1: &str = "1.1";
pub const VERSION_1_2: &str = "1.2";
pub const VERSION_1_3: &str = "1.3";

/// Schema versions whose elements this crate models.
pub const KNOWN_VERSIONS: [&str; 4] = [VERSION_1_0, VERSION_1_1, VERSION_1_2, VERSION_1_3];

pub const ADAPTIVE_CARD_TYPE: &str = "AdaptiveCard";
pub const TEXT_BLOCK_TYPE: &str = "TextBlock";
pub const IMAGE_TYPE: &str = "Image";
pub const MEDIA_TYPE: &str = "Media";
pub const RICH_TEXT_BLOCK_TYPE: &str = "RichTextBlock";
pub const TEXT_RUN_TYPE: &str = "TextRun";
pub const CONTAINER_TYPE: &str = "Container";
pub const COLUMN_SET_TYPE: &str = "ColumnSet";
pub const COLUMN_TYPE: &str = "Column";
pub const FACT_SET_TYPE: &str = "FactSet";
pub const IMAGE_SET_TYPE: &str = "ImageSet";
pub const ACTION_SET_TYPE: &str = "ActionSet";
pub const INPUT_TEXT_TYPE: &str = "Input.Text";
pub const INPUT_NUMBER_TYPE: &str = "Input.Number";
pub const INPUT_DATE_TYPE: &str = "Input.Date";
pub const INPUT_TIME_TYPE: &str = "Input.Time";
pub const INPUT_CHOICE_SET_TYPE: &str = "Input.ChoiceSet";
pub const INPUT_TOGGLE_TYPE: &str = "Input.Toggle";
pub const ACTION_OPEN_URL_TYPE: &str = "Action.OpenUrl";
pub const ACTION_SUBMIT_TYPE: &str = "Action.Submit";
pub const ACTION_SHOW_CARD_TYPE: &str = "Action.ShowCard";
pub const ACTION_TOGGLE_VISIBILITY_TYPE: &str = "Action.ToggleVisibility";

/// Types that serialize with a fixed `"type"` discriminator.
///
/// The value of `TYPE` is the same string serde writes as the tag, so callers
/// never set the discriminator by hand.
pub trait Discriminated {
    const TYPE: &'static str;
}

pub fn is_known_version(version: &str) -> bool {
    KNOWN_VERSIONS.contains(&version)
}
