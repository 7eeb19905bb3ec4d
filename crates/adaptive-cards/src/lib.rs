//! Typed Adaptive Card documents.
//!
//! A card is assembled from plain values (elements and actions wrapped in
//! [`Node`]), prepared (every required field and collection is checked, depth
//! first, stopping at the first violation) and serialized to schema-conformant
//! JSON. Each node type carries its own `"type"` discriminator, so callers never
//! set it by hand.
//!
//! ```
//! use adaptive_cards::{Card, Container, TextBlock, VERSION_1_0};
//!
//! let card = Card::new(
//!     vec![Container::new(vec![TextBlock::new("foo").into()]).into()],
//!     Vec::new(),
//! )
//! .with_version(VERSION_1_0);
//! let json = card.to_json_string().unwrap();
//! assert!(json.contains(r#""type":"AdaptiveCard","version":"1.0""#));
//! ```

pub mod actions;
pub mod card;
pub mod containers;
pub mod elements;
pub mod error;
pub mod format;
pub mod inputs;
pub mod node;
pub mod output;
pub mod prepare;
pub mod schema;
pub mod values;
pub mod visit;

pub use actions::{ActionOpenUrl, ActionShowCard, ActionSubmit, ActionToggleVisibility, TargetElement};
pub use card::{Card, NestedCard};
pub use containers::{ActionSet, BackgroundImage, Column, ColumnSet, Container};
pub use elements::{
    Fact, FactSet, Image, ImageSet, Media, MediaSource, RichTextBlock, TextBlock, TextRun,
};
pub use error::{CardError, PrepareError};
pub use format::OutputFormat;
pub use inputs::{
    InputChoice, InputChoiceSet, InputDate, InputNumber, InputText, InputTime, InputToggle,
};
pub use node::{ElementProps, InputProps, Node};
pub use output::PrefixedFormatter;
pub use schema::*;
pub use values::*;
pub use visit::{Visited, Visitor, walk_card, walk_node, walk_nodes};
