use thiserror::Error;

/// Structural violation found while preparing a card tree.
///
/// Preparation stops at the first violation, so a card produces at most one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrepareError {
    #[error("card version is required")]
    MissingVersion,
    #[error("{node} {field} is required")]
    MissingField {
        node: &'static str,
        field: &'static str,
    },
    #[error("{node} must have {collection}")]
    EmptyCollection {
        node: &'static str,
        collection: &'static str,
    },
}

impl PrepareError {
    pub fn missing_field(node: &'static str, field: &'static str) -> Self {
        PrepareError::MissingField { node, field }
    }

    pub fn empty_collection(node: &'static str, collection: &'static str) -> Self {
        PrepareError::EmptyCollection { node, collection }
    }
}

/// Error returned by the output operations on [`Card`](crate::Card).
#[derive(Debug, Error)]
pub enum CardError {
    #[error(transparent)]
    Prepare(#[from] PrepareError),
    #[error("failed to serialize card: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CardError {
    /// Returns the preparation failure, if that is what stopped the output.
    pub fn as_prepare(&self) -> Option<&PrepareError> {
        match self {
            CardError::Prepare(err) => Some(err),
            CardError::Serialize(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_names_node_and_field() {
        let err = PrepareError::missing_field("Image", "url");
        assert_eq!(err.to_string(), "Image url is required");
    }

    #[test]
    fn empty_collection_names_collection() {
        let err = PrepareError::empty_collection("Container", "items");
        assert_eq!(err.to_string(), "Container must have items");
    }

    #[test]
    fn prepare_errors_pass_through_untouched() {
        let err = CardError::from(PrepareError::MissingVersion);
        assert_eq!(err.to_string(), "card version is required");
        assert_eq!(err.as_prepare(), Some(&PrepareError::MissingVersion));
    }
}
