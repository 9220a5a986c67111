//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

use crate::types::AffordanceId;

/// Core layer error type
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// The clipboard collaborator refused or failed the write
    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    /// Page id outside the known set
    #[error("Invalid page id: {0}")]
    InvalidPageId(String),

    /// Copy requested for an element that is not currently on screen
    #[error("Copy target not mounted: {0}")]
    AffordanceNotMounted(AffordanceId),
}

impl CoreError {
    /// Whether it is expected behavior (user environment, stale input, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::ClipboardUnavailable(_)
            | Self::InvalidPageId(_)
            | Self::AffordanceNotMounted(_) => true,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AffordanceSlot, PageId};

    #[test]
    fn clipboard_failure_is_expected() {
        let err = CoreError::ClipboardUnavailable("denied".to_string());
        assert!(err.is_expected());
        assert_eq!(err.to_string(), "Clipboard unavailable: denied");
    }

    #[test]
    fn unknown_page_is_expected() {
        let err = CoreError::InvalidPageId("settings".to_string());
        assert!(err.is_expected());
        assert_eq!(err.to_string(), "Invalid page id: settings");
    }

    #[test]
    fn serializes_with_code_tag() {
        let err = CoreError::AffordanceNotMounted(AffordanceId::new(
            PageId::Followups,
            AffordanceSlot::Template(1),
        ));
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "AffordanceNotMounted");
        assert_eq!(json["details"]["page"], "followups");
    }
}
