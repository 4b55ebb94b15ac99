use serde::{Serialize, Serializer};

use super::SizeSet;
use crate::batch::BatchSizeError;

/// Outcome of reading a batch-entry size field.
///
/// `valid` holds exactly when `sizes` is non-empty; a rejected result always
/// carries an `error` and empty `sizes`/`formatted`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchParseResult {
    pub valid: bool,
    pub sizes: SizeSet,
    #[serde(serialize_with = "error_message")]
    pub error: Option<BatchSizeError>,
    pub formatted: String,
}

impl BatchParseResult {
    #[must_use]
    pub fn accepted(sizes: SizeSet) -> Self {
        let formatted = sizes.to_range_string();
        Self { valid: true, sizes, error: None, formatted }
    }

    #[must_use]
    pub fn rejected(error: BatchSizeError) -> Self {
        Self { valid: false, sizes: SizeSet::new(), error: Some(error), formatted: String::new() }
    }

    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    /// Converts into a `Result`, keeping the size set on success.
    ///
    /// # Errors
    /// Returns the rejection reason when the input was not accepted.
    pub fn into_result(self) -> Result<SizeSet, BatchSizeError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.sizes),
        }
    }
}

#[allow(clippy::ref_option)]
fn error_message<S: Serializer>(error: &Option<BatchSizeError>, serializer: S) -> Result<S::Ok, S::Error> {
    match error {
        Some(err) => serializer.collect_str(err),
        None => serializer.serialize_none(),
    }
}
