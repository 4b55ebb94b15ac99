//! Batch product entry: one size field in, one product per size out.

use chrono::{DateTime, Utc};
use shoe_sizes_shared_kernel::{DomainError, DomainResult};
use thiserror::Error;

use crate::{
    format::format_size,
    model::{BatchEntry, BatchParseResult, ProductDraft},
    parsing::{number::trim_blank, parse_size_range},
    sku::generate_sku_code_at,
};

/// Upper bound on sizes created from a single batch entry.
pub const MAX_BATCH_SIZES: usize = 20;

/// Why a batch size field was rejected. Messages are shown to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BatchSizeError {
    #[error("please enter a size")]
    Empty,

    #[error("invalid size format, use e.g. 39-42 or 36,38,40")]
    Unrecognized,

    #[error("at most {} sizes per batch", MAX_BATCH_SIZES)]
    TooMany { count: usize },
}

impl From<BatchSizeError> for DomainError {
    fn from(err: BatchSizeError) -> Self {
        Self::BatchInput { message: err.to_string() }
    }
}

/// Reads the size field of the batch-entry form.
///
/// This is the only size operation that reports failures; each outcome is
/// classified into a single [`BatchSizeError`].
#[must_use]
pub fn parse_batch_size_input(input: &str) -> BatchParseResult {
    if trim_blank(input).is_empty() {
        return BatchParseResult::rejected(BatchSizeError::Empty);
    }

    let sizes = parse_size_range(input);
    if sizes.is_empty() {
        log::debug!("batch size input {input:?} yielded no sizes");
        return BatchParseResult::rejected(BatchSizeError::Unrecognized);
    }
    if sizes.len() > MAX_BATCH_SIZES {
        log::debug!("batch size input {input:?} yielded {} sizes", sizes.len());
        return BatchParseResult::rejected(BatchSizeError::TooMany { count: sizes.len() });
    }

    BatchParseResult::accepted(sizes)
}

/// Expands `entry` into one [`ProductDraft`] per size in `size_input`.
///
/// # Errors
/// Returns [`DomainError::InvalidField`] for blank names or negative prices
/// and [`DomainError::BatchInput`] when the size field is rejected.
pub fn expand_batch(entry: &BatchEntry, size_input: &str) -> DomainResult<Vec<ProductDraft>> {
    expand_batch_at(entry, size_input, Utc::now())
}

/// [`expand_batch`] with an explicit timestamp for the SKU labels.
///
/// # Errors
/// See [`expand_batch`].
pub fn expand_batch_at(
    entry: &BatchEntry,
    size_input: &str,
    at: DateTime<Utc>,
) -> DomainResult<Vec<ProductDraft>> {
    validate_entry(entry)?;
    let sizes = parse_batch_size_input(size_input).into_result()?;

    let drafts: Vec<ProductDraft> = sizes
        .iter()
        .map(|size| ProductDraft {
            name: entry.name.clone(),
            product_name: entry.product_name.clone(),
            category: entry.category.clone(),
            size: format_size(Some(size.as_f64())),
            color: entry.color.clone(),
            price: entry.price,
            cost_price: entry.cost_price,
            stock: 0,
            stock_alert: entry.stock_alert,
            gender: entry.gender,
            sku: generate_sku_code_at(&entry.name, &entry.color, size.as_f64(), at),
        })
        .collect();

    log::debug!("expanded {} into {} drafts ({})", entry.name, drafts.len(), sizes);
    Ok(drafts)
}

fn validate_entry(entry: &BatchEntry) -> DomainResult<()> {
    require_text("name", &entry.name)?;
    require_text("category", &entry.category)?;
    require_text("color", &entry.color)?;
    require_price("price", entry.price)?;
    require_price("costPrice", entry.cost_price)
}

fn require_text(field: &str, value: &str) -> DomainResult<()> {
    if trim_blank(value).is_empty() {
        return Err(invalid(field, "must not be blank"));
    }
    Ok(())
}

fn require_price(field: &str, value: f64) -> DomainResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(invalid(field, "must be a non-negative number"));
    }
    Ok(())
}

fn invalid(field: &str, reason: &str) -> DomainError {
    DomainError::InvalidField { field: field.to_string(), reason: reason.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::GenderType;

    fn at(millis: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(millis).unwrap()
    }

    #[test]
    fn empty_input_is_rejected() {
        for input in ["", "   ", "\t\n"] {
            let result = parse_batch_size_input(input);
            assert!(!result.valid);
            assert_eq!(result.error, Some(BatchSizeError::Empty));
            assert_eq!(result.error_message().as_deref(), Some("please enter a size"));
        }
    }

    #[test]
    fn contiguous_input_is_accepted() {
        let result = parse_batch_size_input("39-42");
        assert!(result.valid);
        assert_eq!(result.sizes.values(), vec![39, 40, 41, 42]);
        assert_eq!(result.formatted, "39-42");
        assert_eq!(result.error, None);
    }

    #[test]
    fn unparseable_input_is_rejected() {
        let result = parse_batch_size_input("big,small");
        assert!(!result.valid);
        assert!(result.sizes.is_empty());
        assert_eq!(result.error, Some(BatchSizeError::Unrecognized));
    }

    #[test]
    fn too_many_sizes_are_rejected() {
        let result = parse_batch_size_input("22-45");
        assert!(!result.valid);
        assert!(result.sizes.is_empty());
        assert_eq!(result.error, Some(BatchSizeError::TooMany { count: 24 }));
        assert_eq!(result.error_message().as_deref(), Some("at most 20 sizes per batch"));
    }

    #[test]
    fn exactly_twenty_sizes_are_accepted() {
        let result = parse_batch_size_input("22-41");
        assert!(result.valid);
        assert_eq!(result.sizes.len(), MAX_BATCH_SIZES);
    }

    #[test]
    fn result_serializes_error_as_message() {
        let json = serde_json::to_value(parse_batch_size_input("")).unwrap();
        assert_eq!(json["valid"], false);
        assert_eq!(json["error"], "please enter a size");
        assert_eq!(json["sizes"], serde_json::json!([]));

        let json = serde_json::to_value(parse_batch_size_input("36,38")).unwrap();
        assert_eq!(json["error"], serde_json::Value::Null);
        assert_eq!(json["formatted"], "36,38");
    }

    #[test]
    fn expand_creates_one_draft_per_size() {
        let entry = BatchEntry::new("Runner", "sneaker", "Black", 299.0, 150.0)
            .with_gender(GenderType::AdultMale)
            .with_stock_alert(5);

        let drafts = expand_batch_at(&entry, "41,39-40", at(36)).unwrap();
        let sizes: Vec<&str> = drafts.iter().map(|d| d.size.as_str()).collect();
        assert_eq!(sizes, vec!["39", "40", "41"]);
        assert!(drafts.iter().all(|d| d.stock == 0 && d.stock_alert == 5));
        assert_eq!(drafts[0].sku, "Runn_Bl_39_10");
        assert_eq!(drafts[2].gender, GenderType::AdultMale);
    }

    #[test]
    fn expand_rejects_bad_entries() {
        let entry = BatchEntry::new(" ", "sneaker", "Black", 299.0, 150.0);
        let err = expand_batch_at(&entry, "40", at(0)).unwrap_err();
        assert_eq!(err.to_string(), "Invalid name: must not be blank");

        let entry = BatchEntry::new("Runner", "sneaker", "Black", 299.0, -1.0);
        let err = expand_batch_at(&entry, "40", at(0)).unwrap_err();
        assert!(matches!(err, DomainError::InvalidField { ref field, .. } if field == "costPrice"));
    }

    #[test]
    fn expand_surfaces_size_errors() {
        let entry = BatchEntry::new("Runner", "sneaker", "Black", 299.0, 150.0);
        let err = expand_batch(&entry, "22-45").unwrap_err();
        assert_eq!(err.to_string(), "at most 20 sizes per batch");
    }
}
