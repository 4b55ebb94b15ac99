// crates/shared-kernel/tests/error_context.rs
use std::io;

use shoe_sizes_shared_kernel::{DomainError, ErrorContext, ShoeSizesError};

fn boom() -> std::result::Result<(), io::Error> {
    Err(io::Error::other("root-io"))
}

#[test]
fn context_wraps_and_formats() {
    let err = boom()
        .map_err(ShoeSizesError::from)
        .context("reading config")
        .unwrap_err();

    let display = err.to_string();
    assert!(display.contains("reading config"));
    assert!(display.contains("Output error:"));
}

#[test]
fn with_context_wraps_domain_errors() {
    let result: Result<(), DomainError> = Err(DomainError::BatchInput {
        message: "please enter a size".to_string(),
    });

    let err = result.with_context(|| "expanding batch".to_string()).unwrap_err();
    assert_eq!(err.to_string(), "expanding batch: Domain error: please enter a size");
}
