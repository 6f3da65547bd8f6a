//! Unit tests for error.rs
//!
//! Tests Error variants, Display formatting, and the error macros.

use crate::error::{Error, Result};
use crate::{engine_err, engine_bail};

// ============================================================================
// DISPLAY TESTS
// ============================================================================

#[test]
fn test_backend_error_display() {
    let err = Error::BackendError("device lost".to_string());
    assert_eq!(format!("{}", err), "Backend error: device lost");
}

#[test]
fn test_out_of_memory_display() {
    let err = Error::OutOfMemory;
    assert_eq!(format!("{}", err), "Out of GPU memory");
}

#[test]
fn test_invalid_resource_display() {
    let err = Error::InvalidResource("bad texture".to_string());
    assert_eq!(format!("{}", err), "Invalid resource: bad texture");
}

#[test]
fn test_initialization_failed_display() {
    let err = Error::InitializationFailed("no backend".to_string());
    assert_eq!(format!("{}", err), "Initialization failed: no backend");
}

#[test]
fn test_error_is_std_error() {
    fn assert_std_error<T: std::error::Error>() {}
    assert_std_error::<Error>();
}

#[test]
fn test_error_clone() {
    let err = Error::InvalidResource("x".to_string());
    let cloned = err.clone();
    assert_eq!(format!("{}", err), format!("{}", cloned));
}

// ============================================================================
// MACRO TESTS
// ============================================================================

#[test]
fn test_engine_err_builds_invalid_resource() {
    let err = engine_err!("helix3d::test", "bad value {}", 42);
    match err {
        Error::InvalidResource(msg) => assert_eq!(msg, "bad value 42"),
        other => panic!("Expected InvalidResource, got {:?}", other),
    }
}

#[test]
fn test_engine_bail_returns_early() {
    fn failing(flag: bool) -> Result<u32> {
        if flag {
            engine_bail!("helix3d::test", "bailed with flag = {}", flag);
        }
        Ok(7)
    }

    assert_eq!(failing(false).unwrap(), 7);
    match failing(true) {
        Err(Error::InvalidResource(msg)) => assert!(msg.contains("bailed")),
        other => panic!("Expected InvalidResource, got {:?}", other),
    }
}

#[test]
fn test_question_mark_propagation() {
    fn inner() -> Result<()> {
        Err(Error::OutOfMemory)
    }
    fn outer() -> Result<()> {
        inner()?;
        Ok(())
    }

    assert!(matches!(outer(), Err(Error::OutOfMemory)));
}
