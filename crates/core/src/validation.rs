//! Input validation for room and furniture submissions.
//!
//! Names are free text but bounded by the archive column width. Dimensions
//! must be finite and non-negative.

use crate::error::CoreError;
use crate::fit::{Axis, Dimensions};

/// Maximum length of a room or furniture name, in characters.
pub const MAX_NAME_LEN: usize = 100;

/// Validate a display name.
///
/// Surrounding whitespace is ignored for the emptiness and length checks but
/// is not stripped; callers store the name as submitted.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("Name must not be empty".to_string()));
    }
    let len = trimmed.chars().count();
    if len > MAX_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Name must not exceed {MAX_NAME_LEN} characters (got {len})"
        )));
    }
    Ok(())
}

/// Validate a single dimension value.
pub fn validate_dimension(axis: Axis, value: f64) -> Result<(), CoreError> {
    if !value.is_finite() {
        return Err(CoreError::Validation(format!(
            "{axis} must be a finite number"
        )));
    }
    if value < 0.0 {
        return Err(CoreError::Validation(format!(
            "{axis} must not be negative (got {value})"
        )));
    }
    Ok(())
}

/// Validate all three dimensions.
pub fn validate_dimensions(dims: &Dimensions) -> Result<(), CoreError> {
    for axis in Axis::ALL {
        validate_dimension(axis, dims.along(axis))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn padded_name_accepted() {
        assert!(validate_name("  Living Room ").is_ok());
    }

    #[test]
    fn padding_not_counted_towards_limit() {
        let name = format!("  {}  ", "x".repeat(MAX_NAME_LEN));
        assert!(validate_name(&name).is_ok());
    }

    #[test]
    fn blank_name_rejected() {
        assert_matches!(validate_name("   "), Err(CoreError::Validation(_)));
        assert_matches!(validate_name(""), Err(CoreError::Validation(_)));
    }

    #[test]
    fn name_at_limit_accepted() {
        let name = "x".repeat(MAX_NAME_LEN);
        assert!(validate_name(&name).is_ok());
    }

    #[test]
    fn overlong_name_rejected() {
        let name = "x".repeat(MAX_NAME_LEN + 1);
        let msg = validate_name(&name).unwrap_err().to_string();
        assert!(msg.contains("must not exceed 100"));
    }

    #[test]
    fn zero_dimension_accepted() {
        assert!(validate_dimension(Axis::Height, 0.0).is_ok());
    }

    #[test]
    fn negative_dimension_rejected() {
        let msg = validate_dimension(Axis::Width, -1.0)
            .unwrap_err()
            .to_string();
        assert!(msg.contains("width must not be negative"));
    }

    #[test]
    fn non_finite_dimension_rejected() {
        assert!(validate_dimension(Axis::Length, f64::NAN).is_err());
        assert!(validate_dimension(Axis::Length, f64::INFINITY).is_err());
    }

    #[test]
    fn dimensions_checked_on_every_axis() {
        assert!(validate_dimensions(&Dimensions::new(1.0, 2.0, 3.0)).is_ok());
        assert!(validate_dimensions(&Dimensions::new(1.0, 2.0, -3.0)).is_err());
    }
}
