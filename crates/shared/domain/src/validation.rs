//! Field validators shared by request payloads.

use validator::ValidationError;

/// Reject empty and whitespace-only strings.
///
/// Zones are trimmed before they are stored, so `"  "` would become an empty label.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_is_blank() {
        assert!(not_blank("").is_err());
        assert!(not_blank("   ").is_err());
        assert!(not_blank("\t\n").is_err());
        assert!(not_blank(" A ").is_ok());
    }
}
