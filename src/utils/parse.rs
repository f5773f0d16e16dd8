use serde_json::Value;
use crate::core::library::{LibraryError, LibraryResult};

// parse_copies accepts a copy count either as a json number or as the numeric
// string an html form submits.
pub(crate) fn parse_copies(field: &str, value: &Value) -> LibraryResult<u32> {
    let parsed = match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| LibraryError::validation(
        format!("{} must be a non-negative integer but was {}", field, value).as_str(),
        Some("400".to_string())))
}

// required_text trims the value and rejects blanks
pub(crate) fn required_text(field: &str, value: &str) -> LibraryResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(LibraryError::validation(
            format!("{} cannot be empty", field).as_str(), Some("400".to_string())));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use crate::core::library::LibraryError;
    use crate::utils::parse::{parse_copies, required_text};

    #[tokio::test]
    async fn test_should_parse_copies() {
        assert_eq!(3, parse_copies("totalcopies", &json!(3)).expect("number"));
        assert_eq!(12, parse_copies("totalcopies", &json!(" 12 ")).expect("string"));
        assert_eq!(0, parse_copies("copiesav", &json!("0")).expect("zero"));
    }

    #[tokio::test]
    async fn test_should_reject_bad_copies() {
        for value in [json!(-1), json!("-1"), json!("two"), json!(2.5), json!(null), json!(u64::MAX)] {
            let err = parse_copies("totalcopies", &value).expect_err("should reject");
            assert!(matches!(err, LibraryError::Validation { .. }), "{:?}", value);
        }
    }

    #[tokio::test]
    async fn test_should_require_text() {
        assert_eq!("alice", required_text("username", "  alice ").expect("trimmed"));
        assert!(matches!(required_text("username", " \t"), Err(LibraryError::Validation { .. })));
    }
}
