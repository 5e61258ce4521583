//! Error handling utilities for MCP server

use rmcp::ErrorData;
use upkeep_core::BookingError;

/// Helper to convert booking errors to MCP errors
///
/// Bad caller input becomes `invalid_params`; everything else is an
/// `internal_error`.
pub fn to_mcp_error(message: &str, error: &BookingError) -> ErrorData {
    let message = format!("{message}: {error}");
    if error.is_user_error() {
        ErrorData::invalid_params(message, None)
    } else {
        ErrorData::internal_error(message, None)
    }
}

#[cfg(test)]
mod tests {
    use rmcp::model::ErrorCode;

    use super::*;

    #[test]
    fn test_user_errors_are_invalid_params() {
        let error = BookingError::UnknownPlan {
            key: "gold".to_string(),
        };
        let mcp_error = to_mcp_error("Failed to show plan", &error);
        assert_eq!(mcp_error.code, ErrorCode::INVALID_PARAMS);
        assert_eq!(mcp_error.message, "Failed to show plan: Unknown plan 'gold'");
    }

    #[test]
    fn test_other_errors_are_internal() {
        let error = BookingError::catalog("no plans");
        let mcp_error = to_mcp_error("Failed to load catalog", &error);
        assert_eq!(mcp_error.code, ErrorCode::INTERNAL_ERROR);
    }
}
