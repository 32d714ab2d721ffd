//! Centralized error handling and classification

use crate::api::error::PortalApiError;
use crate::logging::LogLevel;

/// Classify an API error and determine the appropriate log level.
pub fn classify_api_error(error: &PortalApiError) -> LogLevel {
    match error {
        // Rate limiting - low priority
        PortalApiError::Http { status, .. } if *status == 429 => LogLevel::Debug,

        // Server errors - temporary issues
        PortalApiError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,

        // Authentication errors - critical
        PortalApiError::Http { status, .. } if *status == 401 => LogLevel::Error,
        PortalApiError::Http { status, .. } if *status == 403 => LogLevel::Error,

        // Network issues - usually temporary
        PortalApiError::Reqwest(_) => LogLevel::Warn,

        // Other errors
        _ => LogLevel::Warn,
    }
}

/// Produce a user-facing message from an API failure.
///
/// Transport errors get friendly text instead of the verbose reqwest debug
/// output; HTTP errors surface the backend's own message.
pub fn handle_api_error(error: &PortalApiError) -> String {
    match error {
        PortalApiError::Reqwest(e) if e.is_timeout() => {
            "The portal backend took too long to respond. Please try again.".to_string()
        }
        PortalApiError::Reqwest(e) if e.is_connect() => {
            "Could not reach the portal backend. Check your connection and try again.".to_string()
        }
        PortalApiError::Reqwest(_) => "A network error occurred. Please try again.".to_string(),
        PortalApiError::Decode(_) => {
            "The portal backend sent an unexpected response.".to_string()
        }
        PortalApiError::Http { status, message } => {
            if message.is_empty() {
                format!("The portal backend returned an error (status {}).", status)
            } else {
                format!("Status update failed: {}", message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_http_errors() {
        let rate_limited = PortalApiError::Http {
            status: 429,
            message: "slow down".to_string(),
        };
        assert_eq!(classify_api_error(&rate_limited), LogLevel::Debug);

        let server_error = PortalApiError::Http {
            status: 503,
            message: "unavailable".to_string(),
        };
        assert_eq!(classify_api_error(&server_error), LogLevel::Warn);

        let unauthorized = PortalApiError::Http {
            status: 401,
            message: "who are you".to_string(),
        };
        assert_eq!(classify_api_error(&unauthorized), LogLevel::Error);
    }

    #[test]
    fn test_handle_api_error_surfaces_backend_message() {
        let err = PortalApiError::Http {
            status: 500,
            message: "shift sheet is locked".to_string(),
        };
        assert_eq!(
            handle_api_error(&err),
            "Status update failed: shift sheet is locked"
        );

        let bare = PortalApiError::Http {
            status: 502,
            message: String::new(),
        };
        assert_eq!(
            handle_api_error(&bare),
            "The portal backend returned an error (status 502)."
        );
    }
}
