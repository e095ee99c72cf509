//! Environment variable expansion for configuration strings.

use std::borrow::Cow;

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// `field` names the config field in error messages.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env(value)
        .map(Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.var_name),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_unchanged() {
        assert_eq!(
            expand_env("http://yuml.me", "service.url").unwrap(),
            "http://yuml.me"
        );
    }

    #[test]
    fn test_default_used_when_unset() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("YUML_EXPAND_UNSET_TEST");
        }

        let value = expand_env("${YUML_EXPAND_UNSET_TEST:-http://localhost}", "service.url");
        assert_eq!(value.unwrap(), "http://localhost");
    }

    #[test]
    fn test_variable_expanded() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("YUML_EXPAND_SET_TEST", "yuml.example.com");
        }

        let value = expand_env("https://${YUML_EXPAND_SET_TEST}/", "service.url");
        assert_eq!(value.unwrap(), "https://yuml.example.com/");

        unsafe {
            std::env::remove_var("YUML_EXPAND_SET_TEST");
        }
    }

    #[test]
    fn test_missing_variable_error() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("YUML_EXPAND_MISSING_TEST");
        }

        let err = expand_env("${YUML_EXPAND_MISSING_TEST}", "service.url").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("YUML_EXPAND_MISSING_TEST"));
        assert!(err.to_string().contains("service.url"));
    }
}
