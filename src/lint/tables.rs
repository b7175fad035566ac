//! Static name tables consulted by the classifier and the sensitive-data rule.

use phf::phf_set;

/// Package identifiers of the supported logging libraries:
/// the standard `log`, structured `log/slog`, and `go.uber.org/zap`.
pub static LOG_PACKAGES: phf::Set<&'static str> = phf_set! {
    "log",
    "slog",
    "zap",
};

/// Logging method names across the supported libraries.
pub static LOG_METHODS: phf::Set<&'static str> = phf_set! {
    // log
    "Print", "Printf", "Println",
    "Fatal", "Fatalf", "Fatalln",
    "Panic", "Panicf", "Panicln",
    // slog, zap
    "Debug", "Info", "Warn", "Error", "DPanic",
    // zap sugared
    "Debugf", "Infof", "Warnf", "Errorf",
    "Debugw", "Infow", "Warnw", "Errorw",
};

/// Argument names that must never reach a log call. Lower-case; candidates
/// are lower-cased before lookup.
pub static SENSITIVE_NAMES: phf::Set<&'static str> = phf_set! {
    "password", "passwd", "pwd", "pass",
    "secret",
    "token", "access_token", "refresh_token",
    "api_key", "apikey",
    "private_key", "privatekey",
    "credentials", "credential",
    "auth", "authorization",
    "session_id", "sessionid", "cookie",
    "ssn", "credit_card", "card_number", "cvv", "pin",
};

/// Case-insensitive exact match against the sensitive-name table.
pub fn is_sensitive_name(name: &str) -> bool {
    SENSITIVE_NAMES.contains(name.to_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sensitive_names_are_lower_case() {
        for name in SENSITIVE_NAMES.iter() {
            assert_eq!(*name, name.to_lowercase());
        }
    }

    #[test]
    fn test_is_sensitive_name() {
        assert!(is_sensitive_name("password"));
        assert!(is_sensitive_name("Password"));
        assert!(is_sensitive_name("API_KEY"));
        // Exact match, not substring.
        assert!(!is_sensitive_name("passwordHint"));
        assert!(!is_sensitive_name("username"));
    }

    #[test]
    fn test_log_tables() {
        assert!(LOG_PACKAGES.contains("zap"));
        assert!(!LOG_PACKAGES.contains("fmt"));
        assert!(LOG_METHODS.contains("Printf"));
        assert!(!LOG_METHODS.contains("Sprintf"));
    }
}
