//! Random tokens for API keys and share links.

use rand::distr::Alphanumeric;
use rand::Rng;

/// Length of API keys and invitation tokens.
pub const DEFAULT_TOKEN_LENGTH: usize = 40;

/// Generate a random token of `length` ASCII letters and digits.
///
/// Uses the thread-local generator, which is cryptographically secure.
pub fn generate_token(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn test_format() {
        let token = generate_token(DEFAULT_TOKEN_LENGTH);
        let re = Regex::new(r"^[a-zA-Z0-9]{40}$").unwrap();
        assert!(re.is_match(&token), "unexpected token {token}");
    }

    #[test]
    fn test_zero_length() {
        assert_eq!(generate_token(0), "");
    }

    #[test]
    fn test_tokens_differ() {
        assert_ne!(generate_token(32), generate_token(32));
    }
}
