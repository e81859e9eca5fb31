// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Password rules for display accounts.

use thiserror::Error;

/// Password policy errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PasswordPolicyError {
    #[error("Password must be at least {min_length} characters long")]
    TooShort { min_length: usize },

    #[error(
        "Password must mix at least {required} of: uppercase letter, lowercase letter, digit, symbol (found {found})"
    )]
    InsufficientComplexity { required: usize, found: usize },

    #[error("Password must not match the username")]
    MatchesUsername,
}

/// Password policy configuration.
pub struct PasswordPolicy {
    /// Minimum password length in characters.
    pub min_length: usize,
    /// Minimum number of character classes required (out of 4).
    pub min_complexity: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 6,
            min_complexity: 2,
        }
    }
}

impl PasswordPolicy {
    /// Validates a new account password.
    ///
    /// # Errors
    ///
    /// Returns a `PasswordPolicyError` if the password is too short, uses too
    /// few character classes, or equals the username ignoring case.
    pub fn validate(&self, password: &str, username: &str) -> Result<(), PasswordPolicyError> {
        if password.chars().count() < self.min_length {
            return Err(PasswordPolicyError::TooShort {
                min_length: self.min_length,
            });
        }

        let complexity = Self::calculate_complexity(password);
        if complexity < self.min_complexity {
            return Err(PasswordPolicyError::InsufficientComplexity {
                required: self.min_complexity,
                found: complexity,
            });
        }

        if password.to_lowercase() == username.to_lowercase() {
            return Err(PasswordPolicyError::MatchesUsername);
        }

        Ok(())
    }

    /// Number of character classes present: uppercase, lowercase, digit, symbol.
    fn calculate_complexity(password: &str) -> usize {
        let classes = [
            password.chars().any(|c| c.is_ascii_uppercase()),
            password.chars().any(|c| c.is_ascii_lowercase()),
            password.chars().any(|c| c.is_ascii_digit()),
            password
                .chars()
                .any(|c| c.is_ascii_punctuation() || (!c.is_ascii() && !c.is_alphanumeric())),
        ];
        classes.into_iter().filter(|present| *present).count()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_passwords() {
        let policy = PasswordPolicy::default();
        assert!(policy.validate("admin123", "admin").is_ok());
        assert!(policy.validate("Masjid-Raya", "display1").is_ok());
    }

    #[test]
    fn test_password_too_short() {
        let policy = PasswordPolicy::default();
        assert_eq!(
            policy.validate("ab1", "display1"),
            Err(PasswordPolicyError::TooShort { min_length: 6 })
        );
    }

    #[test]
    fn test_single_class_is_rejected() {
        let policy = PasswordPolicy::default();
        assert_eq!(
            policy.validate("alllowercase", "display1"),
            Err(PasswordPolicyError::InsufficientComplexity {
                required: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_matches_username_case_insensitively() {
        let policy = PasswordPolicy::default();
        assert_eq!(
            policy.validate("Display1", "display1"),
            Err(PasswordPolicyError::MatchesUsername)
        );
    }

    #[test]
    fn test_complexity_calculation() {
        assert_eq!(PasswordPolicy::calculate_complexity("Aa1!"), 4);
        assert_eq!(PasswordPolicy::calculate_complexity("Aa1"), 3);
        assert_eq!(PasswordPolicy::calculate_complexity("abc!"), 2);
        assert_eq!(PasswordPolicy::calculate_complexity("abc"), 1);
        assert_eq!(PasswordPolicy::calculate_complexity(""), 0);
    }
}
