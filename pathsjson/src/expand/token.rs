//! Token classification.
//!
//! Tokens follow a fixed sigil grammar: `$$NAME` is an environment
//! reference, `$NAME` is a path reference, anything else is a literal.

/// Environment references have a `$$` prefix.
///
/// # Examples
///
/// ```
/// use pathsjson::expand::is_env_var;
///
/// assert!(is_env_var("$$VERSION"));
/// assert!(!is_env_var("$data_dir"));
/// assert!(!is_env_var(""));
/// ```
#[must_use]
pub fn is_env_var(token: &str) -> bool {
    token.starts_with("$$")
}

/// Path references start with one and only one `$`.
///
/// # Examples
///
/// ```
/// use pathsjson::expand::is_path_var;
///
/// assert!(is_path_var("$data_dir"));
/// assert!(!is_path_var("$$VERSION"));
/// assert!(!is_path_var("data"));
/// ```
#[must_use]
pub fn is_path_var(token: &str) -> bool {
    token.starts_with('$') && !is_env_var(token)
}

/// A classified token with its sigil stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// A path segment copied verbatim.
    Literal(&'a str),
    /// A reference to another path definition.
    PathRef(&'a str),
    /// A reference to an environment binding.
    EnvRef(&'a str),
}

impl<'a> Token<'a> {
    /// Classify a raw token.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathsjson::expand::Token;
    ///
    /// assert_eq!(Token::classify("$$VERSION"), Token::EnvRef("VERSION"));
    /// assert_eq!(Token::classify("$raw_dir"), Token::PathRef("raw_dir"));
    /// assert_eq!(Token::classify("data.csv"), Token::Literal("data.csv"));
    /// ```
    #[must_use]
    pub fn classify(token: &'a str) -> Self {
        if let Some(name) = token.strip_prefix("$$") {
            Self::EnvRef(name)
        } else if let Some(name) = token.strip_prefix('$') {
            Self::PathRef(name)
        } else {
            Self::Literal(token)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_env_var() {
        assert!(!is_env_var("$CLEAN_DIR"));
        assert!(!is_env_var("$data_dir"));
        assert!(is_env_var("$$VERSION"));
        assert!(!is_env_var("VERSION"));
    }

    #[test]
    fn test_is_path_var() {
        assert!(is_path_var("$CLEAN_DIR"));
        assert!(is_path_var("$data_dir"));
        assert!(!is_path_var("$$VERSION"));
        assert!(!is_path_var("VERSION"));
    }

    #[test]
    fn test_empty_string_is_literal() {
        assert!(!is_env_var(""));
        assert!(!is_path_var(""));
        assert_eq!(Token::classify(""), Token::Literal(""));
    }

    #[test]
    fn test_triple_sigil_is_env_ref() {
        assert_eq!(Token::classify("$$$X"), Token::EnvRef("$X"));
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Exactly one of the three kinds applies to any token.
            #[test]
            fn classification_is_a_partition(s in "\\PC{0,12}") {
                let env = is_env_var(&s);
                let path = is_path_var(&s);
                prop_assert!(!(env && path));
                match Token::classify(&s) {
                    Token::EnvRef(_) => prop_assert!(env),
                    Token::PathRef(_) => prop_assert!(path),
                    Token::Literal(_) => prop_assert!(!env && !path),
                }
            }
        }
    }
}
