//! Route pattern compilation
//!
//! ## Syntax
//! - `:name` - Named parameter (ASCII letters, digits, `_`), captures one or
//!   more characters other than `/`, `#` and `?`
//! - `\x` - Escaped literal character
//! - anything else - Literal text, compared case-insensitively
//!
//! Group and modifier characters (`(`, `)`, `{`, `}`, `*`, `+`, `?`) are
//! rejected. A compiled pattern accepts one optional trailing `/`, `#` or `?`.

use crate::{Error, Params, Result};
use regex::{Regex, RegexBuilder};

/// Parameter capture: lazy, stops at a delimiter
const PARAM_CAPTURE: &str = "([^/#?]+?)";

/// Optional trailing delimiter, then end of input
const END: &str = "[/#?]?$";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Literal(String),
    Param(String),
}

/// A route pattern compiled into a matcher
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    pattern: String,
    names: Vec<String>,
    regex: Regex,
}

impl CompiledPattern {
    /// Compile a pattern such as `/accessors/:accessorID/:version`
    ///
    /// # Example
    /// ```
    /// use console_router::CompiledPattern;
    ///
    /// let compiled = CompiledPattern::new("/accessors/:accessorID/:version").unwrap();
    /// assert_eq!(compiled.param_names(), ["accessorID", "version"]);
    ///
    /// let params = compiled.captures("/accessors/abc/2").unwrap();
    /// assert_eq!(params.get("accessorID"), Some("abc"));
    /// assert_eq!(params.get("version"), Some("2"));
    /// ```
    pub fn new(pattern: &str) -> Result<Self> {
        let tokens = tokenize(pattern)?;

        let mut source = String::with_capacity(pattern.len() * 2 + 8);
        source.push('^');
        let mut names = Vec::new();
        for token in tokens {
            match token {
                Token::Literal(text) => source.push_str(&regex::escape(&text)),
                Token::Param(name) => {
                    source.push_str(PARAM_CAPTURE);
                    names.push(name);
                }
            }
        }
        source.push_str(END);

        let regex = RegexBuilder::new(&source)
            .case_insensitive(true)
            .build()
            .map_err(|source| Error::Regex {
                pattern: pattern.to_string(),
                source,
            })?;

        Ok(Self {
            pattern: pattern.to_string(),
            names,
            regex,
        })
    }

    /// The pattern text as registered
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Parameter names, left to right
    pub fn param_names(&self) -> &[String] {
        &self.names
    }

    /// True if the pattern has no parameters
    pub fn is_static(&self) -> bool {
        self.names.is_empty()
    }

    /// Test a pathname and extract parameters on success
    ///
    /// Name `i` is paired with capture group `i + 1`.
    pub fn captures(&self, path: &str) -> Option<Params> {
        let caps = self.regex.captures(path)?;
        Some(
            self.names
                .iter()
                .enumerate()
                .filter_map(|(i, name)| caps.get(i + 1).map(|m| (name.as_str(), m.as_str())))
                .collect(),
        )
    }

    /// Test a pathname without extracting parameters
    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn tokenize(pattern: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut chars = pattern.char_indices().peekable();

    while let Some((index, ch)) = chars.next() {
        match ch {
            '\\' => match chars.next() {
                Some((_, escaped)) => literal.push(escaped),
                None => {
                    return Err(Error::TrailingEscape {
                        pattern: pattern.to_string(),
                    })
                }
            },
            ':' => {
                let mut name = String::new();
                while let Some(&(_, c)) = chars.peek() {
                    if !is_name_char(c) {
                        break;
                    }
                    name.push(c);
                    chars.next();
                }
                if name.is_empty() {
                    return Err(Error::MissingParameterName {
                        pattern: pattern.to_string(),
                        index,
                    });
                }
                if !literal.is_empty() {
                    tokens.push(Token::Literal(std::mem::take(&mut literal)));
                }
                tokens.push(Token::Param(name));
            }
            '(' | ')' | '{' | '}' | '*' | '+' | '?' => {
                return Err(Error::UnsupportedSyntax {
                    pattern: pattern.to_string(),
                    index,
                    ch,
                })
            }
            _ => literal.push(ch),
        }
    }

    if !literal.is_empty() {
        tokens.push(Token::Literal(literal));
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize() {
        assert_eq!(
            tokenize("/mutators/:mutatorID/:version").unwrap(),
            vec![
                Token::Literal("/mutators/".to_string()),
                Token::Param("mutatorID".to_string()),
                Token::Literal("/".to_string()),
                Token::Param("version".to_string()),
            ]
        );
        assert_eq!(
            tokenize("/status").unwrap(),
            vec![Token::Literal("/status".to_string())]
        );
    }

    #[test]
    fn test_param_name_ends_at_non_word_char() {
        let compiled = CompiledPattern::new("/files/:name.json").unwrap();
        assert_eq!(compiled.param_names(), ["name"]);
        let params = compiled.captures("/files/report.json").unwrap();
        assert_eq!(params.get("name"), Some("report"));
    }

    #[test]
    fn test_static_pattern() {
        let compiled = CompiledPattern::new("/accessors").unwrap();
        assert!(compiled.is_static());
        assert!(compiled.is_match("/accessors"));
        assert!(!compiled.is_match("/accessors/abc"));
        assert_eq!(compiled.captures("/accessors").unwrap().len(), 0);
    }

    #[test]
    fn test_case_insensitive_literals() {
        let compiled = CompiledPattern::new("/users/:userID").unwrap();
        let params = compiled.captures("/USERS/AbC").unwrap();
        // captured text is verbatim
        assert_eq!(params.get("userID"), Some("AbC"));
    }

    #[test]
    fn test_optional_trailing_delimiter() {
        let compiled = CompiledPattern::new("/users/:userID").unwrap();
        let params = compiled.captures("/users/abc/").unwrap();
        assert_eq!(params.get("userID"), Some("abc"));
        assert!(!compiled.is_match("/users/abc//"));
    }

    #[test]
    fn test_param_does_not_cross_segments() {
        let compiled = CompiledPattern::new("/users/:userID").unwrap();
        assert!(!compiled.is_match("/users/abc/def"));
        assert!(!compiled.is_match("/users/"));
    }

    #[test]
    fn test_literal_regex_metacharacters_are_escaped() {
        let compiled = CompiledPattern::new("/v1.0/items").unwrap();
        assert!(compiled.is_match("/v1.0/items"));
        assert!(!compiled.is_match("/v1x0/items"));
    }

    #[test]
    fn test_escaped_reserved_character() {
        let compiled = CompiledPattern::new(r"/search\?").unwrap();
        assert!(compiled.is_match("/search?"));
    }

    #[test]
    fn test_percent_encoded_values_are_not_decoded() {
        let compiled = CompiledPattern::new("/oauthconnections/oidc_provider/:oidcProviderName")
            .unwrap();
        let params = compiled
            .captures("/oauthconnections/oidc_provider/my%20provider")
            .unwrap();
        assert_eq!(params.get("oidcProviderName"), Some("my%20provider"));
    }

    #[test]
    fn test_duplicate_names_last_capture_wins() {
        let compiled = CompiledPattern::new("/a/:id/:id").unwrap();
        assert_eq!(compiled.param_names(), ["id", "id"]);
        let params = compiled.captures("/a/one/two").unwrap();
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("id"), Some("two"));
    }

    #[test]
    fn test_missing_parameter_name() {
        let err = CompiledPattern::new("/users/:/edit").unwrap_err();
        assert!(matches!(
            err,
            Error::MissingParameterName { index: 7, .. }
        ));
    }

    #[test]
    fn test_unsupported_syntax() {
        let err = CompiledPattern::new("/users/:id?").unwrap_err();
        assert!(matches!(
            err,
            Error::UnsupportedSyntax { ch: '?', index: 10, .. }
        ));
        assert!(CompiledPattern::new("/files/*").is_err());
        assert!(CompiledPattern::new("/users/(\\d+)").is_err());
    }

    #[test]
    fn test_trailing_escape() {
        let err = CompiledPattern::new("/users\\").unwrap_err();
        assert!(matches!(err, Error::TrailingEscape { .. }));
    }
}
