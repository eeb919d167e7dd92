// Copyright 2026 Element Creations Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use std::borrow::Cow;

use regex::Regex;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Something which can be searched for in a user-agent string
///
/// A pattern matches if it occurs anywhere in the user-agent, it is never
/// anchored to the start or the end of the string.
pub trait Pattern: std::fmt::Debug + Send + Sync {
    /// Whether the pattern occurs anywhere in the given string
    fn is_match(&self, haystack: &str) -> bool;

    /// The textual form of the pattern
    fn as_str(&self) -> &str;
}

impl Serialize for dyn Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl Pattern for Regex {
    fn is_match(&self, haystack: &str) -> bool {
        Regex::is_match(self, haystack)
    }

    fn as_str(&self) -> &str {
        Regex::as_str(self)
    }
}

/// A literal token, matched with a plain substring search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    token: Cow<'static, str>,
}

impl Token {
    /// Create a [`Token`] pattern out of a literal string
    #[must_use]
    pub fn new(token: impl Into<Cow<'static, str>>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl Pattern for Token {
    fn is_match(&self, haystack: &str) -> bool {
        haystack.contains(&*self.token)
    }

    fn as_str(&self) -> &str {
        &self.token
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.token)
    }
}

/// A pattern source failed to compile
#[derive(Debug, Error)]
#[error("invalid device pattern {pattern:?}")]
pub struct InvalidPatternError {
    /// The pattern source which failed to compile
    pub pattern: String,

    #[source]
    source: regex::Error,
}

/// Compile a regular expression pattern
///
/// # Errors
///
/// Returns an error if the source is not a valid regular expression
pub fn parse(pattern: &str) -> Result<Regex, InvalidPatternError> {
    Regex::new(pattern).map_err(|source| InvalidPatternError {
        pattern: pattern.to_owned(),
        source,
    })
}
