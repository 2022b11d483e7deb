//! Free-text search over dish names and origins.

use std::fmt;
use std::str::FromStr;

use regex::{Regex, RegexBuilder};

use super::Dish;

/// Upper bound on the compiled size of a caller-supplied pattern.
const PATTERN_SIZE_LIMIT: usize = 1 << 20;

/// How search text is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchMode {
    /// Case-insensitive substring match; pattern syntax has no meaning.
    #[default]
    Literal,
    /// Case-insensitive unanchored regular expression.
    Pattern,
}

impl SearchMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Literal => "literal",
            Self::Pattern => "pattern",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a configured search mode is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("search mode must be 'literal' or 'pattern' (got '{value}')")]
pub struct SearchModeParseError {
    value: String,
}

impl FromStr for SearchMode {
    type Err = SearchModeParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "literal" => Ok(Self::Literal),
            "pattern" => Ok(Self::Pattern),
            _ => Err(SearchModeParseError {
                value: value.to_owned(),
            }),
        }
    }
}

/// Errors raised while preparing a search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchQueryError {
    #[error("search query must not be empty")]
    Empty,
    #[error("search query is not a valid pattern: {message}")]
    InvalidPattern { message: String },
}

/// Compiled matcher applied to name, region, state, and flavour profile.
///
/// # Examples
/// ```
/// use dishes_backend::domain::{DishMatcher, SearchMode};
///
/// let matcher = DishMatcher::new("(", SearchMode::Literal).expect("literal text");
/// assert!(matcher.is_match("a (spicy) curry"));
/// assert!(DishMatcher::new("(", SearchMode::Pattern).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct DishMatcher {
    regex: Regex,
}

impl DishMatcher {
    /// Compile `query` under `mode`. Whitespace-only text counts as empty.
    pub fn new(query: &str, mode: SearchMode) -> Result<Self, SearchQueryError> {
        if query.trim().is_empty() {
            return Err(SearchQueryError::Empty);
        }
        let pattern = match mode {
            SearchMode::Literal => regex::escape(query),
            SearchMode::Pattern => query.to_owned(),
        };
        let regex = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .size_limit(PATTERN_SIZE_LIMIT)
            .build()
            .map_err(|err| SearchQueryError::InvalidPattern {
                message: err.to_string(),
            })?;
        Ok(Self { regex })
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// A dish matches when any searchable field matches.
    pub fn matches(&self, dish: &Dish) -> bool {
        [dish.name(), dish.region(), dish.state(), dish.flavor_profile()]
            .into_iter()
            .any(|field| self.is_match(field))
    }
}
