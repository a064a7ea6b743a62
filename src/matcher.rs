//! The matcher: owns a query and a config, compiles them lazily into a
//! pattern, and tests candidate strings against it.

use crate::config::MatcherConfig;
use crate::error::{Error, Result};
use crate::pattern;
use regex::Regex;
use serde_json::Value;

/// Fuzzy query matcher.
///
/// Holds the current query and [`MatcherConfig`] plus the compiled pattern
/// derived from them. Every mutation clears the `compiled` flag; [`test`]
/// and [`compile`] repair it, so evaluation always reflects the latest
/// query and options.
///
/// [`test`]: Matcher::test
/// [`compile`]: Matcher::compile
#[derive(Debug)]
pub struct Matcher {
    query: String,
    config: MatcherConfig,
    /// Dirty flag: false whenever `regex` may be stale.
    compiled: bool,
    /// `None` means the match-nothing pattern (empty query).
    regex: Option<Regex>,
}

/// Construction.
impl Matcher {
    /// Creates a matcher with the default configuration.
    pub fn new(query: impl Into<String>) -> Self {
        Self::with_config(query, MatcherConfig::default())
    }

    /// Creates a matcher with an explicit configuration. Partial overlays
    /// use struct-update syntax:
    ///
    /// ```
    /// use multifind::{Matcher, MatcherConfig};
    ///
    /// let matcher = Matcher::with_config("авария", MatcherConfig {
    ///     translit: true,
    ///     ..Default::default()
    /// });
    /// ```
    pub fn with_config(query: impl Into<String>, config: MatcherConfig) -> Self {
        Self {
            query: query.into(),
            config,
            compiled: false,
            regex: None,
        }
    }

    /// Creates a matcher with an empty query, to be filled in later via
    /// [`set_query`](Matcher::set_query).
    pub fn from_config(config: MatcherConfig) -> Self {
        Self::with_config("", config)
    }
}

/// Accessors.
impl Matcher {
    /// The current query string.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Source of the compiled pattern, once compiled. `None` before the
    /// first compilation and for an empty query.
    pub fn pattern(&self) -> Option<&str> {
        self.regex.as_ref().map(Regex::as_str)
    }
}

/// Mutation. Every setter invalidates the compiled pattern.
impl Matcher {
    /// Replaces the query.
    pub fn set_query(&mut self, query: impl Into<String>) -> &mut Self {
        self.query = query.into();
        self.compiled = false;
        self
    }

    /// Sets one option by name.
    ///
    /// Fails with [`Error::InvalidArgument`] when the value is omitted
    /// (`None`) or the name is not a recognized option.
    pub fn set_option(
        &mut self,
        name: &str,
        value: impl Into<Option<bool>>,
    ) -> Result<&mut Self> {
        let value = value.into().ok_or_else(|| {
            Error::InvalidArgument(format!("option `{name}` requires a value"))
        })?;
        self.config.set(name, value)?;
        self.compiled = false;
        Ok(self)
    }

    /// Merges a batch of options.
    ///
    /// `options` must be a JSON object with boolean values and recognized
    /// keys; anything else fails with [`Error::InvalidArgument`] and leaves
    /// the configuration untouched. Later keys win within one batch.
    pub fn set_options(&mut self, options: &Value) -> Result<&mut Self> {
        self.config = self.staged_options(options)?;
        self.compiled = false;
        Ok(self)
    }

    /// Validates a whole batch against a copy of the live config. Callers
    /// only assign the result once every key has been accepted, so a
    /// rejected batch applies nothing.
    fn staged_options(&self, options: &Value) -> Result<MatcherConfig> {
        let map = options.as_object().ok_or_else(|| {
            Error::InvalidArgument("options must be a mapping".to_string())
        })?;

        let mut staged = self.config;
        for (name, value) in map {
            let value = value.as_bool().ok_or_else(|| {
                Error::InvalidArgument(format!("option `{name}` must be a boolean"))
            })?;
            staged.set(name, value)?;
        }
        Ok(staged)
    }
}

/// Compilation and evaluation.
impl Matcher {
    /// Rebuilds the pattern from the current query and configuration.
    ///
    /// The rebuild is always from scratch; compiling twice without an
    /// intervening mutation yields an identical pattern.
    pub fn compile(&mut self) -> Result<&mut Self> {
        match pattern::build(&self.query, &self.config) {
            Ok(regex) => {
                self.regex = regex;
                self.compiled = true;
                Ok(self)
            }
            Err(err) => {
                // Drop any previous pattern rather than expose a stale one.
                self.regex = None;
                self.compiled = false;
                Err(err.into())
            }
        }
    }

    /// Optionally replaces the query and/or merges options, then compiles.
    ///
    /// The whole call is atomic: an invalid options batch rejects the query
    /// update too, leaving the matcher exactly as it was.
    pub fn compile_with(
        &mut self,
        query: Option<&str>,
        options: Option<&Value>,
    ) -> Result<&mut Self> {
        // Validate options before touching any state.
        let staged = match options {
            Some(options) => Some(self.staged_options(options)?),
            None => None,
        };
        if let Some(query) = query {
            self.set_query(query);
        }
        if let Some(config) = staged {
            self.config = config;
            self.compiled = false;
        }
        self.compile()
    }

    /// Tests a candidate string against the compiled pattern, compiling
    /// first if a mutation invalidated it.
    ///
    /// An empty candidate never matches, and neither does anything when the
    /// query is empty. The match is substring containment: `strict` forces
    /// contiguity of the matched characters, not a full-string match.
    pub fn test(&mut self, value: &str) -> bool {
        if !self.compiled && self.compile().is_err() {
            // Only reachable past the regex size limit; nothing sensible to
            // match with, so report a non-match.
            return false;
        }
        if value.is_empty() {
            return false;
        }
        self.regex.as_ref().is_some_and(|re| re.is_match(value))
    }
}
