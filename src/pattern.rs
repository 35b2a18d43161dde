//! Path pattern parsing, validation, and matching.
//!
//! A pattern is a `/`-separated sequence of segments. A segment starting with
//! `:` is a named parameter that binds exactly one non-empty path segment;
//! anything else matches literally. `/` alone is the home pattern with zero
//! segments.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::RouterError;
use crate::path;

/// One segment of a parsed pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// Matches the path segment literally.
    Static(String),
    /// Binds the path segment under the given parameter name.
    Param(String),
}

/// A validated, parsed route pattern such as `/bikes/:id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

/// Named parameters extracted from a matched path.
///
/// Owned by the dispatch outcome and handed to the rendered view; a `BTreeMap`
/// keeps iteration and serialization order stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PathParams(BTreeMap<String, String>);

impl PathParams {
    /// Looks up a parameter value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Number of bound parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the matched pattern had no parameter segments.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn insert(&mut self, name: &str, value: &str) {
        self.0.insert(name.to_string(), value.to_string());
    }
}

impl PathPattern {
    /// Parses and validates a pattern string.
    ///
    /// Patterns are developer-written configuration, so parsing is strict
    /// rather than forgiving: a malformed pattern is a startup failure, not
    /// something to normalize around at dispatch time.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::InvalidPattern`] if the pattern:
    /// - does not start with `/`
    /// - contains an empty segment (`/bikes//42` or a trailing slash)
    /// - contains a parameter with an empty name (`/bikes/:`)
    /// - repeats a parameter name (`/trade/:id/:id`)
    ///
    /// # Examples
    ///
    /// ```
    /// use spoke_router::pattern::PathPattern;
    ///
    /// let pattern = PathPattern::parse("/bikes/:id").unwrap();
    /// assert_eq!(pattern.as_str(), "/bikes/:id");
    ///
    /// assert!(PathPattern::parse("bikes").is_err());
    /// assert!(PathPattern::parse("/bikes/:").is_err());
    /// ```
    pub fn parse(pattern: &str) -> Result<Self, RouterError> {
        let invalid = |reason: &'static str| RouterError::InvalidPattern {
            pattern: pattern.to_string(),
            reason,
        };

        if !pattern.starts_with('/') {
            return Err(invalid("must start with '/'"));
        }

        // The home pattern is the single slash with zero segments.
        if pattern == "/" {
            return Ok(Self {
                raw: pattern.to_string(),
                segments: Vec::new(),
            });
        }

        let mut segments = Vec::new();
        let mut seen_params: Vec<&str> = Vec::new();

        for seg in pattern[1..].split('/') {
            if seg.is_empty() {
                return Err(invalid("empty segment"));
            }

            if let Some(name) = seg.strip_prefix(':') {
                if name.is_empty() {
                    return Err(invalid("parameter name must not be empty"));
                }
                if seen_params.contains(&name) {
                    return Err(invalid("duplicate parameter name"));
                }
                seen_params.push(name);
                segments.push(Segment::Param(name.to_string()));
            } else {
                segments.push(Segment::Static(seg.to_string()));
            }
        }

        Ok(Self {
            raw: pattern.to_string(),
            segments,
        })
    }

    /// The original pattern string.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Structural shape of the pattern with parameter names erased.
    ///
    /// Two patterns with equal shapes match exactly the same set of paths
    /// (`/bikes/:id` and `/bikes/:slug` both produce `/bikes/:`), which is
    /// the ambiguity the route table rejects at registration.
    pub fn shape(&self) -> String {
        if self.segments.is_empty() {
            return "/".to_string();
        }

        let mut shape = String::new();
        for seg in &self.segments {
            shape.push('/');
            match seg {
                Segment::Static(s) => shape.push_str(s),
                Segment::Param(_) => shape.push(':'),
            }
        }
        shape
    }

    /// Matches a *normalized* path against this pattern.
    ///
    /// Returns the extracted parameters on a match, `None` otherwise. Each
    /// parameter binds exactly one segment; segment counts must line up.
    ///
    /// # Examples
    ///
    /// ```
    /// use spoke_router::pattern::PathPattern;
    ///
    /// let pattern = PathPattern::parse("/bikes/:id").unwrap();
    ///
    /// let params = pattern.matches("/bikes/42").unwrap();
    /// assert_eq!(params.get("id"), Some("42"));
    ///
    /// assert!(pattern.matches("/bikes").is_none());
    /// assert!(pattern.matches("/bikes/42/photos").is_none());
    /// ```
    pub fn matches(&self, normalized_path: &str) -> Option<PathParams> {
        let path_segments: Vec<&str> = path::segments(normalized_path).collect();

        if path_segments.len() != self.segments.len() {
            return None;
        }

        let mut params = PathParams::default();
        for (pattern_seg, path_seg) in self.segments.iter().zip(&path_segments) {
            match pattern_seg {
                Segment::Static(s) => {
                    if s != path_seg {
                        return None;
                    }
                }
                Segment::Param(name) => params.insert(name, path_seg),
            }
        }

        Some(params)
    }
}
