//! Access rules and decisions
//!
//! An [`AccessRule`] pairs an optional HTTP verb and a [`PathPattern`] with a
//! [`Requirement`]. Rule tables are ordered most-specific-first and evaluated
//! first-match-wins by the application layer.

use super::kinds::ResourceKind;
use super::role::Role;
use crate::constants::PATH_WILDCARD;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// HTTP verbs understood by the rule table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl HttpMethod {
    /// Uppercase verb
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
        }
    }

    /// Whether a rule bound to `self` applies to a `request` verb
    pub fn covers(self, request: HttpMethod) -> bool {
        self == request || (self == Self::Get && request == Self::Head)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "PATCH" => Ok(Self::Patch),
            "DELETE" => Ok(Self::Delete),
            "HEAD" => Ok(Self::Head),
            "OPTIONS" => Ok(Self::Options),
            other => Err(format!("Unsupported HTTP method: {other}")),
        }
    }
}

/// Path pattern with single-segment wildcards
///
/// Segments match literally, except `*` which matches exactly one non-empty
/// segment. Empty segments (leading, trailing or doubled slashes) and any
/// query string are ignored on both sides.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PathPattern {
    raw: String,
    segments: Vec<String>,
}

impl PathPattern {
    /// Parse a pattern such as `/api/users/*`
    pub fn parse(raw: &str) -> Result<Self, String> {
        if !raw.starts_with('/') {
            return Err(format!("Path pattern must start with '/': {raw}"));
        }
        if raw.contains('?') {
            return Err(format!("Path pattern must not contain a query: {raw}"));
        }
        let segments = split_segments(raw).map(str::to_string).collect();
        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    /// Original pattern text
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether `path` matches this pattern
    pub fn matches(&self, path: &str) -> bool {
        let mut candidate = split_segments(strip_query(path));
        for expected in &self.segments {
            match candidate.next() {
                Some(actual) if expected == PATH_WILDCARD || expected == actual => {}
                _ => return false,
            }
        }
        candidate.next().is_none()
    }
}

impl TryFrom<String> for PathPattern {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PathPattern> for String {
    fn from(pattern: PathPattern) -> Self {
        pattern.raw
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn strip_query(path: &str) -> &str {
    path.split_once('?').map_or(path, |(before, _)| before)
}

fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

/// Trailing path segment parsed as an entity id
///
/// Only plain ASCII digits are accepted; signs, whitespace and anything else
/// yield `None`.
pub fn trailing_id(path: &str) -> Option<i64> {
    let last = split_segments(strip_query(path)).last()?;
    if !last.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    last.parse().ok()
}

/// What a matching rule demands of the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Requirement {
    /// Anyone, including anonymous callers
    Public,
    /// Any authenticated caller
    AuthenticatedOnly,
    /// Authenticated caller with at least this role
    RoleAtLeast {
        /// Minimum role
        role: Role,
    },
    /// Authenticated caller whose id is the trailing path segment
    SelfOwnership,
    /// Authenticated caller who owns the resource named by the trailing segment
    ResourceOwnership {
        /// Kind of resource to look up
        kind: ResourceKind,
    },
}

impl Requirement {
    /// Whether evaluating this requirement needs a persistence lookup
    pub fn needs_lookup(self) -> bool {
        matches!(self, Self::ResourceOwnership { .. })
    }
}

/// One row of the authorization rule table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessRule {
    /// Verb to match; `None` matches every verb
    #[serde(default)]
    pub method: Option<HttpMethod>,
    /// Path to match
    pub path: PathPattern,
    /// Requirement applied on match
    pub requirement: Requirement,
}

impl AccessRule {
    /// Rule bound to one verb
    pub fn new(method: HttpMethod, path: PathPattern, requirement: Requirement) -> Self {
        Self {
            method: Some(method),
            path,
            requirement,
        }
    }

    /// Rule matching every verb
    pub fn any_method(path: PathPattern, requirement: Requirement) -> Self {
        Self {
            method: None,
            path,
            requirement,
        }
    }

    /// Whether this rule applies to the request
    ///
    /// A `GET` rule also covers `HEAD`, which is served by the same route.
    pub fn matches(&self, method: HttpMethod, path: &str) -> bool {
        self.method.is_none_or(|m| m.covers(method)) && self.path.matches(path)
    }
}

impl fmt::Display for AccessRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.method {
            Some(method) => write!(f, "{method} {}", self.path),
            None => write!(f, "* {}", self.path),
        }
    }
}

/// Outcome of an authorization decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Allow,
    Deny,
}

impl Decision {
    /// Convert a boolean check into a decision
    pub fn from_bool(allowed: bool) -> Self {
        if allowed { Self::Allow } else { Self::Deny }
    }

    /// Whether the request may proceed
    pub fn is_allowed(self) -> bool {
        self == Self::Allow
    }
}
