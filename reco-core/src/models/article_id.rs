use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Article identifier in the form it arrives from the loading collaborator.
///
/// Source tables mix integer, float and string renderings of the same id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawArticleId {
    Int(i64),
    Float(f64),
    Text(String),
}

/// Canonical article identifier.
///
/// Every id is normalized once at the ingestion boundary so that `1430`,
/// `1430.0` and `"1430.0"` are the same key. Integral numeric values render
/// without a fractional part, other numeric values use the shortest float
/// repr, and anything non-numeric is kept as trimmed text.
///
/// Ordering is numeric-aware: numeric ids compare by value and sort before
/// non-numeric ids, which compare lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(String);

impl ArticleId {
    /// Canonicalize a textual id. Returns `None` for empty input.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        match trimmed.parse::<f64>() {
            Ok(v) if v.is_finite() => Some(Self::from_f64(v)),
            _ => Some(Self(trimmed.to_string())),
        }
    }

    /// Canonicalize a raw id from any of its source renderings.
    pub fn from_raw(raw: &RawArticleId) -> Option<Self> {
        match raw {
            RawArticleId::Int(v) => Some(Self(v.to_string())),
            RawArticleId::Float(v) if v.is_finite() => Some(Self::from_f64(*v)),
            RawArticleId::Float(_) => None,
            RawArticleId::Text(s) => Self::parse(s),
        }
    }

    fn from_f64(v: f64) -> Self {
        if v.fract() == 0.0 && v.abs() < 1e15 {
            Self((v as i64).to_string())
        } else {
            Self(v.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn numeric_value(&self) -> Option<f64> {
        self.0.parse::<f64>().ok().filter(|v| v.is_finite())
    }
}

impl Ord for ArticleId {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.numeric_value(), other.numeric_value()) {
            (Some(a), Some(b)) => a
                .partial_cmp(&b)
                .unwrap_or(Ordering::Equal)
                .then_with(|| self.0.cmp(&other.0)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for ArticleId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lenient conversion for in-process callers: empty input yields an empty id.
impl From<&str> for ArticleId {
    fn from(raw: &str) -> Self {
        Self::parse(raw).unwrap_or_else(|| Self(String::new()))
    }
}

impl From<String> for ArticleId {
    fn from(raw: String) -> Self {
        Self::from(raw.as_str())
    }
}

impl From<u64> for ArticleId {
    fn from(v: u64) -> Self {
        Self(v.to_string())
    }
}

impl From<f64> for ArticleId {
    fn from(v: f64) -> Self {
        Self::from_raw(&RawArticleId::Float(v)).unwrap_or_else(|| Self(v.to_string()))
    }
}
