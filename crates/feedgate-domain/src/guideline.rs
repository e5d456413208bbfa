//! Guideline model
//!
//! A feed's [`GuidelineSet`] is stored as authored: optional top-level bounds
//! and lists plus an optional API specification block that overrides them.
//! [`GuidelineSet::resolve`] flattens the two layers into the
//! [`EffectiveGuideline`] the validators consume.
//!
//! Resolution never fails. A missing value means "no constraint", and so does
//! a malformed one: a bound that is zero or negative is dropped before the
//! override/base choice, and blank list entries are discarded. An override
//! list left empty after that cleaning counts as absent, so the base list
//! still applies.

use serde::{Deserialize, Serialize};

/// Publishing guidelines of one feed, as authored
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidelineSet {
    /// Minimum title length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_min_length: Option<i64>,
    /// Maximum title length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_max_length: Option<i64>,
    /// Minimum body length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_min_length: Option<i64>,
    /// Maximum body length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_max_length: Option<i64>,
    /// Whether a thumbnail is mandatory
    #[serde(default)]
    pub thumbnail_required: bool,
    /// Fields that must be present and non-blank
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_fields: Option<Vec<String>>,
    /// Terms that must not appear in title or body
    #[serde(
        default,
        alias = "prohibited_topics",
        skip_serializing_if = "Option::is_none"
    )]
    pub prohibited_terms: Option<Vec<String>>,
    /// Accepted categories
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_categories: Option<Vec<String>>,
    /// Per-feed API specification overriding the fields above
    #[serde(
        default,
        alias = "api_specifications",
        skip_serializing_if = "Option::is_none"
    )]
    pub api_specification: Option<ApiSpecification>,
}

/// Override block; any field present here replaces the top-level value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSpecification {
    /// Terms that must not appear in title or body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prohibited_terms: Option<Vec<String>>,
    /// Fields that must be present and non-blank
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_fields: Option<Vec<String>>,
    /// Accepted categories
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_categories: Option<Vec<String>>,
    /// Minimum title length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_min_length: Option<i64>,
    /// Maximum title length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_max_length: Option<i64>,
    /// Minimum body length
    #[serde(
        default,
        alias = "content_min_length",
        skip_serializing_if = "Option::is_none"
    )]
    pub body_min_length: Option<i64>,
    /// Maximum body length
    #[serde(
        default,
        alias = "content_max_length",
        skip_serializing_if = "Option::is_none"
    )]
    pub body_max_length: Option<i64>,
}

/// Inclusive character-count bounds; `None` means unbounded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LengthBounds {
    /// Lower bound
    pub min: Option<usize>,
    /// Upper bound
    pub max: Option<usize>,
}

impl LengthBounds {
    /// Bounds with both ends set
    pub fn new(min: Option<usize>, max: Option<usize>) -> Self {
        Self { min, max }
    }

    /// Only an upper bound
    pub fn at_most(max: usize) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    /// Only a lower bound
    pub fn at_least(min: usize) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    /// Build from raw authored values, dropping non-positive bounds
    pub fn from_raw(min: Option<i64>, max: Option<i64>) -> Self {
        Self {
            min: positive(min),
            max: positive(max),
        }
    }

    /// Whether at least one end is set
    pub fn is_configured(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }
}

/// Flat guideline after override resolution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EffectiveGuideline {
    /// Title bounds
    pub title: LengthBounds,
    /// Body bounds
    pub body: LengthBounds,
    /// Whether a thumbnail is mandatory
    pub thumbnail_required: bool,
    /// Required field names; empty means no constraint
    pub required_fields: Vec<String>,
    /// Prohibited terms; empty means no constraint
    pub prohibited_terms: Vec<String>,
    /// Allowed categories; empty means no constraint
    pub allowed_categories: Vec<String>,
}

impl EffectiveGuideline {
    /// Whether any baseline check would run
    pub fn is_configured(&self) -> bool {
        self.title.is_configured()
            || self.body.is_configured()
            || self.thumbnail_required
            || !self.required_fields.is_empty()
            || !self.prohibited_terms.is_empty()
            || !self.allowed_categories.is_empty()
    }
}

impl GuidelineSet {
    /// Flatten base and override layers
    pub fn resolve(&self) -> EffectiveGuideline {
        let spec = self.api_specification.as_ref();

        let bound = |over: Option<Option<i64>>, base: Option<i64>| {
            positive(over.flatten()).or_else(|| positive(base))
        };
        let list = |over: Option<&Option<Vec<String>>>, base: &Option<Vec<String>>| {
            over.and_then(Option::as_ref)
                .map(|items| clean_list(items))
                .filter(|items| !items.is_empty())
                .or_else(|| base.as_ref().map(|items| clean_list(items)))
                .unwrap_or_default()
        };

        EffectiveGuideline {
            title: LengthBounds {
                min: bound(spec.map(|s| s.title_min_length), self.title_min_length),
                max: bound(spec.map(|s| s.title_max_length), self.title_max_length),
            },
            body: LengthBounds {
                min: bound(spec.map(|s| s.body_min_length), self.body_min_length),
                max: bound(spec.map(|s| s.body_max_length), self.body_max_length),
            },
            thumbnail_required: self.thumbnail_required,
            required_fields: list(spec.map(|s| &s.required_fields), &self.required_fields),
            prohibited_terms: list(spec.map(|s| &s.prohibited_terms), &self.prohibited_terms),
            allowed_categories: list(
                spec.map(|s| &s.allowed_categories),
                &self.allowed_categories,
            ),
        }
    }
}

fn positive(value: Option<i64>) -> Option<usize> {
    value
        .filter(|v| *v > 0)
        .and_then(|v| usize::try_from(v).ok())
}

fn clean_list(items: &[String]) -> Vec<String> {
    items
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
