//! Domain layer constants
//!
//! Finding codes and brand thresholds shared by the validators and by the
//! collaborators that consume verdicts. Infrastructure constants live in
//! `feedgate_infrastructure::constants`.

// ============================================================================
// FINDING CODES
// ============================================================================

/// Title shorter than the configured minimum
pub const RULE_TITLE_MIN_LENGTH: &str = "title_min_length";

/// Title longer than the configured maximum
pub const RULE_TITLE_MAX_LENGTH: &str = "title_max_length";

/// Body shorter than the configured minimum
pub const RULE_BODY_MIN_LENGTH: &str = "body_min_length";

/// Body longer than the configured maximum
pub const RULE_BODY_MAX_LENGTH: &str = "body_max_length";

/// Required field missing or blank
pub const RULE_REQUIRED_FIELD: &str = "required_field";

/// Prohibited term found in title or body
pub const RULE_PROHIBITED_CONTENT: &str = "prohibited_content";

/// Category outside the allowed set
pub const RULE_INVALID_CATEGORY: &str = "invalid_category";

/// Thumbnail required but absent
pub const RULE_THUMBNAIL_REQUIRED: &str = "thumbnail_required";

/// Required metadata key missing or blank
pub const RULE_REQUIRED_METADATA: &str = "required_metadata";

/// Title matched a clickbait heuristic
pub const RULE_CLICKBAIT_TITLE: &str = "clickbait_title";

/// Category outside a brand's preferred set
pub const RULE_CATEGORY_PREFERENCE: &str = "category_preference";

/// Authored custom expression rule matched
pub const RULE_CUSTOM: &str = "custom_rule";

/// Authored rule carried a configuration that could not be interpreted
pub const RULE_INVALID_CONFIGURATION: &str = "invalid_rule_configuration";

/// The evaluation of a feed could not be carried out
pub const RULE_EVALUATION_FAULT: &str = "evaluation_fault";

// ============================================================================
// CONTENT FIELD NAMES
// ============================================================================

/// Field name reported for findings spanning title and body
pub const FIELD_CONTENT: &str = "content";

/// Field name of the thumbnail reference
pub const FIELD_THUMBNAIL: &str = "thumbnail";

// ============================================================================
// BRAND PROFILE THRESHOLDS
// ============================================================================

/// MSN maximum title length
pub const MSN_TITLE_MAX_LENGTH: usize = 100;

/// MSN minimum body length
pub const MSN_BODY_MIN_LENGTH: usize = 300;

/// MSN preferred maximum body length (warning only)
pub const MSN_BODY_PREFERRED_MAX_LENGTH: usize = 5000;

/// Google News maximum title length
pub const GOOGLE_NEWS_TITLE_MAX_LENGTH: usize = 110;

/// Google News minimum body length
pub const GOOGLE_NEWS_BODY_MIN_LENGTH: usize = 200;

/// Apple News maximum title length
pub const APPLE_NEWS_TITLE_MAX_LENGTH: usize = 120;

/// Apple News minimum body length
pub const APPLE_NEWS_BODY_MIN_LENGTH: usize = 250;
