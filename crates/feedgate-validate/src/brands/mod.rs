//! Feed brand profiles
//!
//! Fixed, non-configurable rule bundles for the brands the platform
//! distributes to. A [`BrandRegistry`] maps each [`FeedBrand`] to its profile;
//! feeds with an unrecognised type resolve to [`NoopProfile`], which never
//! reports anything.

mod apple_news;
mod google_news;
mod msn;

use std::collections::HashMap;
use std::sync::Arc;

use feedgate_domain::{Content, Feed, FeedBrand, Finding, FindingOrigin, Severity};

pub use apple_news::AppleNewsProfile;
pub use google_news::GoogleNewsProfile;
pub use msn::MsnProfile;

/// A brand's built-in compliance bundle
pub trait BrandProfile: Send + Sync {
    /// Check content against the bundle
    fn check(&self, content: &Content) -> Vec<Finding>;
}

/// Profile for feeds without a known brand
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopProfile;

impl BrandProfile for NoopProfile {
    fn check(&self, _content: &Content) -> Vec<Finding> {
        Vec::new()
    }
}

/// Registry of brand profiles
#[derive(Clone, Default)]
pub struct BrandRegistry {
    profiles: HashMap<FeedBrand, Arc<dyn BrandProfile>>,
}

impl std::fmt::Debug for BrandRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrandRegistry")
            .field("brands", &self.profiles.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl BrandRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create registry with the MSN, Google News and Apple News profiles
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(FeedBrand::Msn, Arc::new(MsnProfile));
        registry.register(FeedBrand::GoogleNews, Arc::new(GoogleNewsProfile));
        registry.register(FeedBrand::AppleNews, Arc::new(AppleNewsProfile));
        registry
    }

    /// Add or replace the profile of a brand
    pub fn register(&mut self, brand: FeedBrand, profile: Arc<dyn BrandProfile>) {
        self.profiles.insert(brand, profile);
    }

    /// Profile registered for a brand
    pub fn get(&self, brand: FeedBrand) -> Option<Arc<dyn BrandProfile>> {
        self.profiles.get(&brand).cloned()
    }

    /// Profile for a feed, falling back to the no-op profile
    pub fn profile_for(&self, feed: &Feed) -> Arc<dyn BrandProfile> {
        feed.brand()
            .and_then(|brand| self.get(brand))
            .unwrap_or_else(|| Arc::new(NoopProfile))
    }

    /// Run the profile matching a feed
    pub fn check(&self, feed: &Feed, content: &Content) -> Vec<Finding> {
        self.profile_for(feed).check(content)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

fn brand_error(brand: FeedBrand, rule: &str, message: impl Into<String>) -> Finding {
    Finding::new(rule, message).with_origin(FindingOrigin::Brand { brand })
}

fn brand_warning(brand: FeedBrand, rule: &str, message: impl Into<String>) -> Finding {
    brand_error(brand, rule, message).with_severity(Severity::Warning)
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
