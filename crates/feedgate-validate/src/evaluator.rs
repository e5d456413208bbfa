//! Compliance Evaluator
//!
//! Orchestrates one evaluation of an article against a feed:
//!
//! 1. guideline-driven baseline checks, in their fixed order
//! 2. the feed brand's built-in bundle, when brand profiles are enabled
//! 3. every active authored rule owned by the feed, in definition order
//!
//! Findings are merged in that order and split into errors and warnings by
//! severity; the verdict passes when no error remains. Evaluation never
//! panics or returns a fault from [`ComplianceEvaluator::evaluate`]: a failing
//! rule source becomes a verdict carrying one `evaluation_fault` finding.

use std::sync::Arc;

use feedgate_domain::{
    AuditIdGenerator, Clock, ComplianceVerdict, Content, ContentId, Feed, FeedId, Finding, Result,
    RuleSource, ValidatorRule, VerdictCache, VerdictKey, VerdictStamp,
};
use rayon::prelude::*;
use tracing::{debug, error};

use crate::audit::{SystemClock, TimestampAuditIds};
use crate::brands::BrandRegistry;
use crate::rules::RuleDispatcher;
use crate::validators::check_guidelines;

/// Evaluates content against feeds
pub struct ComplianceEvaluator {
    rules: Arc<dyn RuleSource>,
    dispatcher: RuleDispatcher,
    brands: BrandRegistry,
    brand_profiles: bool,
    cache: Option<Arc<dyn VerdictCache>>,
    audit_ids: Arc<dyn AuditIdGenerator>,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for ComplianceEvaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComplianceEvaluator")
            .field("brands", &self.brands)
            .field("brand_profiles", &self.brand_profiles)
            .field("cached", &self.cache.is_some())
            .finish_non_exhaustive()
    }
}

impl ComplianceEvaluator {
    /// Create an evaluator with the standard brand profiles, no cache,
    /// the wall clock and timestamped audit ids
    pub fn new(rules: Arc<dyn RuleSource>) -> Self {
        Self {
            rules,
            dispatcher: RuleDispatcher::new(),
            brands: BrandRegistry::standard(),
            brand_profiles: true,
            cache: None,
            audit_ids: Arc::new(TimestampAuditIds::default()),
            clock: Arc::new(SystemClock),
        }
    }

    /// Store successful verdicts of identified content in `cache`
    pub fn with_cache(mut self, cache: Arc<dyn VerdictCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn with_audit_ids(mut self, audit_ids: Arc<dyn AuditIdGenerator>) -> Self {
        self.audit_ids = audit_ids;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_brand_registry(mut self, brands: BrandRegistry) -> Self {
        self.brands = brands;
        self
    }

    /// Toggle the brand bundles in the baseline pass
    pub fn with_brand_profiles(mut self, enabled: bool) -> Self {
        self.brand_profiles = enabled;
        self
    }

    /// Verdict cache, if one is attached
    pub fn cache(&self) -> Option<&Arc<dyn VerdictCache>> {
        self.cache.as_ref()
    }

    /// Evaluate content against one feed
    pub fn evaluate(&self, content: &Content, feed: &Feed) -> ComplianceVerdict {
        match self.try_evaluate(content, feed) {
            Ok(verdict) => verdict,
            Err(e) => {
                error!(feed_id = %feed.id, error = %e, "Compliance evaluation failed");
                ComplianceVerdict::fault(
                    format!("Evaluation against feed {} failed: {e}", feed.id),
                    self.stamp(content, feed.id),
                )
            }
        }
    }

    /// Evaluate content against one feed, surfacing rule source failures
    pub fn try_evaluate(&self, content: &Content, feed: &Feed) -> Result<ComplianceVerdict> {
        let rules = self.rules.rules_for_feed(feed.id)?;
        Ok(self.evaluate_with_rules(content, feed, &rules))
    }

    /// Evaluate with an already-loaded rule set
    ///
    /// Rules that are inactive or owned by another feed are skipped.
    pub fn evaluate_with_rules(
        &self,
        content: &Content,
        feed: &Feed,
        rules: &[ValidatorRule],
    ) -> ComplianceVerdict {
        let mut findings = self.baseline_findings(content, feed);
        for rule in rules.iter().filter(|rule| rule.applies_to(feed.id)) {
            findings.extend(self.dispatcher.dispatch(content, rule));
        }

        let verdict = ComplianceVerdict::from_findings(findings, self.stamp(content, feed.id));
        debug!(
            feed_id = %feed.id,
            audit_id = %verdict.audit_id(),
            passed = verdict.passed(),
            errors = verdict.errors().len(),
            warnings = verdict.warnings().len(),
            "Compliance evaluation complete"
        );

        if let (Some(cache), Some(content_id)) = (&self.cache, content.id) {
            cache.put(VerdictKey::new(content_id, feed.id), verdict.clone());
        }
        verdict
    }

    /// Evaluate content against several feeds in parallel
    ///
    /// One verdict per feed, in input order. A fault on one feed never
    /// affects the others.
    pub fn evaluate_many(&self, content: &Content, feeds: &[Feed]) -> Vec<ComplianceVerdict> {
        feeds
            .par_iter()
            .map(|feed| self.evaluate(content, feed))
            .collect()
    }

    /// Return the cached verdict for identified content, else evaluate
    pub fn evaluate_cached(&self, content: &Content, feed: &Feed) -> ComplianceVerdict {
        if let Some(verdict) = content
            .id
            .and_then(|content_id| self.cached_verdict(content_id, feed.id))
        {
            debug!(feed_id = %feed.id, audit_id = %verdict.audit_id(), "Verdict cache hit");
            return verdict;
        }
        self.evaluate(content, feed)
    }

    /// Previously computed verdict for a (content, feed) pair
    pub fn cached_verdict(&self, content_id: ContentId, feed_id: FeedId) -> Option<ComplianceVerdict> {
        self.cache
            .as_ref()
            .and_then(|cache| cache.get(&VerdictKey::new(content_id, feed_id)))
    }

    /// Guideline checks only
    ///
    /// The synchronous pre-submission check: no brand bundle, no authored
    /// rules and no cache write. The full [`evaluate`](Self::evaluate)
    /// verdict stays authoritative.
    pub fn pre_validate(&self, content: &Content, feed: &Feed) -> ComplianceVerdict {
        let findings = check_guidelines(content, &feed.guidelines.resolve());
        ComplianceVerdict::from_findings(findings, self.stamp(content, feed.id))
    }

    /// Baseline findings: guideline checks, then the brand bundle
    pub fn baseline_findings(&self, content: &Content, feed: &Feed) -> Vec<Finding> {
        let mut findings = check_guidelines(content, &feed.guidelines.resolve());
        if self.brand_profiles {
            findings.extend(self.brands.profile_for(feed).check(content));
        }
        findings
    }

    fn stamp(&self, content: &Content, feed_id: FeedId) -> VerdictStamp {
        let evaluated_at = self.clock.now();
        VerdictStamp {
            audit_id: self.audit_ids.mint(evaluated_at),
            content_id: content.id,
            feed_id,
            evaluated_at,
        }
    }
}
