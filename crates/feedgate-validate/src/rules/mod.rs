//! Authored rules: typed configurations, dispatch and the validator catalog

pub mod catalog;
pub mod config;
pub mod dispatch;

pub use catalog::{ValidatorDescriptor, validator_catalog};
pub use config::{
    CategoryConfig, CustomConfig, LengthConfig, MetadataConfig, ProhibitedContentConfig,
    RequiredFieldsConfig, RuleCheck,
};
pub use dispatch::RuleDispatcher;
