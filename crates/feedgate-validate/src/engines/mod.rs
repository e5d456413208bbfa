//! Rule engines
//!
//! Only one engine remains: boolean expressions over article variables,
//! backing `custom` rules.

pub mod expression_engine;

pub use expression_engine::ExpressionEngine;
