//! Core types for parameter routing.
//!
//! This module provides:
//! - [`Keyword`]: recognised parameter names and the keyword→family table
//! - [`DistributionFamily`]: families with their required keywords and samplers
//! - [`ParameterSet`]: the keyword→value mapping for one request
//! - [`NestedParameters`]: sub-target → column → parameters for combined generation

pub mod family;
pub mod keyword;
pub mod parameters;

pub use family::DistributionFamily;
pub use keyword::Keyword;
pub use parameters::{NestedParameters, ParameterSet};
