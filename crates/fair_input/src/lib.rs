//! # FAIR Input
//!
//! Input validation and stochastic sampling for FAIR-style quantitative
//! risk models.
//!
//! Given a risk factor ("target") and caller-supplied parameters, the
//! [`InputRouter`](router::InputRouter) works out which distribution
//! family the parameters describe, validates them against the rules for
//! that target and family, draws the requested number of samples and
//! records the exact parameters used so the model can be serialised and
//! reproduced later.
//!
//! ## Module Structure
//!
//! - [`types`]: keywords, distribution families and parameter sets
//! - [`distributions`]: Constant, Normal, Bernoulli and PERT samplers
//! - [`router`]: validation, single-target and combined generation
//! - [`store`]: the supplied-value record
//! - [`rng`]: seeded random number generation
//! - [`targets`]: standard FAIR node names and classifications
//! - [`error`]: error types
//!
//! ## Usage Example
//!
//! ```rust
//! use fair_input::router::{InputRouter, RouterConfig};
//! use fair_input::types::ParameterSet;
//! use fair_input::targets;
//!
//! let config = RouterConfig::builder().seed(2024).build().unwrap();
//! let mut router = InputRouter::with_config(config);
//!
//! let tef = router
//!     .generate(targets::THREAT_EVENT_FREQUENCY, 10_000, &ParameterSet::pert(1.0, 5.0, 12.0))
//!     .unwrap();
//! let vuln = router
//!     .generate(targets::VULNERABILITY, 10_000, &ParameterSet::bernoulli(0.3))
//!     .unwrap();
//!
//! assert!(tef.iter().all(|x| (1.0..=12.0).contains(x)));
//! assert!(vuln.iter().all(|&x| x == 0.0 || x == 1.0));
//! assert_eq!(router.supplied_values().len(), 2);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod distributions;
pub mod error;
pub mod rng;
pub mod router;
pub mod store;
pub mod targets;
pub mod types;

pub use error::InputError;
pub use router::{InputRouter, RouterConfig};
pub use store::{SuppliedValue, SuppliedValueStore};
pub use types::{DistributionFamily, Keyword, NestedParameters, ParameterSet};
