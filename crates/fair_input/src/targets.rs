//! Names of the nodes in a FAIR risk model.
//!
//! Targets are plain strings so callers can route custom nodes; these
//! constants cover the standard FAIR taxonomy and seed the default
//! classification sets in [`RouterConfig`](crate::router::RouterConfig).

/// Annualised loss exposure.
pub const RISK: &str = "Risk";
/// Frequency of loss events.
pub const LOSS_EVENT_FREQUENCY: &str = "Loss Event Frequency";
/// Frequency of threat events.
pub const THREAT_EVENT_FREQUENCY: &str = "Threat Event Frequency";
/// Probability a threat event becomes a loss event.
pub const VULNERABILITY: &str = "Vulnerability";
/// Frequency of contact between threat and asset.
pub const CONTACT_FREQUENCY: &str = "Contact Frequency";
/// Probability of action given contact.
pub const ACTION: &str = "Action";
/// Capability of the threat community, as a percentile.
pub const THREAT_CAPABILITY: &str = "Threat Capability";
/// Strength of controls, as a percentile.
pub const CONTROL_STRENGTH: &str = "Control Strength";
/// Magnitude of loss per event.
pub const LOSS_MAGNITUDE: &str = "Loss Magnitude";
/// Primary loss per event.
pub const PRIMARY_LOSS: &str = "Primary Loss";
/// Secondary loss per event.
pub const SECONDARY_LOSS: &str = "Secondary Loss";
/// Frequency of secondary loss events.
pub const SECONDARY_LOSS_EVENT_FREQUENCY: &str = "Secondary Loss Event Frequency";
/// Magnitude of secondary loss events.
pub const SECONDARY_LOSS_EVENT_MAGNITUDE: &str = "Secondary Loss Event Magnitude";

/// Targets whose values are, by definition, confined to [0, 1].
pub const DEFAULT_BOUNDED_TARGETS: [&str; 4] =
    [ACTION, VULNERABILITY, CONTROL_STRENGTH, THREAT_CAPABILITY];

/// Targets that are always sampled from a Bernoulli distribution.
pub const DEFAULT_BERNOULLI_TARGETS: [&str; 1] = [VULNERABILITY];

/// Prefix marking a combined (product-of-factors) target.
pub const MULTI_PREFIX: &str = "multi_";
