//! Dictionary reset policies.
//!
//! A policy is consulted every time the code space is exhausted at the
//! maximum width (the *ceiling*) and answers with a [`ResetDecision`].
//! Encoder and decoder feed it identical samples, so both sides reach the
//! same decision at the same codeword.

use crate::config::{DEGRADATION_THRESHOLD, TAG_FROZEN, TAG_MONITORED, TAG_SATURATE};
use crate::error::{LzwError, Result};
use std::fmt;
use std::str::FromStr;

/// What happens when the dictionary saturates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResetPolicy {
    /// Never reset; the dictionary stops growing at the ceiling.
    Frozen,
    /// Start over with a fresh dictionary every time the ceiling is hit.
    Saturate,
    /// Start over once the compression ratio measured at the ceiling has
    /// degraded by more than 10% from the first measurement.
    Monitored,
}

impl ResetPolicy {
    /// Every policy, in tag order.
    pub const ALL: [ResetPolicy; 3] = [Self::Frozen, Self::Saturate, Self::Monitored];

    /// The mode tag written as the first byte of a stream.
    pub fn tag(self) -> u8 {
        match self {
            Self::Frozen => TAG_FROZEN,
            Self::Saturate => TAG_SATURATE,
            Self::Monitored => TAG_MONITORED,
        }
    }

    /// Parse a mode tag.
    pub fn from_tag(tag: u8) -> Result<Self> {
        match tag {
            TAG_FROZEN => Ok(Self::Frozen),
            TAG_SATURATE => Ok(Self::Saturate),
            TAG_MONITORED => Ok(Self::Monitored),
            other => Err(LzwError::UnknownMode(other)),
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Frozen => "frozen",
            Self::Saturate => "saturate",
            Self::Monitored => "monitored",
        }
    }
}

impl fmt::Display for ResetPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for ResetPolicy {
    type Err = LzwError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "n" | "frozen" => Ok(Self::Frozen),
            "r" | "saturate" => Ok(Self::Saturate),
            "m" | "monitored" => Ok(Self::Monitored),
            other => Err(LzwError::InvalidArgument(format!(
                "unknown reset policy '{other}' (expected n, r or m)"
            ))),
        }
    }
}

/// Measurement taken for the step that hit, or sits at, the ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CeilingSample {
    /// Length in bytes of the string the codeword stands for.
    pub matched_len: usize,
    /// Width in bits of the codeword.
    pub width: u8,
}

/// Outcome of consulting a policy at the ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetDecision {
    /// Keep the current dictionary.
    NoOp,
    /// Discard the dictionary and return to the initial width.
    Reinitialize,
}

/// Running compression ratio for the monitored policy.
///
/// Only samples taken at the ceiling are accumulated. The first ratio after
/// a reset becomes the baseline; later ratios are compared against it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatioMonitor {
    /// Input bits represented by the sampled codewords.
    represented_bits: f64,
    /// Bits spent on the sampled codewords.
    emitted_bits: f64,
    baseline: Option<f64>,
    current: Option<f64>,
}

impl RatioMonitor {
    /// Create an empty monitor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate one sample and decide whether the ratio has degraded.
    pub fn record(&mut self, sample: CeilingSample) -> ResetDecision {
        self.represented_bits += (sample.matched_len * 8) as f64;
        self.emitted_bits += f64::from(sample.width);
        let current = self.represented_bits / self.emitted_bits;
        self.current = Some(current);

        match self.baseline {
            None => {
                self.baseline = Some(current);
                ResetDecision::NoOp
            }
            Some(baseline) if baseline / current > DEGRADATION_THRESHOLD => {
                ResetDecision::Reinitialize
            }
            Some(_) => ResetDecision::NoOp,
        }
    }

    /// Forget all samples and the baseline.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Ratio recorded by the first sample since the last clear.
    pub fn baseline(&self) -> Option<f64> {
        self.baseline
    }

    /// Ratio after the most recent sample.
    pub fn current(&self) -> Option<f64> {
        self.current
    }
}

/// A policy together with the mutable state it needs for one stream.
#[derive(Debug, Clone)]
pub struct PolicyState {
    policy: ResetPolicy,
    monitor: RatioMonitor,
}

impl PolicyState {
    /// Fresh state for `policy`.
    pub fn new(policy: ResetPolicy) -> Self {
        Self {
            policy,
            monitor: RatioMonitor::new(),
        }
    }

    /// Ratio bookkeeping, for the monitored policy only.
    pub fn monitor(&self) -> Option<&RatioMonitor> {
        match self.policy {
            ResetPolicy::Monitored => Some(&self.monitor),
            _ => None,
        }
    }

    /// Decide what to do at the ceiling. A `Reinitialize` decision also
    /// clears the ratio bookkeeping.
    pub fn on_ceiling(&mut self, sample: CeilingSample) -> ResetDecision {
        let decision = match self.policy {
            ResetPolicy::Frozen => ResetDecision::NoOp,
            ResetPolicy::Saturate => ResetDecision::Reinitialize,
            ResetPolicy::Monitored => {
                let decision = self.monitor.record(sample);
                tracing::trace!(
                    matched_len = sample.matched_len,
                    baseline = ?self.monitor.baseline(),
                    current = ?self.monitor.current(),
                    "ratio sample"
                );
                decision
            }
        };
        if decision == ResetDecision::Reinitialize {
            self.monitor.clear();
        }
        decision
    }
}
