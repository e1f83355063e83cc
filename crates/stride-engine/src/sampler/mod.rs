//! Stochastic trial sampler.
//!
//! One seeded ChaCha8 stream per project; every trial draws exactly three
//! standard-normal variates from it, so a (seed, inputs) pair always yields
//! the same trial sequence.

pub mod seed;
pub mod trial;

pub use seed::{default_base_seed, derive_project_seed, model_fingerprint, SimulationKey};
pub use trial::{SamplerSettings, TrialParams, TrialSample, TrialSampler};
