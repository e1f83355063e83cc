//! Seams between the engine and the outside world.
//!
//! Profile stores and synergy providers feed the engine; result sinks and
//! recommendation generators consume its output strictly afterwards.

pub mod cancellation;
pub mod profile_store;
pub mod recommendation;
pub mod result_sink;
pub mod synergy_provider;

pub use cancellation::{Cancellable, CancellationToken, NeverCancel};
pub use profile_store::ProfileStore;
pub use recommendation::RecommendationGenerator;
pub use result_sink::ResultSink;
pub use synergy_provider::SynergyProvider;
