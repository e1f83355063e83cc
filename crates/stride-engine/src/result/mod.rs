//! Result assembly and the post-simulation publication stage.

pub mod assembly;
pub mod publish;

pub use assembly::{ProjectIdentity, ResultAssembler};
pub use publish::{PublishReport, PublishedResult, Publisher};
