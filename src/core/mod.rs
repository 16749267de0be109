pub mod engine;
pub mod normalize;
pub mod planner;
pub mod synth;
pub mod tiers;
pub mod writer;

pub use crate::domain::model::{Artifact, ArtifactPlan, PackageSet, ProjectSlug, Tier};
pub use crate::domain::ports::{ConfigProvider, Prompter, Storage, Toolchain};
pub use crate::utils::error::Result;
