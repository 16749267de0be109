pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::NpmToolchain;
pub use config::{cli::LocalStorage, settings::Settings};
pub use core::engine::{prepare, Scaffold, ScaffoldEngine, ScaffoldOutcome};
pub use domain::model::{ScaffoldRequest, Tier};
pub use utils::error::{KickstartError, Result};
