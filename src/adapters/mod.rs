// Adapters layer: concrete implementations for external processes (package manager, launchers, prompts).

pub mod toolchain;

#[cfg(feature = "cli")]
pub mod prompt;

pub use toolchain::NpmToolchain;

#[cfg(feature = "cli")]
pub use prompt::DialoguerPrompter;
