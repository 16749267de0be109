use thiserror::Error;

#[derive(Error, Debug)]
pub enum KickstartError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error in {field}: {message}")]
    ValidationError { field: String, message: String },

    #[error("Prompt error: {message}")]
    PromptError { message: String },

    #[error("Generated artifact {artifact} is inconsistent with the plan: {message}")]
    InvariantViolation { artifact: String, message: String },

    #[error("Failed to write {path} ({written} artifacts written before it): {source}")]
    ArtifactWriteError {
        path: String,
        written: usize,
        #[source]
        source: Box<KickstartError>,
    },

    #[error("{stage} failed: {message}")]
    CollaboratorError { stage: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Internal,
    Filesystem,
    Toolchain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl KickstartError {
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn invariant(artifact: &str, message: impl Into<String>) -> Self {
        Self::InvariantViolation {
            artifact: artifact.to_string(),
            message: message.into(),
        }
    }

    pub fn collaborator(stage: &str, message: impl Into<String>) -> Self {
        Self::CollaboratorError {
            stage: stage.to_string(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ValidationError { .. } | Self::PromptError { .. } => ErrorCategory::Input,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::InvariantViolation { .. } | Self::SerializationError(_) => {
                ErrorCategory::Internal
            }
            Self::IoError(_) | Self::ArtifactWriteError { .. } => ErrorCategory::Filesystem,
            Self::CollaboratorError { .. } => ErrorCategory::Toolchain,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ValidationError { .. }
            | Self::PromptError { .. }
            | Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorSeverity::High,
            Self::CollaboratorError { .. } => ErrorSeverity::Medium,
            Self::IoError(_) | Self::ArtifactWriteError { .. } => ErrorSeverity::High,
            Self::InvariantViolation { .. } | Self::SerializationError(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::ValidationError { .. } => {
                "Use a project name containing at least one letter or digit"
            }
            Self::PromptError { .. } => "Pass --name and --tier to run without prompts",
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Check the command line flags and kickstart.toml values"
            }
            Self::InvariantViolation { .. } | Self::SerializationError(_) => {
                "This is a bug in vite-kickstart; please report it with the chosen tier"
            }
            Self::IoError(_) | Self::ArtifactWriteError { .. } => {
                "Check permissions and free space in the output directory"
            }
            Self::CollaboratorError { .. } => {
                "Make sure the package manager is installed and the network is reachable"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ValidationError { message, .. } => format!("Invalid input: {}", message),
            Self::ArtifactWriteError { path, source, .. } => {
                format!("Could not write {}: {}", path, source)
            }
            Self::CollaboratorError { stage, message } => {
                format!("{} did not complete: {}", stage, message)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, KickstartError>;
