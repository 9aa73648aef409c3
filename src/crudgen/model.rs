use crate::error::CrudgenError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Target stack understood by the generation service.
///
/// Serializes to the service's canonical names (`SPRING_BOOT`, `DJANGO`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Framework {
    #[default]
    SpringBoot,
    Django,
    Flask,
    Dotnet,
    Express,
}

impl Framework {
    pub const ALL: [Framework; 5] = [
        Framework::SpringBoot,
        Framework::Django,
        Framework::Flask,
        Framework::Dotnet,
        Framework::Express,
    ];

    /// Maps a user-facing label to its canonical framework.
    ///
    /// Unrecognized labels fall back to [`Framework::SpringBoot`] without complaint.
    pub fn from_label(label: &str) -> Self {
        match Self::ALL.iter().find(|fw| fw.label() == label) {
            Some(fw) => *fw,
            None => {
                log::debug!(
                    "unrecognized framework label {:?}, using {}",
                    label,
                    Framework::default().label()
                );
                Framework::default()
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Framework::SpringBoot => "spring-boot",
            Framework::Django => "django",
            Framework::Flask => "flask",
            Framework::Dotnet => "dotnet",
            Framework::Express => "express",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GenerationType {
    #[default]
    CompleteProject,
}

/// Body of `POST /api/v2/generate/files`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub uml_content: String,
    pub package_name: String,
    pub output_path: String,
    pub generation_type: GenerationType,
    pub framework: Framework,
}

impl GenerationRequest {
    pub fn new(
        uml_content: String,
        package_name: impl Into<String>,
        output_path: impl Into<String>,
        framework: Framework,
    ) -> Self {
        Self {
            uml_content,
            package_name: package_name.into(),
            output_path: output_path.into(),
            generation_type: GenerationType::CompleteProject,
            framework,
        }
    }
}

/// Body of a 200 reply from the generate endpoint.
///
/// Missing fields take their zero value, and so does a body that does not
/// decode at all (see [`GenerationResult::from_body`]).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationResult {
    pub success: bool,
    pub message: String,
    pub class_count: u32,
}

impl GenerationResult {
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_else(|e| {
            log::debug!("could not decode generation result: {}", e);
            Self::default()
        })
    }
}

/// Operation selected with `--cmd`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Generate,
    Validate,
}

impl FromStr for Command {
    type Err = CrudgenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "generate" => Ok(Command::Generate),
            "validate" => Ok(Command::Validate),
            other => Err(CrudgenError::UnknownCommand(other.to_string())),
        }
    }
}
