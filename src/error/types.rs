use thiserror::Error;

/// Unified result type for the planner crate.
pub type Result<T> = std::result::Result<T, PlannerError>;

/// Errors surfaced by the layout editor core.
#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("furniture `{0}` not found")]
    FurnitureNotFound(String),
    #[error("template `{0}` not found")]
    TemplateNotFound(String),
    #[error("invalid snap config: {0}")]
    Config(String),
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Read(#[from] ReadError),
}

/// A layout document that is malformed or incomplete.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("layout is not valid JSON: {0}")]
    Json(#[source] serde_json::Error),
    #[error("`{path}` must be an object")]
    NotAnObject { path: String },
    #[error("`{path}` must be an array")]
    NotAnArray { path: String },
    #[error("`{path}` must be a {expected}")]
    FieldType { path: String, expected: &'static str },
    #[error("`{path}` is malformed: {reason}")]
    Malformed { path: String, reason: String },
}

impl FormatError {
    /// Dotted path to the offending value, empty for parse errors.
    pub fn path(&self) -> &str {
        match self {
            Self::Json(_) => "",
            Self::NotAnObject { path }
            | Self::NotAnArray { path }
            | Self::FieldType { path, .. }
            | Self::Malformed { path, .. } => path,
        }
    }
}

/// The underlying layout source could not be read.
#[derive(Debug, Error)]
#[error("failed to read layout: {0}")]
pub struct ReadError(#[from] pub std::io::Error);
