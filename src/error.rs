//! Error types for mis-plantas
//!
//! Library code returns [`PlantError`]; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::form::ValidationErrors;

/// Result type alias for plant operations
pub type PlantResult<T> = Result<T, PlantError>;

#[derive(Error, Debug)]
pub enum PlantError {
    /// IO error
    #[error("error de E/S: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("error de serialización: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Date not in `YYYY-MM-DD` form
    #[error("fecha inválida '{value}' (use AAAA-MM-DD)")]
    InvalidDate { value: String },

    #[error("tipo de planta desconocido: {value}")]
    UnknownPlantType { value: String },

    #[error("nivel de dificultad desconocido: {value}")]
    UnknownDifficulty { value: String },

    /// Form submission blocked by field errors
    #[error("datos de planta inválidos:\n{0}")]
    Validation(ValidationErrors),

    /// Could not acquire the store lock
    #[error("no se pudo bloquear {path}: {message}")]
    Lock { path: PathBuf, message: String },
}
