use std::path::Path;

use thiserror::Error;

/// Fallos que pueden llegar hasta la interfaz.
///
/// `Validation` se resuelve re-pidiendo la entrada, `State` señala una
/// transición que la UI debería haber impedido y `DataLoad` bloquea la
/// acción en curso hasta que el usuario reintente.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("⚠ {0}")]
    Validation(String),

    #[error("{0}")]
    State(String),

    #[error("no se pudo leer {path}: {reason}")]
    DataLoad { path: String, reason: String },
}

impl QuizError {
    pub fn validation(msg: impl Into<String>) -> Self {
        QuizError::Validation(msg.into())
    }

    pub fn state(msg: impl Into<String>) -> Self {
        QuizError::State(msg.into())
    }

    pub fn data_load(path: &Path, reason: impl std::fmt::Display) -> Self {
        QuizError::DataLoad {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }
}
