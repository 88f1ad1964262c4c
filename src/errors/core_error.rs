use agent_core::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Error interno: {0}")]
    Internal(String),
    #[error("Error en IO: {0}")]
    Io(#[from] std::io::Error),
    #[error("Error de configuración: {0}")]
    Config(String),
    #[error("Uso incorrecto: {0}")]
    Usage(String),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("Error de serialización: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CoreError {
    /// Código de salida del binario para este error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CoreError::Usage(_) => 2,
            CoreError::Store(e) if e.is_not_found() => 4,
            _ => 5,
        }
    }
}
