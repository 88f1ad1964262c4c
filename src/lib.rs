//! AgentFlow Rust Library
//!
//! Este crate actúa como la capa de aplicación sobre `agent-core`:
//! - Expone `errors` para manejar errores de aplicación.
//! - Expone `config` para cargar la configuración del almacén desde el entorno.
//! - Expone `app` (raíz de composición) y `cli` (comandos del binario).

pub mod app;
pub mod cli;
pub mod config;
pub mod errors;

pub use app::{build_shared_store, build_store};
pub use config::AppConfig;
pub use errors::CoreError;
