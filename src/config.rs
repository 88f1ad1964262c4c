//! Configuración central de la aplicación.
//! Carga variables de entorno (.env) una sola vez y construye `AppConfig`.
//!
//! Variables reconocidas:
//! - `AGENTFLOW_SEED_SAMPLES`: precargar workflows de ejemplo (default `true`).
//! - `AGENTFLOW_FIRST_ID`: primer id numérico de workflow (default `1`).
//! - `AGENTFLOW_STEP_IDS`: `positional` | `monotonic` (default `positional`).
use std::env;

use agent_core::{StepIdScheme, StoreConfig};
use dotenvy::dotenv;
use once_cell::sync::Lazy;

use crate::errors::CoreError;

pub const ENV_SEED_SAMPLES: &str = "AGENTFLOW_SEED_SAMPLES";
pub const ENV_FIRST_ID: &str = "AGENTFLOW_FIRST_ID";
pub const ENV_STEP_IDS: &str = "AGENTFLOW_STEP_IDS";

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

/// Configuración global de la aplicación.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub store: StoreConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, CoreError> {
        Lazy::force(&DOTENV_LOADED);
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Igual que `from_env` pero con una fuente de variables arbitraria.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
        where F: Fn(&str) -> Option<String>
    {
        let defaults = StoreConfig::default();
        let seed_samples = match lookup(ENV_SEED_SAMPLES) {
            Some(v) => parse_bool(ENV_SEED_SAMPLES, &v)?,
            None => defaults.seed_samples,
        };
        let first_id = match lookup(ENV_FIRST_ID) {
            Some(v) => v.trim()
                        .parse::<u64>()
                        .map_err(|e| CoreError::Config(format!("{ENV_FIRST_ID}='{v}': {e}")))?,
            None => defaults.first_id,
        };
        let step_ids = match lookup(ENV_STEP_IDS) {
            Some(v) => v.parse::<StepIdScheme>()
                        .map_err(|e| CoreError::Config(format!("{ENV_STEP_IDS}: {e}")))?,
            None => defaults.step_ids,
        };
        Ok(Self { store: StoreConfig { seed_samples,
                                       first_id,
                                       step_ids } })
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, CoreError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(CoreError::Config(format!("{key}='{other}' no es booleano"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert!(cfg.store.seed_samples);
    }

    #[test]
    fn reads_all_variables() {
        let cfg = AppConfig::from_lookup(lookup(&[(ENV_SEED_SAMPLES, "off"), (ENV_FIRST_ID, "10"), (ENV_STEP_IDS, "monotonic")])).unwrap();
        assert!(!cfg.store.seed_samples);
        assert_eq!(cfg.store.first_id, 10);
        assert_eq!(cfg.store.step_ids, StepIdScheme::Monotonic);
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(matches!(AppConfig::from_lookup(lookup(&[(ENV_FIRST_ID, "diez")])), Err(CoreError::Config(_))));
        assert!(matches!(AppConfig::from_lookup(lookup(&[(ENV_SEED_SAMPLES, "maybe")])), Err(CoreError::Config(_))));
        assert!(matches!(AppConfig::from_lookup(lookup(&[(ENV_STEP_IDS, "global")])), Err(CoreError::Config(_))));
    }
}
