//! Constantes del almacén.

/// Primer id numérico de workflow cuando no hay datos de ejemplo.
pub const DEFAULT_FIRST_ID: u64 = 1;

/// Separador entre el id del workflow y la posición en los ids de step
/// (`"{workflow_id}-{n}"`).
pub const STEP_ID_SEPARATOR: char = '-';
