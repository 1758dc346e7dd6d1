//! Constantes compartidas del wizard.

/// Nombre del slot durable que guarda el draft serializado.
pub const STORAGE_KEY: &str = "loan-application-data";

/// Prefijo de todas las rutas del wizard.
pub const ROUTE_PREFIX: &str = "/loan-application";

/// Mensaje cuando una falla remota no trae descripción.
pub const GENERIC_SUBMISSION_ERROR: &str = "An error occurred";
