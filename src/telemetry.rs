//! Instalación del subscriber de logs para los binarios.
//!
//! Las librerías emiten por la fachada `log`; el subscriber de
//! `tracing-subscriber` los recoge a través de su puente `tracing-log`.

use tracing_subscriber::EnvFilter;

/// Instala el subscriber global con el filtro dado. Llamadas repetidas (tests,
/// binarios que ya inicializaron) se ignoran.
pub fn init_logging(filter: &str) {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(env_filter)
                                     .with_writer(std::io::stderr)
                                     .try_init();
}
