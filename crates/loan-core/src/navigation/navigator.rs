use log::info;

use super::Route;

/// Capacidad de navegación que usa el flujo de envío.
pub trait Navigator {
    fn navigate(&mut self, route: Route);
    fn current(&self) -> Route;
}

/// Navegador con historial; empieza en el paso 1.
#[derive(Debug, Clone)]
pub struct HistoryNavigator {
    history: Vec<Route>,
}

impl Default for HistoryNavigator {
    fn default() -> Self { Self::starting_at(Route::first()) }
}

impl HistoryNavigator {
    pub fn new() -> Self { Self::default() }

    pub fn starting_at(route: Route) -> Self { Self { history: vec![route] } }

    pub fn history(&self) -> &[Route] { &self.history }
}

impl Navigator for HistoryNavigator {
    fn navigate(&mut self, route: Route) {
        info!("navigate -> {route}");
        self.history.push(route);
    }

    fn current(&self) -> Route { self.history.last().copied().unwrap_or_else(Route::first) }
}
