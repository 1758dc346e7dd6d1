use std::fmt;

use loan_domain::SectionKind;

use crate::constants::ROUTE_PREFIX;

/// Paso del wizard, siempre en `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WizardStep(u8);

impl WizardStep {
    pub const FIRST: WizardStep = WizardStep(1);
    pub const LAST: WizardStep = WizardStep(5);

    pub fn new(number: u8) -> Option<Self> {
        (Self::FIRST.0..=Self::LAST.0).contains(&number).then_some(WizardStep(number))
    }

    pub fn number(self) -> u8 { self.0 }

    pub fn section(self) -> SectionKind {
        match self.0 {
            1 => SectionKind::PersonalInformation,
            2 => SectionKind::ContactDetails,
            3 => SectionKind::LoanRequest,
            4 => SectionKind::FinancialInformation,
            _ => SectionKind::Finalization,
        }
    }

    /// Ruta siguiente: el paso `n + 1`, o la pantalla de éxito tras el último.
    pub fn next_route(self) -> Route {
        if self == Self::LAST {
            Route::Success
        } else {
            Route::Step(WizardStep(self.0 + 1))
        }
    }
}

impl From<SectionKind> for WizardStep {
    fn from(kind: SectionKind) -> Self { WizardStep(kind.step_number()) }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "step{}", self.0) }
}

/// Ubicación dentro del wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Step(WizardStep),
    Success,
}

impl Route {
    pub fn first() -> Self { Route::Step(WizardStep::FIRST) }

    /// Las seis rutas válidas, en orden.
    pub fn all() -> Vec<Route> {
        (1..=5).filter_map(WizardStep::new)
               .map(Route::Step)
               .chain(std::iter::once(Route::Success))
               .collect()
    }

    pub fn path(&self) -> String {
        match self {
            Route::Step(step) => format!("{ROUTE_PREFIX}/{step}"),
            Route::Success => format!("{ROUTE_PREFIX}/success"),
        }
    }

    /// Interpreta un path exacto; cualquier otra cosa es `None`.
    pub fn parse(path: &str) -> Option<Route> {
        let rest = path.strip_prefix(ROUTE_PREFIX)?.strip_prefix('/')?;
        if rest == "success" {
            return Some(Route::Success);
        }
        let digits = rest.strip_prefix("step")?;
        if digits.len() != 1 {
            return None;
        }
        digits.parse::<u8>().ok().and_then(WizardStep::new).map(Route::Step)
    }

    pub fn step(&self) -> Option<WizardStep> {
        match self {
            Route::Step(step) => Some(*step),
            Route::Success => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.path()) }
}
