/// Estado del último envío de un paso.
///
/// Las transiciones válidas son:
/// - `Idle` -> `Submitting`
/// - `Submitting` -> `Succeeded`
/// - `Submitting` -> `Failed`
/// - cualquiera -> `Submitting` al reintentar, `Idle` al hacer reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    /// Nada enviado desde el último reset.
    #[default]
    Idle,
    /// Hay un envío en curso.
    Submitting,
    /// El último envío terminó bien y se navegó al paso siguiente.
    Succeeded,
    /// El último envío falló; el mensaje queda en `LoanForm::error`.
    Failed,
}
