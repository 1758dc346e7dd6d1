//! Demo de punta a punta: recorre los cinco pasos con backends en memoria,
//! muestra el rechazo por asequibilidad y termina en la pantalla de éxito.

use log::{error, info};
use loanflow::loan_core::{HistoryNavigator, InMemoryLoanService, InMemorySlot, LoanForm, LoanService, LoanWizard,
                          WizardError, WizardStep};
use loanflow::loan_core::constants::STORAGE_KEY;
use loanflow::loan_domain::RecoveryAction;
use loanflow::{telemetry, AppConfig, AppError};
use serde_json::{json, Value};

fn step(n: u8) -> Result<WizardStep, AppError> {
    WizardStep::new(n).ok_or_else(|| AppError::Usage(format!("paso inexistente: {n}")))
}

fn payloads() -> [Value; 5] {
    [json!({"firstName": "Anna", "lastName": "Schmidt", "dateOfBirth": "1988-04-12"}),
     json!({"email": "anna.schmidt@example.com", "phone": "+491701234567"}),
     json!({"loanAmount": 24000, "upfrontPayment": 2000, "terms": 12}),
     json!({"monthlySalary": 3200, "hasAdditionalIncome": false, "hasMortgage": true, "mortgage": 900,
            "hasOtherCredits": false}),
     json!({"confirmed": true})]
}

async fn run() -> Result<(), AppError> {
    let slot = InMemorySlot::new(STORAGE_KEY);
    let mut wizard = LoanWizard::new(LoanForm::open(slot, InMemoryLoanService::new(), HistoryNavigator::new()));
    let data = payloads();

    for n in 1..=3 {
        let route = wizard.submit(step(n)?, &data[n as usize - 1]).await?;
        info!("step {n} accepted, now at {route}");
    }

    // 24000 / 12 = 2000 de cuota contra (3200 - 900) / 2 = 1150
    match wizard.submit(step(4)?, &data[3]).await {
        Err(WizardError::Affordability(e)) => {
            info!("step 4 blocked: {e}");
            let route = wizard.recover(RecoveryAction::ReduceLoanAmount)?;
            info!("recovering at {route}");
        }
        other => {
            other?;
        }
    }

    let reduced = json!({"loanAmount": 24000, "upfrontPayment": 2000, "terms": 24});
    wizard.submit(step(3)?, &reduced).await?;
    for n in 4..=5 {
        let route = wizard.submit(step(n)?, &data[n as usize - 1]).await?;
        info!("step {n} accepted, now at {route}");
    }

    let decision = wizard.enter("/loan-application/success");
    let form = wizard.form();
    let id = form.form_data().id.clone().unwrap_or_default();
    let record = form.service().get_by_id(&id).await?;
    println!("{} -> {}", decision.route(), serde_json::to_string_pretty(&record)?);
    Ok(())
}

#[tokio::main]
async fn main() {
    let config = AppConfig::from_env();
    telemetry::init_logging(&config.log_filter);
    if let Err(e) = run().await {
        error!("{e}");
        std::process::exit(e.exit_code());
    }
}
