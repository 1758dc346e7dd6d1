use loan_core::{guard, FormStateStore, Navigator, WizardStep};
use loan_persistence::FileSlot;
use loanflow::{open_file_wizard, telemetry, AppConfig, AppError};
use log::{error, info};
use serde_json::Value;

const USAGE: &str = "Uso: loan-cli <show | validate --step <N> --data '<JSON>' | submit --step <N> --data '<JSON>' | \
                     guard --path <PATH> | reset>";

/// Opciones `--flag valor` después del subcomando.
#[derive(Debug, Default)]
struct Flags {
    step: Option<String>,
    data: Option<String>,
    path: Option<String>,
}

fn parse_flags(args: &[String]) -> Result<Flags, AppError> {
    let mut flags = Flags::default();
    let mut i = 0;
    while i < args.len() {
        let slot = match args[i].as_str() {
            "--step" => &mut flags.step,
            "--data" => &mut flags.data,
            "--path" => &mut flags.path,
            other => return Err(AppError::Usage(format!("opción desconocida: {other}"))),
        };
        i += 1;
        match args.get(i) {
            Some(value) => *slot = Some(value.clone()),
            None => return Err(AppError::Usage(format!("falta el valor de {}", args[i - 1]))),
        }
        i += 1;
    }
    Ok(flags)
}

fn required_step(flags: &Flags) -> Result<WizardStep, AppError> {
    let raw = flags.step.as_deref().ok_or_else(|| AppError::Usage("falta --step".into()))?;
    raw.parse::<u8>()
       .ok()
       .and_then(WizardStep::new)
       .ok_or_else(|| AppError::Usage(format!("paso inválido: {raw} (1..=5)")))
}

fn required_data(flags: &Flags) -> Result<Value, AppError> {
    let raw = flags.data.as_deref().ok_or_else(|| AppError::Usage("falta --data".into()))?;
    Ok(serde_json::from_str(raw)?)
}

async fn run(config: &AppConfig, args: &[String]) -> Result<(), AppError> {
    let Some(command) = args.first() else {
        return Err(AppError::Usage(USAGE.into()));
    };
    let flags = parse_flags(&args[1..])?;

    match command.as_str() {
        "show" => {
            let store = FormStateStore::open(FileSlot::from_config(&config.storage));
            println!("{}", serde_json::to_string_pretty(store.state())?);
            let decision = guard("/loan-application/success", store.state());
            println!("success screen: {}", if decision.is_allowed() { "allowed" } else { "redirect to step 1" });
        }
        "validate" => {
            let step = required_step(&flags)?;
            let data = required_data(&flags)?;
            let patch = open_file_wizard(config).validate(step, &data)?;
            println!("{}", serde_json::to_string_pretty(&patch)?);
        }
        "submit" => {
            let step = required_step(&flags)?;
            let data = required_data(&flags)?;
            let mut wizard = open_file_wizard(config);
            let route = wizard.submit(step, &data).await?;
            info!("draft stored in {}", wizard.form().store().slot().path().display());
            println!("{route}");
        }
        "guard" => {
            let path = flags.path.as_deref().ok_or_else(|| AppError::Usage("falta --path".into()))?;
            let mut wizard = open_file_wizard(config);
            let decision = wizard.enter(path);
            println!("{} {}",
                     if decision.is_allowed() { "allow" } else { "redirect" },
                     wizard.form().navigator().current());
        }
        "reset" => {
            FormStateStore::open(FileSlot::from_config(&config.storage)).reset()?;
            println!("draft cleared");
        }
        other => return Err(AppError::Usage(format!("comando desconocido: {other}\n{USAGE}"))),
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = AppConfig::from_env();
    telemetry::init_logging(&config.log_filter);
    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(e) = run(&config, &args).await {
        match &e {
            AppError::Usage(_) => eprintln!("{e}"),
            _ => error!("{e}"),
        }
        std::process::exit(e.exit_code());
    }
}
