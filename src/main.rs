use clap::Parser;
use vite_kickstart::config::toml_config::TomlConfig;
use vite_kickstart::domain::ports::Prompter;
use vite_kickstart::utils::error::{ErrorSeverity, KickstartError};
use vite_kickstart::utils::{logger, validation::Validate};
use vite_kickstart::{
    adapters::DialoguerPrompter, CliConfig, LocalStorage, NpmToolchain, ScaffoldEngine,
    ScaffoldRequest, Settings,
};

fn report_failure(e: &KickstartError) -> ! {
    tracing::error!(
        "❌ Scaffolding failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,   // 外部工具失敗
        ErrorSeverity::Critical => 3, // 內部不一致
    };
    std::process::exit(exit_code);
}

fn load_settings(cli: &CliConfig) -> Result<Settings, KickstartError> {
    let file = match cli.config_path() {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            let file = TomlConfig::from_file(&path)?;
            file.validate()?;
            Some(file)
        }
        None => None,
    };

    let settings = Settings::resolve(cli, file.as_ref());
    settings.validate()?;
    Ok(settings)
}

/// 名稱或等級未由參數提供時才進入互動模式
fn collect_request(cli: &CliConfig, settings: &Settings) -> Result<ScaffoldRequest, KickstartError> {
    let prompter = DialoguerPrompter::new(settings.default_tier);

    let raw_name = match &cli.name {
        Some(name) => name.clone(),
        None => prompter.project_name()?,
    };
    let tier = match cli.tier {
        Some(tier) => tier,
        None => prompter.tier()?,
    };

    Ok(ScaffoldRequest { raw_name, tier })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting vite-kickstart");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let settings = load_settings(&cli).unwrap_or_else(|e| report_failure(&e));
    let request = collect_request(&cli, &settings).unwrap_or_else(|e| report_failure(&e));

    let storage = LocalStorage::new(settings.output_dir.clone());
    let toolchain = NpmToolchain::from_config(&settings);
    let engine = ScaffoldEngine::new(storage, toolchain, settings);

    if cli.dry_run {
        let scaffold = engine.dry_run(&request).unwrap_or_else(|e| report_failure(&e));
        println!("{}", scaffold.to_json()?);
        return Ok(());
    }

    match engine.run(&request).await {
        Ok(outcome) => {
            tracing::info!("✅ Project \"{}\" is ready!", outcome.slug);
            println!("✅ Project created at {}", outcome.project_dir.display());
            println!("📄 {} files written", outcome.report.written.len());
            if let Some(url) = outcome.dev_url {
                println!("🌐 Dev server: {}", url);
            }
            println!("Happy coding!");
        }
        Err(e) => report_failure(&e),
    }

    Ok(())
}
