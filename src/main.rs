use clap::Parser;
use stack_rank::core::report;
use stack_rank::core::ConfigProvider;
use stack_rank::utils::error::{ErrorSeverity, RankError};
use stack_rank::utils::{logger, validation::Validate};
use stack_rank::{CliConfig, LocalStorage, Outcome, Session, TomlConfig};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(cli.verbose, cli.log_json);

    tracing::info!("Starting stack-rank");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let result = match &cli.config {
        Some(path) => match load_toml_config(path, &cli) {
            Ok(config) => run(&config, &cli).await,
            Err(e) => Err(e),
        },
        None => run(&cli, &cli).await,
    };

    if let Err(e) = result {
        tracing::error!(
            "❌ stack-rank failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

/// Loads the TOML file and lets command-line flags override it.
fn load_toml_config(path: &str, cli: &CliConfig) -> Result<TomlConfig, RankError> {
    tracing::info!("📁 Loading configuration from: {}", path);
    let mut config = TomlConfig::from_file(path)?;

    config.seed.files.extend(cli.import.iter().cloned());
    if cli.no_samples {
        config.seed.include_samples = false;
    }
    if cli.format.is_some() {
        config.output.format = cli.report_format()?;
    }
    if let Some(output) = &cli.output {
        config.output.path = Some(output.clone());
    }

    Ok(config)
}

async fn run<C: ConfigProvider + Validate>(config: &C, cli: &CliConfig) -> Result<(), RankError> {
    cli.validate()?;
    config.validate()?;
    tracing::info!("✅ Configuration loaded and validated successfully");

    let storage = LocalStorage::new(".".to_string());
    let mut session = Session::from_config(storage, config).await?;

    for name in &cli.remove {
        session.remove(name);
    }

    if cli.interactive {
        return run_interactive(&mut session).await;
    }

    let format = config.output_format();
    match config.output_path() {
        Some(dir) => {
            let filename = report::report_filename(config.filename_pattern(), format);
            let path = std::path::Path::new(dir).join(filename);
            let written = session.export(&path.to_string_lossy(), format).await?;
            println!("📁 Ranked table saved to: {}", written);
        }
        None => {
            let rendered = report::render(&session.ranked(), format)?;
            println!("{}", rendered);
        }
    }

    Ok(())
}

async fn run_interactive(session: &mut Session<LocalStorage>) -> Result<(), RankError> {
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", report::render(&session.ranked(), session.format())?);
    println!("Type 'help' for commands.");

    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        match session.execute_line(&line).await {
            Ok(Outcome::Ranked { status, ranked }) => {
                println!("{}", status);
                println!("{}", report::render(&ranked, session.format())?);
            }
            Ok(Outcome::Message(text)) => println!("{}", text),
            Ok(Outcome::Quit) => break,
            Err(e) => {
                tracing::warn!("Command failed: {}", e);
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
            }
        }
    }

    tracing::info!("Session ended with {} startups", session.registry().len());
    Ok(())
}
