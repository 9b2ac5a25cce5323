use clap::Parser;
use holiday_bot::config::toml_config::TomlConfig;
use holiday_bot::core::ConfigProvider;
use holiday_bot::utils::{logger, validation::Validate};
use holiday_bot::{build_service, CliConfig};
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    match cli.config.as_deref() {
        Some(path) => {
            // 載入 TOML 配置
            let config = match TomlConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("💡 Make sure the file exists and is valid TOML format");
                    std::process::exit(1);
                }
            };
            init_logging(cli.verbose || config.verbose(), cli.json_logs || config.json_logs());
            tracing::info!("📁 Loaded configuration from: {}", path);
            run(&config, cli.text.as_deref()).await
        }
        None => {
            init_logging(cli.verbose, cli.json_logs);
            run(&cli, cli.text.as_deref()).await
        }
    }
}

fn init_logging(verbose: bool, json: bool) {
    if json {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }
}

async fn run<C: ConfigProvider + Validate>(config: &C, text: Option<&str>) -> anyhow::Result<()> {
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_message());
        std::process::exit(1);
    }

    let service = build_service(config)?;
    tracing::info!(
        "🚀 holiday-bot ready (API: {}, max attempts: {})",
        config.api_base_url(),
        config.max_attempts()
    );

    if let Some(text) = text {
        println!("{}", service.reply(text).await);
        return Ok(());
    }

    // 一行一則訊息，代替 gateway 送進來的文字
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        println!("{}", service.reply(&line).await);
    }

    tracing::info!("👋 stdin closed, exiting");
    Ok(())
}
