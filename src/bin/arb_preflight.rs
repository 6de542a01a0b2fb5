use anyhow::{Context, Result};
use spread_arb_bot::bin_common::{parse_args, CliOptions, PrintFormat};
use spread_arb_bot::logging::init_tracing;
use spread_arb_bot::strategy_params::{self, Parameters};
use tracing::{error, info};

fn main() {
    if let Err(e) = run() {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // .env may set ARB_CONFIG_PATH / RUST_LOG; a missing file is fine
    dotenv::dotenv().ok();
    init_tracing();

    let options = CliOptions::parse(&parse_args()).map_err(anyhow::Error::msg)?;
    let config_path = options.config_path();

    print_banner("Strategy parameters pre-flight", &config_path.display().to_string());

    let params = strategy_params::load(&config_path)
        .with_context(|| format!("Refusing to start with {}", config_path.display()))?;
    params.log_summary();

    if let Some(format) = options.print {
        println!("{}", render(&params, format)?);
    }

    info!("Parameters OK");
    Ok(())
}

fn render(params: &Parameters, format: PrintFormat) -> Result<String> {
    Ok(match format {
        PrintFormat::Yaml => params.to_yaml()?,
        PrintFormat::Json => params.to_json()?,
    })
}

fn print_banner(name: &str, config_path: &str) {
    info!("");
    info!("========================================");
    info!("{}", name);
    info!("Config: {}", config_path);
    info!("========================================");
    info!("");
}
