use anyhow::{bail, Context};
use std::sync::Arc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use fxtext_core::conversion::ConversionReport;
use fxtext_core::{CurrencyCatalog, CurrencyLookup, ExtractorConfig, TextConverter};
use fxtext_rates::{OpenErApiClient, RateCache, RateService};

use crate::cli::Args;
use crate::config::Config;

pub fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// Reads the input named by `args`.
pub fn read_input(args: &Args) -> anyhow::Result<String> {
    match (&args.text, &args.file) {
        (Some(text), _) => Ok(text.clone()),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        (None, None) => bail!("Please enter text or a file you would like to convert."),
    }
}

/// Uppercases `code` and checks it against the currency catalog.
pub fn validate_code(code: &str, currencies: &dyn CurrencyLookup) -> anyhow::Result<String> {
    let code = code.trim().to_uppercase();
    if !currencies.codes().contains(&code) {
        bail!("{} is not a supported ISO 4217 currency code", code);
    }
    Ok(code)
}

/// Converts the input described by `args` with the latest exchange rates.
pub async fn run(args: &Args, config: &Config) -> anyhow::Result<ConversionReport> {
    let text = read_input(args)?;
    let catalog = CurrencyCatalog::embedded()?;
    let from = validate_code(&args.from_code(), &catalog)?;
    let to = validate_code(&args.to_code(), &catalog)?;

    let source = OpenErApiClient::with_url(config.rates_url.clone(), config.request_timeout);
    let service = RateService::new(Arc::new(source), RateCache::new(&config.rates_file));
    let snapshot = service
        .latest()
        .await
        .context("Unable to load exchange rates")?;
    let rates = snapshot.to_converter()?;

    let converter = TextConverter::new(Arc::new(catalog), Arc::new(rates)).with_config(
        ExtractorConfig {
            fold_case: args.ignore_case,
            ..ExtractorConfig::default()
        },
    );
    let report = converter.convert_text(&text, &from, &to)?;
    Ok(report)
}
