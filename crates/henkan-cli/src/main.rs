//! Henkan CLI - Unit conversion from the terminal
//!
//! Converts locally with the henkan library, or through a Henkan API
//! server when `--remote` (or `remote = true` in the config) is set.

mod api;
mod config;

use anyhow::{bail, Context, Result};
use clap::{builder::BoolishValueParser, Args, Parser, Subcommand};
use colored::Colorize;
use dialoguer::{Input, Password};

use api::HenkanClient;
use config::{Config, MAX_PRECISION};
use henkan::{
    Conversion, ConversionRequest, Domain, KeywordResponder, Responder, FAREWELL_RULE,
};

#[derive(Parser)]
#[command(name = "henkan")]
#[command(about = "Henkan CLI - Length, weight and temperature conversion", long_about = None)]
#[command(version)]
struct Cli {
    /// Use the Henkan API instead of converting locally
    #[arg(long, global = true)]
    remote: bool,

    /// Decimals shown on results (overrides config)
    #[arg(long, global = true)]
    precision: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

/// Value and unit pair shared by the convert commands
#[derive(Args, Debug)]
struct ConvertArgs {
    /// Value to convert
    #[arg(allow_negative_numbers = true)]
    value: f64,
    /// Source unit (e.g. "kilometers", "light years")
    from: String,
    /// Target unit
    to: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a length (meters, feet, light years, ...)
    Length(ConvertArgs),

    /// Convert a weight (kilograms, pounds, stone, ...)
    Weight(ConvertArgs),

    /// Convert a temperature (celsius, fahrenheit, kelvin)
    #[command(alias = "temp")]
    Temperature(ConvertArgs),

    /// Convert, detecting the domain from the units
    Convert(ConvertArgs),

    /// List supported units
    Units {
        /// length, weight or temperature (all when omitted)
        domain: Option<String>,
    },

    /// Ask the conversion assistant (interactive when no query given)
    Chat {
        /// Question for the assistant
        query: Option<String>,
    },

    /// Store an API key for the remote server
    Login {
        /// API key (will prompt if not provided)
        #[arg(short, long)]
        key: Option<String>,
    },

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set decimals shown on results
    SetPrecision {
        precision: usize,
    },
    /// Set the API base URL
    SetServer {
        url: String,
    },
    /// Use the API by default (on/off)
    SetRemote {
        #[arg(action = clap::ArgAction::Set, value_parser = BoolishValueParser::new())]
        enabled: bool,
    },
}

/// Where conversions and replies come from
enum Backend {
    Local(KeywordResponder),
    Remote(HenkanClient),
}

impl Backend {
    fn from_config(config: &Config, force_remote: bool) -> Self {
        if force_remote || config.remote {
            Backend::Remote(HenkanClient::new(&config.base_url, config.api_key.as_deref()))
        } else {
            Backend::Local(KeywordResponder::default())
        }
    }

    async fn convert(&self, domain: Option<Domain>, args: &ConvertArgs) -> Result<Conversion> {
        match self {
            Backend::Local(_) => {
                let request =
                    ConversionRequest::new(args.value, args.from.as_str(), args.to.as_str());
                let conversion = match domain {
                    Some(domain) => {
                        let result = henkan::convert(domain, args.value, &args.from, &args.to)?;
                        Conversion {
                            domain,
                            value: request.value,
                            from_unit: request.from_unit,
                            to_unit: request.to_unit,
                            result,
                        }
                    }
                    None => henkan::convert_auto(&request)?,
                };
                Ok(conversion)
            }
            Backend::Remote(client) => {
                client
                    .convert(domain, args.value, &args.from, &args.to)
                    .await
            }
        }
    }

    async fn units(
        &self,
        domain: Option<Domain>,
    ) -> Result<Vec<(Domain, Option<String>, Vec<String>)>> {
        match self {
            Backend::Local(_) => {
                let domains = match domain {
                    Some(d) => vec![d],
                    None => Domain::ALL.to_vec(),
                };
                Ok(domains
                    .into_iter()
                    .map(|d| {
                        (
                            d,
                            henkan::base_unit(d).map(str::to_string),
                            henkan::units(d).into_iter().map(str::to_string).collect(),
                        )
                    })
                    .collect())
            }
            Backend::Remote(client) => Ok(client
                .units(domain)
                .await?
                .into_iter()
                .map(|u| (u.domain, u.base_unit, u.units))
                .collect()),
        }
    }

    async fn chat(&self, query: &str) -> Result<String> {
        match self {
            Backend::Local(responder) => Ok(responder.respond(query)),
            Backend::Remote(client) => client.chat(query).await,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Length(args) => {
            cmd_convert(Some(Domain::Length), args, cli.remote, cli.precision).await
        }
        Commands::Weight(args) => {
            cmd_convert(Some(Domain::Weight), args, cli.remote, cli.precision).await
        }
        Commands::Temperature(args) => {
            cmd_convert(Some(Domain::Temperature), args, cli.remote, cli.precision).await
        }
        Commands::Convert(args) => cmd_convert(None, args, cli.remote, cli.precision).await,
        Commands::Units { domain } => cmd_units(domain, cli.remote).await,
        Commands::Chat { query } => cmd_chat(query, cli.remote).await,
        Commands::Login { key } => cmd_login(key).await,
        Commands::Config { action } => cmd_config(action.unwrap_or(ConfigAction::Show)),
    }
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_convert(
    domain: Option<Domain>,
    args: ConvertArgs,
    remote: bool,
    precision: Option<usize>,
) -> Result<()> {
    let config = Config::load()?;
    let precision = precision.unwrap_or(config.precision);
    if precision > MAX_PRECISION {
        bail!("Precision must be at most {}", MAX_PRECISION);
    }

    let backend = Backend::from_config(&config, remote);
    let conversion = backend.convert(domain, &args).await?;

    println!("{} {}", "🎉".green(), conversion.display(precision).bold());

    Ok(())
}

async fn cmd_units(domain: Option<String>, remote: bool) -> Result<()> {
    let config = Config::load()?;
    let domain: Option<Domain> = domain
        .as_deref()
        .map(str::parse)
        .transpose()
        .map_err(anyhow::Error::msg)?;

    let backend = Backend::from_config(&config, remote);

    for (domain, base_unit, units) in backend.units(domain).await? {
        match base_unit {
            Some(base) => println!(
                "{} {}",
                domain.to_string().bold(),
                format!("(base: {})", base).dimmed()
            ),
            None => println!("{}", domain.to_string().bold()),
        }
        for unit in units {
            println!("  {}", unit.cyan());
        }
    }

    Ok(())
}

async fn cmd_chat(query: Option<String>, remote: bool) -> Result<()> {
    let config = Config::load()?;
    let backend = Backend::from_config(&config, remote);

    if let Some(query) = query {
        println!("{} {}", "🤖".cyan(), backend.chat(&query).await?);
        return Ok(());
    }

    println!("{}", "Ask me anything about unit conversion! (say bye to leave)".dimmed());

    loop {
        let query: String = Input::new()
            .with_prompt("You")
            .allow_empty(true)
            .interact_text()
            .context("Failed to read input")?;

        if query.trim().is_empty() {
            continue;
        }

        println!("{} {}", "🤖".cyan(), backend.chat(&query).await?);

        if is_farewell(&query) {
            break;
        }
    }

    Ok(())
}

/// The interactive loop ends on the same trigger the assistant says goodbye to
fn is_farewell(query: &str) -> bool {
    FAREWELL_RULE.matches(&query.to_lowercase())
}

async fn cmd_login(key: Option<String>) -> Result<()> {
    let mut config = Config::load()?;

    let api_key = match key {
        Some(k) => k,
        None => Password::new()
            .with_prompt("API Key")
            .interact()
            .context("Failed to read API key")?,
    };

    // Test connection
    let client = HenkanClient::new(&config.base_url, Some(&api_key));
    print!("Testing connection... ");

    match client.health().await {
        Ok(true) => {
            println!("{}", "OK".green());
        }
        _ => {
            println!("{}", "Failed".red());
            bail!("Could not connect to Henkan API at {}", config.base_url);
        }
    }

    config.set_api_key(api_key);
    config.save()?;

    println!("{} API key saved to {:?}", "✓".green(), Config::config_path()?);

    if !config.remote {
        println!("\n{}", "Tip: Convert through the API by default with:".yellow());
        println!("  henkan config set-remote on");
    }

    Ok(())
}

fn cmd_config(action: ConfigAction) -> Result<()> {
    let mut config = Config::load()?;

    match action {
        ConfigAction::Show => {
            println!("{}", "Configuration:".bold());
            println!("  Path: {:?}", Config::config_path()?);
            println!("  Precision: {}", config.precision);
            println!("  Base URL: {}", config.base_url);
            println!(
                "  API Key: {}",
                if config.api_key.is_some() { "Set".green() } else { "Not set".red() }
            );
            println!(
                "  Mode: {}",
                if config.remote { "remote".cyan() } else { "local".cyan() }
            );
        }

        ConfigAction::SetPrecision { precision } => {
            if !config.set_precision(precision) {
                bail!("Precision must be at most {}", MAX_PRECISION);
            }
            config.save()?;
            println!("{} Precision set to {}", "✓".green(), precision);
        }

        ConfigAction::SetServer { url } => {
            config.set_base_url(url);
            config.save()?;
            println!("{} Base URL set to {}", "✓".green(), config.base_url);
        }

        ConfigAction::SetRemote { enabled } => {
            config.remote = enabled;
            config.save()?;
            println!(
                "{} Conversions now run {}",
                "✓".green(),
                if enabled { "through the API" } else { "locally" }
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_negative_value_and_spaced_unit() {
        let args = ["henkan", "length", "-2.5", "light years", "meters"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Length(args) => {
                assert_eq!(args.value, -2.5);
                assert_eq!(args.from, "light years");
                assert_eq!(args.to, "meters");
            }
            _ => panic!("Expected length command"),
        }
    }

    #[test]
    fn test_parse_temp_alias_and_globals() {
        let cli = Cli::try_parse_from([
            "henkan", "temp", "100", "celsius", "fahrenheit", "--remote", "--precision", "2",
        ])
        .unwrap();
        assert!(cli.remote);
        assert_eq!(cli.precision, Some(2));
        assert!(matches!(cli.command, Commands::Temperature(_)));
    }

    #[test]
    fn test_parse_set_remote() {
        let cli = Cli::try_parse_from(["henkan", "config", "set-remote", "off"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Config {
                action: Some(ConfigAction::SetRemote { enabled: false })
            }
        ));
    }

    #[tokio::test]
    async fn test_local_backend_convert() {
        let backend = Backend::Local(KeywordResponder::default());
        let args = ConvertArgs {
            value: 1.0,
            from: "kilograms".to_string(),
            to: "pounds".to_string(),
        };

        let conversion = backend.convert(Some(Domain::Weight), &args).await.unwrap();
        assert_eq!(conversion.display(4), "1 kilograms = 2.2046 pounds");

        let detected = backend.convert(None, &args).await.unwrap();
        assert_eq!(detected.domain, Domain::Weight);
    }

    #[tokio::test]
    async fn test_local_backend_rejects_unknown_unit() {
        let backend = Backend::Local(KeywordResponder::default());
        let args = ConvertArgs {
            value: 5.0,
            from: "meters".to_string(),
            to: "parsecs".to_string(),
        };
        let err = backend.convert(Some(Domain::Length), &args).await.unwrap_err();
        assert_eq!(err.to_string(), "Unknown unit: 'parsecs' for length");
    }

    #[tokio::test]
    async fn test_local_backend_units_and_chat() {
        let backend = Backend::Local(KeywordResponder::default());
        let units = backend.units(Some(Domain::Temperature)).await.unwrap();
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].1, None);
        assert_eq!(units[0].2, vec!["celsius", "fahrenheit", "kelvin"]);

        let reply = backend.chat("bye for now").await.unwrap();
        assert_eq!(reply, "Goodbye! Come back anytime for more conversions!");
    }

    #[test]
    fn test_farewell() {
        assert!(is_farewell("OK BYE"));
        assert!(!is_farewell("convert feet"));

        let reply = KeywordResponder::default().respond("Goodbye then");
        assert_eq!(reply, FAREWELL_RULE.reply);
        assert!(is_farewell("Goodbye then"));
    }
}
