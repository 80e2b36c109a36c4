use anyhow::Context;
use clap::{Parser, Subcommand};
use ibonq_scraper::InquiryClient;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "ibonq-cli")]
#[command(about = "Query the ibon retail inquiry page and print JSON")]
struct Cli {
    /// Override the inquiry endpoint URL from `IBONQ_UPSTREAM_URL`.
    #[arg(long, global = true)]
    upstream_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List every city in the city selector.
    Cities,
    /// List the stores for one city.
    Stores {
        #[arg(long)]
        city: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let mut config = ibonq_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(config.env.log_ansi())
        .init();

    if let Some(url) = cli.upstream_url {
        config.upstream.url = url;
    }

    let client =
        InquiryClient::from_app_config(&config).context("failed to build inquiry client")?;
    tracing::debug!(upstream = %client.endpoint().url(), "inquiry client ready");

    let json = match cli.command {
        Commands::Cities => {
            let cities = client
                .fetch_cities()
                .await
                .context("failed to fetch cities")?;
            serde_json::to_string_pretty(&cities)?
        }
        Commands::Stores { city } => {
            let city = city.trim();
            anyhow::ensure!(!city.is_empty(), "city is required");
            let stores = client
                .fetch_stores(city)
                .await
                .with_context(|| format!("failed to fetch stores for city: {city}"))?;
            serde_json::to_string_pretty(&stores)?
        }
    };

    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_stores_with_city() {
        let cli = Cli::try_parse_from(["ibonq-cli", "stores", "--city", "新北市"]).expect("parse");
        assert!(matches!(cli.command, Commands::Stores { ref city } if city == "新北市"));
    }

    #[test]
    fn upstream_url_comes_only_from_the_flag() {
        use clap::CommandFactory;
        let command = Cli::command();
        let arg = command
            .get_arguments()
            .find(|a| a.get_id() == "upstream_url")
            .expect("upstream_url arg");
        assert!(arg.get_env().is_none());

        let cli = Cli::try_parse_from([
            "ibonq-cli",
            "cities",
            "--upstream-url",
            "http://127.0.0.1:8080/inquiry.aspx",
        ])
        .expect("parse");
        assert_eq!(
            cli.upstream_url.as_deref(),
            Some("http://127.0.0.1:8080/inquiry.aspx")
        );
    }

    #[test]
    fn stores_requires_city() {
        assert!(Cli::try_parse_from(["ibonq-cli", "stores"]).is_err());
    }
}
