use std::collections::HashMap;
use std::process::ExitCode;

use api_shared::ErrorRes;
use clap::{Args, Parser, Subcommand};
use dme_core::{
    build, resolve, CatalogConfig, LookupOutcome, LookupService, GRAPHDB_TIMEOUT_ENV,
    GRAPHDB_URL_ENV,
};

#[derive(Parser)]
#[command(name = "dme")]
#[command(about = "DME product catalog CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the SPARQL query a lookup would send, without contacting the store
    Query(Identifiers),
    /// Run a lookup against GRAPHDB_URL and print the records as JSON
    Lookup(Identifiers),
}

/// If more than one is given, productId wins over hcpcs, which wins over dx.
#[derive(Args)]
struct Identifiers {
    /// Catalog product identifier
    #[arg(long)]
    product_id: Option<String>,
    /// HCPCS code
    #[arg(long)]
    hcpcs: Option<String>,
    /// Diagnosis code
    #[arg(long)]
    dx: Option<String>,
}

impl Identifiers {
    fn into_params(self) -> HashMap<String, String> {
        [
            ("productId", self.product_id),
            ("hcpcs", self.hcpcs),
            ("dx", self.dx),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key.to_string(), v)))
        .collect()
    }
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Query(ids) => match resolve(&ids.into_params()) {
            Ok(request) => {
                print!("{}", build(&request));
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => {
                eprintln!("{}", serde_json::to_string(&ErrorRes::new(e.to_string()))?);
                Ok(ExitCode::from(2))
            }
        },
        Commands::Lookup(ids) => {
            dotenvy::dotenv().ok();
            let cfg = CatalogConfig::from_env_values(
                std::env::var(GRAPHDB_URL_ENV).ok(),
                std::env::var(GRAPHDB_TIMEOUT_ENV).ok(),
            )?;
            let service = LookupService::from_config(&cfg);

            match service.lookup(&ids.into_params()) {
                LookupOutcome::Success(rows) => {
                    println!("{}", serde_json::to_string_pretty(&rows)?);
                    Ok(ExitCode::SUCCESS)
                }
                LookupOutcome::Failure { message, .. } => {
                    eprintln!("{}", serde_json::to_string(&ErrorRes::new(message))?);
                    Ok(ExitCode::FAILURE)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_identifiers_flags_map_to_request_params() {
        let cli = Cli::parse_from(["dme", "query", "--product-id", "1234", "--dx", "M17.11"]);
        let Commands::Query(ids) = cli.command else {
            panic!("expected query subcommand");
        };
        let params = ids.into_params();
        assert_eq!(params.get("productId").map(String::as_str), Some("1234"));
        assert_eq!(params.get("dx").map(String::as_str), Some("M17.11"));
        assert!(!params.contains_key("hcpcs"));
    }
}
