use std::time::Duration;

use admin_api::{AdminApi, Config, HttpTransport, COMMON_ADMIN_API};
use admin_cli::{build_body, list_endpoints, parse_param, render, resolve};
use clap::{Parser, Subcommand};
use failure::Error;

#[derive(Parser)]
#[command(name = "admin")]
#[command(about = "Command line client for the admin API")]
struct Cli {
    /// Backend origin, optionally with a gateway prefix
    #[arg(long, env = "ADMIN_API_URL", default_value = "http://localhost:8080")]
    url: String,

    /// Bearer token sent with every request
    #[arg(long, env = "ADMIN_API_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Root path of the admin API
    #[arg(long, env = "ADMIN_API_BASE_PATH", default_value = COMMON_ADMIN_API)]
    base_path: String,

    /// Request timeout in seconds, 0 disables it
    #[arg(long, env = "ADMIN_API_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered operations
    List,
    /// Run an operation and print the response
    Call {
        /// Logical operation name, e.g. department.page
        operation: String,

        #[arg(long)]
        page_no: Option<u32>,

        #[arg(long)]
        page_size: Option<u32>,

        /// Extra body field, repeatable
        #[arg(long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List => {
            for line in list_endpoints(&cli.base_path) {
                println!("{}", line);
            }
        }
        Commands::Call {
            operation,
            page_no,
            page_size,
            params,
        } => {
            let endpoint = resolve(&operation)?;
            let params = params
                .iter()
                .map(String::as_str)
                .map(parse_param)
                .collect::<Result<Vec<_>, _>>()?;
            let body = build_body(page_no, page_size, params)?;

            let mut cfg = match &cli.token {
                Some(token) => Config::new_authenticated(&cli.url, token)?,
                None => Config::parse(&cli.url)?,
            };
            if cli.timeout_secs > 0 {
                cfg = cfg.with_timeout(Duration::from_secs(cli.timeout_secs));
            }

            let api = AdminApi::with_base_path(HttpTransport::new(cfg)?, cli.base_path.as_str());
            log::info!("calling {} at {}", endpoint, api.path_for(endpoint));

            let response = api.call(endpoint, &body).await?;
            println!("{}", render(&response.body));
        }
    }

    Ok(())
}
