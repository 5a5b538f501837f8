//! Command line interface

use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use focusfox_api::{ApiError, requests::PlanRequest};

use crate::{ServerConfig, ServerResult, handlers::plan::respond};

#[derive(Parser, Debug)]
#[command(author, version, about = "Tiny mood-aware task plans", long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Plan a request read from a JSON file (`-` for stdin) and print the response
    Plan {
        #[arg(default_value = "-")]
        input: String,
    },
    /// Print the JSON schema of the planning request body
    Schema,
}

impl Cli {
    pub async fn load_config(&self) -> ServerResult<ServerConfig> {
        let config = match &self.config {
            Some(path) => ServerConfig::load(path).await?,
            None => ServerConfig::load_default().await?,
        };
        Ok(config)
    }
}

/// Read a plan request, run the planner and render the response as JSON.
pub async fn plan_from_input(input: &str) -> ServerResult<String> {
    let raw = if input == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        tokio::fs::read_to_string(input).await?
    };

    plan_from_json(&raw)
}

pub fn plan_from_json(raw: &str) -> ServerResult<String> {
    let request: PlanRequest = serde_json::from_str(raw).map_err(ApiError::from)?;
    let response = respond(request)?;
    Ok(serde_json::to_string_pretty(&response)?)
}

pub fn request_schema() -> ServerResult<String> {
    let schema = schemars::schema_for!(PlanRequest);
    Ok(serde_json::to_string_pretty(&schema)?)
}
