//! FocusFox API Server
//!
//! Serves tiny mood-aware task plans over HTTP, or plans a single request
//! from the command line.

use clap::Parser;
use focusfox_server::{
    cli::{self, Cli, Command},
    start_server,
};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "focusfox_server=info,focusfox_api=info,focusfox_core=info,tower_http=info";
const DEBUG_FILTER: &str =
    "focusfox_server=debug,focusfox_api=debug,focusfox_core=debug,tower_http=debug";

#[tokio::main]
async fn main() -> miette::Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .rgb_colors(miette::RgbColors::Preferred)
                .with_cause_chain()
                .with_syntax_highlighting(miette::highlighters::SyntectHighlighter::default())
                .color(true)
                .context_lines(5)
                .tab_width(2)
                .break_words(true)
                .build(),
        )
    }))?;
    miette::set_panic_hook();

    let args = Cli::parse();

    // RUST_LOG wins over --debug
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if args.debug { DEBUG_FILTER } else { DEFAULT_FILTER })
    });

    // Logs go to stderr so `plan` output stays pipeable
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_timer(tracing_subscriber::fmt::time::LocalTime::rfc_3339())
        .init();

    match args.command.clone().unwrap_or(Command::Serve) {
        Command::Serve => {
            let config = args.load_config().await?;
            start_server(config).await?;
        }
        Command::Plan { input } => {
            println!("{}", cli::plan_from_input(&input).await?);
        }
        Command::Schema => {
            println!("{}", cli::request_schema()?);
        }
    }

    Ok(())
}
