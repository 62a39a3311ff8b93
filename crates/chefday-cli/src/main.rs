//! chefday CLI - print the birth date of the chef who wrote a recipe.

use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use chefday_client::{BirthdayPipeline, BirthdayView, ClientConfig, DEFAULT_BASE_URL};
use chefday_core::{RecipeId, ViewState};

/// Look up the birth date of the chef who wrote a recipe.
#[derive(Parser, Debug)]
#[command(name = "chefday", about = "Print the birth date of a recipe's chef", long_about = None)]
struct Args {
    /// Recipe ID
    #[arg(default_value_t = 1)]
    recipe_id: u64,

    /// Upstream base URL
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Print the settled state as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Logs go to stderr so stdout only carries the result
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("chefday=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::new(&args.base_url);
    let recipe_id = RecipeId::new(args.recipe_id);
    info!(recipe_id = %recipe_id, base_url = %config.base_url, "Looking up chef birthday");

    let pipeline = BirthdayPipeline::from_config(&config);
    let mut view = BirthdayView::new();
    let state = view.load(&pipeline, recipe_id).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(state)?);
    } else {
        println!("{}", state);
    }

    Ok(match state {
        ViewState::Loaded { .. } => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    })
}
