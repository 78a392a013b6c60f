use std::env;
use std::io::{self, BufRead, Write};

use log::{debug, error};

use chefai::config::AppConfig;
use chefai::ingredients::{IngredientCatalog, IngredientSelection};
use chefai::pipelines::{chat, generate};
use chefai::request::{DietaryRestriction, GenerationRequest, SamplingMode};
use chefai::services::{GeminiBackend, HostedGenerator, YouTubeSearch};
use chefai::session::Session;

const USAGE: &str = "Usage: chefai [--diet NAME]... [--mode MODE] [--max-length N] [--temperature T] <ingredient>...";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let request = parse_args(env::args().skip(1))?;

    let config = AppConfig::load()?;
    // Catalog load failure is fatal: without it there is nothing to
    // suggest and the deployment is misconfigured.
    let catalog = IngredientCatalog::load(&config.catalog)?;
    for name in request.all_ingredients().split(", ") {
        if !catalog.contains(name) {
            debug!("{} is not in the catalog, using as free-form entry", name);
        }
    }

    let generator = HostedGenerator::new(&config.generation);
    let videos = YouTubeSearch::new(&config.videos)?;
    let assistant = GeminiBackend::new(&config.assistant)?;

    let mut session = Session::default();

    let outcome = match generate::process(
        &request,
        &generator,
        &videos,
        config.videos.max_results,
        &mut session,
    )
    .await
    {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("{}", e);
            return Err(e.into());
        }
    };

    println!("{}", outcome.recipe.to_markdown());
    if outcome.videos.is_empty() {
        println!("No videos found. Try different ingredients.");
    } else {
        println!("Cooking videos:");
        for video in &outcome.videos {
            println!("  {} ({})", video.title, video.url);
        }
    }

    // Follow-up questions, one per line, until EOF.
    println!("\nAsk about recipes, calories, storage tips, and more! (Ctrl-D to quit)");
    let stdin = io::stdin();
    print!("> ");
    io::stdout().flush()?;
    for line in stdin.lock().lines() {
        let question = line?;
        if !question.trim().is_empty() {
            let reply = chat::process(&question, &assistant, &mut session).await;
            println!("{}", reply);
        }
        print!("> ");
        io::stdout().flush()?;
    }

    Ok(())
}

fn parse_args(
    mut args: impl Iterator<Item = String>,
) -> Result<GenerationRequest, Box<dyn std::error::Error>> {
    let mut builder = GenerationRequest::builder();
    let mut selection = IngredientSelection::new();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--diet" => {
                let value = args.next().ok_or(USAGE)?;
                builder = builder.dietary(DietaryRestriction::parse(&value)?);
            }
            "--mode" => {
                let value = args.next().ok_or(USAGE)?;
                builder = builder.mode(SamplingMode::parse(&value)?);
            }
            "--max-length" => {
                let value = args.next().ok_or(USAGE)?;
                builder = builder.max_length(value.parse()?);
            }
            "--temperature" => {
                let value = args.next().ok_or(USAGE)?;
                builder = builder.temperature(value.parse()?);
            }
            "--help" | "-h" => return Err(USAGE.into()),
            other => selection.add(other),
        }
    }

    Ok(builder.ingredients(selection).build()?)
}
