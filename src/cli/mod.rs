// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction, parsed with clap.
// All business logic is delegated to Layer 2 (application).
//
// Commands:
//   1. `serve`      — run the HTTP API
//   2. `check`      — classify a headline (or start the tester)
//   3. `summarize`  — summarize a file or stdin
//   4. `init-model` — write a random checkpoint for smoke tests
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;
pub mod interactive;

use std::{
    fs,
    io::{self, Read},
    sync::Arc,
};

use anyhow::{Context, Result};
use clap::Parser;
use commands::{CheckArgs, Commands, InitModelArgs, ServeArgs, SummarizeArgs};

use crate::api::{self, AppState};
use crate::application::{
    classify_use_case::FakeNewsPredictor,
    summarize_use_case::SummarizeUseCase,
};
use crate::domain::article::Article;
use crate::infra::{
    checkpoint::{CheckpointManager, ModelManifest},
    config::ServerConfig,
};
use crate::ml::inferencer::InferBackend;

#[derive(Parser, Debug)]
#[command(
    name = "newscheck",
    version,
    about = "Summarize news articles and flag likely fake headlines."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Dispatch to the handler for the chosen subcommand.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve(args)     => run_serve(args),
            Commands::Check(args)     => run_check(args),
            Commands::Summarize(args) => run_summarize(args),
            Commands::InitModel(args) => run_init_model(args),
        }
    }
}

fn run_serve(args: ServeArgs) -> Result<()> {
    let config: ServerConfig = args.into();
    tracing::info!("Server config: {:?}", config);

    // Load the model before binding so a broken model dir fails fast
    let classifier = FakeNewsPredictor::load(&config.model_dir)?;
    let summarizer = SummarizeUseCase::new(config.summary_order);
    tracing::info!("Summary sentences joined in {:?} order", summarizer.order());

    let state = AppState {
        classifier: Arc::new(classifier),
        summarizer: Arc::new(summarizer),
    };

    let runtime = tokio::runtime::Runtime::new()
        .context("Cannot start the async runtime")?;
    runtime.block_on(api::serve(&config, state))
}

fn run_check(args: CheckArgs) -> Result<()> {
    let predictor = FakeNewsPredictor::load(&args.model_dir)?;

    match args.headline {
        Some(headline) => {
            let prediction = predictor.predict(&headline)?;
            interactive::write_results(&mut io::stdout().lock(), &prediction)
        }
        None => interactive::run_interactive(&predictor, io::stdin().lock(), io::stdout().lock()),
    }
}

fn run_summarize(args: SummarizeArgs) -> Result<()> {
    let text = match &args.file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Cannot read article from '{path}'"))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Cannot read article from stdin")?;
            buf
        }
    };

    let article  = Article::new(text);
    let use_case = SummarizeUseCase::new(args.order);
    let summary  = use_case.summarize(&article, args.num_sentences)?;
    tracing::debug!("Kept {} of the article's sentences", summary.len());

    println!("Original text:");
    println!("{}", article.text);
    println!("\nSummary:");
    println!("{}", summary.text());
    Ok(())
}

fn run_init_model(args: InitModelArgs) -> Result<()> {
    let manifest = ModelManifest {
        vocab_size:              args.vocab_size,
        max_position_embeddings: args.max_position_embeddings,
        hidden_size:             args.hidden_size,
        num_heads:               args.num_heads,
        num_layers:              args.num_layers,
        intermediate_size:       args.intermediate_size,
        ..ModelManifest::default()
    };
    anyhow::ensure!(
        manifest.num_heads > 0 && manifest.hidden_size % manifest.num_heads == 0,
        "hidden_size ({}) must be divisible by num_heads ({})",
        manifest.hidden_size, manifest.num_heads
    );

    let device = Default::default();
    let model  = manifest.model_config().init::<InferBackend>(&device);

    let ckpt = CheckpointManager::new(&args.model_dir);
    ckpt.save_model(&model)?;
    ckpt.save_manifest(&manifest)?;

    println!("Random checkpoint written to '{}'.", ckpt.dir().display());
    println!("Add a tokenizer.json with a matching vocabulary before serving.");
    Ok(())
}
