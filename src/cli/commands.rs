// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the four subcommands and their flags. Flags that
// also configure the HTTP server fall back to NEWSCHECK_*
// environment variables (see infra/config.rs).
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};

use crate::domain::article::{SentenceOrder, DEFAULT_SUMMARY_SENTENCES};
use crate::infra::config::ServerConfig;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP API
    Serve(ServeArgs),

    /// Classify headlines, one-shot or interactively
    Check(CheckArgs),

    /// Summarize an article from a file or stdin
    Summarize(SummarizeArgs),

    /// Write a randomly initialised classifier checkpoint
    InitModel(InitModelArgs),
}

/// All arguments for the `serve` command.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, env = "NEWSCHECK_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "NEWSCHECK_PORT", default_value_t = 4000)]
    pub port: u16,

    /// Directory holding classifier_config.json, model.mpk and tokenizer.json
    #[arg(long, env = "NEWSCHECK_MODEL_DIR", default_value = "model")]
    pub model_dir: String,

    /// How summary sentences are ordered: score or document
    #[arg(long, env = "NEWSCHECK_SUMMARY_ORDER", default_value = "score")]
    pub summary_order: SentenceOrder,
}

/// The application layer never sees clap types.
impl From<ServeArgs> for ServerConfig {
    fn from(a: ServeArgs) -> Self {
        ServerConfig {
            host:          a.host,
            port:          a.port,
            model_dir:     a.model_dir,
            summary_order: a.summary_order,
        }
    }
}

/// All arguments for the `check` command.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Headline to classify. Without it, an interactive prompt starts.
    #[arg(long)]
    pub headline: Option<String>,

    #[arg(long, env = "NEWSCHECK_MODEL_DIR", default_value = "model")]
    pub model_dir: String,
}

/// All arguments for the `summarize` command.
#[derive(Args, Debug)]
pub struct SummarizeArgs {
    /// Article to read; stdin when omitted
    #[arg(long)]
    pub file: Option<String>,

    /// Number of sentences to keep
    #[arg(long, default_value_t = DEFAULT_SUMMARY_SENTENCES)]
    pub num_sentences: usize,

    #[arg(long, env = "NEWSCHECK_SUMMARY_ORDER", default_value = "score")]
    pub order: SentenceOrder,
}

/// All arguments for the `init-model` command.
/// Defaults give a small model that loads quickly on CPU.
#[derive(Args, Debug)]
pub struct InitModelArgs {
    #[arg(long, env = "NEWSCHECK_MODEL_DIR", default_value = "model")]
    pub model_dir: String,

    /// Must match the tokenizer.json placed next to the weights
    #[arg(long, default_value_t = 30522)]
    pub vocab_size: usize,

    #[arg(long, default_value_t = 512)]
    pub max_position_embeddings: usize,

    /// Hidden size must be divisible by num_heads
    #[arg(long, default_value_t = 128)]
    pub hidden_size: usize,

    #[arg(long, default_value_t = 2)]
    pub num_heads: usize,

    #[arg(long, default_value_t = 2)]
    pub num_layers: usize,

    #[arg(long, default_value_t = 512)]
    pub intermediate_size: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    #[test]
    fn test_serve_args_into_config() {
        let cli = Cli::try_parse_from([
            "newscheck", "serve", "--host", "0.0.0.0", "--port", "8080", "--summary-order", "document",
        ])
        .unwrap();
        let Commands::Serve(args) = cli.command else { panic!("expected serve") };

        let config: ServerConfig = args.into();
        assert_eq!(config.addr().unwrap().to_string(), "0.0.0.0:8080");
        assert_eq!(config.summary_order, SentenceOrder::Document);
    }

    #[test]
    fn test_summarize_defaults() {
        let cli = Cli::try_parse_from(["newscheck", "summarize"]).unwrap();
        let Commands::Summarize(args) = cli.command else { panic!("expected summarize") };
        assert_eq!(args.num_sentences, DEFAULT_SUMMARY_SENTENCES);
        assert!(args.file.is_none());
    }

    #[test]
    fn test_unknown_order_is_rejected() {
        assert!(Cli::try_parse_from(["newscheck", "summarize", "--order", "random"]).is_err());
    }
}
