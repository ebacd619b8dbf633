//! spectral-edit - command-line frontend for the bin editor

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use spectral_editor::{io, BinEditor, EditorConfig, ExportConfig};

#[derive(Parser)]
#[command(name = "spectral-edit")]
#[command(about = "Suppress frequency bins of a sampled signal and export the reconstruction")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SeriesArgs {
    /// Sample file (rows of three whitespace-separated columns, value in the second)
    #[arg(short, long)]
    input: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write original minus reconstruction instead of the reconstruction
    #[arg(long)]
    residual: bool,

    /// Fixed number of decimals in the output
    #[arg(long)]
    precision: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Keep only the lowest frequency bins
    Truncate {
        #[command(flatten)]
        series: SeriesArgs,

        /// Number of bins to keep, counting from DC
        #[arg(short, long)]
        bins: usize,
    },

    /// Keep DC plus the strongest bins
    Strongest {
        #[command(flatten)]
        series: SeriesArgs,

        /// Number of non-DC bins to keep
        #[arg(short, long, default_value_t = 1)]
        count: usize,
    },

    /// Suppress the listed bins
    Suppress {
        #[command(flatten)]
        series: SeriesArgs,

        /// Comma-separated bin indices
        #[arg(short, long, value_delimiter = ',')]
        bins: Vec<usize>,
    },

    /// Print bins ordered by magnitude
    Rank {
        /// Sample file
        #[arg(short, long)]
        input: PathBuf,

        /// Only print this many bins
        #[arg(short, long)]
        top: Option<usize>,
    },
}

fn load_editor(input: &Path, config: &EditorConfig) -> anyhow::Result<BinEditor> {
    let samples = io::load_samples(input, &config.loader)
        .with_context(|| format!("loading samples from {}", input.display()))?;

    let mut editor = BinEditor::new();
    editor
        .load(&samples)
        .with_context(|| format!("transforming {}", input.display()))?;
    Ok(editor)
}

fn write_output(editor: &BinEditor, args: &SeriesArgs) -> anyhow::Result<()> {
    let series = if args.residual {
        editor.residual()?
    } else {
        editor
            .reconstruction()
            .context("no reconstruction available")?
            .to_vec()
    };

    let config = ExportConfig {
        precision: args.precision,
    };

    match &args.output {
        Some(path) => io::save_series(path, &series, &config)
            .with_context(|| format!("writing {}", path.display()))?,
        None => io::write_series(std::io::stdout().lock(), &series, &config)?,
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = EditorConfig::default();

    match cli.command {
        Commands::Truncate { series, bins } => {
            let mut editor = load_editor(&series.input, &config)?;
            editor.truncate_to(bins)?;
            write_output(&editor, &series)?;
        }
        Commands::Strongest { series, count } => {
            let mut editor = load_editor(&series.input, &config)?;
            editor.keep_strongest(count)?;
            write_output(&editor, &series)?;
        }
        Commands::Suppress { series, bins } => {
            let mut editor = load_editor(&series.input, &config)?;
            for index in bins {
                editor
                    .set_suppressed(index, true)
                    .with_context(|| format!("suppressing bin {index}"))?;
            }
            write_output(&editor, &series)?;
        }
        Commands::Rank { input, top } => {
            let editor = load_editor(&input, &config)?;
            let ranked = editor.ranked().context("no spectrum available")?;
            let limit = top.unwrap_or(ranked.len());

            let mut out = std::io::stdout().lock();
            for bin in ranked.iter().take(limit) {
                writeln!(out, "{}\t{}", bin.index, bin.magnitude)?;
            }
        }
    }

    Ok(())
}
