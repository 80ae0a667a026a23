//! Linha de comando para carregar, corrigir e exportar corpora CoNLL

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use conll_core::{correct_ner_labels, load_conll_with_report, DatasetFormat, DatasetStats};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Formato do arquivo de saída
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Jsonl,
    Conll,
}

impl From<OutputFormat> for DatasetFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Jsonl => DatasetFormat::Jsonl,
            OutputFormat::Conll => DatasetFormat::Conll,
        }
    }
}

#[derive(Parser)]
#[command(name = "conll-prep")]
#[command(about = "Carrega um arquivo CoNLL, corrige os rótulos NER e exporta o dataset")]
#[command(version)]
struct Cli {
    /// Arquivo CoNLL de entrada (token e rótulo por linha)
    input: PathBuf,

    /// Arquivo de saída
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Formato do arquivo de saída
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Jsonl)]
    format: OutputFormat,

    /// Não aplica a correção de rótulos
    #[arg(long)]
    no_correct: bool,

    /// Imprime estatísticas dos rótulos (JSON) na saída padrão
    #[arg(long)]
    stats: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let (mut dataset, report) = load_conll_with_report(&cli.input)
        .with_context(|| format!("não foi possível carregar {}", cli.input.display()))?;

    info!(
        "📄 {}: {} sentenças, {} tokens ({} linhas lidas)",
        cli.input.display(),
        dataset.len(),
        dataset.token_count(),
        report.lines_read
    );
    if !report.skipped.is_empty() {
        warn!("{} linhas malformadas ignoradas", report.skipped.len());
    }

    if cli.no_correct {
        info!("Correção de rótulos desativada");
    } else {
        correct_ner_labels(&mut dataset).context("falha ao corrigir rótulos")?;
        info!("✅ Rótulos corrigidos");
    }

    if cli.stats {
        let stats = DatasetStats::compute(&dataset);
        println!("{}", serde_json::to_string_pretty(&stats)?);
    }

    if let Some(output) = &cli.output {
        dataset
            .save(output, cli.format.into())
            .with_context(|| format!("não foi possível gravar {}", output.display()))?;
        info!("💾 Dataset gravado em {} ({:?})", output.display(), cli.format);
    }

    Ok(())
}
