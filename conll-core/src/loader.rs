//! # Carregador de Arquivos CoNLL
//!
//! Lê um arquivo no formato CoNLL de duas colunas e agrupa as linhas em sentenças.
//!
//! ## Formato de Entrada
//!
//! ```text
//! John B-PER
//! lives O
//! here O
//!
//! He O
//! works O
//! ```
//!
//! - Cada linha não vazia deve ter exatamente dois campos separados por espaço: `token rótulo`.
//! - Linhas em branco (após `trim`) separam sentenças. Várias linhas em branco seguidas
//!   não geram sentenças vazias.
//! - Linhas com um campo, ou com três ou mais, são **ignoradas**: geram um aviso no log e
//!   não alteram a sentença corrente.
//! - Se o arquivo não terminar em linha em branco, a última sentença é fechada mesmo assim.
//! - Quebras de linha aceitas: `\n` e `\r\n`. Um `\r` sozinho (arquivos no estilo do
//!   Mac clássico) **não** separa linhas, então o arquivo inteiro vira uma única linha.
//!
//! ## Exemplo de Uso
//!
//! ```rust,no_run
//! use conll_core::loader::load_conll;
//!
//! let dataset = load_conll("dados/treino.conll")?;
//! println!("{} sentenças", dataset.len());
//! # Ok::<(), conll_core::ConllError>(())
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::dataset::{Dataset, Sentence};
use crate::error::{ConllError, Result};

/// Uma linha descartada por não ter exatamente dois campos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedLine {
    /// Número da linha no arquivo (a partir de 1).
    pub line_number: usize,
    /// Conteúdo da linha já sem espaços nas pontas.
    pub content: String,
    /// Quantos campos a linha tinha.
    pub field_count: usize,
}

/// Resumo de uma carga: linhas lidas e linhas descartadas.
///
/// Não faz parte do contrato de [`load_conll`]; serve para inspeção (testes, CLI).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    pub lines_read: usize,
    pub skipped: Vec<SkippedLine>,
}

/// Acumula os tokens e rótulos da sentença em construção.
#[derive(Default)]
struct SentenceBuilder {
    tokens: Vec<String>,
    labels: Vec<String>,
}

impl SentenceBuilder {
    fn push(&mut self, token: &str, label: &str) {
        self.tokens.push(token.to_string());
        self.labels.push(label.to_string());
    }

    /// Fecha a sentença corrente, se houver alguma, e zera os acumuladores.
    fn finish(&mut self) -> Option<Sentence> {
        if self.tokens.is_empty() {
            return None;
        }
        Some(Sentence::new(
            std::mem::take(&mut self.tokens),
            std::mem::take(&mut self.labels),
        ))
    }
}

/// Carrega um arquivo CoNLL em um [`Dataset`].
///
/// Falha apenas se o arquivo não puder ser aberto ou lido. Linhas malformadas são
/// descartadas com um aviso (`tracing::warn!`) e nunca viram erro.
pub fn load_conll(path: impl AsRef<Path>) -> Result<Dataset> {
    load_conll_with_report(path).map(|(dataset, _)| dataset)
}

/// Igual a [`load_conll`], devolvendo também o [`LoadReport`] da carga.
pub fn load_conll_with_report(path: impl AsRef<Path>) -> Result<(Dataset, LoadReport)> {
    let path = path.as_ref();
    let io_err = |source| ConllError::Io {
        path: path.to_path_buf(),
        source,
    };

    // O arquivo é fechado ao sair do escopo, com sucesso ou erro
    let file = File::open(path).map_err(io_err)?;
    let (dataset, report) = parse_conll(BufReader::new(file)).map_err(io_err)?;

    debug!(
        "Carregado {}: {} sentenças, {} linhas, {} ignoradas",
        path.display(),
        dataset.len(),
        report.lines_read,
        report.skipped.len()
    );
    Ok((dataset, report))
}

/// Núcleo do carregador: agrupa as linhas de qualquer `BufRead` em sentenças.
///
/// Erros de leitura (incluindo UTF-8 inválido) são propagados como `io::Error`.
pub fn parse_conll<R: BufRead>(reader: R) -> std::io::Result<(Dataset, LoadReport)> {
    let mut dataset = Dataset::new();
    let mut report = LoadReport::default();
    let mut current = SentenceBuilder::default();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        report.lines_read += 1;
        let line = line.trim();

        if line.is_empty() {
            // Fronteira de sentença
            if let Some(sentence) = current.finish() {
                dataset.push(sentence);
            }
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            [token, label] => current.push(token, label),
            _ => {
                warn!(
                    line = i + 1,
                    fields = parts.len(),
                    "Ignorando linha malformada: {}",
                    line
                );
                report.skipped.push(SkippedLine {
                    line_number: i + 1,
                    content: line.to_string(),
                    field_count: parts.len(),
                });
            }
        }
    }

    // Arquivo sem linha em branco final
    if let Some(sentence) = current.finish() {
        dataset.push(sentence);
    }

    Ok((dataset, report))
}
