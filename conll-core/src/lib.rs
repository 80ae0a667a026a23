//! # conll-core — Preparação de Corpora CoNLL para NER
//!
//! Este crate lê arquivos no formato CoNLL de duas colunas (token e tag BIO por linha,
//! linhas em branco separando sentenças) e produz um dataset em memória de pares
//! (tokens, rótulos), corrigindo em seguida um conjunto fixo de grafias de tags
//! conhecidamente erradas.
//!
//! ## Arquitetura
//!
//! O fluxo é um pipeline de dois passos, chamado em sequência por quem usa o crate:
//!
//! 1.  **Carga** ([`loader`]): agrupa as linhas em sentenças e descarta linhas malformadas
//!     com um aviso no log.
//! 2.  **Correção** ([`corrector`]): substitui a coluna `labels` inteira por uma versão
//!     corrigida e em maiúsculas.
//!
//! Depois disso o [`Dataset`] pode ser inspecionado ([`stats`]) ou gravado em JSON Lines
//! ou CoNLL ([`Dataset::save`]).
//!
//! ## Exemplo de Uso
//!
//! ```rust,no_run
//! use conll_core::{correct_ner_labels, load_conll};
//!
//! // 1. Carrega o arquivo
//! let mut dataset = load_conll("dados/treino.conll")?;
//!
//! // 2. Corrige os rótulos no próprio dataset
//! correct_ner_labels(&mut dataset)?;
//!
//! for sentence in &dataset {
//!     println!("{:?} -> {:?}", sentence.tokens, sentence.labels);
//! }
//! # Ok::<(), conll_core::ConllError>(())
//! ```

pub mod corrector;
pub mod dataset;
pub mod error;
pub mod loader;
pub mod stats;
pub mod tagger;

pub use corrector::{correct_label, correct_labels, correct_ner_labels, LABEL_REPLACEMENTS};
pub use dataset::{Dataset, DatasetFormat, Sentence};
pub use error::{ConllError, Result};
pub use loader::{load_conll, load_conll_with_report, parse_conll, LoadReport, SkippedLine};
pub use stats::DatasetStats;
pub use tagger::Tag;
