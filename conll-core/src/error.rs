//! Tipos de erro do `conll-core`.
//!
//! Linhas malformadas no arquivo CoNLL **não** são erros: o carregador apenas as
//! descarta e emite um diagnóstico. Os erros aqui são as falhas fatais que
//! interrompem a operação e sobem para quem chamou.

use std::path::PathBuf;

use thiserror::Error;

/// Erros das operações de carga, correção e persistência do dataset.
#[derive(Debug, Error)]
pub enum ConllError {
    /// O arquivo de entrada não pôde ser aberto ou lido (inclui UTF-8 inválido).
    #[error("falha ao ler {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// O dataset não pôde ser gravado no destino.
    #[error("falha ao gravar {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Falha de (de)serialização JSON Lines, incluindo campos ausentes
    /// (ex: um registro sem `labels`).
    #[error("JSON inválido: {0}")]
    Json(#[from] serde_json::Error),

    /// Uma sentença tem número de rótulos diferente do número de tokens.
    #[error("sentença {index}: {tokens} tokens mas {labels} rótulos")]
    LengthMismatch {
        index: usize,
        tokens: usize,
        labels: usize,
    },

    /// A coluna de rótulos de substituição não tem uma linha por sentença.
    #[error("coluna de rótulos com {found} linhas, esperado {expected}")]
    LabelColumnLength { expected: usize, found: usize },
}

/// Alias de `Result` para as operações do crate.
pub type Result<T> = std::result::Result<T, ConllError>;
