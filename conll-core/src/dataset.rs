//! # Dataset de Sentenças Anotadas
//!
//! O dataset é uma sequência ordenada de [`Sentence`], na mesma ordem em que as
//! sentenças aparecem no arquivo de origem. Cada sentença guarda duas colunas
//! paralelas:
//!
//! | coluna   | conteúdo                         | exemplo                    |
//! |----------|----------------------------------|----------------------------|
//! | `tokens` | palavras da sentença             | `["John", "lives", "here"]`|
//! | `labels` | tag BIO de cada palavra          | `["B-PER", "O", "O"]`      |
//!
//! Invariante: `tokens.len() == labels.len()` para toda sentença.
//!
//! ## Persistência
//!
//! - **JSON Lines**: um objeto `{"tokens": [...], "labels": [...]}` por linha.
//! - **CoNLL**: o mesmo formato de entrada (`token rótulo`, linha em branco entre sentenças).

use std::fmt::Write as _;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConllError, Result};

/// Uma sentença: tokens e rótulos em paralelo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// Tokens na ordem do texto (ex: "John", "lives").
    pub tokens: Vec<String>,
    /// Um rótulo por token (ex: "B-PER", "O").
    pub labels: Vec<String>,
}

impl Sentence {
    pub fn new(tokens: Vec<String>, labels: Vec<String>) -> Self {
        Self { tokens, labels }
    }

    /// Número de tokens da sentença
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Pares (token, rótulo) na ordem da sentença.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tokens
            .iter()
            .zip(self.labels.iter())
            .map(|(t, l)| (t.as_str(), l.as_str()))
    }
}

/// Formatos de saída suportados por [`Dataset::save`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    /// Um objeto JSON por sentença.
    Jsonl,
    /// `token rótulo` por linha, sentenças separadas por linha em branco.
    Conll,
}

/// O dataset completo: uma linha por sentença.
///
/// Pertence exclusivamente a quem chamou. O carregador o cria e o corretor
/// substitui a coluna `labels` inteira via [`Dataset::replace_labels`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    sentences: Vec<Sentence>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adiciona uma sentença ao final do dataset.
    pub fn push(&mut self, sentence: Sentence) {
        self.sentences.push(sentence);
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sentence> {
        self.sentences.iter()
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Total de tokens somando todas as sentenças
    pub fn token_count(&self) -> usize {
        self.sentences.iter().map(Sentence::len).sum()
    }

    /// Coluna `labels`: a sequência de rótulos de cada sentença, em ordem.
    pub fn labels(&self) -> Vec<&[String]> {
        self.sentences.iter().map(|s| s.labels.as_slice()).collect()
    }

    /// Substitui a coluna `labels` inteira de uma vez.
    ///
    /// A coluna nova precisa ter uma linha por sentença e cada linha precisa ter o
    /// mesmo comprimento que os tokens da sentença. Se qualquer linha violar isso,
    /// nada é alterado.
    pub fn replace_labels(&mut self, column: Vec<Vec<String>>) -> Result<()> {
        if column.len() != self.sentences.len() {
            return Err(ConllError::LabelColumnLength {
                expected: self.sentences.len(),
                found: column.len(),
            });
        }
        for (index, (sentence, labels)) in self.sentences.iter().zip(&column).enumerate() {
            if sentence.tokens.len() != labels.len() {
                return Err(ConllError::LengthMismatch {
                    index,
                    tokens: sentence.tokens.len(),
                    labels: labels.len(),
                });
            }
        }

        for (sentence, labels) in self.sentences.iter_mut().zip(column) {
            sentence.labels = labels;
        }
        Ok(())
    }

    /// Verifica a invariante `tokens.len() == labels.len()` em todas as sentenças.
    pub fn validate(&self) -> Result<()> {
        for (index, sentence) in self.sentences.iter().enumerate() {
            if sentence.tokens.len() != sentence.labels.len() {
                return Err(ConllError::LengthMismatch {
                    index,
                    tokens: sentence.tokens.len(),
                    labels: sentence.labels.len(),
                });
            }
        }
        Ok(())
    }

    /// Serializa como JSON Lines (uma sentença por linha, terminando em `\n`).
    pub fn to_jsonl(&self) -> Result<String> {
        let mut out = String::new();
        for sentence in &self.sentences {
            out.push_str(&serde_json::to_string(sentence)?);
            out.push('\n');
        }
        Ok(out)
    }

    /// Lê JSON Lines. Linhas em branco são ignoradas; um objeto sem `tokens` ou
    /// `labels` falha com o erro de campo ausente do serde.
    pub fn from_jsonl(input: &str) -> Result<Self> {
        let mut dataset = Dataset::new();
        for line in input.lines().filter(|l| !l.trim().is_empty()) {
            dataset.push(serde_json::from_str::<Sentence>(line)?);
        }
        dataset.validate()?;
        Ok(dataset)
    }

    /// Serializa no formato CoNLL de entrada.
    pub fn to_conll(&self) -> String {
        let mut out = String::new();
        for sentence in &self.sentences {
            for (token, label) in sentence.pairs() {
                // Escrever em String não falha
                let _ = writeln!(out, "{} {}", token, label);
            }
            out.push('\n');
        }
        out
    }

    /// Grava o dataset em `path` no formato escolhido.
    pub fn save(&self, path: impl AsRef<Path>, format: DatasetFormat) -> Result<()> {
        let path = path.as_ref();
        let content = match format {
            DatasetFormat::Jsonl => self.to_jsonl()?,
            DatasetFormat::Conll => self.to_conll(),
        };
        std::fs::write(path, content).map_err(|source| ConllError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl From<Vec<Sentence>> for Dataset {
    fn from(sentences: Vec<Sentence>) -> Self {
        Self { sentences }
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Sentence;
    type IntoIter = std::slice::Iter<'a, Sentence>;

    fn into_iter(self) -> Self::IntoIter {
        self.sentences.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(pairs: &[(&str, &str)]) -> Sentence {
        Sentence::new(
            pairs.iter().map(|(t, _)| t.to_string()).collect(),
            pairs.iter().map(|(_, l)| l.to_string()).collect(),
        )
    }

    fn sample() -> Dataset {
        Dataset::from(vec![
            sentence(&[("John", "B-PER"), ("lives", "O"), ("here", "O")]),
            sentence(&[("He", "O"), ("works", "O")]),
        ])
    }

    #[test]
    fn test_labels_column_in_order() {
        let ds = sample();
        let labels = ds.labels();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0], ["B-PER", "O", "O"]);
        assert_eq!(labels[1], ["O", "O"]);
        assert_eq!(ds.token_count(), 5);
    }

    #[test]
    fn test_replace_labels_whole_column() {
        let mut ds = sample();
        ds.replace_labels(vec![
            vec!["B-LOC".into(), "O".into(), "O".into()],
            vec!["B-PER".into(), "O".into()],
        ])
        .unwrap();
        assert_eq!(ds.sentences()[0].labels[0], "B-LOC");
        assert_eq!(ds.sentences()[1].labels[0], "B-PER");
    }

    #[test]
    fn test_replace_labels_rejects_wrong_row_count() {
        let mut ds = sample();
        let err = ds.replace_labels(vec![vec!["O".into()]]).unwrap_err();
        assert!(matches!(
            err,
            ConllError::LabelColumnLength { expected: 2, found: 1 }
        ));
    }

    #[test]
    fn test_replace_labels_is_all_or_nothing() {
        let mut ds = sample();
        let before = ds.clone();
        // Primeira linha válida, segunda curta demais
        let err = ds
            .replace_labels(vec![
                vec!["O".into(), "O".into(), "O".into()],
                vec!["O".into()],
            ])
            .unwrap_err();
        assert!(matches!(err, ConllError::LengthMismatch { index: 1, tokens: 2, labels: 1 }));
        assert_eq!(ds, before);
    }

    #[test]
    fn test_jsonl_missing_labels_field() {
        let err = Dataset::from_jsonl(r#"{"tokens": ["John"]}"#).unwrap_err();
        assert!(matches!(err, ConllError::Json(_)));
        assert!(err.to_string().contains("labels"));
    }

    #[test]
    fn test_jsonl_rejects_length_mismatch() {
        let err = Dataset::from_jsonl(r#"{"tokens": ["a", "b"], "labels": ["O"]}"#).unwrap_err();
        assert!(matches!(err, ConllError::LengthMismatch { index: 0, .. }));
    }

    #[test]
    fn test_jsonl_shape() {
        let jsonl = sample().to_jsonl().unwrap();
        let first = jsonl.lines().next().unwrap();
        assert_eq!(
            first,
            r#"{"tokens":["John","lives","here"],"labels":["B-PER","O","O"]}"#
        );
        assert_eq!(Dataset::from_jsonl(&jsonl).unwrap(), sample());
    }

    #[test]
    fn test_to_conll_layout() {
        assert_eq!(
            sample().to_conll(),
            "John B-PER\nlives O\nhere O\n\nHe O\nworks O\n\n"
        );
    }

    #[test]
    fn test_save_to_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nao-existe").join("saida.jsonl");
        let err = sample().save(&path, DatasetFormat::Jsonl).unwrap_err();
        assert!(matches!(err, ConllError::Write { .. }));
    }
}
