//! # Estatísticas do Dataset
//!
//! Resumo do corpus usado pela linha de comando para inspecionar o efeito da
//! correção: frequência de cada rótulo, rótulos fora do esquema BIO e transições
//! `I-X` órfãs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::tagger::{count_invalid_transitions, Tag};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetStats {
    pub sentences: usize,
    pub tokens: usize,
    /// Frequência de cada rótulo (ordem alfabética, para saída estável).
    pub label_counts: BTreeMap<String, usize>,
    /// Ocorrências de rótulos que não parseiam como tag BIO (ex: "OO", "B-Product").
    pub invalid_labels: usize,
    /// `I-X` que não segue `B-X`/`I-X`.
    pub invalid_transitions: usize,
}

impl DatasetStats {
    pub fn compute(dataset: &Dataset) -> Self {
        let mut stats = DatasetStats {
            sentences: dataset.len(),
            tokens: dataset.token_count(),
            ..Default::default()
        };

        for sentence in dataset {
            for label in &sentence.labels {
                *stats.label_counts.entry(label.clone()).or_insert(0) += 1;
                if Tag::from_label(label).is_none() {
                    stats.invalid_labels += 1;
                }
            }
            stats.invalid_transitions += count_invalid_transitions(&sentence.labels);
        }

        stats
    }

    /// Número de rótulos distintos
    pub fn distinct_labels(&self) -> usize {
        self.label_counts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corrector::correct_ner_labels;
    use crate::loader::parse_conll;
    use std::io::Cursor;

    const RAW: &str = "Apple B-Product\nphone I-PHONE\nx OO\n\niPhone B-PROD\nPro I-Product\n";

    #[test]
    fn test_counts_before_correction() {
        let (ds, _) = parse_conll(Cursor::new(RAW)).unwrap();
        let stats = DatasetStats::compute(&ds);

        assert_eq!(stats.sentences, 2);
        assert_eq!(stats.tokens, 5);
        assert_eq!(stats.distinct_labels(), 5);
        // B-Product, OO, I-Product
        assert_eq!(stats.invalid_labels, 3);
        // I-PHONE após B-Product (inválido tratado como O)
        assert_eq!(stats.invalid_transitions, 1);
    }

    #[test]
    fn test_counts_after_correction() {
        let (mut ds, _) = parse_conll(Cursor::new(RAW)).unwrap();
        correct_ner_labels(&mut ds).unwrap();
        let stats = DatasetStats::compute(&ds);

        assert_eq!(stats.label_counts.get("O"), Some(&2));
        assert_eq!(stats.label_counts.get("B-PRODUCT"), Some(&2));
        assert_eq!(stats.label_counts.get("I-PRODUCT"), Some(&1));
        assert_eq!(stats.invalid_labels, 0);
        assert_eq!(stats.invalid_transitions, 0);
    }
}
