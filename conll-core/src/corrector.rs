//! # Correção de Rótulos NER
//!
//! Corrige grafias conhecidas e erradas de tags no corpus e converte todos os
//! rótulos para maiúsculas.
//!
//! ## Tabela de Substituição
//!
//! | Rótulo original | Corrigido   | Motivo                                  |
//! |-----------------|-------------|-----------------------------------------|
//! | `I-PHONE`       | `O`         | categoria descontinuada                 |
//! | `OO`            | `O`         | erro de digitação                       |
//! | `B-PROD`        | `B-PRODUCT` | abreviação                              |
//! | `I-Product`     | `I-PRODUCT` | capitalização                           |
//! | `B-Product`     | `B-PRODUCT` | capitalização                           |
//!
//! A comparação com as chaves é **exata** (sensível a maiúsculas). A substituição
//! acontece antes da conversão para maiúsculas: `i-product` não está na tabela, então
//! apenas vira `I-PRODUCT` pela conversão, enquanto `b-prod` vira `B-PROD` (não
//! `B-PRODUCT`).
//!
//! Aplicar a correção duas vezes dá o mesmo resultado que aplicar uma vez, **exceto**
//! para rótulos que só caem em uma chave da tabela depois de convertidos para
//! maiúsculas (`b-prod`, `i-phone`, `oo`): a primeira passada produz `B-PROD` e a
//! segunda, `B-PRODUCT`.

use tracing::debug;

use crate::dataset::Dataset;
use crate::error::Result;

/// Grafias conhecidas e erradas → rótulo correto.
pub const LABEL_REPLACEMENTS: &[(&str, &str)] = &[
    ("I-PHONE", "O"),
    ("OO", "O"),
    ("B-PROD", "B-PRODUCT"),
    ("I-Product", "I-PRODUCT"),
    ("B-Product", "B-PRODUCT"),
];

/// Busca exata de `label` na tabela de substituição.
fn replacement(label: &str) -> Option<&'static str> {
    LABEL_REPLACEMENTS
        .iter()
        .find(|(wrong, _)| *wrong == label)
        .map(|(_, right)| *right)
}

/// Corrige um único rótulo: substitui pela tabela (se houver) e converte para maiúsculas.
pub fn correct_label(label: &str) -> String {
    replacement(label).unwrap_or(label).to_uppercase()
}

/// Corrige uma sequência de rótulos, preservando ordem e comprimento.
pub fn correct_labels(labels: &[String]) -> Vec<String> {
    labels.iter().map(|l| correct_label(l)).collect()
}

/// Corrige a coluna `labels` de todo o dataset, no próprio dataset.
///
/// A coluna é reconstruída por inteiro e atribuída de uma vez. Falha com
/// [`ConllError::LengthMismatch`](crate::ConllError::LengthMismatch) se alguma
/// sentença já estiver com tokens e rótulos de tamanhos diferentes.
pub fn correct_ner_labels(dataset: &mut Dataset) -> Result<&mut Dataset> {
    dataset.validate()?;

    let column: Vec<Vec<String>> = dataset
        .labels()
        .into_iter()
        .map(correct_labels)
        .collect();

    let changed = dataset
        .labels()
        .into_iter()
        .zip(&column)
        .flat_map(|(old, new)| old.iter().zip(new))
        .filter(|(old, new)| old != new)
        .count();

    dataset.replace_labels(column)?;
    debug!("Rótulos corrigidos: {} alterados", changed);
    Ok(dataset)
}
