//! # Esquema de Tags BIO
//!
//! Interpreta os rótulos do corpus no esquema **BIO** (Beginning-Inside-Outside):
//!
//! - `B-TAG`: Begin — primeiro token de uma entidade
//! - `I-TAG`: Inside — tokens subsequentes da mesma entidade
//! - `O`: Outside — não é parte de nenhuma entidade
//!
//! Diferente de um modelo com vocabulário fechado, o corpus pode trazer qualquer
//! categoria (`PER`, `PRODUCT`, `PHONE`...), então a categoria é uma string livre.
//! O parse é estrito: `b-per` ou `Bper` não são tags válidas.

use serde::{Deserialize, Serialize};

/// Tag BIO de um token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tag {
    /// **Begin**: início de uma entidade. Ex: **São** (B-LOC) Paulo.
    Begin(String),
    /// **Inside**: continuação de uma entidade. Ex: São **Paulo** (I-LOC).
    Inside(String),
    /// **Outside**: o token não faz parte de nenhuma entidade.
    Outside,
}

impl Tag {
    /// Representação textual da tag (ex: "B-PER", "I-ORG", "O")
    pub fn label(&self) -> String {
        match self {
            Tag::Begin(cat) => format!("B-{}", cat),
            Tag::Inside(cat) => format!("I-{}", cat),
            Tag::Outside => "O".to_string(),
        }
    }

    /// Verifica se a transição tag_prev → self é válida no esquema BIO
    ///
    /// Regras:
    /// - `I-X` só pode seguir `B-X` ou `I-X` (mesma categoria)
    /// - `B-X` pode seguir qualquer tag
    /// - `O` pode seguir qualquer tag
    pub fn is_valid_transition(prev: &Tag, next: &Tag) -> bool {
        match next {
            Tag::Inside(cat) => match prev {
                Tag::Begin(prev_cat) | Tag::Inside(prev_cat) => prev_cat == cat,
                _ => false,
            },
            _ => true,
        }
    }

    /// Parseia uma tag a partir de string (ex: "B-PER" → Begin("PER")).
    ///
    /// A categoria precisa ser não vazia e em maiúsculas.
    pub fn from_label(s: &str) -> Option<Self> {
        if s == "O" {
            return Some(Tag::Outside);
        }
        let (prefix, cat) = s.split_once('-')?;
        let valid_cat = !cat.is_empty()
            && cat
                .chars()
                .all(|c| c.is_uppercase() || c.is_ascii_digit() || c == '_' || c == '-');
        if !valid_cat {
            return None;
        }
        match prefix {
            "B" => Some(Tag::Begin(cat.to_string())),
            "I" => Some(Tag::Inside(cat.to_string())),
            _ => None,
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Conta as transições BIO inválidas em uma sequência de rótulos.
///
/// Rótulos que não parseiam como tag são tratados como `O` para fins de transição.
/// Um `I-X` no início da sentença também é inválido.
pub fn count_invalid_transitions(labels: &[String]) -> usize {
    let mut prev = Tag::Outside;
    let mut invalid = 0;
    for label in labels {
        let tag = Tag::from_label(label).unwrap_or(Tag::Outside);
        if !Tag::is_valid_transition(&prev, &tag) {
            invalid += 1;
        }
        prev = tag;
    }
    invalid
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_tag_labels() {
        assert_eq!(Tag::Outside.label(), "O");
        assert_eq!(Tag::Begin("PER".into()).label(), "B-PER");
        assert_eq!(Tag::Inside("PRODUCT".into()).to_string(), "I-PRODUCT");
    }

    #[test]
    fn test_valid_transitions() {
        assert!(Tag::is_valid_transition(
            &Tag::Begin("PER".into()),
            &Tag::Inside("PER".into())
        ));
        assert!(!Tag::is_valid_transition(
            &Tag::Outside,
            &Tag::Inside("PER".into())
        ));
        assert!(!Tag::is_valid_transition(
            &Tag::Begin("ORG".into()),
            &Tag::Inside("PER".into())
        ));
    }

    #[test]
    fn test_tag_from_label() {
        assert_eq!(Tag::from_label("O"), Some(Tag::Outside));
        assert_eq!(Tag::from_label("B-PER"), Some(Tag::Begin("PER".into())));
        assert_eq!(
            Tag::from_label("I-PRODUCT"),
            Some(Tag::Inside("PRODUCT".into()))
        );
        assert_eq!(Tag::from_label("B-Product"), None);
        assert_eq!(Tag::from_label("OO"), None);
        assert_eq!(Tag::from_label("X-PER"), None);
        assert_eq!(Tag::from_label("B-"), None);
    }

    #[test]
    fn test_count_invalid_transitions() {
        assert_eq!(count_invalid_transitions(&labels(&["B-PER", "I-PER", "O"])), 0);
        assert_eq!(count_invalid_transitions(&labels(&["I-PER", "O"])), 1);
        assert_eq!(count_invalid_transitions(&labels(&["B-ORG", "I-PER", "I-PER"])), 1);
        assert_eq!(count_invalid_transitions(&labels(&["OO", "I-LOC"])), 1);
    }
}
