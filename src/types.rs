// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// TIPOS COMPARTILHADOS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use serde::{Deserialize, Serialize};

/// Rótulos lógicos de seção que o parser tenta preencher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionLabel {
    /// Diagnóstico estratégico da clínica
    Diagnostico,
    /// Ideias de conteúdo (lista, máx. 4)
    Ideias,
    /// Plano de ação
    Plano,
    /// Estratégias personalizadas (lista, máx. 5)
    Estrategias,
    /// Sátira do mentor
    Satira,
}

impl SectionLabel {
    /// Retorna o rótulo como string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Diagnostico => "diagnostico",
            Self::Ideias => "ideias",
            Self::Plano => "plano",
            Self::Estrategias => "estrategias",
            Self::Satira => "satira",
        }
    }

    /// Todos os rótulos, na ordem em que aparecem no roteiro
    pub fn all() -> [SectionLabel; 5] {
        [
            Self::Diagnostico,
            Self::Ideias,
            Self::Plano,
            Self::Estrategias,
            Self::Satira,
        ]
    }
}

/// Resultado estruturado da extração de seções de um roteiro.
///
/// Todos os campos estão sempre presentes; extração parcial é o caso
/// normal, não um erro. Campos sem match ficam vazios.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedSections {
    /// Diagnóstico estratégico (prosa)
    pub diagnostico: String,
    /// Ideias de conteúdo (0–4 itens)
    pub ideias: Vec<String>,
    /// Plano de ação (prosa)
    pub plano: String,
    /// Estratégias personalizadas (0–5 itens)
    pub estrategias: Vec<String>,
    /// Sátira do mentor (prosa)
    pub satira: String,
}

impl ParsedSections {
    /// Retorna true se nenhuma seção foi extraída
    pub fn is_empty(&self) -> bool {
        self.diagnostico.is_empty()
            && self.ideias.is_empty()
            && self.plano.is_empty()
            && self.estrategias.is_empty()
            && self.satira.is_empty()
    }
}

/// Bloco de um roteiro no formato "light copy" (7 passos)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightCopyBlock {
    /// Título do bloco (ex: "Gancho")
    pub titulo: String,
    /// Conteúdo capturado do roteiro
    pub conteudo: String,
    /// Emoji associado ao passo
    pub emoji: String,
    /// Descrição curta do papel do passo
    pub descricao: String,
}

/// Metadados do roteiro usados na seleção de pipeline.
///
/// Substitui o objeto dinâmico do gerador original por campos opcionais
/// explícitos; os checks de substring permanecem case-insensitive.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScriptMeta {
    /// Nome do mentor/persona selecionado upstream
    #[serde(default)]
    pub mentor: Option<String>,
    /// Formato declarado do roteiro (ex: "light copy")
    #[serde(default)]
    pub formato: Option<String>,
}

impl ScriptMeta {
    /// Cria metadados com mentor e formato
    pub fn new(mentor: impl Into<String>, formato: impl Into<String>) -> Self {
        Self {
            mentor: Some(mentor.into()),
            formato: Some(formato.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsed_sections_default() {
        let sections = ParsedSections::default();
        assert!(sections.is_empty());
        assert!(sections.diagnostico.is_empty());
        assert!(sections.ideias.is_empty());
    }

    #[test]
    fn test_section_label_as_str() {
        assert_eq!(SectionLabel::Diagnostico.as_str(), "diagnostico");
        assert_eq!(SectionLabel::Estrategias.as_str(), "estrategias");
    }

    #[test]
    fn test_parsed_sections_json_roundtrip() {
        let sections = ParsedSections {
            diagnostico: "texto".into(),
            ideias: vec!["ideia um".into()],
            ..Default::default()
        };
        let json = serde_json::to_string(&sections).unwrap();
        let back: ParsedSections = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sections);
    }

    #[test]
    fn test_script_meta_optional_fields() {
        let meta = ScriptMeta::default();
        assert!(meta.mentor.is_none());
        assert!(meta.formato.is_none());

        let meta = ScriptMeta::new("Ladeira", "light copy");
        assert_eq!(meta.mentor.as_deref(), Some("Ladeira"));
    }
}
