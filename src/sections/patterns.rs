// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// TABELA DE PADRÕES DE SEÇÃO
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// Tabela data-driven: cada rótulo lógico tem uma lista ordenada de
// variantes literais de cabeçalho. Novas variantes entram aqui, sem
// tocar o fluxo de controle da extração.
//
// O fim de uma seção não tem delimitador próprio; a captura para no
// primeiro cabeçalho conhecido de OUTRA seção (incluindo os marcadores
// de emoji 💡/📅/📈) ou no fim do texto.
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::SectionLabel;

/// Forma do conteúdo de uma seção
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    /// Texto corrido (limiar maior)
    Prose,
    /// Lista numerada/bulletada (limiar menor; passa pelo List Extractor)
    List,
}

/// Entrada da tabela de padrões: rótulo, forma e variantes de cabeçalho
#[derive(Debug)]
pub struct SectionSpec {
    /// Rótulo lógico
    pub label: SectionLabel,
    /// Forma do conteúdo (prosa ou lista)
    pub kind: SectionKind,
    /// Variantes literais de cabeçalho, em ordem de prioridade
    pub variants: &'static [&'static str],
}

/// Tabela completa de seções reconhecidas, em ordem de prioridade de variante
pub const SECTION_SPECS: &[SectionSpec] = &[
    SectionSpec {
        label: SectionLabel::Diagnostico,
        kind: SectionKind::Prose,
        variants: &["DIAGNÓSTICO ESTRATÉGICO", "PERFIL DA CLÍNICA", "DIAGNÓSTICO"],
    },
    SectionSpec {
        label: SectionLabel::Ideias,
        kind: SectionKind::List,
        variants: &["IDEIAS DE CONTEÚDO PERSONALIZADAS", "IDEIAS DE CONTEÚDO", "💡"],
    },
    SectionSpec {
        label: SectionLabel::Plano,
        kind: SectionKind::Prose,
        variants: &["PLANO DE AÇÃO", "📅"],
    },
    SectionSpec {
        label: SectionLabel::Estrategias,
        kind: SectionKind::List,
        variants: &["ESTRATÉGIAS PERSONALIZADAS", "ESTRATÉGIAS", "📈"],
    },
    SectionSpec {
        label: SectionLabel::Satira,
        kind: SectionKind::Prose,
        variants: &["SÁTIRA DO MENTOR", "SÁTIRA"],
    },
];

/// Regexes compiladas por rótulo, uma por variante, na ordem da tabela.
///
/// Cada regex tem a forma `(?is)CABEÇALHO\s*:?\s*(.*?)(?:FRONTEIRA|\z)`,
/// onde FRONTEIRA é a alternação dos cabeçalhos das demais seções.
static COMPILED: Lazy<HashMap<SectionLabel, Vec<Regex>>> = Lazy::new(|| {
    let mut map = HashMap::new();

    for spec in SECTION_SPECS {
        let boundary = boundary_alternation(spec.label);
        let regexes = spec
            .variants
            .iter()
            .map(|variant| {
                let pattern = format!(
                    r"(?is){}\s*:?\s*(.*?)(?:{}|\z)",
                    regex::escape(variant),
                    boundary
                );
                Regex::new(&pattern).expect("padrão de seção inválido")
            })
            .collect();
        map.insert(spec.label, regexes);
    }

    map
});

/// Alternação (já escapada) dos cabeçalhos de todas as OUTRAS seções
fn boundary_alternation(label: SectionLabel) -> String {
    SECTION_SPECS
        .iter()
        .filter(|spec| spec.label != label)
        .flat_map(|spec| spec.variants.iter())
        .map(|variant| regex::escape(variant))
        .collect::<Vec<_>>()
        .join("|")
}

/// Entrada da tabela para um rótulo
pub fn spec_for(label: SectionLabel) -> &'static SectionSpec {
    SECTION_SPECS
        .iter()
        .find(|spec| spec.label == label)
        .expect("todo rótulo tem entrada na tabela")
}

/// Regexes compiladas para um rótulo, em ordem de prioridade
pub fn patterns_for(label: SectionLabel) -> &'static [Regex] {
    COMPILED
        .get(&label)
        .map(|v| v.as_slice())
        .expect("todo rótulo tem padrões compilados")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_label_has_spec_and_patterns() {
        for label in SectionLabel::all() {
            assert_eq!(spec_for(label).label, label);
            assert_eq!(patterns_for(label).len(), spec_for(label).variants.len());
        }
    }

    #[test]
    fn test_capture_stops_at_next_header() {
        let text = "DIAGNÓSTICO ESTRATÉGICO\nconteúdo do diagnóstico\nPLANO DE AÇÃO\noutro";
        let re = &patterns_for(SectionLabel::Diagnostico)[0];
        let caps = re.captures(text).unwrap();
        let captured = caps.get(1).unwrap().as_str().trim();
        assert_eq!(captured, "conteúdo do diagnóstico");
    }

    #[test]
    fn test_capture_runs_to_end_without_boundary() {
        let text = "PLANO DE AÇÃO: semana um, semana dois";
        let re = &patterns_for(SectionLabel::Plano)[0];
        let caps = re.captures(text).unwrap();
        assert_eq!(caps.get(1).unwrap().as_str().trim(), "semana um, semana dois");
    }

    #[test]
    fn test_header_match_is_case_insensitive() {
        let text = "diagnóstico estratégico\ntexto em caixa baixa";
        let re = &patterns_for(SectionLabel::Diagnostico)[0];
        assert!(re.is_match(text));
    }

    #[test]
    fn test_emoji_marker_as_boundary() {
        let text = "DIAGNÓSTICO ESTRATÉGICO\nprosa inicial 💡 primeira ideia";
        let re = &patterns_for(SectionLabel::Diagnostico)[0];
        let caps = re.captures(text).unwrap();
        assert_eq!(caps.get(1).unwrap().as_str().trim(), "prosa inicial");
    }
}
