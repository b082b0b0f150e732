// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// PIPELINE DE SEÇÕES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// Pipeline genérico de extração: roteiro bruto → matcher de padrões por
// rótulo → extrator de listas para as seções em formato de lista →
// ParsedSections. Sucesso parcial é o caso normal; campos sem match
// ficam vazios.
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

mod extractor;
mod lists;
pub mod patterns;

pub use extractor::extract_section;
pub use lists::{extract_list_items, strategies_fallback};
pub use patterns::{SectionKind, SectionSpec, SECTION_SPECS};

use crate::config::ParserConfig;
use crate::types::{ParsedSections, SectionLabel};
use crate::utils::clean_text;

/// Extrai as cinco seções lógicas de um roteiro gerado por IA.
///
/// Retorna `None` apenas para entrada vazia; qualquer outro texto
/// produz `Some` com os campos que puderam ser extraídos (os demais
/// ficam vazios). Usa a configuração default do parser.
///
/// # Exemplo
///
/// ```rust
/// use roteiro_parser::sections::parse_ai_diagnostic;
///
/// let sections = parse_ai_diagnostic("texto sem cabeçalhos").unwrap();
/// assert!(sections.diagnostico.is_empty());
/// assert!(parse_ai_diagnostic("").is_none());
/// ```
pub fn parse_ai_diagnostic(raw: &str) -> Option<ParsedSections> {
    parse_ai_diagnostic_with(raw, &ParserConfig::default())
}

/// Variante de [`parse_ai_diagnostic`] com configuração explícita
pub fn parse_ai_diagnostic_with(raw: &str, config: &ParserConfig) -> Option<ParsedSections> {
    if raw.is_empty() {
        return None;
    }

    log::debug!("parse de roteiro com {} chars", raw.chars().count());

    // A normalização roda sobre os spans extraídos, não sobre o texto
    // bruto: limpar bullets antes da extração apagaria os marcadores
    // de que o extrator de listas depende
    let diagnostico = clean_text(&extract_section(raw, SectionLabel::Diagnostico, config));

    let ideias_section = extract_section(raw, SectionLabel::Ideias, config);
    let ideias = extract_list_items(&ideias_section, config.max_ideias, config);

    let plano = clean_text(&extract_section(raw, SectionLabel::Plano, config));

    let estrategias_section = extract_section(raw, SectionLabel::Estrategias, config);
    let mut estrategias = extract_list_items(&estrategias_section, config.max_estrategias, config);
    if estrategias.is_empty() {
        // Sem itens via cabeçalho, o fallback varre o roteiro inteiro
        estrategias = strategies_fallback(raw, config.max_estrategias);
    }

    let satira = clean_text(&extract_section(raw, SectionLabel::Satira, config));

    Some(ParsedSections {
        diagnostico,
        ideias,
        plano,
        estrategias,
        satira,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_none() {
        assert!(parse_ai_diagnostic("").is_none());
    }

    #[test]
    fn test_whitespace_only_is_some_and_empty() {
        // Espaços não são "entrada vazia": o parse roda e degrada para
        // campos vazios
        let sections = parse_ai_diagnostic("   \n  ").unwrap();
        assert!(sections.is_empty());
    }

    #[test]
    fn test_garbage_input_degrades_to_empty_fields() {
        let sections = parse_ai_diagnostic("texto qualquer sem nenhum cabeçalho reconhecido").unwrap();
        assert!(sections.diagnostico.is_empty());
        assert!(sections.ideias.is_empty());
        assert!(sections.plano.is_empty());
        assert!(sections.estrategias.is_empty());
        assert!(sections.satira.is_empty());
    }

    #[test]
    fn test_caps_always_hold() {
        let mut raw = String::from("IDEIAS DE CONTEÚDO PERSONALIZADAS\n");
        for i in 1..=10 {
            raw.push_str(&format!("{}. Ideia número {} com tamanho bem acima do filtro\n", i, i));
        }
        raw.push_str("ESTRATÉGIAS PERSONALIZADAS\n");
        for i in 1..=10 {
            raw.push_str(&format!("- Estratégia número {} com tamanho bem acima do filtro\n", i));
        }

        let sections = parse_ai_diagnostic(&raw).unwrap();
        assert!(sections.ideias.len() <= 4);
        assert!(sections.estrategias.len() <= 5);
    }

    #[test]
    fn test_items_are_normalized() {
        let raw = "IDEIAS DE CONTEÚDO\n1. **Primeira ideia com destaque em negrito**\n2. Segunda ideia também longa o suficiente";
        let sections = parse_ai_diagnostic(raw).unwrap();
        assert_eq!(sections.ideias[0], "Primeira ideia com destaque em negrito");
    }

    #[test]
    fn test_item_length_invariant_holds_after_cleaning() {
        // Limpo, o primeiro item cai para 20 chars e não pode entrar
        let raw = "IDEIAS DE CONTEÚDO PERSONALIZADAS\n1. **curta demais aqui ok**\n2. Segunda ideia também longa o suficiente";
        let sections = parse_ai_diagnostic(raw).unwrap();
        assert_eq!(sections.ideias.len(), 1);
        for item in &sections.ideias {
            assert!(item.trim().chars().count() > 20, "item abaixo do mínimo: {:?}", item);
        }
    }

    #[test]
    fn test_fallback_populates_estrategias_without_header() {
        let raw = "Sugestões soltas:\n- apostar em marketing de autoridade\n- publicar conteúdo educativo semanal";
        let sections = parse_ai_diagnostic(raw).unwrap();
        assert_eq!(sections.estrategias.len(), 2);
        assert!(sections.diagnostico.is_empty());
    }
}
