// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// EXTRAÇÃO DE ITENS DE LISTA
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// Um item vai de um marcador (numeração "N."/"N)" ou bullet "•"/"-" no
// início de linha) até o próximo marcador ou o fim do texto. O crate
// regex não tem lookahead, então as posições dos marcadores são
// coletadas com find_iter e o texto fatiado entre elas.
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::ParserConfig;
use crate::utils::{clean_text, contains_ignore_case};

/// Marcador de item: numeração ou bullet no início de linha
static ITEM_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^\s*(?:\d+[.)]\s*|[•\-]\s+)").expect("regex de marcador inválido")
});

/// Palavras-chave que qualificam uma linha no fallback de estratégias
const STRATEGY_KEYWORDS: &[&str] = &[
    "conteúdo",
    "estratégia",
    "marketing",
    "autoridade",
    "casos",
    "educativo",
    "redes sociais",
    "instagram",
];

/// Extrai itens numerados/bulletados do texto de uma seção.
///
/// Cada item sai normalizado ([`clean_text`]), sem o marcador; o filtro
/// de tamanho roda sobre o item já limpo, para que decoração markdown
/// não conte no mínimo de `config.min_item_len`. O resultado é
/// truncado em `max_items`.
pub fn extract_list_items(section: &str, max_items: usize, config: &ParserConfig) -> Vec<String> {
    let markers: Vec<_> = ITEM_MARKER.find_iter(section).collect();
    let mut items = Vec::new();

    for (index, marker) in markers.iter().enumerate() {
        if items.len() == max_items {
            break;
        }

        let start = marker.end();
        let end = markers
            .get(index + 1)
            .map(|next| next.start())
            .unwrap_or(section.len());

        let item = clean_text(&section[start..end]);
        if item.chars().count() > config.min_item_len {
            items.push(item);
        } else {
            log::debug!("item de lista descartado por tamanho: {:?}", item);
        }
    }

    items
}

/// Fallback de estratégias: varre TODAS as linhas do roteiro bruto.
///
/// Qualificam linhas com um marcador `•`/`-` em qualquer posição E pelo
/// menos uma palavra-chave do conjunto fixo, até `max_items` linhas.
/// Não há filtro de tamanho além da presença do marcador — o fallback
/// pode puxar linhas de outras seções, comportamento preservado do
/// gerador original.
pub fn strategies_fallback(raw: &str, max_items: usize) -> Vec<String> {
    let lines: Vec<String> = raw
        .lines()
        .filter(|line| {
            (line.contains('•') || line.contains('-'))
                && STRATEGY_KEYWORDS
                    .iter()
                    .any(|keyword| contains_ignore_case(line, keyword))
        })
        .take(max_items)
        .map(|line| {
            line.trim_start_matches(|c: char| c == '•' || c == '-' || c.is_whitespace())
                .trim()
                .to_string()
        })
        .collect();

    if !lines.is_empty() {
        log::debug!("fallback de estratégias capturou {} linha(s)", lines.len());
    }

    lines
}
