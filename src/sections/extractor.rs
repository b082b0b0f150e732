// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// EXTRAÇÃO DE SEÇÃO
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// Avalia as variantes de cabeçalho de um rótulo em ordem de prioridade;
// vence a primeira cujo span capturado (trimmed) passa do limiar da
// seção. Sem merge de matches; ausência vira string vazia, nunca erro.
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use crate::config::ParserConfig;
use crate::sections::patterns::{patterns_for, spec_for, SectionKind};
use crate::types::SectionLabel;

/// Extrai o conteúdo de uma seção do roteiro bruto.
///
/// Retorna o span capturado (trimmed) da primeira variante que passar
/// do limiar, ou string vazia quando nenhuma passa. Nunca falha; o
/// único efeito colateral é o trace de diagnóstico via `log`.
pub fn extract_section(raw: &str, label: SectionLabel, config: &ParserConfig) -> String {
    let min_len = match spec_for(label).kind {
        SectionKind::Prose => config.min_prose_section_len,
        SectionKind::List => config.min_list_section_len,
    };

    for (index, regex) in patterns_for(label).iter().enumerate() {
        let Some(captures) = regex.captures(raw) else {
            continue;
        };
        let Some(span) = captures.get(1) else {
            continue;
        };

        let content = span.as_str().trim();
        if content.chars().count() > min_len {
            log::debug!(
                "seção '{}' extraída pela variante #{} ({} chars)",
                label.as_str(),
                index,
                content.chars().count()
            );
            return content.to_string();
        }

        log::debug!(
            "seção '{}': variante #{} capturou abaixo do limiar ({} <= {})",
            label.as_str(),
            index,
            content.chars().count(),
            min_len
        );
    }

    log::debug!("seção '{}' sem match", label.as_str());
    String::new()
}
