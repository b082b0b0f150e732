// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// PREPARO DE TEXTO PARA NARRAÇÃO
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// Limpeza heurística de roteiro antes de enviar para TTS: remove
// decoração visual que não deve ser lida em voz alta e trunca por
// orçamento de sentenças para caber na duração alvo do vídeo.
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use once_cell::sync::Lazy;
use regex::Regex;

use crate::utils::{split_sentences, word_count};

/// Ritmo médio de narração usado no orçamento de duração
pub const WORDS_PER_SECOND: f32 = 2.5;

/// Direções de cena entre colchetes ou parênteses, ex: "[pausa]"
static STAGE_DIRECTIONS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[[^\]]*\]|\([^)]*\)").expect("regex de direção de cena inválido")
});

/// Marcadores markdown que não devem chegar ao TTS
static MARKDOWN_NOISE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)[*_`~]+|^#+\s*").expect("regex de markdown inválido")
});

/// Limpa um roteiro para narração.
///
/// Remove direções de cena entre colchetes/parênteses, marcadores
/// markdown e emoji, e colapsa whitespace em espaços simples. O
/// resultado é o texto como deve ser lido em voz alta.
pub fn clean_off_text(text: &str) -> String {
    let no_directions = STAGE_DIRECTIONS.replace_all(text, " ");
    let no_markdown = MARKDOWN_NOISE.replace_all(&no_directions, "");

    no_markdown
        .chars()
        .filter(|c| !is_emoji_like(*c))
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Trunca texto por orçamento de sentenças para uma duração alvo.
///
/// O orçamento de palavras é `max_seconds × WORDS_PER_SECOND`;
/// sentenças inteiras são acumuladas enquanto couberem. Se nem a
/// primeira sentença couber, ela entra sozinha — narração vazia não é
/// útil para o chamador.
pub fn limit_to_duration(text: &str, max_seconds: u32) -> String {
    let budget = (max_seconds as f32 * WORDS_PER_SECOND) as usize;
    let mut used = 0usize;
    let mut kept = Vec::new();

    for sentence in split_sentences(text) {
        let words = word_count(&sentence);
        if used + words > budget && !kept.is_empty() {
            log::debug!("narração truncada em {} palavras (orçamento {})", used, budget);
            break;
        }
        used += words;
        kept.push(sentence);
        if used >= budget {
            break;
        }
    }

    kept.join(" ")
}

/// Emoji e símbolos pictográficos comuns em roteiros gerados por IA
fn is_emoji_like(c: char) -> bool {
    matches!(
        c as u32,
        0x1F000..=0x1FAFF // pictográficos, emoticons
            | 0x2600..=0x27BF // símbolos diversos e dingbats
            | 0x2B00..=0x2BFF // setas e símbolos adicionais
            | 0xFE00..=0xFE0F // variation selectors
            | 0x200D // zero-width joiner
    )
}
