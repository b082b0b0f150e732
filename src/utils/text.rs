// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// TEXT UTILITIES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// Utilitários para processamento de texto:
// - Normalização de decoração markdown
// - Busca case-insensitive por substring
// - Split em sentenças
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use once_cell::sync::Lazy;
use regex::Regex;

/// Marcadores de bullet/traço no início de linha, empilhados ou não.
/// A repetição cobre entradas como "- - item" num passe só; sem ela a
/// idempotência quebraria (cada passe removeria um marcador).
static LEADING_BULLET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^\s*(?:[•\-]\s*)+").expect("regex de bullet inválido")
});

/// Remove decoração markdown e marcadores de lista de um texto.
///
/// Remove marcadores de negrito (`**`) e itálico (`*`), descarta os
/// bullets/traços no início de cada linha e faz trim do resultado.
/// Função total e idempotente; entrada vazia retorna string vazia.
pub fn clean_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let no_bold = text.replace("**", "");
    let no_italic = no_bold.replace('*', "");
    LEADING_BULLET.replace_all(&no_italic, "").trim().to_string()
}

/// Localiza `needle` em `haystack` ignorando caixa.
///
/// Retorna os offsets de byte `(start, end)` da primeira ocorrência.
/// A comparação é feita char a char com `to_lowercase`, sem mapear o
/// haystack inteiro para minúsculas (o remapeamento de índices seria
/// incorreto para pares de caixa multi-byte).
pub fn find_ignore_case(haystack: &str, needle: &str) -> Option<(usize, usize)> {
    if needle.is_empty() {
        return Some((0, 0));
    }

    let needle_chars: Vec<char> = needle.chars().collect();

    for (start, _) in haystack.char_indices() {
        let mut end = start;
        let mut rest = haystack[start..].chars();
        let mut matched = true;

        for &nc in &needle_chars {
            match rest.next() {
                Some(hc) if chars_eq_ignore_case(hc, nc) => end += hc.len_utf8(),
                _ => {
                    matched = false;
                    break;
                }
            }
        }

        if matched {
            return Some((start, end));
        }
    }

    None
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Verifica se `haystack` contém `needle`, ignorando caixa
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    find_ignore_case(haystack, needle).is_some()
}

/// Divide texto em sentenças preservando o terminador (. ! ? …).
///
/// Rust regex não suporta look-behind, então o split é manual,
/// caractere a caractere.
pub fn split_sentences(text: &str) -> Vec<String> {
    let terminators = ['.', '!', '?', '…'];
    let mut sentences = Vec::new();
    let mut current = String::new();

    for ch in text.chars() {
        current.push(ch);
        if terminators.contains(&ch) {
            let trimmed = current.trim();
            if !trimmed.is_empty() {
                sentences.push(trimmed.to_string());
            }
            current.clear();
        }
    }

    let trimmed = current.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }

    sentences
}

/// Conta palavras em um texto
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
