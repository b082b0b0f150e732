// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// SPLITTER DE BLOCOS LIGHT COPY
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// Percorre o texto com um cursor, na ordem do catálogo. O conteúdo de
// um passo termina no título de QUALQUER outro passo do catálogo (não
// só os posteriores); sem título à frente, termina na próxima quebra
// de parágrafo, para que prosa solta no fim vire bloco "Finalização".
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use crate::config::ParserConfig;
use crate::lightcopy::catalog::LIGHT_COPY_STEPS;
use crate::types::LightCopyBlock;
use crate::utils::find_ignore_case;

/// Divide um roteiro light copy em blocos, na ordem do catálogo.
///
/// Texto antes do primeiro passo encontrado vira bloco "Introdução"
/// (quando não vazio); sobra após o último passo com mais de 5
/// caracteres (trimmed) vira "Finalização". Se nenhum passo for
/// encontrado, retorna um único bloco sintético "Roteiro" com o texto
/// inteiro — nunca uma sequência vazia para entrada não vazia.
pub fn split_light_copy_blocks(text: &str) -> Vec<LightCopyBlock> {
    split_light_copy_blocks_with(text, &ParserConfig::default())
}

/// Variante de [`split_light_copy_blocks`] com configuração explícita
pub fn split_light_copy_blocks_with(text: &str, config: &ParserConfig) -> Vec<LightCopyBlock> {
    let mut blocks = Vec::new();
    let mut cursor = 0usize;
    let mut any_matched = false;

    for (step_index, step) in LIGHT_COPY_STEPS.iter().enumerate() {
        let remaining = &text[cursor..];
        let anchor = find_ignore_case(remaining, step.titulo)
            .or_else(|| find_ignore_case(remaining, step.first_word()));
        let Some((title_start, title_end)) = anchor else {
            continue;
        };

        // Texto antes do primeiro passo encontrado vira "Introdução";
        // nos passos seguintes é texto de fronteira, descartado
        if !any_matched {
            let intro = remaining[..title_start].trim();
            if !intro.is_empty() {
                blocks.push(LightCopyBlock {
                    titulo: "Introdução".to_string(),
                    conteudo: intro.to_string(),
                    emoji: "👋".to_string(),
                    descricao: "Abertura do roteiro".to_string(),
                });
            }
        }
        any_matched = true;

        let after = &remaining[title_end..];
        let content_end = content_boundary(after, step_index);
        let conteudo = clean_block_content(&after[..content_end]);

        log::debug!(
            "passo '{}' encontrado; conteúdo com {} chars",
            step.titulo,
            conteudo.chars().count()
        );

        blocks.push(LightCopyBlock {
            titulo: step.titulo.to_string(),
            conteudo,
            emoji: step.emoji.to_string(),
            descricao: step.descricao.to_string(),
        });

        cursor += title_end + content_end;
    }

    if !any_matched {
        log::debug!("nenhum passo do catálogo encontrado; bloco sintético");
        return vec![LightCopyBlock {
            titulo: "Roteiro".to_string(),
            conteudo: text.to_string(),
            emoji: "🎬".to_string(),
            descricao: String::new(),
        }];
    }

    let leftover = text[cursor..].trim();
    if leftover.chars().count() > config.min_finale_len {
        blocks.push(LightCopyBlock {
            titulo: "Finalização".to_string(),
            conteudo: leftover.to_string(),
            emoji: "🏁".to_string(),
            descricao: "Encerramento do roteiro".to_string(),
        });
    }

    blocks
}

/// Offset (em bytes de `after`) onde termina o conteúdo do passo atual.
///
/// Menor ocorrência de título/primeira palavra de qualquer OUTRO passo
/// do catálogo; sem ocorrência, a primeira quebra de parágrafo; sem
/// ambos, o fim do texto.
fn content_boundary(after: &str, current_step: usize) -> usize {
    let mut boundary = None;

    for (other_index, other) in LIGHT_COPY_STEPS.iter().enumerate() {
        if other_index == current_step {
            continue;
        }
        for needle in [other.titulo, other.first_word()] {
            if let Some((start, _)) = find_ignore_case(after, needle) {
                if boundary.map(|b| start < b).unwrap_or(true) {
                    boundary = Some(start);
                }
            }
        }
    }

    boundary
        .or_else(|| after.find("\n\n"))
        .unwrap_or(after.len())
}

/// Remove separadores de título (":" e traços) e espaços das bordas
fn clean_block_content(content: &str) -> String {
    content
        .trim_start_matches(|c: char| c == ':' || c == '-' || c == '–' || c.is_whitespace())
        .trim()
        .to_string()
}
