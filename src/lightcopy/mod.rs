// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// PIPELINE LIGHT COPY
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// Pipeline alternativo ao de seções genéricas, mutuamente exclusivo,
// para roteiros no formato "light copy" de 7 passos. A seleção é por
// tag (substring em formato/mentor), não uma máquina de estados.
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

mod catalog;
mod splitter;

pub use catalog::{LightCopyStep, LIGHT_COPY_STEPS};
pub use splitter::{split_light_copy_blocks, split_light_copy_blocks_with};

use crate::types::ScriptMeta;
use crate::utils::contains_ignore_case;

/// Decide se o roteiro usa o pipeline light copy.
///
/// Verdadeiro quando o formato declarado contém "light" ou o mentor
/// contém "ladeira" (substring, case-insensitive). Campos ausentes
/// contam como não-match.
pub fn is_light_copy(meta: &ScriptMeta) -> bool {
    let formato_light = meta
        .formato
        .as_deref()
        .map(|formato| contains_ignore_case(formato, "light"))
        .unwrap_or(false);

    let mentor_ladeira = meta
        .mentor
        .as_deref()
        .map(|mentor| contains_ignore_case(mentor, "ladeira"))
        .unwrap_or(false);

    formato_light || mentor_ladeira
}
