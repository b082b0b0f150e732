//! # Roteiro Parser
//!
//! Este crate transforma roteiros de marketing gerados por IA — texto
//! livre, possivelmente com markdown, emoji e cabeçalhos em português —
//! em estruturas renderizáveis, sem depender de schema do lado do
//! gerador: o formato do prompt upstream é engenharia reversa via
//! padrões.
//!
//! ## Pipelines
//!
//! Dois pipelines mutuamente exclusivos, selecionados por
//! [`lightcopy::is_light_copy`]:
//!
//! ### 1. Seções genéricas (`sections`)
//! Extrai as cinco seções lógicas de um diagnóstico de consultoria
//! (diagnóstico, ideias, plano, estratégias, sátira) com uma tabela de
//! padrões data-driven: variantes de cabeçalho em ordem de prioridade,
//! captura delimitada pelo próximo cabeçalho conhecido. Sucesso parcial
//! é o caso normal — campos sem match ficam vazios, nunca erro.
//!
//! ### 2. Light copy (`lightcopy`)
//! Fatia o texto nos 7 passos canônicos do formato light copy (Gancho,
//! Storytelling, Prova, Comando, Gatilho de Antecipação, Analogia,
//! Bordão), com blocos opcionais de Introdução e Finalização.
//!
//! ## Módulos de apoio
//!
//! - [`intent`]: roteia mensagens do usuário para buckets de intenção
//!   por scoring de keywords, com system prompt por bucket
//! - [`narration`]: limpeza e truncamento de texto para narração (TTS)
//! - [`config`]: limiares e limites, com overrides via ambiente
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use roteiro_parser::prelude::*;
//!
//! let raw = "DIAGNÓSTICO ESTRATÉGICO\nClínica focada em harmonização, \
//!            com presença digital fraca e sem rotina de conteúdo.";
//! let sections = parse_ai_diagnostic(raw).expect("entrada não vazia");
//! assert!(sections.diagnostico.contains("harmonização"));
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

/// Tipos fundamentais compartilhados por todo o sistema.
///
/// Este módulo define as estruturas de dados básicas como:
/// - [`types::ParsedSections`]: resultado da extração de seções
/// - [`types::LightCopyBlock`]: bloco do formato light copy
/// - [`types::ScriptMeta`]: metadados usados na seleção de pipeline
/// - [`types::SectionLabel`]: rótulos lógicos de seção
pub mod types;

/// Pipeline genérico de extração de seções.
///
/// Tabela de padrões por rótulo ([`sections::SECTION_SPECS`]), matcher
/// "primeira variante acima do limiar vence", extrator de itens de
/// lista e o fallback por keywords para estratégias.
pub mod sections;

/// Pipeline alternativo para roteiros "light copy" de 7 passos.
///
/// Catálogo fixo de passos ([`lightcopy::LIGHT_COPY_STEPS`]), splitter
/// por cursor e o seletor de pipeline [`lightcopy::is_light_copy`].
pub mod lightcopy;

/// Roteador de intenção por scoring de keywords.
///
/// Classifica mensagens em buckets ([`intent::IntentBucket`]) e expõe
/// o system prompt enlatado de cada bucket. Sem LLM: frases valem 2
/// pontos, palavras soltas 1, empate resolve por prioridade fixa.
pub mod intent;

/// Preparo de texto para narração (TTS).
///
/// Limpeza heurística ([`narration::clean_off_text`]) e truncamento
/// por orçamento de sentenças ([`narration::limit_to_duration`]).
pub mod narration;

/// Utilitários de texto compartilhados.
///
/// Normalização de markdown/bullets, busca case-insensitive e split
/// em sentenças.
pub mod utils;

/// Configuração do parser com overrides via variáveis de ambiente.
///
/// Variáveis suportadas (prefixo `ROTEIRO_`):
/// - `ROTEIRO_MIN_PROSE_LEN`: mínimo de caracteres para seções de prosa
/// - `ROTEIRO_MIN_LIST_LEN`: mínimo para seções de lista
/// - `ROTEIRO_MIN_ITEM_LEN`: mínimo por item de lista
/// - `ROTEIRO_MAX_IDEIAS`: máximo de ideias extraídas
/// - `ROTEIRO_MAX_ESTRATEGIAS`: máximo de estratégias extraídas
pub mod config;

// Re-exports principais
pub use config::{load_parser_config, ParserConfig};
pub use lightcopy::{is_light_copy, split_light_copy_blocks};
pub use sections::{parse_ai_diagnostic, parse_ai_diagnostic_with};
pub use types::*;

/// Versão da biblioteca.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude com imports comuns para uso rápido.
///
/// Importar tudo de uma vez:
/// ```rust
/// use roteiro_parser::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{load_parser_config, ParserConfig};
    pub use crate::intent::{route_intent, IntentBucket};
    pub use crate::lightcopy::{is_light_copy, split_light_copy_blocks, LIGHT_COPY_STEPS};
    pub use crate::narration::{clean_off_text, limit_to_duration};
    pub use crate::sections::{parse_ai_diagnostic, parse_ai_diagnostic_with};
    pub use crate::types::*;
    pub use crate::utils::clean_text;
}
