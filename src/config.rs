// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// CONFIGURAÇÃO DO PARSER
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// Limiares e limites de extração, com overrides via variáveis de
// ambiente (prefixo ROTEIRO_). Os defaults são o contrato do parser;
// os overrides existem para experimentação sem recompilar.
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Limiares e limites usados pela extração de seções.
///
/// Os valores default correspondem ao comportamento canônico:
/// seções de prosa exigem mais de 50 caracteres, itens de lista mais
/// de 20, ideias são limitadas a 4 e estratégias a 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Tamanho mínimo (trimmed) para uma seção de prosa valer o match.
    /// Padrão: 50
    pub min_prose_section_len: usize,

    /// Tamanho mínimo (trimmed) para uma seção em formato de lista.
    /// Padrão: 30
    pub min_list_section_len: usize,

    /// Tamanho mínimo (trimmed) de um item de lista.
    /// Itens com até este tamanho são descartados. Padrão: 20
    pub min_item_len: usize,

    /// Máximo de itens em `ideias`. Padrão: 4
    pub max_ideias: usize,

    /// Máximo de itens em `estrategias`. Padrão: 5
    pub max_estrategias: usize,

    /// Tamanho mínimo (trimmed) da sobra de texto para virar bloco
    /// "Finalização" no splitter light copy. Padrão: 5
    pub min_finale_len: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            min_prose_section_len: 50,
            min_list_section_len: 30,
            min_item_len: 20,
            max_ideias: 4,
            max_estrategias: 5,
            min_finale_len: 5,
        }
    }
}

/// Carrega a configuração do parser a partir das variáveis de ambiente.
///
/// Variáveis suportadas (todas opcionais, valores inválidos ignorados):
/// - `ROTEIRO_MIN_PROSE_LEN`: mínimo de caracteres para seções de prosa
/// - `ROTEIRO_MIN_LIST_LEN`: mínimo de caracteres para seções de lista
/// - `ROTEIRO_MIN_ITEM_LEN`: mínimo de caracteres por item de lista
/// - `ROTEIRO_MAX_IDEIAS`: máximo de ideias extraídas
/// - `ROTEIRO_MAX_ESTRATEGIAS`: máximo de estratégias extraídas
pub fn load_parser_config() -> ParserConfig {
    let mut config = ParserConfig::default();

    if let Some(len) = read_env_usize("ROTEIRO_MIN_PROSE_LEN") {
        config.min_prose_section_len = len;
    }
    if let Some(len) = read_env_usize("ROTEIRO_MIN_LIST_LEN") {
        config.min_list_section_len = len;
    }
    if let Some(len) = read_env_usize("ROTEIRO_MIN_ITEM_LEN") {
        config.min_item_len = len;
    }
    if let Some(max) = read_env_usize("ROTEIRO_MAX_IDEIAS") {
        config.max_ideias = max;
    }
    if let Some(max) = read_env_usize("ROTEIRO_MAX_ESTRATEGIAS") {
        config.max_estrategias = max;
    }

    config
}

fn read_env_usize(name: &str) -> Option<usize> {
    let raw = std::env::var(name).ok()?;
    match raw.parse::<usize>() {
        Ok(value) => {
            log::info!("📦 {}={}", name, value);
            Some(value)
        }
        Err(_) => {
            log::warn!("valor inválido para {}: {:?} (ignorado)", name, raw);
            None
        }
    }
}
