//! # Testes de Integração
//!
//! Validam o fluxo completo de parsing de roteiros:
//! - Seleção de pipeline (seções genéricas vs light copy)
//! - Extração de seções com listas e fallback de estratégias
//! - Invariantes de saída (caps, filtros de tamanho, degradação)

use roteiro_parser::prelude::*;

// ============================================================================
// CENÁRIO 1: Roteiro completo de diagnóstico
// Cabeçalhos reconhecidos produzem seções populadas e listas limpas
// ============================================================================

#[test]
fn test_full_diagnostic_script() {
    let raw = "DIAGNÓSTICO ESTRATÉGICO\n\
        Este é um texto de mais de cinquenta caracteres para testar a extração corretamente.\n\
        \n\
        IDEIAS DE CONTEÚDO PERSONALIZADAS\n\
        1. Primeira ideia com mais de vinte caracteres\n\
        2. Segunda ideia também longa o suficiente";

    let sections = parse_ai_diagnostic(raw).expect("entrada não vazia");

    assert!(sections.diagnostico.starts_with("Este é um texto"));
    assert!(!sections.diagnostico.contains("IDEIAS"));

    assert_eq!(sections.ideias.len(), 2);
    assert_eq!(sections.ideias[0], "Primeira ideia com mais de vinte caracteres");
    assert_eq!(sections.ideias[1], "Segunda ideia também longa o suficiente");
}

// ============================================================================
// CENÁRIO 2: Entrada sem cabeçalhos degrada para campos vazios
// ============================================================================

#[test]
fn test_unrecognized_input_degrades_gracefully() {
    let sections = parse_ai_diagnostic("texto qualquer sem nenhum cabeçalho reconhecido")
        .expect("entrada não vazia");

    assert!(sections.is_empty());
}

#[test]
fn test_empty_input_is_none() {
    assert!(parse_ai_diagnostic("").is_none());
}

// ============================================================================
// CENÁRIO 3: Todas as cinco seções de um diagnóstico real
// ============================================================================

#[test]
fn test_five_sections_extracted() {
    let raw = "DIAGNÓSTICO ESTRATÉGICO\n\
        Clínica de estética focada em harmonização facial, com presença digital fraca e pouca constância de conteúdo.\n\
        \n\
        IDEIAS DE CONTEÚDO PERSONALIZADAS\n\
        1. Série de mitos e verdades sobre harmonização facial\n\
        2. Bastidores de um atendimento completo na clínica\n\
        3. Depoimento de paciente com antes e depois comentado\n\
        \n\
        PLANO DE AÇÃO\n\
        Semana 1: gravar três vídeos curtos. Semana 2: publicar depoimentos. Semana 3: abrir agenda de avaliações.\n\
        \n\
        ESTRATÉGIAS PERSONALIZADAS\n\
        - Construir autoridade com conteúdo educativo semanal\n\
        - Mostrar casos reais com consentimento dos pacientes\n\
        \n\
        SÁTIRA DO MENTOR\n\
        Ah, então você posta uma vez por mês e espera lotar a agenda? Interessante estratégia, doutora.";

    let sections = parse_ai_diagnostic(raw).expect("entrada não vazia");

    assert!(sections.diagnostico.contains("harmonização facial"));
    assert_eq!(sections.ideias.len(), 3);
    assert!(sections.plano.starts_with("Semana 1"));
    assert_eq!(sections.estrategias.len(), 2);
    assert!(sections.estrategias[0].starts_with("Construir autoridade"));
    assert!(sections.satira.contains("lotar a agenda"));
}

// ============================================================================
// CENÁRIO 4: Invariantes de caps e filtros
// ============================================================================

#[test]
fn test_output_caps_and_length_filters() {
    let mut raw = String::from("IDEIAS DE CONTEÚDO\n");
    for i in 1..=8 {
        raw.push_str(&format!("{}. Ideia de conteúdo número {} acima do filtro\n", i, i));
    }
    raw.push_str("ESTRATÉGIAS PERSONALIZADAS\n");
    for i in 1..=8 {
        raw.push_str(&format!("{}. Estratégia de marketing número {} acima do filtro\n", i, i));
    }

    let sections = parse_ai_diagnostic(&raw).expect("entrada não vazia");

    assert!(sections.ideias.len() <= 4);
    assert!(sections.estrategias.len() <= 5);
    for item in sections.ideias.iter().chain(sections.estrategias.iter()) {
        assert!(item.trim().chars().count() > 20);
    }
}

// ============================================================================
// CENÁRIO 5: Fallback de estratégias varre o roteiro inteiro
// ============================================================================

#[test]
fn test_strategies_fallback_scans_whole_script() {
    // Sem cabeçalho de estratégias: linhas com bullet + keyword qualificam,
    // mesmo vindas de outras partes do texto
    let raw = "DIAGNÓSTICO ESTRATÉGICO\n\
        A clínica precisa de rotina de publicações e mais proximidade com a audiência local.\n\
        - apostar em marketing de indicação\n\
        - criar conteúdo educativo quinzenal";

    let sections = parse_ai_diagnostic(raw).expect("entrada não vazia");

    assert_eq!(sections.estrategias.len(), 2);
    assert_eq!(sections.estrategias[0], "apostar em marketing de indicação");
}

// ============================================================================
// CENÁRIO 6: Seleção de pipeline e split light copy
// ============================================================================

#[test]
fn test_pipeline_selection_by_meta() {
    assert!(is_light_copy(&ScriptMeta::new("Leandro Ladeira", "vídeo")));
    assert!(is_light_copy(&ScriptMeta::new("Wanessa", "LIGHT copy")));
    assert!(!is_light_copy(&ScriptMeta::new("Wanessa", "documentário")));
}

#[test]
fn test_light_copy_end_to_end() {
    let text = "Gancho: Sua pele merece mais do que filtro.\n\
        Storytelling: A Ana chegou aqui sem coragem de tirar foto de perfil.\n\
        Prova: Três meses depois, ela voltou só para mostrar o novo emprego.\n\
        Comando: Agende sua avaliação pelo link da bio.\n\
        \n\
        Compartilhe este vídeo com quem precisa ouvir isso hoje.";

    let blocks = split_light_copy_blocks(text);
    let titulos: Vec<&str> = blocks.iter().map(|b| b.titulo.as_str()).collect();

    assert_eq!(titulos, vec!["Gancho", "Storytelling", "Prova", "Comando", "Finalização"]);
    assert!(blocks.iter().all(|b| !b.emoji.is_empty()));
    assert!(blocks.last().unwrap().conteudo.starts_with("Compartilhe"));
}

#[test]
fn test_light_copy_never_empty() {
    let blocks = split_light_copy_blocks("nenhum passo conhecido neste texto");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].titulo, "Roteiro");
}

// ============================================================================
// CENÁRIO 7: Normalização é idempotente e segura
// ============================================================================

#[test]
fn test_clean_text_scenario() {
    let cleaned = clean_text("**Olá** *mundo*\n- item");
    assert_eq!(cleaned, "Olá mundo\nitem");
    assert_eq!(clean_text(&cleaned), cleaned);
}

// ============================================================================
// CENÁRIO 8: Roteador de intenção e preparo de narração encadeados
// ============================================================================

#[test]
fn test_intent_to_narration_flow() {
    let message = "Preciso de um roteiro de vídeo sobre limpeza de pele";
    let bucket = route_intent(message);
    assert_eq!(bucket, IntentBucket::Roteiro);
    assert!(bucket.system_prompt().contains("roteirista"));

    let script = "**Gancho** 🎣: Sua pele fala por você. [pausa] Cuide dela todos os dias. E volte aqui amanhã para a parte dois.";
    let narration = clean_off_text(script);
    assert!(!narration.contains('*'));
    assert!(!narration.contains('['));

    let limited = limit_to_duration(&narration, 4);
    assert!(limited.split_whitespace().count() <= 10 || limited.ends_with('.'));
}
