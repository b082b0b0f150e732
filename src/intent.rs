// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// ROTEADOR DE INTENÇÃO
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// Classifica a mensagem do usuário em um bucket de intenção por
// scoring de frases e palavras-chave, sem LLM. Frases valem 2 pontos,
// palavras soltas 1; maior score vence, empate resolve pela ordem fixa
// das regras; score zero cai no bucket Geral.
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Bucket de intenção detectado na mensagem do usuário
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentBucket {
    /// Pedido de ideias de conteúdo/pautas
    IdeiasConteudo,
    /// Pedido de roteiro de vídeo
    Roteiro,
    /// Estratégia de marketing/posicionamento
    Estrategia,
    /// Captação e conversão de pacientes
    Vendas,
    /// Comunicação institucional da clínica
    Institucional,
    /// Nenhuma intenção específica detectada
    Geral,
}

impl IntentBucket {
    /// Retorna o bucket como string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IdeiasConteudo => "ideias_conteudo",
            Self::Roteiro => "roteiro",
            Self::Estrategia => "estrategia",
            Self::Vendas => "vendas",
            Self::Institucional => "institucional",
            Self::Geral => "geral",
        }
    }

    /// System prompt associado ao bucket
    pub fn system_prompt(&self) -> &'static str {
        match self {
            Self::IdeiasConteudo => {
                "Você é um consultor de marketing para clínicas de estética. \
                 Sugira pautas e ideias de conteúdo específicas para o perfil \
                 da clínica, com formato e objetivo de cada pauta."
            }
            Self::Roteiro => {
                "Você é um roteirista especializado em vídeos curtos para \
                 clínicas de estética. Produza roteiros com gancho forte, \
                 linguagem falada e chamada para ação clara."
            }
            Self::Estrategia => {
                "Você é um estrategista de marketing médico. Analise o \
                 posicionamento da clínica e proponha estratégias de \
                 autoridade, conteúdo e relacionamento."
            }
            Self::Vendas => {
                "Você é um consultor de captação para clínicas de estética. \
                 Foque em conversão: ofertas, follow-up de leads e jornada do \
                 paciente até a avaliação."
            }
            Self::Institucional => {
                "Você é um consultor de comunicação institucional para \
                 clínicas. Ajude com apresentação da equipe, espaço físico e \
                 diferenciais, em tom profissional e acolhedor."
            }
            Self::Geral => {
                "Você é um consultor de marketing para clínicas de estética. \
                 Responda de forma prática e direta, sempre contextualizando \
                 para a realidade de clínicas."
            }
        }
    }
}

/// Regra de uma intenção: frases compostas valem 2, palavras soltas 1
struct IntentRule {
    bucket: IntentBucket,
    phrases: &'static [&'static str],
    keywords: &'static [&'static str],
}

/// Regras em ordem de prioridade (desempate pela posição)
const INTENT_RULES: &[IntentRule] = &[
    IntentRule {
        bucket: IntentBucket::Roteiro,
        phrases: &["roteiro de vídeo", "roteiro para reels", "escreva um roteiro"],
        keywords: &["roteiro", "vídeo", "reels", "gravação", "falar na câmera"],
    },
    IntentRule {
        bucket: IntentBucket::IdeiasConteudo,
        phrases: &["ideias de conteúdo", "o que postar", "sugestão de pauta"],
        keywords: &["ideias", "pauta", "postagem", "conteúdo", "calendário"],
    },
    IntentRule {
        bucket: IntentBucket::Estrategia,
        phrases: &["estratégia de marketing", "plano de marketing", "como me posicionar"],
        keywords: &["estratégia", "posicionamento", "autoridade", "crescer", "engajamento"],
    },
    IntentRule {
        bucket: IntentBucket::Vendas,
        phrases: &["captar pacientes", "fechar mais avaliações", "converter leads"],
        keywords: &["vendas", "captação", "leads", "agendamento", "promoção"],
    },
    IntentRule {
        bucket: IntentBucket::Institucional,
        phrases: &["apresentar a clínica", "sobre a equipe"],
        keywords: &["institucional", "equipe", "estrutura", "história", "missão"],
    },
];

/// Classifica uma mensagem em um bucket de intenção.
///
/// Implementa as regras por keywords sem depender de LLM, no mesmo
/// espírito da rotina de análise de perguntas: scoring simples e
/// determinístico, com `Geral` como fallback.
pub fn route_intent(message: &str) -> IntentBucket {
    let lower = message.to_lowercase();

    let mut best = IntentBucket::Geral;
    let mut best_score = 0usize;

    for rule in INTENT_RULES {
        let phrase_hits = rule.phrases.iter().filter(|p| lower.contains(*p)).count();
        let keyword_hits = rule.keywords.iter().filter(|k| lower.contains(*k)).count();
        let score = phrase_hits * 2 + keyword_hits;

        log::debug!("intenção {}: score {}", rule.bucket.as_str(), score);

        // Empate mantém a regra anterior (ordem de prioridade)
        if score > best_score {
            best = rule.bucket;
            best_score = score;
        }
    }

    best
}
