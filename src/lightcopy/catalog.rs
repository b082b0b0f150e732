// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// CATÁLOGO DE PASSOS LIGHT COPY
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// Os 7 passos semânticos do formato light copy, na ordem canônica.
// O splitter percorre esta lista; título e primeira palavra servem de
// âncora de busca no texto.
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Um passo do catálogo light copy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightCopyStep {
    /// Título canônico do passo (ex: "Gatilho de Antecipação")
    pub titulo: &'static str,
    /// Emoji exibido junto ao bloco
    pub emoji: &'static str,
    /// Descrição curta do papel do passo no roteiro
    pub descricao: &'static str,
}

impl LightCopyStep {
    /// Primeira palavra do título, usada como âncora alternativa de busca
    pub fn first_word(&self) -> &'static str {
        self.titulo.split_whitespace().next().unwrap_or(self.titulo)
    }
}

/// Os 7 passos do formato light copy, na ordem canônica do roteiro
pub const LIGHT_COPY_STEPS: &[LightCopyStep; 7] = &[
    LightCopyStep {
        titulo: "Gancho",
        emoji: "🎣",
        descricao: "Abertura que prende a atenção nos primeiros segundos",
    },
    LightCopyStep {
        titulo: "Storytelling",
        emoji: "📖",
        descricao: "História curta que cria conexão com o público",
    },
    LightCopyStep {
        titulo: "Prova",
        emoji: "🏆",
        descricao: "Evidência ou resultado que sustenta a promessa",
    },
    LightCopyStep {
        titulo: "Comando",
        emoji: "📢",
        descricao: "Chamada direta para a ação",
    },
    LightCopyStep {
        titulo: "Gatilho de Antecipação",
        emoji: "⏳",
        descricao: "Promessa do que vem a seguir",
    },
    LightCopyStep {
        titulo: "Analogia",
        emoji: "💡",
        descricao: "Comparação que torna a ideia concreta",
    },
    LightCopyStep {
        titulo: "Bordão",
        emoji: "🔁",
        descricao: "Frase de assinatura que fixa a marca",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_seven_steps() {
        assert_eq!(LIGHT_COPY_STEPS.len(), 7);
        assert_eq!(LIGHT_COPY_STEPS[0].titulo, "Gancho");
        assert_eq!(LIGHT_COPY_STEPS[6].titulo, "Bordão");
    }

    #[test]
    fn test_first_word() {
        assert_eq!(LIGHT_COPY_STEPS[4].titulo, "Gatilho de Antecipação");
        assert_eq!(LIGHT_COPY_STEPS[4].first_word(), "Gatilho");
        assert_eq!(LIGHT_COPY_STEPS[0].first_word(), "Gancho");
    }

    #[test]
    fn test_titles_are_unique() {
        for (i, a) in LIGHT_COPY_STEPS.iter().enumerate() {
            for b in &LIGHT_COPY_STEPS[i + 1..] {
                assert_ne!(a.titulo, b.titulo);
                assert_ne!(a.first_word(), b.first_word());
            }
        }
    }
}
