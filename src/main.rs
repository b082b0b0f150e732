// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// ROTEIRO CLI
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// CLI para extrair seções estruturadas de roteiros gerados por IA.
//
// Uso:
//   roteiro-cli roteiro.txt
//   roteiro-cli --mentor "Leandro Ladeira" roteiro.txt   (pipeline light copy)
//   roteiro-cli --intent -                               (roteia stdin por intenção)
//   roteiro-cli a.txt b.txt c.txt                        (lote, em paralelo)
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use std::io::Read;

use rayon::prelude::*;
use serde_json::json;
use thiserror::Error;

use roteiro_parser::prelude::*;

/// Erro ao carregar uma entrada da CLI
#[derive(Debug, Error)]
enum InputError {
    /// Arquivo (ou stdin) não pôde ser lido
    #[error("falha ao ler {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Opções reconhecidas pela CLI
#[derive(Debug, Default)]
struct CliOptions {
    light: bool,
    intent: bool,
    pretty: bool,
    tts: Option<u32>,
    mentor: Option<String>,
    formato: Option<String>,
    inputs: Vec<String>,
}

fn print_usage(program: &str) {
    eprintln!("Roteiro CLI v{}", roteiro_parser::VERSION);
    eprintln!();
    eprintln!("Uso: {} [opções] <arquivo ...|->", program);
    eprintln!();
    eprintln!("Opções:");
    eprintln!("  --light            Força o pipeline light copy");
    eprintln!("  --mentor <nome>    Mentor do roteiro (afeta a seleção de pipeline)");
    eprintln!("  --formato <fmt>    Formato declarado do roteiro");
    eprintln!("  --intent           Roteia a entrada pelo roteador de intenção");
    eprintln!("  --tts <segundos>   Prepara a entrada para narração com duração alvo");
    eprintln!("  --pretty           JSON indentado na saída");
    eprintln!();
    eprintln!("Exemplos:");
    eprintln!("  {} diagnostico.txt", program);
    eprintln!("  {} --mentor \"Leandro Ladeira\" roteiro.txt", program);
    eprintln!("  cat roteiro.txt | {} -", program);
}

fn parse_args(args: &[String]) -> Option<CliOptions> {
    let mut options = CliOptions::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--light" => options.light = true,
            "--intent" => options.intent = true,
            "--pretty" => options.pretty = true,
            "--tts" => options.tts = Some(iter.next()?.parse().ok()?),
            "--mentor" => options.mentor = Some(iter.next()?.clone()),
            "--formato" => options.formato = Some(iter.next()?.clone()),
            _ => options.inputs.push(arg.clone()),
        }
    }

    if options.inputs.is_empty() {
        return None;
    }

    Some(options)
}

fn read_input(path: &str) -> Result<String, InputError> {
    if path == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|source| InputError::Io {
                path: "stdin".to_string(),
                source,
            })?;
        return Ok(text);
    }

    std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_string(),
        source,
    })
}

/// Processa uma entrada já lida e devolve o JSON de saída
fn process_text(text: &str, options: &CliOptions, config: &ParserConfig) -> serde_json::Value {
    if options.intent {
        let bucket = route_intent(text);
        return json!({
            "intent": bucket.as_str(),
            "system_prompt": bucket.system_prompt(),
        });
    }

    if let Some(seconds) = options.tts {
        let narration = limit_to_duration(&clean_off_text(text), seconds);
        return json!({
            "narration": narration,
            "max_seconds": seconds,
        });
    }

    let meta = ScriptMeta {
        mentor: options.mentor.clone(),
        formato: options.formato.clone(),
    };

    if options.light || is_light_copy(&meta) {
        let blocks = roteiro_parser::lightcopy::split_light_copy_blocks_with(text, config);
        json!({
            "pipeline": "light_copy",
            "blocks": blocks,
        })
    } else {
        json!({
            "pipeline": "sections",
            "sections": parse_ai_diagnostic_with(text, config),
        })
    }
}

fn render(value: &serde_json::Value, pretty: bool) -> anyhow::Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(rendered)
}

fn main() -> anyhow::Result<()> {
    // .env primeiro, para os overrides ROTEIRO_* valerem no load
    let _ = dotenvy::dotenv();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    let Some(options) = parse_args(&args[1..]) else {
        print_usage(&args[0]);
        std::process::exit(1);
    };

    let config = load_parser_config();

    // Leitura é sequencial (stdin não paraleliza); o parse é CPU-bound
    // e roda em paralelo no modo lote
    let mut texts = Vec::new();
    for path in &options.inputs {
        texts.push((path.clone(), read_input(path)?));
    }

    if texts.len() == 1 {
        let (_, text) = &texts[0];
        println!("{}", render(&process_text(text, &options, &config), options.pretty)?);
        return Ok(());
    }

    let results: Vec<serde_json::Value> = texts
        .par_iter()
        .map(|(path, text)| {
            let mut value = process_text(text, &options, &config);
            if let Some(object) = value.as_object_mut() {
                object.insert("file".to_string(), json!(path));
            }
            value
        })
        .collect();

    for value in &results {
        println!("{}", render(value, options.pretty)?);
    }

    Ok(())
}
