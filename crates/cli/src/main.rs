#![deny(warnings)]

use anyhow::Context;
use bytes::Bytes;
use clap::{ArgGroup, Parser};
use sentimiento_core::classify::subjectivity_band;
use sentimiento_core::config::{
    resolve_api_key, ApiKeys, AppConfig, Env, LangCode, LanguagePair, StdEnv,
    DEFAULT_HISTORY_CAPACITY, DEFAULT_SOURCE_LANG, DEFAULT_SPEECH_LANG, DEFAULT_TARGET_LANG,
    ENV_DEEPL_API_KEY, ENV_SPEECH_API_KEY,
};
use sentimiento_core::history::History;
use sentimiento_core::pipeline::{
    AnalysisPipeline, AnalysisRequest, AnalysisResult, AnalyzeError, PipelineConfig,
    ValidationError,
};
use sentimiento_core::score::{LexiconScorer, SentimentScorer};
use sentimiento_core::session::Session;
use sentimiento_core::speech::{
    GoogleSpeechTranscriber, SpeechTranscriber, TranscribeError, DEFAULT_SPEECH_API_KEY,
};
use sentimiento_core::translate::{DeepLTranslator, GoogleTranslator, Translator};
use std::io::Write as _;
use std::path::{Path, PathBuf};
use tokio::io::AsyncBufReadExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "sentimiento")]
#[command(about = "Spanish sentiment analysis (Translate->Score->Classify)")]
#[command(group(
    ArgGroup::new("input")
        .required(true)
        .multiple(false)
        .args(["text", "audio", "interactive"])
))]
struct Args {
    /// Spanish text to analyze.
    #[arg(long)]
    text: Option<String>,

    /// Path to a FLAC recording to transcribe and analyze.
    #[arg(long)]
    audio: Option<PathBuf>,

    /// Read lines from stdin and analyze each one.
    #[arg(long)]
    interactive: bool,

    #[arg(long, default_value = DEFAULT_SOURCE_LANG)]
    source_lang: String,

    #[arg(long, default_value = DEFAULT_TARGET_LANG)]
    target_lang: String,

    #[arg(long, default_value = DEFAULT_SPEECH_LANG)]
    speech_lang: String,

    #[arg(long)]
    deepl_api_key: Option<String>,

    #[arg(long)]
    speech_api_key: Option<String>,

    #[arg(long, default_value_t = DEFAULT_HISTORY_CAPACITY)]
    history_capacity: usize,

    /// Print results as JSON instead of the formatted card.
    #[arg(long)]
    json: bool,

    #[arg(long, default_value = "info")]
    log_level: String,
}

enum InputMode {
    Text(String),
    Audio(PathBuf),
    Interactive,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level)?;

    let env = StdEnv;
    let json = args.json;
    let (cfg, mode) = build_config(args, &env)?;

    tracing::info!(
        source_lang = %cfg.languages.source,
        target_lang = %cfg.languages.target,
        history_capacity = cfg.history_capacity,
        "config loaded"
    );

    run(cfg, mode, json).await?;

    Ok(())
}

async fn run(cfg: AppConfig, mode: InputMode, json: bool) -> anyhow::Result<()> {
    // DeepL when a key is configured, otherwise the keyless endpoint
    if let Some(deepl_key) = cfg.api_keys.deepl.clone() {
        let translator = DeepLTranslator::new(deepl_key.expose().to_string());
        run_mode(translator, cfg, mode, json).await
    } else {
        let translator = GoogleTranslator::new();
        run_mode(translator, cfg, mode, json).await
    }
}

async fn run_mode<Tr>(translator: Tr, cfg: AppConfig, mode: InputMode, json: bool) -> anyhow::Result<()>
where
    Tr: Translator,
{
    let scorer = LexiconScorer::new();
    let pipeline = AnalysisPipeline {
        translator,
        scorer,
        config: PipelineConfig::from_app(&cfg),
    };

    match mode {
        InputMode::Text(text) => run_single(&pipeline, text, json).await,
        InputMode::Audio(path) => {
            let text = transcribe_file(&cfg, &path).await?;
            run_single(&pipeline, text, json).await
        }
        InputMode::Interactive => run_interactive(&pipeline, &cfg, json).await,
    }
}

async fn run_single<Tr, Sc>(
    pipeline: &AnalysisPipeline<Tr, Sc>,
    text: String,
    json: bool,
) -> anyhow::Result<()>
where
    Tr: Translator,
    Sc: SentimentScorer,
{
    let result = pipeline.analyze(AnalysisRequest::new(text)).await?;
    print_output(&result, json)?;
    Ok(())
}

async fn run_interactive<Tr, Sc>(
    pipeline: &AnalysisPipeline<Tr, Sc>,
    cfg: &AppConfig,
    json: bool,
) -> anyhow::Result<()>
where
    Tr: Translator,
    Sc: SentimentScorer,
{
    let mut session = Session::new(cfg.history_capacity);
    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();

    println!("🎤 Analizador de Sentimientos");
    println!("Escribe un texto en español y presiona Enter (Ctrl-D para salir).");

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        session.set_input_text(line);

        let request = AnalysisRequest::new(session.input_text());
        match pipeline.analyze(request).await {
            Ok(result) => {
                session.record(&result);
                print_output(&result, json)?;
                if !json {
                    print_history(session.history());
                }
            }
            Err(AnalyzeError::Validation(e)) => {
                println!("⚠️ {}", validation_message(&e));
            }
            Err(e) => {
                tracing::error!(error = %e, "analysis failed");
                println!("❌ Error al analizar el texto: {e}");
            }
        }
    }

    Ok(())
}

async fn transcribe_file(cfg: &AppConfig, path: &Path) -> anyhow::Result<String> {
    let audio = tokio::fs::read(path)
        .await
        .with_context(|| format!("reading audio file {}", path.display()))?;

    let key = cfg
        .api_keys
        .speech
        .as_ref()
        .map(|k| k.expose().to_string())
        .unwrap_or_else(|| DEFAULT_SPEECH_API_KEY.to_string());
    let transcriber = GoogleSpeechTranscriber::new(key);

    let transcript = match transcriber
        .transcribe(Bytes::from(audio), cfg.speech_lang.clone())
        .await
    {
        Ok(t) => t,
        Err(e @ TranscribeError::NoSpeechDetected) => {
            println!("🔇 No se detectó voz en el audio. Intenta grabar de nuevo.");
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };
    tracing::info!(confidence = ?transcript.confidence, "speech transcribed");
    println!("🎙️ Texto reconocido: {}", transcript.text);

    Ok(transcript.text)
}

fn print_output(result: &AnalysisResult, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        print_result(result);
    }
    Ok(())
}

fn print_result(result: &AnalysisResult) {
    let label = result.label;
    let band = subjectivity_band(result.subjectivity);

    println!();
    println!("📊 Resultados del Análisis");
    println!();
    println!("📝 Texto analizado: \"{}\"", result.source_text);
    println!();
    println!("   {}  {}", label.emoji(), label);
    println!("   {}", label.description());
    println!("   Nivel de confianza: {:.2}", result.confidence());
    println!();
    println!(
        "📊 Polaridad emocional: {:+.3}  {}",
        result.polarity,
        gauge(result.polarity_percent())
    );
    println!("   Rango: -1.0 (muy negativo) hasta +1.0 (muy positivo)");
    println!(
        "🎭 Subjetividad: {}%  {}",
        result.subjectivity_percent(),
        gauge(result.subjectivity_percent())
    );
    println!("   0% = objetivo/factual, 100% = opinión personal");
    println!("   {} {}", band, band.description());
    println!();
    println!("🌐 Traducción al inglés: {}", result.translated_text);
}

fn print_history(history: &History) {
    if history.is_empty() {
        return;
    }
    println!();
    println!("📜 Historial de Análisis");
    for entry in history.iter() {
        println!(
            "   {} {} - {}",
            entry.label.emoji(),
            entry.label,
            entry.truncated_text
        );
    }
}

/// 20-cell bar for a 0..=100 percentage.
fn gauge(percent: u8) -> String {
    let filled = usize::from(percent.min(100)) / 5;
    format!("[{}{}]", "█".repeat(filled), "░".repeat(20 - filled))
}

fn validation_message(err: &ValidationError) -> String {
    match err {
        ValidationError::Empty => "Por favor, escribe un mensaje para analizar.".to_owned(),
        ValidationError::TooShort { min, .. } => {
            format!("Por favor, escribe un mensaje más largo (al menos {min} caracteres)")
        }
    }
}

fn init_tracing(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(
            level
                .parse()
                .with_context(|| format!("invalid --log-level: {level}"))?,
        )
        .from_env_lossy();

    tracing_subscriber::fmt().with_env_filter(filter).init();
    Ok(())
}

fn build_config(args: Args, env: &impl Env) -> anyhow::Result<(AppConfig, InputMode)> {
    let mode = match (args.text, args.audio, args.interactive) {
        (Some(t), None, false) => InputMode::Text(t),
        (None, Some(p), false) => InputMode::Audio(p),
        (None, None, true) => InputMode::Interactive,
        _ => anyhow::bail!("exactly one of --text, --audio or --interactive must be provided"),
    };

    let languages = LanguagePair::new(
        LangCode::new(args.source_lang)?,
        LangCode::new(args.target_lang)?,
    );
    let speech_lang = LangCode::new(args.speech_lang)?;

    let deepl = resolve_api_key(args.deepl_api_key, ENV_DEEPL_API_KEY, env)?;
    let speech = resolve_api_key(args.speech_api_key, ENV_SPEECH_API_KEY, env)?;

    anyhow::ensure!(
        args.history_capacity > 0,
        "--history-capacity must be greater than zero"
    );

    Ok((
        AppConfig {
            languages,
            speech_lang,
            api_keys: ApiKeys { deepl, speech },
            history_capacity: args.history_capacity,
        },
        mode,
    ))
}
