// Interactive completion REPL
// Type a line to see what would be suggested at its end.

use clap::Parser;
use complement_core::{CompletionEngine, EngineConfig, Suggestion, TokenizeStrategy, Word, WordType};
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use crossterm::{cursor::MoveTo, execute};
use std::fs;
use std::io::{stdin, stdout, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Word-completion REPL over a document and a custom dictionary
#[derive(Parser, Debug)]
#[command(name = "complement-repl")]
#[command(about = "Try the completion engine against your own text", long_about = None)]
struct Args {
    /// JSON engine configuration
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Tokenize strategy (default, english-only, japanese, arabic, korean)
    #[arg(short, long)]
    strategy: Option<String>,

    /// Text file indexed as the current file
    #[arg(short, long, value_name = "FILE")]
    document: Option<PathBuf>,

    /// Custom dictionary: one word per line, then optional tab-separated
    /// description and aliases
    #[arg(long, value_name = "FILE")]
    dictionary: Option<PathBuf>,

    /// Selection history file (.json or binary), enables history ranking
    #[arg(long, value_name = "FILE")]
    history: Option<PathBuf>,

    /// Maximum number of suggestions
    #[arg(short, long)]
    max: Option<usize>,
}

fn parse_dictionary(raw: &str) -> Vec<Word> {
    raw.lines()
        .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let mut columns = line.split('\t');
            let value = columns.next()?.trim();
            let mut word = Word::new(value, WordType::CustomDictionary);
            if let Some(description) = columns.next().filter(|d| !d.is_empty()) {
                word = word.with_description(description);
            }
            Some(word.with_aliases(columns.map(str::trim)))
        })
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("warn".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => EngineConfig::from_json_file(path)?,
        None => EngineConfig::default(),
    };
    if let Some(strategy) = &args.strategy {
        config.tokenizer.strategy = strategy.parse::<TokenizeStrategy>()?;
    }
    if let Some(max) = args.max {
        config.matching.max_number_of_suggestions = max;
    }

    let mut engine = match &args.history {
        Some(path) => CompletionEngine::from_history_file_or_new(config, None, path)?,
        None => CompletionEngine::new(config, None)?,
    };

    if let Some(path) = &args.document {
        let text = fs::read_to_string(path)?;
        let words = engine.words_from_text(&text, WordType::CurrentFile, &path.display().to_string());
        info!(words = words.len(), "indexed document");
        engine.build_index(WordType::CurrentFile, words);
    }
    if let Some(path) = &args.dictionary {
        let words = parse_dictionary(&fs::read_to_string(path)?);
        info!(words = words.len(), "indexed dictionary");
        engine.build_index(WordType::CustomDictionary, words);
    }

    let mut line = String::new();
    let mut suggestions: Vec<Suggestion> = Vec::new();

    loop {
        print_ui(&line, &suggestions)?;

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break;
        }
        let cmd = input.trim_end_matches(['\r', '\n']);

        match cmd {
            "exit" => break,
            s if s.starts_with(':') && s.len() > 1 => {
                // Accept suggestion :1, :2 etc
                let picked = s[1..].parse::<usize>().ok().and_then(|n| n.checked_sub(1));
                if let Some(chosen) = picked.and_then(|i| suggestions.get(i)).cloned() {
                    engine.record_selection(&chosen);
                    let offset = chosen.offset.unwrap_or(0);
                    line.truncate(offset);
                    line.push_str(chosen.value());
                    suggestions.clear();
                }
            }
            s => {
                line = s.to_string();
                suggestions = engine.suggest_at_cursor(&line);
            }
        }
    }

    match engine.save_history() {
        Ok(true) => println!("\nSelection history saved."),
        Ok(false) => {}
        Err(e) => eprintln!("[ERROR] Could not save selection history: {}", e),
    }
    Ok(())
}

fn print_ui(line: &str, suggestions: &[Suggestion]) -> std::io::Result<()> {
    let mut out = stdout();
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    println!("{}", "Completion REPL".bold());
    println!("---------------------------------------------------------------");
    println!("Type a line to complete its end. Accept with ':1', ':2'. 'exit' to save and quit.\n");

    println!("Line: [{}]", line);
    if suggestions.is_empty() {
        println!("\n{}", "No suggestions.".dark_grey());
    } else {
        println!("\nSuggestions:");
        for (i, s) in suggestions.iter().enumerate() {
            let via = if s.matched_via_alias { format!(" via {}", s.hit) } else { String::new() };
            let fuzzy = if s.fuzzy { " ~" } else { "" };
            println!(
                "  :{}: {}{}{} {}",
                i + 1,
                s.value().bold(),
                via,
                fuzzy,
                format!("({})", s.word_type()).dark_grey()
            );
        }
    }
    print!("\n> ");
    out.flush()
}
