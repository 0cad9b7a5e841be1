use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tigspell::cli::output::{self, OutputFormat, PromptAction};
use tigspell::{dict, CheckResult, Config, SpellChecker};

#[derive(Parser, Debug)]
#[command(name = "tigspell")]
#[command(version, about = "A spell checker for the Tigrigna language", long_about = None)]
struct Cli {
    /// Files to check
    #[arg(value_name = "FILES")]
    files: Vec<PathBuf>,

    /// Check a text given directly on the command line
    #[arg(short, long)]
    text: Option<String>,

    /// Print word statistics for each input
    #[arg(short, long)]
    stats: bool,

    /// Interactive mode for selecting corrections
    #[arg(short, long)]
    interactive: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if errors are found
    #[arg(long)]
    no_fail: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Dictionary word-list file
    #[arg(short, long)]
    dictionary: Option<PathBuf>,

    /// Maximum edit distance for suggestions
    #[arg(long)]
    max_distance: Option<usize>,

    /// Maximum number of suggestions per word
    #[arg(long)]
    max_suggestions: Option<usize>,

    /// Add words to the dictionary
    #[arg(long)]
    add_to_dict: Vec<String>,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Dictionary management
    Dict {
        #[command(subcommand)]
        action: DictCommands,
    },
}

#[derive(Parser, Debug)]
enum DictCommands {
    /// Scan a corpus file or directory and add unseen words
    Ingest {
        /// Corpus file, or directory of .txt files
        corpus: PathBuf,
    },
    /// Add words to the dictionary
    Add {
        /// Words to add
        words: Vec<String>,
    },
    /// Show dictionary info
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "tigspell", &mut io::stdout());
        return Ok(());
    }

    // Load configuration
    let config = Config::load(
        cli.dictionary.clone(),
        cli.max_distance,
        cli.max_suggestions,
    )?;

    // Handle subcommands
    if let Some(command) = cli.command {
        return handle_command(command, &config);
    }

    // Validate input
    if cli.files.is_empty() && cli.text.is_none() && cli.add_to_dict.is_empty() {
        anyhow::bail!("No input given. Pass files, --text, or --add-to-dict. Use --help for usage.");
    }

    // Initialize checker
    let mut checker = SpellChecker::new(&config);

    for word in &cli.add_to_dict {
        checker.add_word(word);
    }

    // Process inputs
    let mut total_errors = 0;
    let mut sources = 0;

    if let Some(text) = cli.text.clone() {
        sources += 1;
        total_errors += process_input("<text>", &text, None, &mut checker, &cli)?;
    }

    for file_path in &cli.files {
        if !file_path.exists() {
            eprintln!("Error: File not found: {}", file_path.display());
            continue;
        }

        let content = fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))?;

        sources += 1;
        let source = file_path.display().to_string();
        total_errors += process_input(&source, &content, Some(file_path), &mut checker, &cli)?;
    }

    // Print summary
    if sources > 0 && matches!(cli.format, OutputFormat::Text) {
        output::print_check_summary(total_errors, sources, !cli.no_color);
    }

    // Exit with appropriate code
    if total_errors > 0 && !cli.no_fail && !cli.interactive {
        std::process::exit(1);
    }

    Ok(())
}

/// Check one input, report it, and return the number of remaining errors.
fn process_input(
    source: &str,
    content: &str,
    path: Option<&Path>,
    checker: &mut SpellChecker,
    cli: &Cli,
) -> Result<usize> {
    let colored = !cli.no_color;
    let results = checker.check(content);

    let errors = if cli.interactive {
        run_interactive(content, path, checker, &results, colored)?
    } else {
        output::print_results(source, &results, colored, &cli.format);
        results.iter().filter(|r| !r.is_correct).count()
    };

    if cli.stats {
        let stats = checker.statistics(content);
        output::print_statistics(source, &stats, colored, &cli.format);
    }

    Ok(errors)
}

/// Walk the misspellings one by one, letting the user pick a replacement,
/// add the word to the dictionary, or skip. Replacements are written back
/// when the input is a file.
fn run_interactive(
    content: &str,
    path: Option<&Path>,
    checker: &mut SpellChecker,
    results: &[CheckResult],
    colored: bool,
) -> Result<usize> {
    let mut new_content = content.to_string();
    let mut fixed_count = 0;
    let mut remaining = 0;

    for result in results.iter().filter(|r| !r.is_correct) {
        // Added to the dictionary at an earlier prompt in this run.
        if checker.dictionary().contains(&result.word) {
            continue;
        }

        match output::prompt_action(&result.word, &result.suggestions, colored) {
            PromptAction::Skip => remaining += 1,
            PromptAction::Replace(replacement) => {
                if new_content.contains(&result.word) {
                    new_content = new_content.replacen(&result.word, &replacement, 1);
                    fixed_count += 1;
                }
            }
            PromptAction::AddToDictionary => checker.add_word(&result.word),
            PromptAction::Quit => break,
        }
    }

    if fixed_count > 0 {
        if let Some(file_path) = path {
            fs::write(file_path, new_content)
                .with_context(|| format!("Failed to write file: {}", file_path.display()))?;
            println!(
                "Applied {} correction{} to {}",
                fixed_count,
                if fixed_count == 1 { "" } else { "s" },
                file_path.display()
            );
        }
    }

    Ok(remaining)
}

fn handle_command(command: Commands, config: &Config) -> Result<()> {
    let dictionary_path = config.dictionary_path();

    match command {
        Commands::Dict { action } => match action {
            DictCommands::Ingest { corpus } => {
                let report = dict::ingest::ingest_corpus(&corpus, &dictionary_path)?;
                println!(
                    "Processed {} words, added {} new",
                    report.total_words, report.new_words
                );
            }
            DictCommands::Add { words } => {
                let mut checker = SpellChecker::new(config);
                for word in &words {
                    checker.add_word(word);
                }
                println!("Added {} words to the dictionary", words.len());
            }
            DictCommands::Info => {
                dict::ingest::show_info(&dictionary_path)?;
            }
        },
    }
    Ok(())
}
