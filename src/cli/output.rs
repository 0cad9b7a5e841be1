use crate::{CheckResult, Statistics};
use colored::*;
use dialoguer::{theme::ColorfulTheme, Select};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    source: &'a str,
    total_words: usize,
    misspelled_words: usize,
    results: &'a [CheckResult],
}

pub fn print_results(source: &str, results: &[CheckResult], colored: bool, format: &OutputFormat) {
    match format {
        OutputFormat::Text => print_text_results(source, results, colored),
        OutputFormat::Json => print_json_results(source, results),
    }
}

fn print_text_results(source: &str, results: &[CheckResult], colored: bool) {
    if colored {
        println!("\n{}", source.bold().underline());
    } else {
        println!("\n{}", source);
    }

    if results.is_empty() {
        println!("  No Tigrigna words found.");
        return;
    }

    for result in results {
        if result.is_correct {
            if colored {
                println!("  {} {}", "✓".green(), result.word);
            } else {
                println!("  ✓ {}", result.word);
            }
        } else if colored {
            println!("  {} {}", "✗".red().bold(), result.word.red());
            if !result.suggestions.is_empty() {
                let suggestions = result
                    .suggestions
                    .iter()
                    .map(|s| s.green().to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                println!("    {} {}", "→".dimmed(), suggestions);
            }
        } else {
            println!("  ✗ {}", result.word);
            if !result.suggestions.is_empty() {
                println!("    → {}", result.suggestions.join(", "));
            }
        }
    }
}

fn print_json_results(source: &str, results: &[CheckResult]) {
    let output = JsonOutput {
        source,
        total_words: results.len(),
        misspelled_words: results.iter().filter(|r| !r.is_correct).count(),
        results,
    };

    match serde_json::to_string_pretty(&output) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Warning: failed to serialize results: {}", e),
    }
}

pub fn print_statistics(source: &str, stats: &Statistics, colored: bool, format: &OutputFormat) {
    if let OutputFormat::Json = format {
        match serde_json::to_string_pretty(stats) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Warning: failed to serialize statistics: {}", e),
        }
        return;
    }

    if colored {
        println!("\n{}", format!("Statistics for {}", source).bold());
    } else {
        println!("\nStatistics for {}", source);
    }
    println!("  Total words:        {}", stats.total_words);
    println!("  Unique words:       {}", stats.unique_words);
    println!("  Misspelled words:   {}", stats.misspelled_words);
    println!("  Unique misspelled:  {}", stats.unique_misspelled);
}

pub fn print_check_summary(total_errors: usize, sources: usize, colored: bool) {
    println!();
    if total_errors == 0 {
        if colored {
            println!("{}", "✓ No spelling errors found!".green().bold());
        } else {
            println!("✓ No spelling errors found!");
        }
    } else {
        let error_word = if total_errors == 1 { "error" } else { "errors" };
        let source_word = if sources == 1 { "input" } else { "inputs" };
        if colored {
            println!(
                "{} {} {} found in {} {}",
                "✗".red().bold(),
                total_errors.to_string().red().bold(),
                error_word,
                sources,
                source_word
            );
        } else {
            println!(
                "✗ {} {} found in {} {}",
                total_errors, error_word, sources, source_word
            );
        }
    }
}

/// What the user chose for one misspelled word in interactive mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptAction {
    Skip,
    Replace(String),
    AddToDictionary,
    Quit,
}

pub fn prompt_action(word: &str, suggestions: &[String], colored: bool) -> PromptAction {
    if colored {
        println!(
            "\n{} {}",
            "Misspelling found:".yellow().bold(),
            word.red().bold()
        );
    } else {
        println!("\nMisspelling found: {}", word);
    }

    let mut items: Vec<String> = suggestions.to_vec();
    items.push("Skip".to_string());
    items.push("Add to dictionary".to_string());
    items.push("Quit".to_string());

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Choose a correction")
        .items(&items)
        .default(0)
        .interact_opt();

    match selection {
        Ok(Some(idx)) if idx < suggestions.len() => {
            PromptAction::Replace(suggestions[idx].clone())
        }
        Ok(Some(idx)) if idx == suggestions.len() => PromptAction::Skip,
        Ok(Some(idx)) if idx == suggestions.len() + 1 => PromptAction::AddToDictionary,
        Ok(Some(_)) => PromptAction::Quit,
        // Esc or a closed terminal both mean "leave this one alone".
        Ok(None) | Err(_) => PromptAction::Skip,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert!(matches!("text".parse(), Ok(OutputFormat::Text)));
        assert!(matches!("JSON".parse(), Ok(OutputFormat::Json)));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_output_format_display_round_trip() {
        for format in [OutputFormat::Text, OutputFormat::Json] {
            let parsed: OutputFormat = format.to_string().parse().unwrap();
            assert_eq!(parsed.to_string(), format.to_string());
        }
    }
}
