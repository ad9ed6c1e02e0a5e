//! # strtok CLI
//!
//! Tokenizes a file (or stdin) on a configurable delimiter set and prints one
//! token per line, a token count, or a JSON array.

use clap::Parser;
use std::io::{self, Read};
use std::path::PathBuf;
use strtok::config::compile_time::tokenizer::DEFAULT_DELIMITERS;
use strtok::logging::{self, codes};
use strtok::{
    log_error, log_info, log_success, log_warning, RuntimeConfig, Spanned, StringTokenizer,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Split text into tokens on single-character delimiters")]
struct Args {
    /// Input file; reads stdin when omitted
    file: Option<PathBuf>,

    /// Characters that separate tokens
    #[arg(short, long, default_value = DEFAULT_DELIMITERS, hide_default_value = true)]
    delimiters: String,

    /// Emit every delimiter as a token of its own
    #[arg(short, long)]
    return_delimiters: bool,

    /// Print only the number of tokens
    #[arg(short, long, conflicts_with_all = ["json", "spans", "stats"])]
    count: bool,

    /// Prefix each token with its line:column
    #[arg(long)]
    spans: bool,

    /// Print tokens as a JSON array
    #[arg(long)]
    json: bool,

    /// TOML runtime configuration
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print tokenizer counters to stderr when done
    #[arg(long)]
    stats: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let loaded = args.config.as_ref().map(RuntimeConfig::from_file).transpose();
    let mut config = match &loaded {
        Ok(config) => config.clone().unwrap_or_default(),
        Err(_) => RuntimeConfig::default(),
    };
    if args.stats {
        config.tokenizer.collect_metrics = true;
    }

    let initialized = logging::config::init_runtime_preferences(config.logging.clone())
        .and_then(|_| logging::init_global_logging());
    if let Err(e) = initialized {
        logging::safe_log_error(codes::system::INITIALIZATION_FAILURE, &e);
        return Err(e.into());
    }

    match loaded {
        Ok(Some(_)) => log_success!(codes::success::CONFIG_LOADED, "Runtime configuration loaded",
            "path" => args.config.as_ref().map_or(String::new(), |p| p.display().to_string())
        ),
        Ok(None) => {}
        Err(e) => {
            log_error!(e.error_code(), &e.to_string());
            return Err(e.into());
        }
    }

    log_info!("strtok starting",
        "input" => args.file.as_ref().map_or("<stdin>".to_string(), |p| p.display().to_string()),
        "return_delimiters" => args.return_delimiters
    );

    let text = read_input(args.file.as_ref())?;
    if text.is_empty() {
        log_warning!("Input is empty");
    }
    let mut tokenizer = StringTokenizer::with_preferences(
        &text,
        &args.delimiters,
        args.return_delimiters,
        config.tokenizer,
    )?;

    if args.count {
        println!("{}", tokenizer.count_tokens()?);
        return Ok(());
    }

    let mut tokens: Vec<Spanned<String>> = Vec::new();
    while tokenizer.has_more_tokens()? {
        tokens.push(tokenizer.next_spanned_token()?);
    }

    if args.json {
        if args.spans {
            println!("{}", serde_json::to_string_pretty(&tokens)?);
        } else {
            let values: Vec<&str> = tokens.iter().map(|t| t.value.as_str()).collect();
            println!("{}", serde_json::to_string_pretty(&values)?);
        }
    } else {
        for token in &tokens {
            if args.spans {
                println!(
                    "{}:{}\t{}",
                    token.span.start.line,
                    token.span.start.column,
                    token.value.escape_debug()
                );
            } else {
                println!("{}", token.value);
            }
        }
    }

    if args.stats {
        let metrics = tokenizer.metrics();
        eprintln!("tokens emitted:    {}", metrics.tokens_emitted);
        eprintln!("delimiter tokens:  {}", metrics.delimiter_tokens);
        eprintln!("lookahead reuses:  {}", metrics.lookahead_reuses);
        eprintln!("rescans:           {}", metrics.rescans);
        eprintln!("longest token:     {}", metrics.max_token_length);
    }

    Ok(())
}

fn read_input(file: Option<&PathBuf>) -> Result<String, Box<dyn std::error::Error>> {
    let result = match file {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).map(|_| buffer)
        }
    };

    result.map_err(|e| {
        log_error!(codes::system::INPUT_READ_FAILED, "Failed to read input",
            "error" => e
        );
        e.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_arguments() {
        let args = Args::try_parse_from(["strtok"]).unwrap();
        assert!(args.file.is_none());
        assert_eq!(args.delimiters, DEFAULT_DELIMITERS);
        assert!(!args.return_delimiters);
    }

    #[test]
    fn test_short_flags() {
        let args = Args::try_parse_from(["strtok", "-d", ",;", "-r", "input.txt"]).unwrap();
        assert_eq!(args.delimiters, ",;");
        assert!(args.return_delimiters);
        assert_eq!(args.file, Some(PathBuf::from("input.txt")));
    }

    #[test]
    fn test_count_conflicts_with_json() {
        assert!(Args::try_parse_from(["strtok", "--count", "--json"]).is_err());
    }

    #[test]
    fn test_count_conflicts_with_stats() {
        assert!(Args::try_parse_from(["strtok", "-c", "--stats"]).is_err());
        assert!(Args::try_parse_from(["strtok", "--stats"]).is_ok());
    }
}
