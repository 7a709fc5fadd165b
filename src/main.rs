mod debug_report;

use rexgen::{RecognizerConfig, builtin_library, recognize_verbose_with};
use std::io::{self, IsTerminal, Read};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let knobs = RecognizerConfig {
        max_results: config.max_results,
        beam_width: config.beam_width,
        step_budget: config.step_budget,
    };
    let res = recognize_verbose_with(&config.input, builtin_library(), &knobs);
    debug_report::print_run(&res, config.color);
}

struct CliConfig {
    input: String,
    max_results: usize,
    beam_width: usize,
    step_budget: usize,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let defaults = RecognizerConfig::default();
    let mut input: Option<String> = None;
    let mut max_results = defaults.max_results;
    let mut beam_width = defaults.beam_width;
    let mut step_budget = defaults.step_budget;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("rexgen {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--max-results" => {
                let value = args
                    .next()
                    .ok_or_else(|| "error: --max-results expects a value".to_string())?;
                max_results = parse_count("--max-results", &value)?;
            }
            "--beam-width" => {
                let value = args
                    .next()
                    .ok_or_else(|| "error: --beam-width expects a value".to_string())?;
                beam_width = parse_count("--beam-width", &value)?;
            }
            "--step-budget" => {
                let value = args
                    .next()
                    .ok_or_else(|| "error: --step-budget expects a value".to_string())?;
                step_budget = parse_count("--step-budget", &value)?;
            }
            "--input" | "-i" => {
                let value = args
                    .next()
                    .ok_or_else(|| "error: --input expects a value".to_string())?;
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value);
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    if input.is_some() {
                        return Err("error: input provided multiple times".to_string());
                    }
                    input = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--max-results=") => {
                max_results =
                    parse_count("--max-results", arg.trim_start_matches("--max-results="))?;
            }
            _ if arg.starts_with("--beam-width=") => {
                beam_width = parse_count("--beam-width", arg.trim_start_matches("--beam-width="))?;
            }
            _ if arg.starts_with("--step-budget=") => {
                step_budget =
                    parse_count("--step-budget", arg.trim_start_matches("--step-budget="))?;
            }
            _ if arg.starts_with("--input=") => {
                let value = arg.trim_start_matches("--input=");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value.to_string());
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(rest);
                break;
            }
        }
    }

    let input = match input {
        // Explicit input is taken as-is; the empty string is a valid input.
        Some(value) => value,
        None => {
            let value = read_stdin_input()?;
            if value.trim().is_empty() {
                return Err(format!("error: no input provided\n\n{}", help_text()));
            }
            value
        }
    };

    Ok(CliConfig { input, max_results, beam_width, step_budget, color })
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|err| format!("error: failed to read stdin: {err}"))?;
    // Piped input is line-oriented; the trailing newline is not part of it.
    Ok(buffer.trim_end_matches(['\n', '\r']).to_string())
}

fn parse_count(flag: &str, value: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .map_err(|_| format!("error: invalid {flag} '{value}' (expected a non-negative integer)"))
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    let defaults = RecognizerConfig::default();
    format!(
        "rexgen {version}

Regex inference CLI: decomposes an example string into recognized
sub-patterns and prints ranked candidate regular expressions.

Usage:
  rexgen [OPTIONS] [--] <input...>
  rexgen [OPTIONS] --input <text>

Options:
  -i, --input <text>         Input text to recognize. If omitted, reads remaining
                             args or stdin when no args are provided.
  --max-results <n>          Maximum candidates to print. Default: {max_results}
  --beam-width <n>           Partial covers kept per offset. Default: {beam_width}
  --step-budget <n>          Enumeration step cap. Default: {step_budget}
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Exit codes:
  0  Success.
  1  Internal error.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
        max_results = defaults.max_results,
        beam_width = defaults.beam_width,
        step_budget = defaults.step_budget
    )
}
