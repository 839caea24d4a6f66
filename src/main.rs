//! CLI entrypoint for `wordforge`.
//!
//! Parses command-line arguments, collects seeds from flags or files, runs
//! the library engine, and writes wordlists or analysis reports. The `serve`
//! subcommand starts the HTTP layer over the same library calls.
use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use log::{LevelFilter, error};
use wordforge::{
    analyzer::analyze,
    engine::{DEFAULT_MAX_CANDIDATES, DEFAULT_MAX_LENGTH, Generator, GeneratorOptions},
    export::{AnalyzedPassword, analysis_json_string, save_analysis_json, save_wordlist_txt},
    io::{read_lines_trimmed, split_csv_arg},
    report::render_batch,
};

#[derive(Parser, Debug)]
#[command(
    name = "wordforge",
    version,
    about = "Seed-based wordlist generator & password strength auditor"
)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Increase verbosity (-v, -vv)
    #[arg(short = 'v', action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Control color output (auto, always, never)
    #[arg(long = "color", value_enum, default_value_t = ColorChoice::Auto, global = true)]
    color: ColorChoice,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a candidate wordlist from personal seed tokens
    Generate {
        /// Comma-separated seed words (e.g. name,pet,year)
        #[arg(long)]
        seeds: Option<String>,

        /// File containing seed words, one per line
        #[arg(long = "from-file")]
        from_file: Option<PathBuf>,

        /// User name to include as a seed
        #[arg(long)]
        name: Option<String>,

        /// Pet name to include as a seed
        #[arg(long)]
        pet: Option<String>,

        /// Year to combine with word seeds
        #[arg(long)]
        year: Option<u32>,

        /// Maximum candidate length (0 falls back to the default)
        #[arg(short = 'l', long, default_value_t = DEFAULT_MAX_LENGTH)]
        length: usize,

        /// Reserved rule string for post-processing hooks
        #[arg(long)]
        rules: Option<String>,

        /// Cap on intermediate candidate-set size
        #[arg(long = "max-candidates", default_value_t = DEFAULT_MAX_CANDIDATES)]
        max_candidates: usize,

        /// Output wordlist file
        #[arg(short = 'o', long, default_value = "wordlist.txt")]
        out: PathBuf,
    },
    /// Analyze password(s) for strength and issues
    Analyze {
        /// Single password to analyze
        #[arg(short = 'p', long)]
        password: Option<String>,

        /// File with one password per line
        #[arg(short = 'f', long)]
        file: Option<PathBuf>,

        /// Comma-separated personal words to penalize (name, pet, etc.)
        #[arg(long = "user-inputs")]
        user_inputs: Option<String>,

        /// Emit JSON instead of a terminal report
        #[arg(long)]
        json: bool,

        /// Write JSON results to a file instead of stdout
        #[arg(short = 'o', long)]
        out: Option<PathBuf>,
    },
    /// Start the HTTP API over the generator and analyzer
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        #[arg(long, default_value_t = 5000)]
        port: u16,

        /// Directory for generated wordlists
        #[arg(long = "output-dir", default_value = "wordlists")]
        output_dir: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

const ASCII_TITLE: &str = r#"
 _    _  ___  ____  ____  ____  ___  ____   ___  ____
( \/\/ )/ _ \(  _ \(  _ \( ___)/ _ \(  _ \ / __)( ___)
 \    /( (_) ))   / )(_) ))__)( (_) ))   /( (_-. )__)
  \/\/  \___/(_)\_)(____/(__)  \___/(_)\_) \___/(____)
"#;

fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .try_init();
}

fn collect_seeds(
    seeds: Option<&str>,
    from_file: Option<&PathBuf>,
    name: Option<&str>,
    pet: Option<&str>,
    year: Option<u32>,
) -> Result<Vec<String>> {
    let mut out = Vec::new();
    if let Some(path) = from_file {
        out.extend(read_lines_trimmed(path)?);
    }
    if let Some(csv) = seeds {
        out.extend(split_csv_arg(csv));
    }
    if let Some(name) = name {
        out.push(name.to_string());
    }
    if let Some(pet) = pet {
        out.push(pet.to_string());
    }
    if let Some(year) = year {
        out.push(year.to_string());
    }
    if out.is_empty() {
        bail!("no seeds provided; use --seeds, --from-file, or --name/--pet/--year");
    }
    Ok(out)
}

fn run_generate(
    seeds: Vec<String>,
    length: usize,
    rules: Option<String>,
    max_candidates: usize,
    out: PathBuf,
) -> Result<()> {
    let options = GeneratorOptions {
        max_length: if length == 0 { DEFAULT_MAX_LENGTH } else { length },
        rules,
        max_candidates,
    };
    log::info!(
        "generating from {} seed(s), max length {}",
        seeds.len(),
        options.max_length
    );
    let words = Generator::new(options).generate(&seeds);
    if words.is_empty() {
        log::warn!("generated 0 candidates; check seeds and --length");
    }
    save_wordlist_txt(&words, &out)?;
    println!(
        "{} {} candidate(s) -> {}",
        "Generated".bold().green(),
        words.len(),
        out.display()
    );
    Ok(())
}

fn run_analyze(
    password: Option<String>,
    file: Option<PathBuf>,
    user_inputs: Option<String>,
    json: bool,
    out: Option<PathBuf>,
) -> Result<()> {
    let passwords: Vec<String> = match (password, file) {
        (Some(p), None) => vec![p],
        (None, Some(f)) => read_lines_trimmed(&f)?,
        _ => bail!("provide exactly one of --password or --file"),
    };
    let inputs: Vec<String> = user_inputs.as_deref().map(split_csv_arg).unwrap_or_default();
    let input_refs: Vec<&str> = inputs.iter().map(|s| s.as_str()).collect();

    let results: Vec<AnalyzedPassword> = passwords
        .iter()
        .map(|p| AnalyzedPassword {
            password: p.clone(),
            analysis: analyze(p, &input_refs),
        })
        .collect();

    if let Some(out) = out {
        save_analysis_json(&results, &out)?;
        println!("Wrote JSON results to {}", out.display());
    } else if json {
        println!("{}", analysis_json_string(&results)?);
    } else {
        let entries: Vec<_> = results
            .into_iter()
            .map(|r| (r.password, r.analysis))
            .collect();
        print!("{}", render_batch(&entries));
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logger(args.verbose);
    match args.color {
        ColorChoice::Always => colored::control::set_override(true),
        ColorChoice::Never => colored::control::set_override(false),
        ColorChoice::Auto => {}
    }

    match args.command {
        Command::Generate {
            seeds,
            from_file,
            name,
            pet,
            year,
            length,
            rules,
            max_candidates,
            out,
        } => {
            let collected = match collect_seeds(
                seeds.as_deref(),
                from_file.as_ref(),
                name.as_deref(),
                pet.as_deref(),
                year,
            ) {
                Ok(s) => s,
                Err(e) => {
                    error!("{e}");
                    std::process::exit(2);
                }
            };
            if let Err(e) = run_generate(collected, length, rules, max_candidates, out) {
                error!("generation failed: {e}");
                std::process::exit(3);
            }
        }
        Command::Analyze {
            password,
            file,
            user_inputs,
            json,
            out,
        } => {
            if !json && out.is_none() {
                println!("{}", ASCII_TITLE.bold().green());
            }
            if let Err(e) = run_analyze(password, file, user_inputs, json, out) {
                error!("analysis failed: {e}");
                std::process::exit(2);
            }
        }
        Command::Serve {
            host,
            port,
            output_dir,
        } => {
            if let Err(e) = wordforge::server::run(&host, port, output_dir) {
                error!("server failed: {e}");
                std::process::exit(4);
            }
        }
    }
}
