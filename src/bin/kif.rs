//! Command-line interface for kif
//! Compiles SUO-KIF knowledge bases to TPTP and inspects KIF files.
//!
//! Usage:
//!   kif convert `<files>...` [options]            - Convert KIF files into one TPTP document
//!   kif tokens `<path>`                           - Dump the token stream
//!   kif ast `<path>` [--format `<format>`]        - Dump the parsed AST
//!   kif list-formats                            - List available AST formats
//!
//! The library never touches the file system; reading sources and writing the document
//! happens here.

use clap::{Arg, ArgAction, ArgMatches, Command};
use kif::kif::config::Loader;
use kif::kif::conversion::{BatchConverter, Goal};
use kif::kif::formats::FormatRegistry;
use kif::kif::lexing::tokenize;
use kif::kif::parsing::parse_source;
use simplelog::{Config, LevelFilter, TermLogger, TerminalMode};
use std::process;

fn main() {
    let matches = Command::new("kif")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A compiler from SUO-KIF to TPTP")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::Count)
                .help("Increase log output (-v info, -vv debug)"),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert KIF files into a TPTP axiom document")
                .arg(
                    Arg::new("files")
                        .help("KIF files, read in order")
                        .required(true)
                        .num_args(1..)
                        .index(1),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("TOML configuration file layered over the defaults"),
                )
                .arg(
                    Arg::new("kb-name")
                        .long("kb-name")
                        .help("Knowledge base name for the document header"),
                )
                .arg(
                    Arg::new("dialect")
                        .long("dialect")
                        .short('d')
                        .value_parser(["fof", "tff", "thf"])
                        .help("TPTP output dialect"),
                )
                .arg(
                    Arg::new("conjecture")
                        .long("conjecture")
                        .conflicts_with("question")
                        .help("Formula to emit as the conjecture"),
                )
                .arg(
                    Arg::new("question")
                        .long("question")
                        .help("Formula to emit as a question"),
                )
                .arg(flag("show-numbers", "Emit numbers as TPTP numerals"))
                .arg(flag("no-prefixes", "Do not prefix symbols with s__"))
                .arg(flag("keep-hol", "Reify higher-order applications instead of skipping them"))
                .arg(flag("remove-strings", "Skip formulas containing string literals"))
                .arg(flag("source-comments", "Write each source formula above its axiom"))
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Write the document to this file instead of stdout"),
                )
                .arg(flag("stats-json", "Print batch statistics as JSON on stderr")),
        )
        .subcommand(
            Command::new("tokens").about("Dump the token stream").arg(
                Arg::new("path")
                    .help("Path to the KIF file")
                    .required(true)
                    .index(1),
            ),
        )
        .subcommand(
            Command::new("ast")
                .about("Dump the parsed AST")
                .arg(
                    Arg::new("path")
                        .help("Path to the KIF file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (see list-formats)")
                        .default_value("treeviz"),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available AST formats"))
        .get_matches();

    init_logging(matches.get_count("verbose"));

    match matches.subcommand() {
        Some(("convert", convert_matches)) => handle_convert_command(convert_matches),
        Some(("tokens", tokens_matches)) => handle_tokens_command(required(tokens_matches, "path")),
        Some(("ast", ast_matches)) => {
            handle_ast_command(required(ast_matches, "path"), required(ast_matches, "format"))
        }
        Some(("list-formats", _)) => handle_list_formats_command(),
        _ => unreachable!(),
    }
}

fn flag(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).long(name).action(ArgAction::SetTrue).help(help)
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> &'a str {
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .unwrap_or_else(|| fail(format!("missing argument <{name}>")))
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", message);
    process::exit(1);
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if let Err(e) = TermLogger::init(level, Config::default(), TerminalMode::Stderr) {
        eprintln!("Warning: logging disabled: {}", e);
    }
}

fn read_source(path: &str) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| fail(format!("reading {}: {}", path, e)))
}

/// Split a file into top-level formula texts, using the parser's node ranges
fn split_formulas(path: &str, source: &str) -> Vec<String> {
    let output = parse_source(source, path);
    for message in output.error_messages() {
        log::warn!("{}: {}", path, message);
    }
    output
        .nodes
        .iter()
        .filter_map(|node| source.get(node.start_offset()..node.end_offset()))
        .map(str::to_string)
        .collect()
}

/// Handle the convert command
fn handle_convert_command(matches: &ArgMatches) {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }

    let overrides: [(&str, &str, bool); 5] = [
        ("show-numbers", "translation.hide_numbers", false),
        ("no-prefixes", "translation.add_prefixes", false),
        ("keep-hol", "translation.remove_hol", false),
        ("remove-strings", "translation.remove_strings", true),
        ("source-comments", "translation.include_source_comments", true),
    ];
    for (name, key, value) in overrides {
        if matches.get_flag(name) {
            loader = loader.set_override(key, value).unwrap_or_else(|e| fail(e));
        }
    }
    if let Some(dialect) = matches.get_one::<String>("dialect") {
        loader = loader
            .set_override("translation.output_dialect", dialect.as_str())
            .unwrap_or_else(|e| fail(e));
    }
    if let Some(kb_name) = matches.get_one::<String>("kb-name") {
        loader = loader
            .set_override("conversion.kb_name", kb_name.as_str())
            .unwrap_or_else(|e| fail(e));
    }
    let config = loader.build().unwrap_or_else(|e| fail(e));

    let mut formulas = Vec::new();
    for path in matches.get_many::<String>("files").into_iter().flatten() {
        let source = read_source(path);
        let found = split_formulas(path, &source);
        log::info!("{}: {} formulas", path, found.len());
        formulas.extend(found);
    }

    let goal = match (
        matches.get_one::<String>("conjecture"),
        matches.get_one::<String>("question"),
    ) {
        (Some(text), _) => Some(Goal::conjecture(text.as_str())),
        (None, Some(text)) => Some(Goal::question(text.as_str())),
        (None, None) => None,
    };

    let result = BatchConverter::new(config.translation)
        .kb_name(config.conversion.kb_name)
        .convert(formulas.as_slice(), goal.as_ref());

    match matches.get_one::<String>("output") {
        Some(path) => std::fs::write(path, &result.document)
            .unwrap_or_else(|e| fail(format!("writing {}: {}", path, e))),
        None => print!("{}", result.document),
    }

    if matches.get_flag("stats-json") {
        let stats = serde_json::to_string(&result.stats).unwrap_or_else(|e| fail(e));
        eprintln!("{}", stats);
    }
}

/// Handle the tokens command
fn handle_tokens_command(path: &str) {
    let source = read_source(path);
    let output = tokenize(&source, path);
    for token in &output.tokens {
        println!("{}", token);
    }
    for error in &output.errors {
        eprintln!("{}: {}", path, error);
    }
}

/// Handle the ast command
fn handle_ast_command(path: &str, format: &str) {
    let source = read_source(path);
    let output = parse_source(&source, path);
    for message in output.error_messages() {
        eprintln!("{}: {}", path, message);
    }

    let registry = FormatRegistry::with_defaults();
    let serialized = registry
        .serialize(&output.nodes, format)
        .unwrap_or_else(|e| fail(e));
    print!("{}", serialized);
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available AST formats:\n");
    for (name, description) in FormatRegistry::with_defaults().describe_formats() {
        println!("  {}", name);
        println!("    {}", description);
    }
}
