//! Rinha CLI
//!
//! Evaluates a Rinha program given as a JSON syntax tree.

use std::io::IsTerminal;

use rinha_diagnostic::emitter::ColorMode;
use rinhac::commands::{explain_error, parse_max_depth, run_input, ErrorFormat, RunOptions};
use rinhac::input::InputSource;

fn main() {
    rinhac::init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let mut options = RunOptions::default();
    let mut file_path: Option<&str> = None;

    let mut i = 1;
    while i < args.len() {
        let arg = args[i].as_str();
        if arg == "-h" || arg == "--help" {
            print_usage();
            return;
        } else if arg == "-V" || arg == "--version" {
            println!("rinha {}", env!("CARGO_PKG_VERSION"));
            return;
        } else if arg == "--explain" {
            let Some(code) = args.get(i + 1) else {
                usage_error("--explain requires an error code");
            };
            std::process::exit(explain_error(code));
        } else if let Some(value) = arg.strip_prefix("--max-depth=") {
            let Some(limit) = parse_max_depth(value) else {
                usage_error(&format!("invalid --max-depth value '{value}'"));
            };
            options.max_depth = limit;
        } else if arg == "--profile" {
            options.profile = true;
        } else if arg == "--backtrace" {
            options.backtrace = true;
        } else if let Some(value) = arg.strip_prefix("--color=") {
            let Some(mode) = ColorMode::parse(value) else {
                usage_error(&format!("invalid --color value '{value}'"));
            };
            options.color = mode;
        } else if let Some(value) = arg.strip_prefix("--error-format=") {
            let Some(format) = ErrorFormat::parse(value) else {
                usage_error(&format!("invalid --error-format value '{value}'"));
            };
            options.error_format = format;
        } else if arg.starts_with('-') {
            usage_error(&format!("unknown option '{arg}'"));
        } else if file_path.is_none() {
            file_path = Some(arg);
        } else {
            usage_error(&format!("unexpected argument '{arg}'"));
        }
        i += 1;
    }

    let input = InputSource::select(file_path, std::io::stdin().is_terminal());
    std::process::exit(run_input(&input, &options));
}

fn usage_error(message: &str) -> ! {
    eprintln!("error: {message}");
    eprintln!();
    print_usage();
    std::process::exit(2);
}

fn print_usage() {
    eprintln!("Usage: rinha [OPTIONS] [FILE]");
    eprintln!();
    eprintln!("Evaluates a Rinha program given as a JSON syntax tree. The program is");
    eprintln!("read from stdin when it is piped, otherwise from FILE, falling back to");
    eprintln!("{}.", rinhac::input::DEFAULT_SOURCE_PATH);
    eprintln!();
    eprintln!("Options:");
    eprintln!(
        "  --max-depth=<n>         Call depth limit, 0 for unlimited (default: {})",
        rinha_eval::DEFAULT_MAX_CALL_DEPTH
    );
    eprintln!("  --profile               Print evaluation counters to stderr");
    eprintln!("  --backtrace             Print the call backtrace on runtime errors");
    eprintln!("  --color=<when>          auto, always or never");
    eprintln!("  --error-format=<fmt>    human or json");
    eprintln!("  --explain <code>        Explain an error code, e.g. E6003");
    eprintln!("  -h, --help              Print this help");
    eprintln!("  -V, --version           Print the version");
    eprintln!();
    eprintln!("Set RUST_LOG (e.g. RUST_LOG=rinha_eval=trace) to enable logging.");
}
