//! SIPL interpreter CLI.

use siplc::commands::{check_file, explain_error, format_file, lex_file, parse_file, run_file};
use siplc::pipeline::EXIT_USAGE;
use siplc::{parse_options, CliError, Options};

fn main() {
    siplc::tracing_setup::init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(EXIT_USAGE);
    }

    let command = args[1].as_str();
    let code = match command {
        "run" | "check" | "lex" | "parse" | "fmt" => {
            with_file(command, &args[2..], |path, options| match command {
                "run" => run_file(path, &options.run, options.color),
                "check" => check_file(path, &options.run, options.color),
                "lex" => lex_file(path, &options.run, options.color),
                "parse" => parse_file(path, &options.run, options.color),
                _ => format_file(path, &options.run, options.color),
            })
        }
        "explain" | "--explain" => {
            if args.len() < 3 {
                eprintln!("Usage: sipl explain <ERROR_CODE>");
                eprintln!("Example: sipl explain E6002");
                std::process::exit(EXIT_USAGE);
            }
            finish(explain_error(&args[2]))
        }
        "help" | "--help" | "-h" => {
            print_usage();
            0
        }
        "version" | "--version" | "-V" => {
            println!("sipl {}", env!("CARGO_PKG_VERSION"));
            0
        }
        _ => {
            // A bare source path runs it.
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("sipl"))
            {
                with_file("run", &args[1..], |path, options| {
                    run_file(path, &options.run, options.color)
                })
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                EXIT_USAGE
            }
        }
    };

    std::process::exit(code);
}

/// Parse flags, require exactly one file argument, and run `handler` on it.
fn with_file(
    command: &str,
    rest: &[String],
    handler: impl FnOnce(&str, &Options) -> Result<i32, CliError>,
) -> i32 {
    let options = match parse_options(rest) {
        Ok(options) => options,
        Err(err) => return finish(Err(err)),
    };
    match options.positional.as_slice() {
        [path] => finish(handler(path.as_str(), &options)),
        _ => finish(Err(CliError::Usage(format!(
            "Usage: sipl {command} <file.sipl> [options]"
        )))),
    }
}

fn finish(result: Result<i32, CliError>) -> i32 {
    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            err.exit_code()
        }
    }
}

fn print_usage() {
    println!("SIPL interpreter");
    println!();
    println!("Usage: sipl <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file.sipl>      Run a program and print its final bindings");
    println!("  check <file.sipl>    Report lexical and syntax errors only");
    println!("  lex <file.sipl>      Print the token stream");
    println!("  parse <file.sipl>    Print the syntax tree");
    println!("  fmt <file.sipl>      Print the program in canonical layout");
    println!("  explain <code>       Explain an error code (e.g., E6002)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --max-depth=<n>      Call depth limit, a positive integer (default: 10000)");
    println!("  --format=<fmt>       Output format: text, json (default: text)");
    println!("  --color=<when>       Diagnostic colors: auto, always, never");
    println!("  --notes              Print notes and call stacks under text diagnostics");
    println!();
    println!("Environment:");
    println!("  SIPL_LOG             Tracing filter, e.g. SIPL_LOG=sipl_eval=trace");
    println!();
    println!("Exit codes: 0 success, 64 usage, 65 syntax error, 66 unreadable file,");
    println!("            70 runtime error");
}
