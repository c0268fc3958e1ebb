//! Cinder scanner CLI

use cinderc::commands::run_lex;
use cinderc::options::parse_lex_args;
use cinderc::tracing_setup::init_tracing;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    match args[1].as_str() {
        "lex" => {
            let (paths, options) = match parse_lex_args(&args[2..]) {
                Ok(parsed) => parsed,
                Err(e) => {
                    eprintln!("error: {e}");
                    eprintln!("Usage: cinder lex <file>... [options]");
                    std::process::exit(1);
                }
            };
            init_tracing(options.verbose);
            if !run_lex(&paths, &options) {
                std::process::exit(1);
            }
        }
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => {
            println!("cinder {}", env!("CARGO_PKG_VERSION"));
        }
        other => {
            eprintln!("error: unknown command '{other}'");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Cinder scanner");
    println!();
    println!("Usage: cinder <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>...    Print the tokens of each file");
    println!("  help             Show this message");
    println!("  version          Show version information");
    println!();
    println!("Lex options:");
    println!("  --errors-only    Print only lexical errors and their tokens");
    println!("  --stop-on-error  Stop scanning a file at its first lexical error");
    println!("  --summary        Print token counts per kind after each file");
    println!("  --no-parallel    Scan files one after another");
    println!("  --jobs=<n>       Number of worker threads for parallel scanning");
    println!("  -v, --verbose    Debug logging on stderr (RUST_LOG overrides)");
}
