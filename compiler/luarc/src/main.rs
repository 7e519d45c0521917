//! Luar compiler CLI
//!
//! Front-end inspection commands built on the streaming scanner.

mod commands;

use commands::{init_tracing, lex_file, list_keywords, mangle_symbol, parse_lex_options};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            let Some(path) = args.iter().skip(2).find(|a| !a.starts_with('-')) else {
                eprintln!("error: missing file path");
                eprintln!("Usage: luarc lex <file.lua> [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --syntax=<mode>     Dialect: classic, extended, 0, 1");
                eprintln!("  --mode=<bt>         Accepted chunk kinds (b = binary, t = text)");
                eprintln!("  --chunk-size=<n>    Bytes per read (default: 4096)");
                std::process::exit(1);
            };
            let options = parse_lex_options(&args[2..]);
            lex_file(path, &options);
        }
        "mangle" => {
            if args.len() < 4 {
                eprintln!("Usage: luarc mangle <kind> <symbol>");
                eprintln!();
                eprintln!("Kinds: operator, field-read, field-write, vname");
                std::process::exit(1);
            }
            mangle_symbol(&args[2], &args[3]);
        }
        "keywords" => {
            let options = parse_lex_options(&args[2..]);
            list_keywords(options.dialect);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("luarc {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Luar Compiler");
    println!();
    println!("Usage: luarc <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>               Tokenize a file and print one row per token");
    println!("  mangle <kind> <symbol>   Print the storage name of an operator symbol");
    println!("  keywords                 Show the dialect-sensitive reserved words");
    println!("  help                     Show this help message");
    println!("  version                  Show version information");
    println!();
    println!("Set RUST_LOG=luar_lexer=debug to trace the scanner.");
}
