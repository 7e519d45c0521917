//! The `lex` command: stream a file through the scanner and print its tokens.

use std::fs::File;

use luar_ir::{StringInterner, TokenKind};
use luar_lexer::{setup, Chunk, Dialect, ScanOptions};
use luar_lexer_core::{IoReader, DEFAULT_CHUNK_SIZE};

/// Options accepted by `luarc lex` and `luarc keywords`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexOptions {
    /// Dialect override (`--syntax=`); `None` follows the global syntax mode
    pub dialect: Option<Dialect>,
    /// Accepted chunk kinds (`--mode=`); `None` accepts both
    pub mode: Option<String>,
    /// Bytes handed over per read (`--chunk-size=`)
    pub chunk_size: usize,
}

impl Default for LexOptions {
    fn default() -> Self {
        LexOptions {
            dialect: None,
            mode: None,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

/// Parse `--syntax=`, `--mode=` and `--chunk-size=` out of `args`.
///
/// Unknown values warn and keep the default; positional arguments are ignored.
pub fn parse_lex_options(args: &[String]) -> LexOptions {
    let mut options = LexOptions::default();

    for arg in args {
        if let Some(syntax) = arg.strip_prefix("--syntax=") {
            if let Some(dialect) = Dialect::from_name(syntax) {
                options.dialect = Some(dialect);
            } else {
                eprintln!("warning: unknown syntax mode '{syntax}', options: classic, extended, 0, 1");
            }
        } else if let Some(mode) = arg.strip_prefix("--mode=") {
            options.mode = Some(mode.to_string());
        } else if let Some(size) = arg.strip_prefix("--chunk-size=") {
            match size.parse::<usize>() {
                Ok(n) if n > 0 => options.chunk_size = n,
                _ => eprintln!(
                    "warning: invalid chunk size '{size}', using {DEFAULT_CHUNK_SIZE}"
                ),
            }
        } else if arg.starts_with('-') {
            eprintln!("warning: unknown option '{arg}'");
        }
    }

    options
}

/// Tokenize `path` and print one `line  token  value` row per token.
pub fn lex_file(path: &str, options: &LexOptions) {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("error: cannot open '{path}': {e}");
            std::process::exit(1);
        }
    };

    let mut scan_options = ScanOptions::new(format!("@{path}"));
    if let Some(mode) = &options.mode {
        scan_options = scan_options.with_mode(mode.as_str());
    }
    if let Some(dialect) = options.dialect {
        scan_options = scan_options.with_dialect(dialect);
    }

    let interner = StringInterner::new();
    let reader = IoReader::with_chunk_size(file, options.chunk_size);
    let chunk = match setup(reader, scan_options, &interner) {
        Ok(chunk) => chunk,
        Err(e) => fail(&e),
    };

    let mut scanner = match chunk {
        Chunk::Text(scanner) => scanner,
        Chunk::Bytecode(input) => {
            let name = input.chunk_name().short().to_string();
            match input.read_to_end() {
                Ok(bytes) => println!("Binary chunk '{name}' ({} bytes)", bytes.len()),
                Err(e) => fail(&e),
            }
            return;
        }
    };

    println!("Tokens for '{path}' ({} syntax):", scanner.dialect());
    let mut count = 0usize;
    loop {
        let token = match scanner.next() {
            Ok(token) => token,
            Err(e) => fail(&e),
        };
        if token.kind == TokenKind::Eof {
            break;
        }
        count += 1;
        let text = scanner.token_to_string(token.kind);
        match token_value(token.kind, &interner) {
            Some(value) => println!("{:>5}  {text:<20}  {value}", token.line),
            None => println!("{:>5}  {text}", token.line),
        }
    }
    println!("{count} tokens, {} reads", scanner.reads());
}

/// Decoded value column for literal-carrying tokens.
fn token_value(kind: TokenKind, interner: &StringInterner) -> Option<String> {
    match kind {
        TokenKind::Number(n) => Some(n.to_string()),
        TokenKind::Name(name) | TokenKind::Oper(name) | TokenKind::FieldOper(name) => {
            Some(interner.lookup_lossy(name).into_owned())
        }
        TokenKind::String(name) => Some(format!("{:?}", interner.lookup_lossy(name))),
        TokenKind::Substituted { subst, symbol } => Some(format!(
            "{} (base #{}, key #{})",
            interner.lookup_lossy(symbol),
            subst.base.raw(),
            subst.key.raw()
        )),
        _ => None,
    }
}

fn fail(error: &luar_lexer::LexError) -> ! {
    eprintln!("{error}");
    std::process::exit(1);
}
