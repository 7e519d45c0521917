//! The `mangle` command: show the storage name of an operator symbol.

use luar_ir::mangle::mangle_str;
use luar_ir::MangleKind;

/// Print the mangled form of `symbol` under the kind named by `kind`.
pub fn mangle_symbol(kind: &str, symbol: &str) {
    let Some(kind) = MangleKind::from_name(kind) else {
        eprintln!("error: unknown mangle kind '{kind}'");
        eprintln!("Kinds: operator, field-read, field-write, vname");
        std::process::exit(1);
    };
    match mangle_str(kind, symbol) {
        Some(mangled) => println!("{mangled}"),
        // `none`/`unknown` carry no header
        None => println!("{symbol}"),
    }
}
