//! Identifier derivation from resource display names

/// Collapse a display name into a camelCase identifier.
///
/// ASCII letters and digits are kept, every other run of characters splits
/// words, and leading digits are dropped so the result starts with a
/// letter: `"orders-db"` becomes `ordersDb`, `"yo mama"` becomes `yoMama`.
/// Names without any ASCII letter collapse to an empty string.
pub fn to_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for word in name
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
    {
        let word = word.to_ascii_lowercase();
        if out.is_empty() {
            out.push_str(&word);
        } else {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                out.push(first.to_ascii_uppercase());
                out.push_str(chars.as_str());
            }
        }
    }

    let start = out
        .find(|c: char| c.is_ascii_alphabetic())
        .unwrap_or(out.len());
    let mut ident = out.split_off(start);
    if let Some(first) = ident.get_mut(..1) {
        first.make_ascii_lowercase();
    }
    ident
}

/// Keywords that cannot name a generated module. `mod` also collides with
/// the index file.
const RESERVED_IDENTIFIERS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub",
    "ref", "return", "self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Whether a derived identifier can be used as a module name
pub fn is_usable_identifier(ident: &str) -> bool {
    !ident.is_empty() && !RESERVED_IDENTIFIERS.contains(&ident)
}

/// Name of the singleton accessor generated for a resource
pub fn client_name(name: &str) -> String {
    format!("{}Client", to_camel_case(name))
}

/// File name of the module generated for a resource
pub fn module_file_name(name: &str) -> String {
    format!("{}.rs", to_camel_case(name))
}
