//! Identifier helpers for emitted code.
use proc_macro2::Ident;

/// Convert a schema field or oneof name (`snake_case` by convention) to the
/// `UpperCamelCase` used for variant and type names.
pub(crate) fn camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = true;
    for ch in name.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Convert a `UpperCamelCase` type name to the `SHOUTY_SNAKE_CASE` used for
/// generated statics.
pub(crate) fn shouty_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if ch.is_uppercase() && i > 0 {
            out.push('_');
        }
        out.extend(ch.to_uppercase());
    }
    out
}

/// Strict keywords that need a raw identifier when they appear as schema
/// field names.
const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "dyn", "else", "enum", "extern", "false",
    "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref",
    "return", "static", "struct", "trait", "true", "type", "unsafe", "use", "where", "while",
];

/// Names that cannot be raw identifiers either; they get a trailing
/// underscore instead.
const UNRAWABLE: &[&str] = &["crate", "self", "Self", "super"];

/// A keyword-safe identifier for a schema field name.
pub(crate) fn field_ident(name: &str) -> Ident {
    let span = proc_macro2::Span::call_site();
    if KEYWORDS.contains(&name) {
        Ident::new_raw(name, span)
    } else if UNRAWABLE.contains(&name) {
        Ident::new(&format!("{name}_"), span)
    } else {
        Ident::new(name, span)
    }
}

/// An identifier for a generated type name.
pub(crate) fn type_ident(name: &str) -> Ident {
    Ident::new(name, proc_macro2::Span::call_site())
}
