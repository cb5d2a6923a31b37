//! Per-kind emission helpers shared by the size, encode and decode
//! emitters.
//!
//! Everything here is keyed by the closed [`Kind`] enumeration; every match
//! is exhaustive so a new kind cannot be added without the compiler
//! pointing at each site that must learn about it.
use {
    crate::descriptor::Kind,
    proc_macro2::{Literal, TokenStream},
    quote::quote,
    voltwire::wire::WireType,
};

/// The scalar Rust type backing a kind's field slot.
///
/// Message/group kinds are resolved through their
/// [`MessageRef`](crate::plan::MessageRef) instead.
pub(crate) fn scalar_type(kind: Kind) -> TokenStream {
    match kind {
        Kind::Bool => quote!(bool),
        Kind::Int32 | Kind::Sint32 | Kind::Sfixed32 | Kind::Enum => quote!(i32),
        Kind::Int64 | Kind::Sint64 | Kind::Sfixed64 => quote!(i64),
        Kind::Uint32 | Kind::Fixed32 => quote!(u32),
        Kind::Uint64 | Kind::Fixed64 => quote!(u64),
        Kind::Float => quote!(f32),
        Kind::Double => quote!(f64),
        Kind::String => quote!(String),
        Kind::Bytes => quote!(Vec<u8>),
        Kind::Message | Kind::Group => unreachable!("message kinds use MessageRef"),
    }
}

/// Convert a by-value scalar expression to the `u64` a varint writer takes.
///
/// Truncating integer kinds sign-extend through `i64` so negative values
/// keep their canonical ten-byte encoding; the two signed-optimized kinds
/// remap through zigzag.
pub(crate) fn to_u64(kind: Kind, value: TokenStream) -> TokenStream {
    match kind {
        Kind::Bool => quote!(u64::from(#value)),
        Kind::Int32 | Kind::Enum => quote!((#value) as i64 as u64),
        Kind::Int64 => quote!((#value) as u64),
        Kind::Uint32 => quote!(u64::from(#value)),
        Kind::Uint64 => quote!(#value),
        Kind::Sint32 => quote!(u64::from(::voltwire::wire::zigzag32(#value))),
        Kind::Sint64 => quote!(::voltwire::wire::zigzag64(#value)),
        _ => unreachable!("not a varint kind"),
    }
}

/// Convert a `u64` read off the wire back to the scalar a varint kind
/// stores.
pub(crate) fn from_u64(kind: Kind, value: TokenStream) -> TokenStream {
    match kind {
        Kind::Bool => quote!((#value) != 0),
        Kind::Int32 | Kind::Enum => quote!((#value) as i32),
        Kind::Int64 => quote!((#value) as i64),
        Kind::Uint32 => quote!((#value) as u32),
        Kind::Uint64 => quote!(#value),
        Kind::Sint32 => quote!(::voltwire::wire::unzigzag32((#value) as u32)),
        Kind::Sint64 => quote!(::voltwire::wire::unzigzag64(#value)),
        _ => unreachable!("not a varint kind"),
    }
}

/// Convert a by-value scalar to the raw bits a fixed-width writer takes.
pub(crate) fn to_fixed_bits(kind: Kind, value: TokenStream) -> TokenStream {
    match kind {
        Kind::Fixed32 => quote!(#value),
        Kind::Sfixed32 => quote!((#value) as u32),
        Kind::Float => quote!((#value).to_bits()),
        Kind::Fixed64 => quote!(#value),
        Kind::Sfixed64 => quote!((#value) as u64),
        Kind::Double => quote!((#value).to_bits()),
        _ => unreachable!("not a fixed-width kind"),
    }
}

/// Convert raw little-endian bits back to the scalar a fixed-width kind
/// stores.
pub(crate) fn from_fixed_bits(kind: Kind, value: TokenStream) -> TokenStream {
    match kind {
        Kind::Fixed32 => quote!(#value),
        Kind::Sfixed32 => quote!((#value) as i32),
        Kind::Float => quote!(f32::from_bits(#value)),
        Kind::Fixed64 => quote!(#value),
        Kind::Sfixed64 => quote!((#value) as i64),
        Kind::Double => quote!(f64::from_bits(#value)),
        _ => unreachable!("not a fixed-width kind"),
    }
}

/// Condition under which an implicit-presence value is emitted at all.
pub(crate) fn non_default(kind: Kind, value: TokenStream) -> TokenStream {
    match kind {
        Kind::Bool => value,
        Kind::Float | Kind::Double => quote!(#value != 0.0),
        Kind::String | Kind::Bytes => quote!(!#value.is_empty()),
        Kind::Message | Kind::Group => unreachable!("message presence is the Option slot"),
        _ => quote!(#value != 0),
    }
}

/// Path expression for a runtime wire-type constant.
pub(crate) fn wire_type_path(wire_type: WireType) -> TokenStream {
    match wire_type {
        WireType::Varint => quote!(::voltwire::wire::WireType::Varint),
        WireType::Fixed64 => quote!(::voltwire::wire::WireType::Fixed64),
        WireType::LengthDelimited => quote!(::voltwire::wire::WireType::LengthDelimited),
        WireType::StartGroup => quote!(::voltwire::wire::WireType::StartGroup),
        WireType::EndGroup => quote!(::voltwire::wire::WireType::EndGroup),
        WireType::Fixed32 => quote!(::voltwire::wire::WireType::Fixed32),
    }
}

/// Unsuffixed literal for byte counts and tag sizes.
pub(crate) fn usize_lit(value: usize) -> Literal {
    Literal::usize_unsuffixed(value)
}

/// Unsuffixed literal for field numbers and wire-type discriminants.
pub(crate) fn u32_lit(value: u32) -> Literal {
    Literal::u32_unsuffixed(value)
}

/// Unsuffixed literal for whole tag values.
pub(crate) fn u64_lit(value: u64) -> Literal {
    Literal::u64_unsuffixed(value)
}
