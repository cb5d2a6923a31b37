//! Emission of the encoder.
//!
//! `write_backward` walks fields in reverse declaration order, filling the
//! pre-sized buffer from the tail. A nested length-delimited value's span
//! is fully written by the time its length prefix goes in immediately
//! before it, so no prefix is ever rewritten and no bytes move twice.
//! Retained unknown fields are written first and therefore land at the end
//! of the output.
use {
    crate::{
        common::{self, u32_lit},
        descriptor::Kind,
        names::{field_ident, type_ident},
        plan::{FieldPlan, MapPlan, MessagePlan, OneofPlan, PlanCardinality, Slot},
    },
    proc_macro2::TokenStream,
    quote::quote,
    voltwire::wire::WireType,
};

pub(crate) fn emit(message: &MessagePlan) -> TokenStream {
    let name = type_ident(&message.rust_name);
    let slots: Vec<Slot<'_>> = message.slots().collect();
    let mut body = Vec::new();
    if message.retain_unknown {
        body.push(quote! {
            pos = ::voltwire::wire::put_slice(buf, pos, &self.unknown_fields);
        });
    }
    for slot in slots.into_iter().rev() {
        match slot {
            Slot::Field(field) => body.push(field_write(field)),
            Slot::Oneof(group) => body.push(oneof_write(message, group)),
        }
    }

    if body.is_empty() {
        return quote! {
            impl ::voltwire::WireWrite for #name {
                fn write_backward(&self, _buf: &mut [u8], pos: usize) -> usize {
                    pos
                }
            }
        };
    }

    quote! {
        impl ::voltwire::WireWrite for #name {
            fn write_backward(&self, buf: &mut [u8], pos: usize) -> usize {
                let mut pos = pos;
                #(#body)*
                pos
            }
        }
    }
}

/// Tag write ending at `pos`.
fn put_tag(number: u32, wire_type: WireType) -> TokenStream {
    let number = u32_lit(number);
    let wt = common::wire_type_path(wire_type);
    quote! { pos = ::voltwire::wire::put_tag(buf, pos, #number, #wt); }
}

/// Backward write of one scalar payload (no tag), from a by-value
/// expression.
fn put_scalar(kind: Kind, value: TokenStream) -> TokenStream {
    match kind {
        Kind::String => quote! {
            pos = ::voltwire::wire::put_slice(buf, pos, #value.as_bytes());
            pos = ::voltwire::wire::put_varint(buf, pos, #value.len() as u64);
        },
        Kind::Bytes => quote! {
            pos = ::voltwire::wire::put_slice(buf, pos, &#value);
            pos = ::voltwire::wire::put_varint(buf, pos, #value.len() as u64);
        },
        kind if kind.fixed_width() == Some(4) => {
            let bits = common::to_fixed_bits(kind, value);
            quote! { pos = ::voltwire::wire::put_fixed32(buf, pos, #bits); }
        }
        kind if kind.fixed_width() == Some(8) => {
            let bits = common::to_fixed_bits(kind, value);
            quote! { pos = ::voltwire::wire::put_fixed64(buf, pos, #bits); }
        }
        kind => {
            let conv = common::to_u64(kind, value);
            quote! { pos = ::voltwire::wire::put_varint(buf, pos, #conv); }
        }
    }
}

/// Backward write of a nested message payload plus its length prefix and
/// tag.
fn put_message(number: u32, value: TokenStream) -> TokenStream {
    let tag = put_tag(number, WireType::LengthDelimited);
    quote! {
        let end = pos;
        pos = ::voltwire::WireWrite::write_backward(#value, buf, pos);
        pos = ::voltwire::wire::put_varint(buf, pos, (end - pos) as u64);
        #tag
    }
}

/// Backward write of a group payload framed by end/start tags.
fn put_group(number: u32, value: TokenStream) -> TokenStream {
    let start = put_tag(number, WireType::StartGroup);
    let end = put_tag(number, WireType::EndGroup);
    quote! {
        #end
        pos = ::voltwire::WireWrite::write_backward(#value, buf, pos);
        #start
    }
}

fn field_write(field: &FieldPlan) -> TokenStream {
    let ident = field_ident(&field.name);
    let number = field.number;

    match &field.cardinality {
        PlanCardinality::Map(map) => map_write(field, map),
        PlanCardinality::Repeated { packed: true } => {
            let elem = put_scalar(field.kind, quote!(v));
            let tag = put_tag(number, WireType::LengthDelimited);
            quote! {
                if !self.#ident.is_empty() {
                    let end = pos;
                    for &v in self.#ident.iter().rev() {
                        #elem
                    }
                    pos = ::voltwire::wire::put_varint(buf, pos, (end - pos) as u64);
                    #tag
                }
            }
        }
        PlanCardinality::Repeated { packed: false } => match field.kind {
            Kind::Message => {
                let body = put_message(number, quote!(m));
                quote! {
                    for m in self.#ident.iter().rev() {
                        #body
                    }
                }
            }
            Kind::Group => {
                let body = put_group(number, quote!(m));
                quote! {
                    for m in self.#ident.iter().rev() {
                        #body
                    }
                }
            }
            Kind::String | Kind::Bytes => {
                let body = put_scalar(field.kind, quote!(v));
                let tag = put_tag(number, WireType::LengthDelimited);
                quote! {
                    for v in self.#ident.iter().rev() {
                        #body
                        #tag
                    }
                }
            }
            kind => {
                let body = put_scalar(kind, quote!(v));
                let tag = put_tag(number, kind.wire_type());
                quote! {
                    for &v in self.#ident.iter().rev() {
                        #body
                        #tag
                    }
                }
            }
        },
        PlanCardinality::Singular => match field.kind {
            Kind::Message => {
                let body = put_message(number, quote!(m));
                quote! {
                    if let Some(m) = &self.#ident {
                        #body
                    }
                }
            }
            Kind::Group => {
                let body = put_group(number, quote!(m));
                quote! {
                    if let Some(m) = &self.#ident {
                        #body
                    }
                }
            }
            _ if field.presence.is_explicit() => {
                let tag = put_tag(number, field.kind.wire_type());
                match field.kind {
                    Kind::String | Kind::Bytes => {
                        let body = put_scalar(field.kind, quote!(v));
                        quote! {
                            if let Some(v) = &self.#ident {
                                #body
                                #tag
                            }
                        }
                    }
                    kind => {
                        let body = put_scalar(kind, quote!(v));
                        quote! {
                            if let Some(v) = self.#ident {
                                #body
                                #tag
                            }
                        }
                    }
                }
            }
            kind => {
                let cond = common::non_default(kind, quote!(self.#ident));
                let body = put_scalar(kind, quote!(self.#ident));
                let tag = put_tag(number, kind.wire_type());
                quote! {
                    if #cond {
                        #body
                        #tag
                    }
                }
            }
        },
    }
}

/// Map entries are emitted in container iteration order (unspecified), as
/// repeated synthetic entries; key and value are both written
/// unconditionally.
fn map_write(field: &FieldPlan, map: &MapPlan) -> TokenStream {
    let ident = field_ident(&field.name);
    let tag = put_tag(field.number, WireType::LengthDelimited);

    let value = match &map.value_message {
        Some(_) => {
            let body = put_message(2, quote!(v));
            quote! { #body }
        }
        None => {
            let body = put_scalar(map.value_kind, quote!((*v)));
            let vtag = put_tag(2, map.value_kind.wire_type());
            quote! {
                #body
                #vtag
            }
        }
    };
    let key_body = put_scalar(map.key_kind, quote!((*k)));
    let ktag = put_tag(1, map.key_kind.wire_type());

    quote! {
        for (k, v) in &self.#ident {
            let entry_end = pos;
            #value
            #key_body
            #ktag
            pos = ::voltwire::wire::put_varint(buf, pos, (entry_end - pos) as u64);
            #tag
        }
    }
}

fn oneof_write(message: &MessagePlan, group: &OneofPlan) -> TokenStream {
    let group_ident = field_ident(&group.field_name);
    let enum_name = type_ident(&group.enum_name);
    let arms: Vec<TokenStream> = group
        .members
        .iter()
        .map(|&i| {
            let field = &message.fields[i];
            let variant = type_ident(&field.oneof.as_ref().expect("oneof member").variant);
            let body = match field.kind {
                Kind::Message => put_message(field.number, quote!(value)),
                Kind::Group => put_group(field.number, quote!(value)),
                Kind::String | Kind::Bytes => {
                    let scalar = put_scalar(field.kind, quote!(value));
                    let tag = put_tag(field.number, WireType::LengthDelimited);
                    quote! {
                        #scalar
                        #tag
                    }
                }
                kind => {
                    let scalar = put_scalar(kind, quote!((*value)));
                    let tag = put_tag(field.number, kind.wire_type());
                    quote! {
                        #scalar
                        #tag
                    }
                }
            };
            quote! {
                #enum_name::#variant(value) => {
                    #body
                }
            }
        })
        .collect();

    quote! {
        if let Some(value) = &self.#group_ident {
            match value {
                #(#arms)*
            }
        }
    }
}
