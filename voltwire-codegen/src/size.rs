//! Emission of the exact-size calculator.
//!
//! The emitted `encoded_len` walks the same field plan as the encoder with
//! identical omission rules, so its result is the precise byte count
//! `write_backward` produces. Callers pre-allocate exactly this much, so
//! every branch here must stay in lockstep with its counterpart in
//! [`encode`](crate::encode).
use {
    crate::{
        common::{self, usize_lit},
        descriptor::Kind,
        names::{field_ident, type_ident},
        plan::{FieldPlan, MapPlan, MessagePlan, OneofPlan, PlanCardinality, Presence, Slot},
    },
    proc_macro2::TokenStream,
    quote::quote,
    voltwire::wire,
};

pub(crate) fn emit(message: &MessagePlan) -> TokenStream {
    let name = type_ident(&message.rust_name);
    let mut body = Vec::new();
    for slot in message.slots() {
        match slot {
            Slot::Field(field) => body.push(field_len(field)),
            Slot::Oneof(group) => body.push(oneof_len(message, group)),
        }
    }
    let unknown = message
        .retain_unknown
        .then(|| quote! { n += self.unknown_fields.len(); });

    quote! {
        impl ::voltwire::WireSize for #name {
            fn encoded_len(&self) -> usize {
                let mut n = 0usize;
                #(#body)*
                #unknown
                n
            }
        }
    }
}

fn field_len(field: &FieldPlan) -> TokenStream {
    let ident = field_ident(&field.name);
    let tag = usize_lit(wire::tag_len(field.number));
    let group_tags = usize_lit(2 * wire::tag_len(field.number));

    match &field.cardinality {
        PlanCardinality::Map(map) => map_len(field, map),
        PlanCardinality::Repeated { packed: true } => {
            let body = match field.kind {
                Kind::Bool => quote! { let len = self.#ident.len(); },
                kind if kind.fixed_width().is_some() => {
                    let width = usize_lit(kind.fixed_width().unwrap());
                    quote! { let len = self.#ident.len() * #width; }
                }
                kind => {
                    let conv = common::to_u64(kind, quote!(v));
                    quote! {
                        let len = self
                            .#ident
                            .iter()
                            .map(|&v| ::voltwire::wire::varint_len(#conv))
                            .sum::<usize>();
                    }
                }
            };
            quote! {
                if !self.#ident.is_empty() {
                    #body
                    n += #tag + ::voltwire::wire::len_delimited_len(len);
                }
            }
        }
        PlanCardinality::Repeated { packed: false } => match field.kind {
            Kind::Message => quote! {
                for m in &self.#ident {
                    n += #tag
                        + ::voltwire::wire::len_delimited_len(::voltwire::WireSize::encoded_len(m));
                }
            },
            Kind::Group => quote! {
                for m in &self.#ident {
                    n += #group_tags + ::voltwire::WireSize::encoded_len(m);
                }
            },
            Kind::String | Kind::Bytes => quote! {
                for v in &self.#ident {
                    n += #tag + ::voltwire::wire::len_delimited_len(v.len());
                }
            },
            Kind::Bool => quote! { n += self.#ident.len() * (#tag + 1); },
            kind if kind.fixed_width().is_some() => {
                let width = usize_lit(kind.fixed_width().unwrap());
                quote! { n += self.#ident.len() * (#tag + #width); }
            }
            kind => {
                let conv = common::to_u64(kind, quote!(v));
                quote! {
                    for &v in &self.#ident {
                        n += #tag + ::voltwire::wire::varint_len(#conv);
                    }
                }
            }
        },
        PlanCardinality::Singular => match field.kind {
            Kind::Message => quote! {
                if let Some(m) = &self.#ident {
                    n += #tag
                        + ::voltwire::wire::len_delimited_len(::voltwire::WireSize::encoded_len(m));
                }
            },
            Kind::Group => quote! {
                if let Some(m) = &self.#ident {
                    n += #group_tags + ::voltwire::WireSize::encoded_len(m);
                }
            },
            _ if field.presence.is_explicit() => explicit_scalar_len(field),
            Kind::String | Kind::Bytes => quote! {
                if !self.#ident.is_empty() {
                    n += #tag + ::voltwire::wire::len_delimited_len(self.#ident.len());
                }
            },
            Kind::Bool => quote! { if self.#ident { n += #tag + 1; } },
            kind if kind.fixed_width().is_some() => {
                let width = usize_lit(kind.fixed_width().unwrap());
                let cond = common::non_default(kind, quote!(self.#ident));
                quote! { if #cond { n += #tag + #width; } }
            }
            kind => {
                let conv = common::to_u64(kind, quote!(self.#ident));
                quote! {
                    if self.#ident != 0 {
                        n += #tag + ::voltwire::wire::varint_len(#conv);
                    }
                }
            }
        },
    }
}

/// Explicit presence: the slot's mere occupancy decides emission, so a
/// present zero still counts.
fn explicit_scalar_len(field: &FieldPlan) -> TokenStream {
    debug_assert!(matches!(
        field.presence,
        Presence::Explicit | Presence::SyntheticOneof
    ));
    let ident = field_ident(&field.name);
    let tag = usize_lit(wire::tag_len(field.number));
    match field.kind {
        Kind::String | Kind::Bytes => quote! {
            if let Some(v) = &self.#ident {
                n += #tag + ::voltwire::wire::len_delimited_len(v.len());
            }
        },
        Kind::Bool => quote! { if self.#ident.is_some() { n += #tag + 1; } },
        kind if kind.fixed_width().is_some() => {
            let width = usize_lit(kind.fixed_width().unwrap());
            quote! { if self.#ident.is_some() { n += #tag + #width; } }
        }
        kind => {
            let conv = common::to_u64(kind, quote!(v));
            quote! {
                if let Some(v) = self.#ident {
                    n += #tag + ::voltwire::wire::varint_len(#conv);
                }
            }
        }
    }
}

fn map_len(field: &FieldPlan, map: &MapPlan) -> TokenStream {
    let ident = field_ident(&field.name);
    let tag = usize_lit(wire::tag_len(field.number));

    let (key_pat, key_len) = entry_component_len(map.key_kind, None, quote!(k), "k");
    let value_target = map.value_message.as_ref();
    let (value_pat, value_len) =
        entry_component_len(map.value_kind, value_target.map(|_| ()), quote!(v), "v");

    quote! {
        for (#key_pat, #value_pat) in &self.#ident {
            let len = #key_len + #value_len;
            n += #tag + ::voltwire::wire::len_delimited_len(len);
        }
    }
}

/// Size of one map-entry component (key at 1 or value at 2; both tags are
/// a single byte). Returns the binding pattern alongside so bindings the
/// size expression never reads are underscored.
fn entry_component_len(
    kind: Kind,
    message: Option<()>,
    binding: TokenStream,
    name: &str,
) -> (TokenStream, TokenStream) {
    let used = proc_macro2::Ident::new(name, proc_macro2::Span::call_site());
    let unused = proc_macro2::Ident::new(&format!("_{name}"), proc_macro2::Span::call_site());
    if message.is_some() {
        return (
            quote!(#used),
            quote!(1 + ::voltwire::wire::len_delimited_len(::voltwire::WireSize::encoded_len(#binding))),
        );
    }
    match kind {
        Kind::String | Kind::Bytes => (
            quote!(#used),
            quote!(1 + ::voltwire::wire::len_delimited_len(#binding.len())),
        ),
        Kind::Bool => (quote!(#unused), quote!(2)),
        kind if kind.fixed_width().is_some() => {
            let total = usize_lit(1 + kind.fixed_width().unwrap());
            (quote!(#unused), quote!(#total))
        }
        kind => {
            let conv = common::to_u64(kind, quote!(*#binding));
            (
                quote!(#used),
                quote!(1 + ::voltwire::wire::varint_len(#conv)),
            )
        }
    }
}

fn oneof_len(message: &MessagePlan, group: &OneofPlan) -> TokenStream {
    let group_ident = field_ident(&group.field_name);
    let enum_name = type_ident(&group.enum_name);
    let arms: Vec<TokenStream> = group
        .members
        .iter()
        .map(|&i| {
            let field = &message.fields[i];
            let variant = type_ident(&field.oneof.as_ref().expect("oneof member").variant);
            let tag = usize_lit(wire::tag_len(field.number));
            let group_tags = usize_lit(2 * wire::tag_len(field.number));
            match field.kind {
                Kind::Message => quote! {
                    #enum_name::#variant(value) => {
                        n += #tag + ::voltwire::wire::len_delimited_len(
                            ::voltwire::WireSize::encoded_len(value),
                        );
                    }
                },
                Kind::Group => quote! {
                    #enum_name::#variant(value) => {
                        n += #group_tags + ::voltwire::WireSize::encoded_len(value);
                    }
                },
                Kind::String | Kind::Bytes => quote! {
                    #enum_name::#variant(value) => {
                        n += #tag + ::voltwire::wire::len_delimited_len(value.len());
                    }
                },
                Kind::Bool => quote! {
                    #enum_name::#variant(_) => {
                        n += #tag + 1;
                    }
                },
                kind if kind.fixed_width().is_some() => {
                    let width = usize_lit(kind.fixed_width().unwrap());
                    quote! {
                        #enum_name::#variant(_) => {
                            n += #tag + #width;
                        }
                    }
                }
                kind => {
                    let conv = common::to_u64(kind, quote!(*value));
                    quote! {
                        #enum_name::#variant(value) => {
                            n += #tag + ::voltwire::wire::varint_len(#conv);
                        }
                    }
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
