//! Emission of the message structs, oneof enums and the generic clear
//! operation.
//!
//! Type emission is the base layer every feature builds on; it always runs.
//! The equality and clone features only influence the derive list here —
//! their behavior is entirely mechanical over the same field plan.
use {
    crate::{
        common,
        names::{field_ident, type_ident},
        plan::{FieldPlan, MessagePlan, OneofPlan, PlanCardinality, Slot},
        FeatureSet,
    },
    proc_macro2::TokenStream,
    quote::quote,
};

pub(crate) fn emit(message: &MessagePlan, features: &FeatureSet) -> TokenStream {
    let name = type_ident(&message.rust_name);
    let derives = derive_list(features, true);

    let mut fields = Vec::new();
    for slot in message.slots() {
        match slot {
            Slot::Field(field) => {
                let ident = field_ident(&field.name);
                let ty = field_type(field);
                fields.push(quote! { pub #ident: #ty, });
            }
            Slot::Oneof(group) => {
                let ident = field_ident(&group.field_name);
                let ty = type_ident(&group.enum_name);
                fields.push(quote! { pub #ident: Option<#ty>, });
            }
        }
    }
    if message.retain_unknown {
        fields.push(quote! {
            /// Unrecognized fields retained as opaque bytes for faithful
            /// re-encoding.
            pub unknown_fields: Vec<u8>,
        });
    }

    let oneof_enums: Vec<TokenStream> = message
        .oneofs
        .iter()
        .map(|group| oneof_enum(message, group, features))
        .collect();

    quote! {
        #derives
        pub struct #name {
            #(#fields)*
        }

        impl #name {
            /// Clear every field back to its default.
            pub fn clear(&mut self) {
                *self = Self::default();
            }
        }

        #(#oneof_enums)*
    }
}

fn oneof_enum(message: &MessagePlan, group: &OneofPlan, features: &FeatureSet) -> TokenStream {
    let name = type_ident(&group.enum_name);
    let derives = derive_list(features, false);
    let variants: Vec<TokenStream> = group
        .members
        .iter()
        .map(|&i| {
            let field = &message.fields[i];
            let variant = type_ident(&field.oneof.as_ref().expect("oneof member").variant);
            let ty = variant_type(field);
            quote! { #variant(#ty), }
        })
        .collect();

    quote! {
        /// At most one variant is active at a time.
        #derives
        pub enum #name {
            #(#variants)*
        }
    }
}

fn derive_list(features: &FeatureSet, with_default: bool) -> TokenStream {
    let mut derives = Vec::new();
    if features.clone {
        derives.push(quote!(Clone));
    }
    derives.push(quote!(Debug));
    if with_default {
        derives.push(quote!(Default));
    }
    if features.equal {
        derives.push(quote!(PartialEq));
    }
    quote! { #[derive(#(#derives),*)] }
}

fn field_type(field: &FieldPlan) -> TokenStream {
    match &field.cardinality {
        PlanCardinality::Map(map) => {
            let key = common::scalar_type(map.key_kind);
            let value = match &map.value_message {
                Some(target) => {
                    let ident = type_ident(&target.rust_name);
                    quote!(#ident)
                }
                None => common::scalar_type(map.value_kind),
            };
            quote!(::std::collections::HashMap<#key, #value>)
        }
        PlanCardinality::Repeated { .. } => {
            let elem = match &field.message {
                Some(target) => {
                    let ident = type_ident(&target.rust_name);
                    quote!(#ident)
                }
                None => common::scalar_type(field.kind),
            };
            quote!(Vec<#elem>)
        }
        PlanCardinality::Singular => match &field.message {
            Some(target) => {
                let ident = type_ident(&target.rust_name);
                if target.boxed {
                    quote!(Option<Box<#ident>>)
                } else {
                    quote!(Option<#ident>)
                }
            }
            None => {
                let scalar = common::scalar_type(field.kind);
                if field.presence.is_explicit() {
                    quote!(Option<#scalar>)
                } else {
                    scalar
                }
            }
        },
    }
}

/// Payload type of a oneof variant. Oneof members are always singular.
fn variant_type(field: &FieldPlan) -> TokenStream {
    match &field.message {
        Some(target) => {
            let ident = type_ident(&target.rust_name);
            if target.boxed {
                quote!(Box<#ident>)
            } else {
                quote!(#ident)
            }
        }
        None => common::scalar_type(field.kind),
    }
}
