//! Emission of the decoder.
//!
//! One generated `merge_scope` loop serves both length-delimited spans and
//! group scopes. Dispatch is on `(field number, wire type)` pairs, so a
//! tag whose wire type disagrees with the locally-known kind simply falls
//! through to the unknown-field path instead of failing — schema evolution
//! must never turn into a hard decode error. Singular fields take the last
//! occurrence, repeated fields append, maps take the last value per key.
use {
    crate::{
        common::{self, u32_lit, u64_lit},
        descriptor::Kind,
        names::{field_ident, type_ident},
        plan::{FieldPlan, MapPlan, MessagePlan, PlanCardinality},
    },
    proc_macro2::TokenStream,
    quote::quote,
    voltwire::wire::WireType,
};

pub(crate) fn emit(message: &MessagePlan) -> TokenStream {
    let name = type_ident(&message.rust_name);
    let mut arms = Vec::new();
    for field in &message.fields {
        arms.extend(field_arms(message, field));
    }

    let tag_start = message
        .retain_unknown
        .then(|| quote! { let tag_start = pos; });
    let unknown = if message.retain_unknown {
        quote! {
            ::voltwire::wire::skip_field(data, &mut pos, wire_type)?;
            self.unknown_fields.extend_from_slice(&data[tag_start..pos]);
        }
    } else {
        quote! { ::voltwire::wire::skip_field(data, &mut pos, wire_type)?; }
    };

    quote! {
        impl ::voltwire::WireRead for #name {
            fn merge_scope(
                &mut self,
                data: &[u8],
                end_group: Option<u32>,
                depth: usize,
            ) -> ::voltwire::DecodeResult<usize> {
                if depth >= ::voltwire::wire::RECURSION_LIMIT {
                    return Err(::voltwire::DecodeError::RecursionLimit);
                }
                let mut pos = 0usize;
                while pos < data.len() {
                    #tag_start
                    let tag = ::voltwire::wire::read_varint(data, &mut pos)?;
                    let number = (tag >> 3) as u32;
                    let wire_type = (tag & 0x7) as u32;
                    if number == 0 {
                        return Err(::voltwire::DecodeError::InvalidTag);
                    }
                    if wire_type == 4 {
                        return match end_group {
                            Some(open) if open == number => Ok(pos),
                            _ => Err(::voltwire::DecodeError::UnexpectedEndGroup),
                        };
                    }
                    match (number, wire_type) {
                        #(#arms)*
                        _ => {
                            #unknown
                        }
                    }
                }
                if end_group.is_some() {
                    return Err(::voltwire::DecodeError::Truncated);
                }
                Ok(pos)
            }
        }
    }
}

/// Read expression for one varint/fixed scalar payload at the cursor,
/// bounded by `data`.
fn read_scalar(kind: Kind, data: TokenStream) -> TokenStream {
    match kind {
        kind if kind.fixed_width() == Some(4) => {
            common::from_fixed_bits(kind, quote!(::voltwire::wire::read_fixed32(#data, &mut pos)?))
        }
        kind if kind.fixed_width() == Some(8) => {
            common::from_fixed_bits(kind, quote!(::voltwire::wire::read_fixed64(#data, &mut pos)?))
        }
        kind => common::from_u64(kind, quote!(::voltwire::wire::read_varint(#data, &mut pos)?)),
    }
}

/// Statements reading a UTF-8 validated string span into `s`.
fn read_string_span() -> TokenStream {
    quote! {
        let len = ::voltwire::wire::read_len_prefix(data, &mut pos)?;
        let s = ::core::str::from_utf8(&data[pos..pos + len])
            .map_err(|_| ::voltwire::DecodeError::InvalidUtf8)?;
        pos += len;
    }
}

fn wt_lit(wire_type: WireType) -> proc_macro2::Literal {
    u32_lit(wire_type as u32)
}

fn field_arms(message: &MessagePlan, field: &FieldPlan) -> Vec<TokenStream> {
    let ident = field_ident(&field.name);
    let number = u32_lit(field.number);

    if let PlanCardinality::Map(map) = &field.cardinality {
        return vec![map_arm(field, map)];
    }

    if let Some(oneof) = &field.oneof {
        let enum_name = type_ident(&oneof.enum_name);
        let variant = type_ident(&oneof.variant);
        let group_ident = field_ident(
            &message
                .oneofs
                .iter()
                .find(|g| g.enum_name == oneof.enum_name)
                .expect("oneof group")
                .field_name,
        );
        let wt = wt_lit(field.kind.wire_type());
        let arm = match field.kind {
            Kind::Message => {
                let target = field.message.as_ref().expect("message ref");
                let ty = type_ident(&target.rust_name);
                let wrap = if target.boxed {
                    quote!(Box::new(m))
                } else {
                    quote!(m)
                };
                quote! {
                    (#number, #wt) => {
                        let len = ::voltwire::wire::read_len_prefix(data, &mut pos)?;
                        let mut m = #ty::default();
                        ::voltwire::WireRead::merge_scope(&mut m, &data[pos..pos + len], None, depth + 1)?;
                        self.#group_ident = Some(#enum_name::#variant(#wrap));
                        pos += len;
                    }
                }
            }
            Kind::Group => {
                let target = field.message.as_ref().expect("message ref");
                let ty = type_ident(&target.rust_name);
                let wrap = if target.boxed {
                    quote!(Box::new(m))
                } else {
                    quote!(m)
                };
                quote! {
                    (#number, #wt) => {
                        let mut m = #ty::default();
                        let used = ::voltwire::WireRead::merge_scope(&mut m, &data[pos..], Some(#number), depth + 1)?;
                        self.#group_ident = Some(#enum_name::#variant(#wrap));
                        pos += used;
                    }
                }
            }
            Kind::String => {
                let span = read_string_span();
                quote! {
                    (#number, #wt) => {
                        #span
                        self.#group_ident = Some(#enum_name::#variant(s.to_owned()));
                    }
                }
            }
            Kind::Bytes => quote! {
                (#number, #wt) => {
                    let len = ::voltwire::wire::read_len_prefix(data, &mut pos)?;
                    self.#group_ident = Some(#enum_name::#variant(data[pos..pos + len].to_vec()));
                    pos += len;
                }
            },
            kind => {
                let read = read_scalar(kind, quote!(data));
                quote! {
                    (#number, #wt) => {
                        self.#group_ident = Some(#enum_name::#variant(#read));
                    }
                }
            }
        };
        return vec![arm];
    }

    match &field.cardinality {
        PlanCardinality::Map(_) => unreachable!("handled above"),
        PlanCardinality::Repeated { .. } => match field.kind {
            Kind::Message => {
                let target = field.message.as_ref().expect("message ref");
                let ty = type_ident(&target.rust_name);
                vec![quote! {
                    (#number, 2) => {
                        let len = ::voltwire::wire::read_len_prefix(data, &mut pos)?;
                        let mut m = #ty::default();
                        ::voltwire::WireRead::merge_scope(&mut m, &data[pos..pos + len], None, depth + 1)?;
                        self.#ident.push(m);
                        pos += len;
                    }
                }]
            }
            Kind::Group => {
                let target = field.message.as_ref().expect("message ref");
                let ty = type_ident(&target.rust_name);
                vec![quote! {
                    (#number, 3) => {
                        let mut m = #ty::default();
                        let used = ::voltwire::WireRead::merge_scope(&mut m, &data[pos..], Some(#number), depth + 1)?;
                        self.#ident.push(m);
                        pos += used;
                    }
                }]
            }
            Kind::String => {
                let span = read_string_span();
                vec![quote! {
                    (#number, 2) => {
                        #span
                        self.#ident.push(s.to_owned());
                    }
                }]
            }
            Kind::Bytes => vec![quote! {
                (#number, 2) => {
                    let len = ::voltwire::wire::read_len_prefix(data, &mut pos)?;
                    self.#ident.push(data[pos..pos + len].to_vec());
                    pos += len;
                }
            }],
            kind => {
                // Decoders accept both the packed and the unpacked form for
                // numeric scalars, whatever the declared encoding.
                let wt = wt_lit(kind.wire_type());
                let single = read_scalar(kind, quote!(data));
                let packed_elem = read_scalar(kind, quote!((&data[..end])));
                vec![
                    quote! {
                        (#number, #wt) => {
                            self.#ident.push(#single);
                        }
                    },
                    quote! {
                        (#number, 2) => {
                            let len = ::voltwire::wire::read_len_prefix(data, &mut pos)?;
                            let end = pos + len;
                            while pos < end {
                                self.#ident.push(#packed_elem);
                            }
                        }
                    },
                ]
            }
        },
        PlanCardinality::Singular => match field.kind {
            Kind::Message => {
                let wt = wt_lit(WireType::LengthDelimited);
                vec![quote! {
                    (#number, #wt) => {
                        let len = ::voltwire::wire::read_len_prefix(data, &mut pos)?;
                        let m = self.#ident.get_or_insert_with(::core::default::Default::default);
                        m.clear();
                        ::voltwire::WireRead::merge_scope(m, &data[pos..pos + len], None, depth + 1)?;
                        pos += len;
                    }
                }]
            }
            Kind::Group => vec![quote! {
                (#number, 3) => {
                    let m = self.#ident.get_or_insert_with(::core::default::Default::default);
                    m.clear();
                    let used = ::voltwire::WireRead::merge_scope(m, &data[pos..], Some(#number), depth + 1)?;
                    pos += used;
                }
            }],
            Kind::String => {
                let span = read_string_span();
                let assign = if field.presence.is_explicit() {
                    quote! {
                        let slot = self.#ident.get_or_insert_with(String::new);
                        slot.clear();
                        slot.push_str(s);
                    }
                } else {
                    quote! {
                        self.#ident.clear();
                        self.#ident.push_str(s);
                    }
                };
                vec![quote! {
                    (#number, 2) => {
                        #span
                        #assign
                    }
                }]
            }
            Kind::Bytes => {
                let assign = if field.presence.is_explicit() {
                    quote! {
                        let slot = self.#ident.get_or_insert_with(Vec::new);
                        slot.clear();
                        slot.extend_from_slice(&data[pos..pos + len]);
                    }
                } else {
                    quote! {
                        self.#ident.clear();
                        self.#ident.extend_from_slice(&data[pos..pos + len]);
                    }
                };
                vec![quote! {
                    (#number, 2) => {
                        let len = ::voltwire::wire::read_len_prefix(data, &mut pos)?;
                        #assign
                        pos += len;
                    }
                }]
            }
            kind => {
                let wt = wt_lit(kind.wire_type());
                let read = read_scalar(kind, quote!(data));
                let assign = if field.presence.is_explicit() {
                    quote! { self.#ident = Some(#read); }
                } else {
                    quote! { self.#ident = #read; }
                };
                vec![quote! {
                    (#number, #wt) => {
                        #assign
                    }
                }]
            }
        },
    }
}

fn map_arm(field: &FieldPlan, map: &MapPlan) -> TokenStream {
    let ident = field_ident(&field.name);
    let number = u32_lit(field.number);

    let key_ty = common::scalar_type(map.key_kind);
    let key_tag = u64_lit(u64::from(8 | map.key_kind.wire_type() as u32));
    let key_read = match map.key_kind {
        Kind::String => quote! {
            let klen = ::voltwire::wire::read_len_prefix(&data[..end], &mut pos)?;
            let s = ::core::str::from_utf8(&data[pos..pos + klen])
                .map_err(|_| ::voltwire::DecodeError::InvalidUtf8)?;
            key = s.to_owned();
            pos += klen;
        },
        kind => {
            let read = read_scalar(kind, quote!((&data[..end])));
            quote! { key = #read; }
        }
    };

    let value_tag = u64_lit(u64::from(16 | map.value_kind.wire_type() as u32));
    let (value_ty, value_read) = match &map.value_message {
        Some(target) => {
            let ty = type_ident(&target.rust_name);
            (
                quote!(#ty),
                quote! {
                    let vlen = ::voltwire::wire::read_len_prefix(&data[..end], &mut pos)?;
                    value.clear();
                    ::voltwire::WireRead::merge_scope(&mut value, &data[pos..pos + vlen], None, depth + 1)?;
                    pos += vlen;
                },
            )
        }
        None => {
            let ty = common::scalar_type(map.value_kind);
            let read = match map.value_kind {
                Kind::String => quote! {
                    let vlen = ::voltwire::wire::read_len_prefix(&data[..end], &mut pos)?;
                    let s = ::core::str::from_utf8(&data[pos..pos + vlen])
                        .map_err(|_| ::voltwire::DecodeError::InvalidUtf8)?;
                    value = s.to_owned();
                    pos += vlen;
                },
                Kind::Bytes => quote! {
                    let vlen = ::voltwire::wire::read_len_prefix(&data[..end], &mut pos)?;
                    value = data[pos..pos + vlen].to_vec();
                    pos += vlen;
                },
                kind => {
                    let read = read_scalar(kind, quote!((&data[..end])));
                    quote! { value = #read; }
                }
            };
            (ty, read)
        }
    };

    // Entries merge with last-value-per-key semantics; unknown entry
    // fields are skipped by their framing.
    quote! {
        (#number, 2) => {
            let len = ::voltwire::wire::read_len_prefix(data, &mut pos)?;
            let end = pos + len;
            let mut key: #key_ty = ::core::default::Default::default();
            let mut value: #value_ty = ::core::default::Default::default();
            while pos < end {
                let entry_tag = ::voltwire::wire::read_varint(&data[..end], &mut pos)?;
                match entry_tag {
                    #key_tag => {
                        #key_read
                    }
                    #value_tag => {
                        #value_read
                    }
                    _ => {
                        if entry_tag >> 3 == 0 {
                            return Err(::voltwire::DecodeError::InvalidTag);
                        }
                        let entry_wt = (entry_tag & 0x7) as u32;
                        if entry_wt == 4 {
                            return Err(::voltwire::DecodeError::UnexpectedEndGroup);
                        }
                        ::voltwire::wire::skip_field(&data[..end], &mut pos, entry_wt)?;
                    }
                }
            }
            self.#ident.insert(key, value);
        }
    }
}
