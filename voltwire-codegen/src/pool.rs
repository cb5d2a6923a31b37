//! Emission of per-message pooling and reset-for-reuse.
//!
//! Reset walks fields in declaration order: containers worth keeping are
//! emptied and set aside, pool-eligible nested messages are recycled into
//! their own pools, then one generic `clear` wipes the remaining state
//! (scalars, explicit-presence slots, maps, retained unknown bytes) before
//! the kept handles are reassigned. Maps are deliberately not
//! capacity-preserved. The instance that results is logically
//! indistinguishable from a fresh one.
use {
    crate::{
        descriptor::Kind,
        names::{field_ident, shouty_case, type_ident},
        plan::{MessagePlan, PlanCardinality, Presence},
    },
    proc_macro2::TokenStream,
    quote::quote,
};

pub(crate) fn emit(message: &MessagePlan) -> TokenStream {
    let name = type_ident(&message.rust_name);
    let pool_static = type_ident(&format!("{}_POOL", shouty_case(&message.rust_name)));

    let mut save = Vec::new();
    let mut restore = Vec::new();

    for field in &message.fields {
        if field.oneof.is_some() {
            continue;
        }
        let ident = field_ident(&field.name);
        match &field.cardinality {
            // Maps are dropped whole by the generic clear.
            PlanCardinality::Map(_) => {}
            PlanCardinality::Repeated { .. } => {
                match field.kind {
                    Kind::Message | Kind::Group => {
                        if field.message.as_ref().is_some_and(|m| m.pooled) {
                            save.push(quote! {
                                for m in self.#ident.drain(..) {
                                    ::voltwire::Recycle::recycle(m);
                                }
                            });
                        } else {
                            save.push(quote! { self.#ident.clear(); });
                        }
                    }
                    _ => save.push(quote! { self.#ident.clear(); }),
                }
                save.push(quote! { let #ident = ::core::mem::take(&mut self.#ident); });
                restore.push(quote! { self.#ident = #ident; });
            }
            PlanCardinality::Singular => match field.kind {
                Kind::Message | Kind::Group => {
                    let target = field.message.as_ref().expect("message ref");
                    if target.pooled {
                        let payload = if target.boxed { quote!(*m) } else { quote!(m) };
                        save.push(quote! {
                            if let Some(m) = self.#ident.take() {
                                ::voltwire::Recycle::recycle(#payload);
                            }
                        });
                    }
                }
                Kind::Bytes if field.presence == Presence::Implicit => {
                    save.push(quote! {
                        self.#ident.clear();
                        let #ident = ::core::mem::take(&mut self.#ident);
                    });
                    restore.push(quote! { self.#ident = #ident; });
                }
                _ => {}
            },
        }
    }

    for group in &message.oneofs {
        let group_ident = field_ident(&group.field_name);
        let enum_name = type_ident(&group.enum_name);
        let mut keep_arms = Vec::new();
        let mut recycle_arms = Vec::new();
        for &i in &group.members {
            let field = &message.fields[i];
            let variant = type_ident(&field.oneof.as_ref().expect("oneof member").variant);
            match field.kind {
                // The whole boxed variant is kept, not just its bytes: the
                // oneof slot owns the wrapper as a unit.
                Kind::Bytes => keep_arms.push(quote! {
                    Some(#enum_name::#variant(mut b)) => {
                        b.clear();
                        Some(#enum_name::#variant(b))
                    }
                }),
                Kind::Message | Kind::Group => {
                    let target = field.message.as_ref().expect("message ref");
                    if target.pooled {
                        let payload = if target.boxed { quote!(*m) } else { quote!(m) };
                        recycle_arms.push((
                            quote! {
                                Some(#enum_name::#variant(m)) => {
                                    ::voltwire::Recycle::recycle(#payload);
                                }
                            },
                            quote! {
                                Some(#enum_name::#variant(m)) => {
                                    ::voltwire::Recycle::recycle(#payload);
                                    None
                                }
                            },
                        ));
                    }
                }
                _ => {}
            }
        }

        if !keep_arms.is_empty() {
            let recycle: Vec<TokenStream> =
                recycle_arms.into_iter().map(|(_, keeping)| keeping).collect();
            save.push(quote! {
                let #group_ident = match self.#group_ident.take() {
                    #(#keep_arms)*
                    #(#recycle)*
                    _ => None,
                };
            });
            restore.push(quote! { self.#group_ident = #group_ident; });
        } else if !recycle_arms.is_empty() {
            let recycle: Vec<TokenStream> =
                recycle_arms.into_iter().map(|(plain, _)| plain).collect();
            save.push(quote! {
                match self.#group_ident.take() {
                    #(#recycle)*
                    _ => {}
                }
            });
        }
    }

    quote! {
        static #pool_static: ::voltwire::Pool<#name> = ::voltwire::Pool::new();

        impl ::voltwire::Recycle for #name {
            fn reset_for_reuse(&mut self) {
                #(#save)*
                self.clear();
                #(#restore)*
            }

            fn pool() -> &'static ::voltwire::Pool<Self> {
                &#pool_static
            }
        }
    }
}
