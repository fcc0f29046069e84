use proc_macro::TokenStream;
use quote::quote;
use syn::parse::Parser;

/// Generate the boilerplate shared by every color value whose fields are its
/// channels: public fields, common derives, a `const fn new`, `to_array` and
/// conversions to and from a fixed size array.
#[proc_macro]
pub fn gen_channels(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if !input.generics.params.is_empty() {
        return quote! {
            compile_error!("Channel structs can not be generic.");
        }
        .into();
    }

    let syn::Fields::Named(ref mut named) = input.fields else {
        return quote! {
            compile_error!("Channel structs must name each of their channels.");
        }
        .into();
    };

    if named.named.len() < 3 {
        return quote! {
            compile_error!("Channel structs need at least 3 channels.");
        }
        .into();
    }

    let channel_type = named.named[0].ty.clone();
    if named.named.iter().any(|f| f.ty != channel_type) {
        return quote! {
            compile_error!("All channels must have the same type.");
        }
        .into();
    }

    // Channels are always public.
    named.named.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    let channels = named
        .named
        .iter()
        .filter_map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    let len = channels.len();

    let attr = syn::Attribute::parse_outer
        .parse2(syn::parse_quote! {
            #[derive(Clone, Copy, Debug, Default, PartialEq)]
        })
        .unwrap();
    input.attrs.extend(attr);

    let struct_name = input.ident.clone();

    let channel_impl = quote! {
        impl #struct_name {
            /// Create a new value from its channels.
            #[must_use]
            #[inline]
            pub const fn new(#(#channels: #channel_type),*) -> Self {
                Self { #(#channels),* }
            }

            /// Return the channels in declaration order.
            #[must_use]
            #[inline]
            pub const fn to_array(self) -> [#channel_type; #len] {
                [#(self.#channels),*]
            }
        }

        impl From<[#channel_type; #len]> for #struct_name {
            fn from([#(#channels),*]: [#channel_type; #len]) -> Self {
                Self::new(#(#channels),*)
            }
        }

        impl From<#struct_name> for [#channel_type; #len] {
            fn from(value: #struct_name) -> Self {
                value.to_array()
            }
        }
    };

    quote! {
        #input
        #channel_impl
    }
    .into()
}
