use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::parse::Parser;

/// Generate a color model from a struct with exactly three component fields.
///
/// The fields are made public and the model gets a `new` constructor,
/// `to_components` and conversions from/to `Components` and `[Component; 3]`.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if input.fields.len() != 3 {
        return quote! {
            compile_error!("Models must have exactly 3 fields, one for each component of the color.")
        }
        .into();
    }

    if !input.generics.params.is_empty() {
        return syn::Error::new(Span::call_site(), "Models can not be generic.")
            .to_compile_error()
            .into();
    }

    let field_names = input
        .fields
        .iter()
        .filter_map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    if field_names.len() != 3 {
        return syn::Error::new(Span::call_site(), "Model fields must be named.")
            .to_compile_error()
            .into();
    }

    let field1 = &field_names[0];
    let field2 = &field_names[1];
    let field3 = &field_names[2];

    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    let attrs = match syn::Attribute::parse_outer.parse2(quote! {
        #[derive(Clone, Copy, Debug, PartialEq)]
    }) {
        Ok(attrs) => attrs,
        Err(err) => return err.to_compile_error().into(),
    };
    input.attrs.extend(attrs);

    let struct_name = input.ident.clone();

    let model_impl = quote! {
        impl #struct_name {
            /// Create a new color in this model.
            pub fn new(
                #field1: crate::color::Component,
                #field2: crate::color::Component,
                #field3: crate::color::Component,
            ) -> Self {
                Self {
                    #field1,
                    #field2,
                    #field3,
                }
            }

            /// Convert this model into generic components.
            pub fn to_components(&self) -> crate::color::Components {
                crate::color::Components(self.#field1, self.#field2, self.#field3)
            }
        }

        impl From<crate::color::Components> for #struct_name {
            fn from(value: crate::color::Components) -> Self {
                Self::new(value.0, value.1, value.2)
            }
        }

        impl From<[crate::color::Component; 3]> for #struct_name {
            fn from([c0, c1, c2]: [crate::color::Component; 3]) -> Self {
                Self::new(c0, c1, c2)
            }
        }

        impl From<#struct_name> for [crate::color::Component; 3] {
            fn from(value: #struct_name) -> Self {
                [value.#field1, value.#field2, value.#field3]
            }
        }
    };

    quote! {
        #input
        #model_impl
    }
    .into()
}
