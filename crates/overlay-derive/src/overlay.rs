use darling::{FromDeriveInput, FromField, ast::Data, util::Ignored};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Error, Ident, Type};

///
/// OverlayInput
///

#[derive(FromDeriveInput)]
#[darling(attributes(overlay), supports(struct_named))]
struct OverlayInput {
    ident: Ident,
    generics: syn::Generics,
    data: Data<Ignored, OverlayField>,
}

///
/// OverlayField
///
/// A named field, optionally carrying a copy-policy declaration. A
/// declaration must set both flags; one without the other is rejected at
/// expansion time.
///

#[derive(FromField)]
#[darling(attributes(overlay))]
struct OverlayField {
    ident: Option<Ident>,
    ty: Type,

    #[darling(default)]
    on_create: Option<bool>,

    #[darling(default)]
    on_update: Option<bool>,
}

// derive_overlay
pub fn derive_overlay(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    let parsed = match OverlayInput::from_derive_input(&input) {
        Ok(parsed) => parsed,
        Err(err) => return err.write_errors(),
    };

    let ident = &parsed.ident;
    let (impl_generics, ty_generics, where_clause) = parsed.generics.split_for_impl();

    let fields = parsed
        .data
        .take_struct()
        .expect("struct_named is enforced by darling")
        .fields;

    let mut field_models = Vec::new();
    let mut read_arms = Vec::new();
    let mut write_arms = Vec::new();
    let mut policy_bindings = Vec::new();

    for field in &fields {
        let field_ident = field.ident.as_ref().expect("named field");
        let field_name = field_ident.to_string();
        let field_ty = &field.ty;

        field_models.push(quote! {
            ::overlay::model::FieldModel::new::<#field_ty>(#field_name)
        });

        read_arms.push(quote! {
            #field_name => ::std::option::Option::Some(
                ::std::boxed::Box::new(::std::clone::Clone::clone(&self.#field_ident)),
            ),
        });

        write_arms.push(quote! {
            #field_name => match value.downcast::<#field_ty>() {
                ::std::result::Result::Ok(value) => {
                    self.#field_ident = *value;
                    ::std::result::Result::Ok(())
                }
                ::std::result::Result::Err(_) => ::std::result::Result::Err(
                    ::overlay::Error::assignment(#field_name, ::std::any::type_name::<Self>()),
                ),
            },
        });

        match (field.on_create, field.on_update) {
            (Some(on_create), Some(on_update)) => policy_bindings.push(quote! {
                ::overlay::policy::PolicyBinding {
                    field: #field_name,
                    policy: ::overlay::policy::CopyPolicy {
                        on_create: #on_create,
                        on_update: #on_update,
                    },
                },
            }),
            (None, None) => {}
            (Some(_), None) => {
                return Error::new_spanned(
                    field_ident,
                    "copy policy requires `on_update` alongside `on_create`",
                )
                .to_compile_error();
            }
            (None, Some(_)) => {
                return Error::new_spanned(
                    field_ident,
                    "copy policy requires `on_create` alongside `on_update`",
                )
                .to_compile_error();
            }
        }
    }

    quote! {
        impl #impl_generics ::overlay::traits::FieldSchema for #ident #ty_generics #where_clause {
            fn fields() -> ::std::vec::Vec<::overlay::model::FieldModel> {
                ::std::vec![#(#field_models),*]
            }
        }

        impl #impl_generics ::overlay::traits::FieldRead for #ident #ty_generics #where_clause {
            fn read_field(
                &self,
                field: &str,
            ) -> ::std::option::Option<::std::boxed::Box<dyn ::std::any::Any>> {
                match field {
                    #(#read_arms)*
                    _ => ::std::option::Option::None,
                }
            }
        }

        impl #impl_generics ::overlay::traits::FieldWrite for #ident #ty_generics #where_clause {
            fn construct() -> ::std::result::Result<Self, ::overlay::Error> {
                ::std::result::Result::Ok(<Self as ::std::default::Default>::default())
            }

            fn write_field(
                &mut self,
                field: &str,
                value: ::std::boxed::Box<dyn ::std::any::Any>,
            ) -> ::std::result::Result<(), ::overlay::Error> {
                match field {
                    #(#write_arms)*
                    _ => ::std::result::Result::Err(
                        ::overlay::Error::assignment(field, ::std::any::type_name::<Self>()),
                    ),
                }
            }
        }

        impl #impl_generics ::overlay::traits::FieldPolicies for #ident #ty_generics #where_clause {
            fn field_policies() -> ::std::vec::Vec<::overlay::policy::PolicyBinding> {
                ::std::vec![#(#policy_bindings)*]
            }
        }
    }
}
