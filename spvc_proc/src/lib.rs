use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{
    Attribute, Ident, LitByteStr, LitStr, Result, Token, Type, Visibility, braced,
    parenthesized,
    parse::{Parse, ParseStream},
    parse_macro_input,
    punctuated::Punctuated,
};

/// A single C entry point in the table
struct Function {
    attrs: Vec<Attribute>,
    name: Ident,
    args: Vec<(Ident, Type)>,
    ret: Option<Type>,
}

/// The full native_api input
struct NativeApi {
    attrs: Vec<Attribute>,
    vis: Visibility,
    name: Ident,
    functions: Vec<Function>,
}

impl Parse for NativeApi {
    fn parse(input: ParseStream) -> Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let vis: Visibility = input.parse()?;
        input.parse::<Token![struct]>()?;
        let name: Ident = input.parse()?;

        let content;
        braced!(content in input);

        let mut functions = Vec::new();
        while !content.is_empty() {
            // [attrs] fn name(args) [-> Ret];
            let attrs = content.call(Attribute::parse_outer)?;
            content.parse::<Token![fn]>()?;
            let name: Ident = content.parse()?;

            let args_content;
            parenthesized!(args_content in content);
            let args_parsed: Punctuated<(Ident, Type), Token![,]> = args_content.parse_terminated(
                |input| {
                    let name: Ident = input.parse()?;
                    input.parse::<Token![:]>()?;
                    let ty: Type = input.parse()?;
                    Ok((name, ty))
                },
                Token![,],
            )?;
            let args: Vec<_> = args_parsed.into_iter().collect();

            let ret = if content.peek(Token![->]) {
                content.parse::<Token![->]>()?;
                Some(content.parse::<Type>()?)
            } else {
                None
            };

            content.parse::<Token![;]>()?;

            functions.push(Function {
                attrs,
                name,
                args,
                ret,
            });
        }

        Ok(NativeApi {
            attrs,
            vis,
            name,
            functions,
        })
    }
}

fn fn_pointer_type(function: &Function) -> TokenStream2 {
    let arg_types: Vec<_> = function.args.iter().map(|(_, ty)| ty).collect();
    match &function.ret {
        Some(ret) => quote! { unsafe extern "C" fn(#(#arg_types),*) -> #ret },
        None => quote! { unsafe extern "C" fn(#(#arg_types),*) },
    }
}

fn generate_field(function: &Function) -> TokenStream2 {
    let attrs = &function.attrs;
    let name = &function.name;
    let ty = fn_pointer_type(function);

    quote! {
        #(#attrs)*
        pub #name: ::std::option::Option<#ty>
    }
}

fn generate_getter(function: &Function) -> TokenStream2 {
    let name = &function.name;
    let symbol = LitStr::new(&name.to_string(), name.span());
    let ty = fn_pointer_type(function);

    quote! {
        #[inline]
        pub fn #name(&self) -> crate::Result<#ty> {
            self.#name.ok_or_else(|| unresolved_symbol(#symbol))
        }
    }
}

fn generate_load(function: &Function) -> TokenStream2 {
    let name = &function.name;
    let ty = fn_pointer_type(function);
    let mut symbol = name.to_string().into_bytes();
    symbol.push(0);
    let symbol = LitByteStr::new(&symbol, Span::call_site());

    quote! {
        #name: {
            let symbol = resolve(unsafe { ::std::ffi::CStr::from_bytes_with_nul_unchecked(#symbol) });
            if symbol.is_null() {
                None
            } else {
                Some(unsafe { ::std::mem::transmute::<*const ::std::ffi::c_void, #ty>(symbol) })
            }
        }
    }
}

/// Declares a table of C function pointers resolved at runtime.
///
/// ```ignore
/// native_api! {
///     pub struct NativeApi {
///         fn spvc_context_create(context: *mut spvc_context) -> spvc_result;
///         fn spvc_context_destroy(context: spvc_context);
///     }
/// }
/// ```
///
/// Generates the struct with one `Option` field per entry, a `SYMBOLS` list,
/// an `unsafe fn load_with(resolver)` constructor and one getter per entry
/// returning `crate::Result`. A getter for an entry the resolver could not
/// find returns the error built by `unresolved_symbol(name)` from the
/// invoking module.
#[proc_macro]
pub fn native_api(input: TokenStream) -> TokenStream {
    let api = parse_macro_input!(input as NativeApi);

    let attrs = &api.attrs;
    let vis = &api.vis;
    let name = &api.name;

    let fields: Vec<_> = api.functions.iter().map(generate_field).collect();
    let getters: Vec<_> = api.functions.iter().map(generate_getter).collect();
    let loads: Vec<_> = api.functions.iter().map(generate_load).collect();
    let symbols: Vec<_> = api
        .functions
        .iter()
        .map(|f| LitStr::new(&f.name.to_string(), f.name.span()))
        .collect();
    let names: Vec<_> = api.functions.iter().map(|f| &f.name).collect();

    let expanded = quote! {
        #(#attrs)*
        #[derive(Clone, Copy)]
        #vis struct #name {
            #(#fields),*
        }

        impl #name {
            /// Every symbol in the table, in declaration order.
            pub const SYMBOLS: &'static [&'static str] = &[#(#symbols),*];

            /// Builds the table from a symbol resolver.
            ///
            /// # Safety
            ///
            /// Every non-null pointer returned by `resolve` must be a function
            /// with the C signature declared for that symbol.
            pub unsafe fn load_with<F>(mut resolve: F) -> Self
            where
                F: FnMut(&::std::ffi::CStr) -> *const ::std::ffi::c_void,
            {
                Self {
                    #(#loads),*
                }
            }

            /// Names of the entries the resolver could not find.
            pub fn unresolved(&self) -> ::std::vec::Vec<&'static str> {
                let resolved = [#(self.#names.is_some()),*];
                Self::SYMBOLS
                    .iter()
                    .zip(resolved)
                    .filter_map(|(name, resolved)| (!resolved).then_some(*name))
                    .collect()
            }

            #(#getters)*
        }

        impl ::std::fmt::Debug for #name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.debug_struct(stringify!(#name))
                    .field("symbols", &Self::SYMBOLS.len())
                    .finish()
            }
        }
    };

    TokenStream::from(expanded)
}
