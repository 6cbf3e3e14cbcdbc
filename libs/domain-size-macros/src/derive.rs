//! Expansion of `#[derive(DomainSize)]`.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::parse::{Parse, ParseStream};
use syn::{DeriveInput, Expr, ExprLit, ExprPath, ExprUnary, Ident, Lit, LitInt, Token, UnOp};

const ATTR: &str = "domain_size";

/// The size given in `#[domain_size(...)]`.
enum SizeValue {
    /// Validated at expansion time.
    Literal(LitInt),
    /// Type-checked by the compiler against `u32`.
    Const(ExprPath),
}

impl ToTokens for SizeValue {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        match self {
            Self::Literal(lit) => lit.to_tokens(tokens),
            Self::Const(path) => path.to_tokens(tokens),
        }
    }
}

/// Arguments of one `#[domain_size(...)]` attribute.
struct DomainSizeArgs {
    value: SizeValue,
}

impl Parse for DomainSizeArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.is_empty() {
            return Err(input.error("expected a domain size, e.g. `#[domain_size(6)]`"));
        }

        if input.peek(Ident) && input.peek2(Token![=]) {
            let key: Ident = input.parse()?;
            if key != "value" {
                return Err(syn::Error::new_spanned(
                    &key,
                    format!("unknown key '{key}'; expected 'value'"),
                ));
            }
            input.parse::<Token![=]>()?;
        }

        let value = classify(input.parse()?)?;

        input.parse::<Option<Token![,]>>()?;
        if !input.is_empty() {
            return Err(input.error("unexpected tokens after domain size"));
        }

        Ok(Self { value })
    }
}

fn classify(expr: Expr) -> syn::Result<SizeValue> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Int(lit), ..
        }) => {
            let suffix = lit.suffix();
            if !suffix.is_empty() && suffix != "u32" {
                return Err(syn::Error::new_spanned(
                    &lit,
                    format!("domain size must be a `u32`, found suffix `{suffix}`"),
                ));
            }
            if lit.base10_parse::<u32>().is_err() {
                return Err(syn::Error::new_spanned(
                    &lit,
                    format!("domain size {} does not fit in u32", lit.base10_digits()),
                ));
            }
            Ok(SizeValue::Literal(lit))
        }
        Expr::Unary(ExprUnary {
            op: UnOp::Neg(_), ..
        }) => Err(syn::Error::new_spanned(expr, "domain size cannot be negative")),
        Expr::Path(path) if path.qself.is_none() => Ok(SizeValue::Const(path)),
        // Literals forwarded through `macro_rules!` arrive wrapped in an invisible group.
        Expr::Group(group) => classify(*group.expr),
        other => Err(syn::Error::new_spanned(
            other,
            "expected an integer literal or a path to a `u32` constant",
        )),
    }
}

/// Find the single `#[domain_size(...)]` attribute on the input.
fn parse_domain_size_attr(input: &DeriveInput) -> syn::Result<SizeValue> {
    let mut value = None;

    for attr in &input.attrs {
        if !attr.path().is_ident(ATTR) {
            continue;
        }
        if value.is_some() {
            return Err(syn::Error::new_spanned(
                attr,
                "duplicate #[domain_size(...)] attribute",
            ));
        }
        let args: DomainSizeArgs = attr.parse_args()?;
        value = Some(args.value);
    }

    value.ok_or_else(|| {
        syn::Error::new_spanned(
            &input.ident,
            format!(
                "#[derive(DomainSize)] requires a #[domain_size(...)] attribute on `{}`",
                input.ident
            ),
        )
    })
}

/// Expands `#[derive(DomainSize)]`.
///
/// Generates `impl HasDomainSize` and, when the type has no generic parameters,
/// a registration in the runtime registry.
pub fn expand_derive_domain_size(input: &DeriveInput) -> syn::Result<TokenStream> {
    let value = parse_domain_size_attr(input)?;
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let registration = if input.generics.params.is_empty() {
        quote! {
            ::domain_size::register_domain_size!(#name);
        }
    } else {
        quote! {}
    };

    Ok(quote! {
        impl #impl_generics ::domain_size::HasDomainSize for #name #ty_generics #where_clause {
            const DOMAIN_SIZE: ::domain_size::DomainSize = ::domain_size::DomainSize::new(#value);
        }

        #registration
    })
}
