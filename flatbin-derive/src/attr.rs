//! Attribute parsing for the flatbin derive macro.

use syn::{Attribute, Expr, ExprLit, Lit, Result};

/// Byte-order directive value.
#[derive(Clone, Copy)]
pub enum Order {
    Little,
    Big,
}

/// Parsed field directives from #[bin(...)]
#[derive(Default)]
pub struct FieldAttrs {
    /// Omit this field from the output entirely.
    pub skip: bool,
    /// Prefix the field with a one-byte presence flag.
    pub optional: bool,
    /// Byte-order override; `None` means the crate default (little).
    pub order: Option<Order>,
    /// Name of the sibling field whose element count this field's value
    /// supplies.
    pub sizeof: Option<String>,
}

impl FieldAttrs {
    /// Parse directives from a field's attribute list.
    pub fn from_attrs(attrs: &[Attribute]) -> Result<Self> {
        let mut result = FieldAttrs::default();

        for attr in attrs {
            if attr.path().is_ident("bin") {
                result.parse_bin_attr(attr)?;
            }
        }

        Ok(result)
    }

    fn parse_bin_attr(&mut self, attr: &Attribute) -> Result<()> {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                self.skip = true;
            } else if meta.path.is_ident("optional") {
                self.optional = true;
            } else if meta.path.is_ident("order") {
                let value: Expr = meta.value()?.parse()?;
                self.order = Some(parse_order(&value)?);
            } else if meta.path.is_ident("sizeof") {
                let value: Expr = meta.value()?.parse()?;
                self.sizeof = Some(parse_string(&value)?);
            } else if meta.input.peek(syn::Token![=]) {
                // Unknown directive with a value: consume and ignore it so
                // annotations from newer format revisions still compile.
                let _: Expr = meta.value()?.parse()?;
            }
            // Unknown bare directives are ignored the same way.
            Ok(())
        })
    }
}

fn parse_order(value: &Expr) -> Result<Order> {
    let s = parse_string(value)?;
    match s.as_str() {
        "little" => Ok(Order::Little),
        "big" => Ok(Order::Big),
        _ => Err(syn::Error::new_spanned(
            value,
            "expected \"big\" or \"little\"",
        )),
    }
}

fn parse_string(value: &Expr) -> Result<String> {
    if let Expr::Lit(ExprLit {
        lit: Lit::Str(lit), ..
    }) = value
    {
        Ok(lit.value())
    } else {
        Err(syn::Error::new_spanned(value, "expected string literal"))
    }
}
