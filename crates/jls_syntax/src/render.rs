//! Rendering type names: canonical display text and binary class names.
//!
//! Display form: `pkg.Name<A, ? extends B>[][]`, with exactly one space after each comma and none elsewhere.
//! Binary form: the runtime class-name encoding, e.g. `[[I` or `[Lpkg.Name;`. Type arguments never appear in it.

use std::fmt::{self, Write};

use jls_core::lang::primitives;

use crate::ast::{ArrayType, ElementType, ReferenceType, TypeArgument, TypeName};

impl TypeName {
    /// Binary (class-loader) name.
    ///
    /// | type | binary name |
    /// |---|---|
    /// | `int` | `int` |
    /// | `int[][]` | `[[I` |
    /// | `p.T<X>` | `p.T` |
    /// | `p.T[]` | `[Lp.T;` |
    pub fn binary_name(&self) -> String {
        match self {
            TypeName::Primitive(id) => primitives::as_str(*id).to_string(),
            TypeName::Reference(r) => r.qualified_name(),
            TypeName::Array(a) => {
                let mut out = "[".repeat(a.dimensions());
                match a.element() {
                    ElementType::Primitive(id) => out.push(primitives::descriptor(*id)),
                    ElementType::Reference(r) => {
                        out.push('L');
                        out.push_str(&r.qualified_name());
                        out.push(';');
                    }
                }
                out
            }
        }
    }

    /// Alias of [`TypeName::binary_name`].
    pub fn class_name(&self) -> String {
        self.binary_name()
    }

    /// Display form, with package prefixes everywhere when `qualified` and nowhere otherwise.
    pub fn name(&self, qualified: bool) -> String {
        Packages { value: self, qualified }.to_string()
    }
}

impl ReferenceType {
    /// Display form with or without package prefixes.
    pub fn name(&self, qualified: bool) -> String {
        Packages { value: self, qualified }.to_string()
    }
}

/// Renders `value` with package prefixes switched on or off.
struct Packages<'a, T> {
    value: &'a T,
    qualified: bool,
}

impl fmt::Display for Packages<'_, TypeName> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_type(f, self.value, self.qualified)
    }
}

impl fmt::Display for Packages<'_, ReferenceType> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_reference(f, self.value, self.qualified)
    }
}

fn write_type(out: &mut impl Write, ty: &TypeName, qualified: bool) -> fmt::Result {
    match ty {
        TypeName::Primitive(id) => out.write_str(primitives::as_str(*id)),
        TypeName::Reference(r) => write_reference(out, r, qualified),
        TypeName::Array(a) => write_array(out, a, qualified),
    }
}

fn write_array(out: &mut impl Write, array: &ArrayType, qualified: bool) -> fmt::Result {
    match array.element() {
        ElementType::Primitive(id) => out.write_str(primitives::as_str(*id))?,
        ElementType::Reference(r) => write_reference(out, r, qualified)?,
    }
    for _ in 0..array.dimensions() {
        out.write_str("[]")?;
    }
    Ok(())
}

fn write_reference(out: &mut impl Write, reference: &ReferenceType, qualified: bool) -> fmt::Result {
    if qualified {
        for segment in reference.package() {
            write!(out, "{segment}.")?;
        }
    }
    out.write_str(reference.simple_name().as_str())?;
    if reference.is_generic() {
        out.write_char('<')?;
        for (i, arg) in reference.arguments().iter().enumerate() {
            if i > 0 {
                out.write_str(", ")?;
            }
            write_argument(out, arg, qualified)?;
        }
        out.write_char('>')?;
    }
    Ok(())
}

fn write_argument(out: &mut impl Write, arg: &TypeArgument, qualified: bool) -> fmt::Result {
    match arg {
        TypeArgument::Invariant(t) => write_type(out, t, qualified),
        TypeArgument::Wildcard => out.write_char('?'),
        TypeArgument::Extends(t) => {
            out.write_str("? extends ")?;
            write_type(out, t, qualified)
        }
        TypeArgument::Super(t) => {
            out.write_str("? super ")?;
            write_type(out, t, qualified)
        }
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_type(f, self, true)
    }
}

impl fmt::Display for ReferenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_reference(f, self, true)
    }
}

impl fmt::Display for ArrayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_array(f, self, true)
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementType::Primitive(id) => f.write_str(primitives::as_str(*id)),
            ElementType::Reference(r) => write_reference(f, r, true),
        }
    }
}

impl fmt::Display for TypeArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_argument(f, self, true)
    }
}
