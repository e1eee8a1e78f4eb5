//! Type-name tree.
//!
//! A parsed type name is one of three shapes:
//! - [`TypeName::Primitive`]: one of the eight primitive types, never generic.
//! - [`TypeName::Reference`]: an optionally qualified class name with optional type arguments.
//! - [`TypeName::Array`]: a primitive or reference element type with one or more `[]` dimensions. Arrays of arrays
//!   are a single node with a dimension count, never nested array nodes.
//!
//! ## Notes
//! - Every identifier in the tree is an [`Identifier`], so it is legal and not reserved.
//! - A bare primitive never appears as a type argument or wildcard bound. [`ReferenceType::with_arguments`]
//!   enforces this for hand-built trees; the parser reports it as an error.
//! - Equality is structural, which coincides with equality of the canonical display form.

use std::num::NonZeroUsize;

use jls_core::lang::primitives::PrimitiveId;

use crate::identifier::Identifier;

// ============================================================================
// Type names
// ============================================================================

/// A parsed or constructed type name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeName {
    Primitive(PrimitiveId),
    Reference(ReferenceType),
    Array(ArrayType),
}

/// A class or interface type: `package.Simple<Args>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReferenceType {
    package: Vec<Identifier>,
    simple_name: Identifier,
    arguments: Vec<TypeArgument>,
}

/// An array type: element type plus dimension count.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArrayType {
    element: ElementType,
    dimensions: NonZeroUsize,
}

/// The innermost element of an array type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ElementType {
    Primitive(PrimitiveId),
    Reference(ReferenceType),
}

/// One entry of a type argument list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeArgument {
    /// `T`
    Invariant(TypeName),
    /// `?`
    Wildcard,
    /// `? extends T`
    Extends(TypeName),
    /// `? super T`
    Super(TypeName),
}

// ============================================================================
// Construction
// ============================================================================

impl TypeName {
    pub fn primitive(id: PrimitiveId) -> Self {
        TypeName::Primitive(id)
    }

    pub fn reference(reference: ReferenceType) -> Self {
        TypeName::Reference(reference)
    }

    /// Wrap `element` in `dimensions` array levels. Zero dimensions returns the element type itself.
    pub fn array(element: ElementType, dimensions: usize) -> Self {
        match NonZeroUsize::new(dimensions) {
            Some(dimensions) => TypeName::Array(ArrayType { element, dimensions }),
            None => element.into(),
        }
    }

    /// Add `count` array dimensions to this type.
    pub fn with_dimensions(self, count: usize) -> Self {
        match self {
            TypeName::Primitive(id) => TypeName::array(ElementType::Primitive(id), count),
            TypeName::Reference(r) => TypeName::array(ElementType::Reference(r), count),
            TypeName::Array(a) => TypeName::array(a.element, a.dimensions.get() + count),
        }
    }
}

impl ReferenceType {
    /// A non-generic reference type. An empty `package` means the unnamed package.
    pub fn new(package: Vec<Identifier>, simple_name: Identifier) -> Self {
        Self {
            package,
            simple_name,
            arguments: Vec::new(),
        }
    }

    /// Replace the type argument list.
    ///
    /// ## Panics
    /// - If an argument is a bare primitive type (`int` rather than `int[]` or `Integer`).
    pub fn with_arguments(mut self, arguments: Vec<TypeArgument>) -> Self {
        if let Some(bad) = arguments.iter().find(|a| a.is_bare_primitive()) {
            panic!("primitive type argument '{bad}' on '{}'", self.qualified_name());
        }
        self.arguments = arguments;
        self
    }

    /// Build without checking arguments; the parser has already rejected bare primitives.
    pub(crate) fn from_parts(package: Vec<Identifier>, simple_name: Identifier, arguments: Vec<TypeArgument>) -> Self {
        debug_assert!(!arguments.iter().any(TypeArgument::is_bare_primitive));
        Self {
            package,
            simple_name,
            arguments,
        }
    }

    pub fn package(&self) -> &[Identifier] {
        &self.package
    }

    pub fn simple_name(&self) -> &Identifier {
        &self.simple_name
    }

    pub fn arguments(&self) -> &[TypeArgument] {
        &self.arguments
    }

    pub fn is_generic(&self) -> bool {
        !self.arguments.is_empty()
    }

    /// Dot-separated package, `""` for the unnamed package.
    pub fn package_name(&self) -> String {
        self.package
            .iter()
            .map(Identifier::as_str)
            .collect::<Vec<_>>()
            .join(".")
    }

    /// `package.Simple`, or just `Simple` in the unnamed package.
    pub fn qualified_name(&self) -> String {
        if self.package.is_empty() {
            self.simple_name.to_string()
        } else {
            format!("{}.{}", self.package_name(), self.simple_name)
        }
    }
}

impl ArrayType {
    pub fn element(&self) -> &ElementType {
        &self.element
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions.get()
    }
}

impl ElementType {
    pub fn is_primitive(&self) -> bool {
        matches!(self, ElementType::Primitive(_))
    }
}

impl TypeArgument {
    /// The concrete type or wildcard bound, if any.
    pub fn type_name(&self) -> Option<&TypeName> {
        match self {
            TypeArgument::Invariant(t) | TypeArgument::Extends(t) | TypeArgument::Super(t) => Some(t),
            TypeArgument::Wildcard => None,
        }
    }

    pub fn is_wildcard(&self) -> bool {
        !matches!(self, TypeArgument::Invariant(_))
    }

    fn is_bare_primitive(&self) -> bool {
        matches!(self.type_name(), Some(TypeName::Primitive(_)))
    }
}

impl From<PrimitiveId> for TypeName {
    fn from(id: PrimitiveId) -> Self {
        TypeName::Primitive(id)
    }
}

impl From<ReferenceType> for TypeName {
    fn from(reference: ReferenceType) -> Self {
        TypeName::Reference(reference)
    }
}

impl From<ElementType> for TypeName {
    fn from(element: ElementType) -> Self {
        match element {
            ElementType::Primitive(id) => TypeName::Primitive(id),
            ElementType::Reference(r) => TypeName::Reference(r),
        }
    }
}

// ============================================================================
// Accessors
// ============================================================================

impl TypeName {
    /// Dot-separated package of the (element) type; `""` for primitives and the unnamed package.
    pub fn package_name(&self) -> String {
        match self.base() {
            ElementRef::Primitive(_) => String::new(),
            ElementRef::Reference(r) => r.package_name(),
        }
    }

    /// Simple name plus one `[]` per array dimension. Type arguments are never included.
    pub fn simple_name(&self) -> String {
        let base = match self.base() {
            ElementRef::Primitive(id) => jls_core::lang::primitives::as_str(id).to_string(),
            ElementRef::Reference(r) => r.simple_name.to_string(),
        };
        base + &"[]".repeat(self.dimensions())
    }

    /// Qualified name plus one `[]` per array dimension. Type arguments are never included.
    pub fn qualified_name(&self) -> String {
        let base = match self.base() {
            ElementRef::Primitive(id) => jls_core::lang::primitives::as_str(id).to_string(),
            ElementRef::Reference(r) => r.qualified_name(),
        };
        base + &"[]".repeat(self.dimensions())
    }

    pub fn is_array(&self) -> bool {
        matches!(self, TypeName::Array(_))
    }

    /// `true` for primitive types and arrays of primitive types.
    pub fn is_primitive(&self) -> bool {
        matches!(self.base(), ElementRef::Primitive(_))
    }

    /// Number of `[]` suffixes; `0` for non-array types.
    pub fn dimensions(&self) -> usize {
        match self {
            TypeName::Array(a) => a.dimensions(),
            _ => 0,
        }
    }

    /// The innermost element type of an array.
    pub fn element_type(&self) -> Option<&ElementType> {
        match self {
            TypeName::Array(a) => Some(&a.element),
            _ => None,
        }
    }

    /// The type with one array dimension removed (`int[][]` -> `int[]`).
    pub fn component_type(&self) -> Option<TypeName> {
        match self {
            TypeName::Array(a) => Some(TypeName::array(a.element.clone(), a.dimensions.get() - 1)),
            _ => None,
        }
    }

    /// Type arguments of the (element) reference type; empty for primitives and non-generic types.
    pub fn arguments(&self) -> &[TypeArgument] {
        match self.base() {
            ElementRef::Primitive(_) => &[],
            ElementRef::Reference(r) => &r.arguments,
        }
    }

    pub fn as_reference(&self) -> Option<&ReferenceType> {
        match self {
            TypeName::Reference(r) => Some(r),
            _ => None,
        }
    }

    fn base(&self) -> ElementRef<'_> {
        match self {
            TypeName::Primitive(id) => ElementRef::Primitive(*id),
            TypeName::Reference(r) => ElementRef::Reference(r),
            TypeName::Array(a) => match &a.element {
                ElementType::Primitive(id) => ElementRef::Primitive(*id),
                ElementType::Reference(r) => ElementRef::Reference(r),
            },
        }
    }
}

/// Borrowed view of the non-array part of a type name.
enum ElementRef<'a> {
    Primitive(PrimitiveId),
    Reference(&'a ReferenceType),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(s: &str) -> Identifier {
        Identifier::from_known_legal(s)
    }

    fn list_of(arg: TypeArgument) -> ReferenceType {
        ReferenceType::new(vec![ident("java"), ident("util")], ident("List")).with_arguments(vec![arg])
    }

    #[test]
    fn test_reference_accessors() {
        let t = TypeName::from(list_of(TypeArgument::Wildcard));
        assert_eq!(t.package_name(), "java.util");
        assert_eq!(t.simple_name(), "List");
        assert_eq!(t.qualified_name(), "java.util.List");
        assert_eq!(t.arguments(), &[TypeArgument::Wildcard]);
        assert!(!t.is_array());
        assert!(!t.is_primitive());
        assert_eq!(t.dimensions(), 0);
        assert!(t.element_type().is_none());
    }

    #[test]
    fn test_array_accessors() {
        let t = TypeName::primitive(PrimitiveId::Int).with_dimensions(2);
        assert!(t.is_array());
        assert!(t.is_primitive());
        assert_eq!(t.package_name(), "");
        assert_eq!(t.simple_name(), "int[][]");
        assert_eq!(t.qualified_name(), "int[][]");
        assert_eq!(t.element_type(), Some(&ElementType::Primitive(PrimitiveId::Int)));
        assert_eq!(t.component_type(), Some(TypeName::primitive(PrimitiveId::Int).with_dimensions(1)));
        assert_eq!(
            t.component_type().and_then(|c| c.component_type()),
            Some(TypeName::primitive(PrimitiveId::Int))
        );
    }

    #[test]
    fn test_array_of_array_flattens() {
        let t = TypeName::from(ReferenceType::new(vec![], ident("T")))
            .with_dimensions(1)
            .with_dimensions(2);
        assert_eq!(t.dimensions(), 3);
        assert_eq!(TypeName::array(ElementType::Primitive(PrimitiveId::Byte), 0), TypeName::primitive(PrimitiveId::Byte));
    }

    #[test]
    fn test_primitive_array_argument_is_allowed() {
        let arg = TypeArgument::Invariant(TypeName::primitive(PrimitiveId::Long).with_dimensions(1));
        assert_eq!(list_of(arg).arguments().len(), 1);
    }

    #[test]
    #[should_panic(expected = "primitive type argument 'int' on 'java.util.List'")]
    fn test_bare_primitive_argument_panics() {
        let _ = list_of(TypeArgument::Invariant(TypeName::primitive(PrimitiveId::Int)));
    }

    #[test]
    #[should_panic(expected = "primitive type argument '? super char'")]
    fn test_primitive_wildcard_bound_panics() {
        let _ = list_of(TypeArgument::Super(TypeName::primitive(PrimitiveId::Char)));
    }
}
