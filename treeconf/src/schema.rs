//! Field descriptors that stand in for runtime reflection.
//!
//! `#[derive(Schema)]` implements [`Schema`] for a struct with named fields,
//! listing each field's name, raw annotation and either its primitive value
//! or a reference to a nested schema. The tree builder walks these lists
//! recursively.

use crate::value::{Kind, Value};

/// A record whose fields can be described for tree building.
///
/// The trait is object safe; nested records are handed to the builder as
/// `&dyn Schema`.
pub trait Schema {
    /// Describe every field, in declaration order.
    fn fields(&self) -> Vec<FieldDescriptor<'_>>;
}

/// A field type that maps onto a primitive [`Kind`].
pub trait Leaf {
    /// Kind declared by fields of this type.
    const KIND: Kind;

    /// Current value, or `None` when the field holds nothing.
    fn value(&self) -> Option<Value>;
}

/// Description of a single schema field.
#[derive(Clone)]
pub struct FieldDescriptor<'a> {
    /// Field identifier as written in the schema.
    pub name: &'static str,
    /// Raw annotation consumed by [`crate::Tag::parse`].
    pub tag: &'static str,
    /// Where the builder obtains the field's content.
    pub source: FieldSource<'a>,
}

/// Content of a described field.
#[derive(Clone)]
pub enum FieldSource<'a> {
    /// A primitive field and its decoded value.
    Leaf {
        /// Declared kind of the field.
        kind: Kind,
        /// Decoded value, absent when the field holds nothing.
        value: Option<Value>,
    },
    /// A nested record, built as a branch node.
    Nested(&'a dyn Schema),
}

impl<'a> FieldDescriptor<'a> {
    /// Describe a primitive field.
    #[must_use]
    pub fn leaf<L: Leaf + ?Sized>(name: &'static str, tag: &'static str, field: &L) -> Self {
        Self {
            name,
            tag,
            source: FieldSource::Leaf {
                kind: L::KIND,
                value: field.value(),
            },
        }
    }

    /// Describe a nested record.
    #[must_use]
    pub fn nested(name: &'static str, tag: &'static str, schema: &'a dyn Schema) -> Self {
        Self {
            name,
            tag,
            source: FieldSource::Nested(schema),
        }
    }

    /// Describe a field whose type has no primitive mapping.
    ///
    /// The node is built as a leaf of kind [`Kind::Unsupported`] without a
    /// value.
    #[must_use]
    pub const fn opaque(name: &'static str, tag: &'static str, type_name: &'static str) -> Self {
        Self {
            name,
            tag,
            source: FieldSource::Leaf {
                kind: Kind::Unsupported(type_name),
                value: None,
            },
        }
    }
}

impl Leaf for String {
    const KIND: Kind = Kind::String;

    fn value(&self) -> Option<Value> {
        Some(Value::String(self.clone()))
    }
}

impl Leaf for bool {
    const KIND: Kind = Kind::Bool;

    fn value(&self) -> Option<Value> {
        Some(Value::Bool(*self))
    }
}

impl Leaf for f64 {
    const KIND: Kind = Kind::Float;

    fn value(&self) -> Option<Value> {
        Some(Value::Float(*self))
    }
}

impl Leaf for f32 {
    const KIND: Kind = Kind::Float;

    fn value(&self) -> Option<Value> {
        Some(Value::Float(f64::from(*self)))
    }
}

macro_rules! int_leaf {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Leaf for $ty {
                const KIND: Kind = Kind::Int;

                fn value(&self) -> Option<Value> {
                    Some(Value::Int(i64::from(*self)))
                }
            }
        )*
    };
}

int_leaf!(i64, i32, i16, i8, u32, u16, u8);

impl<T: Leaf> Leaf for Option<T> {
    const KIND: Kind = T::KIND;

    fn value(&self) -> Option<Value> {
        self.as_ref().and_then(Leaf::value)
    }
}

impl<T: Leaf + ?Sized> Leaf for Box<T> {
    const KIND: Kind = T::KIND;

    fn value(&self) -> Option<Value> {
        (**self).value()
    }
}
