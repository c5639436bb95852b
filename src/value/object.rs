use crate::value::Value;
use indexmap::IndexMap;
use std::{
    collections::HashSet,
    fmt::{self, Display},
    ops::Deref as _,
    sync::Arc,
};

/// An ordered key-value mapping, with an optional prototype providing
/// fallback layers of inherited properties. An object is a list of own
/// properties in insertion order, plus zero or more further layers reached
/// through the prototype chain. Each property carries a visibility flag;
/// hidden properties are reachable through [Object::get] but skipped during
/// enumeration.
///
/// Operations on this object use optimistic mutation, meaning they will
/// mutate the current object in place if there are no other references to
/// it, and only clone the contents if they're referenced in multiple places.
#[derive(Clone, Debug, Default)]
pub struct Object(Arc<ObjectInner>);

#[derive(Clone, Debug, Default)]
struct ObjectInner {
    /// Own properties, in insertion order
    properties: IndexMap<String, Property>,
    /// The next layer of the chain. Properties defined there (or further
    /// up) are visible through this object unless shadowed by an own key
    prototype: Option<Object>,
}

/// A single field of an object
#[derive(Clone, Debug)]
struct Property {
    value: Value,
    /// Hidden properties don't appear during enumeration, but are still
    /// accessible by key
    enumerable: bool,
}

impl Property {
    fn new(value: Value) -> Self {
        Self {
            value,
            enumerable: true,
        }
    }
}

impl Object {
    /// Create a new empty object with no prototype
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty object whose properties fall back to the given
    /// prototype. The prototype is shared, not copied; it may itself have a
    /// prototype, forming a chain of arbitrary depth.
    pub fn create(prototype: Object) -> Self {
        Self(Arc::new(ObjectInner {
            properties: IndexMap::new(),
            prototype: Some(prototype),
        }))
    }

    /// Get the next layer of this object's prototype chain, if any
    pub fn prototype(&self) -> Option<&Object> {
        self.0.prototype.as_ref()
    }

    /// Get a value by key, or `Undefined` if not present. The lookup walks
    /// the full prototype chain, and finds hidden properties too;
    /// enumerability only affects iteration.
    pub fn get(&self, key: &str) -> Value {
        match self.0.properties.get(key) {
            Some(property) => property.value.clone(),
            None => match &self.0.prototype {
                Some(prototype) => prototype.get(key),
                None => Value::Undefined,
            },
        }
    }

    /// Set a single own property. If the key is already an own property, its
    /// value is replaced and its position in the order is kept.
    pub fn insert(
        self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.define(key, value, true)
    }

    /// Set a single own property with an explicit visibility flag. A hidden
    /// property is skipped during enumeration, and also blocks a same-named
    /// visible property further up the prototype chain.
    pub fn define(
        self,
        key: impl Into<String>,
        value: impl Into<Value>,
        enumerable: bool,
    ) -> Self {
        let key = key.into();
        let value = value.into();
        self.with_inner(|inner| {
            inner.properties.insert(key, Property { value, enumerable });
        })
    }

    /// Copy every enumerable property of another object (own and inherited)
    /// onto this one as an own property, replacing values on key collision.
    /// The other object is read through its enumeration view, so its layers
    /// flatten into this object's own property list.
    pub fn insert_all(self, other: &Self) -> Self {
        self.with_inner(|inner| {
            for (key, value) in other.iter() {
                inner
                    .properties
                    .insert(key.to_owned(), Property::new(value.clone()));
            }
        })
    }

    /// Iterate over every enumerable property visible through this object:
    /// own properties first in insertion order, then each prototype layer in
    /// turn. Each key is yielded at most once, at its most derived
    /// occurrence.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            layer: Some(self.0.deref()),
            index: 0,
            seen: HashSet::new(),
        }
    }

    /// The number of enumerable properties visible through this object,
    /// including inherited ones
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Does this object have no enumerable properties, own or inherited?
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Do two objects share the same backing storage? Mutating helpers
    /// return a fresh object when the storage is shared, so this
    /// distinguishes "same object" from "equal contents".
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    fn with_inner(mut self, f: impl FnOnce(&mut ObjectInner)) -> Self {
        if let Some(inner) = Arc::get_mut(&mut self.0) {
            // If we're the only owner of the arc, we can mutate in place
            f(inner);
            self
        } else {
            // The arc is aliased; we have to clone the contents before
            // mutating
            let mut inner = self.0.deref().clone();
            f(&mut inner);
            Self(Arc::new(inner))
        }
    }
}

/// Objects are compared by their enumerable view: same keys mapped to equal
/// values, regardless of key order or how the properties are distributed
/// between own layers and prototype layers.
impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        let lhs: IndexMap<&str, &Value> = self.iter().collect();
        let rhs: IndexMap<&str, &Value> = other.iter().collect();
        lhs == rhs
    }
}

impl Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        write!(f, "}}")?;
        Ok(())
    }
}

impl From<IndexMap<String, Value>> for Object {
    fn from(map: IndexMap<String, Value>) -> Self {
        map.into_iter().collect()
    }
}

impl From<IndexMap<&str, Value>> for Object {
    fn from(map: IndexMap<&str, Value>) -> Self {
        map.into_iter()
            .map(|(key, value)| (key.to_owned(), value))
            .collect()
    }
}

impl From<Object> for IndexMap<String, Value> {
    fn from(object: Object) -> Self {
        object
            .iter()
            .map(|(key, value)| (key.to_owned(), value.clone()))
            .collect()
    }
}

impl FromIterator<(String, Value)> for Object {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        let properties = iter
            .into_iter()
            .map(|(key, value)| (key, Property::new(value)))
            .collect();
        Self(Arc::new(ObjectInner {
            properties,
            prototype: None,
        }))
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = (&'a str, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the enumerable properties of an object and its prototype
/// chain. See [Object::iter].
pub struct Iter<'a> {
    /// The layer currently being walked; `None` once the chain is exhausted
    layer: Option<&'a ObjectInner>,
    /// Position within the current layer's own properties
    index: usize,
    /// Every own key passed so far, visible or not. A key further up the
    /// chain is suppressed if any more derived layer defines it
    seen: HashSet<&'a str>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let layer = self.layer?;
            let Some((key, property)) = layer.properties.get_index(self.index)
            else {
                // This layer is exhausted; move up the chain
                self.layer =
                    layer.prototype.as_ref().map(|object| object.0.deref());
                self.index = 0;
                continue;
            };
            self.index += 1;
            if self.seen.insert(key.as_str()) && property.enumerable {
                return Some((key.as_str(), &property.value));
            }
        }
    }
}
