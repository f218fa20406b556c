//! Case-insensitive access to the properties of an [Object](object::Object).
//!
//! [CaselessMap] resolves every textual key to the casing it was first stored under before
//! forwarding the operation to the wrapped [PropertyStore](object::PropertyStore), so `"name"`,
//! `"Name"` and `"NAME"` all refer to the same property. Symbol keys are never folded.

mod canonical;
mod folding;
mod map;

pub use folding::Folding;
pub use map::CaselessMap;

pub use object::{
    Object, PropertyDescriptor, PropertyKey, PropertyStore, Symbol, TypeError, Value,
};
