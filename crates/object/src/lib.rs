//! A property store modelled after ordinary ECMAScript objects.
//!
//! Keys are either strings or [symbols](Symbol), properties are described by
//! [PropertyDescriptor]s and every mutation goes through the [PropertyStore] trait,
//! which is what wrappers such as case-insensitive views build on.

mod descriptor;
mod error;
mod key;
mod object;
mod store;
mod symbol;
mod value;

pub use descriptor::{Getter, PropertyDescriptor, Setter};
pub use error::TypeError;
pub use key::PropertyKey;
pub use object::Object;
pub use store::PropertyStore;
pub use symbol::Symbol;
pub use value::Value;
