//! Lookup keys accepted wherever a type is expected.

use std::sync::Arc;

/// Anything that names a host type: a plain name or a resolved type handle.
///
/// The registry is always keyed by name; handles only supply theirs.
pub trait TypeKey {
    /// The canonical type name used as the registry key.
    fn type_key(&self) -> &str;
}

impl TypeKey for str {
    fn type_key(&self) -> &str {
        self
    }
}

impl TypeKey for String {
    fn type_key(&self) -> &str {
        self.as_str()
    }
}

impl<T: TypeKey + ?Sized> TypeKey for Arc<T> {
    fn type_key(&self) -> &str {
        (**self).type_key()
    }
}
