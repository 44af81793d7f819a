//! Opaque identity newtypes for program entities.
//!
//! The analysis engine never downcasts or reflects on these; it only
//! needs equality and hashing, supplied here the way `raya-compiler`
//! numbers `FunctionId` / `ClassId` / `RegisterId`.

use std::fmt;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $prefix:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub u32);

        impl $name {
            /// Construct an id from its raw index.
            pub fn new(id: u32) -> Self {
                Self(id)
            }

            /// The raw index, for indexing into a parallel `Vec`.
            pub fn index(&self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $prefix, self.0)
            }
        }
    };
}

entity_id!(
    /// A loaded package.
    PackageId,
    "pkg"
);
entity_id!(
    /// An SSA function (has a basic-block body).
    FuncId,
    "fn"
);
entity_id!(
    /// A declared function/method at the type-system level; may or may
    /// not have an SSA counterpart (uninstantiated generic templates
    /// don't).
    DeclId,
    "decl"
);
entity_id!(
    /// A concrete (non-interface) named type.
    ConcreteTypeId,
    "ctype"
);
entity_id!(
    /// An interface type.
    InterfaceId,
    "iface"
);
entity_id!(
    /// An SSA value within a function body.
    ValueId,
    "v"
);
