use std::fmt;

use proc_macro2::Ident;

/// A named memory location. Only plain variables are places for now.
pub type Place = Ident;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Unit,
    /// A literal, kept as its source token (`1`, `1u8`, `true`, ...).
    Lit(String),
    Ref(Place),
    /// Declared with `let x;` and not yet assigned.
    Undefined,
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unit => write!(f, "()"),
            Value::Lit(token) => write!(f, "{token}"),
            Value::Ref(place) => write!(f, "&{place}"),
            Value::Undefined => write!(f, "undefined"),
        }
    }
}
