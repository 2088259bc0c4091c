use std::collections::HashMap;
use std::fmt;

use super::error::EvalError;
use super::value::{Place, Value};

/// Place → value bindings for one program run.
#[derive(Debug, Default, Clone)]
pub struct Environment(HashMap<Place, Value>);

impl Environment {
    /// Reads a place. Unknown places and places that were declared but never
    /// assigned are errors.
    pub fn lookup(&self, place: &Place) -> Result<&Value, EvalError> {
        match self.0.get(place) {
            None => Err(EvalError::UnknownPlace(place.clone())),
            Some(Value::Undefined) => Err(EvalError::UndefinedPlace(place.clone())),
            Some(value) => Ok(value),
        }
    }

    pub fn insert(&mut self, place: Place, value: Value) {
        self.0.insert(place, value);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One `name ↦ value` line per place, sorted by name.
impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries = self
            .0
            .iter()
            .map(|(place, value)| (place.to_string(), value))
            .collect::<Vec<_>>();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        for (place, value) in entries {
            writeln!(f, "{place} ↦ {value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proc_macro2::{Ident, Span};

    fn place(name: &str) -> Place {
        Ident::new(name, Span::call_site())
    }

    #[test]
    fn test_lookup_unknown_place() {
        let env = Environment::default();
        assert!(matches!(env.lookup(&place("x")), Err(EvalError::UnknownPlace(_))));
    }

    #[test]
    fn test_lookup_undefined_place() {
        let mut env = Environment::default();
        env.insert(place("x"), Value::Undefined);
        assert_eq!(env.len(), 1);
        assert!(matches!(env.lookup(&place("x")), Err(EvalError::UndefinedPlace(_))));
    }

    #[test]
    fn test_display_is_sorted() {
        let mut env = Environment::default();
        env.insert(place("c"), Value::Lit("1".into()));
        env.insert(place("a"), Value::Lit("2".into()));
        env.insert(place("b"), Value::Ref(place("a")));

        assert_eq!(env.to_string(), "a ↦ 2\nb ↦ &a\nc ↦ 1\n");
        assert_eq!(env.len(), 3);
    }

    #[test]
    fn test_empty_display() {
        let env = Environment::default();
        assert!(env.is_empty());
        assert_eq!(env.to_string(), "");
    }
}
