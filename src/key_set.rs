//! `KeySet` — the four-variant set lattice `Ability` projects its key-set
//! views onto. Treated as an external collaborator consumed through a
//! narrow interface; this module supplies exactly that interface and
//! nothing more, so [`crate::ability`] never has to pattern-match a
//! variant it didn't define.

use std::collections::BTreeSet;
use std::fmt;

/// A set of key strings, expressed as one of four shapes: everything,
/// nothing, an explicit list, or everything except an explicit list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeySet {
    All,
    None,
    Some(BTreeSet<String>),
    AllExceptSome(BTreeSet<String>),
}

impl KeySet {
    pub fn all() -> Self {
        KeySet::All
    }

    pub fn none() -> Self {
        KeySet::None
    }

    pub fn some(keys: impl IntoIterator<Item = String>) -> Self {
        KeySet::Some(keys.into_iter().collect())
    }

    pub fn all_except_some(keys: impl IntoIterator<Item = String>) -> Self {
        KeySet::AllExceptSome(keys.into_iter().collect())
    }

    /// Set difference lifted to the four-variant lattice: `self \ other`.
    pub fn remove(self, other: KeySet) -> KeySet {
        match (self, other) {
            (KeySet::None, _) => KeySet::None,
            (this, KeySet::None) => this,

            (_, KeySet::All) => KeySet::None,

            (KeySet::All, KeySet::Some(other_keys)) => KeySet::AllExceptSome(other_keys),
            (KeySet::All, KeySet::AllExceptSome(other_keys)) => KeySet::Some(other_keys),

            (KeySet::Some(keys), KeySet::Some(other_keys)) => {
                KeySet::Some(keys.difference(&other_keys).cloned().collect())
            }
            (KeySet::Some(keys), KeySet::AllExceptSome(other_keys)) => {
                KeySet::Some(keys.intersection(&other_keys).cloned().collect())
            }

            (KeySet::AllExceptSome(keys), KeySet::Some(other_keys)) => {
                KeySet::AllExceptSome(keys.union(&other_keys).cloned().collect())
            }
            (KeySet::AllExceptSome(keys), KeySet::AllExceptSome(other_keys)) => {
                KeySet::Some(other_keys.difference(&keys).cloned().collect())
            }
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, KeySet::All)
    }

    pub fn is_none(&self) -> bool {
        matches!(self, KeySet::None)
    }
}

impl fmt::Display for KeySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeySet::All => write!(f, "All"),
            KeySet::None => write!(f, "None"),
            KeySet::Some(keys) => write!(f, "Some({:?})", keys),
            KeySet::AllExceptSome(keys) => write!(f, "AllExceptSome({:?})", keys),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(keys: &[&str]) -> BTreeSet<String> {
        keys.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn all_minus_some_is_all_except_some() {
        let result = KeySet::all().remove(KeySet::some(["a".to_string(), "b".to_string()]));
        assert_eq!(result, KeySet::AllExceptSome(set(&["a", "b"])));
    }

    #[test]
    fn all_minus_all_except_some_is_some() {
        let result =
            KeySet::all().remove(KeySet::all_except_some(["a".to_string(), "b".to_string()]));
        assert_eq!(result, KeySet::Some(set(&["a", "b"])));
    }

    #[test]
    fn some_minus_all_except_some_is_intersection() {
        let result = KeySet::some(["a".to_string(), "b".to_string(), "c".to_string()])
            .remove(KeySet::all_except_some(["b".to_string()]));
        assert_eq!(result, KeySet::Some(set(&["b"])));
    }

    #[test]
    fn anything_minus_all_is_none() {
        assert_eq!(KeySet::all().remove(KeySet::all()), KeySet::None);
        assert_eq!(
            KeySet::some(["a".to_string()]).remove(KeySet::all()),
            KeySet::None
        );
    }

    #[test]
    fn none_minus_anything_is_none() {
        assert_eq!(KeySet::none().remove(KeySet::all()), KeySet::None);
        assert_eq!(
            KeySet::none().remove(KeySet::some(["a".to_string()])),
            KeySet::None
        );
    }
}
