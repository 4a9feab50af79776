//! Hierarchical claim-based authorization.
//!
//! A *claim* is a small textual grant of the form `verb:resource.path`,
//! authorizing a principal to perform `verb` on the dotted resource path
//! `resource.path` and everything beneath it. This crate parses and
//! normalises claim strings ([`Claim`]), folds them into ordered,
//! deduplicated sets ([`ClaimSet`]), and composes a permitted set against
//! a prohibited set into an [`Ability`] — the engine a caller actually
//! asks "can principal P do verb V on resource R?" against, or from which
//! a key-set view over a sub-namespace can be derived.
//!
//! The crate is pure and value-oriented: no I/O, no persistence, no
//! async. Persisting claim strings, modelling the surrounding
//! application's principal, and logging/CLI/packaging concerns are all
//! left to the embedding application.
//!
//! ```
//! use claim_engine::{Ability, ClaimSet, Query};
//!
//! let permitted = ClaimSet::for_strings_strict(["read:clients.*"]).unwrap();
//! let prohibited = ClaimSet::for_strings_strict(["read:clients.acme"]).unwrap();
//! let ability = Ability::new(permitted, prohibited);
//!
//! let query = Query::new("read", Some("clients.acme")).unwrap();
//! assert!(!ability.can(&query));
//!
//! let query = Query::new("read", Some("clients.other")).unwrap();
//! assert!(ability.can(&query));
//! ```

mod ability;
mod checker;
mod claim;
mod claim_set;
mod error;
mod grammar;
mod key_set;
mod query;

pub use ability::Ability;
pub use checker::{Checker, SubClaims};
pub use claim::{Claim, ClaimResource};
pub use claim_set::ClaimSet;
pub use error::{Error, Result};
pub use key_set::KeySet;
pub use query::Query;
