//! netpath CLI library.
//!
//! Shared pieces of the command-line front end that are useful outside the
//! binary (currently logging setup).

pub mod logging;
