//! Integration tests for the eqns-repr crate.
//!
//! Exercises full decode/edit/repack cycles:
//! - Round-trip stability without mutation
//! - Arity bookkeeping and decode-time shape checking
//! - Clause rewriting, `add_var`, `update_fn_type`
//! - Recursion detection
