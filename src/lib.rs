//! Formfill - form field resolution for record-backed HTML forms
//!
//! Formfill resolves everything a form control needs from a field name: the
//! translated label, hint and placeholder, the current value, and a value
//! carried over from a previous record when the current one is empty. It
//! ships a set of partials that render those fields as HTML fragments.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Field naming, value resolution, prefill and translation lookup
//! - `render`: HTML partials built on the core

pub mod cli;
pub mod config;
pub mod core;
pub mod render;
