//! A crate with command line interface extensions: solver configuration and response checking.
//!

#![warn(missing_docs)]

pub mod extensions;
