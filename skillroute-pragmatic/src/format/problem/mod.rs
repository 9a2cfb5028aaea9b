//! Specifies logic to read problem from json input.

mod model;
pub use self::model::*;

mod reader;
pub use self::reader::*;
