//! Specifies logic to create and write solution response.

mod model;
pub use self::model::*;

mod writer;
pub use self::writer::*;
