mod advisory;
mod pitch_space;
mod set_class;
mod transformations;
mod interval_vector;
mod melody;
mod matcher;
mod deficiency;
mod array_notation;

pub use advisory::*;
pub use pitch_space::*;
pub use set_class::*;
pub use transformations::*;
pub use interval_vector::*;
pub use melody::*;
pub use matcher::*;
pub use deficiency::*;
pub use array_notation::*;
