pub mod command;
pub mod op;
pub mod segment;
pub mod shape;

pub use command::CommandKind;
pub use op::Operation;
pub use segment::Segment;
pub use shape::{ArgKind, Shape};
