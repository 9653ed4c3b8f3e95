pub mod identifier_type;
pub use identifier_type::*;

pub mod type_input;
pub use type_input::*;
