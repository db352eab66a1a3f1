pub mod atom;
pub mod demo;
pub mod display;
pub mod error;
pub mod format;
pub mod map;
pub mod protein;

pub use atom::Atom;
pub use error::CError;
pub use format::{load_from_file, save_to_file};
pub use map::TopDownMap;
pub use protein::Protein;
