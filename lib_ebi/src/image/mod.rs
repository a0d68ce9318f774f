pub mod decoder;
pub mod encoder;
pub mod format;

pub use decoder::read;
pub use encoder::write;
