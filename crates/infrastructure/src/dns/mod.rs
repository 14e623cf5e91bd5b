pub mod message;
pub mod probe;
pub mod transport;

pub use probe::DotHealthProbe;
