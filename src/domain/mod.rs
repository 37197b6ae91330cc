pub mod errors;
pub mod geo;
pub mod housing;
pub mod logging;
pub mod session;
