pub mod service;
pub mod util;
