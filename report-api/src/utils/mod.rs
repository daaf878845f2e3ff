pub mod catch_panic;
pub mod hash;
pub mod shutdown;
