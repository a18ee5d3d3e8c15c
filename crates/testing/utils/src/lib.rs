pub mod asserts;
pub mod keys;
pub mod tamper;
pub mod vectors;
