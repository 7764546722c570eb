pub mod invocation;
pub mod recipient;
