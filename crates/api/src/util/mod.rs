pub mod extract;
pub mod panic;
