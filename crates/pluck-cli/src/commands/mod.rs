pub mod extract;
pub mod minimize;
pub mod suggest;
