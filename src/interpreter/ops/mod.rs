pub mod assign;
pub mod binary;
pub mod unary;

pub use binary::apply_binary;
