pub mod id;
pub mod parse;
