pub mod result;
pub mod settings;
pub mod suggest;
pub mod tokenize;
pub mod unicode;
