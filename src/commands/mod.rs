pub mod form;
pub mod password_gen;
