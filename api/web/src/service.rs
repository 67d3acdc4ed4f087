pub mod editor;
pub mod root;
