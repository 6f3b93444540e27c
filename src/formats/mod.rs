pub mod catalog;
pub mod html;
pub mod index;
pub mod paragraph;
pub mod transcript;
