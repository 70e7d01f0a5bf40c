pub mod export;
pub mod members;
pub mod pages;
pub mod reset;
