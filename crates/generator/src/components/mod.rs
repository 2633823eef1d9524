// Page components rendered to HTML strings

pub mod header;
pub mod hero;

pub use header::{HeaderProps, render_header};
pub use hero::render_hero;
