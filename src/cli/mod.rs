mod app;
mod main;

pub use app::App;
pub use main::{Cli, ShellLine};
