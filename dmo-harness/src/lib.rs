mod archive;
pub use archive::*;
mod config;
pub use config::*;
mod runner;
pub use runner::*;
mod seeding;
pub use seeding::*;
