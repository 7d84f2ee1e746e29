pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod extractor;
pub mod interactive;
pub mod logging;
pub mod report;
pub mod scanner;
pub mod session;
pub mod skills;
