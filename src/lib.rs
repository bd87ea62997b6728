pub mod checks;
pub mod cli;
pub mod document;
pub mod presence;
pub mod report;
