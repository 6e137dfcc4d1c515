pub mod cli;
pub mod hash;
pub mod output;
pub mod prompt;
pub mod random;
