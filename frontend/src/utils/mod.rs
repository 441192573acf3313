pub mod catalog;
pub mod errors;
pub mod invest;
pub mod portfolio;
pub mod splash;
pub mod telegram;
pub mod wallet;
