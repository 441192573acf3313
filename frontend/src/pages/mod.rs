pub mod market;
pub mod portfolio;
pub mod profile;
pub mod stats;
