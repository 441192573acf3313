pub mod manifest;
pub mod webhook;
