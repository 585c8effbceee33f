// CozyTab shared type definitions
// Each submodule defines types used across the application.

pub mod bookmark;
pub mod errors;
pub mod history;
pub mod profession;
pub mod settings;
pub mod tab;
pub mod workspace;
