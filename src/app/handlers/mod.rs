//! Feature-Handler für die Command-Verarbeitung.

pub mod edit;
pub mod history;
pub mod selection;
pub mod view;
