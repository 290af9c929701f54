//! UI Components
//!
//! Leptos components for the generator creation page.

mod creation_manager;
mod generator_card;
mod generator_form;

pub use creation_manager::CreationManager;
pub use generator_card::GeneratorCard;
pub use generator_form::GeneratorForm;
