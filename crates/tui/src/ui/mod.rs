//! Terminal UI: components, theme, and the runtime that drives them.

pub mod components;
pub mod main_component;
pub mod runtime;
pub mod theme;
