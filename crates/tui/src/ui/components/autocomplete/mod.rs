mod autocomplete_component;
pub mod suggestions_view;

pub use autocomplete_component::AutocompleteComponent;
