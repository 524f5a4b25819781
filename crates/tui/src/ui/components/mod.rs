pub mod autocomplete;
pub mod component;
pub mod hint_bar;
pub mod selection;
pub mod snackbar;

pub use autocomplete::AutocompleteComponent;
pub(crate) use component::Component;
pub use hint_bar::HintBarComponent;
pub use selection::SelectionComponent;
pub use snackbar::SnackbarComponent;
