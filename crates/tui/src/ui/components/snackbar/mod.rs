mod snackbar_component;
mod state;

pub use snackbar_component::SnackbarComponent;
pub use state::SnackbarState;
