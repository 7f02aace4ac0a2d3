pub mod dialogs;
pub mod layout;
pub mod toolbar;
