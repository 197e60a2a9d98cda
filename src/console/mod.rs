pub mod error;
pub mod menu;
pub mod session;

pub use menu::MenuOption;
pub use session::run_console;
