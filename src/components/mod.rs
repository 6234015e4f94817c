pub mod home;
pub mod not_found;
pub mod status;
pub mod strict_mode;

pub use home::Home;
pub use not_found::NotFound;
pub use strict_mode::StrictMode;
