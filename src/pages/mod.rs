//! Pages
//!
//! One component per route.

mod dashboard;
mod home;
mod login;
mod not_found;
mod signup;

pub use dashboard::Dashboard;
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use signup::SignupPage;
