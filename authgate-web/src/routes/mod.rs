mod home;
mod login;
mod logout;
mod register;

pub use home::Home;
pub use login::Login;
pub use logout::Logout;
pub use register::Register;
