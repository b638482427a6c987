mod login_form;
mod redirect;
mod register_form;

pub mod buttons;
pub mod forms;
pub mod icons;

pub use login_form::LoginForm;
pub use redirect::Redirect;
pub use register_form::RegisterForm;
