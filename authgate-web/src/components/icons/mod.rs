mod google_icon;

pub use google_icon::GoogleIcon;
