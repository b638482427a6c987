#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonType {
    SignIn,
    SignUp,
    Google,
}

impl ButtonType {
    fn color(&self) -> (&'static str, &'static str) {
        match self {
            // keep full color list including bg- and hover:bg- classes
            // else tailwind will not add them to css
            ButtonType::SignIn => ("bg-indigo-600", "hover:bg-indigo-700"),
            ButtonType::SignUp => ("bg-indigo-600", "hover:bg-indigo-700"),
            ButtonType::Google => ("bg-white", "hover:bg-gray-700"),
        }
    }

    pub fn button_text(&self) -> &'static str {
        match self {
            ButtonType::SignIn => "Sign In",
            ButtonType::SignUp => "Sign Up",
            ButtonType::Google => "Continue with Google",
        }
    }

    /// Label while a request is in flight.
    pub fn busy_text(&self) -> &'static str {
        match self {
            ButtonType::SignIn => "Signing In...",
            ButtonType::SignUp => "Signing Up...",
            ButtonType::Google => "Continue with Google",
        }
    }

    pub fn button_class(&self, is_disabled: bool) -> String {
        match (self, is_disabled) {
            (ButtonType::Google, true) => {
                "w-full flex items-center justify-center gap-x-3 py-2.5 \
                 border border-gray-500 rounded-lg text-sm font-medium \
                 cursor-not-allowed"
                    .to_string()
            }
            (ButtonType::Google, false) => {
                let (_, color_hover) = self.color();
                format!(
                    "w-full flex items-center justify-center gap-x-3 py-2.5 \
                     border border-gray-500 rounded-lg text-sm font-medium \
                     {} transition duration-300",
                    color_hover
                )
            }
            (_, true) => "w-full px-4 py-2 text-white font-medium rounded-lg \
                          bg-gray-300 cursor-not-allowed"
                .to_string(),
            (_, false) => {
                let (color_normal, color_hover) = self.color();
                format!(
                    "w-full px-4 py-2 text-white font-medium rounded-lg {} {} \
                     hover:shadow-xl transition duration-300",
                    color_normal, color_hover
                )
            }
        }
    }
}
