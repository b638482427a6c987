mod input_field;
mod submission_status_view;

pub use input_field::InputField;
pub use submission_status_view::SubmissionStatusView;
