pub mod file_input;
pub mod input;
pub mod select;
pub mod textarea;

pub use file_input::FileInput;
pub use input::Input;
pub use select::Select;
pub use textarea::Textarea;

/// CSS class added to a control that failed validation
pub const ERROR_CLASS: &str = "error";

pub(crate) fn control_class(base: &str, invalid: bool) -> String {
    if invalid {
        format!("{} {}", base, ERROR_CLASS)
    } else {
        base.to_string()
    }
}
