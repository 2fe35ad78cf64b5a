pub mod debug_json;
pub mod validation;

/// Interactive confirmation prompt for destructive row actions.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}
