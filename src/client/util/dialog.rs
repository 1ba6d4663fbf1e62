use dioxus_logger::tracing;

/// Shows a blocking browser alert
pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        tracing::warn!(alert = message, "No window to show alert in");
        return;
    };
    if let Err(e) = window.alert_with_message(message) {
        tracing::warn!(error = ?e, "Failed to show alert");
    }
}

/// Asks the user to confirm, treating an unavailable dialog as a refusal
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}
