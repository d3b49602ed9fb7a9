pub mod banner;
pub mod card;
pub mod category_view;
pub mod tui;

/// Prints the welcome banner and applies the storefront theme for all subsequent inquire prompts.
/// Call once at startup (e.g. in main after tracing init).
pub fn init_ui() {
    banner::print_welcome();
    tui::apply_theme();
}
