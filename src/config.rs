use log::Level;

/// localStorage key holding `"light"` or `"dark"`.
pub const THEME_STORAGE_KEY: &str = "theme";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Timings (milliseconds) and scroll thresholds (pixels) used across the page.
#[derive(Clone, Debug, PartialEq)]
pub struct UiConfig {
    pub notification_display_ms: u32,
    pub notification_enter_delay_ms: u32,
    pub notification_exit_ms: u32,
    pub disclosure_slide_ms: u32,
    pub rotator_interval_ms: u32,
    pub scroll_debounce_ms: u32,
    pub nav_background_threshold: f64,
    pub floating_control_threshold: f64,
    pub floating_control_enter_delay_ms: u32,
    pub floating_control_exit_ms: u32,
    pub parallax_factor: f64,
    pub smooth_scroll_ms: u32,
    pub header_offset: f64,
    pub newsletter_submit_ms: u32,
    pub signup_submit_ms: u32,
    pub pulse_ms: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            notification_display_ms: 5000,
            notification_enter_delay_ms: 100,
            notification_exit_ms: 300,
            disclosure_slide_ms: 300,
            rotator_interval_ms: 5000,
            scroll_debounce_ms: 10,
            nav_background_threshold: 50.0,
            floating_control_threshold: 300.0,
            floating_control_enter_delay_ms: 100,
            floating_control_exit_ms: 300,
            parallax_factor: 0.5,
            smooth_scroll_ms: 800,
            header_offset: 80.0,
            newsletter_submit_ms: 1500,
            signup_submit_ms: 2000,
            pulse_ms: 1000,
        }
    }
}

pub fn ui() -> UiConfig {
    UiConfig::default()
}
