use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use isocountry::CountryCode;

/// Upper-cases the first character and lower-cases the rest.
///
/// `"hip hop"` becomes `"Hip hop"`, `"UK DRILL"` becomes `"Uk drill"`.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Resolves an ISO 3166-1 alpha-2 code to the country's English name.
///
/// Returns `None` for codes that are not part of the standard, such as `XK`.
pub fn country_name(alpha2: &str) -> Option<String> {
    CountryCode::for_alpha2(alpha2)
        .ok()
        .map(|c| c.name().to_string())
}

/// Maps market codes to country names, silently dropping unknown codes.
pub fn market_names<S: AsRef<str>>(codes: &[S]) -> Vec<String> {
    codes
        .iter()
        .filter_map(|code| country_name(code.as_ref()))
        .collect()
}

/// Starts a steady-ticking spinner on stderr with the given message.
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}
