//! Wall-clock helpers for chat timestamps.
//!
//! Browser builds read `Date.now()` and format in the visitor's locale;
//! server and test builds fall back to the system clock and UTC.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Current time in epoch milliseconds.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0.0, |d| d.as_secs_f64() * 1000.0)
    }
}

/// Time-of-day label for a message timestamp.
pub fn time_label(epoch_ms: f64) -> String {
    #[cfg(feature = "hydrate")]
    {
        String::from(js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(epoch_ms)).to_locale_time_string("es"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        utc_time_label(epoch_ms)
    }
}

#[cfg(any(test, not(feature = "hydrate")))]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn utc_time_label(epoch_ms: f64) -> String {
    let secs = (epoch_ms.max(0.0) / 1000.0) as u64 % 86_400;
    format!("{:02}:{:02}:{:02}", secs / 3600, secs % 3600 / 60, secs % 60)
}
