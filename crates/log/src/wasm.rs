use web_sys::wasm_bindgen::JsValue;

use crate::{Message, Verbosity};

/// Logs a message using the browser's console.
pub fn log(
    Message {
        file,
        line,
        verbosity,
        module,
        message,
        ..
    }: Message,
) {
    type LogFn = fn(&JsValue, &JsValue, &JsValue, &JsValue);

    let (f, color) = match verbosity {
        Verbosity::Error => (web_sys::console::error_4 as LogFn, "#f00"),
        Verbosity::Warning => (web_sys::console::warn_4 as LogFn, "#ff0"),
        Verbosity::Info => (web_sys::console::info_4 as LogFn, "#00f"),
        Verbosity::Trace => (web_sys::console::log_4 as LogFn, "#222"),
    };

    let name = verbosity.name().to_ascii_uppercase();
    let message = format!("%c{name}%c  [{module}] {message}  %c({file}:{line})");
    let css0 = format!("color: {color}; font-weight: bold;");
    let css1 = "color: inherit; font-weight: inherit;";
    let css2 = "color: #888;";

    f(&message.into(), &css0.into(), &css1.into(), &css2.into());
}
