//! HTML templates compiled into the binary with `include_str!`, addressed by
//! the name they carry on disk under `templates/`.

pub const WELCOME: &str = include_str!("../templates/thuto_app/welcome.html");

/// Look up a template by its on-disk name.
pub fn by_name(name: &str) -> Option<&'static str> {
    match name {
        "thuto_app/welcome.html" => Some(WELCOME),
        _ => None,
    }
}
