//! Shared formatting utilities for the UI layer.

/// Group digits in thousands: `3421` → `"3,421"`.
pub fn format_count(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// "1 resource", "8 resources".
pub fn resource_count_label(n: usize) -> String {
    if n == 1 {
        "1 resource".to_string()
    } else {
        format!("{n} resources")
    }
}

/// "1,247 downloads".
pub fn downloads_label(n: u32) -> String {
    if n == 1 {
        "1 download".to_string()
    } else {
        format!("{} downloads", format_count(n))
    }
}

/// Inline style for an element sliding horizontally while fading.
pub fn slide_style(opacity: f64, offset_x: f64) -> String {
    format!("opacity: {opacity}; transform: translateX({offset_x}px);")
}
