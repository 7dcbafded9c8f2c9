use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Format a byte count in human-readable form (B, KB, MB, GB)
pub fn format_size(size: u64) -> String {
    if size < 1024 {
        format!("{}B", size)
    } else if size < 1024 * 1024 {
        format!("{:.1}KB", size as f64 / 1024.0)
    } else if size < 1024 * 1024 * 1024 {
        format!("{:.1}MB", size as f64 / (1024.0 * 1024.0))
    } else {
        format!("{:.1}GB", size as f64 / (1024.0 * 1024.0 * 1024.0))
    }
}

/// Truncate `name` to `max_width` display columns, appending "..." when it
/// does not fit. Width is measured in terminal columns, not chars.
pub fn truncate_name(name: &str, max_width: usize) -> String {
    if name.width() <= max_width {
        return name.to_string();
    }

    let mut out = String::new();
    let mut width = 0usize;
    for ch in name.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width.saturating_sub(3) {
            break;
        }
        out.push(ch);
        width += ch_width;
    }
    out.push_str("...");
    out
}
