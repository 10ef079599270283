use std::fmt::Write;

use crate::types::db::{FoundItem, ItemStatus, LostItem};

fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

fn status_label(status: &ItemStatus) -> &str {
    match status.as_str() {
        "" => "pending",
        other => other,
    }
}

/// Render the lost collection the way the admin page lists it
///
/// Each entry is headed by its current position, which is what the
/// `lost approve` and `lost reject` commands take.
pub fn render_lost(items: &[LostItem]) -> String {
    if items.is_empty() {
        return "No lost items.\n".to_string();
    }

    let mut out = String::new();
    for (index, item) in items.iter().enumerate() {
        let _ = writeln!(out, "[{}] {}", index, item.item);
        let _ = writeln!(out, "    Color:    {}", or_dash(&item.color));
        let _ = writeln!(out, "    Details:  {}", or_dash(&item.details));
        let _ = writeln!(out, "    Location: {}", or_dash(&item.location));
        let _ = writeln!(out, "    Status:   {}", status_label(&item.status));
    }
    out
}

/// Render the found collection the way the admin page lists it
pub fn render_found(items: &[FoundItem]) -> String {
    if items.is_empty() {
        return "No found items.\n".to_string();
    }

    let mut out = String::new();
    for (index, item) in items.iter().enumerate() {
        let _ = writeln!(out, "[{}] {}", index, item.item);
        let _ = writeln!(out, "    Location: {}", or_dash(&item.location));
        let _ = writeln!(out, "    Picture:  {}", or_dash(&item.picture));
        let _ = writeln!(out, "    Status:   {}", status_label(&item.status));
    }
    out
}
