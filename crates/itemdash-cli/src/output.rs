//! Terminal output formatting.

use chrono::Local;
use colored::{ColoredString, Colorize};
use itemdash_core::{DashboardItem, StoreTimestamp};
use unicode_width::UnicodeWidthStr;

const ID_WIDTH: usize = 10;
const TITLE_WIDTH: usize = 30;
const STATUS_WIDTH: usize = 12;

/// Print items as a table.
pub fn print_items_table(items: &[DashboardItem]) {
    if items.is_empty() {
        println!("{}", "No items found.".dimmed());
        return;
    }

    println!(
        "{} {} {} {}",
        pad_right("ID", ID_WIDTH),
        pad_right("Title", TITLE_WIDTH),
        pad_right("Status", STATUS_WIDTH),
        "Created At"
    );
    println!("{}", "─".repeat(ID_WIDTH + TITLE_WIDTH + STATUS_WIDTH + 20));

    for item in items {
        let id: String = item.id.chars().take(8).collect();
        let status = pad_right(&truncate_visual(&item.status, STATUS_WIDTH), STATUS_WIDTH);
        println!(
            "{} {} {} {}",
            pad_right(&id, ID_WIDTH).dimmed(),
            pad_right(&truncate_visual(&item.title, TITLE_WIDTH), TITLE_WIDTH),
            status_colored(&item.status, status),
            format_timestamp(&item.created_at)
        );
    }

    println!();
    println!("{}", format!("Total Items: {}", items.len()).dimmed());
}

fn status_colored(status: &str, padded: String) -> ColoredString {
    match status {
        "completed" => padded.green(),
        "in-progress" => padded.blue(),
        "pending" => padded.yellow(),
        _ => padded.normal(),
    }
}

fn format_timestamp(ts: &StoreTimestamp) -> String {
    ts.to_datetime()
        .map(|dt| dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default()
}

/// Pad a string to the given visual width.
fn pad_right(s: &str, width: usize) -> String {
    let visual = UnicodeWidthStr::width(s);
    if visual >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visual))
    }
}

/// Truncate a string respecting visual width.
fn truncate_visual(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut result = String::new();
    let mut current_width = 0;
    for ch in s.chars() {
        let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width + ch_width > max_width - 2 {
            break;
        }
        result.push(ch);
        current_width += ch_width;
    }
    result.push_str("..");
    result
}
