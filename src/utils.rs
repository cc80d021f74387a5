use colored::Colorize;

use crate::transcript::types::StudentRecord;

/// Format GPA for display, dimmed for GPA-exempt new students
pub fn format_gpa(record: &StudentRecord) -> String {
    let gpa = crate::report::formatters::format_gpa(record.gpa, record.classification.is_new());
    if record.classification.is_new() {
        gpa.dimmed().to_string()
    } else {
        gpa.yellow().to_string()
    }
}

/// Colored pass/fail marker for an eligibility gate
pub fn format_gate(passed: bool) -> String {
    if passed {
        "pass ✓".green().to_string()
    } else {
        "fail ✗".red().to_string()
    }
}

/// Print a formatted table border
pub fn print_table_border(width: usize) {
    println!("{}", "=".repeat(width));
}

/// Print a table row with columns
pub fn print_table_row(columns: &[&str], widths: &[usize]) {
    let mut row = String::new();
    for (i, col) in columns.iter().enumerate() {
        if i < widths.len() {
            row.push_str(&format!("{:<width$}  ", col, width = widths[i]));
        }
    }
    println!("{}", row.trim_end());
}
