use inquire::Select;
use std::fmt::Display;

pub fn select_context<T: Display>(
    label: &str,
    entries: Vec<T>,
    cursor: usize,
) -> inquire::error::InquireResult<T> {
    Select::new(label, entries)
        .with_starting_cursor(cursor)
        .with_help_message("↑↓ to move, enter to switch, esc to quit")
        .prompt()
}
