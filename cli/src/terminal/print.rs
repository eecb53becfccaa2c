use colored::*;

const KEY_WIDTH: usize = 14;

/// Prints an aligned `key value` detail line.
pub fn detail(key: &str, value: &str) {
    let padded = format!("{:>width$}", key, width = KEY_WIDTH);
    println!("{} {}", padded.bright_black(), value.bright_green());
}

/// Prints an aligned yes/no property line.
pub fn flag(key: &str, set: bool) {
    let padded = format!("{:>width$}", key, width = KEY_WIDTH);
    let mark: ColoredString = if set {
        "yes".green().bold()
    } else {
        "no".bright_black()
    };
    println!("{} {}", padded.bright_black(), mark);
}

/// Prints a bare result value.
pub fn value(value: &str) {
    println!("{}", value.bright_green());
}
