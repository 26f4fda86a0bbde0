use owo_colors::OwoColorize;
use std::io::{self, BufRead, Write};

/// Consistent, colored user-facing messages. Colors only when the stream is a TTY.
fn stdout_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

fn stderr_tty() -> bool {
    atty::is(atty::Stream::Stderr)
}

/// True when a human can answer a prompt.
pub fn stdin_is_interactive() -> bool {
    atty::is(atty::Stream::Stdin)
}

pub fn print_info(msg: &str) {
    if stdout_tty() {
        println!("{} {}", "info:".cyan().bold(), msg);
    } else {
        println!("info: {}", msg);
    }
}

pub fn print_warn(msg: &str) {
    if stderr_tty() {
        eprintln!("{} {}", "warn:".yellow().bold(), msg);
    } else {
        eprintln!("warn: {}", msg);
    }
}

pub fn print_error(msg: &str) {
    if stderr_tty() {
        eprintln!("{} {}", "error:".red().bold(), msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

pub fn print_success(msg: &str) {
    if stdout_tty() {
        println!("{} {}", "ok:".green().bold(), msg);
    } else {
        println!("ok: {}", msg);
    }
}

/// Ask a yes/no question on stderr and read one line from stdin.
/// Anything but an explicit yes (including EOF) is "no".
pub fn confirm(question: &str) -> io::Result<bool> {
    let mut err = io::stderr().lock();
    if stderr_tty() {
        write!(err, "{} {} [y/N] ", "confirm:".yellow().bold(), question)?;
    } else {
        write!(err, "confirm: {} [y/N] ", question)?;
    }
    err.flush()?;
    drop(err);

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(is_yes(&line))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
