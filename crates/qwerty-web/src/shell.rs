//! Shell-script response bodies.
//!
//! Clients fetch qwerty.sh with `curl -sSL qwerty.sh | sh`. Anything the
//! server sends besides the real file may end up executed, so every
//! non-content body is a script that prints to stderr and exits non-zero.

use std::fmt;

/// A POSIX shell script that writes lines to stderr and exits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellScript {
    lines: Vec<Option<String>>,
    exit_code: u8,
}

impl ShellScript {
    /// Creates an empty script exiting with `exit_code`.
    pub fn new(exit_code: u8) -> Self {
        Self {
            lines: Vec::new(),
            exit_code,
        }
    }

    /// Creates a script whose first line is `error: <message>`.
    pub fn error(message: impl fmt::Display, exit_code: u8) -> Self {
        Self::new(exit_code).line(format!("error: {message}"))
    }

    /// Appends a line of text.
    pub fn line(mut self, text: impl Into<String>) -> Self {
        self.lines.push(Some(text.into()));
        self
    }

    /// Appends an empty line.
    pub fn blank(mut self) -> Self {
        self.lines.push(None);
        self
    }

    /// Renders the script text.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ShellScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let commands: Vec<String> = self
            .lines
            .iter()
            .map(|line| match line {
                Some(text) => format!("echo {}", quote(text)),
                None => "echo".to_owned(),
            })
            .collect();
        let width = commands.iter().map(String::len).max().unwrap_or(0);

        writeln!(f, "#!/usr/bin/env sh")?;
        for command in &commands {
            writeln!(f, "{command:<width$} >&2")?;
        }
        writeln!(f)?;
        writeln!(f, "exit {}", self.exit_code)
    }
}

/// Single-quotes `text` for sh.
fn quote(text: &str) -> String {
    format!("'{}'", text.replace('\'', r"'\''"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_aligns_redirections() {
        let script = ShellScript::error("Use HTTPS.", 2)
            .blank()
            .line("curl -sSL qwerty.sh");

        assert_eq!(
            script.render(),
            "#!/usr/bin/env sh\n\
             echo 'error: Use HTTPS.'   >&2\n\
             echo                       >&2\n\
             echo 'curl -sSL qwerty.sh' >&2\n\
             \n\
             exit 2\n"
        );
    }

    #[test]
    fn test_quote_escapes_single_quotes() {
        let script = ShellScript::error("revision 'x' not found", 44);
        let text = script.render();
        assert!(text.contains(r"echo 'error: revision '\''x'\'' not found' >&2"));
        assert!(text.ends_with("exit 44\n"));
    }

    #[test]
    fn test_empty_script_only_exits() {
        assert_eq!(ShellScript::new(1).render(), "#!/usr/bin/env sh\n\nexit 1\n");
    }
}
