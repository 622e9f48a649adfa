//! Plain text rendering.

use crate::cli::command::Command;

/// One line per simulator, each exactly as formatted.
#[must_use]
pub fn render_list(lines: &[String]) -> String {
    lines.join("\n")
}

/// Bracketed list of command descriptions, `[]` when there are none.
#[must_use]
pub fn render_help(commands: &[Command]) -> String {
    let descriptions: Vec<_> = commands.iter().map(Command::description).collect();
    format!("[{}]", descriptions.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::format::SimulatorFormat;
    use crate::core::query::SimulatorQuery;

    #[test]
    fn list_keeps_leading_spaces() {
        let lines = vec![" AAAA".to_string(), " BBBB".to_string()];
        assert_eq!(render_list(&lines), " AAAA\n BBBB");
        assert_eq!(render_list(&[]), "");
    }

    #[test]
    fn help_lists_descriptions() {
        assert_eq!(render_help(&[]), "[]");
        let commands = [
            Command::Help,
            Command::List(SimulatorQuery::All, vec![SimulatorFormat::Uuid]),
        ];
        assert_eq!(render_help(&commands), "[Prints Help, Lists Simulators]");
    }
}
