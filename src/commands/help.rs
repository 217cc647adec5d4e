use crate::dispatch::unknown_command_message;
use crate::imports::*;

/// `help [command]` - lists every command, or shows the usage of one.
pub struct HelpCommand;

impl Descriptor for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }
    fn description(&self) -> &'static str {
        "Show available commands, or usage for one command"
    }
    fn usage(&self) -> &'static str {
        "Usage: help [command]"
    }
}

impl Executable for HelpCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<Flow> {
        let registry = ctx.registry;
        match args {
            [] => {
                let width = registry.names().map(str::len).max().unwrap_or(0);
                ctx.line("Available commands:")?;
                for command in registry.iter() {
                    ctx.line(format_args!(
                        "  {:<width$}  {}",
                        command.name(),
                        command.description()
                    ))?;
                }
            }
            [name] => match registry.get(name) {
                Some(command) => {
                    ctx.line(command.usage())?;
                    ctx.line(format_args!("  {}", command.description()))?;
                }
                None => ctx.line(unknown_command_message(name))?,
            },
            _ => return ctx.usage(self),
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{RecordingRenderer, run};

    #[test]
    fn lists_commands_sorted() {
        let (_, lines) = run(&HelpCommand, &RecordStore::default(), &RecordingRenderer::default(), &[]);

        assert_eq!(lines[0], "Available commands:");
        let names: Vec<&str> = lines[1..]
            .iter()
            .filter_map(|line| line.split_whitespace().next())
            .collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert_eq!(names.len(), CommandRegistry::defaults().len());
        assert!(lines.iter().any(|l| l.contains("top_countries") && l.contains("most ships")));
    }

    #[test]
    fn shows_usage_for_one_command() {
        let (_, lines) = run(
            &HelpCommand,
            &RecordStore::default(),
            &RecordingRenderer::default(),
            &["top_countries"],
        );
        assert_eq!(lines[0], TopCountriesCommand.usage());
    }

    #[test]
    fn unknown_topic_uses_unknown_command_notice() {
        let (flow, lines) = run(
            &HelpCommand,
            &RecordStore::default(),
            &RecordingRenderer::default(),
            &["foobar"],
        );
        assert_eq!(flow, Flow::Continue);
        assert_eq!(lines, vec![unknown_command_message("foobar")]);
    }
}
