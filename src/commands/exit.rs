use crate::imports::*;

/// `exit` - ends the session.
pub struct ExitCommand;

impl Descriptor for ExitCommand {
    fn name(&self) -> &'static str {
        "exit"
    }
    fn description(&self) -> &'static str {
        "Exit the program"
    }
    fn usage(&self) -> &'static str {
        "Usage: exit"
    }
}

impl Executable for ExitCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<Flow> {
        if !args.is_empty() {
            return ctx.usage(self);
        }
        ctx.line("Bye!")?;
        Ok(Flow::Exit)
    }
}
