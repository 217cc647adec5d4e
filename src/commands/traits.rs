use crate::imports::*;

/*
    Traits:
    * Command - Marker trait for commands implementing Descriptor and Executable
    * Descriptor - Name, one-line description and usage, used by the registry and by help
    * Executable - Runs the command against the records in a CommandContext

    Executable contract: user input problems are handled inside execute (print usage, return
    Ok(Flow::Continue)). A plot file that cannot be written is reported the same way.
    An Err is reserved for a broken output stream.
*/
pub trait Command: Descriptor + Executable {}

// Blanket implementation for any type that implements the required traits
impl<T: Descriptor + Executable> Command for T {}

pub trait Descriptor: Send + Sync {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn usage(&self) -> &'static str;
}

pub trait Executable: Send + Sync {
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<Flow>;
}
