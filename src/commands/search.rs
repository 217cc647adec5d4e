use crate::imports::*;

/// `search_ship <query...>` - ships whose name contains the query, ignoring case.
pub struct SearchShipCommand;

impl Descriptor for SearchShipCommand {
    fn name(&self) -> &'static str {
        "search_ship"
    }
    fn description(&self) -> &'static str {
        "Find ships whose name contains <query> (case-insensitive)"
    }
    fn usage(&self) -> &'static str {
        "Usage: search_ship <query...>"
    }
}

impl Executable for SearchShipCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<Flow> {
        let query = args.join(" ");
        if query.trim().is_empty() {
            return ctx.usage(self);
        }

        let matches = search_substring(ctx.records.records(), &ShipField::ShipName, &query);
        if matches.is_empty() {
            ctx.line(format_args!("No ships found matching '{query}'."))?;
            return Ok(Flow::Continue);
        }

        for record in matches {
            if let Some(name) = record.valid_text(&ShipField::ShipName) {
                ctx.line(name)?;
            }
        }
        Ok(Flow::Continue)
    }
}
