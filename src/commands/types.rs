use crate::imports::*;

/// `ships_by_types` - number of ships per vessel type, most common first.
pub struct ShipsByTypesCommand;

impl Descriptor for ShipsByTypesCommand {
    fn name(&self) -> &'static str {
        "ships_by_types"
    }
    fn description(&self) -> &'static str {
        "Show how many ships there are of each type"
    }
    fn usage(&self) -> &'static str {
        "Usage: ships_by_types"
    }
}

impl Executable for ShipsByTypesCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<Flow> {
        if !args.is_empty() {
            return ctx.usage(self);
        }

        let table = count_by_value(extract_valid(
            ctx.records.records(),
            &ShipField::TypeSummary,
        ));
        tracing::info!(types = table.len(), ships = table.total(), "Counting ship types");
        for (ship_type, count) in ranked(&table) {
            ctx.line(format_args!("{ship_type}: {count}"))?;
        }
        Ok(Flow::Continue)
    }
}
