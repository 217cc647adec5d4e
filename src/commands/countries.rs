use super::parse_positive_count;
use crate::imports::*;

/// `show_countries` - every country with at least one ship, alphabetical, one per line.
pub struct ShowCountriesCommand;

impl Descriptor for ShowCountriesCommand {
    fn name(&self) -> &'static str {
        "show_countries"
    }
    fn description(&self) -> &'static str {
        "List all ship countries in alphabetical order"
    }
    fn usage(&self) -> &'static str {
        "Usage: show_countries"
    }
}

impl Executable for ShowCountriesCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<Flow> {
        if !args.is_empty() {
            return ctx.usage(self);
        }

        let countries = distinct_sorted(extract_valid(ctx.records.records(), &ShipField::Country));
        tracing::info!(countries = countries.len(), "Listing countries");
        for country in &countries {
            ctx.line(country)?;
        }
        Ok(Flow::Continue)
    }
}

/// `top_countries <num>` - the countries with the most ships, `COUNTRY: count` per line.
pub struct TopCountriesCommand;

impl Descriptor for TopCountriesCommand {
    fn name(&self) -> &'static str {
        "top_countries"
    }
    fn description(&self) -> &'static str {
        "Show the <num> countries with the most ships"
    }
    fn usage(&self) -> &'static str {
        "Usage: top_countries <num> (num must be a positive integer)"
    }
}

impl Executable for TopCountriesCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<Flow> {
        let [arg] = args else {
            return ctx.usage(self);
        };
        let Some(n) = parse_positive_count(arg) else {
            return ctx.usage(self);
        };

        let table = count_by_value(extract_valid(ctx.records.records(), &ShipField::Country));
        let top = top_n(&table, n);
        tracing::info!(requested = n.get(), returned = top.len(), "Ranking countries");
        for (country, count) in &top {
            ctx.line(format_args!("{country}: {count}"))?;
        }
        Ok(Flow::Continue)
    }
}
