use super::output_file;
use crate::imports::*;

/// `speed_histogram [file]` - histogram of ship speeds, drawn by the renderer.
pub struct SpeedHistogramCommand;

impl Descriptor for SpeedHistogramCommand {
    fn name(&self) -> &'static str {
        "speed_histogram"
    }
    fn description(&self) -> &'static str {
        "Save a histogram of ship speeds to [file]"
    }
    fn usage(&self) -> &'static str {
        "Usage: speed_histogram [file]"
    }
}

impl Executable for SpeedHistogramCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<Flow> {
        let Some(path) = output_file(args, &ctx.settings.histogram_file) else {
            return ctx.usage(self);
        };

        let speeds = extract_speeds(ctx.records.records());
        if speeds.is_empty() {
            ctx.line("No valid speed values to plot.")?;
            return Ok(Flow::Continue);
        }

        let count = speeds.len();
        let plot = HistogramPlot {
            title: "Distribution of ship speeds".to_string(),
            x_label: "Speed (knots)".to_string(),
            values: speeds,
            bins: ctx.settings.histogram_bins,
        };
        match ctx.renderer.histogram(&plot, &path) {
            Ok(()) => ctx.line(format_args!(
                "Saved speed histogram of {count} ships to {}.",
                path.display()
            ))?,
            Err(e) => {
                tracing::warn!(output = %path.display(), error = %e, "Histogram not saved");
                ctx.line(format_args!(
                    "Could not save speed histogram to {}: {e:#}",
                    path.display()
                ))?
            }
        }
        Ok(Flow::Continue)
    }
}

/// `draw_map [file]` - ship positions scattered on a world map.
pub struct DrawMapCommand;

impl Descriptor for DrawMapCommand {
    fn name(&self) -> &'static str {
        "draw_map"
    }
    fn description(&self) -> &'static str {
        "Save a map of all ship positions to [file]"
    }
    fn usage(&self) -> &'static str {
        "Usage: draw_map [file]"
    }
}

impl Executable for DrawMapCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<Flow> {
        let Some(path) = output_file(args, &ctx.settings.map_file) else {
            return ctx.usage(self);
        };

        let points = extract_coordinates(ctx.records.records());
        if points.is_empty() {
            ctx.line("No valid ship positions to plot.")?;
            return Ok(Flow::Continue);
        }

        let count = points.len();
        let plot = ScatterPlot {
            title: "Ship positions".to_string(),
            points,
        };
        match ctx.renderer.scatter(&plot, &path) {
            Ok(()) => ctx.line(format_args!(
                "Saved ship map of {count} ships to {}.",
                path.display()
            ))?,
            Err(e) => {
                tracing::warn!(output = %path.display(), error = %e, "Map not saved");
                ctx.line(format_args!(
                    "Could not save ship map to {}: {e:#}",
                    path.display()
                ))?
            }
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{FailingRenderer, RecordingRenderer, run};
    use crate::test_utils::{init_tracing, store_of};

    fn fleet() -> RecordStore {
        store_of(&[
            &[("SPEED", Some("12.5")), ("LAT", Some("36.1")), ("LON", Some("-5.3"))],
            &[("SPEED", Some("-4")), ("LAT", Some("95")), ("LON", Some("10"))],
            &[("SPEED", Some("n/a")), ("LAT", Some("10")), ("LON", Some("-200"))],
            &[("SPEED", Some("0")), ("LAT", Some("-33.9")), ("LON", Some("18.4"))],
            &[("SHIPNAME", Some("Ghost"))],
        ])
    }

    #[test]
    fn histogram_receives_clean_speeds() {
        init_tracing();
        let renderer = RecordingRenderer::default();
        let (flow, lines) = run(&SpeedHistogramCommand, &fleet(), &renderer, &[]);

        assert_eq!(flow, Flow::Continue);
        assert_eq!(
            lines,
            vec!["Saved speed histogram of 2 ships to speed_histogram.svg."]
        );

        let histograms = renderer.histograms.lock().unwrap();
        assert_eq!(histograms.len(), 1);
        let (plot, path) = &histograms[0];
        assert_eq!(plot.values, vec![12.5, 0.0]);
        assert_eq!(plot.bins, CommandSettings::default().histogram_bins);
        assert_eq!(path, &PathBuf::from("speed_histogram.svg"));
    }

    #[test]
    fn map_receives_in_range_points_and_custom_file() {
        init_tracing();
        let renderer = RecordingRenderer::default();
        let (_, lines) = run(&DrawMapCommand, &fleet(), &renderer, &["out/fleet.svg"]);

        assert_eq!(lines, vec!["Saved ship map of 2 ships to out/fleet.svg."]);
        let scatters = renderer.scatters.lock().unwrap();
        let (plot, path) = &scatters[0];
        assert_eq!(
            plot.points,
            vec![
                GeoPoint { lat: 36.1, lon: -5.3 },
                GeoPoint { lat: -33.9, lon: 18.4 },
            ]
        );
        assert_eq!(path, &PathBuf::from("out/fleet.svg"));
    }

    #[test]
    fn nothing_to_plot_skips_renderer() {
        let renderer = RecordingRenderer::default();
        let store = store_of(&[&[("SHIPNAME", Some("Ghost"))]]);

        let (_, lines) = run(&SpeedHistogramCommand, &store, &renderer, &[]);
        assert_eq!(lines, vec!["No valid speed values to plot."]);
        let (_, lines) = run(&DrawMapCommand, &store, &renderer, &[]);
        assert_eq!(lines, vec!["No valid ship positions to plot."]);

        assert!(renderer.histograms.lock().unwrap().is_empty());
        assert!(renderer.scatters.lock().unwrap().is_empty());
    }

    #[test]
    fn too_many_arguments_prints_usage() {
        let renderer = RecordingRenderer::default();
        let (_, lines) = run(&DrawMapCommand, &fleet(), &renderer, &["a.svg", "b.svg"]);
        assert_eq!(lines, vec![DrawMapCommand.usage()]);
        assert!(renderer.scatters.lock().unwrap().is_empty());
    }

    #[test]
    fn render_failures_print_a_notice() {
        init_tracing();
        let renderer = FailingRenderer;

        let (flow, lines) = run(&DrawMapCommand, &fleet(), &renderer, &["/tmp"]);
        assert_eq!(flow, Flow::Continue);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("Could not save ship map to /tmp: "));
        assert!(lines[0].contains("is a directory"));

        let (flow, lines) = run(&SpeedHistogramCommand, &fleet(), &renderer, &[]);
        assert_eq!(flow, Flow::Continue);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("Could not save speed histogram to speed_histogram.svg: "));
    }

    #[test]
    fn unwritable_file_keeps_session_going() {
        init_tracing();
        let dir = tempfile::tempdir().unwrap();
        let renderer = SvgRenderer::new().unwrap();
        let target = dir.path().to_string_lossy().to_string();

        let (flow, lines) = run(&DrawMapCommand, &fleet(), &renderer, &[target.as_str()]);
        assert_eq!(flow, Flow::Continue);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("Could not save ship map to "));
    }
}
