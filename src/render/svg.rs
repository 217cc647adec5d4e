use super::{Bin, HistogramPlot, PlotRenderer, ScatterPlot};
use crate::imports::*;
use serde::Serialize;

/*
    SvgRenderer - PlotRenderer that fills tera templates with precomputed geometry and writes SVG files.
    Templates are compiled into the binary and registered once in SvgRenderer::new.
*/
const HISTOGRAM_TEMPLATE: &str = "histogram.svg";
const MAP_TEMPLATE: &str = "map.svg";

// Equirectangular projection, pixels per degree.
const MAP_SCALE: f64 = 2.5;

#[derive(Debug, Clone)]
pub struct SvgRenderer {
    tera: tera::Tera,
}

impl SvgRenderer {
    pub fn new() -> Result<Self> {
        let mut tera = tera::Tera::default();
        tera.add_raw_templates(vec![
            (
                HISTOGRAM_TEMPLATE,
                include_str!("templates/histogram.svg.tera"),
            ),
            (MAP_TEMPLATE, include_str!("templates/map.svg.tera")),
        ])
        .map_err(|e| anyhow::anyhow!("Failed to register plot templates: {}", e))?;
        Ok(SvgRenderer { tera })
    }

    fn render_to_file(&self, template: &str, view: &impl Serialize, path: &Path) -> Result<()> {
        let context = tera::Context::from_serialize(view)
            .map_err(|e| anyhow::anyhow!("Failed to build context for '{}': {}", template, e))?;
        let rendered = self
            .tera
            .render(template, &context)
            .map_err(|e| anyhow::anyhow!("Template rendering failed for '{}': {}", template, e))?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create output directory '{}'", parent.display())
                })?;
            }
        }

        std::fs::write(path, &rendered)
            .with_context(|| format!("Failed to write plot to '{}'", path.display()))?;

        tracing::info!(
            template = %template,
            output = %path.display(),
            size = rendered.len(),
            "Plot written"
        );
        Ok(())
    }
}

impl PlotRenderer for SvgRenderer {
    fn histogram(&self, plot: &HistogramPlot, path: &Path) -> Result<()> {
        let frame = Frame::new(800.0, 480.0, 70.0, 20.0, 50.0, 70.0);
        let bins = plot.bin_counts();
        let max_count = bins.iter().map(|b| b.count).max().unwrap_or(0).max(1);

        let bar_width = frame.plot_width / bins.len().max(1) as f64;
        let bars: Vec<BarView> = bins
            .iter()
            .enumerate()
            .map(|(i, bin)| BarView::new(&frame, bin, i, bar_width, max_count))
            .collect();

        let y_ticks = (0..=4)
            .map(|i| {
                let value = max_count as f64 * i as f64 / 4.0;
                Tick {
                    position: frame.bottom - frame.plot_height * i as f64 / 4.0,
                    label: format!("{}", value.round()),
                }
            })
            .collect();

        let step = bins.len().div_ceil(10).max(1);
        let x_ticks = bins
            .iter()
            .enumerate()
            .step_by(step)
            .map(|(i, bin)| Tick {
                position: frame.left + bar_width * i as f64,
                label: format!("{:.1}", bin.start),
            })
            .chain(bins.last().map(|bin| Tick {
                position: frame.right,
                label: format!("{:.1}", bin.end),
            }))
            .collect();

        let view = HistogramView {
            title: &plot.title,
            x_label: &plot.x_label,
            frame,
            bars,
            y_ticks,
            x_ticks,
        };
        self.render_to_file(HISTOGRAM_TEMPLATE, &view, path)
    }

    fn scatter(&self, plot: &ScatterPlot, path: &Path) -> Result<()> {
        let frame = Frame::new(
            360.0 * MAP_SCALE + 90.0,
            180.0 * MAP_SCALE + 90.0,
            50.0,
            40.0,
            50.0,
            40.0,
        );

        let project = |lat: f64, lon: f64| {
            (
                frame.left + (lon + 180.0) * MAP_SCALE,
                frame.top + (90.0 - lat) * MAP_SCALE,
            )
        };

        let points = plot
            .points
            .iter()
            .map(|point| {
                let (x, y) = project(point.lat, point.lon);
                PointView { x, y }
            })
            .collect();

        let meridians = (-180..=180)
            .step_by(60)
            .map(|lon| Tick {
                position: project(0.0, lon as f64).0,
                label: format!("{lon}°"),
            })
            .collect();
        let parallels = (-90..=90)
            .step_by(30)
            .map(|lat| Tick {
                position: project(lat as f64, 0.0).1,
                label: format!("{lat}°"),
            })
            .collect();

        let view = MapView {
            title: &plot.title,
            frame,
            points,
            meridians,
            parallels,
        };
        self.render_to_file(MAP_TEMPLATE, &view, path)
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
struct Frame {
    width: f64,
    height: f64,
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
    plot_width: f64,
    plot_height: f64,
    center_x: f64,
    center_y: f64,
    label_left: f64,
    label_bottom: f64,
    caption_y: f64,
}

impl Frame {
    fn new(width: f64, height: f64, left: f64, right: f64, top: f64, bottom: f64) -> Self {
        let plot_right = width - right;
        let plot_bottom = height - bottom;
        Frame {
            width,
            height,
            left,
            right: plot_right,
            top,
            bottom: plot_bottom,
            plot_width: plot_right - left,
            plot_height: plot_bottom - top,
            center_x: (left + plot_right) / 2.0,
            center_y: (top + plot_bottom) / 2.0,
            label_left: left - 6.0,
            label_bottom: plot_bottom + 16.0,
            caption_y: height - 12.0,
        }
    }
}

#[derive(Debug, Serialize)]
struct Tick {
    position: f64,
    label: String,
}

#[derive(Debug, Serialize)]
struct BarView {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    start: f64,
    end: f64,
    count: usize,
}

impl BarView {
    fn new(frame: &Frame, bin: &Bin, index: usize, width: f64, max_count: usize) -> Self {
        let height = frame.plot_height * bin.count as f64 / max_count as f64;
        BarView {
            x: frame.left + width * index as f64,
            y: frame.bottom - height,
            width,
            height,
            start: bin.start,
            end: bin.end,
            count: bin.count,
        }
    }
}

#[derive(Debug, Serialize)]
struct PointView {
    x: f64,
    y: f64,
}

#[derive(Debug, Serialize)]
struct HistogramView<'a> {
    title: &'a str,
    x_label: &'a str,
    frame: Frame,
    bars: Vec<BarView>,
    y_ticks: Vec<Tick>,
    x_ticks: Vec<Tick>,
}

#[derive(Debug, Serialize)]
struct MapView<'a> {
    title: &'a str,
    frame: Frame,
    points: Vec<PointView>,
    meridians: Vec<Tick>,
    parallels: Vec<Tick>,
}
