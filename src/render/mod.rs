use crate::imports::*;

pub mod svg;

/*
    Types:
    * PlotRenderer - The plotting collaborator. Handlers hand it clean arrays and a file name, nothing else.
    * HistogramPlot - Values to bucket into a histogram
    * ScatterPlot - Coordinates to draw on a world map
    * Bin - One histogram bucket, [start, end) except the last which is closed
*/
pub trait PlotRenderer: Send + Sync {
    fn histogram(&self, plot: &HistogramPlot, path: &Path) -> Result<()>;
    fn scatter(&self, plot: &ScatterPlot, path: &Path) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistogramPlot {
    pub title: String,
    pub x_label: String,
    pub values: Vec<f64>,
    pub bins: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPlot {
    pub title: String,
    pub points: Vec<GeoPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Bin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl HistogramPlot {
    /// Buckets the values into `bins` equal-width bins spanning min..=max.
    /// A single distinct value gets one bin of width 1.
    pub fn bin_counts(&self) -> Vec<Bin> {
        let bins = self.bins.max(1);
        let Some((min, max)) = min_max(&self.values) else {
            return Vec::new();
        };

        if max <= min {
            return vec![Bin {
                start: min,
                end: min + 1.0,
                count: self.values.len(),
            }];
        }

        let width = (max - min) / bins as f64;
        let mut counts = vec![0usize; bins];
        for value in &self.values {
            let index = (((value - min) / width).floor() as usize).min(bins - 1);
            counts[index] += 1;
        }

        counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| Bin {
                start: min + width * i as f64,
                end: min + width * (i + 1) as f64,
                count,
            })
            .collect()
    }
}

fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    values.iter().fold(None, |acc, &v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}
