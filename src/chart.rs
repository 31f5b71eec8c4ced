// Sparkline geometry: turns a window of samples into points and an SVG-style path.
// Horizontal spacing is by index, not elapsed time.

use std::fmt::Write as _;

use crate::models::Sample;

/// Vertical bound used to map values onto the chart height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scale {
    /// Map `[0, max]` onto the height (percentages, capacity-relative metrics).
    Fixed(f64),
    /// Derive `[min, max]` from the window with 10% padding each side.
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: 270.0,
            height: 20.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub is_spike: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub points: Vec<Point>,
    /// `M x y L x y ...` through every point.
    pub path: String,
    /// `path` closed down to the baseline, for a filled area under the line.
    pub area_path: String,
    /// Display bounds actually used: `(lo, hi)`.
    pub bounds: (f64, f64),
    pub dims: Dimensions,
    /// True when any sample is flagged; the whole series switches to the alert colour.
    pub is_spike: bool,
}

const GLYPHS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

impl Series {
    pub fn stroke<'a>(&self, color: &'a str, alert: &'a str) -> &'a str {
        if self.is_spike { alert } else { color }
    }

    /// One block glyph per point, taller for higher values.
    pub fn glyphs(&self) -> String {
        let h = self.dims.height;
        self.points
            .iter()
            .map(|p| {
                let level = if h > 0.0 { 1.0 - p.y / h } else { 0.0 };
                let idx = (level.clamp(0.0, 1.0) * (GLYPHS.len() - 1) as f64).round() as usize;
                GLYPHS[idx]
            })
            .collect()
    }
}

/// Builds chart geometry for `samples`; `None` with fewer than two samples.
pub fn build_series<'a, I>(samples: I, scale: Scale, dims: Dimensions) -> Option<Series>
where
    I: IntoIterator<Item = &'a Sample>,
{
    let samples: Vec<&Sample> = samples.into_iter().collect();
    if samples.len() < 2 {
        return None;
    }

    let (lo, hi) = match scale {
        Scale::Fixed(max) => (0.0, max),
        Scale::Auto => {
            let min = samples.iter().map(|s| s.value).fold(f64::INFINITY, f64::min);
            let max = samples
                .iter()
                .map(|s| s.value)
                .fold(f64::NEG_INFINITY, f64::max);
            let padding = match (max - min) * 0.1 {
                p if p > 0.0 => p,
                _ => 1.0,
            };
            (min - padding, max + padding)
        }
    };
    let span = match hi - lo {
        s if s.is_finite() && s > 0.0 => s,
        _ => 1.0,
    };

    let last = (samples.len() - 1) as f64;
    let points: Vec<Point> = samples
        .iter()
        .enumerate()
        .map(|(i, s)| Point {
            x: i as f64 / last * dims.width,
            y: dims.height - (s.value - lo) / span * dims.height,
            is_spike: s.is_spike,
        })
        .collect();

    let mut path = String::new();
    for (i, p) in points.iter().enumerate() {
        let cmd = if i == 0 { "M" } else { " L" };
        let _ = write!(path, "{} {} {}", cmd, p.x, p.y);
    }
    let area_path = format!(
        "{} L {} {} L 0 {} Z",
        path, dims.width, dims.height, dims.height
    );
    let is_spike = points.iter().any(|p| p.is_spike);

    Some(Series {
        points,
        path,
        area_path,
        bounds: (lo, lo + span),
        dims,
        is_spike,
    })
}
