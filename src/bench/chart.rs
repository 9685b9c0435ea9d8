use super::BenchError;
use super::BenchmarkSession;
use plotters::coord::Shift;
use plotters::prelude::*;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;
use std::ops::Range;
use std::path::Path;

/// Bitmap backends rasterize text through a font engine, which plotters
/// only links when a font feature is enabled.
const BITMAP_GLYPHS: bool = cfg!(feature = "fonts");

/// Axis scaling. Log axes plot log10 of the value and label ticks
/// with the original magnitude.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    Linear,
    #[default]
    Log,
}

impl Scale {
    /// Plot coordinate for `value`, if representable on this axis.
    pub fn project(&self, value: f64) -> Option<f64> {
        match self {
            Self::Linear => value.is_finite().then_some(value),
            Self::Log => (value > 0. && value.is_finite()).then(|| value.log10()),
        }
    }
    fn label(&self, coordinate: f64) -> String {
        match self {
            Self::Log => format!("{:.0e}", 10f64.powf(coordinate)),
            Self::Linear if coordinate.abs() >= 1000. => format!("{:.0}", coordinate),
            Self::Linear => format!("{:.3}", coordinate),
        }
    }
}

/// Line style for one algorithm's curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    /// RGB color. Falls back to the palette entry for the curve's position.
    pub color: Option<[u8; 3]>,
    /// Stroke width in pixels.
    pub width: u32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            color: None,
            width: 2,
        }
    }
}

impl Style {
    /// Concrete color for the curve at `index` in legend order.
    fn rgb(&self, index: usize) -> [u8; 3] {
        self.color.unwrap_or_else(|| {
            let (r, g, b) = Palette99::pick(index).rgb();
            [r, g, b]
        })
    }
}

/// One curve ready to draw, in plot coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub points: Vec<(f64, f64)>,
    pub color: [u8; 3],
    pub width: u32,
}

impl Series {
    fn style(&self) -> ShapeStyle {
        let [r, g, b] = self.color;
        RGBColor(r, g, b).stroke_width(self.width)
    }
}

/// Rendered RGB pixels, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Image {
    pub fn width(&self) -> u32 {
        self.width
    }
    pub fn height(&self) -> u32 {
        self.height
    }
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = 3 * (y as usize * self.width as usize + x as usize);
        self.pixels.get(i..i + 3).map(|p| [p[0], p[1], p[2]])
    }
}

/// Rendering context for one convergence plot.
///
/// Everything a plot depends on lives here and is passed explicitly,
/// so producing several plots in one process cannot interfere.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    title: Option<String>,
    size: (u32, u32),
    x: Scale,
    y: Scale,
    styles: BTreeMap<String, Style>,
    fallback: Style,
}

impl Default for Chart {
    fn default() -> Self {
        Self {
            title: None,
            size: (crate::PLOT_WIDTH, crate::PLOT_HEIGHT),
            x: Scale::Log,
            y: Scale::Log,
            styles: BTreeMap::new(),
            fallback: Style::default(),
        }
    }
}

impl Chart {
    /// Caption. Defaults to the session's game label.
    pub fn with_title(self, title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..self
        }
    }
    pub fn with_size(self, width: u32, height: u32) -> Self {
        Self {
            size: (width, height),
            ..self
        }
    }
    /// Log-scale both axes, or neither.
    pub fn with_log_scale(self, log: bool) -> Self {
        let scale = if log { Scale::Log } else { Scale::Linear };
        Self {
            x: scale,
            y: scale,
            ..self
        }
    }
    pub fn with_scales(self, x: Scale, y: Scale) -> Self {
        Self { x, y, ..self }
    }
    /// Style for the curve named `name`.
    pub fn with_style(mut self, name: impl Into<String>, style: Style) -> Self {
        self.styles.insert(name.into(), style);
        self
    }
    pub fn with_styles(mut self, styles: impl IntoIterator<Item = (String, Style)>) -> Self {
        self.styles.extend(styles);
        self
    }
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    /// Curves in session order. Runs without a representable point are
    /// skipped; points that cannot sit on a log axis are dropped.
    pub fn series(&self, session: &BenchmarkSession) -> Vec<Series> {
        session
            .runs()
            .enumerate()
            .map(|(index, run)| {
                let style = self.styles.get(run.name()).unwrap_or(&self.fallback);
                let points = run
                    .checkpoints()
                    .iter()
                    .filter_map(|c| {
                        let x = self.x.project(c.iteration() as f64)?;
                        let y = self.y.project(c.exploitability())?;
                        Some((x, y))
                    })
                    .collect::<Vec<_>>();
                if points.len() < run.checkpoints().len() {
                    log::debug!(
                        "{:<32}{:<32}",
                        format!("{} points omitted", run.checkpoints().len() - points.len()),
                        run.name()
                    );
                }
                Series {
                    name: run.name().to_string(),
                    points,
                    color: style.rgb(index),
                    width: style.width,
                }
            })
            .filter(|series| !series.points.is_empty())
            .collect()
    }

    /// Render into an RGB buffer. Text is drawn only with the `fonts` feature.
    pub fn render(&self, session: &BenchmarkSession) -> Result<Image, BenchError> {
        let (width, height) = self.size;
        let mut pixels = vec![0u8; width as usize * height as usize * 3];
        {
            let root = BitMapBackend::with_buffer(&mut pixels, self.size).into_drawing_area();
            self.draw(root, session, BITMAP_GLYPHS)
                .map_err(|e| BenchError::Report(e.to_string()))?;
        }
        Ok(Image {
            width,
            height,
            pixels,
        })
    }

    /// Write the plot to `path`. `.svg` produces vector output with text,
    /// any other extension goes through the bitmap encoder (png, bmp, jpg)
    /// and carries text only with the `fonts` feature.
    pub fn save(&self, session: &BenchmarkSession, path: &Path) -> Result<(), BenchError> {
        let failed = |e: String| BenchError::Report(format!("{}: {}", path.display(), e));
        let svg = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
        if svg {
            let root = SVGBackend::new(path, self.size).into_drawing_area();
            self.draw(root, session, true).map_err(|e| failed(e.to_string()))
        } else {
            let root = BitMapBackend::new(path, self.size).into_drawing_area();
            self.draw(root, session, BITMAP_GLYPHS)
                .map_err(|e| failed(e.to_string()))
        }
    }

    /// Draw the plot. With `glyphs` off no text is emitted: the caption,
    /// tick labels, axis descriptions and legend are left out and only the
    /// grid and curves remain.
    fn draw<DB>(
        &self,
        root: DrawingArea<DB, Shift>,
        session: &BenchmarkSession,
        glyphs: bool,
    ) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>>
    where
        DB: DrawingBackend,
    {
        let ref series = self.series(session);
        let (xs, ys) = Self::bounds(series);
        root.fill(&WHITE)?;
        let mut builder = ChartBuilder::on(&root);
        builder.margin(16);
        if glyphs {
            let title = self
                .title
                .clone()
                .unwrap_or_else(|| session.label().to_string());
            builder
                .caption(title, ("sans-serif", 28))
                .x_label_area_size(48)
                .y_label_area_size(72);
        }
        let mut chart = builder.build_cartesian_2d(xs, ys)?;
        chart
            .configure_mesh()
            .x_desc("Iterations")
            .y_desc("Exploitability")
            .x_label_formatter(&|x| self.x.label(*x))
            .y_label_formatter(&|y| self.y.label(*y))
            .draw()?;
        for curve in series {
            let style = curve.style();
            chart
                .draw_series(LineSeries::new(curve.points.iter().copied(), style))?
                .label(curve.name.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
        }
        if glyphs && !series.is_empty() {
            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperRight)
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .draw()?;
        }
        root.present()?;
        Ok(())
    }

    /// Plot ranges covering every point, padded so single points and
    /// flat curves still get a visible extent.
    fn bounds(series: &[Series]) -> (Range<f64>, Range<f64>) {
        let points = series.iter().flat_map(|s| s.points.iter());
        let (mut x0, mut x1) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut y0, mut y1) = (f64::INFINITY, f64::NEG_INFINITY);
        for (x, y) in points {
            x0 = x0.min(*x);
            x1 = x1.max(*x);
            y0 = y0.min(*y);
            y1 = y1.max(*y);
        }
        if x0 > x1 {
            return (0.0..1.0, 0.0..1.0);
        }
        let pad = |lo: f64, hi: f64| {
            let margin = if hi - lo < 1e-9 { 0.5 } else { 0.05 * (hi - lo) };
            (lo - margin)..(hi + margin)
        };
        (pad(x0, x1), pad(y0, y1))
    }
}
