//! Size-vs-time comparison plots.
//!
//! See [`TimingPlot`] and [`ShowConfig`] for usage.

use eframe::egui;
use egui_plot::{Legend, Plot, PlotPoints, Points};
use pathgrid_core::Strategy;

use crate::sweep::Report;

const MARKER_RADIUS: f32 = 3.0;

/// Window options for [`TimingPlot::show`].
///
/// ```ignore
/// plot.show(ShowConfig::new().title("Path counting").legend())?;
/// ```
#[derive(Debug, Default)]
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
}

impl ShowConfig {
    /// No title and no legend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Labels each strategy's markers in a legend.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }
}

/// Scatter of grid length against execution time, one marker series per
/// strategy.
///
/// A report whose sizes all share one width is labeled with that width, since
/// only the length varies along the x-axis.
///
/// ```ignore
/// let report = sweep::run_unobserved(&config, &mut counter, &mut harness)?;
/// TimingPlot::from_report(&report).show(ShowConfig::new().legend())?;
/// ```
#[derive(Debug)]
pub struct TimingPlot {
    x_label: String,
    series: Vec<(String, Vec<[f64; 2]>)>,
}

impl Default for TimingPlot {
    fn default() -> Self {
        Self {
            x_label: "length".to_owned(),
            series: Vec::new(),
        }
    }
}

impl TimingPlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects each strategy's `[rows, seconds]` points from a sweep report.
    #[must_use]
    pub fn from_report(report: &Report) -> Self {
        let mut widths = report.samples.iter().map(|sample| sample.dims.cols());
        let x_label = match widths.next() {
            Some(width) if widths.all(|w| w == width) => {
                format!("length (width {width} fixed)")
            }
            _ => "length".to_owned(),
        };

        Strategy::ALL.into_iter().fold(
            Self {
                x_label,
                series: Vec::new(),
            },
            |plot, strategy| plot.series(strategy.name(), report.points(strategy)),
        )
    }

    /// Adds a named marker series.
    #[must_use]
    pub fn series(mut self, name: &str, points: Vec<[f64; 2]>) -> Self {
        self.series.push((name.to_owned(), points));
        self
    }

    /// Opens the plot in a native window and blocks until it is closed.
    ///
    /// # Errors
    ///
    /// Returns an error if the window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let title = config
            .title
            .unwrap_or_else(|| "Execution time comparison".to_owned());
        let app = PlotApp {
            plot: self,
            legend: config.legend,
        };

        eframe::run_native(
            &title,
            eframe::NativeOptions::default(),
            Box::new(move |_cc| Ok(Box::new(app))),
        )
    }
}

struct PlotApp {
    plot: TimingPlot,
    legend: bool,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("timing_scatter")
                .x_axis_label(self.plot.x_label.as_str())
                .y_axis_label("execution time (s)");
            if self.legend {
                plot = plot.legend(Legend::default());
            }
            plot.show(ui, |plot_ui| {
                for (name, points) in &self.plot.series {
                    let points: PlotPoints = points.iter().copied().collect();
                    plot_ui.points(Points::new(points).radius(MARKER_RADIUS).name(name));
                }
            });
        });
    }
}
