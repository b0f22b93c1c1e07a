//! Plotting observer for visualizing drain runs.
//!
//! See [`PlotObserver`] and [`Plottable`] for usage.

use eframe::egui::{self, Color32};
use egui_plot::{Arrows, Legend, Line, Plot, PlotPoints};
use torricelli_core::Observer;
use torricelli_solvers::transient::euler;
use uom::si::{length::meter, time::minute};

/// Configuration for rendering a [`PlotObserver`] result.
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
/// All fields are independent with sensible defaults.
///
/// # Example
///
/// ```ignore
/// obs.show(
///     ShowConfig::new()
///         .title("Water Height vs Time")
///         .x_label("Time (minutes)")
///         .y_label("Water Height (m)")
///         .annotation(summary.to_string()),
/// )?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
    x_label: Option<String>,
    y_label: Option<String>,
    annotation: Option<String>,
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with defaults: no title, no legend, no axis
    /// labels, no annotation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enables a legend labeling each trace by name.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    #[must_use]
    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = Some(label.into());
        self
    }

    /// Adds a text box pinned to the top-right corner of the window.
    #[must_use]
    pub fn annotation(mut self, text: impl Into<String>) -> Self {
        self.annotation = Some(text.into());
        self
    }
}

/// Extracts plottable data from a solver event.
///
/// Implement this on an event type to use [`PlotObserver`] directly as a
/// solver observer (the "direct path"). Return `None` from [`x`][Plottable::x]
/// to skip the event entirely; return `None` in a trace slot to skip that
/// trace for the event.
///
/// [`euler::Event`] implements `Plottable<1>` with time in minutes on the x
/// axis and the water height in meters as its single trace.
pub trait Plottable<const N: usize> {
    /// The x-axis value for this event, or `None` to skip recording entirely.
    fn x(&self) -> Option<f64>;

    /// The y-axis values for each trace.
    ///
    /// `None` in a slot skips that trace for this event while leaving others
    /// unaffected.
    fn traces(&self) -> [Option<f64>; N];
}

impl Plottable<1> for euler::Event {
    fn x(&self) -> Option<f64> {
        Some(self.sample.time.get::<minute>())
    }

    fn traces(&self) -> [Option<f64>; 1] {
        [Some(self.sample.height.get::<meter>())]
    }
}

/// An observer that collects trace data during a run and displays it via egui.
///
/// The const generic `N` is the number of traces. Create with
/// [`PlotObserver::new`], passing the trace names. Record data by either:
///
/// - **Direct path**: pass `&mut PlotObserver` as the solver observer for any
///   event type implementing [`Plottable<N>`][Plottable].
/// - **Closure path**: wrap `&mut PlotObserver` in a closure and call
///   [`record`][PlotObserver::record] manually, for example to plot against
///   something other than time.
///
/// Call [`show`][PlotObserver::show] with a [`ShowConfig`] to render the result.
///
/// # Example: direct path
///
/// ```ignore
/// let mut obs = PlotObserver::<1>::new(["Water height"]);
/// euler::solve(&tank, &params, &mut obs)?;
/// obs.show(ShowConfig::new().x_label("Time (minutes)"))?;
/// ```
///
/// # Example: closure path
///
/// ```ignore
/// let mut obs = PlotObserver::<1>::new(["dh/dt"]);
/// euler::solve(&tank, &params, |event: &euler::Event| {
///     if let Some(rate) = event.rate {
///         obs.record(event.sample.height.get::<meter>(), [Some(rate.get::<meter_per_second>())]);
///     }
///     None
/// })?;
/// ```
pub struct PlotObserver<const N: usize> {
    names: [String; N],
    data: [Vec<[f64; 2]>; N],
    arrows: Vec<([f64; 2], [f64; 2])>,
}

impl<const N: usize> PlotObserver<N> {
    /// Creates a new `PlotObserver` with the given trace names.
    pub fn new(names: [&str; N]) -> Self {
        Self {
            names: names.map(str::to_owned),
            data: std::array::from_fn(|_| Vec::new()),
            arrows: Vec::new(),
        }
    }

    /// Records a single data point across all traces.
    ///
    /// For each trace slot, `None` skips recording for that trace while
    /// leaving other traces unaffected.
    pub fn record(&mut self, x: f64, traces: [Option<f64>; N]) {
        for (i, y) in traces.into_iter().enumerate() {
            if let Some(y) = y {
                self.data[i].push([x, y]);
            }
        }
    }

    /// Adds an arrow from `origin` to `tip`, drawn beneath the traces.
    ///
    /// Arrows are independent of the traces; use them for a direction field.
    pub fn arrow(&mut self, origin: [f64; 2], tip: [f64; 2]) {
        self.arrows.push((origin, tip));
    }

    /// Opens a blocking egui window displaying all collected traces.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions::default();
        let title = config.title.clone().unwrap_or_default();
        let traces: Vec<(String, Vec<[f64; 2]>)> = self.names.into_iter().zip(self.data).collect();
        let arrows = self.arrows;

        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| {
                Ok(Box::new(PlotApp {
                    traces,
                    arrows,
                    config,
                }))
            }),
        )
    }
}

impl<const N: usize, E, A> Observer<E, A> for PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(x) = event.x() {
            self.record(x, event.traces());
        }
        None
    }
}

/// Allows `&mut PlotObserver<N>` to be passed to solvers that take an observer
/// by value, so [`PlotObserver::show`] can be called after the run completes.
impl<const N: usize, E, A> Observer<E, A> for &mut PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

/// The egui [`eframe::App`] that renders collected traces.
struct PlotApp {
    traces: Vec<(String, Vec<[f64; 2]>)>,
    arrows: Vec<([f64; 2], [f64; 2])>,
    config: ShowConfig,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("plot_observer");
            if self.config.legend {
                plot = plot.legend(Legend::default());
            }
            if let Some(label) = &self.config.x_label {
                plot = plot.x_axis_label(label.clone());
            }
            if let Some(label) = &self.config.y_label {
                plot = plot.y_axis_label(label.clone());
            }
            plot.show(ui, |plot_ui| {
                if !self.arrows.is_empty() {
                    let origins: PlotPoints = self.arrows.iter().map(|(o, _)| *o).collect();
                    let tips: PlotPoints = self.arrows.iter().map(|(_, t)| *t).collect();
                    let field = Arrows::new(origins, tips).color(Color32::from_rgb(128, 0, 128));
                    plot_ui.arrows(field);
                }
                for (name, points) in &self.traces {
                    let plot_points: PlotPoints = points.iter().copied().collect();
                    plot_ui.line(Line::new(plot_points).name(name));
                }
            });
        });

        if let Some(text) = &self.config.annotation {
            egui::Window::new("annotation")
                .title_bar(false)
                .resizable(false)
                .anchor(egui::Align2::RIGHT_TOP, [-16.0, 16.0])
                .show(ctx, |ui| ui.label(text.as_str()));
        }
    }
}
