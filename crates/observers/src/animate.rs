//! Real-time animation of conical tanks draining side by side.

use eframe::egui::{self, Color32};
use egui_plot::{Legend, Line, Plot, PlotPoint, PlotPoints, Polygon, Text};
use torricelli_core::{Cone, DrainParameters};
use torricelli_solvers::transient::lockstep::{self, Lockstep};
use tracing::{error, info};
use uom::si::{f64::Length, length::centimeter, time::second};

use crate::glyph::{self, Point};

const PALETTE: [Color32; 4] = [
    Color32::from_rgb(30, 90, 220),
    Color32::from_rgb(0, 190, 200),
    Color32::from_rgb(220, 120, 30),
    Color32::from_rgb(120, 60, 200),
];

/// An egui app that drains `N` cones on a shared clock and draws them.
///
/// Each redraw advances the run by one [`lockstep`] frame, then draws the
/// tanks with their water levels beside a height-versus-time chart. Lengths
/// are drawn in centimeters and time in seconds. Redrawing stops once every
/// tank is empty.
pub struct Animation<const N: usize> {
    sim: Lockstep<Cone, N>,
    labels: [String; N],
    steps_per_frame: usize,
    history: [Vec<[f64; 2]>; N],
    error: Option<lockstep::Error>,
    done: bool,
}

impl<const N: usize> Animation<N> {
    /// Creates an animation of `tanks`, labeled in lane order.
    ///
    /// Advances 50 steps per frame unless changed with
    /// [`steps_per_frame`](Animation::steps_per_frame).
    pub fn new(tanks: [Cone; N], labels: [&str; N], params: DrainParameters) -> Self {
        let sim = Lockstep::new(tanks, params);
        let start = sim.frame();
        Self {
            sim,
            labels: labels.map(str::to_owned),
            steps_per_frame: 50,
            history: std::array::from_fn(|i| {
                vec![[start.time.get::<second>(), start.heights[i].get::<centimeter>()]]
            }),
            error: None,
            done: false,
        }
    }

    #[must_use]
    pub fn steps_per_frame(mut self, steps: usize) -> Self {
        self.steps_per_frame = steps;
        self
    }

    /// Opens a blocking egui window running the animation.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, title: &str) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions::default();
        eframe::run_native(title, options, Box::new(move |_cc| Ok(Box::new(self))))
    }

    /// Returns `true` once the run has finished or failed.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Advances the run by one frame and records it.
    fn tick(&mut self) {
        if self.done {
            return;
        }
        match self.sim.advance_frame(self.steps_per_frame) {
            Ok(frame) => {
                let t = frame.time.get::<second>();
                for (trace, height) in self.history.iter_mut().zip(frame.heights) {
                    trace.push([t, height.get::<centimeter>()]);
                }
                if frame.finished {
                    info!(frames = frame.index, time_s = t, "animation complete");
                    self.done = true;
                }
            }
            Err(err) => {
                error!(error = %err, "animation stopped");
                self.error = Some(err);
                self.done = true;
            }
        }
    }

    /// Horizontal centre of each tank, spread evenly about the origin.
    #[allow(clippy::cast_precision_loss)]
    fn centers(&self) -> [Length; N] {
        let spacing = 2.4
            * self
                .sim
                .lanes()
                .iter()
                .map(|lane| lane.tank().radius())
                .fold(Length::new::<centimeter>(0.0), |a, b| if b > a { b } else { a });
        let mid = (N as f64 - 1.0) / 2.0;
        std::array::from_fn(|i| (i as f64 - mid) * spacing)
    }

    fn draw_tanks(&self, ui: &mut egui::Ui) {
        let empty = self.sim.params().empty_height();
        let centers = self.centers();

        Plot::new("tanks")
            .data_aspect(1.0)
            .show_x(false)
            .include_y(-5.0)
            .show(ui, |plot_ui| {
                for (i, lane) in self.sim.lanes().iter().enumerate() {
                    let tank = lane.tank();
                    let color = PALETTE[i % PALETTE.len()];
                    let outline = glyph::tank_outline(tank, centers[i]);
                    let level = lane.state().height();
                    let water = glyph::water_outline(tank, centers[i], level, empty);

                    if !water.is_empty() {
                        plot_ui.polygon(
                            Polygon::new(to_plot_points(&water))
                                .fill_color(color.gamma_multiply(0.6))
                                .stroke((1.0, color)),
                        );
                    }
                    plot_ui.line(
                        Line::new(to_plot_points(&outline))
                            .color(Color32::BLACK)
                            .width(2.0),
                    );
                    plot_ui.text(Text::new(
                        PlotPoint::new(
                            centers[i].get::<centimeter>(),
                            (tank.height() + Length::new::<centimeter>(5.0)).get::<centimeter>(),
                        ),
                        self.labels[i].as_str(),
                    ));
                }
            });
    }

    fn draw_history(&self, ui: &mut egui::Ui) {
        Plot::new("heights")
            .legend(Legend::default())
            .x_axis_label("Time (s)")
            .y_axis_label("Height (cm)")
            .include_x(0.0)
            .include_y(0.0)
            .show(ui, |plot_ui| {
                for (i, (label, points)) in self.labels.iter().zip(&self.history).enumerate() {
                    let plot_points: PlotPoints = points.iter().copied().collect();
                    plot_ui.line(
                        Line::new(plot_points)
                            .color(PALETTE[i % PALETTE.len()])
                            .name(label),
                    );
                }
            });
    }
}

impl<const N: usize> eframe::App for Animation<N> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.tick();

        egui::TopBottomPanel::top("clock").show(ctx, |ui| {
            ui.heading(format!("Time: {:.2} s", self.sim.time().get::<second>()));
            if let Some(err) = &self.error {
                ui.colored_label(Color32::RED, err.to_string());
            }
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.columns(2, |columns| {
                self.draw_tanks(&mut columns[0]);
                self.draw_history(&mut columns[1]);
            });
        });

        if !self.done {
            ctx.request_repaint();
        }
    }
}

fn to_plot_points(points: &[Point]) -> PlotPoints<'static> {
    points
        .iter()
        .map(|[x, y]| [x.get::<centimeter>(), y.get::<centimeter>()])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::PI;

    use approx::assert_relative_eq;
    use torricelli_core::{DrainConfig, Orientation};
    use uom::si::{
        acceleration::centimeter_per_second_squared,
        area::square_centimeter,
        f64::{Acceleration, Area, Time},
    };

    fn animation() -> Animation<2> {
        let cone = |orientation| {
            Cone::new(
                Length::new::<centimeter>(50.0),
                Length::new::<centimeter>(30.0),
                orientation,
            )
            .unwrap()
        };
        let params = DrainParameters::new(DrainConfig::new(
            Acceleration::new::<centimeter_per_second_squared>(980.0),
            Area::new::<square_centimeter>(PI * 0.25),
            Time::new::<second>(0.01),
            Length::new::<centimeter>(50.0),
        ))
        .unwrap();
        Animation::new(
            [cone(Orientation::Upright), cone(Orientation::Inverted)],
            ["Upright", "Inverted"],
            params,
        )
    }

    #[test]
    fn each_tick_adds_one_point_per_tank() {
        let mut animation = animation();
        assert_eq!(animation.history[0], [[0.0, 50.0]]);

        animation.tick();
        animation.tick();

        for trace in &animation.history {
            assert_eq!(trace.len(), 3);
            assert_relative_eq!(trace[2][0], 1.0, epsilon = 1e-9);
            assert!(trace[2][1] < trace[1][1]);
        }
    }

    #[test]
    fn runs_until_both_tanks_are_empty() {
        let mut animation = animation().steps_per_frame(500);
        while !animation.is_done() {
            animation.tick();
        }

        assert!(animation.error.is_none());
        for trace in &animation.history {
            assert_eq!(trace.last().unwrap()[1], 0.0);
        }
        let end = animation.history[0].last().unwrap()[0];
        assert_relative_eq!(end, 611.6, epsilon = 0.1);

        let points = animation.history[0].len();
        animation.tick();
        assert_eq!(animation.history[0].len(), points);
    }

    #[test]
    fn tanks_are_spread_about_the_origin() {
        let centers = animation().centers();

        assert_relative_eq!(centers[0].get::<centimeter>(), -36.0, epsilon = 1e-9);
        assert_relative_eq!(centers[1].get::<centimeter>(), 36.0, epsilon = 1e-9);
    }
}
