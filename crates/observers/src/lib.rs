//! Observers and presentation for Torricelli drain runs.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the single-tank and lockstep solvers, plus the pieces needed to
//! draw a run.
//!
//! # Modules
//!
//! - [`traits`]: capability traits for cross-solver observers
//!   ([`HasTime`], [`HasHeights`], [`CanStopEarly`])
//! - [`glyph`]: outline polygons for drawing conical tanks
//!
//! # Features
//!
//! - `plot`: enables [`PlotObserver`] and [`Animation`] for visualizing runs
//!   via egui. This feature adds dependencies on `eframe` and `egui_plot`.
//!
//! [`Observer`]: torricelli_core::Observer
//! [`HasTime`]: traits::HasTime
//! [`HasHeights`]: traits::HasHeights
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod glyph;
mod stop;
mod summary;
pub mod traits;

pub use stop::StopAfter;
pub use summary::DrainSummary;

#[cfg(feature = "plot")]
mod animate;
#[cfg(feature = "plot")]
mod plot;

#[cfg(feature = "plot")]
pub use animate::Animation;
#[cfg(feature = "plot")]
pub use plot::{PlotObserver, Plottable, ShowConfig};
