//! Terminal plotting of simulation output.

pub mod ascii;

pub use ascii::render_ascii_plot;
