use std::fmt::Write;

use crate::system::engine::RateEngine;
use crate::system::error::TickError;
use crate::system::report::Report;
use crate::system::sampler::MetricSampler;

/// Text stand-in for the menu-bar UI: owns the engine, keeps the last good
/// report and renders it as a title plus menu lines.
pub struct Shell<S> {
    engine: RateEngine<S>,
    last_report: Option<Report>,
    last_error: Option<TickError>,
    title_symbol: String,
    max_name_width: usize,
    ticks: u64,
}

impl<S: MetricSampler> Shell<S> {
    pub fn new(engine: RateEngine<S>, title_symbol: impl Into<String>, max_name_width: usize) -> Self {
        Shell {
            engine,
            last_report: None,
            last_error: None,
            title_symbol: title_symbol.into(),
            max_name_width,
            ticks: 0,
        }
    }

    pub fn engine(&self) -> &RateEngine<S> {
        &self.engine
    }

    /// Run one tick. A failed tick leaves the previous report on display.
    pub fn on_tick(&mut self, elapsed_seconds: f64) -> Result<&Report, &TickError> {
        self.ticks += 1;
        match self.engine.tick(elapsed_seconds) {
            Ok(report) => {
                self.last_error = None;
                Ok(self.last_report.insert(report))
            }
            Err(err) => {
                tracing::warn!(tick = self.ticks, %err, "tick failed, keeping previous values");
                Err(self.last_error.insert(err))
            }
        }
    }

    pub fn last_report(&self) -> Option<&Report> {
        self.last_report.as_ref()
    }

    pub fn is_degraded(&self) -> bool {
        self.last_error.is_some()
    }

    pub fn title(&self) -> String {
        match &self.last_report {
            Some(report) => report.title(&self.title_symbol),
            None => self.title_symbol.clone(),
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.title());
        match &self.last_report {
            Some(report) => {
                for section in report.menu_sections(self.max_name_width) {
                    let _ = writeln!(out, "{}", section.heading);
                    for line in &section.lines {
                        let _ = writeln!(out, "  {line}");
                    }
                }
            }
            None => {
                let _ = writeln!(out, "  Waiting for first sample\u{2026}");
            }
        }
        if let Some(err) = &self.last_error {
            let _ = writeln!(out, "  (stale: {err})");
        }
        out
    }
}
