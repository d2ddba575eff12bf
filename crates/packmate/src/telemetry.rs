use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use packmate_common::BuildSummary;
use packmate_utils::format_time::format_time;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::report::render_report;

type SharedSink = Arc<Mutex<Box<dyn Write + Send>>>;

/// Watch-mode idle clock and operator-facing progress indicator.
///
/// While the build sits idle a tick task rewrites the current line once per
/// second with the elapsed stamp. A starting build stops the clock and shows
/// a building indicator; a finished build writes the final stamp and
/// restarts the clock from zero. Outside watch mode no tick task ever runs,
/// and report rendering is the only thing the logger does.
///
/// `attach` and `on_done` spawn the tick task and therefore need a tokio
/// runtime when watch mode is on. The reference instant and the sink are
/// shared with the tick task behind mutexes, so tick writes serialize
/// against lifecycle writes.
pub struct TelemetryLogger {
  watch: bool,
  reference: Arc<Mutex<Instant>>,
  sink: SharedSink,
  tick: Option<JoinHandle<()>>,
}

impl TelemetryLogger {
  pub fn new(watch: bool) -> Self {
    Self::with_sink(watch, Box::new(io::stderr()))
  }

  pub fn with_sink(watch: bool, sink: Box<dyn Write + Send>) -> Self {
    Self {
      watch,
      reference: Arc::new(Mutex::new(Instant::now())),
      sink: Arc::new(Mutex::new(sink)),
      tick: None,
    }
  }

  /// Brings up the idle clock. A no-op outside watch mode.
  pub fn attach(&mut self) {
    if self.watch {
      self.start_timer();
    }
  }

  /// Build cycle starting: stop the clock, show the building indicator.
  pub fn on_compile(&mut self) {
    if !self.watch {
      return;
    }
    self.stop_timer();
    write_line(&self.sink, "\r ...  ");
  }

  /// Build cycle finished: write the final stamp, reset the reference
  /// instant and restart the clock.
  pub fn on_done(&mut self) {
    if !self.watch {
      return;
    }
    let stamp = self.stamp();
    write_line(&self.sink, &format!("\r{stamp} "));
    *self.reference.lock().expect("timer reference poisoned") = Instant::now();
    self.start_timer();
  }

  /// Elapsed time since the reference instant, in `MM:SS` form.
  pub fn stamp(&self) -> String {
    format_time(elapsed_ms(&self.reference))
  }

  /// Formatted report for a finished build. No side effects.
  pub fn render_report(&self, summary: &BuildSummary) -> String {
    render_report(&self.stamp(), summary)
  }

  fn start_timer(&mut self) {
    let reference = Arc::clone(&self.reference);
    let sink = Arc::clone(&self.sink);
    self.tick = Some(tokio::spawn(async move {
      let mut interval = time::interval(Duration::from_secs(1));
      interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
      // the first tick of an interval resolves immediately
      interval.tick().await;
      loop {
        interval.tick().await;
        let stamp = format_time(elapsed_ms(&reference));
        write_line(&sink, &format!("\r{stamp} "));
      }
    }));
  }

  fn stop_timer(&mut self) {
    if let Some(tick) = self.tick.take() {
      tick.abort();
    }
  }

  /// Stops the clock for good. Also runs on drop, so the periodic task can
  /// never outlive the logger.
  pub fn shutdown(&mut self) {
    self.stop_timer();
  }
}

impl Drop for TelemetryLogger {
  fn drop(&mut self) {
    self.stop_timer();
  }
}

fn elapsed_ms(reference: &Mutex<Instant>) -> u64 {
  let reference = reference.lock().expect("timer reference poisoned");
  u64::try_from(reference.elapsed().as_millis()).unwrap_or(u64::MAX)
}

// Writes are fire-and-forget; a broken operator stream must not fail a build.
fn write_line(sink: &Mutex<Box<dyn Write + Send>>, line: &str) {
  let mut sink = sink.lock().expect("operator sink poisoned");
  let _ = sink.write_all(line.as_bytes());
  let _ = sink.flush();
}
