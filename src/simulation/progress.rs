/// Optional progress reporting over a fixed number of rounds.
///
/// Backed by an `indicatif` bar when the `progress` feature is compiled in.
/// Without it, asking for a bar logs one warning and every call is a no-op.
/// Either way it only observes the loop, never drives it.
pub struct Progress {
    #[cfg(feature = "progress")]
    bar: Option<indicatif::ProgressBar>,
}

impl Progress {
    #[cfg(feature = "progress")]
    pub fn new(total: usize, enabled: bool) -> Self {
        Self {
            bar: enabled.then(|| crate::progress(total)),
        }
    }
    #[cfg(not(feature = "progress"))]
    pub fn new(total: usize, enabled: bool) -> Self {
        if enabled {
            log::warn!("progress feature not compiled in, running {} rounds without a progress bar", total);
        }
        Self {}
    }

    /// Whether a bar is actually drawing.
    pub fn visible(&self) -> bool {
        #[cfg(feature = "progress")]
        return self.bar.is_some();
        #[cfg(not(feature = "progress"))]
        return false;
    }

    pub fn tick(&self) {
        #[cfg(feature = "progress")]
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    pub fn finish(self) {
        #[cfg(feature = "progress")]
        if let Some(bar) = self.bar {
            bar.finish();
        }
    }
}
