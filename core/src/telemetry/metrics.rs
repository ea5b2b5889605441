use std::sync::Mutex;

/// Counts calculations served and inputs rejected.
pub struct MetricsRecorder {
    inner: Mutex<Metrics>,
}

struct Metrics {
    calculations: usize,
    errors: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Metrics {
                calculations: 0,
                errors: 0,
            }),
        }
    }

    pub fn record_calculation(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.calculations += 1;
        }
    }

    pub fn record_error(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.errors += 1;
        }
    }

    /// `(calculations, errors)`
    pub fn snapshot(&self) -> (usize, usize) {
        if let Ok(metrics) = self.inner.lock() {
            (metrics.calculations, metrics.errors)
        } else {
            (0, 0)
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}
