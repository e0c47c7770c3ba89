#[cfg(feature = "cli")]
use std::sync::Mutex;
#[cfg(feature = "cli")]
use std::time::Instant;
#[cfg(feature = "cli")]
use sysinfo::System;

/// Logs process stats at batch phase boundaries. Each checkpoint reports the
/// time spent since the previous one plus current and peak memory, so slow
/// phases stand out in long tenant migrations.
#[cfg(feature = "cli")]
pub struct SystemMonitor {
    inner: Option<Mutex<MonitorState>>,
}

#[cfg(feature = "cli")]
struct MonitorState {
    system: System,
    started: Instant,
    last_checkpoint: Instant,
    peak_memory_mb: u64,
}

#[cfg(feature = "cli")]
impl SystemMonitor {
    pub fn new(enabled: bool) -> Self {
        let inner = enabled.then(|| {
            let now = Instant::now();
            Mutex::new(MonitorState {
                system: System::new_all(),
                started: now,
                last_checkpoint: now,
                peak_memory_mb: 0,
            })
        });
        Self { inner }
    }

    pub fn log_stats(&self, phase: &str) {
        let Some(inner) = &self.inner else {
            return;
        };
        let Ok(mut state) = inner.lock() else {
            return;
        };

        state.system.refresh_all();
        let pid = match sysinfo::get_current_pid() {
            Ok(pid) => pid,
            Err(_) => return,
        };
        let Some(process) = state.system.process(pid) else {
            return;
        };

        let memory_mb = process.memory() / 1024 / 1024;
        state.peak_memory_mb = state.peak_memory_mb.max(memory_mb);

        let now = Instant::now();
        tracing::info!(
            "📊 {} took {:?} (total {:?}) - Memory: {}MB, Peak: {}MB",
            phase,
            now.duration_since(state.last_checkpoint),
            now.duration_since(state.started),
            memory_mb,
            state.peak_memory_mb
        );
        state.last_checkpoint = now;
    }

    pub fn is_enabled(&self) -> bool {
        self.inner.is_some()
    }
}

// Empty implementation when built without the CLI feature
#[cfg(not(feature = "cli"))]
pub struct SystemMonitor;

#[cfg(not(feature = "cli"))]
impl SystemMonitor {
    pub fn new(_enabled: bool) -> Self {
        Self
    }

    pub fn log_stats(&self, _phase: &str) {}

    pub fn is_enabled(&self) -> bool {
        false
    }
}
