use sysinfo::{Disks, Networks, ProcessRefreshKind, ProcessStatus, ProcessesToUpdate, System};

use super::error::{ProbeError, SampleError};
use super::sampler::MetricSampler;
use super::snapshot::{Counters, ProcessProbe, ProcessSample, SystemSample};

/// [`MetricSampler`] backed by the `sysinfo` crate.
pub struct SysinfoSampler {
    sys: System,
    disks: Disks,
    networks: Networks,
}

impl Default for SysinfoSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl SysinfoSampler {
    pub fn new() -> Self {
        let mut sys = System::new();
        sys.refresh_memory();
        // CPU usage is computed between two refreshes; this is the first one.
        sys.refresh_cpu_all();
        sys.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing().with_memory().with_cpu(),
        );
        SysinfoSampler {
            sys,
            disks: Disks::new_with_refreshed_list(),
            networks: Networks::new_with_refreshed_list(),
        }
    }

    fn refresh(&mut self) {
        let _span = tracing::debug_span!("sampler.refresh").entered();

        self.sys.refresh_memory();
        self.sys.refresh_cpu_all();
        self.sys.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing().with_memory().with_cpu(),
        );
        self.disks.refresh(true);
        self.networks.refresh(true);
    }

    fn counters(&self) -> Result<Counters, SampleError> {
        if self.disks.list().is_empty() {
            return Err(SampleError::MetricUnavailable("disk I/O counters"));
        }
        if self.networks.is_empty() {
            return Err(SampleError::MetricUnavailable("network I/O counters"));
        }

        let mut counters = Counters::default();
        for disk in self.disks.list() {
            let usage = disk.usage();
            counters.disk_bytes_read = counters.disk_bytes_read.saturating_add(usage.total_read_bytes);
            counters.disk_bytes_written =
                counters.disk_bytes_written.saturating_add(usage.total_written_bytes);
        }
        for data in self.networks.values() {
            counters.net_bytes_recv = counters.net_bytes_recv.saturating_add(data.total_received());
            counters.net_bytes_sent = counters.net_bytes_sent.saturating_add(data.total_transmitted());
        }
        Ok(counters)
    }

    fn probe_processes(&self, total_memory: u64) -> Vec<ProcessProbe> {
        let mut processes: Vec<_> = self.sys.processes().iter().collect();
        // Enumerate in pid order so the scan's tie-break is reproducible.
        processes.sort_unstable_by_key(|(pid, _)| pid.as_u32());

        processes
            .into_iter()
            .map(|(pid, process)| {
                let pid = pid.as_u32();
                let name = process.name().to_string_lossy().to_string();
                let memory = process.memory();
                let cpu = process.cpu_usage();
                match classify(pid, process.status(), &name, memory, cpu) {
                    Some(reason) => ProcessProbe::Skipped(reason),
                    None => ProcessProbe::Ok(ProcessSample {
                        pid,
                        name,
                        cpu_percent: cpu,
                        memory_percent: percent_of(memory, total_memory),
                    }),
                }
            })
            .collect()
    }
}

/// Why a process cannot be scanned, if it cannot.
///
/// sysinfo has no per-process error: a process it may not inspect comes back
/// with an empty name, or with zero resident memory and zero CPU. Pid 0 is
/// the kernel and is exempt from the zero-usage rule.
fn classify(pid: u32, status: ProcessStatus, name: &str, memory: u64, cpu: f32) -> Option<ProbeError> {
    if matches!(status, ProcessStatus::Zombie | ProcessStatus::Dead) {
        return Some(ProbeError::Exited(pid));
    }
    if name.is_empty() || (pid != 0 && memory == 0 && cpu == 0.0) {
        return Some(ProbeError::AccessDenied(pid));
    }
    None
}

impl MetricSampler for SysinfoSampler {
    fn sample(&mut self) -> Result<SystemSample, SampleError> {
        self.refresh();

        let total_memory = self.sys.total_memory();
        if total_memory == 0 {
            return Err(SampleError::MetricUnavailable("memory statistics"));
        }
        if self.sys.cpus().is_empty() {
            return Err(SampleError::MetricUnavailable("CPU usage"));
        }
        let used_memory = self.sys.used_memory();

        Ok(SystemSample {
            cpu_percent: self.sys.global_cpu_usage(),
            memory_percent: percent_of(used_memory, total_memory),
            memory_available_bytes: self.sys.available_memory(),
            memory_used_bytes: used_memory,
            counters: self.counters()?,
            processes: self.probe_processes(total_memory),
        })
    }
}

fn percent_of(part: u64, total: u64) -> f32 {
    if total == 0 {
        return 0.0;
    }
    (part as f64 / total as f64 * 100.0) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_of_handles_zero_total() {
        assert_eq!(percent_of(10, 0), 0.0);
        assert!((percent_of(1, 4) - 25.0).abs() < f32::EPSILON);
    }

    #[test]
    fn zombies_and_dead_processes_have_exited() {
        assert_eq!(
            classify(42, ProcessStatus::Zombie, "defunct", 0, 0.0),
            Some(ProbeError::Exited(42))
        );
        assert_eq!(
            classify(43, ProcessStatus::Dead, "gone", 1024, 1.0),
            Some(ProbeError::Exited(43))
        );
    }

    #[test]
    fn uninspectable_processes_are_access_denied() {
        assert_eq!(
            classify(7, ProcessStatus::Run, "", 4096, 2.0),
            Some(ProbeError::AccessDenied(7))
        );
        // What sysinfo reports on macOS for another user's process.
        assert_eq!(
            classify(311, ProcessStatus::Sleep, "securityd", 0, 0.0),
            Some(ProbeError::AccessDenied(311))
        );
    }

    #[test]
    fn readable_processes_pass() {
        assert_eq!(classify(0, ProcessStatus::Run, "kernel_task", 0, 0.0), None);
        assert_eq!(classify(88, ProcessStatus::Sleep, "WindowServer", 0, 3.5), None);
        assert_eq!(classify(412, ProcessStatus::Sleep, "Safari", 1 << 20, 0.0), None);
    }

    #[test]
    fn live_sample_includes_current_process() {
        let mut sampler = SysinfoSampler::new();
        // Containers without disks or interfaces legitimately report unavailable.
        let Ok(sample) = sampler.sample() else {
            return;
        };
        assert!(sample.memory_percent >= 0.0 && sample.memory_percent <= 100.0);
        let pid = std::process::id();
        assert!(sample.processes.iter().any(|p| match p {
            ProcessProbe::Ok(s) => s.pid == pid,
            ProcessProbe::Skipped(_) => false,
        }));
    }
}
