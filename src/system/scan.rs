use super::error::{TickError, TickResult};
use super::snapshot::{ProcessProbe, ProcessSample, TopProcess};

/// Result of reducing the process table to its top consumers.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessScan {
    pub process_count: usize,
    pub skipped: usize,
    pub top_cpu: TopProcess,
    pub top_mem: TopProcess,
}

#[derive(Default)]
struct Maxima<'a> {
    cpu: Option<&'a ProcessSample>,
    mem: Option<&'a ProcessSample>,
}

impl<'a> Maxima<'a> {
    // Replace on `>=`: the last process at the maximum wins a tie.
    fn observe(&mut self, sample: &'a ProcessSample) {
        if self.cpu.is_none_or(|best| sample.cpu_percent >= best.cpu_percent) {
            self.cpu = Some(sample);
        }
        if self.mem.is_none_or(|best| sample.memory_percent >= best.memory_percent) {
            self.mem = Some(sample);
        }
    }
}

/// Single left-to-right pass over the probes, skipping processes that
/// exited or denied access. CPU and memory maxima are tracked independently.
pub fn scan_processes(probes: &[ProcessProbe]) -> TickResult<ProcessScan> {
    let mut maxima = Maxima::default();
    let mut skipped = 0;

    for probe in probes {
        match probe {
            ProcessProbe::Ok(sample) => maxima.observe(sample),
            ProcessProbe::Skipped(reason) => {
                tracing::trace!(%reason, "skipping process");
                skipped += 1;
            }
        }
    }

    match (maxima.cpu, maxima.mem) {
        (Some(cpu), Some(mem)) => Ok(ProcessScan {
            process_count: probes.len(),
            skipped,
            top_cpu: TopProcess {
                name: cpu.name.clone(),
                percent: cpu.cpu_percent,
            },
            top_mem: TopProcess {
                name: mem.name.clone(),
                percent: mem.memory_percent,
            },
        }),
        _ => Err(TickError::NoProcessData {
            enumerated: probes.len(),
            skipped,
        }),
    }
}
