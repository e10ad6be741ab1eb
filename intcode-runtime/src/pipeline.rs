//! Amplifier pipelines
//!
//! A pipeline chains one pausing interpreter per phase setting: every stage
//! receives its phase as the first input, then the signal produced by the
//! stage before it. In feedback mode the last stage feeds the first until the
//! last stage halts.

use intcode_spec::Program;
use thiserror::Error;
use tracing::debug;

use crate::error::Fault;
use crate::state::HaltCode;
use crate::vm::{Interpreter, InterpreterConfig};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    #[error("Pipeline has no stages")]
    NoStages,

    #[error("Stage {stage} faulted: {fault}")]
    Fault {
        stage: usize,
        #[source]
        fault: Fault,
    },

    #[error("Stage {stage} is waiting for input that will never arrive")]
    Stalled { stage: usize },

    #[error("Stage {stage} halted without producing a signal")]
    NoOutput { stage: usize },
}

pub type Result<T> = std::result::Result<T, PipelineError>;

/// How signals flow between stages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhaseMode {
    /// Each stage runs once, in order
    #[default]
    Serial,
    /// The last stage feeds the first until it halts
    Feedback,
}

#[derive(Debug, Clone)]
pub struct Pipeline {
    stages: Vec<Interpreter>,
}

impl Pipeline {
    /// One stage per phase, each with its phase queued
    pub fn new(program: &Program, phases: &[i64]) -> Result<Self> {
        if phases.is_empty() {
            return Err(PipelineError::NoStages);
        }

        let stages = phases
            .iter()
            .map(|&phase| {
                let mut stage = Interpreter::new(program.clone(), InterpreterConfig::pausing());
                stage.set_input(phase);
                stage
            })
            .collect();

        Ok(Self { stages })
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn stages(&self) -> &[Interpreter] {
        &self.stages
    }

    /// Pass `signal` through every stage once
    pub fn run_serial(&mut self, signal: i64) -> Result<i64> {
        let mut signal = signal;
        for (stage, amp) in self.stages.iter_mut().enumerate() {
            amp.set_input(signal);
            signal = match resume(stage, amp)? {
                HaltCode::HasOutput | HaltCode::Halt => amp.pop_output(),
                _ => None,
            }
            .ok_or(PipelineError::NoOutput { stage })?;
        }
        Ok(signal)
    }

    /// Loop `signal` through the stages until the last one halts
    pub fn run_feedback(&mut self, signal: i64) -> Result<i64> {
        let last = self.stages.len() - 1;
        let mut signal = signal;
        let mut round = 0u64;

        loop {
            for (stage, amp) in self.stages.iter_mut().enumerate() {
                if amp.is_halted() {
                    if stage == last {
                        return Ok(signal);
                    }
                    continue;
                }

                amp.set_input(signal);
                let code = resume(stage, amp)?;
                if let Some(output) = amp.pop_output() {
                    signal = output;
                }
                if code == HaltCode::Halt && stage == last {
                    debug!(rounds = round + 1, signal, "feedback loop finished");
                    return Ok(signal);
                }
            }
            round += 1;
        }
    }
}

/// Run a stage until it produces output or halts
fn resume(stage: usize, amp: &mut Interpreter) -> Result<HaltCode> {
    match amp.try_run() {
        Ok(HaltCode::NeedsInput) => Err(PipelineError::Stalled { stage }),
        Ok(code) => Ok(code),
        Err(fault) => Err(PipelineError::Fault { stage, fault }),
    }
}

/// Try every ordering of `phases` and return the one producing the highest
/// signal from an initial signal of zero
///
/// Orderings are tried in lexicographic order; on ties the first wins.
pub fn best_phase_setting(
    program: &Program,
    phases: &[i64],
    mode: PhaseMode,
) -> Result<(Vec<i64>, i64)> {
    if phases.is_empty() {
        return Err(PipelineError::NoStages);
    }

    let mut order = phases.to_vec();
    order.sort_unstable();

    let mut best: Option<(Vec<i64>, i64)> = None;
    loop {
        let mut pipeline = Pipeline::new(program, &order)?;
        let signal = match mode {
            PhaseMode::Serial => pipeline.run_serial(0)?,
            PhaseMode::Feedback => pipeline.run_feedback(0)?,
        };
        if best.as_ref().map_or(true, |(_, high)| signal > *high) {
            best = Some((order.clone(), signal));
        }

        if !next_permutation(&mut order) {
            break;
        }
    }

    best.ok_or(PipelineError::NoStages)
}

/// Advance to the next lexicographic permutation, false after the last
fn next_permutation(values: &mut [i64]) -> bool {
    let Some(pivot) = values.windows(2).rposition(|pair| pair[0] < pair[1]) else {
        return false;
    };
    let Some(swap) = values.iter().rposition(|&v| v > values[pivot]) else {
        return false;
    };
    values.swap(pivot, swap);
    values[pivot + 1..].reverse();
    true
}
