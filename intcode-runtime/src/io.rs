//! Input and output queues

use std::collections::VecDeque;

#[derive(Debug, Clone, Default)]
pub struct IoQueues {
    inputs: VecDeque<i64>,
    outputs: VecDeque<i64>,
}

impl IoQueues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_input(&mut self, value: i64) {
        self.inputs.push_back(value);
    }

    pub fn extend_inputs<I: IntoIterator<Item = i64>>(&mut self, values: I) {
        self.inputs.extend(values);
    }

    pub fn read(&mut self) -> Option<i64> {
        self.inputs.pop_front()
    }

    pub fn pending_inputs(&self) -> usize {
        self.inputs.len()
    }

    pub fn clear_inputs(&mut self) {
        self.inputs.clear();
    }

    pub fn write(&mut self, value: i64) {
        self.outputs.push_back(value);
    }

    /// Oldest unread output
    pub fn pop_output(&mut self) -> Option<i64> {
        self.outputs.pop_front()
    }

    pub fn outputs(&self) -> impl Iterator<Item = i64> + '_ {
        self.outputs.iter().copied()
    }

    pub fn take_outputs(&mut self) -> Vec<i64> {
        self.outputs.drain(..).collect()
    }
}
