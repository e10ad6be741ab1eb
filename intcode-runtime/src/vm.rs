//! Intcode interpreter

use std::fmt;

use intcode_disassembler::{decode_at, format};
use intcode_loader::{load, ParseError};
use intcode_spec::{Instruction, Program, NOUN_ADDRESS, VERB_ADDRESS};
use tracing::{debug, trace};

use crate::error::{Fault, Result};
use crate::execute::{execute, Step};
use crate::io::IoQueues;
use crate::memory::Memory;
use crate::state::{ExecutionState, HaltCode, Status};

/// Interpreter configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterpreterConfig {
    /// Return `HasOutput` after every output instruction
    pub pause_on_output: bool,

    /// Log every instruction at trace level
    pub trace: bool,

    /// Memory may not grow to or past this many words; unbounded when `None`
    pub max_memory: Option<usize>,
}

impl InterpreterConfig {
    /// Default configuration with pausing enabled
    pub fn pausing() -> Self {
        Self {
            pause_on_output: true,
            ..Self::default()
        }
    }
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            pause_on_output: false,
            trace: false,
            max_memory: None,
        }
    }
}

/// A pausable Intcode machine
///
/// Owns its program image, working memory and I/O queues. Each instance is
/// independent, so several can run side by side or on separate threads.
#[derive(Debug, Clone)]
pub struct Interpreter {
    program: Program,
    memory: Memory,
    state: ExecutionState,
    io: IoQueues,
    status: Status,
    config: InterpreterConfig,
}

impl Interpreter {
    /// Create an interpreter ready to run `program`
    pub fn new(program: Program, config: InterpreterConfig) -> Self {
        debug!(
            words = program.len(),
            fingerprint = %program.fingerprint_hex(),
            pause_on_output = config.pause_on_output,
            "loaded program"
        );
        let memory = Memory::new(program.words(), config.max_memory);
        Self {
            program,
            memory,
            state: ExecutionState::default(),
            io: IoQueues::new(),
            status: Status::Ready,
            config,
        }
    }

    /// Parse program text and create an interpreter for it
    pub fn from_source(
        source: &str,
        pause_on_output: bool,
    ) -> std::result::Result<Self, ParseError> {
        let config = InterpreterConfig {
            pause_on_output,
            ..InterpreterConfig::default()
        };
        Ok(Self::new(load(source)?, config))
    }

    /// Restore the program image and clear registers and pending input
    ///
    /// Outputs already produced are kept until drained.
    pub fn initialize(&mut self) {
        self.memory.reset(self.program.words());
        self.state = ExecutionState::default();
        self.io.clear_inputs();
        self.status = Status::Ready;
    }

    /// Initialize, then patch the noun and verb addresses
    pub fn initialize_with(&mut self, noun: i64, verb: i64) -> Result<()> {
        self.initialize();
        self.memory.write(NOUN_ADDRESS as i64, noun)?;
        self.memory.write(VERB_ADDRESS as i64, verb)
    }

    /// Write a word directly, growing memory like a program write would
    pub fn set_memory(&mut self, address: i64, value: i64) -> Result<()> {
        self.memory.write(address, value)
    }

    /// Queue one input value
    pub fn set_input(&mut self, value: i64) {
        self.io.push_input(value);
    }

    /// Queue several input values in order
    pub fn extend_input<I: IntoIterator<Item = i64>>(&mut self, values: I) {
        self.io.extend_inputs(values);
    }

    /// Execute until the program pauses, halts or faults
    ///
    /// Once halted or faulted, further calls return the same code without
    /// executing anything.
    pub fn run(&mut self) -> HaltCode {
        match self.status {
            Status::Halted => return HaltCode::Halt,
            Status::Faulted(_) => return HaltCode::Error,
            _ => {}
        }

        self.status = Status::Running;
        loop {
            match self.step() {
                Ok(Step::Continue) => {}
                Ok(Step::Yield(code)) => {
                    self.status = if code.is_resumable() {
                        Status::Suspended(code)
                    } else {
                        Status::Halted
                    };
                    debug!(pc = self.state.pc, steps = self.state.steps, ?code, "run returned");
                    return code;
                }
                Err(cause) => {
                    let fault = Fault {
                        pc: self.state.pc,
                        last_op: self.state.last_op,
                        cause,
                    };
                    debug!(%fault, "faulted");
                    self.status = Status::Faulted(fault);
                    return HaltCode::Error;
                }
            }
        }
    }

    /// Like [`Interpreter::run`], with a fault reported as an error
    pub fn try_run(&mut self) -> std::result::Result<HaltCode, Fault> {
        let code = self.run();
        match &self.status {
            Status::Faulted(fault) => Err(fault.clone()),
            _ => Ok(code),
        }
    }

    fn step(&mut self) -> Result<Step> {
        let pc = self.state.pc;
        let word = self.memory.peek(pc);
        self.state.last_op = word;

        let instr = Instruction::decode(word)?;
        if self.config.trace {
            self.trace_instruction(pc, &instr);
        }

        let step = execute(
            &instr,
            &mut self.state,
            &mut self.memory,
            &mut self.io,
            self.config.pause_on_output,
        )?;
        if matches!(step, Step::Continue | Step::Yield(HaltCode::HasOutput)) {
            self.state.steps += 1;
        }
        Ok(step)
    }

    fn trace_instruction(&self, pc: usize, instr: &Instruction) {
        let rb = self.state.relative_base;
        match decode_at(self.memory.as_slice(), pc) {
            Ok(decoded) => trace!(pc, rb, "{}", format(&decoded)),
            Err(_) => trace!(pc, rb, word = instr.word, "{}", instr.opcode),
        }
    }

    /// Word at `address`, zero past the memory extent
    pub fn get(&self, address: usize) -> i64 {
        self.memory.peek(address)
    }

    /// Raw word of the most recently fetched instruction
    pub fn last_op(&self) -> i64 {
        self.state.last_op
    }

    pub fn pc(&self) -> usize {
        self.state.pc
    }

    pub fn relative_base(&self) -> i64 {
        self.state.relative_base
    }

    /// Instructions executed since the last initialization
    pub fn steps(&self) -> u64 {
        self.state.steps
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn is_halted(&self) -> bool {
        self.status == Status::Halted
    }

    /// The recorded fault, if the interpreter faulted
    pub fn fault(&self) -> Option<&Fault> {
        match &self.status {
            Status::Faulted(fault) => Some(fault),
            _ => None,
        }
    }

    /// Oldest undrained output
    pub fn pop_output(&mut self) -> Option<i64> {
        self.io.pop_output()
    }

    /// Drain all outputs in production order
    pub fn take_outputs(&mut self) -> Vec<i64> {
        self.io.take_outputs()
    }

    /// Undrained outputs, oldest first
    pub fn outputs(&self) -> impl Iterator<Item = i64> + '_ {
        self.io.outputs()
    }

    pub fn pending_inputs(&self) -> usize {
        self.io.pending_inputs()
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn config(&self) -> &InterpreterConfig {
        &self.config
    }
}

/// Memory dump with the word at the program counter marked `[v]`
///
/// A program counter past the memory extent is shown as a trailing
/// `... [pc=N]`.
impl fmt::Display for Interpreter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pc = self.state.pc;
        for (address, word) in self.memory.as_slice().iter().enumerate() {
            if address > 0 {
                f.write_str(",")?;
            }
            if address == pc {
                write!(f, "[{word}]")?;
            } else {
                write!(f, "{word}")?;
            }
        }
        if pc >= self.memory.len() {
            write!(f, " ... [pc={pc}]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RuntimeError;
    use intcode_spec::SpecError;

    fn interpreter(source: &str) -> Interpreter {
        Interpreter::from_source(source, false).unwrap()
    }

    #[test]
    fn test_config_default() {
        let config = InterpreterConfig::default();
        assert!(!config.pause_on_output);
        assert!(!config.trace);
        assert_eq!(config.max_memory, None);
        assert!(InterpreterConfig::pausing().pause_on_output);
    }

    #[test]
    fn test_new_is_ready() {
        let vm = interpreter("1,0,0,0,99");
        assert_eq!(vm.status(), &Status::Ready);
        assert_eq!(vm.pc(), 0);
        assert_eq!(vm.relative_base(), 0);
    }

    #[test]
    fn test_run_to_halt() {
        let mut vm = interpreter("1,9,10,3,2,3,11,0,99,30,40,50");
        assert_eq!(vm.run(), HaltCode::Halt);
        assert_eq!(vm.get(0), 3500);
        assert!(vm.is_halted());
        assert_eq!(vm.steps(), 2);
    }

    #[test]
    fn test_halted_run_is_idempotent() {
        let mut vm = interpreter("104,1,99");
        assert_eq!(vm.run(), HaltCode::Halt);
        assert_eq!(vm.run(), HaltCode::Halt);
        assert_eq!(vm.take_outputs(), vec![1]);
    }

    #[test]
    fn test_needs_input_then_resume() {
        let mut vm = interpreter("3,0,4,0,99");
        assert_eq!(vm.run(), HaltCode::NeedsInput);
        assert_eq!(vm.pc(), 0);
        assert_eq!(vm.status(), &Status::Suspended(HaltCode::NeedsInput));

        vm.set_input(42);
        assert_eq!(vm.run(), HaltCode::Halt);
        assert_eq!(vm.take_outputs(), vec![42]);
    }

    #[test]
    fn test_pause_on_output() {
        let mut vm = Interpreter::from_source("104,1,104,2,99", true).unwrap();
        assert_eq!(vm.run(), HaltCode::HasOutput);
        assert_eq!(vm.pop_output(), Some(1));
        assert_eq!(vm.run(), HaltCode::HasOutput);
        assert_eq!(vm.pop_output(), Some(2));
        assert_eq!(vm.run(), HaltCode::Halt);
        assert_eq!(vm.pop_output(), None);
    }

    #[test]
    fn test_invalid_opcode_faults() {
        let mut vm = interpreter("1101,1,1,7,42,99");
        assert_eq!(vm.run(), HaltCode::Error);
        let fault = vm.fault().unwrap();
        assert_eq!(fault.pc, 4);
        assert_eq!(fault.last_op, 42);
        assert!(fault.is_invalid_opcode());
        assert!(matches!(vm.status(), Status::Faulted(_)));
        assert_eq!(vm.run(), HaltCode::Error);
    }

    #[test]
    fn test_try_run_reports_fault() {
        let mut vm = interpreter("42");
        let fault = vm.try_run().unwrap_err();
        assert_eq!(fault.cause, RuntimeError::Spec(SpecError::InvalidOpcode(42)));
    }

    #[test]
    fn test_initialize_resets() {
        let mut vm = interpreter("3,0,109,7,99");
        vm.set_input(5);
        assert_eq!(vm.run(), HaltCode::Halt);
        assert_eq!(vm.get(0), 5);
        assert_eq!(vm.relative_base(), 7);

        vm.set_input(9);
        vm.initialize();
        assert_eq!(vm.get(0), 3);
        assert_eq!(vm.pc(), 0);
        assert_eq!(vm.relative_base(), 0);
        assert_eq!(vm.pending_inputs(), 0);
        assert_eq!(vm.status(), &Status::Ready);
    }

    #[test]
    fn test_initialize_with_noun_verb() {
        let mut vm = interpreter("1,0,0,0,99");
        vm.initialize_with(4, 4).unwrap();
        assert_eq!(vm.run(), HaltCode::Halt);
        assert_eq!(vm.get(0), 198);
    }

    #[test]
    fn test_set_memory() {
        let mut vm = interpreter("99");
        vm.set_memory(3, 7).unwrap();
        assert_eq!(vm.memory().as_slice(), &[99, 0, 0, 7]);
        assert!(vm.set_memory(-1, 7).is_err());
    }

    #[test]
    fn test_memory_ceiling_faults() {
        let config = InterpreterConfig {
            max_memory: Some(16),
            ..InterpreterConfig::default()
        };
        let mut vm = Interpreter::new(Program::new(vec![1101, 1, 1, 100, 99]), config);
        assert_eq!(vm.run(), HaltCode::Error);
        assert!(vm.fault().unwrap().is_invalid_address());
    }

    #[test]
    fn test_display_marks_pc() {
        let mut vm = interpreter("3,0,99");
        assert_eq!(vm.to_string(), "[3],0,99");
        vm.set_input(1);
        vm.run();
        assert_eq!(vm.to_string(), "1,0,[99]");
    }

    #[test]
    fn test_display_marks_pc_past_extent() {
        let mut vm = interpreter("1105,1,50");
        assert_eq!(vm.run(), HaltCode::Error);
        assert_eq!(vm.fault().unwrap().pc, 50);
        assert_eq!(vm.to_string(), "1105,1,50 ... [pc=50]");
    }

    #[test]
    fn test_trace_does_not_change_results() {
        let config = InterpreterConfig {
            trace: true,
            ..InterpreterConfig::default()
        };
        let mut vm = Interpreter::new(Program::new(vec![1002, 4, 3, 4, 33]), config);
        assert_eq!(vm.run(), HaltCode::Halt);
        assert_eq!(vm.get(4), 99);
    }

    #[test]
    fn test_interpreter_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<Interpreter>();
    }
}
