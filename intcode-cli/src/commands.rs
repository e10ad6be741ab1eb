//! Subcommand implementations

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use intcode_disassembler::disassemble;
use intcode_runtime::{
    best_phase_setting, find_noun_verb, HaltCode, Interpreter, InterpreterConfig, PhaseMode,
};
use intcode_spec::Program;
use tracing::{debug, info};

use crate::RunArgs;

/// Read and parse a program file
pub fn read_program(path: &Path) -> Result<Program> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let program = intcode_loader::load(&text)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    debug!(path = %path.display(), words = program.len(), "loaded program file");
    Ok(program)
}

pub fn run(args: RunArgs) -> Result<()> {
    let program = read_program(&args.file)?;
    let config = InterpreterConfig {
        pause_on_output: args.pause,
        trace: args.trace,
        max_memory: args.max_memory,
    };
    let mut vm = Interpreter::new(program, config);

    if let (Some(noun), Some(verb)) = (args.noun, args.verb) {
        vm.initialize_with(noun, verb)
            .context("failed to patch noun and verb")?;
    }
    vm.extend_input(args.inputs.iter().copied());

    let session = Session {
        interactive: args.interactive,
        ascii: args.ascii,
        show_result: args.noun.is_some(),
    };
    drive(
        &mut vm,
        &session,
        io::stdin().lock(),
        io::stdout().lock(),
        io::stderr().lock(),
    )
}

/// Terminal behaviour of the run loop
#[derive(Debug, Clone, Copy, Default)]
struct Session {
    /// Prompt for input instead of failing when the program starves
    interactive: bool,
    /// Render outputs and read input lines as text
    ascii: bool,
    /// Print address 0 once the program halts
    show_result: bool,
}

/// Run `vm` to completion, printing outputs to `out` and feeding it lines
/// from `input`; prompts and fault reports go to `diag`
fn drive(
    vm: &mut Interpreter,
    session: &Session,
    input: impl BufRead,
    mut out: impl Write,
    mut diag: impl Write,
) -> Result<()> {
    let mut lines = input.lines();

    loop {
        let code = vm.run();
        for value in vm.take_outputs() {
            write_output(&mut out, value, session.ascii)?;
        }
        out.flush()?;

        match code {
            HaltCode::HasOutput => {}
            HaltCode::NeedsInput => {
                if !session.interactive {
                    bail!(
                        "program needs input at pc {}; pass more -i values or use --interactive",
                        vm.pc()
                    );
                }
                write!(diag, "> ")?;
                diag.flush()?;
                let Some(line) = lines.next().transpose()? else {
                    bail!("input closed while the program was waiting at pc {}", vm.pc());
                };
                vm.extend_input(parse_input_line(&line, session.ascii)?);
            }
            HaltCode::Halt => {
                if session.ascii {
                    writeln!(out)?;
                }
                if session.show_result {
                    writeln!(out, "address 0: {}", vm.get(0))?;
                }
                info!(steps = vm.steps(), "program halted");
                return Ok(());
            }
            HaltCode::Error => {
                if let Some(fault) = vm.fault() {
                    writeln!(diag, "{fault}")?;
                }
                writeln!(diag, "{vm}")?;
                bail!("program faulted after {} steps", vm.steps());
            }
        }
    }
}

/// Write one output value, as a character when `ascii` and it is one
fn write_output(out: &mut impl Write, value: i64, ascii: bool) -> io::Result<()> {
    match u8::try_from(value) {
        Ok(byte) if ascii && byte.is_ascii() => write!(out, "{}", byte as char),
        _ => writeln!(out, "{value}"),
    }
}

/// Input values for one line typed at the prompt
fn parse_input_line(line: &str, ascii: bool) -> Result<Vec<i64>> {
    if ascii {
        return Ok(line.bytes().chain([b'\n']).map(i64::from).collect());
    }
    let value = line
        .trim()
        .parse::<i64>()
        .with_context(|| format!("'{}' is not an integer", line.trim()))?;
    Ok(vec![value])
}

pub fn disasm(path: &Path) -> Result<()> {
    let program = read_program(path)?;
    print!("{}", disassemble(&program));
    Ok(())
}

pub fn amplify(path: &Path, feedback: bool, phases: Option<Vec<i64>>) -> Result<()> {
    let program = read_program(path)?;
    let (mode, default_phases) = if feedback {
        (PhaseMode::Feedback, 5..=9)
    } else {
        (PhaseMode::Serial, 0..=4)
    };
    let phases = phases.unwrap_or_else(|| default_phases.collect());

    let (best, signal) = best_phase_setting(&program, &phases, mode)?;
    let setting: Vec<String> = best.iter().map(i64::to_string).collect();
    println!("phases {} -> signal {}", setting.join(","), signal);
    Ok(())
}

pub fn noun_verb(path: &Path, target: i64, max: i64) -> Result<()> {
    let program = read_program(path)?;
    match find_noun_verb(&program, target, max) {
        Some((noun, verb)) => {
            println!("noun {noun}, verb {verb} (answer {})", 100 * noun + verb);
            Ok(())
        }
        None => bail!("no noun and verb in 0..={max} produce {target}"),
    }
}

pub fn info(path: &Path) -> Result<()> {
    let program = read_program(path)?;
    println!("words:  {}", program.len());
    println!("sha256: {}", program.fingerprint_hex());
    Ok(())
}
