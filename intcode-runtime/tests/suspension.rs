//! Suspension and resumption

use intcode_runtime::{HaltCode, Interpreter, Status};
use proptest::prelude::*;

/// Echo every input until a zero arrives
const ECHO: &str = "3,100,4,100,1005,100,0,99";

#[test]
fn test_needs_input_keeps_state() {
    let mut vm = Interpreter::from_source(ECHO, false).unwrap();
    assert_eq!(vm.run(), HaltCode::NeedsInput);
    let dump = vm.to_string();
    let pc = vm.pc();

    assert_eq!(vm.run(), HaltCode::NeedsInput);
    assert_eq!(vm.pc(), pc);
    assert_eq!(vm.to_string(), dump);
}

#[test]
fn test_resume_after_each_input() {
    let mut vm = Interpreter::from_source(ECHO, false).unwrap();
    for value in [5, -3, 12] {
        assert_eq!(vm.run(), HaltCode::NeedsInput);
        vm.set_input(value);
    }
    assert_eq!(vm.run(), HaltCode::NeedsInput);
    assert_eq!(vm.take_outputs(), vec![5, -3, 12]);

    vm.set_input(0);
    assert_eq!(vm.run(), HaltCode::Halt);
    assert_eq!(vm.take_outputs(), vec![0]);
    assert_eq!(vm.status(), &Status::Halted);
}

#[test]
fn test_pause_on_every_output() {
    let mut vm = Interpreter::from_source(ECHO, true).unwrap();
    vm.extend_input([1, 2, 0]);
    let mut seen = Vec::new();
    loop {
        match vm.run() {
            HaltCode::HasOutput => seen.push(vm.pop_output().unwrap()),
            HaltCode::Halt => break,
            other => panic!("unexpected {other:?}"),
        }
    }
    assert_eq!(seen, vec![1, 2, 0]);
}

#[test]
fn test_outputs_survive_initialize() {
    let mut vm = Interpreter::from_source("104,7,99", false).unwrap();
    vm.run();
    vm.initialize();
    assert_eq!(vm.outputs().collect::<Vec<_>>(), vec![7]);
    assert_eq!(vm.run(), HaltCode::Halt);
    assert_eq!(vm.take_outputs(), vec![7, 7]);
}

#[test]
fn test_instances_are_independent() {
    let mut a = Interpreter::from_source(ECHO, false).unwrap();
    let mut b = a.clone();
    a.set_input(9);
    a.run();
    assert_eq!(a.take_outputs(), vec![9]);
    assert_eq!(b.run(), HaltCode::NeedsInput);
    assert!(b.outputs().next().is_none());
}

#[test]
fn test_instances_run_on_threads() {
    let handles: Vec<_> = (1..=4)
        .map(|n| {
            std::thread::spawn(move || {
                let mut vm = Interpreter::from_source(ECHO, false).unwrap();
                vm.extend_input([n, 0]);
                vm.run();
                vm.take_outputs()
            })
        })
        .collect();

    for (n, handle) in (1..=4).zip(handles) {
        assert_eq!(handle.join().unwrap(), vec![n, 0]);
    }
}

proptest! {
    #[test]
    fn test_feeding_all_at_once_equals_one_by_one(
        values in prop::collection::vec(1i64..1000, 0..20)
    ) {
        let mut batch = Interpreter::from_source(ECHO, false).unwrap();
        batch.extend_input(values.iter().copied().chain([0]));
        prop_assert_eq!(batch.run(), HaltCode::Halt);

        let mut drip = Interpreter::from_source(ECHO, false).unwrap();
        for &value in values.iter().chain([0].iter()) {
            prop_assert_eq!(drip.run(), HaltCode::NeedsInput);
            drip.set_input(value);
        }
        prop_assert_eq!(drip.run(), HaltCode::Halt);

        prop_assert_eq!(batch.take_outputs(), drip.take_outputs());
    }
}
