//! Simulator Run Loop Tests.

use pipesim_core::config::{Config, GeneralConfig, MemoryConfig};
use pipesim_core::sim::loader::{Program, parse_program};
use pipesim_core::{SimError, Simulator};

use crate::common::builder::instruction::{add, beq, halt, lw, noop};

fn program(words: &[u32]) -> Program {
    Program::from_words(words.to_vec())
}

#[test]
fn test_run_simple_program() {
    let mut sim = Simulator::new(
        &program(&[add(0, 1, 2), noop(), noop(), noop(), halt()]),
        &Config::default(),
    )
    .unwrap();

    assert_eq!(sim.run().unwrap(), 9);
    assert!(sim.is_halted());
    assert_eq!(sim.stats.cycles, 9);
}

#[test]
fn test_run_with_sees_every_cycle_start() {
    let mut sim = Simulator::new(
        &program(&[add(0, 1, 2), noop(), noop(), noop(), halt()]),
        &Config::default(),
    )
    .unwrap();
    let mut seen = Vec::new();

    let cycles = sim.run_with(|cpu| seen.push(cpu.cycles)).unwrap();

    assert_eq!(cycles, 9);
    assert_eq!(seen, (0..9).collect::<Vec<_>>());
}

#[test]
fn test_from_parsed_text() {
    let text = "00810003\n00090001\n01800000\n00000005\n";
    let mut sim = Simulator::new(&parse_program(text).unwrap(), &Config::default()).unwrap();

    assert_eq!(sim.run().unwrap(), 8);
    assert_eq!(sim.cpu.regs.read(1), 10);
}

#[test]
fn test_infinite_loop_hits_cycle_limit() {
    let config = Config {
        general: GeneralConfig {
            trace: false,
            max_cycles: Some(50),
        },
        ..Config::default()
    };
    let mut sim = Simulator::new(&program(&[beq(0, 0, -1), halt()]), &config).unwrap();

    let err = sim.run().unwrap_err();

    assert!(matches!(err, SimError::CycleLimit { limit: 50, .. }), "{err:?}");
    assert_eq!(sim.cpu.cycles, 50);
}

#[test]
fn test_program_larger_than_memory() {
    let config = Config {
        memory: MemoryConfig { size: 1 },
        ..Config::default()
    };
    let err = Simulator::new(&program(&[noop(), halt()]), &config).unwrap_err();
    assert!(matches!(err, SimError::Load(_)), "{err:?}");
}

#[test]
fn test_invalid_config_rejected() {
    let config = Config {
        memory: MemoryConfig { size: 0 },
        ..Config::default()
    };
    let err = Simulator::new(&program(&[halt()]), &config).unwrap_err();
    assert!(matches!(err, SimError::InvalidConfig(_)), "{err:?}");
}

#[test]
fn test_tick_reports_stall() {
    let mut sim = Simulator::new(
        &program(&[lw(0, 1, 3), add(1, 1, 1), halt(), 5]),
        &Config::default(),
    )
    .unwrap();

    let stalls: Vec<bool> = (0..4).map(|_| sim.tick().stall).collect();

    assert_eq!(stalls, [false, false, true, false]);
}
