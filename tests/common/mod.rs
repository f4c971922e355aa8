//! Recording pins and a virtual clock for sequencing tests.
//!
//! Every pin write is logged with the virtual time at which it happened, so
//! tests can check ordering across lines and measure pulse timing exactly.
#![allow(dead_code)]

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, ErrorKind, ErrorType, OutputPin};

use stepper_sequence::config::ActiveLevel;
use stepper_sequence::{AxisDriver, AxisDriverBuilder, AxisConfig};

/// One pin write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub at_ns: u64,
    pub line: &'static str,
    pub high: bool,
}

#[derive(Default)]
struct Log {
    now_ns: u64,
    events: Vec<Event>,
}

/// Shared clock and event log.
#[derive(Clone, Default)]
pub struct Bench {
    log: Rc<RefCell<Log>>,
}

impl Bench {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pin(&self, line: &'static str) -> RecordingPin {
        RecordingPin {
            line,
            log: self.log.clone(),
        }
    }

    /// A pin whose `fail_on`-th write (0-based) and every later write fail.
    pub fn faulty_pin(&self, line: &'static str, fail_on: usize) -> FaultyPin {
        FaultyPin {
            inner: self.pin(line),
            writes: 0,
            fail_on,
        }
    }

    pub fn delay(&self) -> VirtualDelay {
        VirtualDelay {
            log: self.log.clone(),
        }
    }

    pub fn now_ns(&self) -> u64 {
        self.log.borrow().now_ns
    }

    pub fn events(&self) -> Vec<Event> {
        self.log.borrow().events.clone()
    }

    pub fn events_on(&self, line: &str) -> Vec<Event> {
        self.log
            .borrow()
            .events
            .iter()
            .filter(|e| e.line == line)
            .copied()
            .collect()
    }

    /// Forget recorded events, keeping the clock.
    pub fn clear(&self) {
        self.log.borrow_mut().events.clear();
    }

    fn record(log: &Rc<RefCell<Log>>, line: &'static str, high: bool) {
        let mut log = log.borrow_mut();
        let at_ns = log.now_ns;
        log.events.push(Event { at_ns, line, high });
    }
}

/// Output pin that logs every write.
pub struct RecordingPin {
    line: &'static str,
    log: Rc<RefCell<Log>>,
}

impl ErrorType for RecordingPin {
    type Error = Infallible;
}

impl OutputPin for RecordingPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Bench::record(&self.log, self.line, false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Bench::record(&self.log, self.line, true);
        Ok(())
    }
}

#[derive(Debug)]
pub struct PinFault;

impl digital::Error for PinFault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Recording pin that starts failing after a number of writes.
pub struct FaultyPin {
    inner: RecordingPin,
    writes: usize,
    fail_on: usize,
}

impl FaultyPin {
    fn write(&mut self, high: bool) -> Result<(), PinFault> {
        let n = self.writes;
        self.writes += 1;
        if n >= self.fail_on {
            return Err(PinFault);
        }
        Bench::record(&self.inner.log, self.inner.line, high);
        Ok(())
    }
}

impl ErrorType for FaultyPin {
    type Error = PinFault;
}

impl OutputPin for FaultyPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.write(false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.write(true)
    }
}

/// Delay that advances the virtual clock instead of sleeping.
pub struct VirtualDelay {
    log: Rc<RefCell<Log>>,
}

impl DelayNs for VirtualDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.borrow_mut().now_ns += ns as u64;
    }

    fn delay_us(&mut self, us: u32) {
        self.log.borrow_mut().now_ns += us as u64 * 1_000;
    }

    fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().now_ns += ms as u64 * 1_000_000;
    }
}

pub type BenchAxis = AxisDriver<RecordingPin, RecordingPin, RecordingPin, VirtualDelay>;

/// Build an axis whose lines are named `<prefix>.step`, `<prefix>.dir`, `<prefix>.en`.
pub fn bench_axis(bench: &Bench, config: &AxisConfig, lines: [&'static str; 3]) -> BenchAxis {
    AxisDriverBuilder::new()
        .from_axis_config(config)
        .step_pin(bench.pin(lines[0]))
        .dir_pin(bench.pin(lines[1]))
        .enable_pin(bench.pin(lines[2]))
        .delay(bench.delay())
        .build()
        .expect("bench axis should build")
}

/// Level of `line` interpreted through `active`: `true` when asserted.
pub fn asserted(event: &Event, active: ActiveLevel) -> bool {
    event.high == active.asserted_level()
}

/// Step pulses found in `events`: (rise time, high duration, low duration).
///
/// The low duration runs from the falling edge to the next event on any line.
pub fn step_pulses(events: &[Event], step_line: &str) -> Vec<(u64, u64, u64)> {
    let mut pulses = Vec::new();
    for (i, event) in events.iter().enumerate() {
        if event.line != step_line || !event.high {
            continue;
        }
        let fall_idx = events[i + 1..]
            .iter()
            .position(|e| e.line == step_line && !e.high)
            .map(|p| p + i + 1)
            .expect("every rising edge has a falling edge");
        let fall = events[fall_idx];
        let next = events
            .get(fall_idx + 1)
            .map(|e| e.at_ns)
            .unwrap_or(fall.at_ns);
        pulses.push((event.at_ns, fall.at_ns - event.at_ns, next - fall.at_ns));
    }
    pulses
}
