//! Property tests for pulse generation and motion timing.

use proptest::prelude::*;

use stepper_sequence::config::{ActiveLevel, AxisConfig};
use stepper_sequence::{Direction, MotionIndicator, MotionRequest, PulseTrain, PulseWidth};

use crate::common::{bench_axis, step_pulses, Bench};

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Clockwise), Just(Direction::CounterClockwise)]
}

proptest! {
    #[test]
    fn pulse_train_has_two_edges_per_step(steps in 0u32..2_000, us in 1u32..5_000) {
        let width = PulseWidth::from_micros(us).unwrap();
        let train = PulseTrain::new(steps, width);
        prop_assert_eq!(train.size_hint(), (steps as usize * 2, Some(steps as usize * 2)));
        prop_assert_eq!(train.clone().count(), steps as usize * 2);

        let total: u64 = train.map(|e| e.hold_us as u64).sum();
        prop_assert_eq!(total, width.train_duration_us(steps));
    }

    #[test]
    fn move_timing_is_exact(steps in 0u32..300, us in 1u32..2_000, dir in direction()) {
        let bench = Bench::new();
        let config = AxisConfig::new("p", 2, 3, 4).unwrap();
        let mut axis = bench_axis(&bench, &config, ["p.step", "p.dir", "p.en"]);
        let mut led = MotionIndicator::new(bench.pin("led.motion"), ActiveLevel::High).unwrap();
        bench.clear();

        let request = MotionRequest::new(steps, dir, PulseWidth::from_micros(us).unwrap());
        axis.move_steps(&request, &mut led).unwrap();

        let pulses = step_pulses(&bench.events(), "p.step");
        prop_assert_eq!(pulses.len(), steps as usize);
        for (_, high_ns, low_ns) in pulses {
            prop_assert_eq!(high_ns, us as u64 * 1_000);
            prop_assert_eq!(low_ns, us as u64 * 1_000);
        }

        prop_assert_eq!(bench.now_ns(), request.duration_us() * 1_000);
        prop_assert_eq!(bench.events_on("p.en").len(), 2);
        prop_assert_eq!(bench.events_on("p.dir").len(), 1);
        prop_assert_eq!(bench.events_on("p.dir")[0].high, dir == Direction::Clockwise);
    }
}
