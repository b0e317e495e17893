use pacer_decay::{DecayController, Hyperbola};
use proptest::prelude::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-6 * b.abs().max(1.0)
}

// ── Monotonic approach ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn descending_approach_is_monotonic(
        asymptote in -100.0f64..100.0,
        gap in 0.1f64..1000.0,
        rate in 0.05f64..0.95,
    ) {
        let mut decay = DecayController::new(asymptote + gap, asymptote, rate, 1.0, true).unwrap();
        let values = decay.deliver(40);
        for pair in values.windows(2) {
            prop_assert!(pair[1] < pair[0], "not falling: {} >= {}", pair[1], pair[0]);
        }
        for v in &values {
            prop_assert!(*v > asymptote);
        }
    }

    #[test]
    fn ascending_approach_is_monotonic(
        asymptote in -100.0f64..100.0,
        gap in 0.1f64..1000.0,
        rate in 0.05f64..0.95,
    ) {
        let mut decay = DecayController::new(asymptote - gap, asymptote, rate, 1.0, true).unwrap();
        let values = decay.deliver(40);
        for pair in values.windows(2) {
            prop_assert!(pair[1] > pair[0], "not rising: {} <= {}", pair[1], pair[0]);
        }
        for v in &values {
            prop_assert!(*v < asymptote);
        }
    }
}

// ── One-step rate contract ───────────────────────────────────────────────

proptest! {
    #[test]
    fn one_step_keeps_rate_of_distance(
        start in -500.0f64..500.0,
        offset in 0.5f64..500.0,
        rate in 0.01f64..0.99,
        advance in 0u64..20,
    ) {
        let asymptote = start - offset;
        let mut decay = DecayController::new(start, asymptote, rate, 1.0, false).unwrap();
        decay.deliver(advance);
        decay.set_rate(rate).unwrap();

        let x = decay.step() as f64;
        let current = decay.curve().value(x);
        let next = decay.curve().value(x + 1.0);
        prop_assert!(close(next, asymptote + (current - asymptote) * rate));
    }
}

// ── Reparameterization fidelity ──────────────────────────────────────────

proptest! {
    #[test]
    fn adjust_rate_passes_through_both_points(
        x1 in 0u32..100,
        dx in 1u32..50,
        y1 in 1.0f64..100.0,
        ratio in 0.05f64..0.95,
        v in -10.0f64..10.0,
    ) {
        let x1 = f64::from(x1);
        let x2 = x1 + f64::from(dx);
        let y1 = v + y1;
        let y2 = v + (y1 - v) * ratio;

        let mut curve = Hyperbola::new(1.0, 1.0, v);
        curve.adjust_rate(x1, y1, x2, y2);
        prop_assert!(close(curve.value(x1), y1));
        prop_assert!(close(curve.value(x2), y2));
        prop_assert_eq!(curve.v, v);
    }

    #[test]
    fn shift_h_passes_through_point(
        c in prop_oneof![0.1f64..10.0, -10.0f64..-0.1],
        v in -10.0f64..10.0,
        x in 0u32..100,
        dy in 0.1f64..50.0,
    ) {
        let y = v + c.signum() * dy;
        let mut curve = Hyperbola::new(c, 0.0, v);
        curve.shift_h(f64::from(x), y);
        prop_assert!(close(curve.value(f64::from(x)), y));
    }
}

// ── Nudge-once ───────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn only_one_nudge_per_step(
        deliveries in 0u64..10,
        target in 1.0f64..100.0,
    ) {
        let mut decay = DecayController::new(50.0, 0.0, 0.5, 1.0, true).unwrap();
        decay.deliver(deliveries);
        prop_assert!(decay.nudge_to_value(target).is_ok());
        prop_assert!(decay.nudge_to_value(target + 1.0).is_err());
        decay.deliver_one();
        prop_assert!(decay.nudge_to_value(target).is_ok());
    }
}
