use std::thread;

use finchat::core::{estimate_tax, project_investment, reply, savings_plan};

const EPS: f64 = 1e-6;

fn assert_approx(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= EPS,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn documented_examples_hold_through_public_api() {
    assert_eq!(estimate_tax(250_000.0).expect("valid income"), 0.0);
    assert_approx(estimate_tax(600_000.0).expect("valid income"), 33_800.0);
    assert_approx(savings_plan(20_000.0, 6).expect("valid plan"), 20_000.0 / 6.0);

    let grown = project_investment(1_000.0, 10.0, 3, 0.0).expect("valid projection");
    for (actual, expected) in grown.iter().zip([1_100.0, 1_210.0, 1_331.0]) {
        assert_approx(*actual, expected);
    }
    assert_eq!(
        project_investment(0.0, 0.0, 5, 100.0).expect("valid projection"),
        vec![100.0, 200.0, 300.0, 400.0, 500.0]
    );
}

#[test]
fn calculators_agree_across_threads() {
    let baseline_tax = estimate_tax(1_234_567.0).expect("valid income").to_bits();
    let baseline_series: Vec<u64> = project_investment(50_000.0, 7.25, 30, 1_200.0)
        .expect("valid projection")
        .iter()
        .map(|v| v.to_bits())
        .collect();
    let baseline_reply = reply("anything else?", 11);

    thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    let tax = estimate_tax(1_234_567.0).expect("valid income").to_bits();
                    let series: Vec<u64> = project_investment(50_000.0, 7.25, 30, 1_200.0)
                        .expect("valid projection")
                        .iter()
                        .map(|v| v.to_bits())
                        .collect();
                    (tax, series, reply("anything else?", 11))
                })
            })
            .collect();

        for handle in handles {
            let (tax, series, chat) = handle.join().expect("worker should not panic");
            assert_eq!(tax, baseline_tax);
            assert_eq!(series, baseline_series);
            assert_eq!(chat, baseline_reply);
        }
    });
}
