//! Flight-model scenarios against published reference numbers.
//!
//! Everything here asserts tolerance ranges rather than point values: the
//! Reynolds-dependent drag model moves the "right" answer with the aero
//! regime, and locking a point value would pin the test to one
//! parameterization.

mod common;

use sandlot::{AirState, Ballpark, BattedBallState, Integrator, TerminalEvent};

/// A 500 ft wall-to-wall canyon so benchmark flights land in the field of
/// play instead of clipping the fence.
fn deep_park() -> Ballpark {
    let mut park = Ballpark::generic();
    for point in &mut park.fence {
        point.distance = 152.4;
    }
    park
}

fn carry(ball: &BattedBallState, air: &AirState) -> f64 {
    let park = deep_park();
    let trajectory = Integrator::new(air, &park)
        .integrate(ball)
        .expect("finite inputs");
    assert_eq!(trajectory.terminal(), TerminalEvent::Landing);
    trajectory.carry_distance()
}

/// 100 mph, 28 degrees, 1800 rpm backspin at sea level carries about
/// 120 m (395 ft).
#[test]
fn benchmark_drive_carries_about_395_feet() {
    let ball = BattedBallState::from_contact(100.0, 28.0, 0.0, 1800.0, 0.0);
    let distance = carry(&ball, &common::standard_air());
    assert!(
        (112.0..127.0).contains(&distance),
        "carry was {distance:.1} m"
    );
}

/// Thin mountain air adds roughly 7 m (22 ft) to the same ball.
#[test]
fn thin_air_adds_carry() {
    let ball = BattedBallState::from_contact(100.0, 28.0, 0.0, 1800.0, 0.0);
    let sea = carry(&ball, &common::standard_air());
    let altitude = AirState::with_density(0.98).unwrap();
    let mountain = carry(&ball, &altitude);

    let gain = mountain - sea;
    assert!((4.5..11.5).contains(&gain), "altitude gain was {gain:.1} m");
}

/// Five extra mph of exit speed buy roughly 7 m (24 ft).
#[test]
fn exit_speed_buys_distance() {
    let air = common::standard_air();
    let base = carry(
        &BattedBallState::from_contact(100.0, 28.0, 0.0, 1800.0, 0.0),
        &air,
    );
    let hot = carry(
        &BattedBallState::from_contact(105.0, 28.0, 0.0, 1800.0, 0.0),
        &air,
    );

    let gain = hot - base;
    assert!((4.0..10.5).contains(&gain), "exit-speed gain was {gain:.1} m");
}

/// Backspin holds the ball up; more of it means more carry in this regime.
#[test]
fn backspin_extends_the_fly() {
    let air = common::standard_air();
    let flat = carry(
        &BattedBallState::from_contact(98.0, 28.0, 0.0, 400.0, 0.0),
        &air,
    );
    let spinning = carry(
        &BattedBallState::from_contact(98.0, 28.0, 0.0, 2200.0, 0.0),
        &air,
    );
    assert!(
        spinning > flat + 3.0,
        "spin gain was {:.1} m",
        spinning - flat
    );
}

/// Every trajectory is strictly monotone in time and ends in a terminal
/// event, across a spread of contact parameters.
#[test]
fn trajectories_are_well_formed() {
    let air = common::standard_air();
    let park = common::generic_park();
    let integrator = Integrator::new(&air, &park);

    for ev in [62.0, 78.0, 95.0, 111.0] {
        for launch in [-8.0, 3.0, 17.0, 33.0, 55.0] {
            for spray in [-38.0, 0.0, 24.0] {
                let ball = BattedBallState::from_contact(ev, launch, spray, 1500.0, 250.0);
                let trajectory = integrator.integrate(&ball).expect("finite inputs");

                for pair in trajectory.samples().windows(2) {
                    assert!(
                        pair[1].t > pair[0].t,
                        "non-monotone at ev={ev} launch={launch} spray={spray}"
                    );
                }
                assert!(trajectory.flight_time() > 0.0);
            }
        }
    }
}

/// Identical contact, identical air, identical output.
#[test]
fn integration_is_reproducible() {
    let air = common::standard_air();
    let park = common::generic_park();
    let ball = BattedBallState::from_contact(103.0, 24.5, -11.0, 2050.0, 420.0);

    let a = Integrator::new(&air, &park).integrate(&ball).unwrap();
    let b = Integrator::new(&air, &park).integrate(&ball).unwrap();

    assert_eq!(a.samples().len(), b.samples().len());
    for (sa, sb) in a.samples().iter().zip(b.samples()) {
        assert_eq!(sa.position, sb.position);
        assert_eq!(sa.velocity, sb.velocity);
    }
}
