use rand::seq::index::sample;
use rand::Rng;
use shamir::{
    AuditTranscript, BigInt, BigRational, ConstantSolver, LagrangeSolver, LinearSystemSolver,
    NoopObserver, Point, RecoveryError, Reconstructor, Share, ShareSet, Strategy,
};

const FIXTURE_ONE: &str = r#"{
    "keys": { "n": 4, "k": 3 },
    "1": { "base": "10", "value": "4" },
    "2": { "base": "2", "value": "111" },
    "3": { "base": "10", "value": "12" },
    "6": { "base": "4", "value": "213" }
}"#;

const FIXTURE_TWO: &str = r#"{
    "keys": { "n": 10, "k": 7 },
    "1": { "base": "6", "value": "13444211440455345511" },
    "2": { "base": "15", "value": "aed7015a346d635" },
    "3": { "base": "15", "value": "6aeeb69631c227c" },
    "4": { "base": "16", "value": "e1b5e05623d881f" },
    "5": { "base": "8", "value": "316034514573652620673" },
    "6": { "base": "3", "value": "2122212201122002221120200210011020220200" },
    "7": { "base": "3", "value": "20120221122211000100210021102001201112121" },
    "8": { "base": "6", "value": "20220554335330240002224253" },
    "9": { "base": "12", "value": "45153788322a1255483" },
    "10": { "base": "7", "value": "1101613130313526312514143" }
}"#;

const STRATEGIES: [Strategy; 3] = [
    Strategy::Lagrange,
    Strategy::LinearSystem,
    Strategy::CrossChecked,
];

// coefficients lowest degree first
fn evaluate(coefficients: &[BigInt], x: &BigInt) -> BigInt {
    coefficients
        .iter()
        .rev()
        .fold(BigInt::from(0), |acc, coefficient| acc * x + coefficient)
}

#[test]
fn test_fixture_one_secret() {
    let shares = ShareSet::from_json(FIXTURE_ONE).unwrap();

    for strategy in STRATEGIES {
        let reconstruction = Reconstructor::new(strategy)
            .with_field_check(true)
            .reconstruct(&shares, &mut NoopObserver)
            .unwrap();

        assert_eq!(reconstruction.secret, BigInt::from(3), "{strategy}");
        assert_eq!(
            reconstruction.points,
            vec![Point::new(1, 4), Point::new(2, 7), Point::new(3, 12)]
        );
    }
}

#[test]
fn test_fixture_two_keeps_full_precision() {
    let shares = ShareSet::from_json(FIXTURE_TWO).unwrap();
    let reconstruction = Reconstructor::new(Strategy::CrossChecked)
        .with_field_check(true)
        .reconstruct(&shares, &mut NoopObserver)
        .unwrap();

    assert_eq!(reconstruction.points.len(), 7);
    assert_eq!(
        reconstruction.points[6].y.to_string(),
        "26709394976508342463"
    );
    assert_eq!(
        reconstruction.secret,
        "-6290016743746469796".parse::<BigInt>().unwrap()
    );

    let lagrange = LagrangeSolver::constant_term(&reconstruction.points).unwrap();
    let coefficients =
        LinearSystemSolver::solve_polynomial(&reconstruction.points, shares.degree()).unwrap();

    assert!(lagrange.is_integer());
    assert_eq!(coefficients.len(), 7);
    assert_eq!(coefficients.last(), Some(&lagrange));
}

#[test]
fn test_recover_secret_defaults_to_lagrange() {
    let shares = ShareSet::from_json(FIXTURE_ONE).unwrap();

    assert_eq!(shamir::recover_secret(&shares), Ok(BigInt::from(3)));
}

#[test]
fn test_audit_digest_is_stable_across_runs() {
    let shares = ShareSet::from_json(FIXTURE_TWO).unwrap();
    let reconstructor = Reconstructor::new(Strategy::CrossChecked);

    let mut first = AuditTranscript::new();
    let mut second = AuditTranscript::new();
    reconstructor.reconstruct(&shares, &mut first).unwrap();
    reconstructor.reconstruct(&shares, &mut second).unwrap();

    assert_eq!(first.hex_digest(), second.hex_digest());
}

#[test]
fn test_threshold_of_one() {
    let shares = ShareSet::new(3, 1, vec![Share::new(7, 36, "zz"), Share::new(8, 10, "1")])
        .unwrap();

    for strategy in STRATEGIES {
        let reconstruction = Reconstructor::new(strategy)
            .reconstruct(&shares, &mut NoopObserver)
            .unwrap();

        assert_eq!(reconstruction.secret, BigInt::from(35 * 36 + 35));
    }
}

#[test]
fn test_not_enough_decodable_shares() {
    let shares = ShareSet::new(
        4,
        3,
        vec![
            Share::new(1, 10, "4"),
            Share::new(2, 2, "112"),
            Share::new(3, 1, "0"),
            Share::new(4, 10, "19"),
        ],
    )
    .unwrap();

    assert_eq!(
        Reconstructor::default().reconstruct(&shares, &mut NoopObserver),
        Err(RecoveryError::InsufficientShares {
            required: 3,
            available: 2,
            rejected: vec![
                (2, RecoveryError::InvalidDigit { digit: '2', base: 2 }),
                (3, RecoveryError::InvalidBase { base: 1 }),
            ]
        })
    );
}

#[test]
fn test_random_integer_polynomials() {
    let mut rng = rand::thread_rng();

    for _ in 0..50 {
        let k = rng.gen_range(1..=8);
        let coefficients: Vec<BigInt> = (0..k)
            .map(|_| {
                let high = BigInt::from(rng.gen::<u64>()) << 64;
                let value: BigInt = high + rng.gen::<u64>();

                if rng.gen_bool(0.5) {
                    -value
                } else {
                    value
                }
            })
            .collect();

        let points: Vec<Point> = sample(&mut rng, 40, k)
            .into_iter()
            .map(|index| {
                let x = BigInt::from(index + 1);
                let y = evaluate(&coefficients, &x);

                Point { x, y }
            })
            .collect();

        let lagrange = LagrangeSolver.solve_constant(&points, &mut NoopObserver).unwrap();
        let linear_system = LinearSystemSolver
            .solve_constant(&points, &mut NoopObserver)
            .unwrap();

        assert_eq!(lagrange, coefficients[0]);
        assert_eq!(linear_system, coefficients[0]);

        let solved = LinearSystemSolver::solve_polynomial(&points, k - 1).unwrap();
        let expected: Vec<BigRational> = coefficients
            .iter()
            .rev()
            .cloned()
            .map(BigRational::from_integer)
            .collect();

        assert_eq!(solved, expected);
    }
}

#[test]
fn test_duplicate_abscissa_never_yields_a_value() {
    let points = vec![Point::new(3, 10), Point::new(5, 20), Point::new(3, 11)];

    assert!(matches!(
        LagrangeSolver.solve_constant(&points, &mut NoopObserver),
        Err(RecoveryError::DuplicateAbscissa { .. })
    ));
    assert!(matches!(
        LinearSystemSolver.solve_constant(&points, &mut NoopObserver),
        Err(RecoveryError::SingularSystem { .. })
    ));
}
