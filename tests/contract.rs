use proptest::prelude::*;
use rotate::{reference, scratch, Algorithm, MIN_OVERLAP, SMALL_ROTATE_SIZE};
use test_case::test_case;

fn rotated_with(algorithm: Algorithm, v: &[i32], na: usize, nb: usize) -> Vec<i32> {
    let mut v = v.to_vec();
    algorithm.rotate(&mut v, na, nb);
    v
}

fn one_to(n: i32) -> Vec<i32> {
    (1..=n).collect()
}

#[test_case(one_to(6), 2, 4 => vec![3, 4, 5, 6, 1, 2] ; "two then four")]
#[test_case(one_to(10), 1, 9 => vec![2, 3, 4, 5, 6, 7, 8, 9, 10, 1] ; "single left")]
#[test_case(one_to(10), 9, 1 => vec![10, 1, 2, 3, 4, 5, 6, 7, 8, 9] ; "single right")]
#[test_case(one_to(4), 2, 2 => vec![3, 4, 1, 2] ; "equal halves")]
fn scenarios(v: Vec<i32>, na: usize, nb: usize) -> Vec<i32> {
    let results: Vec<_> = Algorithm::ALL
        .iter()
        .map(|&algorithm| rotated_with(algorithm, &v, na, nb))
        .collect();

    for (algorithm, result) in Algorithm::ALL.iter().zip(&results) {
        assert_eq!(result, &results[0], "{algorithm:#}");
    }

    results[0].clone()
}

#[test]
fn degenerate_splits_are_identity() {
    let v = one_to(37);

    for algorithm in Algorithm::ALL {
        assert_eq!(rotated_with(algorithm, &v, 0, 37), v, "{algorithm:#}");
        assert_eq!(rotated_with(algorithm, &v, 37, 0), v, "{algorithm:#}");
        assert_eq!(rotated_with(algorithm, &[], 0, 0), Vec::<i32>::new());
    }
}

#[test]
fn equal_split_exchanges_halves() {
    for n in [1, 5, 16, 17, 64, 1001] {
        let v = one_to(2 * n);
        let expected: Vec<_> = v[n as usize..].iter().chain(&v[..n as usize]).copied().collect();

        for algorithm in Algorithm::ALL {
            assert_eq!(
                rotated_with(algorithm, &v, n as usize, n as usize),
                expected,
                "{algorithm:#}"
            );
        }
    }
}

#[test]
fn threshold_boundaries() {
    let large = 200;
    let mut splits = vec![];

    // Smaller block at and around the small-rotation threshold
    for ns in [SMALL_ROTATE_SIZE - 1, SMALL_ROTATE_SIZE, SMALL_ROTATE_SIZE + 1] {
        splits.push((ns, large));
        splits.push((large, ns));
    }

    // Block difference at and around both overlap thresholds
    for delta in [
        MIN_OVERLAP - 1,
        MIN_OVERLAP,
        SMALL_ROTATE_SIZE,
        SMALL_ROTATE_SIZE + 1,
    ] {
        splits.push((large, large + delta));
        splits.push((large + delta, large));
    }

    for (na, nb) in splits {
        let v = one_to((na + nb) as i32);
        let expected = reference::rotated(&v, na, nb);

        for algorithm in Algorithm::ALL {
            similar_asserts::assert_eq!(
                rotated_with(algorithm, &v, na, nb),
                expected,
                "{algorithm:#} na = {na}, nb = {nb}"
            );
        }
    }
}

#[test]
fn scratch_rotators_agree_at_their_limits() {
    let cases = [
        (SMALL_ROTATE_SIZE, 300),
        (300, SMALL_ROTATE_SIZE),
        (100, 100 + SMALL_ROTATE_SIZE),
        (100 + MIN_OVERLAP, 100),
    ];

    for (na, nb) in cases {
        let v = one_to((na + nb) as i32);
        let expected = rotated_with(Algorithm::TripleShift, &v, na, nb);

        let mut direct = v.clone();
        if na.min(nb) <= SMALL_ROTATE_SIZE {
            scratch::rotate_small(&mut direct, na);
        } else {
            scratch::rotate_overlap(&mut direct, na);
        }

        assert_eq!(direct, expected, "na = {na}, nb = {nb}");
    }
}

#[test]
fn large_random_regions() {
    let trials = rotate::check::Trials {
        trials: 2000,
        max_len: 20_000,
        seed: 0xdead_beef,
    };

    let checked = rotate::check::random_trials(
        &[Algorithm::TripleShift, Algorithm::TripleShiftV2],
        &trials,
    )
    .unwrap();

    assert_eq!(checked, 4000);
}

fn region_and_split() -> impl Strategy<Value = (Vec<u16>, usize)> {
    prop::collection::vec(any::<u16>(), 0..3000).prop_flat_map(|v| {
        let len = v.len();
        (Just(v), 0..=len)
    })
}

proptest! {
    #[test]
    fn matches_reference((v, na) in region_and_split()) {
        let nb = v.len() - na;
        let expected = reference::rotated(&v, na, nb);

        for algorithm in Algorithm::ALL {
            let mut actual = v.clone();
            algorithm.rotate(&mut actual, na, nb);
            prop_assert_eq!(&actual, &expected, "{:#}", algorithm);
        }
    }

    #[test]
    fn is_a_permutation((v, na) in region_and_split()) {
        let nb = v.len() - na;

        let mut before = v.clone();
        let mut after = v;
        rotate::triple_shift_rotate(&mut after, na, nb);

        before.sort_unstable();
        after.sort_unstable();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn complementary_split_restores((v, na) in region_and_split()) {
        let nb = v.len() - na;

        for algorithm in Algorithm::ALL {
            let mut w = v.clone();
            algorithm.rotate(&mut w, na, nb);
            algorithm.rotate(&mut w, nb, na);
            prop_assert_eq!(&w, &v, "{:#}", algorithm);
        }
    }

    #[test]
    fn prefix_only((v, na) in region_and_split(), extra in prop::collection::vec(any::<u16>(), 1..8)) {
        let nb = v.len() - na;
        let mut w = v.clone();
        w.extend_from_slice(&extra);

        rotate::triple_shift_rotate_v2(&mut w, na, nb);

        prop_assert_eq!(&w[v.len()..], &extra[..]);
    }
}
