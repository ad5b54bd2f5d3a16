extern crate nash_rs;

#[cfg(test)]
mod tests {
    use approx_eq::assert_approx_eq;
    use nash_rs::*;
    use nash_rs::{
        action::ActionId,
        matrix::{Axis, PayoffMatrix, PayoffTensor},
        player::Player,
        reduction::{argext, reduce, Extremum},
    };

    fn matrix(rows: Vec<Vec<f64>>) -> PayoffMatrix {
        PayoffMatrix::new(rows).unwrap()
    }

    /// Deterministic pseudo-random integer matrices.
    fn generated(count: usize) -> Vec<PayoffMatrix> {
        let mut seed: u64 = 7;
        let mut next = move || {
            seed = seed
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((seed >> 33) % 11) as f64 - 5.0
        };
        (0..count)
            .map(|k| {
                let rows = 1 + k % 4;
                let cols = 1 + (k / 4) % 4;
                matrix(
                    (0..rows)
                        .map(|_| (0..cols).map(|_| next()).collect())
                        .collect(),
                )
            })
            .collect()
    }

    #[test]
    fn three_by_three() {
        let m = games::matrix_from_name("three_by_three").unwrap();

        let lower = solver::maximin(&m);
        assert_eq!(lower.strategy, ActionId::new(1));
        assert_eq!(lower.response, ActionId::new(1));
        assert_approx_eq!(lower.value, 2.0);

        let upper = solver::minimax(&m);
        assert_eq!(upper.strategy, ActionId::new(1));
        assert_eq!(upper.response, ActionId::new(1));
        assert_approx_eq!(upper.value, 2.0);

        assert!(solver::verify_nash_equilibrium(&m, 1, 1).unwrap());
        assert!(!solver::verify_nash_equilibrium(&m, 0, 0).unwrap());
        assert_eq!(
            solver::pure_equilibria(&m),
            vec![(ActionId::new(1), ActionId::new(1))]
        );
    }

    #[test]
    fn four_by_four() {
        let m = games::matrix_from_name("four_by_four").unwrap();

        let lower = solver::maximin(&m);
        assert_eq!(lower.strategy, ActionId::new(0));
        assert_eq!(lower.response, ActionId::new(2));
        assert_approx_eq!(lower.value, 2.0);

        let upper = solver::minimax(&m);
        assert_eq!(upper.strategy, ActionId::new(2));
        assert_eq!(upper.response, ActionId::new(0));
        assert_approx_eq!(upper.value, 2.0);

        // 2 is both the minimum of row 0 and the maximum of column 2.
        assert!(solver::verify_nash_equilibrium(&m, 0, 2).unwrap());
        assert!(!solver::verify_nash_equilibrium(&m, 1, 1).unwrap());
        assert!(!solver::verify_nash_equilibrium(&m, 2, 0).unwrap());
        assert_eq!(
            solver::pure_equilibria(&m),
            vec![(ActionId::new(0), ActionId::new(2))]
        );
    }

    #[test]
    fn tied_best_response_is_an_equilibrium() {
        // Column 0 peaks at 3 in rows 0 and 1; both rows bottom out there.
        let m = matrix(vec![vec![3.0, 4.0], vec![3.0, 5.0]]);
        assert!(solver::verify_nash_equilibrium(&m, 0, 0).unwrap());
        assert!(solver::verify_nash_equilibrium(&m, 1, 0).unwrap());
        assert!(!solver::verify_nash_equilibrium(&m, 1, 1).unwrap());
        assert_eq!(
            solver::pure_equilibria(&m),
            vec![
                (ActionId::new(0), ActionId::new(0)),
                (ActionId::new(1), ActionId::new(0))
            ]
        );
        // maximin still picks the lowest tied row
        assert_eq!(solver::maximin(&m).strategy, ActionId::new(0));
    }

    #[test]
    fn matching_pennies_has_no_saddle() {
        let m = matrix(vec![vec![1.0, -1.0], vec![-1.0, 1.0]]);
        let lower = solver::maximin(&m);
        let upper = solver::minimax(&m);
        assert_approx_eq!(lower.value, -1.0);
        assert_approx_eq!(upper.value, 1.0);
        assert!(solver::pure_equilibria(&m).is_empty());
        assert!(!solver::analyze(&m).is_determined());
    }

    #[test]
    fn weak_duality() {
        for m in generated(64) {
            let lower = solver::maximin(&m);
            let upper = solver::minimax(&m);
            assert!(lower.value <= upper.value);
            if lower.value == upper.value {
                assert!(solver::verify_nash_equilibrium(
                    &m,
                    lower.strategy.index(),
                    upper.strategy.index()
                )
                .unwrap());
            } else {
                assert!(solver::pure_equilibria(&m).is_empty());
            }
        }
    }

    #[test]
    fn verify_matches_argmax_and_argmin() {
        for m in generated(64) {
            for s1 in 0..m.rows() {
                for s2 in 0..m.cols() {
                    let (best_row, best) = argext(m.rows(), Extremum::Max, |i| m.get(i, s2));
                    let (best_col, worst) = argext(m.cols(), Extremum::Min, |j| m.get(s1, j));
                    let expected = m.get(s1, s2) == best && m.get(s1, s2) == worst;
                    assert_eq!(
                        solver::verify_nash_equilibrium(&m, s1, s2).unwrap(),
                        expected
                    );
                    if best_row == s1 && best_col == s2 {
                        assert!(solver::verify_nash_equilibrium(&m, s1, s2).unwrap());
                    }
                }
            }
        }
    }

    #[test]
    fn column_player_by_negation_or_directly() {
        let m = games::matrix_from_name("three_by_three").unwrap();
        let by_negation = solver::column_maximin(&m);
        assert_eq!(by_negation.strategy, ActionId::new(1));
        assert_eq!(by_negation.response, ActionId::new(1));
        assert_approx_eq!(by_negation.value, -2.0);
        assert_eq!(by_negation, solver::column_maximin_direct(&m));

        let by_negation = solver::column_minimax(&m);
        assert_eq!(by_negation.strategy, ActionId::new(1));
        assert_approx_eq!(by_negation.value, -2.0);
        assert_eq!(by_negation, solver::column_minimax_direct(&m));

        let mut ms = generated(64);
        ms.push(matrix(vec![vec![1.0, 1.0], vec![1.0, 1.0]]));
        for m in ms {
            assert_eq!(solver::column_maximin(&m), solver::column_maximin_direct(&m));
            assert_eq!(solver::column_minimax(&m), solver::column_minimax_direct(&m));
            assert!(solver::column_maximin(&m).value <= solver::column_minimax(&m).value);
        }
    }

    #[test]
    fn zero_sum_analysis_agrees_with_single_operations() {
        let m = games::matrix_from_name("four_by_four").unwrap();
        let security = solver::analyze(&m);
        assert_eq!(*security.maximin_of(Player::P1), solver::maximin(&m));
        assert_eq!(*security.minimax_of(Player::P1), solver::minimax(&m));
        assert_eq!(*security.maximin_of(Player::P2), solver::column_maximin(&m));
        assert_eq!(*security.minimax_of(Player::P2), solver::column_minimax(&m));
        assert!(security.is_determined());
        assert_eq!(security.trace.lines().len(), 4);
        assert!(security.trace.lines()[0].starts_with("P1 maximin: play 0 to guarantee 2"));
    }

    #[test]
    fn ties_resolve_to_lowest_index() {
        let m = matrix(vec![vec![3.0, 5.0], vec![3.0, 7.0], vec![1.0, 9.0]]);
        let lower = solver::maximin(&m);
        assert_eq!(lower.strategy, ActionId::new(0));
        assert_approx_eq!(lower.value, 3.0);

        let m = matrix(vec![vec![1.0, 2.0], vec![2.0, 1.0]]);
        let upper = solver::minimax(&m);
        assert_eq!(upper.strategy, ActionId::new(0));
        assert_eq!(upper.response, ActionId::new(1));

        let flat = matrix(vec![vec![4.0, 4.0, 4.0], vec![4.0, 4.0, 4.0]]);
        for solution in [
            solver::maximin(&flat),
            solver::minimax(&flat),
            solver::column_maximin(&flat),
            solver::column_minimax(&flat),
        ]
        .iter()
        {
            assert_eq!(solution.strategy, ActionId::new(0));
            assert_eq!(solution.response, ActionId::new(0));
        }

        assert_eq!(argext(4, Extremum::Max, |i| [1.0, 3.0, 3.0, 2.0][i]), (1, 3.0));
        assert_eq!(argext(4, Extremum::Min, |i| [2.0, 0.0, 1.0, 0.0][i]), (1, 0.0));
    }

    #[test]
    fn single_row_or_column() {
        let m = matrix(vec![vec![4.0, -1.0, 7.0]]);
        let lower = solver::maximin(&m);
        let upper = solver::minimax(&m);
        assert_eq!(lower.strategy, ActionId::new(0));
        assert_eq!(upper.strategy, ActionId::new(1));
        assert_eq!(upper.response, ActionId::new(0));
        assert_approx_eq!(lower.value, upper.value);

        let m = matrix(vec![vec![3.0], vec![8.0], vec![-2.0]]);
        let lower = solver::maximin(&m);
        let upper = solver::minimax(&m);
        assert_eq!(lower.strategy, ActionId::new(1));
        assert_eq!(upper.strategy, ActionId::new(0));
        assert_eq!(upper.response, ActionId::new(1));
        assert_approx_eq!(lower.value, upper.value);

        let m = matrix(vec![vec![5.0]]);
        assert_eq!(solver::maximin(&m), solver::minimax(&m));
        assert!(solver::verify_nash_equilibrium(&m, 0, 0).unwrap());
    }

    #[test]
    fn reduction_is_axis_symmetric() {
        let m = games::matrix_from_name("four_by_four").unwrap();
        assert_eq!(
            reduce(&m, Axis::Column, Extremum::Min, Extremum::Max),
            reduce(&m.transposed(), Axis::Row, Extremum::Min, Extremum::Max)
        );
        assert_eq!(m.transposed().transposed(), m);
        assert_eq!(m.negated().negated(), m);
    }

    #[test]
    fn idempotent() {
        let m = games::matrix_from_name("four_by_four").unwrap();
        assert_eq!(solver::maximin(&m), solver::maximin(&m));
        assert_eq!(solver::minimax(&m), solver::minimax(&m));
        assert_eq!(solver::analyze(&m), solver::analyze(&m));
    }

    #[test]
    fn prisoners_dilemma() {
        let pd = games::tensor_from_name("prisoners_dilemma").unwrap();

        let p1 = solver::general_maximin(&pd, Player::P1);
        assert_eq!(p1.strategy, ActionId::new(1));
        assert_approx_eq!(p1.value, 3.0);
        let p2 = solver::general_maximin(&pd, Player::P2);
        assert_eq!(p2.strategy, ActionId::new(1));
        assert_approx_eq!(p2.value, 3.0);

        let p1 = solver::general_minimax(&pd, Player::P1);
        assert_eq!(p1.strategy, ActionId::new(1));
        assert_eq!(p1.response, ActionId::new(1));
        assert_approx_eq!(p1.value, 3.0);
        let p2 = solver::general_minimax(&pd, Player::P2);
        assert_eq!(p2.strategy, ActionId::new(1));
        assert_eq!(p2.response, ActionId::new(1));
        assert_approx_eq!(p2.value, 3.0);

        assert!(solver::verify_general_equilibrium(&pd, 1, 1).unwrap());
        assert!(!solver::verify_general_equilibrium(&pd, 0, 0).unwrap());
        assert!(!solver::verify_general_equilibrium(&pd, 0, 1).unwrap());

        let security = solver::analyze_general(&pd);
        assert!(security.is_determined());
        assert_eq!(security.trace.lines().len(), 4);
    }

    #[test]
    fn tensor_constructors_agree() {
        let pd = games::tensor_from_name("prisoners_dilemma").unwrap();
        let pairs = PayoffTensor::from_pairs(vec![
            vec![(5.0, 5.0), (0.0, 10.0)],
            vec![(10.0, 0.0), (3.0, 3.0)],
        ])
        .unwrap();
        assert_eq!(pd, pairs);

        let m = games::matrix_from_name("three_by_three").unwrap();
        let zs = PayoffTensor::zero_sum(&m);
        assert_eq!(solver::general_maximin(&zs, Player::P2), solver::column_maximin(&m));
    }

    #[test]
    fn shape_errors() {
        assert!(matches!(
            PayoffMatrix::new(vec![vec![1.0, 2.0], vec![3.0]]),
            Err(Error::Shape { .. })
        ));
        assert!(matches!(PayoffMatrix::new(vec![]), Err(Error::Shape { .. })));
        assert!(matches!(
            PayoffMatrix::new(vec![vec![]]),
            Err(Error::Shape { .. })
        ));
        assert!(matches!(
            PayoffMatrix::new(vec![vec![1.0, f64::NAN]]),
            Err(Error::NonFinite { row: 0, column: 1 })
        ));
        assert!(matches!(
            PayoffTensor::new(vec![vec![vec![1.0]]; 3]),
            Err(Error::Shape { .. })
        ));
        assert!(matches!(
            PayoffTensor::new(vec![vec![vec![1.0, 2.0]], vec![vec![1.0], vec![2.0]]]),
            Err(Error::Shape { .. })
        ));
    }

    #[test]
    fn index_errors() {
        let m = games::matrix_from_name("three_by_three").unwrap();
        assert_eq!(
            solver::verify_nash_equilibrium(&m, 3, 0),
            Err(Error::Index {
                player: Player::P1,
                index: 3,
                bound: 3
            })
        );
        assert_eq!(
            solver::verify_nash_equilibrium(&m, 0, 7),
            Err(Error::Index {
                player: Player::P2,
                index: 7,
                bound: 3
            })
        );
        let pd = games::tensor_from_name("prisoners_dilemma").unwrap();
        assert!(matches!(
            solver::verify_general_equilibrium(&pd, 0, 2),
            Err(Error::Index { .. })
        ));
    }

    #[test]
    fn named_games() {
        for name in games::ZERO_SUM.iter() {
            assert!(games::matrix_from_name(name).is_ok());
        }
        for name in games::GENERAL_SUM.iter() {
            assert!(games::tensor_from_name(name).is_ok());
        }
        assert!(matches!(
            games::matrix_from_name("chess"),
            Err(Error::UnknownGame { .. })
        ));
    }
}
