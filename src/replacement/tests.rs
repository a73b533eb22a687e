use crate::replacement::{
    iter_replacement_tuples, odometer, Alphabet, ReplacementError, ReplacementTuples,
};

#[test]
fn test_two_symbols_length_two_exact_order() {
    let alphabet = Alphabet::new(['A', 'B']);
    let tuples: Vec<Vec<char>> = iter_replacement_tuples(alphabet, 2)
        .expect("valid arguments")
        .collect();
    let expected = vec![
        vec!['A', 'A'],
        vec!['A', 'B'],
        vec!['B', 'A'],
        vec!['B', 'B'],
    ];
    assert_eq!(tuples, expected);
}

#[test]
fn test_single_symbol_emits_one_tuple() {
    let alphabet = Alphabet::new(['A']);
    let tuples: Vec<Vec<char>> = iter_replacement_tuples(alphabet, 3)
        .expect("valid arguments")
        .collect();
    assert_eq!(tuples, vec![vec!['A', 'A', 'A']]);
}

#[test]
fn test_count_and_boundary_tuples() {
    let alphabet = Alphabet::new([1, 2, 3]);
    let tuples: Vec<Vec<i32>> = iter_replacement_tuples(alphabet, 3)
        .expect("valid arguments")
        .collect();
    assert_eq!(tuples.len(), 27);
    assert_eq!(tuples.first(), Some(&vec![1, 1, 1]));
    assert_eq!(tuples.last(), Some(&vec![3, 3, 3]));
}

#[test]
fn test_all_tuples_distinct() {
    let alphabet = Alphabet::new(['x', 'y', 'z']);
    let tuples: Vec<Vec<char>> = iter_replacement_tuples(alphabet, 3)
        .expect("valid arguments")
        .collect();
    for (i, a) in tuples.iter().enumerate() {
        for b in tuples.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_zero_length_is_rejected() {
    let alphabet = Alphabet::new(['A', 'B']);
    let result = ReplacementTuples::new(alphabet, 0);
    assert_eq!(result.err(), Some(ReplacementError::InvalidLength(0)));
}

#[test]
fn test_empty_alphabet_is_rejected() {
    let alphabet: Alphabet<char> = Alphabet::new([]);
    let result = ReplacementTuples::new(alphabet, 2);
    assert_eq!(result.err(), Some(ReplacementError::EmptyAlphabet));
}

#[test]
fn test_alphabet_deduplicates_preserving_insertion_order() {
    let alphabet = Alphabet::new(['b', 'a', 'b', 'c', 'a']);
    assert_eq!(alphabet.symbols(), &['b', 'a', 'c']);
    assert_eq!(alphabet.first(), Some(&'b'));
    assert_eq!(alphabet.last(), Some(&'c'));
}

#[test]
fn test_odometer_advances_rightmost_digit_first() {
    let mut digits = vec![0, 0];
    assert!(odometer::advance(&mut digits, 2));
    assert_eq!(digits, vec![0, 1]);
}

#[test]
fn test_odometer_carries_leftward() {
    let mut digits = vec![0, 1];
    assert!(odometer::advance(&mut digits, 2));
    assert_eq!(digits, vec![1, 0]);
}

#[test]
fn test_odometer_reports_completion_at_maximum() {
    let mut digits = vec![2, 2, 2];
    assert!(!odometer::advance(&mut digits, 3));
    assert_eq!(digits, vec![0, 0, 0]);
}

#[test]
fn test_lazy_front_of_large_space() {
    // 10^9 tuples must not be materialized to look at the first few.
    let alphabet = Alphabet::new((0..10).collect::<Vec<i32>>());
    let mut it = iter_replacement_tuples(alphabet, 9).expect("valid arguments");
    assert_eq!(it.next(), Some(vec![0; 9]));
    assert_eq!(it.next(), Some(vec![0, 0, 0, 0, 0, 0, 0, 0, 1]));
}
