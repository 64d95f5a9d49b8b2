use nqueens_perm::search::{run_parallel_search, ParallelConfig, Schedule, SearchConfig};
use nqueens_perm::validation::is_diagonal_free;
use nqueens_perm::{count_solutions, count_solutions_sequential, NQueensError};

#[test]
fn test_known_totals() {
    let expected = [(0, 1), (1, 1), (2, 0), (3, 0), (4, 2), (5, 10), (6, 4), (7, 40), (8, 92)];
    for (n, total) in expected {
        assert_eq!(count_solutions(n, 4).unwrap(), total, "n = {}", n);
    }
}

#[test]
fn test_single_and_eight_workers_agree() {
    for n in 4..=8 {
        assert_eq!(
            count_solutions(n, 1).unwrap(),
            count_solutions(n, 8).unwrap(),
            "n = {}",
            n
        );
    }
}

#[test]
fn test_schedules_agree_with_sequential() {
    let reference = count_solutions_sequential(7).unwrap();
    for schedule in [Schedule::Static, Schedule::Dynamic] {
        for chunk_size in [1, 13, 5040, 1 << 20] {
            let search = SearchConfig::new(7)
                .with_schedule(schedule)
                .with_chunk_size(chunk_size);
            let parallel = ParallelConfig::default().with_workers(3);
            let result = run_parallel_search(&search, &parallel).unwrap().result;
            assert_eq!(result.total_solutions, reference);
            assert!(result.completed);
        }
    }
}

#[test]
fn test_mirrored_solutions_are_solutions() {
    let search = SearchConfig::new(8).with_collect_solutions(usize::MAX);
    let parallel = ParallelConfig::default().with_workers(4);
    let result = run_parallel_search(&search, &parallel).unwrap().result;

    assert_eq!(result.solutions.len(), 92);
    for board in &result.solutions {
        let mirror = board.mirrored();
        assert!(is_diagonal_free(mirror.as_slice()));
        assert!(result.solutions.contains(&mirror));
    }
}

#[test]
fn test_errors_reported_before_search() {
    assert_eq!(
        count_solutions(8, 0),
        Err(NQueensError::InvalidWorkerCount { count: 0 })
    );
    assert_eq!(
        count_solutions(21, 4),
        Err(NQueensError::BoardTooLarge { size: 21, max: 20 })
    );
}
