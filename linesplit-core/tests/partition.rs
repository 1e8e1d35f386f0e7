use linesplit_core::{partition, LineRange, PartitionError};

fn ranges(pairs: &[(usize, usize)]) -> Vec<LineRange> {
    pairs
        .iter()
        .map(|&(start, end)| LineRange { start, end })
        .collect()
}

#[test]
fn uneven_split_front_loads_remainder() {
    let result = partition(10, 3).expect("partition");
    assert_eq!(result, ranges(&[(0, 4), (4, 7), (7, 10)]));
}

#[test]
fn even_split_has_equal_ranges() {
    let result = partition(9, 3).expect("partition");
    assert_eq!(result, ranges(&[(0, 3), (3, 6), (6, 9)]));
}

#[test]
fn one_line_per_part() {
    let result = partition(5, 5).expect("partition");
    assert_eq!(
        result,
        ranges(&[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5)])
    );
}

#[test]
fn more_parts_than_lines_fails() {
    assert_eq!(
        partition(4, 5),
        Err(PartitionError::InsufficientLines {
            total_lines: 4,
            num_parts: 5,
        })
    );
}

#[test]
fn zero_parts_fails() {
    assert_eq!(partition(10, 0), Err(PartitionError::ZeroParts));
}

#[test]
fn empty_file_cannot_be_split() {
    assert_eq!(
        partition(0, 1),
        Err(PartitionError::InsufficientLines {
            total_lines: 0,
            num_parts: 1,
        })
    );
}

#[test]
fn single_part_covers_everything() {
    let result = partition(7, 1).expect("partition");
    assert_eq!(result, ranges(&[(0, 7)]));
}

#[test]
fn ranges_partition_exactly_with_balanced_sizes() {
    for total_lines in 1..200 {
        for num_parts in 1..=total_lines {
            let result = partition(total_lines, num_parts).expect("partition");
            assert_eq!(result.len(), num_parts);
            assert_eq!(result[0].start, 0);
            assert_eq!(result[num_parts - 1].end, total_lines);
            for window in result.windows(2) {
                assert_eq!(window[0].end, window[1].start);
            }

            let base = total_lines / num_parts;
            let extra = total_lines % num_parts;
            for (i, range) in result.iter().enumerate() {
                let expected = base + usize::from(i < extra);
                assert_eq!(range.len(), expected);
            }
        }
    }
}

#[test]
fn partition_is_deterministic() {
    assert_eq!(partition(123, 7), partition(123, 7));
}
