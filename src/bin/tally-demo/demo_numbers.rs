use tally::{check_int_eq, check_int_ne, check_size_eq, Case, TestRunner};

fn sums(tc: &mut Case<'_>, values: &[i32]) {
    check_int_eq!(tc, 10, values.iter().sum::<i32>());
    check_size_eq!(tc, 4, values.len());
}

fn wraps(tc: &mut Case<'_>) {
    check_int_eq!(tc, 0, 255u8.wrapping_add(1));
    check_int_ne!(tc, -1, i32::MAX);
}

/// Only meaningful when data-plane resources are available.
fn data_plane_checksum(tc: &mut Case<'_>) {
    let checksum = b"payload".iter().fold(0u32, |acc, b| acc.wrapping_add(u32::from(*b)));
    check_int_eq!(tc, 746, checksum);
}

pub fn suite(runner: &mut TestRunner) {
    let suite = runner.add_suite(file!());
    runner.run_case(suite, sums, &[1, 2, 3, 4][..]);
    runner.run(suite, wraps);
    if !runner.config().control_plane_only {
        runner.run(suite, data_plane_checksum);
    }
}
