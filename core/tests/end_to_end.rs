use sincore::output::{save_to_csv, DEFAULT_PREFIX};
use sincore::signal::{clean_value, generate, round_to};
use sincore::GenerationParams;
use std::fs;
use tempfile::tempdir;

#[test]
fn saved_file_matches_generated_series() {
    let dir = tempdir().unwrap();
    let params = GenerationParams::new(120, 2.5);
    params.validate().unwrap();

    let values = generate(&params).unwrap();
    let path = save_to_csv(dir.path(), &values, params.count, DEFAULT_PREFIX).unwrap();
    assert_eq!(path.file_name().unwrap(), "sin_data_noisy_120.csv");

    let contents = fs::read_to_string(&path).unwrap();
    let rows: Vec<f64> = contents
        .lines()
        .map(|line| line.parse().unwrap())
        .collect();
    assert_eq!(rows.len(), params.count);
    for (row, value) in rows.iter().zip(&values) {
        assert_eq!(round_to(*row, 4), *value);
    }
}

#[test]
fn noise_free_file_is_the_rounded_formula() {
    let dir = tempdir().unwrap();
    let params = GenerationParams::new(5, 1.0).with_noise_std(0.0);
    let values = generate(&params).unwrap();
    let path = save_to_csv(dir.path(), &values, params.count, DEFAULT_PREFIX).unwrap();

    let contents = fs::read_to_string(path).unwrap();
    assert_eq!(contents, "0.0\n0.0176\n0.0351\n0.0526\n0.0702\n");
    for (i, line) in contents.lines().enumerate() {
        let expected = round_to(clean_value(i as f64), 4);
        assert_eq!(line.parse::<f64>().unwrap(), expected);
    }
}

#[test]
fn reruns_produce_identical_files() {
    let first = tempdir().unwrap();
    let second = tempdir().unwrap();
    let params = GenerationParams::new(64, 0.01).with_seed(42);

    let a = save_to_csv(first.path(), &generate(&params).unwrap(), 64, DEFAULT_PREFIX).unwrap();
    let b = save_to_csv(second.path(), &generate(&params).unwrap(), 64, DEFAULT_PREFIX).unwrap();
    assert_eq!(fs::read(a).unwrap(), fs::read(b).unwrap());
}
