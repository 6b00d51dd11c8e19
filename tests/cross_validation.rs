use tritree::prelude::*;
use tritree::cross_validate;

use std::io::BufReader;


fn training_examples(bytes: &[u8]) -> Sample {
    Sample::from_reader(BufReader::new(bytes)).unwrap()
}


fn dataset(name: &str) -> Sample {
    let path = format!("{}/tests/dataset/{name}", env!("CARGO_MANIFEST_DIR"));
    SampleReader::default()
        .file(path)
        .read()
        .unwrap()
}


#[test]
fn perfect_predictor_gives_full_accuracy() {
    let sample = dataset("separable.tsv");
    assert_eq!(cross_validate(&sample).unwrap(), 100.0);
}


#[test]
fn report_as_json() {
    let sample = dataset("separable.tsv");
    let report = CrossValidation::new(&sample).run().unwrap();

    let json = serde_json::to_value(report).unwrap();
    assert_eq!(json["n_folds"], 12);
    assert_eq!(json["n_correct"], 12);
    assert_eq!(json["accuracy_percent"], 100.0);
}


#[test]
fn every_fold_leaves_its_record_out() {
    let sample = dataset("separable.tsv");
    let n_records = sample.shape().0;

    for fold in CrossValidation::new(&sample).tune_every(3) {
        let n_rest = fold.train.shape().0 + fold.tune.shape().0;
        assert_eq!(n_rest, n_records - 1);
        assert_eq!(fold.tune.shape().0, 4);
        assert!(fold.tune.records().iter().all(|r| r != &fold.held_out));
        assert!(fold.train.records().iter().all(|r| r != &fold.held_out));
    }
}


#[test]
fn noisy_records_lower_the_accuracy() {
    // `m` and `n` carry the vote pattern of the other party.
    let sample = training_examples(b"\
        a\tD\t++\n\
        b\tR\t--\n\
        c\tD\t+-\n\
        d\tR\t-+\n\
        e\tD\t++\n\
        f\tR\t--\n\
        g\tD\t+-\n\
        h\tR\t-+\n\
        i\tD\t++\n\
        j\tR\t--\n\
        k\tD\t+-\n\
        l\tR\t-+\n\
        m\tR\t++\n\
        n\tD\t--\n");
    let report = CrossValidation::new(&sample).run().unwrap();

    assert_eq!(report.n_folds, 14);
    assert!(report.n_correct <= 12);
    let expected = report.n_correct as f64 * 100.0 / 14.0;
    assert_eq!(report.accuracy_percent, expected);
    assert_eq!(report.to_string(), format!("Accuracy: {expected:.3} %"));
}


#[test]
fn empty_sample_is_an_error() {
    let err = cross_validate(&Sample::default()).unwrap_err();
    assert!(matches!(err, TreeError::EmptySample(_)));
}
