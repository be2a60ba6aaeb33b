use bbmark_core::{convert, samples};
use pretty_assertions::assert_eq;

#[test]
fn every_sample_converts_to_its_expectation() {
    for sample in samples() {
        assert_eq!(
            convert(sample.markdown),
            sample.bbcode,
            "sample {} failed",
            sample.name
        );
    }
}
