use bbmark_core::{Sample, convert, samples};

pub(crate) struct Outcome {
    pub(crate) sample: &'static Sample,
    pub(crate) actual: String,
    pub(crate) passed: bool,
}

pub(crate) fn run_samples() -> Vec<Outcome> {
    samples()
        .iter()
        .map(|sample| {
            let actual = convert(sample.markdown);
            let passed = actual == sample.bbcode;
            Outcome {
                sample,
                actual,
                passed,
            }
        })
        .collect()
}

/// One status line per sample on stdout. Failures also dump input, expected and actual output.
pub(crate) fn report(outcomes: &[Outcome]) {
    for (idx, outcome) in outcomes.iter().enumerate() {
        let status = if outcome.passed { "passed" } else { "FAILED" };
        println!("{}. {}: {}", idx + 1, outcome.sample.name, status);
        if !outcome.passed {
            println!("input:\n{}", outcome.sample.markdown);
            println!("expected:\n{}", outcome.sample.bbcode);
            println!("actual:\n{}", outcome.actual);
            println!("{}", "-".repeat(40));
        }
    }
    let passed = outcomes.iter().filter(|outcome| outcome.passed).count();
    println!("{passed}/{} samples passed", outcomes.len());
}
