use sharetool::validation::{ChecksumValidator, IsinValidator};

fn main() {
    println!("ISIN Validation Demo");
    println!("--------------------");

    let samples = [
        ("US0378331005", "Apple Inc."),
        ("DE000BAY0017", "Bayer AG"),
        ("AU0000XVGZA3", "Treasury Corporation of Victoria"),
        ("US0378331004", "Apple Inc. with a transcription error"),
        ("US037833100", "truncated to 11 characters"),
        ("US037833100A", "ends in a letter"),
        ("1S0378331005", "country code starting with a digit"),
    ];

    for (candidate, label) in samples {
        let classification = IsinValidator::classify(candidate);
        println!("\n{} ({})", candidate, label);
        println!("  Classification: {}", classification.label());
    }

    println!(
        "\nComputed check digit for the body US037833100: {}",
        ChecksumValidator::check_digit("US037833100")
    );
}
