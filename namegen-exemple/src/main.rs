use namegen_core::{FormatSpec, GenerationRequest, NameGenerator, SuffixSpec};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Generator over the built-in vocabulary, seeded from entropy
    let mut app = NameGenerator::with_seed(None);
    println!("Vocabulary size: {} words\n", app.vocabulary().len());

    // Word count drives the grammar template:
    // 1 noun, 2 adjective noun, 3 adds a past verb,
    // 4 adds a leading adverb, 5 is "the adjective noun adverb verb"
    println!("=== Word counts ===");
    for count in 1..=5 {
        println!("{count}-word name: {}", app.generate(Some(count), FormatSpec::Kebab, SuffixSpec::None)?);
    }

    // Counts outside 1..=5 are clamped, not rejected
    println!("0 words becomes: {}", app.generate(Some(0), FormatSpec::Kebab, SuffixSpec::None)?);

    println!("\n=== Formats ===");
    for format in FormatSpec::ALL {
        println!("{:10}: {}", format, app.generate(Some(3), format, SuffixSpec::None)?);
    }

    // Every suffix attaches with '-', except in 'space' format
    println!("\n=== Suffixes ===");
    for suffix in SuffixSpec::ALL {
        println!("{:10}: {}", suffix, app.generate(Some(2), FormatSpec::Kebab, suffix)?);
    }

    // Formats and suffixes can come from user input
    match "shouty".parse::<FormatSpec>() {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("\n{e}"),
    }

    // The same seed always yields the same names
    println!("\n=== Reproducible fleet ===");
    let request = GenerationRequest::new()
        .with_word_count(2)
        .with_suffix(SuffixSpec::Digits)
        .with_seed(42);
    let first = NameGenerator::for_request(&request).generate_batch(&request, 5)?;
    let second = NameGenerator::for_request(&request).generate_batch(&request, 5)?;
    for (i, name) in first.iter().enumerate() {
        println!("Container {:2}: {name}", i + 1);
    }
    println!("Identical on rerun: {}", first == second);

    Ok(())
}
