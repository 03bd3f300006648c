//! Layered rule sets and use from a tokenizer-style scan loop.

use ocean_classify::{Category, Classifier, class};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

/// Counts the words of `src`, treating quoted sections and escaped characters as word characters.
///
/// `Unknown` is the state before the first character and `Eof` the state after the last.
fn count_words(classifier: &Classifier, src: &str) -> usize {
    let mut words = 0;
    let mut prev = Category::Unknown;
    let mut quote = None;
    let mut classes = classifier.classify_str(src).map(|(_, category)| category);
    loop {
        let category = classes.next().unwrap_or(Category::Eof);
        let in_word = match (quote, category) {
            (_, Category::Eof) => false,
            (Some(q), c) if c == q => {
                quote = None;
                true
            }
            (Some(_), _) => true,
            (None, c) if c.is_quote() => {
                quote = Some(c);
                true
            }
            (None, Category::Escape) => {
                classes.next();
                true
            }
            (None, Category::Char) => true,
            (None, _) => false,
        };
        if !in_word && matches!(prev, Category::Char) {
            words += 1;
        }
        if category.is_eof() {
            break;
        }
        prev = if in_word { Category::Char } else { category };
    }
    words
}

#[test]
fn scan_loop() {
    init_tracing();
    let classifier = Classifier::new();
    assert_eq!(count_words(&classifier, ""), 0);
    assert_eq!(count_words(&classifier, "   \t\n"), 0);
    assert_eq!(count_words(&classifier, "echo hello"), 2);
    assert_eq!(count_words(&classifier, "echo 'hello world' \"a b\""), 3);
    assert_eq!(count_words(&classifier, r"touch a\ b"), 2);
    assert_eq!(count_words(&classifier, "ls|wc -l>out"), 4);
    assert_eq!(count_words(&classifier, "a;b"), 1);
}

#[test]
fn layered_rules() {
    init_tracing();
    let mut strict = Classifier::new();
    strict.add_classification(";&", Category::Pipe);
    strict.add_classification("\u{a0}\u{3000}", Category::Space);
    assert_eq!(count_words(&strict, "a;b"), 2);
    assert_eq!(count_words(&strict, "a\u{a0}b\u{3000}c"), 3);

    // Defaults are untouched by layering.
    let defaults = Classifier::new();
    for (chars, category) in class::DEFAULTS {
        for c in chars.chars() {
            assert_eq!(strict.classify(c), category);
            assert_eq!(defaults.classify(c), category);
        }
    }
    assert_eq!(defaults.classify(';'), Category::Char);
    assert_eq!(strict.len(), defaults.len() + 4);
}

#[test]
fn rebuild_from_classes() {
    let mut classifier = Classifier::new();
    classifier.add_classification(class::REDIRECT, Category::Char);
    assert_eq!(classifier.classify('>'), Category::Char);
    classifier.add_classification(class::REDIRECT, Category::Redirect);
    assert_eq!(classifier, Classifier::new());
}

#[test]
fn shared_between_threads() {
    let classifier = &Classifier::new().with_classification("é", Category::Escape);
    std::thread::scope(|s| {
        let handles = ["a b", "é|é", "'x'"]
            .map(|src| s.spawn(move || classifier.classify_str(src).map(|(_, c)| c).collect::<Vec<_>>()));
        let results = handles.map(|handle| handle.join().unwrap());
        assert_eq!(results[0], [Category::Char, Category::Space, Category::Char]);
        assert_eq!(results[1], [Category::Escape, Category::Pipe, Category::Escape]);
        assert_eq!(results[2], [Category::QuoteSingle, Category::Char, Category::QuoteSingle]);
    });
}
