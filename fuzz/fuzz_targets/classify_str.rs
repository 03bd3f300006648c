#![no_main]

use libfuzzer_sys::fuzz_target;

use ocean_classify::{Category, Classifier};

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else { return };

    // The first half is registered as pipes, the second half is classified.
    let mut mid = s.len() / 2;
    while !s.is_char_boundary(mid) {
        mid -= 1;
    }
    let (rules, src) = s.split_at(mid);

    let defaults = Classifier::new();
    let classifier = defaults.clone().with_classification(rules, Category::Pipe);
    for (c, category) in classifier.classify_str(src) {
        assert!(!category.is_sentinel());
        if rules.contains(c) {
            assert_eq!(category, Category::Pipe);
        } else {
            assert_eq!(category, defaults.classify(c));
        }
    }
});
