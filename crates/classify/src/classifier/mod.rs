//! The character classifier.

use crate::{Category, class};
use rustc_hash::FxHashMap;
use std::{fmt, iter::FusedIterator, str::Chars};


const ASCII_LEN: usize = 128;

/// Maps characters to their lexical [`Category`].
///
/// A new classifier knows the default classes listed in [`class`]. Every character that is not in
/// its table is classified as [`Category::Char`], so classification is defined for every `char`
/// and never fails.
///
/// The table is only ever changed through [`add_classification`](Self::add_classification) and
/// its variants. Stricter or extended rule sets are built by layering registrations on top of
/// the defaults:
///
/// ```
/// use ocean_classify::{Category, Classifier};
///
/// let classifier = Classifier::new()
///     .with_classification(";&", Category::Pipe)
///     .with_classification("\u{a0}", Category::Space);
/// assert_eq!(classifier.classify(';'), Category::Pipe);
/// assert_eq!(classifier.classify('\u{a0}'), Category::Space);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Classifier {
    /// Entries for ASCII characters, indexed by code point.
    ascii: [Option<Category>; ASCII_LEN],
    /// Entries for all other characters.
    extended: FxHashMap<char, Category>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Classifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl Classifier {
    /// Creates a new classifier with the default classes registered.
    pub fn new() -> Self {
        let mut classifier = Self { ascii: [None; ASCII_LEN], extended: FxHashMap::default() };
        for (chars, category) in class::DEFAULTS {
            for c in chars.chars() {
                classifier.set(c, category);
            }
        }
        trace!(entries = classifier.len(), "created classifier");
        classifier
    }

    /// Returns the category of `c`.
    ///
    /// This is the registered category if there is one, and [`Category::Char`] otherwise.
    #[inline]
    pub fn classify(&self, c: char) -> Category {
        self.get(c).unwrap_or(Category::Char)
    }

    /// Returns the category registered for `c`, if any.
    #[inline]
    pub fn get(&self, c: char) -> Option<Category> {
        match self.ascii.get(c as usize) {
            Some(&entry) => entry,
            None => self.extended.get(&c).copied(),
        }
    }

    /// Returns `true` if a category is registered for `c`.
    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.get(c).is_some()
    }

    /// Registers every character of `chars` under `category`.
    ///
    /// Previous registrations of the same characters are overwritten. Any category can be
    /// registered, including [`Category::Unknown`] and [`Category::Eof`].
    pub fn add_classification(&mut self, chars: &str, category: Category) {
        self.add_chars(chars.chars(), category);
    }

    /// Registers every character yielded by `chars` under `category`.
    ///
    /// See [`add_classification`](Self::add_classification).
    pub fn add_chars(&mut self, chars: impl IntoIterator<Item = char>, category: Category) {
        let mut count = 0usize;
        for c in chars {
            self.set(c, category);
            count += 1;
        }
        trace!(count, %category, "added classification");
    }

    /// Builder form of [`add_classification`](Self::add_classification).
    #[must_use]
    pub fn with_classification(mut self, chars: &str, category: Category) -> Self {
        self.add_classification(chars, category);
        self
    }

    /// Returns the number of registered characters.
    pub fn len(&self) -> usize {
        self.ascii.iter().filter(|entry| entry.is_some()).count() + self.extended.len()
    }

    /// Returns `true` if no character is registered.
    pub fn is_empty(&self) -> bool {
        self.extended.is_empty() && self.ascii.iter().all(Option::is_none)
    }

    /// Returns an iterator over the registered characters and their categories.
    ///
    /// ASCII characters come first, in code point order. The order of the rest is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (char, Category)> {
        let ascii = self
            .ascii
            .iter()
            .zip(0u8..)
            .filter_map(|(entry, b)| entry.map(|category| (char::from(b), category)));
        let extended = self.extended.iter().map(|(&c, &category)| (c, category));
        ascii.chain(extended)
    }

    /// Returns an iterator over the characters of `s` paired with their categories.
    pub fn classify_str<'a>(&'a self, s: &'a str) -> Classes<'a> {
        Classes { classifier: self, chars: s.chars() }
    }

    #[inline]
    fn set(&mut self, c: char, category: Category) {
        match self.ascii.get_mut(c as usize) {
            Some(entry) => *entry = Some(category),
            None => {
                self.extended.insert(c, category);
            }
        }
    }
}

impl Extend<(char, Category)> for Classifier {
    fn extend<T: IntoIterator<Item = (char, Category)>>(&mut self, iter: T) {
        for (c, category) in iter {
            self.set(c, category);
        }
    }
}

impl<'a> Extend<&'a (char, Category)> for Classifier {
    fn extend<T: IntoIterator<Item = &'a (char, Category)>>(&mut self, iter: T) {
        self.extend(iter.into_iter().copied());
    }
}

/// Iterator over the characters of a string and their categories.
///
/// Created by [`Classifier::classify_str`]. The end of the input is the end of the iterator; no
/// [`Category::Eof`] item is produced.
#[derive(Clone, Debug)]
pub struct Classes<'a> {
    classifier: &'a Classifier,
    chars: Chars<'a>,
}

impl<'a> Classes<'a> {
    /// Returns the input that has not been classified yet.
    #[inline]
    pub fn as_str(&self) -> &'a str {
        self.chars.as_str()
    }
}

impl Iterator for Classes<'_> {
    type Item = (char, Category);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let c = self.chars.next()?;
        Some((c, self.classifier.classify(c)))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chars.size_hint()
    }
}

impl DoubleEndedIterator for Classes<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let c = self.chars.next_back()?;
        Some((c, self.classifier.classify(c)))
    }
}

impl FusedIterator for Classes<'_> {}
