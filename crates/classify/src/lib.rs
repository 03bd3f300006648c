//! Character classification for shell-style word splitting.
//!
//! A [`Classifier`] maps every character to the [`Category`] a tokenizer branches on: whitespace,
//! quotes, escapes, pipes, redirects, or ordinary word characters.
//!
//! ```
//! use ocean_classify::{Category, Classifier};
//!
//! let mut classifier = Classifier::new();
//! assert_eq!(classifier.classify('|'), Category::Pipe);
//! assert_eq!(classifier.classify('a'), Category::Char);
//!
//! classifier.add_classification("ab", Category::Escape);
//! assert_eq!(classifier.classify('a'), Category::Escape);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[macro_use]
extern crate tracing;

#[macro_use]
mod macros;

mod category;
pub use category::Category;

pub mod class;

mod classifier;
pub use classifier::{Classes, Classifier};
