//! Default character classes.
//!
//! Each constant lists the characters that [`Classifier::new`](crate::Classifier::new) registers
//! under one [`Category`]. They can be reused when layering rules on top of the defaults.

use crate::Category;

/// Word-separating whitespace: space, tab, carriage return, and newline.
pub const SPACE: &str = " \t\r\n";
/// The quote inside which escapes are processed.
pub const ESCAPING_QUOTE: &str = "\"";
/// The quote inside which everything is literal.
pub const NONESCAPING_QUOTE: &str = "'";
pub const ESCAPE: &str = "\\";
pub const PIPE: &str = "|";
pub const REDIRECT: &str = "><";

/// The default classes with their categories, in registration order.
///
/// The character sets are disjoint, so the order does not affect the resulting table.
pub const DEFAULTS: [(&str, Category); 6] = [
    (SPACE, Category::Space),
    (ESCAPING_QUOTE, Category::QuoteDouble),
    (NONESCAPING_QUOTE, Category::QuoteSingle),
    (ESCAPE, Category::Escape),
    (PIPE, Category::Pipe),
    (REDIRECT, Category::Redirect),
];
