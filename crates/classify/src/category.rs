//! Lexical categories.

str_enum! {
    /// The lexical role of a single character.
    ///
    /// [`Classifier::classify`](crate::Classifier::classify) only ever produces the categories that
    /// are registered in its table, falling back to [`Char`](Self::Char). [`Unknown`](Self::Unknown)
    /// and [`Eof`](Self::Eof) are never assigned by default; they are available for a tokenizer's
    /// own state machine, e.g. "no character read yet" and "input exhausted".
    #[derive(Default)]
    #[derive(strum::EnumIs)]
    #[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
    pub enum Category {
        /// No category. The default value.
        #[default]
        Unknown,
        /// An ordinary word character.
        Char,
        /// Word-separating whitespace.
        Space,
        /// `"`: a quote inside which escapes are still processed.
        QuoteDouble,
        /// `'`: a quote inside which everything is literal.
        QuoteSingle,
        /// `\`: escapes the next character.
        Escape,
        /// `|`.
        Pipe,
        /// `<` or `>`.
        Redirect,
        /// End of input.
        Eof,
    }
}

impl Category {
    /// Returns `true` if `self` opens or closes a quoted section.
    #[inline]
    pub const fn is_quote(self) -> bool {
        matches!(self, Self::QuoteDouble | Self::QuoteSingle)
    }

    /// Returns `true` if `self` is one of the sentinel values, [`Unknown`](Self::Unknown) or
    /// [`Eof`](Self::Eof).
    #[inline]
    pub const fn is_sentinel(self) -> bool {
        matches!(self, Self::Unknown | Self::Eof)
    }
}
