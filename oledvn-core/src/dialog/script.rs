//! Dialog script tokenizing
//!
//! A script is plain text with pause markers embedded in it. Markers
//! split the text into segments and are never drawn.

/// Dialog text with its pause marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DialogScript<'a> {
    text: &'a str,
    marker: char,
}

impl<'a> DialogScript<'a> {
    /// Wrap `text`, treating `marker` as the pause character
    pub const fn new(text: &'a str, marker: char) -> Self {
        Self { text, marker }
    }

    /// Raw script text, markers included
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// Pause marker character
    pub const fn marker(&self) -> char {
        self.marker
    }

    /// Check whether `ch` is the pause marker
    pub fn is_marker(&self, ch: char) -> bool {
        ch == self.marker
    }

    /// Literal segments between markers, in order
    ///
    /// A script with `n` markers always has `n + 1` segments, some of
    /// which may be empty.
    pub fn segments(&self) -> impl Iterator<Item = &'a str> {
        self.text.split(self.marker)
    }

    /// Number of pause markers
    pub fn pause_count(&self) -> usize {
        self.text.chars().filter(|&ch| ch == self.marker).count()
    }

    /// Number of glyphs that will be drawn
    pub fn glyph_count(&self) -> usize {
        self.text.chars().filter(|&ch| ch != self.marker).count()
    }

    /// Typewriter reveal steps of up to `speed` characters
    pub fn chunks(&self, speed: u8) -> RevealChunks<'a> {
        RevealChunks {
            rest: self.text,
            remaining: self.text.chars().count(),
            speed: usize::from(speed.max(1)),
        }
    }
}

/// Iterator over typewriter reveal steps
///
/// Full steps of `speed` characters are taken while more than `speed`
/// characters remain; the tail is revealed one character per step.
#[derive(Debug, Clone)]
pub struct RevealChunks<'a> {
    rest: &'a str,
    remaining: usize,
    speed: usize,
}

impl<'a> Iterator for RevealChunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.remaining == 0 {
            return None;
        }
        let take = if self.remaining > self.speed { self.speed } else { 1 };
        let split = self
            .rest
            .char_indices()
            .nth(take)
            .map(|(index, _)| index)
            .unwrap_or(self.rest.len());
        let (chunk, rest) = self.rest.split_at(split);
        self.rest = rest;
        self.remaining -= take;
        Some(chunk)
    }
}
