use std::iter::Enumerate;
use std::str::Split;

/// Line types the loader understands. Everything else falls through to `Ignored`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive<'a> {
    Position,
    TexCoord,
    Normal,
    Face,
    Group,
    UseMaterial,
    MaterialLibrary,
    Ignored(&'a str),
}

impl<'a> Directive<'a> {
    pub fn from_token(token: &'a str) -> Self {
        match token {
            "v" => Directive::Position,
            "vt" => Directive::TexCoord,
            "vn" => Directive::Normal,
            "f" => Directive::Face,
            "g" => Directive::Group,
            "usemtl" => Directive::UseMaterial,
            "mtllib" => Directive::MaterialLibrary,
            other => Directive::Ignored(other),
        }
    }
}

/// A non-empty source line split into its directive and arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Line<'a> {
    /// 1-based line number in the source text
    pub number: usize,
    pub directive: Directive<'a>,
    pub args: Vec<&'a str>,
}

/// Lazy iterator over the token lines of a source text. Cloning restarts
/// from the clone's current position.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    lines: Enumerate<Split<'a, char>>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.split('\n').enumerate(),
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        for (index, raw) in self.lines.by_ref() {
            let mut tokens = raw.split_whitespace();
            // Blank and whitespace-only lines carry nothing
            let Some(first) = tokens.next() else {
                continue;
            };

            return Some(Line {
                number: index + 1,
                directive: Directive::from_token(first),
                args: tokens.collect(),
            });
        }
        None
    }
}

pub fn tokenize(text: &str) -> Tokenizer<'_> {
    Tokenizer::new(text)
}
