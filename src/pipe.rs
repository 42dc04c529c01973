//! Ordered chains of cipher and presentation stages.
//!
//! A [`Pipe`] runs its stages in order on encode. Decoding walks the cipher
//! stages in reverse; post-processing stages only change presentation and
//! are not inverted.

use crate::cipher::Cipher;
use crate::error::CipherError;

/// Presentation transform applied to encoder output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostProcess {
    /// Full Unicode uppercase mapping.
    Uppercase,
    /// Removes every whitespace character.
    StripWhitespace,
    /// Splits non-whitespace output into space-separated groups of `size`
    /// symbols. A size of 0 leaves the text unchanged.
    Group { size: usize },
}

impl PostProcess {
    /// Rewrites `text`.
    pub fn apply(&self, text: &str) -> String {
        match *self {
            PostProcess::Uppercase => text.to_uppercase(),
            PostProcess::StripWhitespace => text.chars().filter(|c| !c.is_whitespace()).collect(),
            PostProcess::Group { size: 0 } => text.to_string(),
            PostProcess::Group { size } => {
                let symbols: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
                symbols
                    .chunks(size)
                    .map(|chunk| chunk.iter().collect::<String>())
                    .collect::<Vec<_>>()
                    .join(" ")
            }
        }
    }
}

/// One step of a [`Pipe`].
#[derive(Debug)]
pub enum Stage {
    Cipher(Cipher),
    Post(PostProcess),
}

impl From<Cipher> for Stage {
    fn from(cipher: Cipher) -> Self {
        Stage::Cipher(cipher)
    }
}

impl From<PostProcess> for Stage {
    fn from(post: PostProcess) -> Self {
        Stage::Post(post)
    }
}

/// Sequence of stages applied as one command.
///
/// # Examples
///
/// ```
/// use tabula::alphabet::builtin;
/// use tabula::cipher::{Cipher, CipherVariant};
/// use tabula::config::Context;
/// use tabula::pipe::{Pipe, PostProcess};
///
/// let ctx = Context::default();
/// let caesar = Cipher::new(builtin::english(), CipherVariant::Caesar { key: 'D' }, &ctx).unwrap();
/// let affine = Cipher::new(builtin::english(), CipherVariant::Affine { a: 5, b: 3 }, &ctx).unwrap();
///
/// let mut pipe = Pipe::new()
///     .then(caesar)
///     .then(affine)
///     .then(PostProcess::Group { size: 4 });
///
/// let sealed = pipe.encode("attack at dawn").unwrap();
/// assert_eq!(sealed.split(' ').next().map(str::len), Some(4));
/// assert_eq!(pipe.decode(&sealed).unwrap().replace(' ', ""), "attackatdawn");
/// ```
#[derive(Debug, Default)]
pub struct Pipe {
    stages: Vec<Stage>,
}

impl Pipe {
    /// Empty pipe.
    pub fn new() -> Self {
        Pipe { stages: Vec::new() }
    }

    /// Appends a stage.
    pub fn then(mut self, stage: impl Into<Stage>) -> Self {
        self.stages.push(stage.into());
        self
    }

    /// Appends a stage in place.
    pub fn push(&mut self, stage: impl Into<Stage>) {
        self.stages.push(stage.into());
    }

    /// Stages in encode order.
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Returns `true` if the pipe has no stage.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Runs every stage in order.
    ///
    /// # Errors
    /// The first error of a cipher stage.
    pub fn encode(&mut self, text: &str) -> Result<String, CipherError> {
        let mut current = text.to_string();
        for stage in self.stages.iter_mut() {
            current = match stage {
                Stage::Cipher(cipher) => cipher.encode(&current)?,
                Stage::Post(post) => post.apply(&current),
            };
        }
        Ok(current)
    }

    /// Runs the cipher stages in reverse order.
    ///
    /// Grouping or stripping applied on encode is not undone, so the
    /// result carries the whitespace layout of `text`.
    ///
    /// # Errors
    /// The first error of a cipher stage.
    pub fn decode(&mut self, text: &str) -> Result<String, CipherError> {
        let mut current = text.to_string();
        for stage in self.stages.iter_mut().rev() {
            if let Stage::Cipher(cipher) = stage {
                current = cipher.decode(&current)?;
            }
        }
        Ok(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::builtin;
    use crate::cipher::CipherVariant;
    use crate::config::Context;

    fn caesar(key: char) -> Cipher {
        Cipher::new(builtin::english(), CipherVariant::Caesar { key }, &Context::default()).unwrap()
    }

    #[test]
    fn test_post_process() {
        assert_eq!(PostProcess::Uppercase.apply("straße"), "STRASSE");
        assert_eq!(PostProcess::StripWhitespace.apply(" a b\tc\n"), "abc");
        assert_eq!(PostProcess::Group { size: 3 }.apply("ab cdefg"), "abc def g");
        assert_eq!(PostProcess::Group { size: 0 }.apply("ab cd"), "ab cd");
    }

    #[test]
    fn test_empty_pipe_is_identity() {
        let mut pipe = Pipe::new();
        assert!(pipe.is_empty());
        assert_eq!(pipe.encode("Hello").unwrap(), "Hello");
        assert_eq!(pipe.decode("Hello").unwrap(), "Hello");
    }

    #[test]
    fn test_stages_compose() {
        // B then C shifts by 1 and 2.
        let mut pipe = Pipe::new().then(caesar('B')).then(caesar('C'));
        assert_eq!(pipe.len(), 2);
        assert_eq!(pipe.encode("AXY").unwrap(), "DAB");
        assert_eq!(pipe.decode("DAB").unwrap(), "AXY");
    }

    #[test]
    fn test_decode_skips_post_stages() {
        let mut pipe = Pipe::new()
            .then(caesar('N'))
            .then(PostProcess::Uppercase)
            .then(PostProcess::StripWhitespace);
        let sealed = pipe.encode("hello world").unwrap();
        assert_eq!(sealed, "URYYBJBEYQ");
        assert_eq!(pipe.decode(&sealed).unwrap(), "HELLOWORLD");
    }
}
