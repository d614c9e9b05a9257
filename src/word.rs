use crate::error::GenerateError;

/// Seed word split into the filler character and the letters stamped while chaining.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedWord {
    original: Vec<char>,
    filler: char,
    usable: Vec<char>,
}

impl SeedWord {
    pub const MIN_LEN: usize = 2;

    /// The filler is the character at index 1; the usable word is the original with that character removed.
    pub fn parse(word: &str) -> Result<Self, GenerateError> {
        let original: Vec<char> = word.chars().collect();
        if original.len() < Self::MIN_LEN {
            return Err(GenerateError::WordTooShort { len: original.len() });
        }
        let mut usable = original.clone();
        let filler = usable.remove(1);
        Ok(Self { original, filler, usable })
    }

    pub fn filler(&self) -> char { self.filler }

    /// Length of the word as given, which sets the filler density.
    pub fn len(&self) -> usize { self.original.len() }

    pub fn is_empty(&self) -> bool { self.original.is_empty() }

    pub fn usable(&self) -> &[char] { &self.usable }

    /// Usable letter for the `n`-th chaining iteration, cycling.
    pub fn letter(&self, n: usize) -> char { self.usable[n % self.usable.len()] }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_second_character() {
        let w = SeedWord::parse("ABC").unwrap();
        assert_eq!(w.filler(), 'B');
        assert_eq!(w.usable(), &['A', 'C']);
        assert_eq!(w.len(), 3);
        assert_eq!((0..5).map(|n| w.letter(n)).collect::<String>(), "ACACA");
    }

    #[test]
    fn rejects_short_words() {
        assert_eq!(SeedWord::parse("A"), Err(GenerateError::WordTooShort { len: 1 }));
        assert_eq!(SeedWord::parse(""), Err(GenerateError::WordTooShort { len: 0 }));
    }

    #[test]
    fn counts_characters_not_bytes() {
        let w = SeedWord::parse("żółw").unwrap();
        assert_eq!(w.len(), 4);
        assert_eq!(w.filler(), 'ó');
    }
}
