pub const LATIN_LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
pub const LATIN_UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()-_=+[]{}|;:',.<>?";
pub const CYRILLIC_LOWER: &str = "абвгдеёжзийклмнопрстуфхцчшщъыьэюя";
pub const CYRILLIC_UPPER: &str = "АБВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯ";

#[derive(Debug, PartialEq, Eq)]
pub enum CharsetError {
    NoneSelected,
}

impl std::fmt::Display for CharsetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return match self {
            Self::NoneSelected => f.write_str("At least one character set must be selected"),
        };
    }
}

impl std::error::Error for CharsetError {}

/// One named flag per alphabet, in pool order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharsetSelection {
    pub latin_lower: bool,
    pub latin_upper: bool,
    pub digits: bool,
    pub symbols: bool,
    pub cyrillic_lower: bool,
    pub cyrillic_upper: bool,
}

impl CharsetSelection {
    pub fn none() -> CharsetSelection {
        CharsetSelection {
            latin_lower: false,
            latin_upper: false,
            digits: false,
            symbols: false,
            cyrillic_lower: false,
            cyrillic_upper: false,
        }
    }

    pub fn all() -> CharsetSelection {
        CharsetSelection {
            latin_lower: true,
            latin_upper: true,
            digits: true,
            symbols: true,
            cyrillic_lower: true,
            cyrillic_upper: true,
        }
    }
}

/// The ordered pool of characters eligible for random selection.
/// Non-empty once built, immutable for the rest of the run.
#[derive(Debug)]
pub struct CharacterPool {
    chars: Vec<char>,
}

impl CharacterPool {
    pub fn build(selection: &CharsetSelection) -> Result<CharacterPool, CharsetError> {
        let mut chars = Vec::new();

        if selection.latin_lower {
            chars.extend(LATIN_LOWER.chars());
        }
        if selection.latin_upper {
            chars.extend(LATIN_UPPER.chars());
        }
        if selection.digits {
            chars.extend(DIGITS.chars());
        }
        if selection.symbols {
            chars.extend(SYMBOLS.chars());
        }
        if selection.cyrillic_lower {
            chars.extend(CYRILLIC_LOWER.chars());
        }
        if selection.cyrillic_upper {
            chars.extend(CYRILLIC_UPPER.chars());
        }

        if chars.is_empty() {
            return Err(CharsetError::NoneSelected);
        }

        Ok(CharacterPool { chars })
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn char_at(&self, index: usize) -> char {
        self.chars[index]
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn get_chars(&self) -> &[char] {
        &self.chars
    }
}
