//! The seven canonical Roman letters and their values.
//!
//! Both directions of the lookup are answered from the single [`SYMBOLS`]
//! list, so the letter→value and value→letter views can never disagree.

/// One entry of the symbol table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    pub letter: char,
    pub value: u32,
}

/// Canonical symbols in ascending value order.
pub const SYMBOLS: [Symbol; 7] = [
    Symbol { letter: 'I', value: 1 },
    Symbol { letter: 'V', value: 5 },
    Symbol { letter: 'X', value: 10 },
    Symbol { letter: 'L', value: 50 },
    Symbol { letter: 'C', value: 100 },
    Symbol { letter: 'D', value: 500 },
    Symbol { letter: 'M', value: 1000 },
];

/// Value of a Roman letter, or `None` for anything else (including lowercase).
pub fn value_of(letter: char) -> Option<u32> {
    SYMBOLS
        .iter()
        .find(|s| s.letter == letter)
        .map(|s| s.value)
}

/// Letter for an exact table value, or `None` if no letter has that value.
pub fn letter_for(value: u64) -> Option<char> {
    SYMBOLS
        .iter()
        .find(|s| u64::from(s.value) == value)
        .map(|s| s.letter)
}
