//! Pythagorean letter values and vowel classification.

/// Values for `A..=Z`, in alphabet order.
const LETTER_VALUES: [u32; 26] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, // A-I
    1, 2, 3, 4, 5, 6, 7, 8, 9, // J-R
    1, 2, 3, 4, 5, 6, 7, 8, // S-Z
];

pub const VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

/// Value of an uppercase Latin letter; anything else counts 0.
pub fn letter_value(letter: char) -> u32 {
    if letter.is_ascii_uppercase() {
        LETTER_VALUES[(letter as u8 - b'A') as usize]
    } else {
        0
    }
}

pub fn is_plain_vowel(letter: char) -> bool {
    VOWELS.contains(&letter)
}

/// Uppercases the name and keeps Latin letters only.
pub fn clean_name(name: &str) -> Vec<char> {
    name.to_uppercase()
        .chars()
        .filter(char::is_ascii_uppercase)
        .collect()
}

/// Whether the `Y` at `index` of a cleaned name acts as a vowel.
///
/// A `Y` with no plain vowel on either side is a vowel, as is a trailing `Y`
/// after a consonant. Any other letter at `index` yields `false`.
pub fn is_y_vowel(name: &[char], index: usize) -> bool {
    if name.get(index) != Some(&'Y') {
        return false;
    }

    let prev = index.checked_sub(1).and_then(|i| name.get(i)).copied();
    let next = name.get(index + 1).copied();
    let prev_is_vowel = prev.is_some_and(is_plain_vowel);
    let next_is_vowel = next.is_some_and(is_plain_vowel);

    if !prev_is_vowel && !next_is_vowel {
        return true;
    }

    index + 1 == name.len() && !prev_is_vowel
}

/// Vowel test used by Soul Urge and Personality.
pub fn is_vowel_at(name: &[char], index: usize) -> bool {
    match name.get(index) {
        Some(&'Y') => is_y_vowel(name, index),
        Some(&letter) => is_plain_vowel(letter),
        None => false,
    }
}
