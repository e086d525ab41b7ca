//! English number words

/// Convert an English number word to an integer.
///
/// Covers zero through ninety-nine, with compound tens joined by a space
/// or a hyphen ("twenty two", "twenty-two"). Input is expected to be
/// lowercase and trimmed. Returns `None` for anything unrecognized.
pub fn from_words(input: &str) -> Option<i64> {
    if let Some(n) = small_word(input) {
        return Some(n);
    }
    if let Some(n) = tens_word(input) {
        return Some(n);
    }

    // Compound form: a tens word plus a units word
    let (tens, unit) = input
        .split_once('-')
        .or_else(|| input.split_once(' '))?;
    let tens = tens_word(tens.trim())?;
    let unit = small_word(unit.trim()).filter(|n| (1..=9).contains(n))?;
    Some(tens + unit)
}

fn small_word(word: &str) -> Option<i64> {
    let n = match word {
        "zero" => 0,
        "one" => 1,
        "two" => 2,
        "three" => 3,
        "four" => 4,
        "five" => 5,
        "six" => 6,
        "seven" => 7,
        "eight" => 8,
        "nine" => 9,
        "ten" => 10,
        "eleven" => 11,
        "twelve" => 12,
        "thirteen" => 13,
        "fourteen" => 14,
        "fifteen" => 15,
        "sixteen" => 16,
        "seventeen" => 17,
        "eighteen" => 18,
        "nineteen" => 19,
        _ => return None,
    };
    Some(n)
}

fn tens_word(word: &str) -> Option<i64> {
    let n = match word {
        "twenty" => 20,
        "thirty" => 30,
        "forty" => 40,
        "fifty" => 50,
        "sixty" => 60,
        "seventy" => 70,
        "eighty" => 80,
        "ninety" => 90,
        _ => return None,
    };
    Some(n)
}
