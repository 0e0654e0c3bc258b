//! English number names.
//!
//! Turns integers into the words a narrator says ("forty two", "one thousand
//! one"). The output doubles as the lookup key for recorded number clips.

const ONES: [&str; 20] = [
    "", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen", "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Scale words; index `k` names `1000^k`.
const SCALES: [&str; 12] = [
    "",
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
    "sextillion",
    "septillion",
    "octillion",
    "nonillion",
    "decillion",
];

/// Renders `n` in English words.
///
/// Negative numbers are prefixed with "negative" and zero is "zero".
/// Magnitudes of a thousand or more are split on the largest scale word that
/// fits (falling back to "decillion" beyond its range) and each part is
/// rendered recursively. Words are separated by single spaces.
///
/// ```
/// use speakophone_engine::numbers::number_to_words;
///
/// assert_eq!(number_to_words(42), "forty two");
/// assert_eq!(number_to_words(-7), "negative seven");
/// assert_eq!(number_to_words(1001), "one thousand one");
/// ```
pub fn number_to_words(n: impl Into<i128>) -> String {
    let n = n.into();
    if n == 0 {
        return "zero".to_string();
    }
    let magnitude = say_positive(n.unsigned_abs());
    if n < 0 {
        join(&["negative", &magnitude])
    } else {
        magnitude
    }
}

fn say_positive(n: u128) -> String {
    if n < 20 {
        return ONES[n as usize].to_string();
    }
    if n < 100 {
        return join(&[TENS[(n / 10) as usize], ONES[(n % 10) as usize]]);
    }
    if n < 1000 {
        return divide(n, 100, "hundred");
    }

    let mut scale = SCALES.len() - 1;
    for k in 1..SCALES.len() {
        if n < 1000u128.pow(k as u32 + 1) {
            scale = k;
            break;
        }
    }
    divide(n, 1000u128.pow(scale as u32), SCALES[scale])
}

fn divide(dividend: u128, divisor: u128, magnitude: &str) -> String {
    join(&[
        &say_positive(dividend / divisor),
        magnitude,
        &say_positive(dividend % divisor),
    ])
}

fn join(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}
