//! Roman numeral encoding for enchantment levels.
//!
//! Levels are stored in lore as upper-case Roman numerals (`Sharpness IV`).
//! Only the canonical subtractive form is accepted when decoding, which keeps
//! [`encode`] and [`decode`] inverse to each other over `1..=MAX_LEVEL`.

/// Highest level that can be represented.
pub const MAX_LEVEL: u32 = 3999;

/// Lowest level that can be represented.
pub const MIN_LEVEL: u32 = 1;

const SYMBOLS: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Clamps a level into the representable range.
pub const fn clamp_level(level: u32) -> u32 {
    if level < MIN_LEVEL {
        MIN_LEVEL
    } else if level > MAX_LEVEL {
        MAX_LEVEL
    } else {
        level
    }
}

/// Encodes a level as a Roman numeral.
///
/// Levels outside `MIN_LEVEL..=MAX_LEVEL` are clamped first, so `encode(0)`
/// is `"I"` and anything above `MAX_LEVEL` encodes as `"MMMCMXCIX"`.
pub fn encode(level: u32) -> String {
    let mut remaining = clamp_level(level);
    let mut out = String::new();
    for (value, symbol) in SYMBOLS {
        while remaining >= value {
            out.push_str(symbol);
            remaining -= value;
        }
    }
    out
}

/// Decodes a Roman numeral, returning 0 when `text` is not a canonical numeral.
///
/// Lower-case input, non-canonical forms (`IIII`, `IC`, `VX`) and anything
/// outside the supported range all yield 0.
pub fn decode(text: &str) -> u32 {
    if text.is_empty() || text.len() > 15 {
        return 0;
    }

    let mut total = 0u32;
    let mut previous = 0u32;
    for ch in text.chars().rev() {
        let Some(value) = symbol_value(ch) else {
            return 0;
        };
        if value < previous {
            match total.checked_sub(value) {
                Some(next) => total = next,
                None => return 0,
            }
        } else {
            total += value;
            previous = value;
        }
    }

    // Accept only the canonical spelling of the decoded value.
    if (MIN_LEVEL..=MAX_LEVEL).contains(&total) && encode(total) == text {
        total
    } else {
        0
    }
}

/// Returns true if `text` is a canonical numeral.
pub fn is_numeral(text: &str) -> bool {
    decode(text) > 0
}

const fn symbol_value(ch: char) -> Option<u32> {
    match ch {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}
