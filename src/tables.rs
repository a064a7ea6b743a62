//! Static substitution tables.
//!
//! Two read-only tables drive the leniency rules:
//! - [`TRANSLIT`]: Cyrillic/Latin transliteration, both directions in one
//!   table. A few Cyrillic letters accept two Latin spellings (`и` matches
//!   `i` or `y`) or a multi-character one (`ж` matches `zh`).
//! - [`LAYOUT`]: ЙЦУКЕН/QWERTY key-position pairs, both directions. Some
//!   Cyrillic letters sit on punctuation keys (`х` on `[`, `б` on `,`), so
//!   not every mapped character is itself a key.
//!
//! Characters absent from a table fall back to themselves at the call site.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Transliteration pairs: character to its acceptable counterpart
/// spellings in the other script.
pub const TRANSLIT: &[(char, &[&str])] = &[
    // Cyrillic to Latin
    ('а', &["a"]),
    ('А', &["A"]),
    ('б', &["b"]),
    ('Б', &["B"]),
    ('в', &["v"]),
    ('В', &["V"]),
    ('г', &["g"]),
    ('Г', &["G"]),
    ('д', &["d"]),
    ('Д', &["D"]),
    ('е', &["e"]),
    ('Е', &["E"]),
    ('ё', &["jo"]),
    ('Ё', &["Jo"]),
    ('ж', &["zh"]),
    ('Ж', &["Zh"]),
    ('з', &["z"]),
    ('З', &["Z"]),
    ('и', &["i", "y"]),
    ('И', &["I", "Y"]),
    ('й', &["j"]),
    ('Й', &["J"]),
    ('к', &["k"]),
    ('К', &["K"]),
    ('л', &["l"]),
    ('Л', &["L"]),
    ('м', &["m"]),
    ('М', &["M"]),
    ('н', &["n"]),
    ('Н', &["N"]),
    ('о', &["o"]),
    ('О', &["O"]),
    ('п', &["p"]),
    ('П', &["P"]),
    ('р', &["r"]),
    ('Р', &["R"]),
    ('с', &["s"]),
    ('С', &["S"]),
    ('т', &["t"]),
    ('Т', &["T"]),
    ('у', &["u"]),
    ('У', &["U"]),
    ('ф', &["f"]),
    ('Ф', &["F"]),
    ('х', &["h"]),
    ('Х', &["H"]),
    ('ц', &["c"]),
    ('Ц', &["C"]),
    ('ч', &["ch"]),
    ('Ч', &["Ch"]),
    ('ш', &["sh"]),
    ('Ш', &["Sh"]),
    ('щ', &["w"]),
    ('Щ', &["W"]),
    ('ъ', &["#"]),
    ('Ъ', &["#"]),
    ('ы', &["i"]),
    ('Ы', &["I"]),
    ('ь', &["'"]),
    ('Ь', &["'"]),
    ('э', &["e"]),
    ('Э', &["E"]),
    ('ю', &["ju"]),
    ('Ю', &["Ju"]),
    ('я', &["ja"]),
    ('Я', &["Ja"]),
    // Latin to Cyrillic
    ('a', &["а"]),
    ('A', &["А"]),
    ('b', &["б"]),
    ('B', &["Б"]),
    ('c', &["с"]),
    ('C', &["С"]),
    ('d', &["д"]),
    ('D', &["Д"]),
    ('e', &["е"]),
    ('E', &["Е"]),
    ('f', &["ф"]),
    ('F', &["Ф"]),
    ('g', &["г"]),
    ('G', &["Г"]),
    ('h', &["х"]),
    ('H', &["Х"]),
    ('i', &["и"]),
    ('I', &["И"]),
    ('j', &["ж"]),
    ('J', &["Ж"]),
    ('k', &["к"]),
    ('K', &["К"]),
    ('l', &["л"]),
    ('L', &["Л"]),
    ('m', &["м"]),
    ('M', &["М"]),
    ('n', &["н"]),
    ('N', &["Н"]),
    ('o', &["о"]),
    ('O', &["О"]),
    ('p', &["п"]),
    ('P', &["П"]),
    ('q', &["к"]),
    ('Q', &["К"]),
    ('r', &["р"]),
    ('R', &["Р"]),
    ('s', &["с"]),
    ('S', &["С"]),
    ('t', &["т"]),
    ('T', &["Т"]),
    ('u', &["у"]),
    ('U', &["У"]),
    ('v', &["в"]),
    ('V', &["В"]),
    ('w', &["в"]),
    ('W', &["В"]),
    ('x', &["х"]),
    ('X', &["Х"]),
    ('y', &["и"]),
    ('Y', &["И"]),
    ('z', &["з"]),
    ('Z', &["З"]),
];

/// Keyboard layout pairs: character to what the same physical key produces
/// under the other layout.
pub const LAYOUT: &[(char, char)] = &[
    // ЙЦУКЕН to QWERTY
    ('а', 'f'),
    ('А', 'F'),
    ('б', ','),
    ('Б', '<'),
    ('в', 'd'),
    ('В', 'D'),
    ('г', 'u'),
    ('Г', 'U'),
    ('д', 'l'),
    ('Д', 'L'),
    ('е', 't'),
    ('Е', 'T'),
    ('ё', '~'),
    ('Ё', '~'),
    ('ж', ';'),
    ('Ж', ':'),
    ('з', 'p'),
    ('З', 'P'),
    ('и', 'b'),
    ('И', 'B'),
    ('й', 'q'),
    ('Й', 'Q'),
    ('к', 'r'),
    ('К', 'R'),
    ('л', 'k'),
    ('Л', 'K'),
    ('м', 'v'),
    ('М', 'V'),
    ('н', 'y'),
    ('Н', 'Y'),
    ('о', 'j'),
    ('О', 'J'),
    ('п', 'g'),
    ('П', 'G'),
    ('р', 'h'),
    ('Р', 'H'),
    ('с', 'c'),
    ('С', 'C'),
    ('т', 'n'),
    ('Т', 'N'),
    ('у', 'e'),
    ('У', 'E'),
    ('ф', 'a'),
    ('Ф', 'A'),
    ('х', '['),
    ('Х', '{'),
    ('ц', 'w'),
    ('Ц', 'W'),
    ('ч', 'x'),
    ('Ч', 'X'),
    ('ш', 'i'),
    ('Ш', 'I'),
    ('щ', 'o'),
    ('Щ', 'O'),
    ('ъ', ']'),
    ('Ъ', '}'),
    ('ы', 's'),
    ('Ы', 'S'),
    ('ь', 'm'),
    ('Ь', 'M'),
    ('э', '\''),
    ('Э', '"'),
    ('ю', '.'),
    ('Ю', '>'),
    ('я', 'z'),
    ('Я', 'Z'),
    // QWERTY to ЙЦУКЕН
    ('a', 'ф'),
    ('A', 'Ф'),
    ('b', 'и'),
    ('B', 'И'),
    ('c', 'с'),
    ('C', 'С'),
    ('d', 'в'),
    ('D', 'В'),
    ('e', 'у'),
    ('E', 'У'),
    ('f', 'а'),
    ('F', 'А'),
    ('g', 'п'),
    ('G', 'П'),
    ('h', 'р'),
    ('H', 'Р'),
    ('i', 'ш'),
    ('I', 'Ш'),
    ('j', 'о'),
    ('J', 'О'),
    ('k', 'л'),
    ('K', 'Л'),
    ('l', 'д'),
    ('L', 'Д'),
    ('m', 'ь'),
    ('M', 'Ь'),
    ('n', 'т'),
    ('N', 'Т'),
    ('o', 'щ'),
    ('O', 'Щ'),
    ('p', 'з'),
    ('P', 'З'),
    ('q', 'й'),
    ('Q', 'Й'),
    ('r', 'к'),
    ('R', 'К'),
    ('s', 'ы'),
    ('S', 'Ы'),
    ('t', 'е'),
    ('T', 'Е'),
    ('u', 'г'),
    ('U', 'Г'),
    ('v', 'м'),
    ('V', 'М'),
    ('w', 'ц'),
    ('W', 'Ц'),
    ('x', 'ч'),
    ('X', 'Ч'),
    ('y', 'н'),
    ('Y', 'Н'),
    ('z', 'я'),
    ('Z', 'Я'),
    ('[', 'х'),
    ('{', 'Х'),
    (']', 'ъ'),
    ('}', 'Ъ'),
];

static TRANSLIT_MAP: LazyLock<HashMap<char, &'static [&'static str]>> =
    LazyLock::new(|| TRANSLIT.iter().copied().collect());

static LAYOUT_MAP: LazyLock<HashMap<char, char>> =
    LazyLock::new(|| LAYOUT.iter().copied().collect());

/// Acceptable transliterations of `c`, empty when `c` has no entry.
pub(crate) fn transliterations(c: char) -> &'static [&'static str] {
    TRANSLIT_MAP.get(&c).copied().unwrap_or(&[])
}

/// What the key producing `c` yields under the other layout, if mapped.
pub(crate) fn layout_swap(c: char) -> Option<char> {
    LAYOUT_MAP.get(&c).copied()
}
