//! Slugs

use unicode_normalization::UnicodeNormalization;

/// Builds a URL slug from free text.
///
/// Accents are removed (`Pádel` becomes `padel`), the text is lowercased,
/// whitespace runs become a single `-`, anything other than ASCII letters,
/// digits, `_` and `-` is dropped, and repeated or surrounding hyphens are
/// removed.
///
/// ```
/// use comercify::slugs::slugify;
///
/// assert_eq!(slugify("Camiseta de Pádel Premium!"), "camiseta-de-padel-premium");
/// ```
pub fn slugify(text: &str) -> String {
    let folded = text
        .nfd()
        .filter(|c| !is_combining_diacritic(*c))
        .collect::<String>()
        .to_lowercase();

    let mut slug = String::with_capacity(folded.len());

    for c in folded.chars() {
        if c == '-' || is_space(c) {
            if !slug.is_empty() && !slug.ends_with('-') {
                slug.push('-');
            }
        } else if c.is_ascii_alphanumeric() || c == '_' {
            slug.push(c);
        }
    }

    if slug.ends_with('-') {
        slug.pop();
    }

    slug
}

/// Whitespace as matched by `\s` in browser regular expressions.
fn is_space(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

/// Combining Diacritical Marks block.
fn is_combining_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}
