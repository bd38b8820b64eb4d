// ---------------------------------------------------------------------------
// Lemmatizer – third normalization stage
// ---------------------------------------------------------------------------
// Rule-based noun lemmatization: an irregular-form exception table plus
// ordered suffix detachments. Tokens matching no exception and no rule
// come back unchanged, and the mapping is always one-to-one.

/// Irregular noun forms the suffix rules below cannot reach.
const EXCEPTIONS: &[(&str, &str)] = &[
    ("children", "child"),
    ("feet", "foot"),
    ("geese", "goose"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    ("lives", "life"),
    ("men", "man"),
    ("mice", "mouse"),
    ("oxen", "ox"),
    ("teeth", "tooth"),
    ("wives", "wife"),
    ("women", "woman"),
];

/// Ordered suffix detachments; the first applicable rule wins.
const SUFFIX_RULES: &[(&str, &str)] = &[
    ("ches", "ch"),
    ("shes", "sh"),
    ("ses", "s"),
    ("xes", "x"),
    ("zes", "z"),
    ("ves", "f"),
    ("ies", "y"),
    ("men", "man"),
];

/// Map a single token to its base form.
pub fn lemmatize_token(token: &str) -> String {
    if let Some((_, base)) = EXCEPTIONS.iter().find(|(inflected, _)| *inflected == token) {
        return (*base).to_string();
    }

    for (suffix, replacement) in SUFFIX_RULES {
        if token.len() > suffix.len() && token.ends_with(suffix) {
            return format!("{}{replacement}", &token[..token.len() - suffix.len()]);
        }
    }

    // Bare plural `s`, guarded so short words and -ss/-us/-is forms
    // (glass, status, analysis) pass through untouched.
    if token.len() >= 4
        && token.ends_with('s')
        && !token.ends_with("ss")
        && !token.ends_with("us")
        && !token.ends_with("is")
    {
        return token[..token.len() - 1].to_string();
    }

    token.to_string()
}

/// Lemmatize a token sequence one-to-one, preserving order; output length
/// always equals input length.
pub fn lemmatize(tokens: &[String]) -> Vec<String> {
    tokens.iter().map(|t| lemmatize_token(t)).collect()
}
