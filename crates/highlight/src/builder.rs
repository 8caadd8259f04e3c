use canonical::{stem, stem_all, tokens};
use fxhash::FxHashSet;
use matcher::SourceMatch;
use tracing::debug;

use crate::{HIGHLIGHT_END, HIGHLIGHT_START};

/// Sources scoring strictly above this take part in highlighting.
pub const DEFAULT_HIGHLIGHT_THRESHOLD: f64 = 0.3;

/// Wrap every token of `original` whose stem also occurs in a high-similarity
/// source (score > 0.3) in highlight markers.
///
/// Tokens are rejoined with single spaces, so whitespace layout is not
/// preserved; punctuation stays attached to its token.
pub fn build_highlighted_text(original: &str, ranked: &[SourceMatch]) -> String {
    build_highlighted_text_with_threshold(original, ranked, DEFAULT_HIGHLIGHT_THRESHOLD)
}

/// [`build_highlighted_text`] with an explicit source threshold.
pub fn build_highlighted_text_with_threshold(
    original: &str,
    ranked: &[SourceMatch],
    threshold: f64,
) -> String {
    // Stems of every token of every qualifying source, pooled.
    let source_stems: FxHashSet<String> = ranked
        .iter()
        .filter(|m| m.score > threshold)
        .flat_map(|m| stem_all(&m.text))
        .collect();

    let mut out = String::with_capacity(original.len());
    let mut token_count = 0usize;
    let mut marked = 0usize;

    for token in tokens(original) {
        if token_count > 0 {
            out.push(' ');
        }
        token_count += 1;

        if !source_stems.is_empty() && source_stems.contains(&stem(token)) {
            marked += 1;
            out.push_str(HIGHLIGHT_START);
            out.push_str(token);
            out.push_str(HIGHLIGHT_END);
        } else {
            out.push_str(token);
        }
    }

    debug!(
        threshold,
        source_stems = source_stems.len(),
        tokens = token_count,
        marked,
        "built highlighted text"
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(id: usize, score: f64, text: &str) -> SourceMatch {
        SourceMatch {
            id,
            score,
            text: text.to_string(),
        }
    }

    #[test]
    fn no_high_similarity_source_marks_nothing() {
        let ranked = vec![source(0, 0.3, "deep learning"), source(1, 0.1, "learning")];
        let out = build_highlighted_text("Deep   learning\nrocks", &ranked);
        assert_eq!(out, "Deep learning rocks");
    }

    #[test]
    fn marks_tokens_sharing_a_stem() {
        let ranked = vec![source(0, 0.8, "Machine learning systems")];
        let out = build_highlighted_text("LEARNED system, machine!", &ranked);
        // "learned" -> "learn" == stem("learning"); "system," keeps its comma
        // so its stem is "system," which does not match.
        assert_eq!(out, "<mark>LEARNED</mark> system, machine!");
    }

    #[test]
    fn any_qualifying_source_is_enough() {
        let ranked = vec![
            source(0, 0.9, "alpha"),
            source(1, 0.5, "beta"),
            source(2, 0.2, "gamma"),
        ];
        let out = build_highlighted_text("alpha beta gamma", &ranked);
        assert_eq!(out, "<mark>alpha</mark> <mark>beta</mark> gamma");
    }

    #[test]
    fn preserves_original_casing_inside_markers() {
        let ranked = vec![source(0, 1.0, "natural language")];
        let out = build_highlighted_text("Natural LANGUAGE", &ranked);
        assert_eq!(out, "<mark>Natural</mark> <mark>LANGUAGE</mark>");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let ranked = vec![source(0, 1.0, "anything")];
        assert_eq!(build_highlighted_text("", &ranked), "");
        assert_eq!(build_highlighted_text(" \n ", &ranked), "");
    }

    #[test]
    fn custom_threshold() {
        let ranked = vec![source(0, 0.2, "vision")];
        assert_eq!(
            build_highlighted_text_with_threshold("vision", &ranked, 0.1),
            "<mark>vision</mark>"
        );
        assert_eq!(build_highlighted_text("vision", &ranked), "vision");
    }
}
