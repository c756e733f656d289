//! Terminal rendering of lookup results

use std::io::{self, Write};

use collins::{Derivation, DictionaryEntry, Lookup, Sense};
use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

use crate::utils::Truncatable;
use crate::wrap::Wrap;

/// The glyph in front of every headword.
const HEADWORD_MARKER: &str = "✦";
/// The glyph a rule between two entries is drawn with.
const RULE: &str = "―";
/// The number of columns details of a sense are indented by.
const INDENT: usize = 4;
/// The marker in front of a usage example.
const EXAMPLE_MARKER: &str = "-> ";
/// The marker in front of a truncated suggestion.
const ELLIPSIS: &str = "…";

/// How a list of synonyms is turned into a line of text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SynonymJoin {
    /// Every synonym is listed.
    #[default]
    Complete,
    /// The last synonym is left out when there is more than one, as the site tends to end the
    /// list with a link to its thesaurus.
    LegacyTruncated,
}

impl SynonymJoin {
    /// Joins `synonyms` with commas.
    ///
    /// ```rust
    /// use dict::render::SynonymJoin;
    ///
    /// let synonyms = ["glad".to_string(), "more synonyms".to_string()];
    ///
    /// assert_eq!(SynonymJoin::Complete.join(&synonyms), "glad, more synonyms");
    /// assert_eq!(SynonymJoin::LegacyTruncated.join(&synonyms), "glad");
    /// ```
    #[must_use]
    pub fn join(self, synonyms: &[String]) -> String {
        let synonyms = match (self, synonyms) {
            (SynonymJoin::LegacyTruncated, [rest @ .., _]) if !rest.is_empty() => rest,
            _ => synonyms,
        };

        synonyms.join(", ")
    }
}

/// Renders lookup results as text for a terminal of a fixed width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    /// The number of columns of the terminal.
    width: usize,
    /// How synonyms are joined.
    synonyms: SynonymJoin,
}

impl Renderer {
    /// Creates a renderer for a terminal that is `width` columns wide.
    #[must_use]
    pub const fn new(width: usize) -> Renderer {
        Renderer {
            width,
            synonyms: SynonymJoin::Complete,
        }
    }

    /// Sets how lists of synonyms are joined.
    #[must_use]
    pub const fn synonyms(mut self, synonyms: SynonymJoin) -> Renderer {
        self.synonyms = synonyms;
        self
    }

    /// Writes the result of looking up `term` to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn render<W: Write>(&self, out: &mut W, term: &str, lookup: &Lookup) -> io::Result<()> {
        match lookup {
            Lookup::Entries(entries) => self.entries(out, entries),
            Lookup::Suggestions(suggestions) => {
                not_found(out, term)?;
                self.suggestions(out, suggestions)
            }
            Lookup::NotFound => not_found(out, term),
        }
    }

    fn entries<W: Write>(&self, out: &mut W, entries: &[DictionaryEntry]) -> io::Result<()> {
        for (idx, entry) in entries.iter().enumerate() {
            if idx > 0 {
                writeln!(out, "{}", RULE.repeat(self.width))?;
            }

            self.entry(out, entry)?;
        }

        Ok(())
    }

    fn entry<W: Write>(&self, out: &mut W, entry: &DictionaryEntry) -> io::Result<()> {
        write!(out, "{HEADWORD_MARKER} {}", entry.headword)?;

        if let Some(ref pronunciation) = entry.pronunciation {
            write!(out, " [{pronunciation}]")?;
        }

        writeln!(out)?;

        if let Some(ref generalization) = entry.generalization {
            write!(out, "\n{generalization}\n")?;
        }

        if !entry.word_forms.is_empty() {
            writeln!(out, "Word forms: {}", entry.word_forms.join(", "))?;
        }

        for sense in &entry.senses {
            self.sense(out, sense)?;
        }

        Ok(())
    }

    fn sense<W: Write>(&self, out: &mut W, sense: &Sense) -> io::Result<()> {
        let prefix = sense.number.map(|n| format!("{n}. ")).unwrap_or_default();

        write!(out, "\n{prefix}")?;

        if sense.grammar_labels.is_empty() {
            Wrap::new(self.width)
                .indent(prefix.width())
                .write(out, &sense.definition)?;
        } else {
            write!(
                out,
                "{}\n{:INDENT$}",
                sense.grammar_labels.join(", "),
                ""
            )?;
            Wrap::new(self.width)
                .indent(INDENT)
                .write(out, &sense.definition)?;
        }

        if let Some(ref example) = sense.example {
            writeln!(out)?;
            self.example(out, INDENT, example)?;
        }

        if !sense.derivations.is_empty() {
            write!(out, "\n{:INDENT$}Derivations:\n", "")?;

            for derivation in &sense.derivations {
                self.derivation(out, derivation)?;
            }
        }

        self.synonym_line(out, INDENT, &sense.synonyms)
    }

    fn derivation<W: Write>(&self, out: &mut W, derivation: &Derivation) -> io::Result<()> {
        write!(out, "{:INDENT$}- {}", "", derivation.form)?;

        if !derivation.grammar_labels.is_empty() {
            write!(out, " ({})", derivation.grammar_labels.join(", "))?;
        }

        writeln!(out)?;

        if let Some(ref example) = derivation.example {
            self.example(out, INDENT * 2, example)?;
        }

        self.synonym_line(out, INDENT * 2, &derivation.synonyms)
    }

    /// Writes a usage example at `indent`, with continuation lines aligned after the marker.
    fn example<W: Write>(&self, out: &mut W, indent: usize, example: &str) -> io::Result<()> {
        write!(out, "{:indent$}{EXAMPLE_MARKER}", "")?;

        Wrap::new(self.width)
            .indent(indent + EXAMPLE_MARKER.len())
            .write(out, example)
    }

    fn synonym_line<W: Write>(
        &self,
        out: &mut W,
        indent: usize,
        synonyms: &[String],
    ) -> io::Result<()> {
        let synonyms = self.synonyms.join(synonyms);

        if synonyms.is_empty() {
            return Ok(());
        }

        let label = "Synonyms: ";
        write!(out, "{:indent$}{label}", "")?;

        Wrap::new(self.width)
            .first_line_indent(indent + label.len())
            .continuation_indent(indent)
            .write(out, &synonyms)
    }

    /// Writes suggestions in two columns, the first half on the left.
    fn suggestions<W: Write>(&self, out: &mut W, suggestions: &[String]) -> io::Result<()> {
        let column = self.width / 2;
        let half = suggestions.len() / 2;
        let (left, right) = suggestions.split_at(half);
        let (middle, right) = right.split_at(right.len() - half);

        writeln!(out, "Maybe you mean:")?;

        for (left, right) in left.iter().zip(right) {
            writeln!(out, "{}{right}", cell(left, column))?;
        }

        for suggestion in middle {
            writeln!(out, "{suggestion}")?;
        }

        Ok(())
    }
}

fn not_found<W: Write>(out: &mut W, term: &str) -> io::Result<()> {
    writeln!(out, "No word or phrase named \"{term}\"")
}

/// Pads `text` to `width` columns, truncating it first if it would leave no gap to the next
/// column.
fn cell(text: &str, width: usize) -> String {
    if text.width() < width {
        return text.pad_to_width(width).into_owned();
    }

    let truncated = text.truncate_with_suffix(width.saturating_sub(2), ELLIPSIS);

    truncated.pad_to_width(width).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(renderer: Renderer, term: &str, lookup: &Lookup) -> String {
        let mut out = Vec::new();
        renderer.render(&mut out, term, lookup).expect("render");

        String::from_utf8(out).expect("utf-8 output")
    }

    fn suggestions(words: &[&str]) -> Lookup {
        Lookup::Suggestions(words.iter().map(ToString::to_string).collect())
    }

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(ToString::to_string).collect()
    }

    fn sense(number: Option<usize>, labels: &[&str], definition: &str) -> Sense {
        Sense {
            number,
            grammar_labels: strings(labels),
            definition: definition.to_string(),
            example: None,
            derivations: Vec::new(),
            synonyms: Vec::new(),
        }
    }

    fn entry(headword: &str, senses: Vec<Sense>) -> DictionaryEntry {
        DictionaryEntry {
            headword: headword.to_string(),
            pronunciation: None,
            generalization: None,
            word_forms: Vec::new(),
            senses,
        }
    }

    #[test]
    fn not_found() {
        assert_eq!(
            rendered(Renderer::new(80), "xyzzy", &Lookup::NotFound),
            "No word or phrase named \"xyzzy\"\n"
        );
    }

    #[test]
    fn odd_suggestions_end_with_the_middle_one() {
        assert_eq!(
            rendered(Renderer::new(20), "cta", &suggestions(&["cat", "bat", "rat"])),
            "No word or phrase named \"cta\"\nMaybe you mean:\ncat       rat\nbat\n"
        );
    }

    #[test]
    fn even_suggestions_fill_both_columns() {
        assert_eq!(
            rendered(
                Renderer::new(16),
                "x",
                &suggestions(&["alpha", "beta", "gamma", "delta"])
            ),
            "No word or phrase named \"x\"\nMaybe you mean:\nalpha   gamma\nbeta    delta\n"
        );
    }

    #[test]
    fn single_suggestion() {
        assert_eq!(
            rendered(Renderer::new(20), "x", &suggestions(&["cat"])),
            "No word or phrase named \"x\"\nMaybe you mean:\ncat\n"
        );
    }

    #[test]
    fn long_suggestions_are_truncated() {
        assert_eq!(
            rendered(
                Renderer::new(20),
                "x",
                &suggestions(&["incomprehensible", "tenletters", "x", "y"])
            ),
            "No word or phrase named \"x\"\nMaybe you mean:\nincompre… x\ntenlette… y\n"
        );
    }

    #[test]
    fn single_sense_is_not_numbered() {
        let lookup = Lookup::Entries(vec![entry(
            "got",
            vec![sense(None, &[], "the past tense of get")],
        )]);

        assert_eq!(
            rendered(Renderer::new(40), "got", &lookup),
            "✦ got\n\nthe past tense of get\n"
        );
    }

    #[test]
    fn numbered_definitions_align_under_the_number() {
        let lookup = Lookup::Entries(vec![entry(
            "run",
            vec![
                sense(Some(1), &[], "to move quickly on foot"),
                sense(Some(2), &[], "short"),
            ],
        )]);

        assert_eq!(
            rendered(Renderer::new(16), "run", &lookup),
            "✦ run\n\n1. to move\n   quickly on\n   foot\n\n2. short\n"
        );
    }

    #[test]
    fn labels_precede_an_indented_definition() {
        let lookup = Lookup::Entries(vec![entry(
            "run",
            vec![
                sense(Some(1), &["verb", "intransitive"], "to move quickly"),
                sense(Some(2), &["noun"], "a race"),
            ],
        )]);

        assert_eq!(
            rendered(Renderer::new(14), "run", &lookup),
            "✦ run\n\n1. verb, intransitive\n    to move\n    quickly\n\n2. noun\n    a race\n"
        );
    }

    #[test]
    fn header_lines() {
        let lookup = Lookup::Entries(vec![DictionaryEntry {
            headword: "gotten".to_string(),
            pronunciation: Some("ˈɡɒtᵊn".to_string()),
            generalization: Some("mainly US".to_string()),
            word_forms: strings(&["got", "getting"]),
            senses: vec![Sense::cross_reference("See get.".to_string())],
        }]);

        assert_eq!(
            rendered(Renderer::new(40), "gotten", &lookup),
            "✦ gotten [ˈɡɒtᵊn]\n\nmainly US\nWord forms: got, getting\n\nSee get.\n"
        );
    }

    #[test]
    fn entries_are_separated_by_a_rule() {
        let lookup = Lookup::Entries(vec![
            entry("a", vec![sense(None, &[], "one")]),
            entry("b", vec![sense(None, &[], "two")]),
        ]);

        assert_eq!(
            rendered(Renderer::new(5), "a", &lookup),
            "✦ a\n\none\n―――――\n✦ b\n\ntwo\n"
        );
    }

    #[test]
    fn example_derivations_and_synonyms() {
        let mut happy = sense(None, &["adjective"], "feeling pleasure");
        happy.example = Some("She was a happy child.".to_string());
        happy.derivations = vec![
            Derivation {
                form: "happily".to_string(),
                grammar_labels: strings(&["adverb"]),
                example: Some("They smiled happily.".to_string()),
                synonyms: Vec::new(),
            },
            Derivation {
                form: "happiness".to_string(),
                grammar_labels: Vec::new(),
                example: None,
                synonyms: strings(&["joy"]),
            },
        ];
        happy.synonyms = strings(&["cheerful", "glad", "content"]);

        let lookup = Lookup::Entries(vec![entry("happy", vec![happy])]);

        assert_eq!(
            rendered(Renderer::new(30), "happy", &lookup),
            "✦ happy\n\
             \n\
             adjective\n    \
             feeling pleasure\n\
             \n    \
             -> She was a happy child.\n\
             \n    \
             Derivations:\n    \
             - happily (adverb)\n        \
             -> They smiled\n           \
             happily.\n    \
             - happiness\n        \
             Synonyms: joy\n    \
             Synonyms: cheerful, glad,\n    \
             content\n"
        );
    }

    #[test]
    fn legacy_synonyms_drop_the_last_one() {
        let mut glad = sense(None, &[], "pleased");
        glad.synonyms = strings(&["happy", "More Synonyms of glad"]);
        let lookup = Lookup::Entries(vec![entry("glad", vec![glad])]);

        assert_eq!(
            rendered(
                Renderer::new(40).synonyms(SynonymJoin::LegacyTruncated),
                "glad",
                &lookup
            ),
            "✦ glad\n\npleased\n    Synonyms: happy\n"
        );
    }

    #[test]
    fn synonym_join() {
        let one = strings(&["glad"]);

        assert_eq!(SynonymJoin::Complete.join(&one), "glad");
        assert_eq!(SynonymJoin::LegacyTruncated.join(&one), "glad");
        assert_eq!(SynonymJoin::LegacyTruncated.join(&[]), "");
    }
}
