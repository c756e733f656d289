//! Structured types
use scraper::Html;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Error;
use crate::dom::{Node, Selector};
use crate::text::{normalize, skip_first_char, strip_last_chars};

/// Class names and tags of the site's markup.
mod markup {
    use crate::dom::Selector::{self, Class, Tag};

    pub const ARTICLE: Selector = Class("cobuild");
    pub const TITLE_CONTAINER: Selector = Class("title_container");
    pub const HEADING: Selector = Class("h2_entry");
    pub const ORTH: Selector = Class("orth");
    pub const PRONUNCIATION_BLOCK: Selector = Class("mini_h2");
    pub const NOTE: Selector = Class("note");
    pub const SPAN: Selector = Tag("span");
    pub const LABEL: Selector = Class("lbl");
    pub const INFLECTIONS: Selector = Class("type-infl");
    pub const HOMONYM: Selector = Class("hom");
    pub const DEFINITION: Selector = Class("def");
    pub const CROSS_REFERENCE: Selector = Class("xr");
    pub const GRAMMAR_GROUP: Selector = Class("gramGrp");
    pub const PART_OF_SPEECH: Selector = Class("pos");
    pub const QUOTE: Selector = Class("quote");
    pub const DERIVATION: Selector = Class("type-drv");
    pub const THESAURUS: Selector = Class("thes");
    pub const REFERENCE: Selector = Class("ref");
    pub const SUGGESTIONS: Selector = Class("suggested_words");
    pub const LIST_ITEM: Selector = Tag("li");
    pub const BODY: Selector = Tag("body");

    /// Exact `class` attribute of a span holding a phonetic respelling.
    pub const PRONUNCIATION_CLASS: &str = "pron";
    /// Exact `class` attribute of a span holding a headword.
    pub const HEADWORD_CLASS: &str = "orth";
}

/// Number of trailing characters the site appends to a pronunciation span.
const PRONUNCIATION_SUFFIX_LEN: usize = 3;

/// The outcome of looking up a term.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "kind", content = "results", rename_all = "snake_case")
)]
pub enum Lookup {
    /// The page contained one or more dictionary entries.
    Entries(Vec<DictionaryEntry>),
    /// The page had no entry, but offered alternative spellings.
    Suggestions(Vec<String>),
    /// The page had neither an entry nor any suggestions.
    NotFound,
}

/// One dictionary article for a headword.
///
/// # HTML Source
/// Parsed from every other element classed `cobuild`, as the site emits each article twice.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DictionaryEntry {
    /// The term as rendered by the site, e.g. `apple`
    ///
    /// Parsed from the `orth` of the `title_container`, or from `h2_entry` when there is no title
    /// container
    pub headword: String,
    /// Phonetic respelling, e.g. `ˈæp.əl`
    ///
    /// Parsed from the first `<span class="pron">` of `mini_h2`, falling back to `note`
    pub pronunciation: Option<String>,
    /// A usage or domain label attached to the headword
    ///
    /// Parsed from `lbl` within the `title_container`
    pub generalization: Option<String>,
    /// Inflected forms, e.g. `apples`
    ///
    /// Parsed from the `orth` elements of `type-infl`
    pub word_forms: Vec<String>,
    /// The meanings of the headword
    ///
    /// Parsed from `hom` elements. An article without any is represented by a single sense
    /// holding its cross-reference.
    pub senses: Vec<Sense>,
}

/// One meaning of a dictionary entry.
///
/// # HTML Source
/// Parsed from a `hom` element
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sense {
    /// The 1-based position of the sense, present only when the entry has more than one
    pub number: Option<usize>,
    /// Part of speech and grammar tags, e.g. `countable noun`
    pub grammar_labels: Vec<String>,
    /// The definition, or a cross-reference when the site has no definition
    pub definition: String,
    /// A usage quotation
    pub example: Option<String>,
    /// Words derived from the headword
    pub derivations: Vec<Derivation>,
    /// Words with a similar meaning
    pub synonyms: Vec<String>,
}

/// A word derived from the headword, e.g. `happiness` under `happy`.
///
/// # HTML Source
/// Parsed from every other element classed `type-drv`, as the site duplicates each derivation
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Derivation {
    /// The derived word
    pub form: String,
    /// Part of speech and grammar tags
    pub grammar_labels: Vec<String>,
    /// A usage quotation
    pub example: Option<String>,
    /// Words with a similar meaning
    pub synonyms: Vec<String>,
}

impl Lookup {
    /// Parses a complete search result page.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingElement`] if an element the site always provides is missing.
    pub fn from_html(html: impl AsRef<str>) -> Result<Lookup, Error> {
        let document = Html::parse_document(html.as_ref());
        let body = document
            .root_element()
            .find_first(markup::BODY)
            .ok_or(Error::MissingElement("body"))?;

        Lookup::from_node(body)
    }

    /// Extracts the lookup outcome from the `body` of a search result page.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingElement`] if an element the site always provides is missing.
    pub fn from_node<N: Node>(body: N) -> Result<Lookup, Error> {
        let articles = body.find_all(markup::ARTICLE);

        if articles.is_empty() {
            return Ok(match body.find_first(markup::SUGGESTIONS) {
                Some(suggestions) => Lookup::Suggestions(texts(suggestions, markup::LIST_ITEM)),
                None => Lookup::NotFound,
            });
        }

        let entries = articles
            .into_iter()
            .step_by(2)
            .map(DictionaryEntry::from_node)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Lookup::Entries(entries))
    }
}

impl DictionaryEntry {
    /// Extracts a dictionary entry from an article element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingElement`] if the article has no headword, or if an element the
    /// site always provides for a sense or derivation is missing.
    pub fn from_node<N: Node>(article: N) -> Result<DictionaryEntry, Error> {
        let title = article.find_first(markup::TITLE_CONTAINER);
        let headword = match title {
            Some(title) => title.find_first(markup::ORTH),
            None => article.find_first(markup::HEADING),
        }
        .map(|elem| normalize(&elem.text()))
        .ok_or(Error::MissingElement("headword"))?;
        let generalization = title
            .and_then(|title| title.find_first(markup::LABEL))
            .map(|label| normalize(skip_first_char(&label.text())));
        let word_forms = article
            .find_first(markup::INFLECTIONS)
            .map(|inflections| texts(inflections, markup::ORTH))
            .unwrap_or_default();

        Ok(DictionaryEntry {
            headword,
            pronunciation: pronunciation(article),
            generalization,
            word_forms,
            senses: senses(article)?,
        })
    }
}

impl Sense {
    /// Extracts a sense from a `hom` element.
    ///
    /// Returns `Ok(None)` if the element has neither a definition nor a cross-reference.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingElement`] if a derivation has no form.
    pub fn from_node<N: Node>(block: N, number: Option<usize>) -> Result<Option<Sense>, Error> {
        let Some(definition) = block
            .find_first(markup::DEFINITION)
            .or_else(|| block.find_first(markup::CROSS_REFERENCE))
        else {
            return Ok(None);
        };

        let derivations = block
            .find_all(markup::DERIVATION)
            .into_iter()
            .step_by(2)
            .map(Derivation::from_node)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(Sense {
            number,
            grammar_labels: grammar_labels(block),
            definition: normalize(&definition.text()),
            example: example(block),
            derivations,
            synonyms: synonyms(block),
        }))
    }

    /// Returns a sense made of nothing but a cross-reference to another entry.
    #[must_use]
    pub const fn cross_reference(reference: String) -> Sense {
        Sense {
            number: None,
            grammar_labels: Vec::new(),
            definition: reference,
            example: None,
            derivations: Vec::new(),
            synonyms: Vec::new(),
        }
    }
}

impl Derivation {
    /// Extracts a derivation from a `type-drv` element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingElement`] if the element has no `orth`.
    pub fn from_node<N: Node>(block: N) -> Result<Derivation, Error> {
        let form = block
            .find_first(markup::ORTH)
            .map(|orth| normalize(&orth.text()))
            .ok_or(Error::MissingElement("derivation form"))?;

        Ok(Derivation {
            form,
            grammar_labels: texts(block, markup::PART_OF_SPEECH),
            example: example(block),
            synonyms: synonyms(block),
        })
    }
}

/// Collects the senses of an article.
///
/// Extraction stops at the first sense without a definition or cross-reference, keeping the
/// senses before it.
fn senses<N: Node>(article: N) -> Result<Vec<Sense>, Error> {
    let blocks = article.find_all(markup::HOMONYM);

    if blocks.is_empty() {
        let reference = article
            .find_first(markup::CROSS_REFERENCE)
            .ok_or(Error::MissingElement("cross-reference"))?;

        return Ok(vec![Sense::cross_reference(normalize(&reference.text()))]);
    }

    let numbered = blocks.len() > 1;
    let mut senses = Vec::with_capacity(blocks.len());

    for (idx, block) in blocks.into_iter().enumerate() {
        let number = numbered.then_some(idx + 1);

        match Sense::from_node(block, number)? {
            Some(sense) => senses.push(sense),
            None => break,
        }
    }

    Ok(senses)
}

/// Finds the pronunciation of an article.
fn pronunciation<N: Node>(article: N) -> Option<String> {
    let mut spans = article
        .find_first(markup::PRONUNCIATION_BLOCK)
        .map(|block| block.find_all(markup::SPAN))
        .unwrap_or_default();

    if spans.is_empty()
        && let Some(note) = article.find_first(markup::NOTE)
    {
        spans = note.find_all(markup::SPAN);
    }

    scan_pronunciation(&spans)
}

/// Returns the pronunciation held by the first `pron` span in `spans`.
///
/// A pronunciation block may list the pronunciations of several sub-entries, but only the ones
/// preceding the second headword span belong to the article, so scanning stops there.
pub fn scan_pronunciation<N: Node>(spans: &[N]) -> Option<String> {
    for (idx, span) in spans.iter().enumerate() {
        match span.attr("class") {
            Some(markup::PRONUNCIATION_CLASS) => return Some(pronunciation_text(&span.text())),
            Some(markup::HEADWORD_CLASS) if idx > 0 => break,
            _ => {}
        }
    }

    None
}

/// Cleans up the text of a pronunciation span.
///
/// The span ends with a fixed-length tag, and may start with a regional label separated from the
/// respelling by a space; both are removed.
///
/// ```rust
/// use collins::types::pronunciation_text;
///
/// assert_eq!(pronunciation_text("ˈæp.əlXXX"), "ˈæp.əl");
/// assert_eq!(pronunciation_text("(US) ˈhæpiadj"), "ˈhæpi");
/// ```
#[must_use]
pub fn pronunciation_text(raw: &str) -> String {
    let stripped = strip_last_chars(raw, PRONUNCIATION_SUFFIX_LEN);
    let respelling = match stripped.rfind(' ') {
        Some(pos) => &stripped[pos + 1..],
        None => stripped,
    };

    normalize(respelling)
}

/// Returns the grammar labels of a sense.
///
/// When the grammar group is itself the first part-of-speech element, its text is the only label.
fn grammar_labels<N: Node>(block: N) -> Vec<String> {
    let Some(group) = block.find_first(markup::GRAMMAR_GROUP) else {
        return Vec::new();
    };

    match block.find_first(markup::PART_OF_SPEECH) {
        None => Vec::new(),
        Some(pos) if pos.is_same(group) => vec![normalize(&pos.text())],
        Some(_) => texts(group, markup::PART_OF_SPEECH),
    }
}

/// Returns the usage quotation of a sense or derivation, without its opening quotation mark.
fn example<N: Node>(block: N) -> Option<String> {
    block
        .find_first(markup::QUOTE)
        .map(|quote| normalize(skip_first_char(&quote.text())))
}

fn synonyms<N: Node>(block: N) -> Vec<String> {
    block
        .find_first(markup::THESAURUS)
        .map(|thesaurus| texts(thesaurus, markup::REFERENCE))
        .unwrap_or_default()
}

/// Returns the normalized text of every descendant of `parent` matching `selector`.
fn texts<N: Node>(parent: N, selector: Selector) -> Vec<String> {
    parent
        .find_all(selector)
        .into_iter()
        .map(|elem| normalize(&elem.text()))
        .collect()
}
