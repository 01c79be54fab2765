//! Assignment-rewriting strategies.
//!
//! Each [`EmbedStrategy`] knows one way of finding the `galleryData`
//! assignment in a page and swapping its right-hand side for fresh JSON.
//! They are pure string transforms so they can be tested without files.

use regex::Regex;
use std::fmt;
use std::ops::Range;
use std::sync::LazyLock;

/// The statement a freshly templated page carries.
pub const PLACEHOLDER_STATEMENT: &str = "const galleryData = GALLERY_DATA_PLACEHOLDER;";

static SCRIPT_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<script>.*?</script>").expect("valid script block regex"));

const ASSIGNMENT_PREFIX: &str = "const galleryData = ";

/// Single line, up to the first semicolon. Used when the right-hand side
/// is not JSON.
static ASSIGNMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"const galleryData = .*?;").expect("valid assignment regex"));

/// Which strategy produced a rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    Placeholder,
    ScriptBlock,
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyKind::Placeholder => write!(f, "placeholder"),
            StrategyKind::ScriptBlock => write!(f, "fallback script scan"),
        }
    }
}

/// Why a strategy could not rewrite the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Miss {
    /// The literal placeholder statement is absent.
    NoPlaceholder,
    /// No `<script>…</script>` block exists.
    NoScriptBlock,
    /// The first script block has no `const galleryData = …;`.
    NoAssignment,
}

/// One way of locating and rewriting the `galleryData` assignment.
pub trait EmbedStrategy: Sync {
    fn kind(&self) -> StrategyKind;

    /// Return the rewritten document, or why nothing matched.
    fn apply(&self, document: &str, json: &str) -> Result<String, Miss>;
}

/// Replace the untouched template placeholder.
pub struct ExactPlaceholder;

impl EmbedStrategy for ExactPlaceholder {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Placeholder
    }

    fn apply(&self, document: &str, json: &str) -> Result<String, Miss> {
        if !document.contains(PLACEHOLDER_STATEMENT) {
            return Err(Miss::NoPlaceholder);
        }
        Ok(document.replacen(PLACEHOLDER_STATEMENT, &assignment(json), 1))
    }
}

/// Rewrite a previously embedded assignment inside the first script block.
pub struct ScriptBlockScan;

impl EmbedStrategy for ScriptBlockScan {
    fn kind(&self) -> StrategyKind {
        StrategyKind::ScriptBlock
    }

    fn apply(&self, document: &str, json: &str) -> Result<String, Miss> {
        let block = SCRIPT_BLOCK.find(document).ok_or(Miss::NoScriptBlock)?;
        let script = block.as_str();
        let span = assignment_span(script).ok_or(Miss::NoAssignment)?;

        let mut out = String::with_capacity(document.len() + json.len());
        out.push_str(&document[..block.start()]);
        out.push_str(&script[..span.start]);
        out.push_str(&assignment(json));
        out.push_str(&script[span.end..]);
        out.push_str(&document[block.end()..]);
        Ok(out)
    }
}

/// Byte range of the first `galleryData` statement in `script`, semicolon
/// included.
///
/// A right-hand side written by a previous run is a JSON value and is
/// consumed whole, so a `;` inside one of its strings does not end the
/// statement early. Anything else ends at the first `;` on its line.
fn assignment_span(script: &str) -> Option<Range<usize>> {
    let start = script.find(ASSIGNMENT_PREFIX)?;
    let rhs = start + ASSIGNMENT_PREFIX.len();

    let mut values = serde_json::Deserializer::from_str(&script[rhs..])
        .into_iter::<serde_json::Value>();
    if let Some(Ok(_)) = values.next() {
        let end = rhs + values.byte_offset();
        if script[end..].starts_with(';') {
            return Some(start..end + 1);
        }
    }

    ASSIGNMENT.find_at(script, start).map(|m| m.range())
}

/// Strategies in the order they are tried. First match wins.
pub static STRATEGIES: [&dyn EmbedStrategy; 2] = [&ExactPlaceholder, &ScriptBlockScan];

fn assignment(json: &str) -> String {
    format!("const galleryData = {json};")
}
