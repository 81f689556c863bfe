//! Furigana markup parser.
//!
//! Reads the ruby markup produced by an [`Analyzer`](crate::analyzer::Analyzer)
//! and turns it into [`Word`]s:
//!
//! - plain run: katakana -> hiragana, trimmed, dropped when blank, moras from the run itself
//! - `<ruby>` pair: surface verbatim, moras from the trimmed `<rt>` reading
//!
//! Anything else (stray or unknown tags, a `<ruby>` without `<rt>`, an unclosed
//! `<ruby>`) is skipped. Parsing never fails.

use tracing::trace;

use super::markup::unescape;
use crate::kana::script;
use crate::models::Word;
use crate::mora;

const RUBY_CLOSE: &str = "</ruby>";

/// One run of the markup, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Run {
  /// Text with no annotation
  Plain(String),
  /// Surface text with its reading
  Annotated {
    /// Base text of the ruby element
    surface: String,
    /// Contents of the `<rt>` elements
    reading: String,
  },
}

/// Parses furigana markup into words, preserving document order.
pub fn parse(markup: &str) -> Vec<Word> {
  runs(markup).into_iter().filter_map(word_from_run).collect()
}

/// Splits markup into plain and annotated runs.
pub fn runs(markup: &str) -> Vec<Run> {
  let mut runs = Vec::new();
  let mut rest = markup;

  while !rest.is_empty() {
    let Some(lt) = rest.find('<') else {
      push_plain(&mut runs, rest);
      break;
    };
    push_plain(&mut runs, &rest[..lt]);

    let Some(gt) = rest[lt..].find('>').map(|offset| lt + offset) else {
      // '<' with no closing '>' is ordinary text
      push_plain(&mut runs, &rest[lt..]);
      break;
    };

    let tag = &rest[lt + 1..gt];
    let after_tag = &rest[gt + 1..];

    if tag_name(tag) == "ruby" {
      if let Some(close) = after_tag.find(RUBY_CLOSE) {
        match parse_ruby(&after_tag[..close]) {
          Some(run) => runs.push(run),
          None => trace!(inner = &after_tag[..close], "ruby without rt skipped"),
        }
        rest = &after_tag[close + RUBY_CLOSE.len()..];
        continue;
      }
      trace!("unclosed ruby tag skipped");
    } else {
      trace!(tag, "unrecognized tag skipped");
    }
    rest = after_tag;
  }

  runs
}

fn push_plain(runs: &mut Vec<Run>, text: &str) {
  if !text.is_empty() {
    runs.push(Run::Plain(unescape(text)));
  }
}

/// Lowercased element name of a tag body (`Ruby class="x"` -> `ruby`, `/rt` -> `/rt`).
fn tag_name(tag: &str) -> String {
  tag.split_whitespace().next().unwrap_or_default().to_ascii_lowercase()
}

/// Parses the inside of a `<ruby>` element.
///
/// Text outside `<rp>`/`<rt>` is the base, text inside `<rt>` the reading;
/// several base/`<rt>` pairs in one element are concatenated. Returns `None`
/// when the element has no `<rt>`.
fn parse_ruby(inner: &str) -> Option<Run> {
  let mut surface = String::new();
  let mut reading = String::new();
  let mut saw_rt = false;
  let mut in_rt = false;
  let mut in_rp = false;
  let mut rest = inner;

  while !rest.is_empty() {
    let (text, tag, next) = match rest.find('<') {
      Some(lt) => match rest[lt..].find('>') {
        Some(offset) => (&rest[..lt], Some(&rest[lt + 1..lt + offset]), &rest[lt + offset + 1..]),
        None => (rest, None, ""),
      },
      None => (rest, None, ""),
    };

    if in_rt {
      reading.push_str(text);
    } else if !in_rp {
      surface.push_str(text);
    }

    match tag.map(tag_name).as_deref() {
      Some("rt") => {
        in_rt = true;
        saw_rt = true;
      }
      Some("/rt") => in_rt = false,
      Some("rp") => in_rp = true,
      Some("/rp") => in_rp = false,
      _ => {}
    }
    rest = next;
  }

  saw_rt.then(|| Run::Annotated { surface: unescape(&surface), reading: unescape(&reading) })
}

/// Converts one run into a word; blank plain runs produce nothing.
fn word_from_run(run: Run) -> Option<Word> {
  match run {
    Run::Plain(text) => {
      let normalized = script::katakana_to_hiragana(&text);
      let trimmed = normalized.trim();
      if trimmed.is_empty() {
        return None;
      }
      Some(Word::plain(mora::segment(trimmed)))
    }
    Run::Annotated { surface, reading } => {
      let reading = fix_reading(reading.trim());
      Some(Word::annotated(surface, mora::segment(&reading)))
    }
  }
}

/// Post-processing of an annotated reading: the analyzer normalizes ヴ to ゔ,
/// which is respelled with the voiced-b kana.
fn fix_reading(reading: &str) -> String {
  reading.replace('ゔ', "ぶ")
}
