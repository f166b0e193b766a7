use crate::error::{MarkdownError, Result};

use super::{
    kinds::{Delimited, LinkMatch, MarkdownLink},
    types::TextSpan,
};

/// Tokenizes a run of inline text into typed spans.
///
/// Passes run in a fixed order and each one only touches spans still marked
/// plain: images, links, then the code, bold and italic delimiters. Empty
/// plain spans left between adjacent constructs are dropped at the end.
///
/// # Errors
/// [`MarkdownError::UnterminatedDelimiter`] when a delimiter opens and never
/// closes within its span. Malformed links and images are not errors; they
/// stay plain text.
pub fn text_to_spans(text: &str) -> Result<Vec<TextSpan>> {
    let mut spans = split_images(vec![TextSpan::plain(text)]);
    spans = split_links(spans);
    for pass in Delimited::PASSES {
        spans = split_delimiter(spans, pass)?;
    }
    spans.retain(|span| !(span.is_plain() && span.text.is_empty()));
    Ok(spans)
}

/// Replaces every `![alt](url)` in plain spans with an image span.
pub fn split_images(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_matches(spans, MarkdownLink::images, |alt, url| TextSpan::image(alt, url))
}

/// Replaces every `[label](url)` in plain spans with a link span.
pub fn split_links(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_matches(spans, MarkdownLink::links, |label, url| TextSpan::link(label, url))
}

fn split_matches(
    spans: Vec<TextSpan>,
    find: fn(&str) -> Vec<LinkMatch>,
    make: fn(String, String) -> TextSpan,
) -> Vec<TextSpan> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let matches = find(&span.text);
        if matches.is_empty() {
            out.push(span);
            continue;
        }

        let mut cursor = 0;
        for m in matches {
            if m.range.start > cursor {
                out.push(TextSpan::plain(&span.text[cursor..m.range.start]));
            }
            out.push(make(m.label, m.url));
            cursor = m.range.end;
        }
        if cursor < span.text.len() {
            out.push(TextSpan::plain(&span.text[cursor..]));
        }
    }

    out
}

/// Splits plain spans on a paired delimiter, turning the enclosed text into
/// spans of the delimiter's kind.
///
/// Text before each opening delimiter is emitted as a plain span even when
/// empty; [`text_to_spans`] drops those at the end. Non-plain spans pass
/// through untouched, as do plain spans without the delimiter.
pub fn split_delimiter(spans: Vec<TextSpan>, delimited: Delimited) -> Result<Vec<TextSpan>> {
    let marker = delimited.marker;
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() || !span.text.contains(marker) {
            out.push(span);
            continue;
        }

        let mut rest = span.text.as_str();
        while let Some(open) = rest.find(marker) {
            let inner = &rest[open + marker.len()..];
            let close = inner
                .find(marker)
                .ok_or_else(|| MarkdownError::UnterminatedDelimiter {
                    delimiter: marker.to_owned(),
                    text: span.text.clone(),
                })?;

            out.push(TextSpan::plain(&rest[..open]));
            out.push(TextSpan::new(&inner[..close], delimited.kind));
            rest = &inner[close + marker.len()..];
        }
        if !rest.is_empty() {
            out.push(TextSpan::plain(rest));
        }
    }

    Ok(out)
}
