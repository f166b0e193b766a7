use crate::parsing::inline::types::SpanKind;

/// A paired inline delimiter and the span kind it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimited {
    pub marker: &'static str,
    pub kind: SpanKind,
}

impl Delimited {
    pub const CODE: Delimited = Delimited {
        marker: "`",
        kind: SpanKind::Code,
    };
    pub const BOLD: Delimited = Delimited {
        marker: "**",
        kind: SpanKind::Bold,
    };
    pub const ITALIC: Delimited = Delimited {
        marker: "_",
        kind: SpanKind::Italic,
    };

    /// Split passes run in this order. Code goes first so its content is
    /// never re-split by the style delimiters.
    pub const PASSES: [Delimited; 3] = [Self::CODE, Self::BOLD, Self::ITALIC];
}
