//! AST types for printf-style message formats.

/// A parsed message format.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormatString {
    pub segments: Vec<Segment>,
}

impl FormatString {
    /// Number of sequential (non-positional) placeholders.
    pub fn sequential_count(&self) -> usize {
        self.placeholders()
            .filter(|placeholder| placeholder.argument.is_none())
            .count()
    }

    pub fn placeholders(&self) -> impl Iterator<Item = &Placeholder> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(placeholder) => Some(placeholder),
            Segment::Literal(_) => None,
        })
    }
}

/// A segment of a message format.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal text, with `%%` already unescaped.
    Literal(String),

    /// A conversion specification such as `%s` or `%1$05.2f`.
    Placeholder(Placeholder),
}

/// A single conversion specification.
#[derive(Debug, Clone, PartialEq)]
pub struct Placeholder {
    /// One-based argument position from `%n$`, if given.
    pub argument: Option<usize>,
    /// `-` flag: pad on the right instead of the left.
    pub left_align: bool,
    /// `+` flag: always print a sign for numbers.
    pub plus_sign: bool,
    /// Padding character; space unless set by `0` or `'c`.
    pub padding: char,
    pub width: Option<usize>,
    pub precision: Option<usize>,
    pub conversion: Conversion,
}

/// The conversion character of a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// `b`
    Binary,
    /// `c`
    Char,
    /// `d`
    Decimal,
    /// `u`
    Unsigned,
    /// `o`
    Octal,
    /// `x`
    HexLower,
    /// `X`
    HexUpper,
    /// `f` and `F`
    Float,
    /// `e`
    Exponent,
    /// `E`
    ExponentUpper,
    /// `g`: fixed or exponent notation depending on the exponent
    General,
    /// `G`
    GeneralUpper,
    /// `s`
    String,
}

impl Conversion {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'b' => Some(Conversion::Binary),
            'c' => Some(Conversion::Char),
            'd' => Some(Conversion::Decimal),
            'u' => Some(Conversion::Unsigned),
            'o' => Some(Conversion::Octal),
            'x' => Some(Conversion::HexLower),
            'X' => Some(Conversion::HexUpper),
            'f' | 'F' => Some(Conversion::Float),
            'e' => Some(Conversion::Exponent),
            'E' => Some(Conversion::ExponentUpper),
            'g' => Some(Conversion::General),
            'G' => Some(Conversion::GeneralUpper),
            's' => Some(Conversion::String),
            _ => None,
        }
    }

    /// Whether the converted value is a signed number.
    pub fn is_signed(self) -> bool {
        matches!(
            self,
            Conversion::Decimal
                | Conversion::Float
                | Conversion::Exponent
                | Conversion::ExponentUpper
                | Conversion::General
                | Conversion::GeneralUpper
        )
    }
}
