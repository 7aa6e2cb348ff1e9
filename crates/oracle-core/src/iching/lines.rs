//! Three-coin line casting.
//!
//! Each of the three lowest bits of a byte is one coin: 0 is tails (2), 1 is
//! heads (3). The sum is the traditional line value, so 6 and 9 come up 1/8
//! of the time and 7 and 8 come up 3/8. The upper five bits are ignored.

use serde::Serialize;

/// Solid or broken line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineType {
    Yin,
    Yang,
}

impl LineType {
    pub fn flipped(self) -> Self {
        match self {
            Self::Yin => Self::Yang,
            Self::Yang => Self::Yin,
        }
    }
}

impl std::fmt::Display for LineType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Yin => write!(f, "yin"),
            Self::Yang => write!(f, "yang"),
        }
    }
}

/// Sum of three coins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "u8")]
pub enum LineValue {
    /// 6: broken, changing.
    OldYin = 6,
    /// 7: solid, stable.
    YoungYang = 7,
    /// 8: broken, stable.
    YoungYin = 8,
    /// 9: solid, changing.
    OldYang = 9,
}

impl From<LineValue> for u8 {
    fn from(v: LineValue) -> u8 {
        v as u8
    }
}

impl LineValue {
    pub fn is_yang(self) -> bool {
        matches!(self, Self::YoungYang | Self::OldYang)
    }

    pub fn is_changing(self) -> bool {
        matches!(self, Self::OldYin | Self::OldYang)
    }

    pub fn line_type(self) -> LineType {
        if self.is_yang() {
            LineType::Yang
        } else {
            LineType::Yin
        }
    }

    /// Traditional glyph: ⚋ ⚊ with ○ / × marking old lines.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::OldYin => "⚋×",
            Self::YoungYang => "⚊",
            Self::YoungYin => "⚋",
            Self::OldYang => "⚊○",
        }
    }
}

/// Cast one line from the three lowest bits of `byte`.
pub fn line_from_byte(byte: u8) -> LineValue {
    let coin = |bit: u8| if (byte >> bit) & 1 == 1 { 3 } else { 2 };
    match coin(0) + coin(1) + coin(2) {
        6 => LineValue::OldYin,
        7 => LineValue::YoungYang,
        8 => LineValue::YoungYin,
        _ => LineValue::OldYang,
    }
}

/// One cast line with its derived polarity and change flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CastLine {
    pub value: LineValue,
    pub is_yang: bool,
    pub is_changing: bool,
}

impl From<LineValue> for CastLine {
    fn from(value: LineValue) -> Self {
        Self {
            value,
            is_yang: value.is_yang(),
            is_changing: value.is_changing(),
        }
    }
}

impl CastLine {
    /// Polarity before any change.
    pub fn line_type(&self) -> LineType {
        if self.is_yang {
            LineType::Yang
        } else {
            LineType::Yin
        }
    }

    /// Polarity after changing lines have turned.
    pub fn transformed_type(&self) -> LineType {
        if self.is_changing {
            self.line_type().flipped()
        } else {
            self.line_type()
        }
    }
}
