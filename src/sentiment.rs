//! Sentiment triples and their normalization into stacked bar segments.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-negative positive/neutral/negative weights attached to an article.
///
/// The weights need not sum to any fixed total.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Sentiment {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
}

impl Sentiment {
    /// Builds a triple, clamping negative or non-finite weights to zero.
    pub fn new(positive: f64, neutral: f64, negative: f64) -> Self {
        Self {
            positive: clamp_weight(positive),
            neutral: clamp_weight(neutral),
            negative: clamp_weight(negative),
        }
    }

    pub fn total(&self) -> f64 {
        self.positive + self.neutral + self.negative
    }

    /// `positive - negative`.
    pub fn polarity(&self) -> f64 {
        self.positive - self.negative
    }
}

fn clamp_weight(w: f64) -> f64 {
    if w.is_finite() && w > 0.0 { w } else { 0.0 }
}

/// Which part of the triple a segment shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Polarity {
    Positive,
    Neutral,
    Negative,
}

impl Polarity {
    /// Left-to-right segment order.
    pub const ORDER: [Self; 3] = [Self::Positive, Self::Neutral, Self::Negative];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Neutral => "Neutral",
            Self::Negative => "Negative",
        }
    }

    /// The color role a renderer paints this segment with.
    pub const fn tone(self) -> Tone {
        match self {
            Self::Positive => Tone::Success,
            Self::Neutral => Tone::Warning,
            Self::Negative => Tone::Error,
        }
    }

    /// Single-character glyph for plain-text bars.
    pub const fn glyph(self) -> char {
        match self {
            Self::Positive => '+',
            Self::Neutral => '=',
            Self::Negative => '-',
        }
    }
}

/// Semantic color roles, mapped to concrete colors by the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Tone {
    Success,
    Warning,
    Error,
    /// Track color of an empty bar.
    Muted,
}

/// One proportional slice of a sentiment bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub polarity: Polarity,
    /// Width as a share of the bar, in `[0, 100]`.
    pub percent: f64,
}

impl Segment {
    pub const fn tone(&self) -> Tone {
        self.polarity.tone()
    }

    /// Tooltip text, e.g. `Positive: 12.3%`.
    pub fn label(&self) -> String {
        format!("{}: {:.1}%", self.polarity.label(), self.percent)
    }
}

/// The normalized, render-ready form of a [`Sentiment`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentBar {
    /// Positive, neutral, negative; always in that order.
    pub segments: [Segment; 3],
    /// All weights were zero; every segment has zero width.
    pub empty: bool,
}

impl SentimentBar {
    /// Tone of the bar's track, visible when the bar is empty.
    pub const TRACK_TONE: Tone = Tone::Muted;

    /// Normalizes a triple into percentages summing to 100.
    ///
    /// An all-zero triple yields an empty bar instead of dividing by zero.
    /// Weights are scaled by the largest one first, so huge finite weights
    /// cannot overflow the total.
    pub fn from_sentiment(s: &Sentiment) -> Self {
        let weights = [s.positive, s.neutral, s.negative].map(clamp_weight);
        let max = weights.iter().copied().fold(0.0_f64, f64::max);
        let empty = max <= 0.0;

        let scaled = weights.map(|w| if empty { 0.0 } else { w / max });
        let total: f64 = scaled.iter().sum();

        let segments = std::array::from_fn(|i| Segment {
            polarity: Polarity::ORDER[i],
            percent: if empty { 0.0 } else { 100.0 * scaled[i] / total },
        });

        Self { segments, empty }
    }

    /// Splits `width` character cells across the segments.
    ///
    /// Uses largest-remainder apportionment so the counts sum to exactly `width`
    /// for a non-empty bar; an empty bar gets zero cells everywhere.
    pub fn cells(&self, width: usize) -> [usize; 3] {
        if self.empty || width == 0 {
            return [0; 3];
        }

        let exact = self.segments.map(|seg| seg.percent * width as f64 / 100.0);
        let mut cells = exact.map(|x| x.floor() as usize);
        let assigned: usize = cells.iter().sum();

        let mut order = [0usize, 1, 2];
        // stable: equal remainders favor the leftmost segment
        order.sort_by(|&a, &b| {
            let ra = exact[a] - exact[a].floor();
            let rb = exact[b] - exact[b].floor();
            rb.total_cmp(&ra)
        });
        for &i in order.iter().take(width.saturating_sub(assigned)) {
            cells[i] += 1;
        }
        cells
    }

    /// Fixed-width text rendering such as `[+++++=====--]`; an empty bar is all dots.
    pub fn to_text(&self, width: usize) -> String {
        let mut out = String::with_capacity(width + 2);
        out.push('[');
        if self.empty {
            out.extend(std::iter::repeat_n('.', width));
        } else {
            for (seg, n) in self.segments.iter().zip(self.cells(width)) {
                out.extend(std::iter::repeat_n(seg.polarity.glyph(), n));
            }
        }
        out.push(']');
        out
    }
}

impl From<&Sentiment> for SentimentBar {
    fn from(s: &Sentiment) -> Self {
        Self::from_sentiment(s)
    }
}

impl fmt::Display for SentimentBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.empty {
            return f.write_str("no sentiment");
        }
        let labels: Vec<String> = self.segments.iter().map(Segment::label).collect();
        f.write_str(&labels.join(" | "))
    }
}
