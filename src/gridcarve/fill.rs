use crate::error::Error;
use crate::gridcarve::hsla::Hsla;
use std::fmt;
use std::str::FromStr;

/// How carved columns are reconstructed when rendering at full width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FillMode {
    /// Repeat the colour of the node left of the gap
    #[default]
    CopyLeft,
    /// Average of the two nodes bordering the gap, hue along the shorter arc
    HueAverage,
    /// Linear interpolation across the gap, hue along the shorter arc
    Gradient,
}

impl FillMode {
    /// Colour of column `offset` (1-based) inside a gap of `gap` columns
    /// between `left` and `right`.
    pub fn gap_color(self, left: &Hsla, right: &Hsla, offset: u32, gap: u32) -> Hsla {
        match self {
            Self::CopyLeft => *left,
            Self::HueAverage => left.average(right),
            Self::Gradient => {
                let t = f64::from(offset) / (f64::from(gap) + 1.0);
                left.lerp(right, t)
            }
        }
    }

    /// Colours for every column of a gap, left to right.
    pub fn fill_gap(self, left: Hsla, right: Hsla, gap: u32) -> impl Iterator<Item = Hsla> {
        (1..=gap).map(move |offset| self.gap_color(&left, &right, offset, gap))
    }
}

impl fmt::Display for FillMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::CopyLeft => "copy-left",
            Self::HueAverage => "hue-average",
            Self::Gradient => "gradient",
        })
    }
}

impl FromStr for FillMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "copy-left" => Ok(Self::CopyLeft),
            "hue-average" => Ok(Self::HueAverage),
            "gradient" => Ok(Self::Gradient),
            other => Err(Error::UnknownMode(other.to_string())),
        }
    }
}
