use crate::gridcarve::fill::FillMode;
use crate::gridcarve::selection::SelectionMode;

/// Settings for a one-call carve through [`GridCarve`](crate::GridCarve).
///
/// `fill: None` renders the narrowed image; `Some(mode)` renders at the
/// original width with the carved columns reconstructed by `mode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarveOptions {
    pub rounds: u32,
    pub selection: SelectionMode,
    pub fill: Option<FillMode>,
}

impl Default for CarveOptions {
    fn default() -> Self {
        Self {
            rounds: 1,
            selection: SelectionMode::default(),
            fill: None,
        }
    }
}

impl CarveOptions {
    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    pub fn with_selection(mut self, selection: SelectionMode) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_fill(mut self, fill: Option<FillMode>) -> Self {
        self.fill = fill;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_carves_once_without_fill() {
        let options = CarveOptions::default();
        assert_eq!(options.rounds, 1);
        assert_eq!(options.selection, SelectionMode::MinLightness);
        assert_eq!(options.fill, None);
    }

    #[test]
    fn setters_chain() {
        let options = CarveOptions::default()
            .with_rounds(4)
            .with_selection(SelectionMode::MinHueDeviation)
            .with_fill(Some(FillMode::Gradient));
        assert_eq!(
            options,
            CarveOptions {
                rounds: 4,
                selection: SelectionMode::MinHueDeviation,
                fill: Some(FillMode::Gradient),
            }
        );
    }
}
