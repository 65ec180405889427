use crate::error::Error;
use crate::gridcarve::grid::{Grid, NodeId};
use crate::gridcarve::hsla::{hue_distance, Hsla};
use itertools::Itertools;
use std::fmt;
use std::str::FromStr;

/// Rule used to pick the node removed from each row during a carve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SelectionMode {
    /// The darkest interior node
    #[default]
    MinLightness,
    /// The interior node whose hue is closest to both of its neighbours
    MinHueDeviation,
}

impl SelectionMode {
    /// Cost of removing `node` given its current west and east neighbours.
    /// Lower is better.
    pub fn score(self, west: &Hsla, node: &Hsla, east: &Hsla) -> f64 {
        match self {
            Self::MinLightness => node.l,
            Self::MinHueDeviation => hue_distance(west.h, node.h) + hue_distance(east.h, node.h),
        }
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MinLightness => "min-lightness",
            Self::MinHueDeviation => "min-hue-deviation",
        })
    }
}

impl FromStr for SelectionMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "min-lightness" => Ok(Self::MinLightness),
            "min-hue-deviation" => Ok(Self::MinHueDeviation),
            other => Err(Error::UnknownMode(other.to_string())),
        }
    }
}

/// Picks the interior node of the row starting at `row_start` with the
/// lowest score. The first and last node of a row are never candidates;
/// ties go to the leftmost node.
pub(crate) fn select(grid: &Grid, row_start: NodeId, mode: SelectionMode) -> Option<NodeId> {
    grid.row(row_start)
        .tuple_windows()
        .map(|(west, node, east)| {
            let score = mode.score(
                grid.node(west).color(),
                grid.node(node).color(),
                grid.node(east).color(),
            );
            (node, score)
        })
        // min_by keeps the first of equal elements
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(node, _)| node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{hue_row, lightness_row};

    #[test]
    fn min_lightness_picks_darkest_interior_node() {
        let grid = Grid::new(&lightness_row(&[0.9, 0.1, 0.5, 0.8, 0.3])).unwrap();
        let selected = grid.select_node(grid.northwest(), SelectionMode::MinLightness);
        assert_eq!(selected, Some(grid.node_at(1, 0)));
    }

    #[test]
    fn min_lightness_ignores_row_boundaries() {
        let grid = Grid::new(&lightness_row(&[0.0, 0.6, 0.4, 0.0])).unwrap();
        let selected = grid.select_node(grid.northwest(), SelectionMode::MinLightness);
        assert_eq!(selected, Some(grid.node_at(2, 0)));
    }

    #[test]
    fn ties_resolve_to_leftmost() {
        let grid = Grid::new(&lightness_row(&[0.5, 0.2, 0.2, 0.2, 0.5])).unwrap();
        let selected = grid.select_node(grid.northwest(), SelectionMode::MinLightness);
        assert_eq!(selected, Some(grid.node_at(1, 0)));

        let grid = Grid::new(&hue_row(&[0.0, 0.0, 0.0, 0.0])).unwrap();
        let selected = grid.select_node(grid.northwest(), SelectionMode::MinHueDeviation);
        assert_eq!(selected, Some(grid.node_at(1, 0)));
    }

    #[test]
    fn min_hue_deviation_uses_circular_distance() {
        // x=1: 15 + 115 = 130; x=2: 115 + 80 = 195; x=3: 80 + 160 = 240
        let grid = Grid::new(&hue_row(&[350.0, 5.0, 120.0, 200.0, 0.0])).unwrap();
        let selected = grid.select_node(grid.northwest(), SelectionMode::MinHueDeviation);
        assert_eq!(selected, Some(grid.node_at(1, 0)));
    }

    #[test]
    fn short_rows_have_no_candidate() {
        let grid = Grid::new(&lightness_row(&[0.1, 0.2])).unwrap();
        assert_eq!(
            grid.select_node(grid.northwest(), SelectionMode::MinLightness),
            None
        );
        let grid = Grid::new(&lightness_row(&[0.1])).unwrap();
        assert_eq!(
            grid.select_node(grid.northwest(), SelectionMode::MinHueDeviation),
            None
        );
    }

    #[test]
    fn mode_names_round_trip() {
        for mode in [SelectionMode::MinLightness, SelectionMode::MinHueDeviation] {
            assert_eq!(mode.to_string().parse::<SelectionMode>(), Ok(mode));
        }
        assert_eq!(
            "darkest".parse::<SelectionMode>(),
            Err(Error::UnknownMode("darkest".to_string()))
        );
    }
}
