//! Linked pixel grid
//!
//! An image held as a mesh of nodes, each linked to its four neighbours.
//! Carving splices one interior node out of every row; the neighbours of
//! the removed node remember how many original pixels now sit between
//! them, which is what lets [`Grid::render`] rebuild the full width.
//!
//! Nodes live in an arena and refer to each other by [`NodeId`]. A removed
//! node leaves an empty slot behind, so ids stay stable for the lifetime of
//! the grid.

use crate::error::Error;
use crate::gridcarve::fill::FillMode;
use crate::gridcarve::hsla::Hsla;
use crate::gridcarve::raster::HslaImage;
use crate::gridcarve::selection::{self, SelectionMode};
use crate::utils::validate_non_empty_image;
use log::{debug, trace};
use std::iter;

/// Stable handle to a node of a [`Grid`].
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One cell of the grid.
///
/// `skip_*` counts the original pixels that were carved out between this
/// node and its current neighbour in that direction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridNode {
    color: Hsla,
    north: Option<NodeId>,
    south: Option<NodeId>,
    east: Option<NodeId>,
    west: Option<NodeId>,
    skip_up: u32,
    skip_down: u32,
    skip_left: u32,
    skip_right: u32,
}

impl GridNode {
    pub fn color(&self) -> &Hsla {
        &self.color
    }

    pub fn north(&self) -> Option<NodeId> {
        self.north
    }

    pub fn south(&self) -> Option<NodeId> {
        self.south
    }

    pub fn east(&self) -> Option<NodeId> {
        self.east
    }

    pub fn west(&self) -> Option<NodeId> {
        self.west
    }

    pub fn skip_up(&self) -> u32 {
        self.skip_up
    }

    pub fn skip_down(&self) -> u32 {
        self.skip_down
    }

    pub fn skip_left(&self) -> u32 {
        self.skip_left
    }

    pub fn skip_right(&self) -> u32 {
        self.skip_right
    }
}

/// An image as a four-way linked mesh of [`GridNode`]s.
///
/// Every row holds the same number of nodes, never fewer than two, and the
/// first and last column are never carved. The northwest and southeast
/// anchors therefore stay at the image corners for the grid's lifetime.
#[derive(Debug)]
pub struct Grid {
    nodes: Vec<Option<GridNode>>,
    northwest: NodeId,
    southeast: NodeId,
    live: usize,
}

impl Grid {
    /// Builds a grid with one node per pixel of `image`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDimension`] if the image is empty in either direction.
    pub fn new(image: &HslaImage) -> Result<Self, Error> {
        let (width, height) = image.dimensions();
        validate_non_empty_image(width, height)?;

        let (w, h) = (width as usize, height as usize);
        let nodes: Vec<Option<GridNode>> = image
            .enumerate_pixels()
            .map(|(x, y, color)| {
                let (x, y) = (x as usize, y as usize);
                let here = y * w + x;
                Some(GridNode {
                    color: *color,
                    north: (y > 0).then(|| NodeId(here - w)),
                    south: (y + 1 < h).then(|| NodeId(here + w)),
                    east: (x + 1 < w).then(|| NodeId(here + 1)),
                    west: (x > 0).then(|| NodeId(here - 1)),
                    skip_up: 0,
                    skip_down: 0,
                    skip_left: 0,
                    skip_right: 0,
                })
            })
            .collect();

        let live = nodes.len();
        debug!("built {width}x{height} grid");
        Ok(Self {
            nodes,
            northwest: NodeId(0),
            southeast: NodeId(live - 1),
            live,
        })
    }

    /// Node at logical position (0, 0).
    pub fn northwest(&self) -> NodeId {
        self.northwest
    }

    /// Node at logical position (width - 1, height - 1).
    pub fn southeast(&self) -> NodeId {
        self.southeast
    }

    /// Number of nodes currently in the grid.
    pub fn len(&self) -> usize {
        self.live
    }

    /// A constructed grid always holds at least one node.
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Looks up a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` was carved out or does not belong to this grid.
    pub fn node(&self, id: NodeId) -> &GridNode {
        self.nodes
            .get(id.0)
            .and_then(Option::as_ref)
            .unwrap_or_else(|| panic!("{id:?} is not a live node of this grid"))
    }

    fn node_mut(&mut self, id: NodeId) -> &mut GridNode {
        self.nodes
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .unwrap_or_else(|| panic!("{id:?} is not a live node of this grid"))
    }

    /// Leftmost node of each row, top to bottom.
    pub fn row_starts(&self) -> impl Iterator<Item = NodeId> + '_ {
        iter::successors(Some(self.northwest), move |&id| self.node(id).south)
    }

    /// Nodes of the row beginning at `start`, west to east.
    pub fn row(&self, start: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        iter::successors(Some(start), move |&id| self.node(id).east)
    }

    /// Number of nodes per row.
    pub fn physical_width(&self) -> u32 {
        self.row(self.northwest).count() as u32
    }

    /// Number of rows.
    pub fn physical_height(&self) -> u32 {
        self.row_starts().count() as u32
    }

    /// Width of the image the grid was built from, carved columns included.
    pub fn logical_width(&self) -> u32 {
        self.row(self.northwest)
            .map(|id| 1 + self.node(id).skip_right)
            .sum()
    }

    /// Node at physical position `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the position lies outside the current physical extents.
    pub fn node_at(&self, x: u32, y: u32) -> NodeId {
        let start = self.row_starts().nth(y as usize).unwrap_or_else(|| {
            panic!(
                "row {y} is outside a grid of height {}",
                self.physical_height()
            )
        });
        self.row(start).nth(x as usize).unwrap_or_else(|| {
            panic!(
                "column {x} is outside a grid of width {}",
                self.physical_width()
            )
        })
    }

    /// Colour at physical position `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the position lies outside the current physical extents.
    pub fn color_at(&self, x: u32, y: u32) -> Hsla {
        *self.node(self.node_at(x, y)).color()
    }

    /// The interior node of the row starting at `row_start` that best fits
    /// `mode`, or `None` if the row has fewer than three nodes.
    pub fn select_node(&self, row_start: NodeId, mode: SelectionMode) -> Option<NodeId> {
        selection::select(self, row_start, mode)
    }

    /// Removes one interior node from every row.
    ///
    /// Rows with fewer than three nodes are left alone. Returns the number
    /// of nodes removed.
    pub fn carve(&mut self, mode: SelectionMode) -> usize {
        let mut removed = 0;
        let mut cursor = Some(self.northwest);
        while let Some(start) = cursor {
            cursor = self.node(start).south;
            if let Some(victim) = self.select_node(start, mode) {
                self.unlink(victim);
                removed += 1;
            }
        }
        removed
    }

    /// Carves `rounds` times, stopping once rows are down to two nodes.
    ///
    /// Returns the number of passes actually performed.
    pub fn carve_rounds(&mut self, rounds: u32, mode: SelectionMode) -> u32 {
        let limit = self.physical_width().saturating_sub(2);
        let passes = rounds.min(limit);
        if passes < rounds {
            debug!("clamping {rounds} carve rounds to {passes}");
        }
        for pass in 0..passes {
            let removed = self.carve(mode);
            debug!(
                "carve pass {pass} ({mode}): removed {removed} nodes, width now {}",
                self.physical_width()
            );
        }
        passes
    }

    // Splices `victim` out of both of its chains. A neighbour inherits the
    // gap on the far side of the victim as well as the victim itself.
    fn unlink(&mut self, victim: NodeId) {
        let node = self.nodes[victim.0]
            .take()
            .unwrap_or_else(|| panic!("{victim:?} is not a live node of this grid"));
        self.live -= 1;

        if let Some(north) = node.north {
            let north = self.node_mut(north);
            north.skip_down += node.skip_down + 1;
            north.south = node.south;
        }
        if let Some(south) = node.south {
            let south = self.node_mut(south);
            south.skip_up += node.skip_up + 1;
            south.north = node.north;
        }
        if let Some(east) = node.east {
            let east = self.node_mut(east);
            east.skip_left += node.skip_left + 1;
            east.west = node.west;
        }
        if let Some(west) = node.west {
            let west = self.node_mut(west);
            west.skip_right += node.skip_right + 1;
            west.east = node.east;
        }
    }

    /// Renders the grid to a raster.
    ///
    /// Without `fill_gaps` the output has one pixel per node. With it, the
    /// output has the original width and every carved column is synthesised
    /// by `fill_mode`. Rows carved out vertically are never reconstructed.
    pub fn render(&self, fill_gaps: bool, fill_mode: FillMode) -> HslaImage {
        let width = if fill_gaps {
            self.logical_width()
        } else {
            self.physical_width()
        };
        let height = self.physical_height();
        trace!("rendering {width}x{height} (fill_gaps: {fill_gaps}, mode: {fill_mode})");

        let mut out = HslaImage::new(width, height);
        for (y, start) in (0u32..).zip(self.row_starts()) {
            let mut x = 0;
            for id in self.row(start) {
                let node = self.node(id);
                out.put_pixel(x, y, node.color);
                x += 1;

                if !fill_gaps || node.skip_right == 0 {
                    continue;
                }
                if let Some(east) = node.east {
                    let right = self.node(east).color;
                    for color in fill_mode.fill_gap(node.color, right, node.skip_right) {
                        out.put_pixel(x, y, color);
                        x += 1;
                    }
                }
            }
        }
        out
    }
}

impl Clone for Grid {
    /// Deep copy with a compacted arena: live nodes are renumbered in
    /// row-major order and every link is rewritten to the new ids.
    fn clone(&self) -> Self {
        let order: Vec<NodeId> = self
            .row_starts()
            .flat_map(|start| self.row(start))
            .collect();

        let mut remap = vec![None; self.nodes.len()];
        for (new, old) in order.iter().enumerate() {
            remap[old.0] = Some(NodeId(new));
        }
        let relink = |link: Option<NodeId>| link.and_then(|id| remap[id.0]);

        let nodes = order
            .iter()
            .map(|&id| {
                let node = self.node(id);
                Some(GridNode {
                    north: relink(node.north),
                    south: relink(node.south),
                    east: relink(node.east),
                    west: relink(node.west),
                    ..*node
                })
            })
            .collect();

        Self {
            nodes,
            northwest: NodeId(0),
            southeast: NodeId(order.len() - 1),
            live: order.len(),
        }
    }
}
