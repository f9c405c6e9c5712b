//! Cost and heuristic model over a [`GridWorld`].

use gridseek_core::{Coord, GridWorld, manhattan};

use crate::traits::{AstarPather, Pather, WeightedPather};

/// How edge costs and the auxiliary total are derived from cell values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CostMode {
    /// Every step costs 1; the shortest path is found.
    #[default]
    UnitCost,
    /// Entering a cell costs its value; the path with the smallest
    /// accumulated value is found.
    ValueAsCost,
    /// Every step costs 1, and the values of entered cells are summed
    /// along the chosen path for reporting.
    ValueAsReward,
}

impl CostMode {
    /// Every mode, in declaration order.
    pub const ALL: [CostMode; 3] = [
        CostMode::UnitCost,
        CostMode::ValueAsCost,
        CostMode::ValueAsReward,
    ];
}

/// [`AstarPather`] implementation for a world under a [`CostMode`].
///
/// The auxiliary tally is always the value of the entered cell, so the
/// reported total is the sum of values along the returned path in every
/// mode. Under `ValueAsCost` it equals the path cost.
pub struct CostModel<'a> {
    world: &'a GridWorld,
    mode: CostMode,
    h_scale: u64,
}

impl<'a> CostModel<'a> {
    pub fn new(world: &'a GridWorld, mode: CostMode) -> Self {
        // Manhattan distance times the cheapest possible step keeps the
        // estimate admissible and consistent even with zero-cost cells.
        let h_scale = match mode {
            CostMode::UnitCost | CostMode::ValueAsReward => 1,
            CostMode::ValueAsCost => u64::from(world.min_passable_value().unwrap_or(0)),
        };
        Self {
            world,
            mode,
            h_scale,
        }
    }

    #[inline]
    pub fn mode(&self) -> CostMode {
        self.mode
    }

    #[inline]
    pub fn world(&self) -> &GridWorld {
        self.world
    }
}

impl Pather for CostModel<'_> {
    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>) {
        buf.extend(self.world.neighbors(c));
    }
}

impl WeightedPather for CostModel<'_> {
    fn cost(&self, _from: Coord, to: Coord) -> u64 {
        match self.mode {
            CostMode::UnitCost | CostMode::ValueAsReward => 1,
            CostMode::ValueAsCost => u64::from(self.world.cell_value(to)),
        }
    }

    fn tally(&self, _from: Coord, to: Coord) -> u64 {
        u64::from(self.world.cell_value(to))
    }
}

impl AstarPather for CostModel<'_> {
    fn estimate(&self, from: Coord, to: Coord) -> u64 {
        u64::from(manhattan(from, to)) * self.h_scale
    }
}
