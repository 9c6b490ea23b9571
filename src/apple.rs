use std::collections::HashSet;

use rand::Rng;

use crate::geometry::{Coord, Size};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Apple {
    pos: Coord,
}

impl Apple {
    /// Samples uniformly over the playable region until a cell outside
    /// `forbidden` turns up.
    ///
    /// Panics when `forbidden` covers the whole playable region, since the
    /// search could never finish.
    pub fn respawn<'a>(
        size: Size,
        forbidden: impl IntoIterator<Item = &'a Coord>,
        rng: &mut impl Rng,
    ) -> Self {
        let forbidden: HashSet<Coord> = forbidden
            .into_iter()
            .copied()
            .filter(|&pos| size.is_playable(pos))
            .collect();

        assert!(
            forbidden.len() < size.playable_cells(),
            "No free cell left for an apple on a {}x{} board",
            size.width,
            size.height
        );

        loop {
            let pos = Coord {
                x: rng.gen_range(1..=size.width as i32),
                y: rng.gen_range(1..=size.height as i32),
            };

            if !forbidden.contains(&pos) {
                return Apple { pos };
            }
        }
    }

    pub fn pos(&self) -> Coord {
        self.pos
    }

    #[cfg(test)]
    pub(crate) fn at(pos: Coord) -> Self {
        Apple { pos }
    }
}
