//! Per-magazine serial numbering for bare and wrapped tiles.

/// Placement of one tile within the magazine sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MagazineSlot {
    /// Absolute index in the requested range.
    pub index: u32,
    /// Serial printed on the tile, restarting in every magazine.
    pub serial: u32,
    /// `(index - 1) / units_per_magazine`.
    pub magazine_index: usize,
}

/// Walks `[start, start + count)` assigning visible serials and magazine
/// indices.
///
/// The visible serial is `index - magazine_index * units_per_magazine`, so
/// a tile keeps the same serial whichever batch it is printed in.
#[derive(Debug, Clone)]
pub struct MagazineSlots {
    next: u32,
    end: u32,
    units_per_magazine: u32,
}

impl MagazineSlots {
    /// `end` is inclusive. `units_per_magazine` must be positive.
    pub fn new(start: u32, end: u32, units_per_magazine: u32) -> Self {
        debug_assert!(units_per_magazine > 0);
        Self {
            next: start,
            end,
            units_per_magazine,
        }
    }
}

impl Iterator for MagazineSlots {
    type Item = MagazineSlot;

    fn next(&mut self) -> Option<MagazineSlot> {
        if self.next > self.end || self.next == 0 {
            return None;
        }
        let index = self.next;
        let slot = MagazineSlot {
            index,
            serial: (index - 1) % self.units_per_magazine + 1,
            magazine_index: ((index - 1) / self.units_per_magazine) as usize,
        };
        // `end` may be u32::MAX; stop instead of wrapping.
        match index.checked_add(1) {
            Some(next) => self.next = next,
            None => self.end = 0,
        }
        Some(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn serials(start: u32, end: u32, per: u32) -> Vec<(u32, usize)> {
        MagazineSlots::new(start, end, per)
            .map(|slot| (slot.serial, slot.magazine_index))
            .collect()
    }

    #[test]
    fn restarts_each_magazine() {
        let slots = serials(1, 6, 2);
        assert_eq!(slots, vec![(1, 0), (2, 0), (1, 1), (2, 1), (1, 2), (2, 2)]);
    }

    #[test]
    fn start_mid_magazine_keeps_first_serials() {
        let slots = serials(3, 6, 4);
        assert_eq!(slots, vec![(3, 0), (4, 0), (1, 1), (2, 1)]);
    }

    #[test]
    fn serial_depends_only_on_index() {
        let slots = serials(5, 8, 4);
        assert_eq!(slots, vec![(1, 1), (2, 1), (3, 1), (4, 1)]);
        assert_eq!(serials(9, 12, 8), vec![(1, 1), (2, 1), (3, 1), (4, 1)]);
    }

    #[test]
    fn stops_at_u32_max() {
        let slots: Vec<_> = MagazineSlots::new(u32::MAX - 1, u32::MAX, 8).collect();
        assert_eq!(slots.len(), 2);
    }
}
