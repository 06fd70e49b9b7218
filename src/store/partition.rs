//! Two-way index partition
//!
//! Each index lives in one of two dense lists. A side table records where in
//! its list every index sits, so moving an index is a `swap_remove` plus a
//! push instead of a linear search.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Slot {
    learned: bool,
    position: usize,
}

#[derive(Debug, Clone, Default)]
pub(super) struct Partition {
    unlearned: Vec<usize>,
    learned: Vec<usize>,
    slots: Vec<Slot>,
}

impl Partition {
    /// Build from one learned flag per index
    pub(super) fn from_flags(flags: impl IntoIterator<Item = bool>) -> Self {
        let mut partition = Self::default();
        for (index, learned) in flags.into_iter().enumerate() {
            let pool = partition.pool_mut(learned);
            let position = pool.len();
            pool.push(index);
            partition.slots.push(Slot { learned, position });
        }
        partition
    }

    pub(super) fn unlearned(&self) -> &[usize] {
        &self.unlearned
    }

    pub(super) fn learned(&self) -> &[usize] {
        &self.learned
    }

    pub(super) fn len(&self) -> usize {
        self.slots.len()
    }

    pub(super) fn is_learned(&self, index: usize) -> bool {
        self.slots[index].learned
    }

    /// Move `index` into the pool named by `learned`; no-op if already there
    pub(super) fn reassign(&mut self, index: usize, learned: bool) {
        let slot = self.slots[index];
        if slot.learned == learned {
            return;
        }

        let source = self.pool_mut(slot.learned);
        source.swap_remove(slot.position);
        if let Some(&moved) = source.get(slot.position) {
            self.slots[moved].position = slot.position;
        }

        let target = self.pool_mut(learned);
        let position = target.len();
        target.push(index);
        self.slots[index] = Slot { learned, position };
    }

    /// Both pools are disjoint, cover every index and agree with the slots
    pub(super) fn is_valid(&self) -> bool {
        if self.unlearned.len() + self.learned.len() != self.slots.len() {
            return false;
        }
        let agrees = |pool: &[usize], learned: bool| {
            pool.iter().enumerate().all(|(position, &index)| {
                self.slots.get(index) == Some(&Slot { learned, position })
            })
        };
        agrees(&self.unlearned, false) && agrees(&self.learned, true)
    }

    fn pool_mut(&mut self, learned: bool) -> &mut Vec<usize> {
        if learned {
            &mut self.learned
        } else {
            &mut self.unlearned
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_flags_splits_in_order() {
        let partition = Partition::from_flags([false, true, false, true, false]);
        assert_eq!(partition.unlearned(), &[0, 2, 4]);
        assert_eq!(partition.learned(), &[1, 3]);
        assert!(partition.is_valid());
    }

    #[test]
    fn reassign_moves_and_patches_swapped_slot() {
        let mut partition = Partition::from_flags([false, false, false]);

        // Removing the head swaps the tail into its place
        partition.reassign(0, true);
        assert_eq!(partition.unlearned(), &[2, 1]);
        assert_eq!(partition.learned(), &[0]);
        assert!(partition.is_valid());

        partition.reassign(2, true);
        assert_eq!(partition.unlearned(), &[1]);
        assert_eq!(partition.learned(), &[0, 2]);
        assert!(partition.is_valid());
    }

    #[test]
    fn reassign_to_same_side_is_noop() {
        let mut partition = Partition::from_flags([true, false]);
        partition.reassign(0, true);
        partition.reassign(1, false);
        assert_eq!(partition.learned(), &[0]);
        assert_eq!(partition.unlearned(), &[1]);
    }

    #[test]
    fn reassign_last_element() {
        let mut partition = Partition::from_flags([true]);
        partition.reassign(0, false);
        assert!(partition.learned().is_empty());
        assert_eq!(partition.unlearned(), &[0]);
        assert!(partition.is_valid());
    }

    #[test]
    fn round_trip_restores_membership() {
        let mut partition = Partition::from_flags([false, true, false, true]);
        for index in 0..4 {
            let learned = partition.is_learned(index);
            partition.reassign(index, !learned);
            assert!(partition.is_valid());
            partition.reassign(index, learned);
            assert!(partition.is_valid());
        }

        let mut unlearned = partition.unlearned().to_vec();
        unlearned.sort_unstable();
        assert_eq!(unlearned, vec![0, 2]);
    }
}
