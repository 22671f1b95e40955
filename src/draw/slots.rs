// src/draw/slots.rs
//
// Sequential slot filling. The draw page lists matches round by round in the
// same top-to-bottom order the template numbers its slots, so the i-th
// extracted match belongs in the i-th slot. The only correction is the
// per-layout swap list.

use std::collections::BTreeMap;

use crate::layout::{LayoutSpec, Slot};
use super::types::MatchRecord;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placed {
    pub record: MatchRecord,
    /// Sides were exchanged to match the template's polarity.
    pub swapped: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SlotMap {
    /// Every slot of the layout; `None` renders as an empty slot.
    pub slots: BTreeMap<Slot, Option<Placed>>,
    /// Records left over once every slot was filled.
    pub overflow: Vec<MatchRecord>,
}

impl SlotMap {
    pub fn filled(&self) -> usize {
        self.slots.values().filter(|p| p.is_some()).count()
    }

    pub fn empty(&self) -> usize {
        self.slots.len() - self.filled()
    }

    pub fn get(&self, slot: Slot) -> Option<&Placed> {
        self.slots.get(&slot).and_then(Option::as_ref)
    }

    /// Slots in template order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, Option<&Placed>)> {
        self.slots.iter().map(|(s, p)| (*s, p.as_ref()))
    }
}

pub fn assign_slots(layout: &LayoutSpec, records: Vec<MatchRecord>) -> SlotMap {
    let mut records = records.into_iter();
    let mut map = SlotMap::default();

    for slot in layout.slots() {
        let placed = records.next().map(|record| {
            if layout.swaps_sides(slot) {
                logd!("Slots: {} swapped ({} v {})", slot, record.side_a.display_name(), record.side_b.display_name());
                Placed { record: record.swapped(), swapped: true }
            } else {
                Placed { record, swapped: false }
            }
        });
        map.slots.insert(slot, placed);
    }
    map.overflow = records.collect();

    if !map.overflow.is_empty() {
        logw!(
            "Slots: {} match(es) past the last slot of {} were not placed",
            map.overflow.len(), layout.template_id
        );
    }
    logf!(
        "Slots: {} filled, {} empty ({})",
        map.filled(), map.empty(), layout.template_id
    );
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::types::{SetResult, Side, Winner};
    use crate::layout::for_player_count;

    fn rec(a: &str, b: &str) -> MatchRecord {
        MatchRecord {
            side_a: Side { players: vec![s!(a)], flags: vec![s!("fr")] },
            side_b: Side { players: vec![s!(b)], flags: vec![s!("de")] },
            sets: vec![SetResult::new("6", "3")],
            winner: Winner::SideA,
        }
    }

    fn recs(n: usize) -> Vec<MatchRecord> {
        (1..=n).map(|i| rec(&format!("A{i}"), &format!("B{i}"))).collect()
    }

    #[test]
    fn records_fill_slots_in_order() {
        let layout = for_player_count(32).unwrap();
        let map = assign_slots(layout, recs(20));

        assert_eq!(map.slots.len(), 31);
        assert_eq!(map.filled(), 20);
        assert_eq!(map.empty(), 11);
        assert!(map.overflow.is_empty());

        assert_eq!(map.get(Slot::new(1, 1)).unwrap().record.side_a.player(0), "A1");
        assert_eq!(map.get(Slot::new(1, 16)).unwrap().record.side_a.player(0), "A16");
        assert_eq!(map.get(Slot::new(2, 4)).unwrap().record.side_a.player(0), "A20");
        assert!(map.get(Slot::new(2, 5)).is_none());
    }

    #[test]
    fn no_records_means_all_empty() {
        let layout = for_player_count(16).unwrap();
        let map = assign_slots(layout, Vec::new());
        assert_eq!(map.filled(), 0);
        assert_eq!(map.empty(), 15);
    }

    #[test]
    fn excess_records_overflow() {
        let layout = for_player_count(16).unwrap();
        let map = assign_slots(layout, recs(17));
        assert_eq!(map.filled(), 15);
        assert_eq!(map.overflow.len(), 2);
        assert_eq!(map.overflow[0].side_a.player(0), "A16");
    }

    #[test]
    fn listed_slots_are_swapped() {
        // 28 draw: 12 first-round matches, then R2M6 and R2M8 are flipped.
        let layout = for_player_count(28).unwrap();
        let map = assign_slots(layout, recs(20));

        let r2m5 = map.get(Slot::new(2, 5)).unwrap();
        assert!(!r2m5.swapped);
        assert_eq!(r2m5.record.side_a.player(0), "A17");

        let r2m6 = map.get(Slot::new(2, 6)).unwrap();
        assert!(r2m6.swapped);
        assert_eq!(r2m6.record.side_a.player(0), "B18");
        assert_eq!(r2m6.record.side_a.flag(0), "de");
        assert_eq!(r2m6.record.sets[0], SetResult::new("3", "6"));
        assert_eq!(r2m6.record.winner, Winner::SideB);

        assert!(map.get(Slot::new(2, 8)).unwrap().swapped);
        assert_eq!(map.iter().filter(|(_, p)| p.is_some_and(|p| p.swapped)).count(), 2);
    }

    /// Indexes of the swapped slots in `round`.
    fn swapped_in(map: &SlotMap, round: u32) -> Vec<u32> {
        map.iter()
            .filter(|(s, p)| s.round == round && p.is_some_and(|p| p.swapped))
            .map(|(s, _)| s.index)
            .collect()
    }

    #[test]
    fn even_second_round_slots_swap_in_24_draw() {
        // 8 first-round matches, then all 8 second-round slots filled.
        let layout = for_player_count(24).unwrap();
        let map = assign_slots(layout, recs(16));

        assert!(swapped_in(&map, 1).is_empty());
        assert_eq!(swapped_in(&map, 2), vec![2, 4, 6, 8]);

        let r2m2 = map.get(Slot::new(2, 2)).unwrap();
        assert_eq!(r2m2.record.side_a.player(0), "B10");
        assert_eq!(r2m2.record.winner, Winner::SideB);
        assert_eq!(map.get(Slot::new(2, 3)).unwrap().record.side_a.player(0), "A11");
    }

    #[test]
    fn even_second_round_slots_swap_in_96_draw() {
        // 32 first-round matches, then all 32 second-round slots filled.
        let layout = for_player_count(96).unwrap();
        let map = assign_slots(layout, recs(64));

        assert!(swapped_in(&map, 1).is_empty());
        assert_eq!(swapped_in(&map, 2), (2..=32).step_by(2).collect::<Vec<u32>>());
        assert_eq!(map.get(Slot::new(2, 32)).unwrap().record.side_a.player(0), "B64");
        assert_eq!(map.get(Slot::new(2, 31)).unwrap().record.side_a.player(0), "A63");
    }

    #[test]
    fn iteration_is_round_then_index() {
        let layout = for_player_count(64).unwrap();
        let map = assign_slots(layout, recs(40));
        let order: Vec<Slot> = map.iter().map(|(s, _)| s).collect();
        assert!(order.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(order.first(), Some(&Slot::new(1, 1)));
        assert_eq!(order.last(), Some(&Slot::new(6, 1)));
    }
}
