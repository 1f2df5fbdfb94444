//! Open/close state for collapsible regions: the mobile menu and the FAQ
//! answers. A region never jumps straight between `Closed` and `Open`; it
//! passes through an animating state that only settles once the slide
//! transition reports completion.

use std::rc::Rc;

use yew::Reducible;

pub const FAQ_GROUP: &str = "faq";
pub const MOBILE_MENU: &str = "mobile-menu";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisclosureState {
    Closed,
    Opening,
    Open,
    Closing,
}

impl DisclosureState {
    /// True while the region is open or on its way there.
    pub fn targets_open(self) -> bool {
        matches!(self, DisclosureState::Opening | DisclosureState::Open)
    }

    /// Whether the panel occupies space on the page at all.
    pub fn is_rendered(self) -> bool {
        self != DisclosureState::Closed
    }

    pub fn class(self) -> &'static str {
        match self {
            DisclosureState::Closed => "closed",
            DisclosureState::Opening => "opening",
            DisclosureState::Open => "open",
            DisclosureState::Closing => "closing",
        }
    }
}

/// Icon pair swapped when a region changes direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconPair {
    Menu,
    Faq,
}

impl IconPair {
    pub fn glyph(self, targets_open: bool) -> &'static str {
        match (self, targets_open) {
            (IconPair::Menu, false) => "fa-bars",
            (IconPair::Menu, true) => "fa-times",
            (IconPair::Faq, false) => "fa-plus",
            (IconPair::Faq, true) => "fa-minus",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DisclosureRegion {
    pub id: String,
    pub group: Option<&'static str>,
    icons: IconPair,
    state: DisclosureState,
    generation: u32,
}

impl DisclosureRegion {
    #[cfg(test)]
    pub fn state(&self) -> DisclosureState {
        self.state
    }

    #[cfg(test)]
    pub fn is_open(&self) -> bool {
        self.state == DisclosureState::Open
    }

    pub fn icon(&self) -> &'static str {
        self.icons.glyph(self.state.targets_open())
    }

    fn begin(&mut self, target: DisclosureState) {
        self.state = target;
        self.generation = self.generation.wrapping_add(1);
    }
}

/// A slide transition that has been started and is waiting for completion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingAnimation {
    pub id: String,
    pub generation: u32,
}

pub enum DisclosureAction {
    Click(String),
    ForceClose(String),
    AnimationDone { id: String, generation: u32 },
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Disclosures {
    regions: Vec<DisclosureRegion>,
}

impl Disclosures {
    pub fn with_region(mut self, id: impl Into<String>, group: Option<&'static str>, icons: IconPair) -> Self {
        self.regions.push(DisclosureRegion {
            id: id.into(),
            group,
            icons,
            state: DisclosureState::Closed,
            generation: 0,
        });
        self
    }

    pub fn get(&self, id: &str) -> Option<&DisclosureRegion> {
        self.regions.iter().find(|r| r.id == id)
    }

    pub fn state(&self, id: &str) -> DisclosureState {
        self.get(id).map_or(DisclosureState::Closed, |r| r.state)
    }

    /// Toggles the region toward the opposite of where it is heading. Opening
    /// a grouped region sends every other region of the group to `Closing`.
    pub fn click(&mut self, id: &str) {
        let Some(index) = self.regions.iter().position(|r| r.id == id) else {
            return;
        };
        if self.regions[index].state.targets_open() {
            self.regions[index].begin(DisclosureState::Closing);
            return;
        }
        if let Some(group) = self.regions[index].group {
            for (i, region) in self.regions.iter_mut().enumerate() {
                if i != index && region.group == Some(group) && region.state.targets_open() {
                    region.begin(DisclosureState::Closing);
                }
            }
        }
        self.regions[index].begin(DisclosureState::Opening);
    }

    pub fn force_close(&mut self, id: &str) {
        if let Some(region) = self.regions.iter_mut().find(|r| r.id == id) {
            if region.state != DisclosureState::Closed {
                region.begin(DisclosureState::Closing);
            }
        }
    }

    /// Settles a transition. Completions from a superseded transition are
    /// ignored.
    pub fn animation_done(&mut self, id: &str, generation: u32) {
        if let Some(region) = self.regions.iter_mut().find(|r| r.id == id) {
            if region.generation != generation {
                return;
            }
            region.state = match region.state {
                DisclosureState::Opening => DisclosureState::Open,
                DisclosureState::Closing => DisclosureState::Closed,
                settled => settled,
            };
        }
    }

    pub fn pending(&self) -> Vec<PendingAnimation> {
        self.regions
            .iter()
            .filter(|r| matches!(r.state, DisclosureState::Opening | DisclosureState::Closing))
            .map(|r| PendingAnimation {
                id: r.id.clone(),
                generation: r.generation,
            })
            .collect()
    }

    #[cfg(test)]
    pub fn open_count(&self, group: &str) -> usize {
        self.regions
            .iter()
            .filter(|r| r.group == Some(group) && r.is_open())
            .count()
    }
}

impl Reducible for Disclosures {
    type Action = DisclosureAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            DisclosureAction::Click(id) => next.click(&id),
            DisclosureAction::ForceClose(id) => next.force_close(&id),
            DisclosureAction::AnimationDone { id, generation } => next.animation_done(&id, generation),
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faq(count: usize) -> Disclosures {
        (0..count).fold(Disclosures::default(), |set, i| {
            set.with_region(format!("faq-{i}"), Some(FAQ_GROUP), IconPair::Faq)
        })
    }

    fn settle(set: &mut Disclosures) {
        for pending in set.pending() {
            set.animation_done(&pending.id, pending.generation);
        }
    }

    #[test]
    fn click_passes_through_opening_before_open() {
        let mut set = Disclosures::default().with_region(MOBILE_MENU, None, IconPair::Menu);
        set.click(MOBILE_MENU);
        assert_eq!(set.state(MOBILE_MENU), DisclosureState::Opening);
        assert_eq!(set.get(MOBILE_MENU).unwrap().icon(), "fa-times");
        settle(&mut set);
        assert_eq!(set.state(MOBILE_MENU), DisclosureState::Open);

        set.click(MOBILE_MENU);
        assert_eq!(set.state(MOBILE_MENU), DisclosureState::Closing);
        assert_eq!(set.get(MOBILE_MENU).unwrap().icon(), "fa-bars");
        settle(&mut set);
        assert_eq!(set.state(MOBILE_MENU), DisclosureState::Closed);
    }

    #[test]
    fn stale_completion_is_ignored_after_restart() {
        let mut set = Disclosures::default().with_region(MOBILE_MENU, None, IconPair::Menu);
        set.click(MOBILE_MENU);
        let opening = set.pending().remove(0);
        set.click(MOBILE_MENU);
        set.animation_done(MOBILE_MENU, opening.generation);
        assert_eq!(set.state(MOBILE_MENU), DisclosureState::Closing);
        settle(&mut set);
        assert_eq!(set.state(MOBILE_MENU), DisclosureState::Closed);
    }

    #[test]
    fn force_close_closes_from_any_state() {
        let mut set = Disclosures::default().with_region(MOBILE_MENU, None, IconPair::Menu);
        set.force_close(MOBILE_MENU);
        assert_eq!(set.state(MOBILE_MENU), DisclosureState::Closed);
        assert!(set.pending().is_empty());

        set.click(MOBILE_MENU);
        set.force_close(MOBILE_MENU);
        settle(&mut set);
        assert_eq!(set.state(MOBILE_MENU), DisclosureState::Closed);
    }

    #[test]
    fn opening_faq_closes_the_other_open_one() {
        let mut set = faq(3);
        set.click("faq-0");
        settle(&mut set);
        set.click("faq-2");
        assert_eq!(set.state("faq-0"), DisclosureState::Closing);
        assert_eq!(set.state("faq-2"), DisclosureState::Opening);
        settle(&mut set);
        assert_eq!(set.open_count(FAQ_GROUP), 1);
        assert!(set.get("faq-2").unwrap().is_open());
    }

    #[test]
    fn group_never_settles_with_more_than_one_open() {
        let mut set = faq(4);
        let mut seed: u32 = 7;
        for step in 0..200 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let id = format!("faq-{}", (seed >> 16) % 4);
            set.click(&id);
            if step % 3 == 0 {
                settle(&mut set);
                assert!(set.open_count(FAQ_GROUP) <= 1);
            }
        }
        settle(&mut set);
        assert!(set.open_count(FAQ_GROUP) <= 1);
    }

    #[test]
    fn unknown_region_is_a_no_op() {
        let mut set = faq(1);
        set.click("missing");
        set.force_close("missing");
        set.animation_done("missing", 3);
        assert_eq!(set, faq(1));
    }
}
