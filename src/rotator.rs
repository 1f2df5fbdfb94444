/// Index cycler behind the testimonial slider.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rotator {
    len: usize,
    current: usize,
}

impl Rotator {
    /// Returns `None` for an empty slide set; nothing should be scheduled then.
    pub fn start(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { len, current: 0 })
    }

    pub fn tick(&mut self) {
        self.current = (self.current + 1) % self.len;
    }

    #[cfg(test)]
    pub fn current(&self) -> usize {
        self.current
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_active(&self, index: usize) -> bool {
        index == self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_does_not_start() {
        assert!(Rotator::start(0).is_none());
    }

    #[test]
    fn index_after_k_ticks_is_k_mod_n() {
        for n in 1..=4 {
            let mut rotator = Rotator::start(n).unwrap();
            assert_eq!(rotator.current(), 0);
            for k in 1..=11 {
                rotator.tick();
                assert_eq!(rotator.current(), k % n);
            }
        }
    }

    #[test]
    fn exactly_one_slide_is_active() {
        let mut rotator = Rotator::start(3).unwrap();
        rotator.tick();
        let active: Vec<usize> = (0..rotator.len()).filter(|&i| rotator.is_active(i)).collect();
        assert_eq!(active, vec![1]);
    }
}
