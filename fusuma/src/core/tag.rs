use std::fmt;

/// Tag membership bitset, explicitly sized to the tag list it belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    bits: Vec<bool>,
}

impl TagSet {
    pub fn empty(len: usize) -> Self {
        Self {
            bits: vec![false; len],
        }
    }

    pub fn all(len: usize) -> Self {
        Self {
            bits: vec![true; len],
        }
    }

    /// Exactly one bit set. An out-of-range index yields an empty set.
    pub fn single(len: usize, index: usize) -> Self {
        let mut set = Self::empty(len);
        set.set(index, true);
        set
    }

    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.bits.get(index).copied().unwrap_or(false)
    }

    pub fn set(&mut self, index: usize, value: bool) {
        if let Some(bit) = self.bits.get_mut(index) {
            *bit = value;
        }
    }

    /// Flips one bit and returns its new value.
    pub fn toggle(&mut self, index: usize) -> bool {
        match self.bits.get_mut(index) {
            Some(bit) => {
                *bit = !*bit;
                *bit
            }
            None => false,
        }
    }

    /// True if at least one bit is set.
    pub fn any(&self) -> bool {
        self.bits.iter().any(|&b| b)
    }

    pub fn intersects(&self, other: &TagSet) -> bool {
        self.bits.iter().zip(&other.bits).any(|(&a, &b)| a && b)
    }

    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter_map(|(i, &b)| b.then_some(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }
}

impl FromIterator<bool> for TagSet {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}
