//! # Embedding Layout

/// The number of leading positions reserved for boundary markers.
pub const RESERVED_SLOTS: usize = 2;

/// A sequence boundary marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Boundary {
    /// Beginning-of-sequence.
    Bos,

    /// End-of-sequence.
    Eos,
}

impl Boundary {
    /// The embedding position of this marker.
    pub const fn index(self) -> usize {
        match self {
            Boundary::Bos => 0,
            Boundary::Eos => 1,
        }
    }
}

/// The meaning of a single embedding position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbeddingSlot {
    /// A boundary marker slot.
    Boundary(Boundary),

    /// The slot of the vocabulary word at this index.
    Word(usize),
}

/// The shared embedding layout for a vocabulary of `vocab_size` words.
///
/// | position    | slot                       |
/// |-------------|----------------------------|
/// | `0`         | [`Boundary::Bos`]          |
/// | `1`         | [`Boundary::Eos`]          |
/// | `k + 2`     | vocabulary word `k`        |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbeddingLayout {
    vocab_size: usize,
}

impl EmbeddingLayout {
    /// Create the layout for a vocabulary size.
    pub const fn new(vocab_size: usize) -> Self {
        Self { vocab_size }
    }

    /// The number of vocabulary words.
    pub const fn vocab_size(&self) -> usize {
        self.vocab_size
    }

    /// The embedding size: `vocab_size + 2`.
    pub const fn size(&self) -> usize {
        self.vocab_size + RESERVED_SLOTS
    }

    /// The embedding position of vocabulary word `word_index`.
    pub const fn word_position(
        &self,
        word_index: usize,
    ) -> usize {
        word_index + RESERVED_SLOTS
    }

    /// Classify an embedding position.
    ///
    /// ## Returns
    /// `None` if `position` is outside the layout.
    pub fn slot(
        &self,
        position: usize,
    ) -> Option<EmbeddingSlot> {
        match position {
            0 => Some(EmbeddingSlot::Boundary(Boundary::Bos)),
            1 => Some(EmbeddingSlot::Boundary(Boundary::Eos)),
            p if p < self.size() => Some(EmbeddingSlot::Word(p - RESERVED_SLOTS)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary() {
        assert_eq!(Boundary::Bos.index(), 0);
        assert_eq!(Boundary::Eos.index(), 1);
        assert_eq!(Boundary::Bos.to_string(), "BOS");
        assert_eq!(Boundary::Eos.to_string(), "EOS");
    }

    #[test]
    fn test_layout() {
        let layout = EmbeddingLayout::new(3);
        assert_eq!(layout.vocab_size(), 3);
        assert_eq!(layout.size(), 5);
        assert_eq!(layout.word_position(0), 2);
        assert_eq!(layout.word_position(2), 4);

        assert_eq!(layout.slot(0), Some(EmbeddingSlot::Boundary(Boundary::Bos)));
        assert_eq!(layout.slot(1), Some(EmbeddingSlot::Boundary(Boundary::Eos)));
        assert_eq!(layout.slot(2), Some(EmbeddingSlot::Word(0)));
        assert_eq!(layout.slot(4), Some(EmbeddingSlot::Word(2)));
        assert_eq!(layout.slot(5), None);
    }

    #[test]
    fn test_empty_layout() {
        let layout = EmbeddingLayout::new(0);
        assert_eq!(layout.size(), 2);
        assert_eq!(layout.slot(1), Some(EmbeddingSlot::Boundary(Boundary::Eos)));
        assert_eq!(layout.slot(2), None);
    }
}
