//! # Closest Embedding

use crate::{
    embedding::{EmbeddingLayout, EmbeddingSlot},
    types::{ScoreType, one_hot},
    vocab::Vocabulary,
};

/// Find the position of the highest score.
///
/// The first occurrence of the maximum wins; NaN scores are skipped.
///
/// ## Returns
/// `None` for an empty score vector; `Some(0)` if every score is NaN.
pub fn closest_index<F: ScoreType>(scores: &[F]) -> Option<usize> {
    if scores.is_empty() {
        return None;
    }

    let mut best: Option<(usize, F)> = None;
    for (idx, &score) in scores.iter().enumerate() {
        if score.is_nan() {
            continue;
        }
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((idx, score)),
        }
    }

    Some(best.map_or(0, |(idx, _)| idx))
}

/// Snap a raw score vector to the closest one-hot embedding.
///
/// ## Returns
/// A vector of the same length, with a single `1` at [`closest_index`];
/// empty for an empty score vector.
pub fn closest_embedding<F: ScoreType>(scores: &[F]) -> Vec<F> {
    match closest_index(scores) {
        Some(idx) => one_hot(scores.len(), idx),
        None => Vec::new(),
    }
}

/// Read the vocabulary word out of a one-hot embedding.
///
/// Scans positions `>= 2` (the boundary slots are skipped) for the first
/// value exactly equal to `1`; the word is `vocab[position - 2]`.
///
/// ## Returns
/// `None` if no word position holds `1`, or the position is beyond the vocabulary.
pub fn try_reconstruct_word<'v, F: ScoreType>(
    vocab: &'v Vocabulary,
    embedding: &[F],
) -> Option<&'v str> {
    let layout = EmbeddingLayout::new(vocab.len());

    let (position, _) = embedding
        .iter()
        .enumerate()
        .skip(crate::embedding::RESERVED_SLOTS)
        .find(|(_, value)| **value == F::one())?;

    match layout.slot(position)? {
        EmbeddingSlot::Word(idx) => vocab.get(idx),
        EmbeddingSlot::Boundary(_) => None,
    }
}

/// Read the vocabulary word out of a one-hot embedding.
///
/// See [`try_reconstruct_word`].
///
/// ## Returns
/// The word; or `""` if none was found.
pub fn reconstruct_word<F: ScoreType>(
    vocab: &Vocabulary,
    embedding: &[F],
) -> String {
    try_reconstruct_word(vocab, embedding)
        .unwrap_or_default()
        .to_string()
}
