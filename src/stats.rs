//! Ranking statistics over classifier scores.
use crate::error::PipelineError;

/// Area under the ROC curve for a set of scores and boolean targets.
///
/// Computed as the Mann-Whitney U statistic: sort by score, assign midranks to
/// ties, and compare the rank sum of the positive class against the count of
/// positive/negative pairs. 1.0 means every spam message outranks every ham
/// message, 0.5 is random ranking.
///
/// # Arguments
///
/// * `scores` - One score per example; higher means more spam-like.
/// * `targets` - `true` for spam, aligned with `scores`.
pub fn roc_auc(scores: &[f32], targets: &[bool]) -> Result<f32, PipelineError> {
    if scores.len() != targets.len() {
        return Err(PipelineError::DataFormat(format!(
            "scores and targets must have equal lengths, got {} and {}",
            scores.len(),
            targets.len()
        )));
    }
    let non_finite = scores.iter().filter(|s| !s.is_finite()).count();
    if non_finite > 0 {
        return Err(PipelineError::NonFiniteScore(non_finite));
    }

    let n_pos = targets.iter().filter(|&&t| t).count();
    let n_neg = targets.len() - n_pos;
    if n_pos == 0 || n_neg == 0 {
        return Err(PipelineError::DegenerateLabels);
    }

    // Sort indices by ascending score.
    let mut sorted_indices: Vec<usize> = (0..scores.len()).collect();
    sorted_indices.sort_unstable_by(|&a, &b| scores[a].partial_cmp(&scores[b]).unwrap());

    // Midranks: tied scores all receive the average of their rank range.
    let mut ranks = vec![0.0f64; scores.len()];
    let mut i = 0;
    while i < sorted_indices.len() {
        let mut j = i;
        while j + 1 < sorted_indices.len()
            && scores[sorted_indices[j + 1]] == scores[sorted_indices[i]]
        {
            j += 1;
        }
        // Ranks are 1-based; the tie group spans positions i..=j.
        let midrank = (i + j) as f64 / 2.0 + 1.0;
        for &idx in &sorted_indices[i..=j] {
            ranks[idx] = midrank;
        }
        i = j + 1;
    }

    let positive_rank_sum: f64 = ranks
        .iter()
        .zip(targets.iter())
        .filter(|(_, &t)| t)
        .map(|(&r, _)| r)
        .sum();

    let n_pos_f = n_pos as f64;
    let n_neg_f = n_neg as f64;
    let u = positive_rank_sum - n_pos_f * (n_pos_f + 1.0) / 2.0;
    Ok((u / (n_pos_f * n_neg_f)) as f32)
}

/// Arithmetic mean of a non-empty slice of per-fold metrics.
pub fn mean(values: &[f32]) -> f32 {
    values.iter().sum::<f32>() / values.len() as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auc_perfect_ranking() {
        let scores = vec![0.9, 0.8, 0.2, 0.1];
        let targets = vec![true, true, false, false];
        let auc = roc_auc(&scores, &targets).unwrap();
        assert!((auc - 1.0).abs() < 1e-6);
    }

    #[test]
    fn auc_inverted_ranking() {
        let scores = vec![0.1, 0.2, 0.8, 0.9];
        let targets = vec![true, true, false, false];
        let auc = roc_auc(&scores, &targets).unwrap();
        assert!(auc.abs() < 1e-6);
    }

    #[test]
    fn auc_all_tied_is_random() {
        let scores = vec![0.5, 0.5, 0.5, 0.5];
        let targets = vec![true, false, true, false];
        let auc = roc_auc(&scores, &targets).unwrap();
        assert!((auc - 0.5).abs() < 1e-6);
    }

    #[test]
    fn auc_rejects_single_class() {
        let scores = vec![0.1, 0.2];
        assert_eq!(
            roc_auc(&scores, &[true, true]).unwrap_err(),
            PipelineError::DegenerateLabels
        );
    }

    #[test]
    fn auc_rejects_nan_scores() {
        let scores = vec![0.1, f32::NAN];
        assert_eq!(
            roc_auc(&scores, &[true, false]).unwrap_err(),
            PipelineError::NonFiniteScore(1)
        );
    }

    #[test]
    fn auc_rejects_length_mismatch() {
        let scores = vec![0.1, 0.2, 0.3];
        assert!(roc_auc(&scores, &[true, false]).is_err());
    }
}
