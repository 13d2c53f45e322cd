//! Run labels.

use rand::Rng;

use crate::config::{APP_LABEL_CHARSET, APP_LABEL_LENGTH};

/// Generates a short lowercase label identifying a run.
///
/// The random source is owned by the caller, so a seeded generator gives
/// reproducible labels.
///
/// # Examples
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let label = prow_metrics::generate_app_label(&mut rng);
/// assert_eq!(label.len(), 8);
/// ```
pub fn generate_app_label<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..APP_LABEL_LENGTH)
        .map(|_| APP_LABEL_CHARSET[rng.random_range(0..APP_LABEL_CHARSET.len())] as char)
        .collect()
}
