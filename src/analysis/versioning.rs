use sha2::{Digest, Sha256};

use crate::draw::DrawRecord;

/// Content hash of an analysis window.
///
/// Hashes `region:date:numbers` per draw, in the order given (newest first
/// when read from the store). Identical windows give identical versions.
pub fn window_version(draws: &[DrawRecord]) -> String {
    let mut hasher = Sha256::new();
    for draw in draws {
        let line = format!(
            "{}:{}:{}\n",
            draw.region.as_str(),
            draw.date.format("%Y-%m-%d"),
            draw.numbers.as_str()
        );
        hasher.update(line.as_bytes());
    }
    format!("sha256:{}", hex::encode(hasher.finalize()))
}
