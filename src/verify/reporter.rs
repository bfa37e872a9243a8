//! Verification reporter
//!
//! Pure projection of the backend's piece status into the stable
//! client-facing shape. No I/O, no caching.

use crate::gateway::PieceStatus;

use super::VerificationStatus;

/// Map a backend piece status onto [`VerificationStatus`].
pub fn report(piece: PieceStatus) -> VerificationStatus {
    VerificationStatus {
        exists: piece.exists,
        last_proven: piece.proof_set_last_proven,
        next_proof_due: piece.proof_set_next_proof_due,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_projection_preserves_values() {
        let proven = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let due = Utc.with_ymd_and_hms(2024, 6, 2, 12, 0, 0).unwrap();
        let status = report(PieceStatus {
            exists: true,
            proof_set_last_proven: Some(proven),
            proof_set_next_proof_due: Some(due),
        });
        assert!(status.exists);
        assert_eq!(status.last_proven, Some(proven));
        assert_eq!(status.next_proof_due, Some(due));
    }

    #[test]
    fn test_absent_piece_projects_to_nulls() {
        let status = report(PieceStatus::absent());
        assert!(!status.exists);
        assert_eq!(status.last_proven, None);
        assert_eq!(status.next_proof_due, None);
    }
}
