//! Route module - destination queues for processed claims

use serde::{Serialize, Serializer};

/// Destination queue for a routed claim.
///
/// The variants form a closed set; routing rules are evaluated in a fixed
/// cascade and always land on exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Mandatory fields missing; a human must complete the claim
    ManualReview,

    /// Description contains fraud indicators; flag for investigation
    InvestigationFlag,

    /// Injury claims go to the specialist queue
    SpecialistQueue,

    /// Low-value claims eligible for accelerated settlement
    FastTrack,

    /// Everything else
    StandardQueue,
}

impl Route {
    /// The route name as it appears in output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Route::ManualReview => "Manual Review",
            Route::InvestigationFlag => "Investigation Flag",
            Route::SpecialistQueue => "Specialist Queue",
            Route::FastTrack => "Fast-track",
            Route::StandardQueue => "Standard Queue",
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Route {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_names() {
        assert_eq!(Route::ManualReview.as_str(), "Manual Review");
        assert_eq!(Route::InvestigationFlag.as_str(), "Investigation Flag");
        assert_eq!(Route::SpecialistQueue.as_str(), "Specialist Queue");
        assert_eq!(Route::FastTrack.as_str(), "Fast-track");
        assert_eq!(Route::StandardQueue.as_str(), "Standard Queue");
    }

    #[test]
    fn test_route_serializes_as_display_string() {
        let json = serde_json::to_string(&Route::FastTrack).unwrap();
        assert_eq!(json, "\"Fast-track\"");
    }
}
