use std::fmt;

/// Which party initiated a swipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeSide {
    /// A listing's owner swiping on a renter profile (`listing_on_renter`)
    Listing,
    /// A renter swiping on a listing (`renter_on_listing`)
    Renter,
}

impl SwipeSide {
    /// Lowercase label used in messages and logs
    pub fn label(&self) -> &'static str {
        match self {
            SwipeSide::Listing => "listing",
            SwipeSide::Renter => "renter",
        }
    }

    /// Table holding this side's swipes
    pub fn table(&self) -> &'static str {
        match self {
            SwipeSide::Listing => "listing_on_renter",
            SwipeSide::Renter => "renter_on_listing",
        }
    }

    /// Acknowledgment returned once a swipe is stored
    pub fn recorded_message(&self) -> &'static str {
        match self {
            SwipeSide::Listing => "Listing swipe recorded",
            SwipeSide::Renter => "Renter swipe recorded",
        }
    }

    /// Prefix for the message of a failed swipe
    pub fn failure_message(&self) -> &'static str {
        match self {
            SwipeSide::Listing => "Failed to record listing swipe",
            SwipeSide::Renter => "Failed to record renter swipe",
        }
    }
}

impl fmt::Display for SwipeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A directional preference from `source_id` toward `target_id`
///
/// For [`SwipeSide::Listing`] the source is a listing and the target a renter
/// profile; for [`SwipeSide::Renter`] it is the other way round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swipe {
    pub side: SwipeSide,
    pub source_id: i64,
    pub target_id: i64,
    pub is_right: bool,
}

impl Swipe {
    pub fn listing_id(&self) -> i64 {
        match self.side {
            SwipeSide::Listing => self.source_id,
            SwipeSide::Renter => self.target_id,
        }
    }

    pub fn renter_profile_id(&self) -> i64 {
        match self.side {
            SwipeSide::Listing => self.target_id,
            SwipeSide::Renter => self.source_id,
        }
    }

    /// The (listing_id, renter_profile_id) pair both directions share
    pub fn pair(&self) -> (i64, i64) {
        (self.listing_id(), self.renter_profile_id())
    }
}

/// Result of storing a swipe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwipeOutcome {
    /// Row id of the (possibly updated) swipe record
    pub id: i64,
    /// Whether the pair is now a mutual match
    pub is_match: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_is_side_independent() {
        let from_listing = Swipe {
            side: SwipeSide::Listing,
            source_id: 5,
            target_id: 9,
            is_right: true,
        };
        let from_renter = Swipe {
            side: SwipeSide::Renter,
            source_id: 9,
            target_id: 5,
            is_right: true,
        };

        assert_eq!(from_listing.pair(), (5, 9));
        assert_eq!(from_listing.pair(), from_renter.pair());
    }

    #[test]
    fn test_side_tables() {
        assert_eq!(SwipeSide::Listing.table(), "listing_on_renter");
        assert_eq!(SwipeSide::Renter.table(), "renter_on_listing");
        assert_eq!(SwipeSide::Renter.to_string(), "renter");
    }
}
