use crate::models::LandPlot;

/// Default number of similar lands returned
pub const DEFAULT_SIMILAR_LIMIT: usize = 4;

/// Sizes within this fraction of the target count as similar
const SIZE_TOLERANCE: f64 = 0.2;

/// Check if `candidate` resembles `target`
///
/// A land is similar when it shares the exact location text, shares the
/// exact soil type, or its size lies within 20% of the target's.
#[inline]
pub fn is_similar_land(target: &LandPlot, candidate: &LandPlot) -> bool {
    if candidate.id == target.id {
        return false;
    }

    let min_size = target.size_acres * (1.0 - SIZE_TOLERANCE);
    let max_size = target.size_acres * (1.0 + SIZE_TOLERANCE);

    candidate.location == target.location
        || candidate.soil_type == target.soil_type
        || (candidate.size_acres >= min_size && candidate.size_acres <= max_size)
}

/// Lands resembling `target`, in input order
pub fn find_similar_lands<'a>(
    target: &LandPlot,
    lands: &'a [LandPlot],
    limit: usize,
) -> Vec<&'a LandPlot> {
    lands
        .iter()
        .filter(|land| is_similar_land(target, land))
        .take(limit)
        .collect()
}

/// Check if a listing belongs to an owner
///
/// Owner ids are compared when both sides have one; otherwise the emails
/// are compared trimmed and case-insensitively.
pub fn is_owned_by(land: &LandPlot, owner_id: Option<&str>, email: Option<&str>) -> bool {
    if let (Some(owner_id), Some(listed)) = (owner_id, land.owner_id.as_deref()) {
        return listed == owner_id;
    }

    match (email, land.email.as_deref()) {
        (Some(email), Some(listed)) => {
            let email = email.trim().to_lowercase();
            !email.is_empty() && listed.trim().to_lowercase() == email
        }
        _ => false,
    }
}

/// The landowner's most recently added listing, which stands in for the
/// landowner when finding farmers
pub fn select_active_listing<'a>(
    lands: &'a [LandPlot],
    owner_id: Option<&str>,
    email: Option<&str>,
) -> Option<&'a LandPlot> {
    lands
        .iter()
        .filter(|land| is_owned_by(land, owner_id, email))
        .last()
}
