// Core algorithm exports
pub mod distance;
pub mod listings;
pub mod matcher;
pub mod price;
pub mod scoring;

pub use distance::{distance_between, haversine_distance, DistanceTier};
pub use listings::{find_similar_lands, is_owned_by, select_active_listing};
pub use matcher::{Counterpart, MatchList, Matcher, RankedMatches, DEFAULT_LIMIT};
pub use price::{ParsedPrice, PriceKind};
pub use scoring::calculate_match_score;
