use crate::config::rules::FeeTier;

/// First tier whose `max_experience` covers the speaker wins; unknown
/// experience or anything past the last tier costs nothing.
pub fn registration_fee(experience: Option<i32>, tiers: &[FeeTier]) -> u32 {
    let Some(years) = experience else {
        return 0;
    };

    tiers
        .iter()
        .find(|tier| years <= tier.max_experience)
        .map(|tier| tier.fee)
        .unwrap_or(0)
}
