/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Manhattan distance below which aggressive hostiles chase the hero.
    /// The comparison is strict: a hostile exactly this far away idles.
    pub aggro_radius: u32,
}

impl GameConfig {
    // ===== compile-time constants =====
    /// Hit point ceiling shared by every actor. Healing never exceeds it.
    pub const MAX_HIT_POINTS: u32 = 20;
    pub const MAX_INVENTORY_SLOTS: usize = 8;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_AGGRO_RADIUS: u32 = 8;

    pub fn new() -> Self {
        Self {
            aggro_radius: Self::DEFAULT_AGGRO_RADIUS,
        }
    }

    pub fn with_aggro_radius(aggro_radius: u32) -> Self {
        Self { aggro_radius }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
