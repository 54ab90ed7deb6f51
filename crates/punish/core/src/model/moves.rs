//! Move records and their classification enums.

/// Broad move family as listed in frame data.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MoveCategory {
    Jab,
    Tilt,
    Smash,
    Aerial,
    Special,
    Grab,
    Throw,
    Dodge,
    Movement,
    Dash,
}

/// Effective reach of a move's hitbox.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MoveRange {
    Close,
    Mid,
    Far,
    Projectile,
}

/// Stick direction a move is performed with.
///
/// Frame data sources rarely carry this, so it is optional on [`Move`].
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MoveDirection {
    Neutral,
    Up,
    Down,
    Forward,
    Back,
}

/// Damage dealt by a move: a single value or one value per hit.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Damage {
    Single(f64),
    MultiHit(Vec<f64>),
}

impl Damage {
    /// Damage used by every shield and punish calculation.
    ///
    /// Multi-hit moves are reduced to their first hit; an empty hit list counts as 0.
    pub fn base(&self) -> f64 {
        match self {
            Self::Single(value) => *value,
            Self::MultiHit(hits) => hits.first().copied().unwrap_or(0.0),
        }
    }

    /// Returns the first non-finite value, if any.
    pub fn non_finite(&self) -> Option<f64> {
        match self {
            Self::Single(value) => (!value.is_finite()).then_some(*value),
            Self::MultiHit(hits) => hits.iter().copied().find(|hit| !hit.is_finite()),
        }
    }
}

impl Default for Damage {
    fn default() -> Self {
        Self::Single(0.0)
    }
}

impl From<f64> for Damage {
    fn from(value: f64) -> Self {
        Self::Single(value)
    }
}

/// Special properties attached to a move.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MoveProperties {
    pub is_kill_move: bool,
    /// Opponent percent above which the move kills from center stage.
    pub kill_percent: Option<f64>,
    pub has_armor: bool,
    pub is_command_grab: bool,
    pub is_spike: bool,
    pub is_meteor: bool,
    pub has_invincibility: bool,
    pub has_intangibility: bool,
    pub priority: Option<i32>,
}

/// A single move from a fighter's moveset.
///
/// `total_frames == startup + active + recovery` is expected from upstream data
/// and is not re-checked here.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub id: String,
    pub name: String,
    pub display_name: String,
    pub category: MoveCategory,
    #[cfg_attr(feature = "serde", serde(rename = "type", default))]
    pub move_type: String,
    /// Explicit direction tag; see [`Move::is_up_variant`].
    #[cfg_attr(feature = "serde", serde(default))]
    pub direction: Option<MoveDirection>,

    pub startup: i32,
    pub active: i32,
    pub recovery: i32,
    pub total_frames: i32,

    #[cfg_attr(feature = "serde", serde(default))]
    pub on_shield: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub on_hit: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub on_whiff: i32,

    pub damage: Damage,
    pub range: MoveRange,
    #[cfg_attr(feature = "serde", serde(default))]
    pub properties: MoveProperties,
}

impl Move {
    /// Creates a move with the given timing. `total_frames` is derived from the parts.
    pub fn new(
        id: impl Into<String>,
        category: MoveCategory,
        startup: i32,
        active: i32,
        recovery: i32,
        damage: impl Into<Damage>,
        range: MoveRange,
    ) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            display_name: id.clone(),
            id,
            category,
            move_type: String::new(),
            direction: None,
            startup,
            active,
            recovery,
            total_frames: startup.saturating_add(active).saturating_add(recovery),
            on_shield: 0,
            on_hit: 0,
            on_whiff: 0,
            damage: damage.into(),
            range,
            properties: MoveProperties::default(),
        }
    }

    /// Sets the internal name (builder pattern).
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the direction tag (builder pattern).
    #[must_use]
    pub fn with_direction(mut self, direction: MoveDirection) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Marks the move as a kill move (builder pattern).
    #[must_use]
    pub fn with_kill_percent(mut self, kill_percent: f64) -> Self {
        self.properties.is_kill_move = true;
        self.properties.kill_percent = Some(kill_percent);
        self
    }

    /// Overrides the total frame count (builder pattern).
    #[must_use]
    pub fn with_total_frames(mut self, total_frames: i32) -> Self {
        self.total_frames = total_frames;
        self
    }

    /// Damage of the first hit.
    pub fn base_damage(&self) -> f64 {
        self.damage.base()
    }

    /// Whether this move is the "up" variant of its category.
    ///
    /// An explicit [`MoveDirection`] wins. Without one the internal name is
    /// matched for the substring `"up"`, which is how frame data usually
    /// names `upsmash` / `upb`.
    pub fn is_up_variant(&self) -> bool {
        match self.direction {
            Some(direction) => direction == MoveDirection::Up,
            None => self.name.contains("up"),
        }
    }

    pub fn is_up_smash(&self) -> bool {
        self.category == MoveCategory::Smash && self.is_up_variant()
    }

    pub fn is_up_special(&self) -> bool {
        self.category == MoveCategory::Special && self.is_up_variant()
    }

    pub fn is_grab(&self) -> bool {
        self.category == MoveCategory::Grab
    }

    pub fn is_aerial(&self) -> bool {
        self.category == MoveCategory::Aerial
    }

    /// Frames after the hitbox ends during which the attacker cannot act.
    pub fn exposed_frames(&self) -> i32 {
        self.total_frames
            .saturating_sub(self.startup)
            .saturating_sub(self.active)
    }
}
