//! The six shadow dimensions and per-dimension score vectors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the six personality axes scored by the questionnaire.
///
/// Declaration order is significant: it is the tie-break whenever two
/// dimensions share a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Control,
    Aggression,
    Envy,
    Masking,
    Destruction,
    Detachment,
}

impl Dimension {
    pub const COUNT: usize = 6;

    /// All dimensions in declaration order
    pub const ALL: [Dimension; Self::COUNT] = [
        Dimension::Control,
        Dimension::Aggression,
        Dimension::Envy,
        Dimension::Masking,
        Dimension::Destruction,
        Dimension::Detachment,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Stable lowercase key, as used in answer and result JSON
    pub fn key(&self) -> &'static str {
        match self {
            Dimension::Control => "control",
            Dimension::Aggression => "aggression",
            Dimension::Envy => "envy",
            Dimension::Masking => "masking",
            Dimension::Destruction => "destruction",
            Dimension::Detachment => "detachment",
        }
    }

    pub fn name_cn(&self) -> &'static str {
        match self {
            Dimension::Control => "控制欲",
            Dimension::Aggression => "攻击性",
            Dimension::Envy => "嫉妒值",
            Dimension::Masking => "伪装度",
            Dimension::Destruction => "破坏冲动",
            Dimension::Detachment => "情感隔离",
        }
    }

    pub fn name_en(&self) -> &'static str {
        match self {
            Dimension::Control => "Control Drive",
            Dimension::Aggression => "Aggression",
            Dimension::Envy => "Envy Index",
            Dimension::Masking => "Masking Level",
            Dimension::Destruction => "Destructive Impulse",
            Dimension::Detachment => "Emotional Detachment",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Dimension::Control => "对人、事、局面的掌控需求",
            Dimension::Aggression => "直接或间接的对抗倾向",
            Dimension::Envy => "社会比较与资源焦虑",
            Dimension::Masking => "社会面具的厚度与依赖程度",
            Dimension::Destruction => "推翻、颠覆现有秩序的欲望",
            Dimension::Detachment => "主动切断情感连接的倾向",
        }
    }

    /// Literary display name (Chinese)
    pub fn poetic_cn(&self) -> &'static str {
        match self {
            Dimension::Control => "秩序的执念",
            Dimension::Aggression => "锋芒的剩余",
            Dimension::Envy => "镜中的饥渴",
            Dimension::Masking => "面具的厚度",
            Dimension::Destruction => "崩塌的欲望",
            Dimension::Detachment => "荒原的厚度",
        }
    }

    /// Literary display name (English)
    pub fn poetic_en(&self) -> &'static str {
        match self {
            Dimension::Control => "Order Obsession",
            Dimension::Aggression => "Blade Residual",
            Dimension::Envy => "Mirror Hunger",
            Dimension::Masking => "Mask Density",
            Dimension::Destruction => "Collapse Desire",
            Dimension::Detachment => "Wasteland Depth",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One integer score per dimension.
///
/// Used for raw totals, ceilings, normalized 0-100 scores and the
/// reference radar profiles of the archetype catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DimensionScores {
    pub control: u32,
    pub aggression: u32,
    pub envy: u32,
    pub masking: u32,
    pub destruction: u32,
    pub detachment: u32,
}

impl DimensionScores {
    pub const fn new(
        control: u32,
        aggression: u32,
        envy: u32,
        masking: u32,
        destruction: u32,
        detachment: u32,
    ) -> Self {
        Self {
            control,
            aggression,
            envy,
            masking,
            destruction,
            detachment,
        }
    }

    pub const fn zero() -> Self {
        Self::new(0, 0, 0, 0, 0, 0)
    }

    /// Every dimension set to the same value
    pub const fn uniform(value: u32) -> Self {
        Self::new(value, value, value, value, value, value)
    }

    pub fn get(&self, dimension: Dimension) -> u32 {
        match dimension {
            Dimension::Control => self.control,
            Dimension::Aggression => self.aggression,
            Dimension::Envy => self.envy,
            Dimension::Masking => self.masking,
            Dimension::Destruction => self.destruction,
            Dimension::Detachment => self.detachment,
        }
    }

    pub fn get_mut(&mut self, dimension: Dimension) -> &mut u32 {
        match dimension {
            Dimension::Control => &mut self.control,
            Dimension::Aggression => &mut self.aggression,
            Dimension::Envy => &mut self.envy,
            Dimension::Masking => &mut self.masking,
            Dimension::Destruction => &mut self.destruction,
            Dimension::Detachment => &mut self.detachment,
        }
    }

    pub fn set(&mut self, dimension: Dimension, value: u32) {
        *self.get_mut(dimension) = value;
    }

    /// Iterate `(dimension, score)` pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, u32)> + '_ {
        Dimension::ALL.into_iter().map(move |d| (d, self.get(d)))
    }

    pub fn sum(&self) -> u32 {
        self.iter().map(|(_, v)| v).sum()
    }

    pub fn to_array(&self) -> [u32; Dimension::COUNT] {
        Dimension::ALL.map(|d| self.get(d))
    }

    pub fn from_array(values: [u32; Dimension::COUNT]) -> Self {
        let [control, aggression, envy, masking, destruction, detachment] = values;
        Self::new(control, aggression, envy, masking, destruction, detachment)
    }
}
