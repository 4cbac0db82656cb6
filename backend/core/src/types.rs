use serde::{Deserialize, Serialize};

/// Fixed per-task contribution triple: how much a visual activity demands
/// far-, intermediate-, and near-distance vision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskWeight {
    pub far: u32,
    pub mid: u32,
    pub near: u32,
}

impl TaskWeight {
    pub const ZERO: TaskWeight = TaskWeight { far: 0, mid: 0, near: 0 };

    pub const fn new(far: u32, mid: u32, near: u32) -> Self {
        Self { far, mid, near }
    }
}

/// Elementwise sum of the selected tasks' weight triples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightVector {
    pub far: u32,
    pub mid: u32,
    pub near: u32,
}

impl WeightVector {
    pub const fn new(far: u32, mid: u32, near: u32) -> Self {
        Self { far, mid, near }
    }

    pub fn add(&mut self, w: TaskWeight) {
        self.far += w.far;
        self.mid += w.mid;
        self.near += w.near;
    }
}

/// The closed set of lens recommendations the engine can produce.
///
/// User-facing (localized) labels belong to the channel layer, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LensCategory {
    DistanceSingleVision,
    NearSingleVision,
    ProgressiveDaily,
    OfficeProgressive,
    DeskProgressive,
}

/// One classification request. Zero means "not provided" for the numeric
/// fields; unrecognized task names are allowed and contribute nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationInput {
    pub task_names: Vec<String>,
    pub age: u32,
    pub near_distance_cm: u32,
    pub pc_distance_cm: u32,
}

/// Purely derived result: category plus the supporting diopter figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub category: LensCategory,
    pub weights: WeightVector,
    /// Age-based addition estimate, in diopters.
    pub age_addition_d: f64,
    /// Focal demand of the near working distance, in diopters.
    pub near_demand_d: f64,
    /// Focal demand of the PC working distance, in diopters.
    pub pc_demand_d: f64,
}
