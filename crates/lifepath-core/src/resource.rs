//! The closed set of player resources
//!
//! Catalog files and generated options refer to resources by their
//! snake_case name. Names outside this set are tolerated by the condition
//! and effect code (read as zero, written nowhere).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest health a player can have
pub const HEALTH_MIN: i64 = 0;

/// Highest health a player can have
pub const HEALTH_MAX: i64 = 100;

/// A numeric player resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    Money,
    Health,
    Relations,
    Satisfaction,
    PassiveIncome,
}

/// Inclusive lower and upper bound of a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: i64,
    pub max: i64,
}

impl Bounds {
    /// Clamp a value into these bounds
    pub fn clamp(&self, value: i64) -> i64 {
        value.clamp(self.min, self.max)
    }

    /// Check whether a value lies within these bounds
    pub fn contains(&self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl Resource {
    /// All resources, in display order
    pub const ALL: [Resource; 5] = [
        Resource::Money,
        Resource::Health,
        Resource::Relations,
        Resource::Satisfaction,
        Resource::PassiveIncome,
    ];

    /// Parse a resource from its snake_case name
    pub fn parse(name: &str) -> Option<Resource> {
        match name {
            "money" => Some(Resource::Money),
            "health" => Some(Resource::Health),
            "relations" => Some(Resource::Relations),
            "satisfaction" => Some(Resource::Satisfaction),
            "passive_income" => Some(Resource::PassiveIncome),
            _ => None,
        }
    }

    /// The snake_case name used in catalogs and generated JSON
    pub fn name(&self) -> &'static str {
        match self {
            Resource::Money => "money",
            Resource::Health => "health",
            Resource::Relations => "relations",
            Resource::Satisfaction => "satisfaction",
            Resource::PassiveIncome => "passive_income",
        }
    }

    /// Declared bounds, or `None` for unbounded resources
    pub fn bounds(&self) -> Option<Bounds> {
        match self {
            Resource::Health => Some(Bounds {
                min: HEALTH_MIN,
                max: HEALTH_MAX,
            }),
            _ => None,
        }
    }

    /// Whether this resource can be spent as the price of a decision option
    pub fn is_cost_eligible(&self) -> bool {
        !matches!(self, Resource::PassiveIncome)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
