//! Body catalog — the declarative description of a system.
//!
//! A catalog is a star plus its planets, loaded from JSON at startup.
//! Colors travel as `#RRGGBB` strings and deserialize straight to linear
//! RGB; validation rejects anything the motion and render systems cannot
//! represent.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::mesh::Color;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("body `{body}`: {field} must be positive")]
    NonPositive { body: String, field: &'static str },
    #[error("body `{body}`: ring outer edge must exceed inner edge")]
    InvertedRing { body: String },
}

/// Serde adapter for `#RRGGBB` color strings.
mod hex_color {
    use super::Color;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(color: &Color, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&color.to_hex_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex_str(&s)
            .ok_or_else(|| de::Error::custom(format!("invalid color `{s}`: expected #RRGGBB")))
    }
}

/// The central star.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StarDef {
    pub name: String,
    /// Sphere radius in world units.
    pub radius: f32,
    #[serde(with = "hex_color")]
    pub color: Color,
    /// HDR glow multiplier.
    #[serde(default)]
    pub emissive: f32,
}

/// One planet: static record; runtime state (current angle, spin) lives on
/// the spawned body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanetDef {
    pub name: String,
    /// Sphere radius in world units.
    pub radius: f32,
    #[serde(with = "hex_color")]
    pub color: Color,
    /// Orbital distance from the star.
    pub distance: f32,
    /// Orbital angular speed in radians per second.
    pub speed: f32,
    /// Self-rotation speed in radians per second.
    #[serde(default = "default_spin_speed")]
    pub spin_speed: f32,
    /// Optional ring descriptor.
    #[serde(default)]
    pub ring: Option<RingDef>,
}

/// Ring proportions relative to the planet radius.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RingDef {
    /// Inner edge as a multiple of the planet radius (default: 1.3).
    #[serde(default = "default_ring_inner")]
    pub inner_scale: f32,
    /// Outer edge as a multiple of the planet radius (default: 2.0).
    #[serde(default = "default_ring_outer")]
    pub outer_scale: f32,
    #[serde(with = "hex_color", default = "default_ring_color")]
    pub color: Color,
    #[serde(default = "default_ring_opacity")]
    pub opacity: f32,
}

fn default_spin_speed() -> f32 {
    0.6
}

fn default_ring_inner() -> f32 {
    1.3
}

fn default_ring_outer() -> f32 {
    2.0
}

fn default_ring_color() -> Color {
    Color::from_hex(0xDDDDDD)
}

fn default_ring_opacity() -> f32 {
    0.7
}

/// A complete system: one star, any number of planets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemCatalog {
    pub star: StarDef,
    pub planets: Vec<PlanetDef>,
}

impl SystemCatalog {
    /// Parse and validate a catalog from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// An empty system — the fallback when a catalog fails to load.
    pub fn empty() -> Self {
        Self {
            star: StarDef {
                name: String::new(),
                radius: 1.0,
                color: Color::default(),
                emissive: 0.0,
            },
            planets: Vec::new(),
        }
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let positive = |value: f32, body: &str, field: &'static str| {
            if value > 0.0 {
                Ok(())
            } else {
                Err(CatalogError::NonPositive {
                    body: body.to_string(),
                    field,
                })
            }
        };

        positive(self.star.radius, &self.star.name, "radius")?;
        for planet in &self.planets {
            positive(planet.radius, &planet.name, "radius")?;
            positive(planet.distance, &planet.name, "distance")?;
            if let Some(ring) = &planet.ring {
                positive(ring.inner_scale, &planet.name, "ring.inner_scale")?;
                if ring.outer_scale <= ring.inner_scale {
                    return Err(CatalogError::InvertedRing {
                        body: planet.name.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_catalog() {
        let json = r##"{
            "star": { "name": "Sun", "radius": 6.0, "color": "#FFFF00", "emissive": 2.0 },
            "planets": [
                { "name": "Earth", "radius": 1.6, "color": "#6B93D6", "distance": 35.0, "speed": 0.02 }
            ]
        }"##;
        let catalog = SystemCatalog::from_json(json).unwrap();
        assert_eq!(catalog.star.name, "Sun");
        assert_eq!(catalog.planets.len(), 1);
        let earth = &catalog.planets[0];
        assert_eq!(earth.distance, 35.0);
        assert_eq!(earth.spin_speed, 0.6); // default applies
        assert!(earth.ring.is_none());
    }

    #[test]
    fn parse_ring_with_defaults() {
        let json = r##"{
            "star": { "name": "Sun", "radius": 6.0, "color": "#FFFF00" },
            "planets": [
                { "name": "Saturn", "radius": 2.4, "color": "#F5E4B7",
                  "distance": 85.0, "speed": 0.007, "ring": {} }
            ]
        }"##;
        let catalog = SystemCatalog::from_json(json).unwrap();
        let ring = catalog.planets[0].ring.as_ref().unwrap();
        assert_eq!(ring.inner_scale, 1.3);
        assert_eq!(ring.outer_scale, 2.0);
        assert_eq!(ring.opacity, 0.7);
    }

    #[test]
    fn bad_color_is_a_parse_error() {
        let json = r##"{
            "star": { "name": "Sun", "radius": 6.0, "color": "yellow" },
            "planets": []
        }"##;
        assert!(matches!(
            SystemCatalog::from_json(json),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn zero_distance_is_rejected() {
        let json = r##"{
            "star": { "name": "Sun", "radius": 6.0, "color": "#FFFF00" },
            "planets": [
                { "name": "Icarus", "radius": 1.0, "color": "#BBBBBB", "distance": 0.0, "speed": 0.04 }
            ]
        }"##;
        assert!(matches!(
            SystemCatalog::from_json(json),
            Err(CatalogError::NonPositive { field: "distance", .. })
        ));
    }

    #[test]
    fn inverted_ring_is_rejected() {
        let json = r##"{
            "star": { "name": "Sun", "radius": 6.0, "color": "#FFFF00" },
            "planets": [
                { "name": "Saturn", "radius": 2.4, "color": "#F5E4B7", "distance": 85.0,
                  "speed": 0.007, "ring": { "inner_scale": 2.0, "outer_scale": 1.3 } }
            ]
        }"##;
        assert!(matches!(
            SystemCatalog::from_json(json),
            Err(CatalogError::InvertedRing { .. })
        ));
    }

    #[test]
    fn colors_round_trip_through_json() {
        let json = r##"{
            "star": { "name": "Sun", "radius": 6.0, "color": "#FFFF00" },
            "planets": []
        }"##;
        let catalog = SystemCatalog::from_json(json).unwrap();
        let out = serde_json::to_string(&catalog).unwrap();
        assert!(out.contains("#FFFF00"));
    }
}
