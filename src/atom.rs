// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 William Bro-Jørgensen
// Copyright (c) 2020 Guillaume Fraux and contributors
//
// See LICENSE at the project root for full text.

use nalgebra::Point3;

/// A named point in space. Coordinates are conventionally in Angstroms.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Atom {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Atom {
    pub fn new(name: impl Into<String>, x: f64, y: f64, z: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            z,
        }
    }

    pub fn position(&self) -> Point3<f64> {
        Point3::new(self.x, self.y, self.z)
    }

    /// Euclidean distance to `other`
    pub fn distance_to(&self, other: &Atom) -> f64 {
        nalgebra::distance(&self.position(), &other.position())
    }
}
