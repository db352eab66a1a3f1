use crate::atom::Atom;
use crate::error::CError;
use log::debug;
use std::ops::Index;
use std::slice::Iter;

/// Axis-aligned bounding box of a set of atoms
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: [f64; 3],
    pub max: [f64; 3],
}

impl Bounds {
    fn from_atom(atom: &Atom) -> Self {
        let p = [atom.x, atom.y, atom.z];
        Bounds { min: p, max: p }
    }

    fn extend(&mut self, atom: &Atom) {
        for (axis, value) in [atom.x, atom.y, atom.z].into_iter().enumerate() {
            self.min[axis] = self.min[axis].min(value);
            self.max[axis] = self.max[axis].max(value);
        }
    }
}

/// A named, ordered collection of atoms.
///
/// Atoms can only be appended, so an index handed out by [`Protein::add_atom`]
/// stays valid for the lifetime of the protein.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Protein {
    name: String,
    atoms: Vec<Atom>,
}

impl Protein {
    pub fn new(name: impl Into<String>) -> Self {
        Protein {
            name: name.into(),
            atoms: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn get(&self, index: usize) -> Option<&Atom> {
        self.atoms.get(index)
    }

    pub fn iter(&self) -> Iter<'_, Atom> {
        self.atoms.iter()
    }

    pub fn positions(&self) -> Vec<[f64; 3]> {
        self.atoms.iter().map(|a| [a.x, a.y, a.z]).collect()
    }

    /// Append a new atom and return its index
    pub fn add_atom(&mut self, name: impl Into<String>, x: f64, y: f64, z: f64) -> usize {
        self.atoms.push(Atom::new(name, x, y, z));
        self.atoms.len() - 1
    }

    fn checked(&self, index: usize) -> Result<&Atom, CError> {
        self.atoms.get(index).ok_or(CError::InvalidIndex {
            index,
            size: self.size(),
        })
    }

    /// Euclidean distance between the atoms at index `i` and `j`.
    ///
    /// # Errors
    ///
    /// Returns [`CError::InvalidIndex`] if either index is out of bounds.
    pub fn distance(&self, i: usize, j: usize) -> Result<f64, CError> {
        Ok(self.checked(i)?.distance_to(self.checked(j)?))
    }

    /// Distance from `reference` to every other atom, in index order
    pub fn distances_from(&self, reference: usize) -> Result<Vec<(usize, f64)>, CError> {
        let origin = self.checked(reference)?;
        Ok(self
            .atoms
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != reference)
            .map(|(j, atom)| (j, origin.distance_to(atom)))
            .collect())
    }

    /// Indices of the atoms within `max_distance` of `reference`, excluding
    /// `reference` itself, in ascending order.
    ///
    /// # Errors
    ///
    /// Returns [`CError::InvalidIndex`] if `reference` is out of bounds.
    pub fn find_nearby_atoms(
        &self,
        reference: usize,
        max_distance: f64,
    ) -> Result<Vec<usize>, CError> {
        let nearby: Vec<usize> = self
            .distances_from(reference)?
            .into_iter()
            .filter(|&(_, d)| d >= 0.0 && d <= max_distance)
            .map(|(j, _)| j)
            .collect();
        debug!(
            "{} atoms within {max_distance} of atom {reference} in '{}'",
            nearby.len(),
            self.name
        );
        Ok(nearby)
    }

    /// Bounding box of all atoms, `None` for an empty protein
    pub fn bounds(&self) -> Option<Bounds> {
        let (first, rest) = self.atoms.split_first()?;
        let mut bounds = Bounds::from_atom(first);
        for atom in rest {
            bounds.extend(atom);
        }
        Some(bounds)
    }
}

impl Index<usize> for Protein {
    type Output = Atom;

    fn index(&self, index: usize) -> &Self::Output {
        &self.atoms[index]
    }
}

impl<'a> IntoIterator for &'a Protein {
    type Item = &'a Atom;
    type IntoIter = Iter<'a, Atom>;

    fn into_iter(self) -> Self::IntoIter {
        self.atoms.iter()
    }
}
