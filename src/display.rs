//! Text rendering of [`Protein`] queries. Nothing here prints; callers decide
//! where the text goes.

use crate::error::CError;
use crate::map::TopDownMap;
use crate::protein::Protein;

pub const NO_ATOMS_MESSAGE: &str = "No atoms to display.";

/// Header with the protein name and atom count, then one line per atom
pub fn atom_listing(protein: &Protein) -> String {
    let mut out = format!(
        "Protein: {}\nNumber of atoms: {}\n",
        protein.name(),
        protein.size()
    );
    for (i, atom) in protein.iter().enumerate() {
        out.push_str(&format!(
            "Atom {i}: {} at ({:.2}, {:.2}, {:.2})\n",
            atom.name, atom.x, atom.y, atom.z
        ));
    }
    out
}

pub fn distance_table(protein: &Protein, reference: usize) -> Result<String, CError> {
    let distances = protein.distances_from(reference)?;

    let mut out = format!(
        "Distances from atom {reference} ({}):\n",
        protein[reference].name
    );
    for (j, d) in distances {
        out.push_str(&format!("  to atom {j} ({}): {d:.3} Å\n", protein[j].name));
    }
    Ok(out)
}

pub fn neighbor_listing(
    protein: &Protein,
    reference: usize,
    radius: f64,
) -> Result<String, CError> {
    let nearby = protein.find_nearby_atoms(reference, radius)?;

    let mut out = format!(
        "Atoms within {radius:.2} Å of atom {reference} ({}): {}\n",
        protein[reference].name,
        nearby.len()
    );
    for j in nearby {
        out.push_str(&format!("  atom {j} ({})\n", protein[j].name));
    }
    Ok(out)
}

/// The top-down map, or [`NO_ATOMS_MESSAGE`] for an empty protein
pub fn map_view(protein: &Protein, width: usize, height: usize) -> Result<String, CError> {
    let Some(map) = TopDownMap::render(protein, width, height)? else {
        return Ok(format!("{NO_ATOMS_MESSAGE}\n"));
    };
    Ok(format!(
        "Top-down view of {} (X across, Y down, {}x{}):\n{map}",
        protein.name(),
        map.width(),
        map.height()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::sample_protein;
    use crate::map::{DEFAULT_HEIGHT, DEFAULT_WIDTH, MARKER};

    #[test]
    fn listing() {
        let mut protein = Protein::new("pair");
        protein.add_atom("CA", 1.0, 2.0, 3.0);
        protein.add_atom("CB", 4.004, -5.0, 6.25);
        assert_eq!(
            atom_listing(&protein),
            "Protein: pair\nNumber of atoms: 2\n\
             Atom 0: CA at (1.00, 2.00, 3.00)\n\
             Atom 1: CB at (4.00, -5.00, 6.25)\n"
        );
    }

    #[test]
    fn listing_empty() {
        let text = atom_listing(&Protein::new("empty"));
        assert_eq!(text, "Protein: empty\nNumber of atoms: 0\n");
    }

    #[test]
    fn distances() {
        let mut protein = Protein::new("pair");
        protein.add_atom("CA", 1.0, 2.0, 3.0);
        protein.add_atom("CB", 4.0, 5.0, 6.0);
        let text = distance_table(&protein, 0).unwrap();
        assert_eq!(
            text,
            "Distances from atom 0 (CA):\n  to atom 1 (CB): 5.196 Å\n"
        );
        assert!(distance_table(&protein, 2).is_err());
    }

    #[test]
    fn neighbors() {
        let protein = sample_protein();
        let text = neighbor_listing(&protein, 0, 5.0).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("Atoms within 5.00 Å of atom 0 (N): 5")
        );
        assert_eq!(lines.next(), Some("  atom 1 (CA)"));
        assert_eq!(lines.count(), 4);
        assert!(!text.contains("OD"));
    }

    #[test]
    fn map_for_empty_protein() {
        let text = map_view(&Protein::new("empty"), DEFAULT_WIDTH, DEFAULT_HEIGHT).unwrap();
        assert_eq!(text.trim_end(), NO_ATOMS_MESSAGE);
        assert!(!text.contains(MARKER));
    }

    #[test]
    fn map_for_sample() {
        let text = map_view(&sample_protein(), DEFAULT_WIDTH, DEFAULT_HEIGHT).unwrap();
        assert_eq!(text.lines().count(), DEFAULT_HEIGHT + 1);
        assert_eq!(text.matches(MARKER).count(), 7);
    }
}
