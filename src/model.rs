//! Element records and the static periodic-table dataset.
//! The dataset is embedded at compile time and validated once at startup.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::rc::Rc;
use thiserror::Error;

/// Columns of the periodic-table grid (groups 1..=18).
pub const GRID_COLUMNS: u32 = 18;
/// Rows of the grid: seven periods, a spacer row, then the lanthanide and actinide rows.
pub const GRID_ROWS: u32 = 10;

const ELEMENTS_JSON: &str = include_str!("data/elements.json");

/// The closed set of element families used for colouring and filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Nonmetal,
    NobleGas,
    AlkaliMetal,
    AlkalineEarthMetal,
    Metalloid,
    PostTransitionMetal,
    TransitionMetal,
    Lanthanide,
    Actinide,
    Halogen,
}

impl Category {
    /// Legend order.
    pub const ALL: [Category; 10] = [
        Category::Nonmetal,
        Category::NobleGas,
        Category::AlkaliMetal,
        Category::AlkalineEarthMetal,
        Category::Metalloid,
        Category::PostTransitionMetal,
        Category::TransitionMetal,
        Category::Lanthanide,
        Category::Actinide,
        Category::Halogen,
    ];

    /// Wire tag as it appears in the dataset (`"noble-gas"`).
    pub fn tag(self) -> &'static str {
        match self {
            Category::Nonmetal => "nonmetal",
            Category::NobleGas => "noble-gas",
            Category::AlkaliMetal => "alkali-metal",
            Category::AlkalineEarthMetal => "alkaline-earth-metal",
            Category::Metalloid => "metalloid",
            Category::PostTransitionMetal => "post-transition-metal",
            Category::TransitionMetal => "transition-metal",
            Category::Lanthanide => "lanthanide",
            Category::Actinide => "actinide",
            Category::Halogen => "halogen",
        }
    }

    pub fn parse(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.tag() == tag)
    }

    /// Display label: the tag with hyphens read as spaces.
    pub fn label(self) -> &'static str {
        match self {
            Category::Nonmetal => "nonmetal",
            Category::NobleGas => "noble gas",
            Category::AlkaliMetal => "alkali metal",
            Category::AlkalineEarthMetal => "alkaline earth metal",
            Category::Metalloid => "metalloid",
            Category::PostTransitionMetal => "post transition metal",
            Category::TransitionMetal => "transition metal",
            Category::Lanthanide => "lanthanide",
            Category::Actinide => "actinide",
            Category::Halogen => "halogen",
        }
    }
}

/// One chemical element. Never mutated after load.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ElementRecord {
    pub atomic_number: u32,
    pub symbol: String,
    pub name: String,
    /// Standard atomic weight, or the mass number of the longest-lived isotope.
    pub atomic_mass: f64,
    /// Pauling scale; absent for most noble gases.
    pub electronegativity: Option<f64>,
    /// Picometres.
    pub atomic_radius: Option<f64>,
    /// First ionization energy in eV.
    pub ionization_energy: Option<f64>,
    /// g/cm³.
    pub density: Option<f64>,
    /// Kelvin.
    pub melting_point: Option<f64>,
    /// Kelvin.
    pub boiling_point: Option<f64>,
    pub electron_configuration: String,
    /// Comma-separated names; empty when the discoverer is unknown.
    pub discovered_by: String,
    pub category: Category,
    pub description: String,
    pub xpos: u32,
    pub ypos: u32,
}

impl ElementRecord {
    pub fn discoverers(&self) -> impl Iterator<Item = &str> {
        self.discovered_by
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("dataset contains no elements")]
    Empty,
    #[error("element {symbol} has atomic number 0")]
    InvalidAtomicNumber { symbol: String },
    #[error("atomic number {found} follows {previous}; records must be strictly increasing")]
    OutOfOrder { previous: u32, found: u32 },
    #[error("grid cell ({xpos}, {ypos}) is used by both {first} and {second}")]
    DuplicateCell {
        xpos: u32,
        ypos: u32,
        first: u32,
        second: u32,
    },
    #[error("element {atomic_number} sits outside the 18x10 grid at ({xpos}, {ypos})")]
    CellOutOfBounds {
        atomic_number: u32,
        xpos: u32,
        ypos: u32,
    },
}

/// Read-only table of elements in atomic-number order, indexed by number and grid cell.
#[derive(Debug)]
pub struct Dataset {
    elements: Vec<Rc<ElementRecord>>,
    by_cell: HashMap<(u32, u32), usize>,
}

impl Dataset {
    /// Parse and validate the bundled element table.
    pub fn load() -> Result<Self, DatasetError> {
        Self::from_json(ELEMENTS_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let records: Vec<ElementRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    pub fn from_records(records: Vec<ElementRecord>) -> Result<Self, DatasetError> {
        if records.is_empty() {
            return Err(DatasetError::Empty);
        }
        let mut by_cell = HashMap::with_capacity(records.len());
        let mut previous: Option<u32> = None;
        for (idx, rec) in records.iter().enumerate() {
            if rec.atomic_number == 0 {
                return Err(DatasetError::InvalidAtomicNumber {
                    symbol: rec.symbol.clone(),
                });
            }
            // Strictly increasing order also rules out duplicate atomic numbers.
            if let Some(prev) = previous {
                if rec.atomic_number <= prev {
                    return Err(DatasetError::OutOfOrder {
                        previous: prev,
                        found: rec.atomic_number,
                    });
                }
            }
            previous = Some(rec.atomic_number);
            if !(1..=GRID_COLUMNS).contains(&rec.xpos) || !(1..=GRID_ROWS).contains(&rec.ypos) {
                return Err(DatasetError::CellOutOfBounds {
                    atomic_number: rec.atomic_number,
                    xpos: rec.xpos,
                    ypos: rec.ypos,
                });
            }
            if let Some(&other) = by_cell.get(&(rec.xpos, rec.ypos)) {
                let first: &ElementRecord = &records[other];
                return Err(DatasetError::DuplicateCell {
                    xpos: rec.xpos,
                    ypos: rec.ypos,
                    first: first.atomic_number,
                    second: rec.atomic_number,
                });
            }
            by_cell.insert((rec.xpos, rec.ypos), idx);
        }
        Ok(Self {
            elements: records.into_iter().map(Rc::new).collect(),
            by_cell,
        })
    }

    /// All records in atomic-number order.
    pub fn all(&self) -> &[Rc<ElementRecord>] {
        &self.elements
    }

    pub fn get(&self, atomic_number: u32) -> Option<&Rc<ElementRecord>> {
        self.elements
            .binary_search_by_key(&atomic_number, |e| e.atomic_number)
            .ok()
            .map(|idx| &self.elements[idx])
    }

    /// Element occupying the 1-indexed grid cell, if any.
    pub fn at(&self, xpos: u32, ypos: u32) -> Option<&Rc<ElementRecord>> {
        self.by_cell.get(&(xpos, ypos)).map(|&idx| &self.elements[idx])
    }

    /// Records row by row, left to right, which is the order the table renders them in.
    pub fn in_reading_order(&self) -> impl Iterator<Item = &Rc<ElementRecord>> {
        (1..=GRID_ROWS).flat_map(move |y| (1..=GRID_COLUMNS).filter_map(move |x| self.at(x, y)))
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Rc<ElementRecord>> {
        self.all().iter().filter(move |e| e.category == category)
    }

    pub fn contains(&self, atomic_number: u32) -> bool {
        self.get(atomic_number).is_some()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }
}

#[cfg(test)]
impl ElementRecord {
    pub(crate) fn stub(atomic_number: u32, symbol: &str, category: Category, xpos: u32, ypos: u32) -> Self {
        Self {
            atomic_number,
            symbol: symbol.to_string(),
            name: symbol.to_string(),
            atomic_mass: atomic_number as f64 * 2.0,
            electronegativity: None,
            atomic_radius: None,
            ionization_energy: None,
            density: None,
            melting_point: None,
            boiling_point: None,
            electron_configuration: String::new(),
            discovered_by: String::new(),
            category,
            description: String::new(),
            xpos,
            ypos,
        }
    }
}
