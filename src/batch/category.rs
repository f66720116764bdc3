use std::fmt;

use crate::chemistry::Role;
use crate::schema::sheets;

/// Input sheet categories of a formulation workbook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Monomers
    Monomers,
    /// Catalysts
    Catalysts,
    /// Inhibitors
    Inhibitors,
    /// Additives
    Additives,
    /// Solvents
    Solvents,
    /// Chemical initiation components
    Initiators,
}

impl Category {
    /// All categories in processing order
    pub const ALL: [Category; 6] = [
        Category::Monomers,
        Category::Catalysts,
        Category::Inhibitors,
        Category::Additives,
        Category::Solvents,
        Category::Initiators,
    ];

    /// Sheet title the category is read from
    pub fn sheet_name(&self) -> &'static str {
        match self {
            Category::Monomers => sheets::MONOMERS,
            Category::Catalysts => sheets::CATALYSTS,
            Category::Inhibitors => sheets::INHIBITORS,
            Category::Additives => sheets::ADDITIVES,
            Category::Solvents => sheets::SOLVENTS,
            Category::Initiators => sheets::CHEMICAL_INITIATION,
        }
    }

    /// Category for a sheet title
    pub fn from_sheet_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.sheet_name() == name)
    }

    /// Prefix of the `<prefix>-inputs` / `<prefix>-procedure` output keys
    pub fn output_prefix(&self) -> &'static str {
        match self {
            Category::Monomers => "monomer",
            Category::Catalysts => "catalyst",
            Category::Inhibitors => "inhibitor",
            Category::Additives => "additive",
            Category::Solvents => "solvent",
            Category::Initiators => "initiator",
        }
    }

    /// Fixed role of the category; initiators infer theirs per row
    pub fn role(&self) -> Option<Role> {
        match self {
            Category::Monomers => Some(Role::Monomer),
            Category::Catalysts => Some(Role::Catalyst),
            Category::Inhibitors => Some(Role::Inhibitor),
            Category::Additives => Some(Role::Additive),
            Category::Solvents => Some(Role::Solvent),
            Category::Initiators => None,
        }
    }

    /// Whether rows of this category may be dosed by volume
    pub fn accepts_volume(&self) -> bool {
        !matches!(self, Category::Catalysts)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sheet_name())
    }
}
