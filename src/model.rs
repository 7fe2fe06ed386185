//! Read-only symbol environment and render configuration.
//!
//! The environment is the renderer's narrow view of the model document: a
//! lookup from identifier name to its classification (species, compartment,
//! or unknown). It is built once per document before any rendering and never
//! mutated afterwards, so it can be shared freely across concurrently
//! rendered expressions.

use std::collections::HashMap;

/// What the renderer needs to know about a species.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesInfo {
    /// Machine identifier from the document.
    pub id: String,
    /// Optional human-readable display name.
    pub name: Option<String>,
    /// Whether the species' quantity is a raw amount rather than a
    /// concentration.
    pub has_only_substance_units: bool,
    /// Spatial dimensions of the compartment containing the species.
    pub compartment_dimensions: u32,
}

impl SpeciesInfo {
    /// Create a species with defaults: no display name, concentration
    /// units, three-dimensional compartment.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            has_only_substance_units: false,
            compartment_dimensions: 3,
        }
    }

    /// Set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set whether the species is measured in substance units only.
    pub fn with_substance_units(mut self, flag: bool) -> Self {
        self.has_only_substance_units = flag;
        self
    }

    /// Set the containing compartment's spatial dimensions.
    pub fn with_compartment_dimensions(mut self, dimensions: u32) -> Self {
        self.compartment_dimensions = dimensions;
        self
    }
}

/// What the renderer needs to know about a compartment.
#[derive(Debug, Clone, PartialEq)]
pub struct CompartmentInfo {
    /// Machine identifier from the document.
    pub id: String,
    /// Optional human-readable display name.
    pub name: Option<String>,
    /// Spatial dimensions; selects the size function (volume, area,
    /// length, or point).
    pub spatial_dimensions: u32,
}

impl CompartmentInfo {
    /// Create a three-dimensional compartment with no display name.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            spatial_dimensions: 3,
        }
    }

    /// Set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the spatial dimensions.
    pub fn with_dimensions(mut self, dimensions: u32) -> Self {
        self.spatial_dimensions = dimensions;
        self
    }
}

/// Classification of an identifier against the model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Symbol<'a> {
    /// The identifier names a species.
    Species(&'a SpeciesInfo),
    /// The identifier names a compartment.
    Compartment(&'a CompartmentInfo),
    /// Not found in the model (parameters, local variables, and anything
    /// else render as plain identifiers).
    Unknown,
}

/// Read-only lookup from identifier name to classification.
///
/// Build it with [`add_species`](SymbolEnvironment::add_species) and
/// [`add_compartment`](SymbolEnvironment::add_compartment) before rendering
/// starts; rendering only ever calls [`resolve`](SymbolEnvironment::resolve).
#[derive(Debug, Clone, Default)]
pub struct SymbolEnvironment {
    species: HashMap<String, SpeciesInfo>,
    compartments: HashMap<String, CompartmentInfo>,
}

impl SymbolEnvironment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a species under its machine id.
    pub fn add_species(&mut self, info: SpeciesInfo) {
        self.species.insert(info.id.clone(), info);
    }

    /// Register a compartment under its machine id.
    pub fn add_compartment(&mut self, info: CompartmentInfo) {
        self.compartments.insert(info.id.clone(), info);
    }

    /// Classify an identifier. Species take precedence over compartments
    /// (ids are unique in a well-formed document, so the order only matters
    /// for malformed input).
    pub fn resolve(&self, name: &str) -> Symbol<'_> {
        if let Some(info) = self.species.get(name) {
            return Symbol::Species(info);
        }
        if let Some(info) = self.compartments.get(name) {
            return Symbol::Compartment(info);
        }
        Symbol::Unknown
    }
}

/// Per-call rendering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Prefer display names over machine ids when a name exists.
    pub prefer_names: bool,
    /// Set machine ids in typewriter type.
    pub typewriter_ids: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            prefer_names: false,
            typewriter_ids: true,
        }
    }
}
