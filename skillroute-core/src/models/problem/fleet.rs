use rustc_hash::FxHashSet;

/// Represents a vehicle. Vehicles are homogeneous except for their skills.
#[derive(Clone, Debug, Default)]
pub struct Vehicle {
    /// An index of the vehicle in the fleet.
    pub index: usize,
    /// Skills the vehicle has.
    pub skills: FxHashSet<String>,
}

impl Vehicle {
    /// Checks whether the vehicle has all of given skills.
    pub fn has_all_skills<'a>(&self, skills: impl IntoIterator<Item = &'a str>) -> bool {
        skills.into_iter().all(|skill| self.skills.contains(skill))
    }
}

/// Represents a fleet of vehicles.
#[derive(Clone, Debug, Default)]
pub struct Fleet {
    /// All vehicles ordered by their index.
    pub vehicles: Vec<Vehicle>,
}

impl Fleet {
    /// Creates a fleet of `size` vehicles, `skills` returns skills for vehicle index.
    pub fn new(size: usize, mut skills: impl FnMut(usize) -> FxHashSet<String>) -> Self {
        Self { vehicles: (0..size).map(|index| Vehicle { index, skills: skills(index) }).collect() }
    }

    /// Returns amount of vehicles.
    pub fn size(&self) -> usize {
        self.vehicles.len()
    }
}
