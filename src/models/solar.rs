/// Solar form inputs, declared in feature-vector order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolarField {
    Latitude,
    Longitude,
    CloudAmount,
    Zone,
}

impl SolarField {
    pub const ALL: [SolarField; 4] = [
        Self::Latitude,
        Self::Longitude,
        Self::CloudAmount,
        Self::Zone,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Latitude => "Latitude",
            Self::Longitude => "Longitude",
            Self::CloudAmount => "Cloud Amount (%)",
            Self::Zone => "Zone",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Latitude => "e.g., 12.9716",
            Self::Longitude => "e.g., 77.5946",
            Self::CloudAmount => "Cloud coverage (0-100%)",
            Self::Zone => "",
        }
    }
}

/// Climate zone, one-hot encoded in the order listed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Zone {
    #[default]
    Central,
    East,
    North,
    South,
    West,
}

impl Zone {
    pub const ALL: [Zone; 5] = [
        Self::Central,
        Self::East,
        Self::North,
        Self::South,
        Self::West,
    ];

    /// Parse user input case-insensitively, falling back to Central
    pub fn from_input(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "east" => Self::East,
            "north" => Self::North,
            "south" => Self::South,
            "west" => Self::West,
            _ => Self::Central,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Central => "Central",
            Self::East => "East",
            Self::North => "North",
            Self::South => "South",
            Self::West => "West",
        }
    }

    /// Indicator columns [central, east, north, south, west]
    pub fn one_hot(&self) -> [f64; 5] {
        let mut encoded = [0.0; 5];
        encoded[*self as usize] = 1.0;
        encoded
    }
}

/// Raw solar form values as typed by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolarForm {
    values: [String; 4],
}

impl Default for SolarForm {
    fn default() -> Self {
        let mut form = Self {
            values: Default::default(),
        };
        form.set(SolarField::Zone, Zone::Central.as_str());
        form
    }
}

impl SolarForm {
    pub fn get(&self, field: SolarField) -> &str {
        &self.values[field.index()]
    }

    pub fn set(&mut self, field: SolarField, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    pub fn with(mut self, field: SolarField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn zone(&self) -> Zone {
        Zone::from_input(self.get(SolarField::Zone))
    }
}
