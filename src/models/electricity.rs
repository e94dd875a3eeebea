/// Electricity form inputs, declared in feature-vector order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElectricityField {
    Fan,
    Refrigerator,
    AirConditioner,
    Television,
    Monitor,
    MotorPump,
    Month,
    MonthlyHours,
    TariffRate,
}

impl ElectricityField {
    pub const ALL: [ElectricityField; 9] = [
        Self::Fan,
        Self::Refrigerator,
        Self::AirConditioner,
        Self::Television,
        Self::Monitor,
        Self::MotorPump,
        Self::Month,
        Self::MonthlyHours,
        Self::TariffRate,
    ];

    /// Position of this field in the feature vector
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Household appliance counts come before the usage details
    pub fn is_appliance(&self) -> bool {
        self.index() < Self::Month.index()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Fan => "Fan (count)",
            Self::Refrigerator => "Refrigerator (count)",
            Self::AirConditioner => "Air Conditioner (count)",
            Self::Television => "Television (count)",
            Self::Monitor => "Monitor (count)",
            Self::MotorPump => "Motor Pump (count)",
            Self::Month => "Month (1-12)",
            Self::MonthlyHours => "Monthly Hours of Usage",
            Self::TariffRate => "Tariff Rate (₹/kWh)",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Fan => "Number of Fans",
            Self::Refrigerator => "Number of Refrigerators",
            Self::AirConditioner => "Number of ACs",
            Self::Television => "Number of TVs",
            Self::Monitor => "Number of Monitors",
            Self::MotorPump => "Number of Motor Pumps",
            Self::Month => "e.g., 1 for Jan, 12 for Dec",
            Self::MonthlyHours => "Total hours per month",
            Self::TariffRate => "Electricity tariff rate",
        }
    }
}

/// Raw electricity form values as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElectricityForm {
    values: [String; 9],
}

impl ElectricityForm {
    pub fn get(&self, field: ElectricityField) -> &str {
        &self.values[field.index()]
    }

    pub fn set(&mut self, field: ElectricityField, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    /// Builder-style setter
    pub fn with(mut self, field: ElectricityField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_are_in_feature_order() {
        for (i, field) in ElectricityField::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
        }
        assert_eq!(ElectricityField::TariffRate.index(), 8);
    }

    #[test]
    fn test_appliance_fields() {
        let appliances: Vec<_> = ElectricityField::ALL
            .iter()
            .filter(|f| f.is_appliance())
            .collect();
        assert_eq!(appliances.len(), 6);
        assert!(!ElectricityField::Month.is_appliance());
    }

    #[test]
    fn test_form_set_and_get() {
        let form = ElectricityForm::default()
            .with(ElectricityField::Fan, "3")
            .with(ElectricityField::TariffRate, "7.5");

        assert_eq!(form.get(ElectricityField::Fan), "3");
        assert_eq!(form.get(ElectricityField::TariffRate), "7.5");
        assert_eq!(form.get(ElectricityField::Monitor), "");
    }
}
