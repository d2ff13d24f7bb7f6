//! Timing report rendering

/// Time unit all measurements are reported in
pub const TIME_UNIT: &str = "us";

/// Mean time per repetition for one named operation
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    /// Operation name as selected on the command line
    pub name: &'static str,
    /// Arithmetic mean duration per measured repetition, in microseconds
    pub mean_micros: f64,
    /// Reporting unit, always [`TIME_UNIT`]
    pub unit: &'static str,
}

impl Measurement {
    /// Build a measurement in the fixed reporting unit
    pub fn new(name: &'static str, mean_micros: f64) -> Self {
        Self {
            name,
            mean_micros,
            unit: TIME_UNIT,
        }
    }
}

impl std::fmt::Display for Measurement {
    /// Stable line format: `<name> <mean> <unit>`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:.3} {}", self.name, self.mean_micros, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_format_is_three_whitespace_fields() {
        let line = Measurement::new("direct", 0.0417).to_string();
        let fields: Vec<&str> = line.split_whitespace().collect();
        assert_eq!(fields, ["direct", "0.042", "us"]);
    }
}
