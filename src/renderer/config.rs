//! Configuration for SVG rendering

/// Configuration options for SVG output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgConfig {
    /// Whether to include the XML declaration
    pub standalone: bool,

    /// Whether to format output with indentation
    pub pretty_print: bool,

    /// Maximum decimal places for coordinates
    pub precision: usize,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            standalone: true,
            pretty_print: true,
            precision: 4,
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether output is standalone
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set the coordinate precision
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Format a number with at most `precision` decimals and no trailing zeros
    pub fn fmt_num(&self, value: f64) -> String {
        fmt_num(value, self.precision)
    }
}

/// Format a number with at most `precision` decimals and no trailing zeros
pub fn fmt_num(value: f64, precision: usize) -> String {
    let s = format!("{:.*}", precision, value);
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s.as_str()
    };
    // rounding can leave "-0"
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SvgConfig::default();
        assert!(config.standalone);
        assert!(config.pretty_print);
        assert_eq!(config.precision, 4);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SvgConfig::new()
            .with_standalone(false)
            .with_pretty_print(false)
            .with_precision(2);

        assert!(!config.standalone);
        assert!(!config.pretty_print);
        assert_eq!(config.precision, 2);
    }

    #[test]
    fn test_fmt_num() {
        assert_eq!(fmt_num(3.95, 4), "3.95");
        assert_eq!(fmt_num(1.0, 4), "1");
        assert_eq!(fmt_num(0.246875, 4), "0.2469");
        assert_eq!(fmt_num(-0.00001, 4), "0");
        assert_eq!(fmt_num(12.0, 0), "12");
    }
}
