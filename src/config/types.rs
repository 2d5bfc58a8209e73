use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub options: FilterOptions,
}

/// The option lists the filter panel offers.
///
/// Hosts override any subset in `config.toml`; missing fields fall back
/// to the stock storefront catalog below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Category checkbox labels, in display order.
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
    /// Size button labels, in display order.
    #[serde(default = "default_sizes")]
    pub sizes: Vec<String>,
    /// Color swatches, in display order.
    #[serde(default = "default_colors")]
    pub colors: Vec<ColorOption>,
    /// Upper end of the price slider, in whole currency units (default: 1000).
    #[serde(default = "default_price_ceiling")]
    pub price_ceiling: u32,
}

/// A selectable color: the name is the selection key, the swatch is a
/// `#RRGGBB` value used only for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorOption {
    pub name: String,
    pub swatch: String,
}

impl ColorOption {
    pub fn new(name: &str, swatch: &str) -> Self {
        Self {
            name: name.to_string(),
            swatch: swatch.to_string(),
        }
    }

    /// Parses the `#RRGGBB` swatch into RGB components.
    ///
    /// Returns `None` for anything that is not a `#` followed by exactly
    /// six hex digits. Validation rejects such swatches up front; the
    /// renderer falls back to an uncolored marker if one slips through.
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        let hex = self.swatch.strip_prefix('#')?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let value = u32::from_str_radix(hex, 16).ok()?;
        Some(((value >> 16) as u8, (value >> 8) as u8, value as u8))
    }
}

fn default_categories() -> Vec<String> {
    ["Women", "Men", "Shoes", "Accessories"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_sizes() -> Vec<String> {
    ["XS", "S", "M", "L", "XL", "XXL"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_colors() -> Vec<ColorOption> {
    vec![
        ColorOption::new("Black", "#000000"),
        ColorOption::new("White", "#FFFFFF"),
        ColorOption::new("Red", "#EF4444"),
        ColorOption::new("Blue", "#3B82F6"),
        ColorOption::new("Green", "#10B981"),
        ColorOption::new("Yellow", "#F59E0B"),
    ]
}

fn default_price_ceiling() -> u32 {
    1000
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            categories: default_categories(),
            sizes: default_sizes(),
            colors: default_colors(),
            price_ceiling: default_price_ceiling(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            options: FilterOptions::default(),
        }
    }
}
