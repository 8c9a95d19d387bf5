/// A read-only row of the restaurant dataset.
///
/// Rating cells that fail to parse load as `None`; they sink to the bottom of
/// rating comparisons and never match a positive threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
    pub name: String,
    pub cuisine: String,
    pub rating: Option<f64>,
    pub address: String,
    pub local_address: String,
    pub phone: String,
    pub description: String,
}

impl Restaurant {
    /// Rating used for threshold comparisons; missing ratings count as zero.
    pub fn rating_or_zero(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }

    /// Rating as shown to the user (`NA` when missing).
    pub fn rating_label(&self) -> String {
        match self.rating {
            Some(value) => format!("{value:.1}"),
            None => "NA".to_string(),
        }
    }
}
