pub struct DefaultsConfig {
    pub spacing: f64,
    pub probe_charge: f64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            spacing: 3.8,
            probe_charge: 1.0,
        }
    }
}
