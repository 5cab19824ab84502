pub struct VisualizerConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Log every platform event at debug level.
    pub debug: bool,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            title: "Visualizer".to_string(),
            width: 800,
            height: 800,
            debug: false,
        }
    }
}
