pub mod research;

pub mod settings {
    use serde::{Deserialize, Serialize};

    /// Per-million-token prices for the research model.
    ///
    /// The defaults are the published rates for the default model; override
    /// them when pointing at a different model or pricing tier.
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct CostRates {
        pub input_cost_per_million_usd: f64,
        pub output_cost_per_million_usd: f64,
    }

    impl Default for CostRates {
        fn default() -> Self {
            Self {
                input_cost_per_million_usd: 2.00,
                output_cost_per_million_usd: 12.00,
            }
        }
    }

    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct ResearchSettings {
        pub model: String, // e.g., "gemini-2.5-pro"
        #[serde(default)]
        pub rates: CostRates,
        /// Optional cap on the remote call, in seconds. `None` leaves the
        /// call unbounded; a deep research run can take several minutes.
        #[serde(default)]
        pub request_timeout_secs: Option<u64>,
    }

    impl Default for ResearchSettings {
        fn default() -> Self {
            Self {
                model: "gemini-2.5-pro".into(),
                rates: CostRates::default(),
                request_timeout_secs: None,
            }
        }
    }
}
