use intsim_core::config::Config;
use intsim_core::sim::Simulator;
use intsim_core::soc::DeviceRegistry;
use intsim_core::trace::parse_line;

#[derive(Debug)]
pub struct TestContext {
    pub config: Config,
    vectors: Vec<String>,
    delays: Vec<u64>,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter("intsim_core=debug")
            .try_init();

        Self {
            config: Config::default(),
            vectors: Vec::new(),
            delays: Vec::new(),
        }
    }

    /// Five devices with mixed delays, matching the sample tables.
    pub fn with_sample_devices(self) -> Self {
        self.with_vectors(&["0X01E3", "0X029C", "0X0695", "0X042B", "0X0292"])
            .with_delays(&[110, 150, 50, 250, 300])
    }

    pub fn with_vectors(mut self, vectors: &[&str]) -> Self {
        self.vectors = vectors.iter().map(|v| (*v).to_owned()).collect();
        self
    }

    pub fn with_delays(mut self, delays: &[u64]) -> Self {
        self.delays = delays.to_vec();
        self
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn registry(&self) -> DeviceRegistry {
        DeviceRegistry::new(self.vectors.clone(), self.delays.clone(), &self.config)
    }

    pub fn simulator(&self) -> Simulator {
        Simulator::new(&self.config, self.registry())
    }

    /// Runs `lines` to completion and returns the finished simulator.
    pub fn run(&self, lines: &[&str]) -> Simulator {
        let mut sim = self.simulator();
        sim.run(lines.iter().map(|l| parse_line(l)))
            .expect("test trace should parse");
        sim
    }

    /// Runs `lines` and returns the rendered log.
    pub fn render(&self, lines: &[&str]) -> String {
        self.run(lines).log().render()
    }
}
