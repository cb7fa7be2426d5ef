pub mod batch;
pub mod diagram;
pub mod report;

use clap::Args;

/// The four scale readings, as typed.
#[derive(Args, Debug, Clone)]
pub struct Readings {
    /// Front-left
    #[arg(allow_hyphen_values = true)]
    pub fl: String,
    /// Front-right
    #[arg(allow_hyphen_values = true)]
    pub fr: String,
    /// Rear-left
    #[arg(allow_hyphen_values = true)]
    pub rl: String,
    /// Rear-right
    #[arg(allow_hyphen_values = true)]
    pub rr: String,
}

impl Readings {
    pub fn as_fields(&self) -> [&str; 4] {
        [&self.fl, &self.fr, &self.rl, &self.rr]
    }
}
